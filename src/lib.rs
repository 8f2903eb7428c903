//! Shift Calendar Engine
//!
//! This crate resolves staff shift calendars: for each staff member and
//! calendar day it decides whether the day is a public holiday, which shift
//! category applies, or that no shift is scheduled. It also provides the
//! YAML configuration loader and an HTTP API around the resolver.

#![warn(missing_docs)]

pub mod api;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
