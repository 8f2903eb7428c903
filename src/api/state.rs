//! Application state for the Shift Calendar Engine API.
//!
//! Reference data is held as an immutable [`ReferenceData`] snapshot behind
//! an `Arc`. Readers take a clone of the current `Arc` and resolve against
//! it without holding the lock; updates build a new snapshot and swap it in.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{FixedOffset, Weekday};

use crate::calendar::ReferenceData;
use crate::config::ConfigLoader;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The current reference-data snapshot.
    reference: Arc<RwLock<Arc<ReferenceData>>>,
    /// Local UTC offset for converting instants to calendar days.
    utc_offset: FixedOffset,
    /// First day of the week in month grids.
    week_start: Weekday,
}

impl AppState {
    /// Creates the application state from loaded configuration.
    pub fn new(config: &ConfigLoader) -> Self {
        Self::from_parts(
            config.reference_data(),
            config.utc_offset(),
            config.week_start(),
        )
    }

    /// Creates the application state from its parts.
    pub fn from_parts(reference: ReferenceData, utc_offset: FixedOffset, week_start: Weekday) -> Self {
        Self {
            reference: Arc::new(RwLock::new(Arc::new(reference))),
            utc_offset,
            week_start,
        }
    }

    /// Returns the current reference-data snapshot.
    pub fn snapshot(&self) -> Arc<ReferenceData> {
        let guard = self.reference.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Builds a new snapshot from the current one and swaps it in.
    ///
    /// The write lock is held while `rebuild` runs so concurrent updates
    /// are applied one after the other.
    pub fn update<F>(&self, rebuild: F) -> Arc<ReferenceData>
    where
        F: FnOnce(&ReferenceData) -> ReferenceData,
    {
        let mut guard = self.reference.write().unwrap_or_else(PoisonError::into_inner);
        let next = Arc::new(rebuild(&**guard));
        *guard = Arc::clone(&next);
        next
    }

    /// Returns the local UTC offset.
    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset
    }

    /// Returns the first day of the week for month grids.
    pub fn week_start(&self) -> Weekday {
        self.week_start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{HolidayIndex, ShiftMap};

    fn state() -> AppState {
        AppState::from_parts(
            ReferenceData::default(),
            FixedOffset::east_opt(0).unwrap(),
            Weekday::Mon,
        )
    }

    #[test]
    fn test_app_state_is_clone() {
        // Required for axum state
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_update_swaps_snapshot_without_touching_held_copy() {
        let state = state();
        let before = state.snapshot();

        state.update(|data| data.with_holidays(HolidayIndex::empty(2024)));

        assert!(before.holidays(2024).is_none());
        assert!(state.snapshot().holidays(2024).is_some());
    }

    #[test]
    fn test_clones_share_snapshot() {
        let state = state();
        let other = state.clone();

        other.update(|data| data.with_shifts(ShiftMap::default()));
        state.update(|data| data.with_holidays(HolidayIndex::empty(2025)));

        assert_eq!(other.snapshot().years(), vec![2025]);
    }
}
