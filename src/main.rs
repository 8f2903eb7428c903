//! HTTP server for the Shift Calendar Engine.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use shift_calendar_engine::api::{AppState, create_router};
use shift_calendar_engine::config::ConfigLoader;

/// Serve staff shift calendars over HTTP.
#[derive(Debug, Parser)]
#[command(name = "shift-calendar-engine", version, about)]
struct Args {
    /// Directory containing calendar.yaml, shift_categories.yaml and holidays/.
    #[arg(long, default_value = "./config/default")]
    config: PathBuf,

    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = match ConfigLoader::load(&args.config) {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, path = %args.config.display(), "Failed to load configuration");
            return std::process::ExitCode::FAILURE;
        }
    };
    info!(
        calendar = %config.settings().name,
        shift_categories = config.shift_categories().len(),
        "Configuration loaded"
    );

    let router = create_router(AppState::new(&config));

    let listener = match tokio::net::TcpListener::bind(args.bind).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(error = %err, bind = %args.bind, "Failed to bind");
            return std::process::ExitCode::FAILURE;
        }
    };
    info!(bind = %args.bind, "Listening");

    if let Err(err) = axum::serve(listener, router).await {
        error!(error = %err, "Server error");
        return std::process::ExitCode::FAILURE;
    }
    std::process::ExitCode::SUCCESS
}
