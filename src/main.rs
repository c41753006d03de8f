//! ghpx - npx wrapper for scoped registry packages
//!
//! CLI entry point that hands raw arguments to the dispatcher.

use ghpx::config::ConfigManager;
use ghpx::dispatch::{exit_code, Dispatcher};
use ghpx::error::{GhpxError, GhpxResult};
use ghpx::process::SystemRunner;
use ghpx::ui;
use std::ffi::OsString;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Log filter (EnvFilter syntax)
const LOG_ENV: &str = "GHPX_LOG";
/// Set to `json` for JSON log lines
const LOG_FORMAT_ENV: &str = "GHPX_LOG_FORMAT";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_logging();

    match run().await {
        Ok(code) => exit_code(code),
        Err(GhpxError::Usage(e)) => e.exit(),
        Err(e) => {
            ui::error(&e.to_string());
            if let Some(hint) = e.hint() {
                ui::hint(hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> GhpxResult<i32> {
    let raw: Vec<OsString> = std::env::args_os().skip(1).collect();

    let config_manager = ConfigManager::new();
    debug!("Loading config from {}", config_manager.path().display());
    let config = config_manager.load().await?;

    let runner = SystemRunner::new();
    Dispatcher::new(&config, &runner).dispatch(&raw).await
}

/// Logs go to stderr so stdout stays with the child process
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("ghpx=warn"));

    let json = std::env::var(LOG_FORMAT_ENV).is_ok_and(|f| f.eq_ignore_ascii_case("json"));
    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .init();
    }
}
