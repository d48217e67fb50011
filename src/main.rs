//! Prinbox CLI entrypoint: lists unread pull request notifications.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use prinbox::{PrinboxConfig, TriageError};
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), TriageError> {
    let config = load_config()?;
    cli::unread_pull_requests::run(&config).await
}

/// Installs a stderr log subscriber filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ignored = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`TriageError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<PrinboxConfig, TriageError> {
    PrinboxConfig::load().map_err(|error| TriageError::Configuration {
        message: error.to_string(),
    })
}
