//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use ooinstall::config::ConfigError;
use serde::Serialize;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - unreadable file, invalid YAML or host, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Write error (exit code 2) - config file or inventory directory not writable.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn write_error() -> ExitCode {
        ExitCode::from(2)
    }

    /// Picks the exit code for a configuration error.
    pub fn for_error(error: &ooinstall::config::ConfigError) -> ExitCode {
        if error.is_write_error() {
            write_error()
        } else {
            CONFIG_ERROR
        }
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::Parse { .. } | ConfigError::Schema { .. } | ConfigError::InvalidHost { .. } => {
            eprintln!("\nFix the config file or pass a different one with --config.");
        }
        ConfigError::NoConfigHome => {
            eprintln!("\nSet XDG_CONFIG_HOME or pass the config file with --config.");
        }
        _ => {}
    }
}

/// Renders command output as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`ConfigError::Json`] if the value cannot be represented as JSON.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ConfigError> {
    serde_json::to_string_pretty(value).map_err(ConfigError::Json)
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr so command output on stdout stays machine-readable.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
