//! Structured logging setup using tracing
//!
//! Log output goes to stderr so that command output on stdout (for example a
//! JSON snapshot) stays machine readable.
//!
//! # Example
//!
//! ```no_run
//! use envcheck::logging::init_logging;
//!
//! init_logging("info", false).expect("Failed to initialize logging");
//! tracing::info!("Application started");
//! ```

use crate::domain::{EnvCheckError, Result};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Initialize the logging system
///
/// `RUST_LOG` takes precedence over `log_level_str` when it is set.
///
/// # Arguments
///
/// * `log_level_str` - Log level as a string (trace, debug, info, warn, error)
/// * `json` - Emit JSON lines instead of human readable text
///
/// # Errors
///
/// Returns an error if the level is invalid or a global subscriber is already set.
pub fn init_logging(log_level_str: &str, json: bool) -> Result<()> {
    let log_level = parse_log_level(log_level_str)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("envcheck={log_level}")));

    let layer = if json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_writer(std::io::stderr)
            .with_filter(env_filter)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr)
            .with_filter(env_filter)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .map_err(|e| {
            EnvCheckError::Configuration(format!("Failed to initialize logging: {e}"))
        })?;

    tracing::debug!(level = %log_level, json, "Logging initialized");
    Ok(())
}

/// Parse log level from string
pub(crate) fn parse_log_level(level_str: &str) -> Result<Level> {
    match level_str.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(EnvCheckError::Configuration(format!(
            "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
            level_str
        ))),
    }
}
