//! Structured logging setup using tracing
//!
//! # Example
//!
//! ```no_run
//! nameveil::logging::init_logging("info").expect("Failed to initialize logging");
//!
//! tracing::info!("ready");
//! ```

use crate::error::{Error, Result};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Initialize console logging
///
/// Respects `RUST_LOG` when set; otherwise filters to the given level for
/// this crate. Can only be called once per process.
pub fn init_logging(log_level_str: &str) -> Result<()> {
    let log_level = parse_log_level(log_level_str)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("nameveil={log_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
        .map_err(|e| Error::Configuration(format!("Failed to initialize logging: {e}")))?;

    Ok(())
}

/// Parse log level from string
fn parse_log_level(level_str: &str) -> Result<Level> {
    match level_str.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::Configuration(format!(
            "Invalid log level: {level_str}. Must be one of: trace, debug, info, warn, error"
        ))),
    }
}
