//! Logging bootstrap.
//!
//! Library code only talks to the `log` facade. The binary calls
//! [`init_logging`] once to route records to stderr through `flexi_logger`.
//! The `SHELF_LOG` environment variable overrides the requested level.

use crate::error::{Result, ShelfError};
use flexi_logger::{Logger, LoggerHandle};
use log::debug;
use once_cell::sync::OnceCell;

pub const LOG_ENV: &str = "SHELF_LOG";
pub const DEFAULT_LEVEL: &str = "warn";

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Start the stderr logger. Calling it again after a successful start is a no-op.
pub fn init_logging(level: &str) -> Result<()> {
    let level = normalize_level(&requested_level(std::env::var(LOG_ENV).ok(), level))?;

    LOGGER.get_or_try_init(|| -> Result<LoggerHandle> {
        let handle = Logger::try_with_str(level)
            .map_err(|e| ShelfError::Config(format!("invalid log level `{}`: {}", level, e)))?
            .log_to_stderr()
            .format(flexi_logger::default_format)
            .start()
            .map_err(|e| ShelfError::Config(format!("failed to start logger: {}", e)))?;
        debug!("logging started at level {}", level);
        Ok(handle)
    })?;
    Ok(())
}

/// `SHELF_LOG` wins unless it is unset or empty.
fn requested_level(env_level: Option<String>, level: &str) -> String {
    env_level
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| level.to_string())
}

fn normalize_level(level: &str) -> Result<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => Ok("off"),
        "error" => Ok("error"),
        "warn" | "warning" => Ok("warn"),
        "info" => Ok("info"),
        "debug" => Ok("debug"),
        "trace" => Ok("trace"),
        other => Err(ShelfError::Config(format!(
            "unsupported log level `{}`",
            other
        ))),
    }
}
