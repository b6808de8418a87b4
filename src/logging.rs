//! Diagnostic logging for the CLI.
//!
//! Logs go to stderr so command output on stdout stays clean. `RUST_LOG`
//! takes precedence over the verbosity flag when set.

use crate::error::{LandmarksError, Result};
use flexi_logger::{Logger, LoggerHandle};

/// Map `-v` occurrences to a log level spec
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Start stderr logging. Keep the returned handle alive for the life of the
/// process.
pub fn init_logging(verbosity: u8) -> Result<LoggerHandle> {
    Logger::try_with_env_or_str(level_for(verbosity))
        .and_then(|logger| logger.log_to_stderr().start())
        .map_err(|e| LandmarksError::Config(format!("failed to start logger: {}", e)))
}
