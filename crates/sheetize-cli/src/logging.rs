//! Logger setup for the `sheetize` binary.

use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};

/// Log specification for a `-v` count.
pub fn log_spec(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Start logging to stderr. `RUST_LOG` takes precedence over `verbose`.
///
/// The returned handle must be kept alive for the life of the program.
pub fn init(verbose: u8) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(log_spec(verbose))?
        .log_to_stderr()
        .start()
}
