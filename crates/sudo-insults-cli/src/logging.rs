//! Console logging setup.

use std::io::Write;

use flexi_logger::{style, DeferredNow, FlexiLoggerError, LogSpecification, Logger, LoggerHandle};
use log::LevelFilter;

/// Start logging to stderr. The returned handle must stay alive.
pub fn init(verbosity: u8) -> Result<LoggerHandle, FlexiLoggerError> {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let spec = LogSpecification::builder().default(level).build();

    Logger::with(spec)
        .log_to_stderr()
        .format(format_log_entry)
        .start()
}

/// Formats a log entry with color
fn format_log_entry(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &log::Record,
) -> std::io::Result<()> {
    let level = record.level();
    write!(
        w,
        "[ {} ] {} {}",
        style(level).paint(level.to_string()),
        now.now().format("%H:%M:%S"),
        record.args()
    )
}
