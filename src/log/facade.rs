//! Bridge to the `log` crate facade, so dependencies that log through
//! `log::info!` and friends end up in the same line format.

use ::log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::log::{log_level::LogLevel, log_sink::LogSink, logger::Logger};

/// `log` has no fatal level and one more verbose level than we do.
#[must_use]
pub const fn level_from_facade(level: Level) -> LogLevel {
    match level {
        Level::Error => LogLevel::Error,
        Level::Warn => LogLevel::Warn,
        Level::Info => LogLevel::Info,
        Level::Debug | Level::Trace => LogLevel::Debug,
    }
}

impl Log for Logger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let msg = record.args().to_string();
        LogSink::emit(self, level_from_facade(record.level()), &msg);
    }

    fn flush(&self) {
        self.flush_output();
    }
}

/// Installs `logger` as the global `log` backend with every level enabled.
///
/// Records never run the fatal action.
///
/// # Errors
///
/// Fails if a `log` backend was already installed in this process.
pub fn init(logger: Logger) -> Result<(), SetLoggerError> {
    ::log::set_boxed_logger(Box::new(logger))?;
    ::log::set_max_level(LevelFilter::Trace);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::{config::Config, shared_buffer::SharedBuffer};

    #[test]
    fn maps_every_facade_level() {
        assert_eq!(level_from_facade(Level::Error), LogLevel::Error);
        assert_eq!(level_from_facade(Level::Warn), LogLevel::Warn);
        assert_eq!(level_from_facade(Level::Info), LogLevel::Info);
        assert_eq!(level_from_facade(Level::Debug), LogLevel::Debug);
        assert_eq!(level_from_facade(Level::Trace), LogLevel::Debug);
    }

    #[test]
    fn records_render_like_direct_calls() {
        let out = SharedBuffer::new();
        let logger = Logger::new(Config::new(out.clone()).with_color(false));

        Log::log(
            &logger,
            &Record::builder()
                .level(Level::Trace)
                .args(format_args!("from {}", "facade"))
                .build(),
        );
        assert_eq!(out.contents(), "[DEBUG]\t  from facade\n");
    }
}
