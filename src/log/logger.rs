use std::{
    io::Write,
    sync::{Mutex, PoisonError},
};

use crate::log::{
    config::{Config, FatalAction},
    log_level::LogLevel,
    log_sink::LogSink,
};

/// Synchronous console logger.
///
/// Every line has the shape `<prefix>\t  <message>\n`, where the prefix is
/// `[NAME]` or its colorized form depending on [`Config::color`]. Each call
/// writes and flushes one whole line before returning; the sink is locked per
/// line so concurrent callers never interleave within a line.
///
/// Write errors are ignored. A logger has no level threshold: every call is
/// written.
pub struct Logger {
    color: bool,
    fatal_action: FatalAction,
    out: Mutex<Box<dyn Write + Send>>,
}

impl Logger {
    #[must_use]
    pub fn new(config: Config) -> Self {
        let Config {
            color,
            fatal_action,
            out,
        } = config;
        Self {
            color,
            fatal_action,
            out: Mutex::new(out),
        }
    }

    #[must_use]
    pub const fn color(&self) -> bool {
        self.color
    }

    /// Renders the full output line, trailing newline included.
    #[must_use]
    pub fn format_line(&self, level: LogLevel, msg: &str) -> String {
        format!("{}\t  {msg}\n", level.prefix(self.color))
    }

    pub(crate) fn flush_output(&self) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = out.flush();
    }
}

impl LogSink for Logger {
    fn emit(&self, level: LogLevel, msg: &str) {
        let line = self.format_line(level, msg);
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = out.write_all(line.as_bytes());
        let _ = out.flush();
    }

    fn run_fatal_action(&self) {
        (self.fatal_action)();
    }
}
