use crate::log::{log_level::LogLevel, log_sink::LogSink};

/// Discards every line, including the fatal action.
#[derive(Debug, Clone, Default)]
pub struct NoopLogSink;

impl LogSink for NoopLogSink {
    #[inline]
    fn emit(&self, _level: LogLevel, _msg: &str) {}

    #[inline]
    fn run_fatal_action(&self) {}
}
