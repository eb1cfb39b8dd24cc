//! Leveled logging macros using Rust `format!` syntax.
//!
//! `logger_*!` take an explicit logger as first argument: a reference or
//! smart pointer to a [`LogSink`](crate::log::log_sink::LogSink) (`&Logger`,
//! `&dyn LogSink`, `Arc<dyn LogSink>`, ...). `log_*!` go through the
//! process-wide default logger.
//!
//! The `*_fatal!` forms run the fatal action after the line is written.

// ============================================================================
// 1. EXPLICIT LOGGER
// ============================================================================

#[macro_export]
macro_rules! logger_log {
    ($logger:expr, $lvl:expr, $($arg:tt)*) => {{
        let __msg = format!($($arg)*);
        $crate::log::log_sink::LogSink::emit(&*$crate::__sink_ref!($logger), $lvl, &__msg);
    }};
}

#[macro_export]
macro_rules! logger_debug { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Debug, $($arg)*) } }
#[macro_export]
macro_rules! logger_info  { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Info, $($arg)*) } }
#[macro_export]
macro_rules! logger_warn  { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Warn, $($arg)*) } }
#[macro_export]
macro_rules! logger_error { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Error, $($arg)*) } }

#[macro_export]
macro_rules! logger_fatal {
    ($logger:expr, $($arg:tt)*) => {{
        let __sink = $crate::__sink_ref!($logger);
        $crate::logger_log!(__sink, $crate::log::log_level::LogLevel::Fatal, $($arg)*);
        $crate::log::log_sink::LogSink::run_fatal_action(&*__sink);
    }};
}

/// Borrows the logger expression once as `&dyn LogSink`.
#[doc(hidden)]
#[macro_export]
macro_rules! __sink_ref {
    ($logger:expr) => {{
        let __sink: &dyn $crate::log::log_sink::LogSink = &*$logger;
        __sink
    }};
}

// ============================================================================
// 2. DEFAULT LOGGER
// ============================================================================

#[macro_export]
macro_rules! log_at {
    ($lvl:expr, $($arg:tt)*) => {{
        let __logger = $crate::log::default_logger::default_logger();
        $crate::logger_log!(__logger, $lvl, $($arg)*);
    }};
}

#[macro_export]
macro_rules! log_debug { ($($arg:tt)*) => { $crate::log_at!($crate::log::log_level::LogLevel::Debug, $($arg)*) } }
#[macro_export]
macro_rules! log_info  { ($($arg:tt)*) => { $crate::log_at!($crate::log::log_level::LogLevel::Info, $($arg)*) } }
#[macro_export]
macro_rules! log_warn  { ($($arg:tt)*) => { $crate::log_at!($crate::log::log_level::LogLevel::Warn, $($arg)*) } }
#[macro_export]
macro_rules! log_error { ($($arg:tt)*) => { $crate::log_at!($crate::log::log_level::LogLevel::Error, $($arg)*) } }

#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)*) => {{
        let __logger = $crate::log::default_logger::default_logger();
        $crate::logger_fatal!(__logger, $($arg)*);
    }};
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use crate::log::{
        config::Config, log_level::LogLevel, log_sink::LogSink, logger::Logger,
        shared_buffer::SharedBuffer,
    };
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    fn plain_logger() -> (Logger, SharedBuffer) {
        let out = SharedBuffer::new();
        let logger = Logger::new(
            Config::new(out.clone())
                .with_color(false)
                .with_fatal_action(|| {}),
        );
        (logger, out)
    }

    #[test]
    fn explicit_logger_macros() {
        let (logger, out) = plain_logger();
        let logger = &logger;
        crate::logger_debug!(logger, "a={}", 1);
        crate::logger_info!(logger, "b={:>3}", 2);
        crate::logger_warn!(logger, "c");
        crate::logger_error!(logger, "{:?}", "d");
        crate::logger_log!(logger, LogLevel::Info, "e");
        assert_eq!(
            out.contents(),
            "[DEBUG]\t  a=1\n[INFO]\t  b=  2\n[WARN]\t  c\n[ERROR]\t  \"d\"\n[INFO]\t  e\n"
        );
    }

    #[test]
    fn works_through_trait_objects() {
        let (logger, out) = plain_logger();
        let shared: Arc<dyn LogSink> = Arc::new(logger);
        crate::logger_warn!(shared, "x{}", "y");
        let borrowed: &dyn LogSink = &*shared;
        crate::logger_warn!(borrowed, "z");
        assert_eq!(out.contents(), "[WARN]\t  xy\n[WARN]\t  z\n");
    }

    #[test]
    fn logger_fatal_runs_action_once() {
        let out = SharedBuffer::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let logger = Arc::new(Logger::new(
            Config::new(out.clone())
                .with_color(false)
                .with_fatal_action(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                }),
        ));

        crate::logger_fatal!(logger, "down {}", 42);
        assert_eq!(out.contents(), "[FATAL]\t  down 42\n");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
