//! Process-wide default logger and the free functions that delegate to it.
//!
//! Prefer passing an `Arc<dyn LogSink>` to collaborators. The default exists
//! for binaries and call sites where threading a logger through is not worth
//! it. Install it once at startup with [`set_default`]; if nothing was
//! installed, the first access builds a [`Logger`] from [`Config::default`]
//! (color on, stdout, exit on fatal). Replacement is last-writer-wins.

use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use crate::log::{
    config::Config,
    log_level::LogLevel,
    log_sink::LogSink,
    logger::Logger,
    printf::Arg,
};

static DEFAULT: LazyLock<RwLock<Arc<dyn LogSink>>> =
    LazyLock::new(|| RwLock::new(Arc::new(Logger::new(Config::default()))));

/// Replaces the process-wide default logger.
pub fn set_default(logger: Arc<dyn LogSink>) {
    *DEFAULT.write().unwrap_or_else(PoisonError::into_inner) = logger;
}

/// The logger currently installed as default.
#[must_use]
pub fn default_logger() -> Arc<dyn LogSink> {
    Arc::clone(&DEFAULT.read().unwrap_or_else(PoisonError::into_inner))
}

pub fn logf(level: LogLevel, format: &str, args: &[Arg<'_>]) {
    default_logger().logf(level, format, args);
}

pub fn debugf(format: &str, args: &[Arg<'_>]) {
    default_logger().debugf(format, args);
}

pub fn infof(format: &str, args: &[Arg<'_>]) {
    default_logger().infof(format, args);
}

pub fn warnf(format: &str, args: &[Arg<'_>]) {
    default_logger().warnf(format, args);
}

pub fn errorf(format: &str, args: &[Arg<'_>]) {
    default_logger().errorf(format, args);
}

/// Logs at fatal level through the default logger, then runs its fatal action.
pub fn fatalf(format: &str, args: &[Arg<'_>]) {
    default_logger().fatalf(format, args);
}
