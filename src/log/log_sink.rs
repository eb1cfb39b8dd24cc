use crate::log::{
    log_level::LogLevel,
    printf::{Arg, sprintf},
};

/// Anything that can receive leveled log lines.
///
/// Implementors provide [`emit`](Self::emit) and
/// [`run_fatal_action`](Self::run_fatal_action); the `*f` methods are the
/// printf-style front end and are rarely overridden.
///
/// Collaborators that log should take an `Arc<dyn LogSink>` (or `&dyn LogSink`)
/// rather than reaching for the process-wide default.
pub trait LogSink: Send + Sync {
    /// Writes one already-rendered message at `level`.
    fn emit(&self, level: LogLevel, msg: &str);

    /// Runs after a fatal line has been emitted by [`fatalf`](Self::fatalf).
    fn run_fatal_action(&self);

    /// Renders `format` with `args` and emits it at `level`.
    ///
    /// A fatal `level` here only writes the line; use [`fatalf`](Self::fatalf)
    /// to also run the fatal action.
    fn logf(&self, level: LogLevel, format: &str, args: &[Arg<'_>]) {
        self.emit(level, &sprintf(format, args));
    }

    fn debugf(&self, format: &str, args: &[Arg<'_>]) {
        self.logf(LogLevel::Debug, format, args);
    }

    fn infof(&self, format: &str, args: &[Arg<'_>]) {
        self.logf(LogLevel::Info, format, args);
    }

    fn warnf(&self, format: &str, args: &[Arg<'_>]) {
        self.logf(LogLevel::Warn, format, args);
    }

    fn errorf(&self, format: &str, args: &[Arg<'_>]) {
        self.logf(LogLevel::Error, format, args);
    }

    /// Emits at [`LogLevel::Fatal`], then runs the fatal action regardless of
    /// whether the write succeeded.
    fn fatalf(&self, format: &str, args: &[Arg<'_>]) {
        self.logf(LogLevel::Fatal, format, args);
        self.run_fatal_action();
    }
}
