use std::{
    fmt,
    io::{self, Write},
    process,
    sync::Arc,
};

/// Exit status used by the default fatal action.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Callback run after a fatal line has been written.
pub type FatalAction = Arc<dyn Fn() + Send + Sync>;

/// Settings for one [`Logger`](crate::log::logger::Logger).
pub struct Config {
    /// Use the ANSI-colorized prefix instead of `[NAME]`.
    pub color: bool,
    pub fatal_action: FatalAction,
    /// Destination for rendered lines.
    pub out: Box<dyn Write + Send>,
}

/// Terminates the process with [`FATAL_EXIT_CODE`].
#[must_use]
pub fn exit_process() -> FatalAction {
    Arc::new(|| process::exit(FATAL_EXIT_CODE))
}

impl Config {
    /// Color on, process exit on fatal, writing to `out`.
    pub fn new(out: impl Write + Send + 'static) -> Self {
        Self {
            color: true,
            fatal_action: exit_process(),
            out: Box::new(out),
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_fatal_action(mut self, action: impl Fn() + Send + Sync + 'static) -> Self {
        self.fatal_action = Arc::new(action);
        self
    }

    #[must_use]
    pub fn with_output(mut self, out: impl Write + Send + 'static) -> Self {
        self.out = Box::new(out);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(io::stdout())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}
