pub mod config;
pub mod default_logger;
pub mod facade;
pub mod log_level;
pub mod log_macros;
pub mod log_sink;
pub mod logger;
pub mod noop_log_sink;
pub mod printf;
pub mod shared_buffer;

pub use config::Config;
pub use default_logger::{
    debugf, default_logger, errorf, fatalf, infof, logf, set_default, warnf,
};
pub use log_level::{LevelParseError, LogLevel};
pub use log_sink::LogSink;
pub use logger::Logger;
pub use noop_log_sink::NoopLogSink;
pub use printf::{Arg, sprintf};
pub use shared_buffer::SharedBuffer;
