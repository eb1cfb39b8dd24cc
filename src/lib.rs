//! Conlog is a small leveled console logger.
//!
//! Lines look like `[INFO]\t  message`, with an optional ANSI-colorized
//! prefix. Loggers are configured with a sink, a color switch and a fatal
//! action, and can be used directly, through the process-wide default, or as
//! the backend of the `log` facade.
//!
//! It also ships the `run-integration-tests` binary, which prints a single
//! formatted line.

/// Command-line front end of the `run-integration-tests` binary.
pub mod cli;
/// Levels, loggers, formatting and the default logger.
pub mod log;
