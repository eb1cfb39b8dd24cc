//! One-shot CLI: `run-integration-tests <LEVEL> <FORMAT> <ARG>...`.

use std::io::Write;

use crate::log::{log_level::LogLevel, log_sink::LogSink, printf::Arg};

pub const USAGE: &str = "
USAGE:
    run-integration-tests [LEVEL] [FORMAT STRING] [FORMAT ARGS...]

LEVEL is one of DEBUG, INFO, WARN, ERROR, FATAL.
";

/// Runs the CLI over `args` (program name first) and returns the exit code.
///
/// Usage and parse diagnostics go to `out`; the log line goes to `logger`.
/// Format arguments are passed through as text.
pub fn run<W: Write + ?Sized>(args: &[String], out: &mut W, logger: &dyn LogSink) -> u8 {
    let [_, level, format, rest @ ..] = args else {
        let _ = writeln!(out, "{USAGE}");
        return 1;
    };
    if rest.is_empty() {
        let _ = writeln!(out, "{USAGE}");
        return 1;
    }

    let level = match LogLevel::parse(level) {
        Ok(level) => level,
        Err(err) => {
            let _ = writeln!(out, "tried to parse level '{level}' but failed. err={err}");
            return 1;
        }
    };

    let format_args: Vec<Arg<'_>> = rest.iter().map(Arg::from).collect();
    logger.logf(level, format, &format_args);
    0
}
