use std::{fmt, str::FromStr};

use thiserror::Error;

/// Defines the severity levels for log messages.
///
/// The set is closed and carries no ordering: a level is a label for the
/// line, not a rank to filter on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogLevel {
    /// Designates fine-grained informational events that are most useful to debug an application.
    Debug,
    /// Designates informational messages that highlight the progress of the application at coarse-grained level.
    Info,
    /// Designates potentially harmful situations.
    Warn,
    /// Designates error events that might still allow the application to continue running.
    Error,
    /// Designates errors after which the application is expected to stop.
    Fatal,
}

pub const DEBUG_PREFIX: &str = "\x1b[1;30m[\x1b[1;32mDEBUG\x1b[1;30m]\x1b[0m";
pub const INFO_PREFIX: &str = "\x1b[1;30m[\x1b[1;37mINFO\x1b[1;30m]\x1b[0m";
pub const WARN_PREFIX: &str = "\x1b[1;30m[\x1b[1;33mWARN\x1b[1;30m]\x1b[0m";
pub const ERROR_PREFIX: &str = "\x1b[1;30m[\x1b[1;31mERROR\x1b[1;30m]\x1b[0m";
pub const FATAL_PREFIX: &str = "\x1b[1;30m[\x1b[1;35mFATAL\x1b[1;30m]\x1b[0m";

/// Returned by [`LogLevel::parse`] for anything but an exact canonical name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("tried to parse unknown level '{input}'")]
pub struct LevelParseError {
    pub input: String,
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    /// Looks up a level by its canonical uppercase name.
    ///
    /// The match is exact: no trimming, no case folding, no numeric levels.
    ///
    /// # Errors
    ///
    /// Returns [`LevelParseError`] carrying the rejected input.
    pub fn parse(text: &str) -> Result<Self, LevelParseError> {
        match text {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARN" => Ok(Self::Warn),
            "ERROR" => Ok(Self::Error),
            "FATAL" => Ok(Self::Fatal),
            other => Err(LevelParseError {
                input: other.to_owned(),
            }),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }

    /// `[NAME]`, used when color is disabled.
    #[must_use]
    pub const fn plain_prefix(self) -> &'static str {
        match self {
            Self::Debug => "[DEBUG]",
            Self::Info => "[INFO]",
            Self::Warn => "[WARN]",
            Self::Error => "[ERROR]",
            Self::Fatal => "[FATAL]",
        }
    }

    /// The ANSI-wrapped `[NAME]` prefix: dark brackets, level-colored name, reset.
    #[must_use]
    pub const fn colorize(self) -> &'static str {
        match self {
            Self::Debug => DEBUG_PREFIX,
            Self::Info => INFO_PREFIX,
            Self::Warn => WARN_PREFIX,
            Self::Error => ERROR_PREFIX,
            Self::Fatal => FATAL_PREFIX,
        }
    }

    #[must_use]
    pub const fn prefix(self, color: bool) -> &'static str {
        if color {
            self.colorize()
        } else {
            self.plain_prefix()
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn parse_round_trips_canonical_names() {
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::parse(&level.to_string()), Ok(level));
            assert_eq!(level.as_str().parse::<LogLevel>(), Ok(level));
        }
    }

    #[test]
    fn parse_rejects_non_canonical_input() {
        for bad in ["", "debug", "Info", " WARN", "ERROR ", "FATAL\n", "TRACE", "0"] {
            let err = LogLevel::parse(bad).expect_err("should reject");
            assert_eq!(err.input, bad);
        }
    }

    #[test]
    fn parse_error_names_the_input() {
        let err = LogLevel::parse("verbose").unwrap_err();
        assert_eq!(err.to_string(), "tried to parse unknown level 'verbose'");
    }

    #[test]
    fn colorize_uses_each_level_code() {
        let expected = [
            (LogLevel::Debug, "32"),
            (LogLevel::Info, "37"),
            (LogLevel::Warn, "33"),
            (LogLevel::Error, "31"),
            (LogLevel::Fatal, "35"),
        ];
        for (level, code) in expected {
            let prefix = level.colorize();
            assert_eq!(
                prefix,
                format!("\x1b[1;30m[\x1b[1;{code}m{level}\x1b[1;30m]\x1b[0m")
            );
            assert!(prefix.contains(level.as_str()));
        }
    }

    #[test]
    fn prefix_switches_on_color() {
        assert_eq!(LogLevel::Warn.prefix(false), "[WARN]");
        assert_eq!(LogLevel::Warn.prefix(true), WARN_PREFIX);
    }
}
