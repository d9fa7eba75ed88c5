// Import the `fmt` module from the standard library (`std`).
// This module provides functionality for formatted output, which
// is used to implement the `Display` trait for custom error types.
use std::fmt;

// Import the `Serialize` trait from the `serde` crate so that a compile
// error can be reported as JSON by the CLI.
use serde::Serialize;

/// Errors raised while compiling a pattern string into tokens. These are
/// programmer errors in the pattern itself — unlike
/// match-time failures (an unterminated balanced region, an exhausted
/// backtracking search), they propagate all the way out of `find_all` /
/// `find_first` to the caller rather than being absorbed as "no match".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CompileError {
    /// A hole referenced a macro name that isn't in the regex-macro or
    /// structural-macro table.
    #[serde(rename = "unknown_macro")]
    UnknownMacro { name: String },

    /// A `~regex` hole's inline pattern failed to compile.
    #[serde(rename = "invalid_regex")]
    InvalidRegex { pattern: String, message: String },
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::UnknownMacro { name } => {
                write!(f, "unknown macro ':{}'", name)
            }
            CompileError::InvalidRegex { pattern, message } => {
                write!(f, "invalid regex '{}': {}", pattern, message)
            }
        }
    }
}

impl std::error::Error for CompileError {}
