//! Error taxonomy for theme generation.
//!
//! Two failure classes exist, mirroring how the parse stage treats its input:
//!
//! - [`ValidationError`]: structural/resource problems (bad path, oversized
//!   file, too many lines). Raised before any parsing begins.
//! - [`ProcessingError`]: I/O failures while reading the source file, wrapped
//!   with the offending path.
//!
//! Everything else is a [`ParseWarning`]: per-line content problems are
//! recovered locally, because source theme files are frequently hand-edited
//! and imperfect. One bad line never blocks an otherwise-usable theme. The
//! pure derivation stages are total over validated input and have no error
//! type at all.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error for the generation pipeline.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Processing(#[from] ProcessingError),
}

/// Fatal structural/resource problems, detected before parsing.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("theme file path is empty")]
    EmptyPath,

    #[error("theme file {path} is {size} bytes; the limit is {limit}")]
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("theme file {path} has {lines} lines; the limit is {limit}")]
    TooManyLines {
        path: PathBuf,
        lines: usize,
        limit: usize,
    },
}

/// I/O failures, wrapped with the file they occurred on.
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("failed to read theme file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to stat theme file {path}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Non-fatal problems recorded while parsing a theme file.
///
/// Each warning corresponds to exactly one skipped line; parsing always
/// continues past it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseWarning {
    #[error("line {line}: invalid color value {value:?} for {key}")]
    InvalidColorValue {
        line: usize,
        key: String,
        value: String,
    },

    #[error("line {line}: unknown key {key:?} ignored")]
    UnknownKey { line: usize, key: String },

    #[error("line {line}: key exceeds {limit} bytes, line ignored")]
    OversizedKey { line: usize, limit: usize },

    #[error("line {line}: value for {key} exceeds {limit} bytes, line ignored")]
    OversizedValue {
        line: usize,
        key: String,
        limit: usize,
    },

    #[error("line {line}: unrecognized syntax")]
    Malformed { line: usize },
}

impl ParseWarning {
    /// Line number (1-based) the warning was raised on.
    pub fn line(&self) -> usize {
        match self {
            Self::InvalidColorValue { line, .. }
            | Self::UnknownKey { line, .. }
            | Self::OversizedKey { line, .. }
            | Self::OversizedValue { line, .. }
            | Self::Malformed { line } => *line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_render_with_line_numbers() {
        let w = ParseWarning::UnknownKey {
            line: 7,
            key: "shader".into(),
        };
        assert_eq!(w.line(), 7);
        assert!(w.to_string().contains("line 7"));
        assert!(w.to_string().contains("shader"));
    }

    #[test]
    fn validation_errors_name_the_limit() {
        let err = ValidationError::TooManyLines {
            path: PathBuf::from("/tmp/x.conf"),
            lines: 9000,
            limit: 4096,
        };
        let msg = err.to_string();
        assert!(msg.contains("9000"));
        assert!(msg.contains("4096"));
    }
}
