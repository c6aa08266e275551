//! Puzzle input format errors
//!
//! Both puzzles read line-oriented text files. Errors carry the 1-based line
//! number of the offending line so the CLI can point at it.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while parsing a single password entry line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryParseError {
    /// No `<low>-<high>` range before the first space
    #[error("missing `<low>-<high>` range")]
    MissingRange,
    /// No `: ` separator between the rule character and the password
    #[error("missing `: ` separator before the password")]
    MissingSeparator,
    /// A range bound is not a non-negative integer
    #[error("invalid range bound '{0}'")]
    InvalidBound(String),
    /// The rule character is not exactly one character
    #[error("rule must name exactly one character, found '{0}'")]
    InvalidCharacter(String),
}

/// Errors raised while loading a puzzle input file
#[derive(Debug, Error)]
pub enum InputError {
    /// The input file could not be opened or read
    #[error("failed to open file: {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A report line is not a base-10 integer
    #[error("line {line}: invalid number '{value}'")]
    InvalidNumber { line: usize, value: String },
    /// A password line does not match `<low>-<high> <char>: <password>`
    #[error("line {line}: {source}")]
    InvalidEntry {
        line: usize,
        #[source]
        source: EntryParseError,
    },
}

impl InputError {
    /// Line number the error refers to, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Io { .. } => None,
            Self::InvalidNumber { line, .. } | Self::InvalidEntry { line, .. } => Some(*line),
        }
    }
}
