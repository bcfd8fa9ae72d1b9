// File: crates/benchplot/src/error.rs
// Summary: Error types for parsing and rendering benchmark files.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// No input files were given on the command line.
#[derive(Debug, Error)]
#[error("you have to specify file(s)")]
pub struct UsageError;

/// Why a benchmark file could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedInput {
    #[error("missing header row")]
    MissingHeader,
    #[error("marker row has no series label")]
    MissingLabel,
    #[error("data row has no time value")]
    MissingValue,
    #[error("data row appears before any `N,<label>` marker row")]
    NoActiveSeries,
    #[error("{column} value {value:?} is not a finite number")]
    NotANumber { column: &'static str, value: String },
    #[error("invalid CSV: {0}")]
    Csv(String),
}

/// Failure while reading one CSV stream, before a file path is attached.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("line {line}: {reason}")]
    Malformed { line: u64, reason: MalformedInput },
}

impl ParseError {
    pub(crate) fn malformed(line: u64, reason: MalformedInput) -> Self {
        ParseError::Malformed { line, reason }
    }
}

impl From<csv::Error> for ParseError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io) => ParseError::Io(io),
            _ => ParseError::malformed(line, MalformedInput::Csv(message)),
        }
    }
}

/// Per-file rendering failure. Every variant names the file it concerns.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot read {}: {source}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}:{line}: {reason}", .path.display())]
    Malformed {
        path: PathBuf,
        line: u64,
        reason: MalformedInput,
    },
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("canvas error: {0}")]
    Canvas(String),
}

impl RenderError {
    /// Attach the input `path` to a stream-level parse failure.
    pub fn from_parse(path: &Path, err: ParseError) -> Self {
        match err {
            ParseError::Io(source) => RenderError::NotFound { path: path.to_path_buf(), source },
            ParseError::Malformed { line, reason } => {
                RenderError::Malformed { path: path.to_path_buf(), line, reason }
            }
        }
    }

    pub(crate) fn canvas(err: anyhow::Error) -> Self {
        RenderError::Canvas(format!("{err:#}"))
    }
}
