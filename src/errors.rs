//! Error types for MWE detection.
//!
//! Every fallible operation in the crate returns [`MweResult`]. Nothing in
//! the detection path retries; errors surface to the caller of the
//! offending operation.

use thiserror::Error;

/// Errors that can occur while loading an index or detecting MWEs.
#[derive(Debug, Error)]
pub enum MweError {
    /// A line of the index text format could not be parsed.
    #[error("parse error at line {line_number}: {message}: {line:?}")]
    Parse {
        line_number: usize,
        line: String,
        message: String,
    },

    /// A precondition on a constructor or operation argument was violated.
    #[error("invalid argument `{name}`: {message}")]
    InvalidArgument { name: &'static str, message: String },

    /// A lookup was attempted on an index that is not open.
    #[error("index is not open")]
    IndexClosed,

    /// The index source could not be read.
    #[error("failed to read index: {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A pipeline configuration could not be read or built.
    #[error("invalid pipeline configuration: {message}")]
    Config { message: String },

    /// An internal invariant was broken. This indicates a bug.
    #[error("internal invariant violated: {message}")]
    Invariant { message: String },
}

/// Result type for MWE operations.
pub type MweResult<T> = Result<T, MweError>;

impl MweError {
    pub(crate) fn invalid_argument(name: &'static str, message: impl Into<String>) -> Self {
        MweError::InvalidArgument {
            name,
            message: message.into(),
        }
    }

    pub(crate) fn invariant(message: impl Into<String>) -> Self {
        MweError::Invariant {
            message: message.into(),
        }
    }

    pub(crate) fn parse(line: &str, message: impl Into<String>) -> Self {
        MweError::Parse {
            line_number: 1,
            line: line.to_string(),
            message: message.into(),
        }
    }

    /// Re-number a parse error to the line it came from. Other variants are
    /// returned unchanged.
    pub(crate) fn at_line(self, number: usize) -> Self {
        match self {
            MweError::Parse { line, message, .. } => MweError::Parse {
                line_number: number,
                line,
                message,
            },
            other => other,
        }
    }
}
