//! Error types for the Lineage system.
//!
//! Uses `thiserror` for ergonomic error definition with positional context.

use thiserror::Error;

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Lineage operations.
///
/// None of these are fatal: the engine never terminates the process, it
/// reports failures to the caller and leaves existing state untouched.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an out-of-range index error.
    #[must_use]
    pub fn out_of_range(index: usize, length: usize) -> Self {
        Self::new(ErrorKind::OutOfRange { index, length })
    }

    /// Creates an I/O error tagged with the offending path.
    #[must_use]
    pub fn io(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io {
            path: path.into(),
            message: message.into(),
        })
    }

    /// Creates a format error with no record position.
    #[must_use]
    pub fn format(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Format {
            message: message.into(),
            record: None,
        })
    }

    /// Creates a format error located at a specific record ordinal (0-based).
    #[must_use]
    pub fn format_at(message: impl Into<String>, record: usize) -> Self {
        Self::new(ErrorKind::Format {
            message: message.into(),
            record: Some(record),
        })
    }

    /// Creates a terminal I/O error.
    #[must_use]
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Terminal {
            message: message.into(),
        })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Index outside the valid `[0, length)` range of the store.
    #[error("index out of range: {index} (size {length})")]
    OutOfRange {
        /// The index that was dereferenced.
        index: usize,
        /// The store size at the time of the access.
        length: usize,
    },

    /// File could not be opened, read, written, or flushed.
    #[error("io error on '{path}': {message}")]
    Io {
        /// The path involved in the failed operation.
        path: String,
        /// Description of the underlying failure.
        message: String,
    },

    /// Structurally invalid persisted content.
    #[error("{}", format_with_record(message, *record))]
    Format {
        /// Description of what was malformed.
        message: String,
        /// Ordinal of the offending record (0-based), where known.
        record: Option<usize>,
    },

    /// Interactive terminal could not be initialized or read.
    #[error("terminal error: {message}")]
    Terminal {
        /// Description of the underlying failure.
        message: String,
    },
}

fn format_with_record(message: &str, record: Option<usize>) -> String {
    match record {
        Some(ordinal) => format!("invalid tree data at record #{ordinal}: {message}"),
        None => format!("invalid tree data: {message}"),
    }
}
