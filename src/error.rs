//! Error types for the BIFF2 writer.
use thiserror::Error;

use crate::writer::DocumentState;

/// Result type alias for writer operations
pub type XlsResult<T> = Result<T, XlsError>;

/// Errors reported by the record encoders and the writer handle.
///
/// None of these are retried internally. After any error the output stream
/// should be treated as unusable: a failed LABEL write may already have
/// emitted its header.
#[derive(Error, Debug)]
pub enum XlsError {
    /// The writer has no sink, or an argument is out of range
    #[error("Invalid parameter: {0}")]
    InvalidParam(&'static str),

    /// The sink failed to accept the record bytes
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Operation rejected by a writer using [`OrderingPolicy::Strict`](crate::OrderingPolicy::Strict)
    #[error("Cannot {operation} while document is {state}")]
    InvalidState {
        /// Name of the rejected operation
        operation: &'static str,
        /// Document state at the time of the call
        state: DocumentState,
    },
}

impl XlsError {
    /// Returns `true` if this error came from the sink.
    #[inline]
    pub fn is_io(&self) -> bool {
        matches!(self, XlsError::Io(_))
    }
}
