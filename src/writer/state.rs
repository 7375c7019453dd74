//! Document lifecycle tracking.

use std::fmt;

/// Where a writer is in the BOF ... EOF sequence.
///
/// Only [`XlsWriter`](crate::XlsWriter) tracks this; the record encoders in
/// [`biff`](crate::biff) know nothing about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DocumentState {
    /// No BOF written yet
    #[default]
    NotBegun,
    /// BOF written, EOF not yet written
    Open,
    /// EOF written
    Finished,
}

impl DocumentState {
    /// Lowercase name used in messages
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentState::NotBegun => "not begun",
            DocumentState::Open => "open",
            DocumentState::Finished => "finished",
        }
    }
}

impl fmt::Display for DocumentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
