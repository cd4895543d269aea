//! Import error types
//!
//! Imports are all-or-nothing: the first malformed record fails the whole
//! restore and nothing is committed.

use thiserror::Error;

use crate::errors::FamilyError;

/// Result type for import operations
pub type ImportResult<T> = Result<T, ImportError>;

/// Errors raised while restoring a registry from JSON or CSV
#[derive(Debug, Error)]
pub enum ImportError {
    /// The document as a whole does not parse
    #[error("invalid import document: {0}")]
    Document(String),

    /// A specific row is malformed (CSV line numbers are 1-based and
    /// include the header row)
    #[error("malformed record at line {line}: {reason}")]
    Row { line: usize, reason: String },

    /// The records parsed but violate a registry invariant
    /// (duplicate id, dangling reference, asymmetric spouse, bad field)
    #[error(transparent)]
    Integrity(#[from] FamilyError),
}

impl ImportError {
    pub fn document(reason: impl Into<String>) -> Self {
        Self::Document(reason.into())
    }

    pub fn row(line: usize, reason: impl Into<String>) -> Self {
        Self::Row {
            line,
            reason: reason.into(),
        }
    }

    /// Returns the stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Document(_) | Self::Row { .. } => "SILSILAH_IMPORT_FORMAT",
            Self::Integrity(inner) => inner.code(),
        }
    }
}
