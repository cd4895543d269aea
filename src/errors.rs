//! # Registry Errors
//!
//! Error taxonomy for registry and relationship operations.
//!
//! Error codes:
//! - SILSILAH_VALIDATION_FAILED (REJECT)
//! - SILSILAH_DUPLICATE_ID (REJECT)
//! - SILSILAH_NOT_FOUND (REJECT)
//! - SILSILAH_UNSUPPORTED_RELATION (REJECT)
//!
//! Every variant carries the offending value so callers can format
//! diagnostic messages; the core never localizes.

use thiserror::Error;

use crate::member::MemberId;

/// Result type for registry and relationship operations
pub type FamilyResult<T> = Result<T, FamilyError>;

/// Errors raised by the member registry and relationship engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FamilyError {
    /// A required field is missing or a field value is malformed
    #[error("invalid {field}: '{value}' ({reason})")]
    Validation {
        /// Field that failed validation
        field: &'static str,
        /// Offending value as supplied by the caller
        value: String,
        /// What was expected instead
        reason: &'static str,
    },

    /// Insert attempted with an id already present in the registry
    #[error("member id {0} already exists")]
    DuplicateId(MemberId),

    /// Member id (or relative id) does not resolve
    #[error("member with id {0} not found")]
    NotFound(MemberId),

    /// Relation string outside {child, sibling, spouse}
    #[error("unsupported relationship type: {0}")]
    UnsupportedRelation(String),
}

impl FamilyError {
    /// Shorthand for a validation failure
    pub fn validation(field: &'static str, value: impl Into<String>, reason: &'static str) -> Self {
        Self::Validation {
            field,
            value: value.into(),
            reason,
        }
    }

    /// Returns the stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "SILSILAH_VALIDATION_FAILED",
            Self::DuplicateId(_) => "SILSILAH_DUPLICATE_ID",
            Self::NotFound(_) => "SILSILAH_NOT_FOUND",
            Self::UnsupportedRelation(_) => "SILSILAH_UNSUPPORTED_RELATION",
        }
    }
}
