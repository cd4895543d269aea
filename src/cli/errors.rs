//! CLI-specific error types

use std::path::PathBuf;

use thiserror::Error;

use crate::errors::FamilyError;
use crate::serialize::ImportError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced by the command layer
#[derive(Debug, Error)]
pub enum CliError {
    /// `init` refuses to overwrite an existing registry file
    #[error("registry file {} already exists", .0.display())]
    AlreadyInitialized(PathBuf),

    /// A command other than `init` found no registry file
    #[error("registry file {} not found; run 'silsilah init' first", .0.display())]
    NotInitialized(PathBuf),

    /// Reading or writing a file failed
    #[error("{path}: {reason}")]
    Io { path: PathBuf, reason: String },

    /// A registry or relationship operation failed
    #[error(transparent)]
    Registry(#[from] FamilyError),

    /// A JSON or CSV restore failed
    #[error(transparent)]
    Import(#[from] ImportError),
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            reason: err.to_string(),
        }
    }
}
