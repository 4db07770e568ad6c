//! Application layer errors.
//!
//! These errors represent failures in orchestration, not content rules.
//! Record rules are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while writing or exporting a document.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A writer could not serialise the document.
    #[error("Document rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Shared adapter state was poisoned.
    #[error("Adapter lock poisoned")]
    StoreLockError,

    /// Export target already exists and overwrite was not requested.
    #[error("Output already exists at {path}")]
    OutputExists { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::StoreLockError => vec![
                "An adapter lock was poisoned by an earlier panic".into(),
                "Try again".into(),
            ],
            Self::OutputExists { path } => vec![
                format!("File already exists: {}", path.display()),
                "Use --force to overwrite".into(),
                "Or choose a different --output path".into(),
            ],
            Self::RenderingFailed { .. } => vec![
                "The document could not be serialised".into(),
                "Try a different --format".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::OutputExists { .. } => ErrorCategory::Validation,
            Self::RenderingFailed { .. } => ErrorCategory::Internal,
        }
    }
}
