//! Unified error handling for DS Résumé Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for DS Résumé Core operations.
///
/// Rendering itself never fails; these errors come from building a record,
/// serialising a document, or writing it out.
#[derive(Debug, Error, Clone)]
pub enum ResumeError {
    /// Errors from the domain layer (record authoring violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl ResumeError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in dsresume".into(),
                "Please report this issue at: https://github.com/tzharoff/dsresume/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type ResumeResult<T> = Result<T, ResumeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn domain_errors_map_to_validation() {
        let err: ResumeError = DomainError::EmptyField {
            field: "name".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn output_exists_suggests_force() {
        let err: ResumeError = ApplicationError::OutputExists {
            path: PathBuf::from("resume.html"),
        }
        .into();
        assert!(err.suggestions().iter().any(|s| s.contains("--force")));
    }

    #[test]
    fn lock_errors_are_internal() {
        let err: ResumeError = ApplicationError::StoreLockError.into();
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
