// ============================================================================
// domain/error.rs - RECORD AUTHORING ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Only raised while building a [`ResumeRecord`](super::ResumeRecord). Once a
/// record exists, rendering it cannot fail.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Field '{field}' must not be empty")]
    EmptyField { field: String },

    #[error("Skill '{label}' has level {level}, expected 0..=100")]
    LevelOutOfRange { label: String, level: u8 },

    #[error("Unknown {kind}: '{value}'")]
    UnknownValue { kind: &'static str, value: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyField { field } => vec![
                format!("Give '{}' a value in the built-in record", field),
                "Every identity and contact field is shown on the top screen".into(),
            ],
            Self::LevelOutOfRange { label, level } => vec![
                format!("Skill '{}' is set to {}%", label, level),
                "Skill levels are percentages between 0 and 100".into(),
            ],
            Self::UnknownValue { kind, value } => vec![
                format!("'{}' is not a known {}", value, kind),
                match *kind {
                    "media" => "  • screen, print".into(),
                    "format" => "  • html, text, json".into(),
                    _ => "  • Check documentation for accepted values".into(),
                },
            ],
            Self::MissingRequiredField { field } => vec![
                format!("Set '{}' on the record builder before calling build()", field),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyField { .. } | Self::LevelOutOfRange { .. } => ErrorCategory::Validation,
            Self::UnknownValue { .. } => ErrorCategory::Validation,
            Self::MissingRequiredField { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
