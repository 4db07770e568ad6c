//! Domain value objects: Media, DocumentFormat.
//!
//! Pure value types: `Copy`, equality-by-value, no identity. Each has an
//! `as_str` form used for display and config, and a `FromStr` parser.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Media ────────────────────────────────────────────────────────────────────

/// Where a rendered document is going to be consumed.
///
/// The document tree is identical for both; writers drop print-hidden
/// widgets and switch to a light background for [`Media::Print`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Media {
    #[default]
    Screen,
    Print,
}

impl Media {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Screen => "screen",
            Self::Print => "print",
        }
    }

    pub const fn is_print(self) -> bool {
        matches!(self, Self::Print)
    }
}

impl fmt::Display for Media {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Media {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "screen" | "display" => Ok(Self::Screen),
            "print" | "paper" | "pdf" => Ok(Self::Print),
            other => Err(DomainError::UnknownValue {
                kind: "media",
                value: other.to_string(),
            }),
        }
    }
}

// ── DocumentFormat ───────────────────────────────────────────────────────────

/// Serialisation a writer produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    #[default]
    Html,
    Text,
    Json,
}

impl DocumentFormat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Text => "text",
            Self::Json => "json",
        }
    }

    pub const fn file_extension(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Text => "txt",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" | "htm" => Ok(Self::Html),
            "text" | "txt" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(DomainError::UnknownValue {
                kind: "format",
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_parses_aliases() {
        assert_eq!(Media::from_str("PRINT").unwrap(), Media::Print);
        assert_eq!(Media::from_str("pdf").unwrap(), Media::Print);
        assert_eq!(Media::from_str("screen").unwrap(), Media::Screen);
        assert!(Media::from_str("hologram").is_err());
    }

    #[test]
    fn format_round_trips_through_display() {
        for format in [DocumentFormat::Html, DocumentFormat::Text, DocumentFormat::Json] {
            assert_eq!(DocumentFormat::from_str(&format.to_string()).unwrap(), format);
        }
    }

    #[test]
    fn text_format_uses_txt_extension() {
        assert_eq!(DocumentFormat::Text.file_extension(), "txt");
    }
}
