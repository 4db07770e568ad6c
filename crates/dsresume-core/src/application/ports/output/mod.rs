//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `dsresume-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{Document, DocumentFormat, Media};
use crate::error::ResumeResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `dsresume_adapters::filesystem::LocalFilesystem` (production)
/// - `dsresume_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ResumeResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> ResumeResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for turning a document into a serialised page.
///
/// Implemented by:
/// - `dsresume_adapters::writer::HtmlWriter` (standalone HTML page)
/// - `dsresume_adapters::writer::TextWriter` (terminal / plain text)
/// - `dsresume_adapters::writer::JsonWriter` (document tree as JSON)
#[cfg_attr(test, mockall::automock)]
pub trait DocumentWriter: Send + Sync {
    /// Format this writer produces.
    fn format(&self) -> DocumentFormat;

    /// Serialise `document` for `media`.
    ///
    /// Writers must omit print-hidden widgets when `media` is
    /// [`Media::Print`] and must not alter any text taken from the record.
    fn write(&self, document: &Document, media: Media) -> ResumeResult<String>;
}
