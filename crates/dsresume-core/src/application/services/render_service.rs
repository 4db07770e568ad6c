//! Render Service - main application orchestrator.
//!
//! This service coordinates the render workflow:
//! 1. Project the record onto a document (pure, cannot fail)
//! 2. Serialise the document with the injected writer
//! 3. Optionally write the result through the filesystem port

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{DocumentWriter, Filesystem},
    },
    domain::{Document, DocumentFormat, Media, Renderer, ResumeRecord},
    error::ResumeResult,
};

/// What an export wrote, for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub path: PathBuf,
    pub format: DocumentFormat,
    pub media: Media,
    pub bytes: usize,
}

/// Main render service.
///
/// Holds the record (through its [`Renderer`]) plus the adapters that turn
/// the resulting document into output.
pub struct RenderService {
    renderer: Renderer,
    writer: Box<dyn DocumentWriter>,
    filesystem: Box<dyn Filesystem>,
}

impl RenderService {
    /// Create a new render service for `record` with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use dsresume_core::application::RenderService;
    ///
    /// let service = RenderService::new(
    ///     record,     // ResumeRecord
    ///     writer,     // impl DocumentWriter
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(
        record: ResumeRecord,
        writer: Box<dyn DocumentWriter>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            renderer: Renderer::new(record),
            writer,
            filesystem,
        }
    }

    pub fn record(&self) -> &ResumeRecord {
        self.renderer.record()
    }

    /// The document tree for the held record.
    pub fn document(&self) -> Document {
        self.renderer.render()
    }

    /// Render the record and serialise it for `media`.
    #[instrument(skip_all, fields(format = %self.writer.format(), media = %media))]
    pub fn render(&self, media: Media) -> ResumeResult<String> {
        let document = self.document();
        let output = self.writer.write(&document, media)?;
        debug!(bytes = output.len(), "Document written");
        Ok(output)
    }

    /// Render and write to `path`.
    ///
    /// Refuses to replace an existing file unless `force` is set. Missing
    /// parent directories are created.
    #[instrument(skip_all, fields(path = %path.as_ref().display(), media = %media, force))]
    pub fn export(
        &self,
        media: Media,
        path: impl AsRef<Path>,
        force: bool,
    ) -> ResumeResult<ExportReport> {
        let path = path.as_ref();

        if self.filesystem.exists(path) && !force {
            return Err(ApplicationError::OutputExists {
                path: path.to_path_buf(),
            }
            .into());
        }

        let output = self.render(media)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                self.filesystem.create_dir_all(parent)?;
            }
        }

        self.filesystem.write_file(path, &output)?;
        info!(bytes = output.len(), "Export completed");

        Ok(ExportReport {
            path: path.to_path_buf(),
            format: self.writer.format(),
            media,
            bytes: output.len(),
        })
    }
}
