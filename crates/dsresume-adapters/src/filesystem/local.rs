//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tracing::trace;

use dsresume_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ResumeError, ResumeResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ResumeResult<()> {
        trace!(path = %path.display(), "create_dir_all");
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ResumeResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write_file");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ResumeError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_and_detects_files() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("out/pages");
        let file = nested.join("resume.html");
        let fs = LocalFilesystem::new();

        fs.create_dir_all(&nested).unwrap();
        assert!(!fs.exists(&file));
        fs.write_file(&file, "<html></html>").unwrap();

        assert!(fs.exists(&file));
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "<html></html>");
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("missing/resume.txt");

        let err = LocalFilesystem::new().write_file(&file, "x").unwrap_err();
        assert!(matches!(
            err,
            ResumeError::Application(ApplicationError::FilesystemError { .. })
        ));
    }
}
