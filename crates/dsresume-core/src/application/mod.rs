//! Application layer for DS Résumé.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (RenderService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! layout logic itself. The record-to-widget binding lives in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ExportReport, // DTO describing a finished export
    RenderService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{DocumentWriter, Filesystem};

pub use error::ApplicationError;
