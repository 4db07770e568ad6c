//! Infrastructure adapters for DS Résumé.
//!
//! This crate implements the ports defined in `dsresume-core::application::ports`
//! and ships the built-in record. All I/O lives here.

pub mod builtin_record;
pub mod filesystem;
pub mod writer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use writer::{HtmlWriter, JsonWriter, TextOptions, TextWriter};
