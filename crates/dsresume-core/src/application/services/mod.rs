//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "render the résumé to a file".

pub mod render_service;

pub use render_service::{ExportReport, RenderService};
