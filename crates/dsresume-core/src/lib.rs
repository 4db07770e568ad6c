//! DS Résumé Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for rendering a
//! handheld-console themed résumé page, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           dsresume-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (RenderService)              │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: DocumentWriter, Filesystem)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    dsresume-adapters (Infrastructure)   │
//! │  (HtmlWriter, TextWriter, LocalFs, ..)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (ResumeRecord, Renderer, Document)     │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use dsresume_core::domain::{Job, Renderer, ResumeRecord, SectionKind};
//!
//! let record = ResumeRecord::builder()
//!     .name("TONY ZHAROFF")
//!     .title("GAME / XR DEVELOPER & EDUCATOR")
//!     .phone("+1 (253) 223-8069")
//!     .email("tony.zharoff@gmail.com")
//!     .site("tzharoff.com")
//!     .location("Seattle, WA")
//!     .summary("Ships vertical slices.")
//!     .skill("Unity / C#", 95)
//!     .job(Job::new("blah", "xxxx-yyyy").point("#1").point("#2"))
//!     .build()
//!     .unwrap();
//!
//! let document = Renderer::new(record).render();
//! assert_eq!(document.section_order()[0], SectionKind::Skills);
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ExportReport, RenderService,
        ports::{DocumentWriter, Filesystem},
    };
    pub use crate::domain::{
        Document, DocumentFormat, Job, Media, Renderer, ResumeRecord, ResumeRecordBuilder,
        Section, SectionBody, SectionKind,
    };
    pub use crate::error::{ResumeError, ResumeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
