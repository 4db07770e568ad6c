pub mod document;
pub mod record;

pub use crate::domain::DomainError;
pub use document::Document;
pub use record::ResumeRecord;
