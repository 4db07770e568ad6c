// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for DS Résumé.
//!
//! This module contains pure presentation logic with no I/O. Turning a
//! [`Document`] into bytes is done by writers behind the
//! `DocumentWriter` port in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable entities**: The record is built once and only read
//! - **Pure projections**: `renderer` maps record slices onto widgets
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod renderer;
pub mod value_objects;
pub mod widgets;

// Re-exports for convenience
pub use entities::{
    document::{
        Document, JobBlock, LinksExtras, LowerScreen, Section, SectionBody, SectionKind,
        UpperScreen,
    },
    record::{Education, Job, Link, Portrait, ResumeRecord, ResumeRecordBuilder, Skill},
};

pub use error::{DomainError, ErrorCategory};

pub use renderer::{Renderer, render};

pub use value_objects::{DocumentFormat, Media};

pub use widgets::{
    ButtonColor, Card, ConsoleButton, Footer, Glint, Hinge, InfoPill, Lamp, LampColor, SkillBar,
    SplitRow, Stars, TitleBadge,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> ResumeRecordBuilder {
        ResumeRecord::builder()
            .name("TEST PILOT")
            .title("QA")
            .phone("1")
            .email("qa@example.com")
            .site("example.com")
            .location("Nowhere")
            .summary("Breaks things.")
    }

    // ========================================================================
    // Section dispatch
    // ========================================================================

    #[test]
    fn section_order_is_fixed() {
        let doc = render(&builder().build().unwrap());
        assert_eq!(
            doc.section_order(),
            vec![
                SectionKind::Skills,
                SectionKind::Experience,
                SectionKind::Education,
                SectionKind::LinksExtras,
            ]
        );
    }

    #[test]
    fn empty_record_still_renders_all_sections() {
        let doc = render(&builder().build().unwrap());
        assert_eq!(doc.sections().len(), 4);
        for section in doc.sections() {
            assert_eq!(section.body.item_count(), 0);
        }
    }

    #[test]
    fn skills_are_not_sorted() {
        let record = builder()
            .skill("Low", 10)
            .skill("High", 90)
            .skill("Mid", 50)
            .build()
            .unwrap();
        let doc = render(&record);
        let Some(SectionBody::Skills(bars)) = doc.section(SectionKind::Skills).map(|s| &s.body)
        else {
            panic!("skills section missing");
        };
        let labels: Vec<_> = bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["Low", "High", "Mid"]);
    }

    #[test]
    fn awards_and_languages_share_the_extras_column() {
        let record = builder()
            .link("GitHub", "github.com/qa")
            .award("Bug Bash Champion")
            .language("Esperanto")
            .language("Klingon")
            .build()
            .unwrap();
        let doc = render(&record);
        let Some(SectionBody::LinksExtras(extras)) =
            doc.section(SectionKind::LinksExtras).map(|s| &s.body)
        else {
            panic!("links section missing");
        };
        assert_eq!(extras.links, vec![InfoPill::new("GitHub", "github.com/qa")]);
        assert_eq!(extras.awards, vec!["Bug Bash Champion"]);
        assert_eq!(extras.languages, vec!["Esperanto", "Klingon"]);
    }

    // ========================================================================
    // Validation
    // ========================================================================

    #[test]
    fn built_record_revalidates() {
        let record = builder().build().unwrap();
        assert!(record.validate().is_ok());
    }

    #[test]
    fn level_error_is_a_validation_error() {
        let err = builder().skill("Too much", 200).build().unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());
    }
}
