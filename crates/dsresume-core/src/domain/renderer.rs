//! Record-to-document binding.
//!
//! Every function here is a pure projection of a slice of the record onto
//! widgets. Nothing reads global state and nothing fails; rendering the same
//! record twice gives equal documents.

use tracing::{debug, instrument};

use crate::domain::{
    entities::{
        document::{
            Document, JobBlock, LinksExtras, LowerScreen, Section, SectionBody, SectionKind,
            UpperScreen,
        },
        record::{Education, Job, Link, ResumeRecord, Skill},
    },
    widgets::{ConsoleButton, Footer, Hinge, InfoPill, Lamp, SkillBar, SplitRow, Stars, TitleBadge},
};

/// Root renderer. Owns the record it draws.
#[derive(Debug, Clone)]
pub struct Renderer {
    record: ResumeRecord,
}

impl Renderer {
    pub fn new(record: ResumeRecord) -> Self {
        Self { record }
    }

    pub fn record(&self) -> &ResumeRecord {
        &self.record
    }

    pub fn render(&self) -> Document {
        render(&self.record)
    }
}

/// Project a record onto the full dual-screen document.
#[instrument(skip_all, fields(name = %record.name()))]
pub fn render(record: &ResumeRecord) -> Document {
    let document = Document {
        upper: upper_screen(record),
        hinge: Hinge::default(),
        lower: lower_screen(record),
        footer: Footer::default(),
    };

    debug!(
        skills = record.skills().len(),
        jobs = record.experience().len(),
        education = record.education().len(),
        links = record.links().len(),
        "Document rendered"
    );

    document
}

pub fn upper_screen(record: &ResumeRecord) -> UpperScreen {
    UpperScreen {
        lamps: Lamp::status_row(),
        portrait: record.portrait().clone(),
        badge: TitleBadge::new(record.name()),
        title: record.title().to_string(),
        summary: record.summary().to_string(),
        contacts: [
            InfoPill::new("Phone", record.phone()),
            InfoPill::new("Email", record.email()),
            InfoPill::new("Website", record.site()),
            InfoPill::new("Location", record.location()),
        ],
        stars: Stars::default(),
    }
}

pub fn lower_screen(record: &ResumeRecord) -> LowerScreen {
    let sections = SectionKind::ORDER
        .into_iter()
        .map(|kind| section(kind, record))
        .collect();

    LowerScreen {
        sections,
        buttons: ConsoleButton::face_buttons(),
    }
}

/// Dispatch one section kind to its projection.
pub fn section(kind: SectionKind, record: &ResumeRecord) -> Section {
    let body = match kind {
        SectionKind::Skills => SectionBody::Skills(skill_bars(record.skills())),
        SectionKind::Experience => SectionBody::Experience(job_blocks(record.experience())),
        SectionKind::Education => SectionBody::Education(education_rows(record.education())),
        SectionKind::LinksExtras => SectionBody::LinksExtras(links_extras(
            record.links(),
            record.awards(),
            record.languages(),
        )),
    };

    Section {
        kind,
        card: kind.card(),
        body,
    }
}

pub fn skill_bars(skills: &[Skill]) -> Vec<SkillBar> {
    skills
        .iter()
        .map(|s| SkillBar::new(&s.label, u32::from(s.level)))
        .collect()
}

pub fn job_blocks(jobs: &[Job]) -> Vec<JobBlock> {
    jobs.iter()
        .map(|job| JobBlock {
            heading: SplitRow::new(&job.company, &job.years),
            bullets: job.points.clone(),
        })
        .collect()
}

pub fn education_rows(entries: &[Education]) -> Vec<SplitRow> {
    entries
        .iter()
        .map(|e| SplitRow::new(&e.school, &e.year))
        .collect()
}

pub fn links_extras(links: &[Link], awards: &[String], languages: &[String]) -> LinksExtras {
    LinksExtras {
        links: links
            .iter()
            .map(|l| InfoPill::new(&l.label, &l.value))
            .collect(),
        awards: awards.to_vec(),
        languages: languages.to_vec(),
    }
}
