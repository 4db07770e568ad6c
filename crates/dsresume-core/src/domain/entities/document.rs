use serde::Serialize;

use crate::domain::{
    entities::record::Portrait,
    widgets::{
        Card, ConsoleButton, Footer, Hinge, InfoPill, Lamp, SkillBar, SplitRow, Stars, TitleBadge,
    },
};

/// Rendered page, ready for a writer.
///
/// Produced by [`Renderer`](crate::domain::Renderer). It holds data only; the
/// same tree serves every [`Media`](crate::domain::Media).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub upper: UpperScreen,
    pub hinge: Hinge,
    pub lower: LowerScreen,
    pub footer: Footer,
}

impl Document {
    pub fn sections(&self) -> &[Section] {
        &self.lower.sections
    }

    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.lower.sections.iter().find(|s| s.kind == kind)
    }

    /// Section kinds in display order.
    pub fn section_order(&self) -> Vec<SectionKind> {
        self.lower.sections.iter().map(|s| s.kind).collect()
    }
}

// ── Upper screen ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpperScreen {
    pub lamps: [Lamp; 3],
    pub portrait: Portrait,
    pub badge: TitleBadge,
    pub title: String,
    pub summary: String,
    /// Phone, Email, Website, Location; read row-major as a 2x2 grid.
    pub contacts: [InfoPill; 4],
    pub stars: Stars,
}

impl UpperScreen {
    pub const CONTACT_COLUMNS: usize = 2;

    /// Contacts grouped into the two rows of the grid.
    pub fn contact_rows(&self) -> impl Iterator<Item = &[InfoPill]> {
        self.contacts.chunks(Self::CONTACT_COLUMNS)
    }
}

// ── Lower screen ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LowerScreen {
    pub sections: Vec<Section>,
    pub buttons: [ConsoleButton; 4],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    Skills,
    Experience,
    Education,
    LinksExtras,
}

impl SectionKind {
    /// Fixed display order of the lower screen.
    pub const ORDER: [SectionKind; 4] = [
        SectionKind::Skills,
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::LinksExtras,
    ];

    pub const fn card(self) -> Card {
        match self {
            Self::Skills => Card {
                title: "SKILLS",
                icon: "⭐",
            },
            Self::Experience => Card {
                title: "EXPERIENCE",
                icon: "🎮",
            },
            Self::Education => Card {
                title: "EDUCATION",
                icon: "🎓",
            },
            Self::LinksExtras => Card {
                title: "LINKS & EXTRAS",
                icon: "🔗",
            },
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::LinksExtras => "links-extras",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub card: Card,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "items", rename_all = "kebab-case")]
pub enum SectionBody {
    Skills(Vec<SkillBar>),
    Experience(Vec<JobBlock>),
    Education(Vec<SplitRow>),
    LinksExtras(LinksExtras),
}

impl SectionBody {
    /// Number of top-level items in the body.
    pub fn item_count(&self) -> usize {
        match self {
            Self::Skills(bars) => bars.len(),
            Self::Experience(blocks) => blocks.len(),
            Self::Education(rows) => rows.len(),
            Self::LinksExtras(extras) => {
                extras.links.len() + extras.awards.len() + extras.languages.len()
            }
        }
    }
}

/// Heading row plus bullet list for one job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobBlock {
    pub heading: SplitRow,
    pub bullets: Vec<String>,
}

/// Links in one column; awards and languages stacked in the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinksExtras {
    pub links: Vec<InfoPill>,
    pub awards: Vec<String>,
    pub languages: Vec<String>,
}

impl LinksExtras {
    pub const LINKS_HEADING: &'static str = "Links";
    pub const AWARDS_HEADING: &'static str = "Awards";
    pub const LANGUAGES_HEADING: &'static str = "Languages";
}
