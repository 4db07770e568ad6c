use serde::Serialize;

use crate::domain::error::DomainError;

// ============================================================================
// ResumeRecord - The Single Source of Page Content
// ============================================================================

/// The résumé content shown on the page.
///
/// Built once through [`ResumeRecordBuilder`] and never mutated. Every
/// sequence keeps its authoring order, which is also its display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeRecord {
    name: String,
    title: String,
    phone: String,
    email: String,
    site: String,
    location: String,
    summary: String,
    portrait: Portrait,
    skills: Vec<Skill>,
    links: Vec<Link>,
    education: Vec<Education>,
    experience: Vec<Job>,
    awards: Vec<String>,
    languages: Vec<String>,
}

impl ResumeRecord {
    pub fn builder() -> ResumeRecordBuilder {
        ResumeRecordBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn site(&self) -> &str {
        &self.site
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn portrait(&self) -> &Portrait {
        &self.portrait
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn education(&self) -> &[Education] {
        &self.education
    }

    pub fn experience(&self) -> &[Job] {
        &self.experience
    }

    pub fn awards(&self) -> &[String] {
        &self.awards
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Check the authoring invariants.
    ///
    /// Called by the builder; exposed so callers holding a record can re-check.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (field, value) in [
            ("name", &self.name),
            ("title", &self.title),
            ("phone", &self.phone),
            ("email", &self.email),
            ("site", &self.site),
            ("location", &self.location),
            ("summary", &self.summary),
        ] {
            require_text(field, value)?;
        }

        for (i, skill) in self.skills.iter().enumerate() {
            require_text(&format!("skills[{i}].label"), &skill.label)?;
            if skill.level > Skill::MAX_LEVEL {
                return Err(DomainError::LevelOutOfRange {
                    label: skill.label.clone(),
                    level: skill.level,
                });
            }
        }

        for (i, link) in self.links.iter().enumerate() {
            require_text(&format!("links[{i}].label"), &link.label)?;
        }

        for (i, entry) in self.education.iter().enumerate() {
            require_text(&format!("education[{i}].school"), &entry.school)?;
        }

        for (i, job) in self.experience.iter().enumerate() {
            require_text(&format!("experience[{i}].company"), &job.company)?;
        }

        Ok(())
    }
}

fn require_text(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::EmptyField {
            field: field.to_string(),
        });
    }
    Ok(())
}

// ============================================================================
// Record parts
// ============================================================================

/// A skill and its self-assessed level in percent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub label: String,
    pub level: u8,
}

impl Skill {
    pub const MAX_LEVEL: u8 = 100;

    pub fn new(label: impl Into<String>, level: u8) -> Self {
        Self {
            label: label.into(),
            level,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    pub value: String,
}

impl Link {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Education {
    pub school: String,
    pub year: String,
}

impl Education {
    pub fn new(school: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            school: school.into(),
            year: year.into(),
        }
    }
}

/// One position held. `points` may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Job {
    pub company: String,
    pub years: String,
    pub points: Vec<String>,
}

impl Job {
    pub fn new(company: impl Into<String>, years: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            years: years.into(),
            points: Vec::new(),
        }
    }

    pub fn point(mut self, point: impl Into<String>) -> Self {
        self.points.push(point.into());
        self
    }
}

/// Reference to the portrait image. The image itself is never loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Portrait {
    pub source: String,
    pub alt: String,
}

impl Portrait {
    pub const DEFAULT_SOURCE: &'static str = "images/Profile_Pic_Circle.png";

    pub fn new(source: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alt: alt.into(),
        }
    }

    fn default_for(name: &str) -> Self {
        Self::new(
            Self::DEFAULT_SOURCE,
            format!("{} Cartoon Profile Picture", title_case(name)),
        )
    }
}

/// "TONY ZHAROFF" -> "Tony Zharoff"
fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// ResumeRecordBuilder
// ============================================================================

#[derive(Debug, Default)]
pub struct ResumeRecordBuilder {
    name: Option<String>,
    title: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    site: Option<String>,
    location: Option<String>,
    summary: Option<String>,
    portrait: Option<Portrait>,
    skills: Vec<Skill>,
    links: Vec<Link>,
    education: Vec<Education>,
    experience: Vec<Job>,
    awards: Vec<String>,
    languages: Vec<String>,
}

impl ResumeRecordBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn site(mut self, site: impl Into<String>) -> Self {
        self.site = Some(site.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn portrait(mut self, portrait: Portrait) -> Self {
        self.portrait = Some(portrait);
        self
    }

    /// Append a skill (accumulates, order preserved).
    pub fn skill(mut self, label: impl Into<String>, level: u8) -> Self {
        self.skills.push(Skill::new(label, level));
        self
    }

    pub fn link(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.links.push(Link::new(label, value));
        self
    }

    pub fn education(mut self, school: impl Into<String>, year: impl Into<String>) -> Self {
        self.education.push(Education::new(school, year));
        self
    }

    pub fn job(mut self, job: Job) -> Self {
        self.experience.push(job);
        self
    }

    pub fn award(mut self, award: impl Into<String>) -> Self {
        self.awards.push(award.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.languages.push(language.into());
        self
    }

    /// Consume builder and construct `ResumeRecord`.
    ///
    /// # Errors
    ///
    /// - `MissingRequiredField` if an identity or contact field was never set
    /// - `EmptyField` / `LevelOutOfRange` from [`ResumeRecord::validate`]
    pub fn build(self) -> Result<ResumeRecord, DomainError> {
        let name = self
            .name
            .ok_or(DomainError::MissingRequiredField { field: "name" })?;
        let portrait = self
            .portrait
            .unwrap_or_else(|| Portrait::default_for(&name));

        let record = ResumeRecord {
            title: self
                .title
                .ok_or(DomainError::MissingRequiredField { field: "title" })?,
            phone: self
                .phone
                .ok_or(DomainError::MissingRequiredField { field: "phone" })?,
            email: self
                .email
                .ok_or(DomainError::MissingRequiredField { field: "email" })?,
            site: self
                .site
                .ok_or(DomainError::MissingRequiredField { field: "site" })?,
            location: self
                .location
                .ok_or(DomainError::MissingRequiredField { field: "location" })?,
            summary: self
                .summary
                .ok_or(DomainError::MissingRequiredField { field: "summary" })?,
            name,
            portrait,
            skills: self.skills,
            links: self.links,
            education: self.education,
            experience: self.experience,
            awards: self.awards,
            languages: self.languages,
        };

        record.validate()?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> ResumeRecordBuilder {
        ResumeRecord::builder()
            .name("ADA LOVELACE")
            .title("ANALYST")
            .phone("555-0100")
            .email("ada@example.com")
            .site("example.com")
            .location("London")
            .summary("First programmer.")
    }

    #[test]
    fn builds_minimal_record() {
        let record = minimal().build().unwrap();
        assert_eq!(record.name(), "ADA LOVELACE");
        assert!(record.skills().is_empty());
        assert!(record.experience().is_empty());
    }

    #[test]
    fn missing_field_is_reported() {
        let result = ResumeRecord::builder().name("X").build();
        assert_eq!(
            result.unwrap_err(),
            DomainError::MissingRequiredField { field: "title" }
        );
    }

    #[test]
    fn blank_name_is_rejected() {
        let result = minimal().name("   ").build();
        assert_eq!(
            result.unwrap_err(),
            DomainError::EmptyField {
                field: "name".into()
            }
        );
    }

    #[test]
    fn level_above_hundred_is_rejected() {
        let result = minimal().skill("Overclocked", 101).build();
        assert!(matches!(
            result,
            Err(DomainError::LevelOutOfRange { level: 101, .. })
        ));
    }

    #[test]
    fn boundary_levels_are_accepted() {
        let record = minimal().skill("None", 0).skill("All", 100).build().unwrap();
        assert_eq!(record.skills()[0].level, 0);
        assert_eq!(record.skills()[1].level, 100);
    }

    #[test]
    fn blank_skill_label_names_its_index() {
        let result = minimal().skill("Rust", 80).skill("", 50).build();
        assert_eq!(
            result.unwrap_err(),
            DomainError::EmptyField {
                field: "skills[1].label".into()
            }
        );
    }

    #[test]
    fn job_without_points_is_valid() {
        let record = minimal().job(Job::new("Quiet Co", "2020")).build().unwrap();
        assert!(record.experience()[0].points.is_empty());
    }

    #[test]
    fn default_portrait_uses_name() {
        let record = minimal().build().unwrap();
        assert_eq!(record.portrait().source, Portrait::DEFAULT_SOURCE);
        assert_eq!(record.portrait().alt, "Ada Lovelace Cartoon Profile Picture");
    }

    #[test]
    fn duplicate_link_labels_are_allowed() {
        let record = minimal()
            .link("Site", "a.example")
            .link("Site", "b.example")
            .build()
            .unwrap();
        assert_eq!(record.links().len(), 2);
    }
}
