//! Built-in résumé record.
//!
//! [`record`] is the single entry-point for the content that ships with
//! dsresume. It is compiled in: there is no file, environment variable, or
//! network source to consult. To change what the page shows, edit the builder
//! chain below and rebuild.
//!
//! The builder validates on `build()`, so an authoring mistake (a blank
//! contact field, a skill above 100%) surfaces as a [`ResumeError`] the first
//! time the record is loaded rather than as a silently wrong page.

use tracing::{debug, instrument};

use dsresume_core::{
    domain::{Job, ResumeRecord},
    error::ResumeResult,
};

/// Build the shipped record.
#[instrument]
pub fn record() -> ResumeResult<ResumeRecord> {
    let record = ResumeRecord::builder()
        .name("TONY ZHAROFF")
        .title("GAME / XR DEVELOPER & EDUCATOR")
        .phone("+1 (253) 223–8069")
        .email("tony.zharoff@gmail.com")
        .site("tzharoff.com")
        .location("Seattle, WA")
        .summary(
            "Designer/developer blending rapid prototyping with playful, family‑friendly \
             sensibilities. Ships vertical slices, mentors teams, and builds memorable \
             interactive experiences.",
        )
        // Skills
        .skill("Unity / C#", 95)
        .skill("Prototyping", 95)
        .skill("Project Management", 90)
        .skill("Level Design", 90)
        .skill("VR/AR (XR)", 85)
        .skill("C++ Basics", 70)
        .skill("Blender", 75)
        // Links
        .link("LinkedIn", "linkedin.com/in/tzharoff")
        .link("GitHub", "github.com/tony")
        .link("Portfolio", "tzharoff.com")
        // Education
        .education("WGU — B.S. Software Development", "2023")
        .education("ITT Tech — B.A. Game Design", "2010")
        // Experience
        .job(
            Job::new("[P1] Games (Volunteer Mentor)", "2024–Present")
                .point("Led teams to ship award‑winning prototypes and improve schedules.")
                .point("Answered dev questions and embedded industry practices."),
        )
        .job(
            Job::new("Coding Dojo — Unity/C# Instructor", "2022–2023")
                .point("Taught fundamentals, design patterns, and project delivery.")
                .point("Guided capstone teams through vertical slices."),
        )
        .job(
            Job::new(
                "Cerulean Games / Iron Belly / Cypher Kids Club — Unity Dev",
                "2011–2014",
            )
            .point("R&D prototypes for AR/interactive experiences with major brands.")
            .point("Multi‑user experiences, performance tuning, asset pipelines."),
        )
        .job(Job::new("blah", "xxxx-yyyy").point("#1").point("#2"))
        // Extras
        .award("Mentor leadership awards (student showcases)")
        .award("Local community STEM outreach speaker")
        .language("English (native)")
        .build()?;

    debug!(
        skills = record.skills().len(),
        jobs = record.experience().len(),
        "Built-in record loaded"
    );

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_record_is_valid() {
        assert!(record().is_ok());
    }

    #[test]
    fn builtin_record_has_expected_counts() {
        let r = record().unwrap();
        assert_eq!(r.skills().len(), 7);
        assert_eq!(r.experience().len(), 4);
        assert_eq!(r.education().len(), 2);
        assert_eq!(r.links().len(), 3);
        assert_eq!(r.awards().len(), 2);
        assert_eq!(r.languages().len(), 1);
    }

    #[test]
    fn skills_keep_authoring_order() {
        let r = record().unwrap();
        let labels: Vec<_> = r.skills().iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels.first(), Some(&"Unity / C#"));
        assert_eq!(labels.last(), Some(&"Blender"));
    }

    #[test]
    fn placeholder_job_has_two_points() {
        let r = record().unwrap();
        let last = r.experience().last().unwrap();
        assert_eq!(last.company, "blah");
        assert_eq!(last.points, vec!["#1", "#2"]);
    }
}
