//! Plain-text writer for terminals and `.txt` exports.

use std::fmt::{self, Write as _};

use console::{measure_text_width, truncate_str};
use tracing::instrument;

use dsresume_core::{
    application::{ApplicationError, ports::DocumentWriter},
    domain::{
        ConsoleButton, Document, DocumentFormat, Footer, JobBlock, LinksExtras, Media,
        SectionBody, SkillBar, SplitRow, UpperScreen,
    },
    error::ResumeResult,
};

const ELLIPSIS: &str = "…";

/// Layout knobs for [`TextWriter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextOptions {
    /// Total line width in display columns.
    pub width: usize,
    /// Cells in a skill bar track.
    pub bar_width: usize,
    /// Columns allotted to each contact pill; longer values are clipped.
    pub pill_width: usize,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            width: 72,
            bar_width: 24,
            pill_width: 30,
        }
    }
}

/// Renders the document as box-drawn text.
#[derive(Debug, Clone, Default)]
pub struct TextWriter {
    options: TextOptions,
}

impl TextWriter {
    pub fn new(options: TextOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> TextOptions {
        self.options
    }

    fn write_page(&self, out: &mut String, doc: &Document, media: Media) -> fmt::Result {
        let width = self.options.width;

        self.write_upper(out, &doc.upper)?;

        let grips = vec!["▬"; usize::from(doc.hinge.slots)].join(" ");
        writeln!(out, "{}", split_line(&format!("── {} ", doc.hinge.label), &grips, width))?;
        writeln!(out)?;

        for section in doc.sections() {
            writeln!(out, "{}", section.card.heading())?;
            writeln!(out, "{}", "─".repeat(width))?;
            match &section.body {
                SectionBody::Skills(bars) => {
                    for bar in bars {
                        self.write_skill_bar(out, bar)?;
                    }
                }
                SectionBody::Experience(blocks) => {
                    for block in blocks {
                        self.write_job_block(out, block)?;
                    }
                }
                SectionBody::Education(rows) => {
                    for row in rows {
                        writeln!(out, "{}", split_row(row, width))?;
                    }
                }
                SectionBody::LinksExtras(extras) => self.write_extras(out, extras)?,
            }
            writeln!(out)?;
        }

        if ConsoleButton::visible_in(media) {
            let keys: Vec<String> = doc
                .lower
                .buttons
                .iter()
                .map(|b| format!("( {} )", b.key))
                .collect();
            writeln!(out, "{}", keys.join("   "))?;
        }

        if Footer::visible_in(media) {
            writeln!(out)?;
            writeln!(out, "{}", doc.footer.line())?;
        }

        Ok(())
    }

    fn write_upper(&self, out: &mut String, upper: &UpperScreen) -> fmt::Result {
        let width = self.options.width;

        let lamps: Vec<&str> = upper.lamps.iter().map(|l| l.color.as_str()).collect();
        writeln!(out, "● ● ●  {}", lamps.join(" / "))?;
        writeln!(out, "[portrait: {}]", upper.portrait.alt)?;
        writeln!(out)?;
        writeln!(out, "{}  [{}]", upper.badge.text, upper.badge.tag.to_uppercase())?;
        writeln!(out, "{}", upper.title)?;
        writeln!(out)?;
        for line in wrap(&upper.summary, width) {
            writeln!(out, "{line}")?;
        }
        writeln!(out)?;

        let cell = self.options.pill_width;
        for row in upper.contact_rows() {
            let labels: Vec<String> = row
                .iter()
                .map(|p| pad_right(&p.label.to_uppercase(), cell))
                .collect();
            let values: Vec<String> = row
                .iter()
                .map(|p| pad_right(&truncate_str(&p.value, cell.saturating_sub(1), ELLIPSIS), cell))
                .collect();
            writeln!(out, "{}", labels.concat().trim_end())?;
            writeln!(out, "{}", values.concat().trim_end())?;
        }
        writeln!(out)
    }

    fn write_skill_bar(&self, out: &mut String, bar: &SkillBar) -> fmt::Result {
        let track = self.options.bar_width;
        let filled = bar.filled_cells(track);
        let drawn = filled.min(track);
        let overflow = if filled > track { "»" } else { "" };

        let caption = split_line(&bar.label, &bar.caption(), self.options.width);
        writeln!(out, "{caption}")?;
        writeln!(
            out,
            "[{}{}]{}",
            "█".repeat(drawn),
            "░".repeat(track - drawn),
            overflow
        )
    }

    fn write_job_block(&self, out: &mut String, block: &JobBlock) -> fmt::Result {
        writeln!(out, "{}", split_row(&block.heading, self.options.width))?;
        for bullet in &block.bullets {
            writeln!(out, "  • {bullet}")?;
        }
        Ok(())
    }

    fn write_extras(&self, out: &mut String, extras: &LinksExtras) -> fmt::Result {
        writeln!(out, "{}", LinksExtras::LINKS_HEADING.to_uppercase())?;
        for link in &extras.links {
            writeln!(out, "  {}: {}", link.label, link.value)?;
        }
        writeln!(out, "{}", LinksExtras::AWARDS_HEADING.to_uppercase())?;
        for award in &extras.awards {
            writeln!(out, "  • {award}")?;
        }
        writeln!(out, "{}", LinksExtras::LANGUAGES_HEADING.to_uppercase())?;
        for language in &extras.languages {
            writeln!(out, "  • {language}")?;
        }
        Ok(())
    }
}

impl DocumentWriter for TextWriter {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Text
    }

    #[instrument(skip_all, fields(media = %media))]
    fn write(&self, document: &Document, media: Media) -> ResumeResult<String> {
        let mut out = String::new();
        self.write_page(&mut out, document, media)
            .map_err(|e| ApplicationError::RenderingFailed {
                reason: format!("text layout failed: {e}"),
            })?;
        Ok(out)
    }
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn split_row(row: &SplitRow, width: usize) -> String {
    split_line(&row.left, &row.right, width)
}

/// `left` at the start, `right` flush with column `width`, at least one space
/// between them.
fn split_line(left: &str, right: &str, width: usize) -> String {
    let used = measure_text_width(left) + measure_text_width(right);
    let gap = width.saturating_sub(used).max(1);
    format!("{left}{}{right}", " ".repeat(gap))
}

fn pad_right(text: &str, width: usize) -> String {
    let gap = width.saturating_sub(measure_text_width(text));
    format!("{text}{}", " ".repeat(gap))
}

/// Greedy word wrap by display width. Words wider than `width` get their own line.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            measure_text_width(word)
        } else {
            measure_text_width(&current) + 1 + measure_text_width(word)
        };

        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
