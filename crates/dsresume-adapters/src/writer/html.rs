//! Standalone HTML writer.
//!
//! Produces one self-contained page with an embedded stylesheet. Print media
//! drops the face buttons and the footer and switches to a white background
//! so the browser's "Save as PDF" gives a clean letter-size sheet.

use std::fmt::{self, Write as _};

use tracing::instrument;

use dsresume_core::{
    application::{ApplicationError, ports::DocumentWriter},
    domain::{
        ConsoleButton, Document, DocumentFormat, Footer, InfoPill, JobBlock, LinksExtras, Media,
        Section, SectionBody, SkillBar, SplitRow, Stars, UpperScreen,
    },
    error::ResumeResult,
};

const STYLESHEET: &str = r#"
*{box-sizing:border-box}
body{margin:0;padding:24px;font-family:system-ui,sans-serif;background:linear-gradient(#e2e8f0,#cbd5e1,#94a3b8);color:#fff}
body.print{padding:0;background:#fff}
.shell{max-width:56rem;margin:0 auto;padding:12px;border-radius:28px;background:linear-gradient(#f1f5f9,#e2e8f0);box-shadow:0 25px 50px rgba(0,0,0,.25)}
body.print .shell{box-shadow:none}
.bezel{padding:8px;border-radius:22px;background:#2c2f39}
.upper{position:relative;padding:16px;border-radius:18px;border:1px solid #1e293b;background:linear-gradient(#1f2330,#0f1320)}
.lamps{display:flex;gap:8px;margin-bottom:12px}
.lamp{width:12px;height:12px;border-radius:50%}
.lamp.red{background:#ef4444}.lamp.yellow{background:#facc15}.lamp.green{background:#22c55e}
.upper-grid{display:grid;grid-template-columns:2fr 5fr;gap:16px}
.portrait{aspect-ratio:3/4;overflow:hidden;border-radius:12px;border:1px solid rgba(255,255,255,.2);background:linear-gradient(#1d4ed8,#1e3a8a);display:flex;align-items:center;justify-content:center}
.portrait img{max-width:100%}
.badge{display:inline-flex;align-items:center;gap:8px;padding:8px 16px;border-radius:16px;border:1px solid rgba(255,255,255,.2);background:rgba(255,255,255,.15)}
.badge-text{font-size:1.25rem;font-weight:800;letter-spacing:.1em}
.tag,.card-title{padding:2px 8px;border-radius:6px;background:linear-gradient(#ef4444,#b91c1c);font-size:10px;font-weight:900;text-transform:uppercase;letter-spacing:.1em}
.title{margin-top:12px;font-size:14px;opacity:.8}
.summary{margin-top:16px;font-size:13px;line-height:1.6;color:#e2e8f0}
.contacts{display:grid;grid-template-columns:1fr 1fr;gap:16px;margin-top:16px}
.pill{padding:8px 12px;border-radius:8px;border:1px solid rgba(255,255,255,.1);background:rgba(255,255,255,.05)}
.pill-label{font-size:10px;text-transform:uppercase;letter-spacing:.1em;opacity:.6}
.pill-value{font-size:12px;white-space:nowrap;overflow:hidden;text-overflow:ellipsis}
.stars{position:absolute;inset:0;width:100%;height:100%;pointer-events:none}
.hinge{display:flex;align-items:center;justify-content:space-between;margin:8px 0;padding:4px 16px;border-radius:8px;background:linear-gradient(#1e293b,#020617);color:#94a3b8;font-size:10px;letter-spacing:.1em}
.grips{display:flex;gap:4px}.grip{width:32px;height:8px;border-radius:2px;background:#334155}
.lower{margin-top:8px;padding:16px;border-radius:18px;border:1px solid #1e293b;background:linear-gradient(#1a1e2a,#0d111d)}
.cards{display:grid;grid-template-columns:1fr 1fr;gap:16px}
.card{padding:16px;border-radius:16px;border:1px solid rgba(255,255,255,.1);background:rgba(255,255,255,.04)}
.card-head{margin-bottom:12px}
.bar-caption,.split{display:flex;justify-content:space-between;font-size:12px}
.bar-track{height:8px;margin-bottom:12px;border-radius:9999px;background:rgba(255,255,255,.1)}
.bar-fill{height:8px;border-radius:9999px;background:linear-gradient(to right,#38bdf8,#fff,#ef4444)}
.split .right{opacity:.7}
ul{margin:8px 0;padding-left:20px;font-size:12px;opacity:.85}
h4{margin:12px 0 4px;font-size:11px;text-transform:uppercase;letter-spacing:.1em;opacity:.6}
.buttons{display:grid;grid-template-columns:repeat(4,1fr);gap:12px;margin-top:24px}
.button{padding:8px 16px;border-radius:9999px;text-align:center;font-weight:700}
.button.red{background:#dc2626}.button.blue{background:#2563eb}.button.white{background:#fff;color:#0f172a}.button.sky{background:#38bdf8}
.footer{margin-top:8px;text-align:center;font-size:12px;letter-spacing:.1em;color:#475569}
"#;

/// Writes the document as a standalone HTML5 page.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlWriter;

impl HtmlWriter {
    pub fn new() -> Self {
        Self
    }

    fn write_page(&self, out: &mut String, doc: &Document, media: Media) -> fmt::Result {
        let body_class = if media.is_print() { "print" } else { "screen" };

        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html lang=\"en\">")?;
        writeln!(out, "<head>")?;
        writeln!(out, "<meta charset=\"utf-8\">")?;
        writeln!(
            out,
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"
        )?;
        writeln!(out, "<title>{} | {}</title>", escape(&doc.upper.badge.text), escape(&doc.upper.title))?;
        writeln!(out, "<style>{STYLESHEET}</style>")?;
        writeln!(out, "</head>")?;
        writeln!(out, "<body class=\"{body_class}\">")?;
        writeln!(out, "<div class=\"shell\">")?;

        writeln!(out, "<div class=\"bezel\">")?;
        write_upper(out, &doc.upper)?;

        writeln!(out, "<div class=\"hinge\">")?;
        writeln!(out, "<span>{}</span>", escape(doc.hinge.label))?;
        write!(out, "<div class=\"grips\">")?;
        for _ in 0..doc.hinge.slots {
            write!(out, "<div class=\"grip\"></div>")?;
        }
        writeln!(out, "</div>")?;
        writeln!(out, "</div>")?;

        writeln!(out, "<section class=\"lower\">")?;
        writeln!(out, "<div class=\"cards\">")?;
        for section in doc.sections() {
            write_section(out, section)?;
        }
        writeln!(out, "</div>")?;

        if ConsoleButton::visible_in(media) {
            writeln!(out, "<div class=\"buttons\">")?;
            for button in &doc.lower.buttons {
                writeln!(
                    out,
                    "<div class=\"button {}\">{}</div>",
                    button.color.as_str(),
                    button.key
                )?;
            }
            writeln!(out, "</div>")?;
        }
        writeln!(out, "</section>")?;
        writeln!(out, "</div>")?;

        if Footer::visible_in(media) {
            let segments: Vec<String> = doc
                .footer
                .segments
                .iter()
                .map(|s| format!("<span>{}</span>", escape(s)))
                .collect();
            writeln!(
                out,
                "<div class=\"footer\">{}</div>",
                segments.join(&format!(" <span>{}</span> ", Footer::SEPARATOR))
            )?;
        }

        writeln!(out, "</div>")?;
        writeln!(out, "</body>")?;
        writeln!(out, "</html>")
    }
}

impl DocumentWriter for HtmlWriter {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Html
    }

    #[instrument(skip_all, fields(media = %media))]
    fn write(&self, document: &Document, media: Media) -> ResumeResult<String> {
        let mut out = String::with_capacity(16 * 1024);
        self.write_page(&mut out, document, media)
            .map_err(|e| ApplicationError::RenderingFailed {
                reason: format!("HTML layout failed: {e}"),
            })?;
        Ok(out)
    }
}

// ── regions ──────────────────────────────────────────────────────────────────

fn write_upper(out: &mut String, upper: &UpperScreen) -> fmt::Result {
    writeln!(out, "<section class=\"upper\">")?;

    write!(out, "<div class=\"lamps\">")?;
    for lamp in &upper.lamps {
        write!(out, "<div class=\"lamp {}\"></div>", lamp.color.as_str())?;
    }
    writeln!(out, "</div>")?;

    writeln!(out, "<div class=\"upper-grid\">")?;
    writeln!(
        out,
        "<div class=\"portrait\"><img src=\"{}\" alt=\"{}\"></div>",
        escape(&upper.portrait.source),
        escape(&upper.portrait.alt)
    )?;

    writeln!(out, "<div class=\"identity\">")?;
    writeln!(
        out,
        "<div class=\"badge\"><span class=\"badge-text\">{}</span><span class=\"tag\">{}</span></div>",
        escape(&upper.badge.text),
        escape(upper.badge.tag)
    )?;
    writeln!(out, "<div class=\"title\">{}</div>", escape(&upper.title))?;
    writeln!(out, "<p class=\"summary\">{}</p>", escape(&upper.summary))?;
    writeln!(out, "<div class=\"contacts\">")?;
    for pill in &upper.contacts {
        write_pill(out, pill)?;
    }
    writeln!(out, "</div>")?;
    writeln!(out, "</div>")?;
    writeln!(out, "</div>")?;

    write_stars(out, &upper.stars)?;
    writeln!(out, "</section>")
}

fn write_stars(out: &mut String, stars: &Stars) -> fmt::Result {
    write!(
        out,
        "<svg class=\"stars\" viewBox=\"0 0 100 100\" preserveAspectRatio=\"none\" aria-hidden=\"true\">"
    )?;
    for glint in &stars.glints {
        write!(
            out,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"white\" opacity=\"0.05\"/>",
            glint.x, glint.y, glint.radius
        )?;
    }
    writeln!(out, "</svg>")
}

fn write_pill(out: &mut String, pill: &InfoPill) -> fmt::Result {
    writeln!(
        out,
        "<div class=\"pill\"><div class=\"pill-label\">{}</div><div class=\"pill-value\">{}</div></div>",
        escape(&pill.label),
        escape(&pill.value)
    )
}

fn write_section(out: &mut String, section: &Section) -> fmt::Result {
    writeln!(out, "<div class=\"card {}\">", section.kind.as_str())?;
    writeln!(
        out,
        "<div class=\"card-head\"><span class=\"card-title\">{} {}</span></div>",
        escape(section.card.icon),
        escape(section.card.title)
    )?;

    match &section.body {
        SectionBody::Skills(bars) => {
            for bar in bars {
                write_skill_bar(out, bar)?;
            }
        }
        SectionBody::Experience(blocks) => {
            for block in blocks {
                write_job_block(out, block)?;
            }
        }
        SectionBody::Education(rows) => {
            writeln!(out, "<ul class=\"plain\">")?;
            for row in rows {
                write!(out, "<li>")?;
                write_split(out, row)?;
                writeln!(out, "</li>")?;
            }
            writeln!(out, "</ul>")?;
        }
        SectionBody::LinksExtras(extras) => write_extras(out, extras)?,
    }

    writeln!(out, "</div>")
}

fn write_skill_bar(out: &mut String, bar: &SkillBar) -> fmt::Result {
    writeln!(
        out,
        "<div class=\"bar-caption\"><span>{}</span><span>{}</span></div>",
        escape(&bar.label),
        bar.caption()
    )?;
    // Width is the raw value; the track clips anything above 100%.
    writeln!(
        out,
        "<div class=\"bar-track\"><div class=\"bar-fill\" style=\"width: {}%\"></div></div>",
        bar.value
    )
}

fn write_job_block(out: &mut String, block: &JobBlock) -> fmt::Result {
    writeln!(out, "<div class=\"job\">")?;
    write_split(out, &block.heading)?;
    write!(out, "<ul>")?;
    for bullet in &block.bullets {
        write!(out, "\n<li>{}</li>", escape(bullet))?;
    }
    if !block.bullets.is_empty() {
        writeln!(out)?;
    }
    writeln!(out, "</ul>")?;
    writeln!(out, "</div>")
}

fn write_split(out: &mut String, row: &SplitRow) -> fmt::Result {
    write!(
        out,
        "<div class=\"split\"><span class=\"left\">{}</span><span class=\"right\">{}</span></div>",
        escape(&row.left),
        escape(&row.right)
    )
}

fn write_extras(out: &mut String, extras: &LinksExtras) -> fmt::Result {
    writeln!(out, "<h4>{}</h4>", escape(LinksExtras::LINKS_HEADING))?;
    writeln!(out, "<ul>")?;
    for link in &extras.links {
        writeln!(
            out,
            "<li><strong>{}:</strong> {}</li>",
            escape(&link.label),
            escape(&link.value)
        )?;
    }
    writeln!(out, "</ul>")?;

    for (heading, items) in [
        (LinksExtras::AWARDS_HEADING, &extras.awards),
        (LinksExtras::LANGUAGES_HEADING, &extras.languages),
    ] {
        writeln!(out, "<h4>{}</h4>", escape(heading))?;
        writeln!(out, "<ul>")?;
        for item in items {
            writeln!(out, "<li>{}</li>", escape(item))?;
        }
        writeln!(out, "</ul>")?;
    }
    Ok(())
}

/// Escape text for element content and double-quoted attributes.
pub(crate) fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_handles_markup_characters() {
        assert_eq!(
            escape(r#"<a href="x">R&D's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;R&amp;D&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn escape_leaves_plain_text() {
        assert_eq!(escape("Unity / C# — 2024–Present"), "Unity / C# — 2024–Present");
    }

    #[test]
    fn skill_bar_width_is_not_clamped() {
        let mut out = String::new();
        write_skill_bar(&mut out, &SkillBar::new("Overdrive", 140)).unwrap();
        assert!(out.contains("style=\"width: 140%\""));
        assert!(out.contains("140%</span>"));
    }

    #[test]
    fn job_without_bullets_keeps_an_empty_list() {
        let block = JobBlock {
            heading: SplitRow::new("Quiet Co", "2019"),
            bullets: vec![],
        };
        let mut out = String::new();
        write_job_block(&mut out, &block).unwrap();
        assert!(out.contains("Quiet Co"));
        assert!(out.contains("<ul></ul>"));
        assert!(!out.contains("<li>"));
    }
}
