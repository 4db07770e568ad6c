//! JSON writer.

use serde::Serialize;
use tracing::instrument;

use dsresume_core::{
    application::{ApplicationError, ports::DocumentWriter},
    domain::{
        ConsoleButton, Document, DocumentFormat, Footer, Hinge, Media, Section, UpperScreen,
    },
    error::ResumeResult,
};

/// The document as a JSON consumer sees it for one media.
///
/// Screen-only widgets are left out entirely for print rather than emitted
/// as `null`.
#[derive(Serialize)]
struct PageView<'a> {
    media: Media,
    upper: &'a UpperScreen,
    hinge: &'a Hinge,
    sections: &'a [Section],
    #[serde(skip_serializing_if = "Option::is_none")]
    buttons: Option<&'a [ConsoleButton]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    footer: Option<&'a Footer>,
}

impl<'a> PageView<'a> {
    fn new(doc: &'a Document, media: Media) -> Self {
        Self {
            media,
            upper: &doc.upper,
            hinge: &doc.hinge,
            sections: doc.sections(),
            buttons: ConsoleButton::visible_in(media).then_some(&doc.lower.buttons[..]),
            footer: Footer::visible_in(media).then_some(&doc.footer),
        }
    }
}

/// Writes the document as JSON, pretty-printed by default.
#[derive(Debug, Clone, Copy)]
pub struct JsonWriter {
    pretty: bool,
}

impl JsonWriter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Single-line output.
    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentWriter for JsonWriter {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Json
    }

    #[instrument(skip_all, fields(media = %media, pretty = self.pretty))]
    fn write(&self, document: &Document, media: Media) -> ResumeResult<String> {
        let view = PageView::new(document, media);
        let result = if self.pretty {
            serde_json::to_string_pretty(&view)
        } else {
            serde_json::to_string(&view)
        };

        let mut json = result.map_err(|e| ApplicationError::RenderingFailed {
            reason: format!("JSON serialisation failed: {e}"),
        })?;
        json.push('\n');
        Ok(json)
    }
}
