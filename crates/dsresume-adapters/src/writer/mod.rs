//! Document writers.
//!
//! One adapter per [`DocumentFormat`]; [`for_format`] picks the right one.

mod html;
mod json;
mod text;

pub use html::HtmlWriter;
pub use json::JsonWriter;
pub use text::{TextOptions, TextWriter};

use dsresume_core::{application::ports::DocumentWriter, domain::DocumentFormat};

/// Writer for `format`. `text` only applies to [`DocumentFormat::Text`].
pub fn for_format(format: DocumentFormat, text: TextOptions) -> Box<dyn DocumentWriter> {
    match format {
        DocumentFormat::Html => Box::new(HtmlWriter::new()),
        DocumentFormat::Text => Box::new(TextWriter::new(text)),
        DocumentFormat::Json => Box::new(JsonWriter::new()),
    }
}
