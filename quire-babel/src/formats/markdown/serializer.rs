//! Markdown serialization (Document → markdown text)

use super::inline::encode_segments;
use super::{MarkdownOptions, HEADING_MARKER};
use crate::common::escape::ESCAPE;
use crate::error::FormatError;
use crate::model::{Document, Paragraph};

/// Serialize a document, one line group per paragraph, blank line between.
pub fn serialize_to_markdown(
    doc: &Document,
    options: &MarkdownOptions,
) -> Result<String, FormatError> {
    let mut out = String::new();
    for (index, paragraph) in doc.iter().enumerate() {
        if index > 0 {
            out.push_str("\n\n");
        }
        out.push_str(&serialize_paragraph(paragraph, options));
    }
    if !out.is_empty() {
        out.push('\n');
    }

    tracing::debug!(
        paragraphs = doc.len(),
        bytes = out.len(),
        "serialized markdown"
    );
    Ok(out)
}

/// Render a single paragraph, including its heading prefix.
pub fn serialize_paragraph(paragraph: &Paragraph, options: &MarkdownOptions) -> String {
    let body = encode_segments(&paragraph.segments, options.bold_marker);
    match paragraph.heading {
        Some(level) => {
            let mut line = HEADING_MARKER
                .to_string()
                .repeat(usize::from(level.get()));
            line.push(' ');
            line.push_str(&body);
            line
        }
        // A body paragraph must not read back as a heading.
        None if body.starts_with(HEADING_MARKER) => format!("{ESCAPE}{body}"),
        None => body,
    }
}
