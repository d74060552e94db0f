//! Shared helpers and tests for the codec-independent pieces.

mod escape;

use quire_babel::model::{Document, Paragraph, Segment};

/// One line per paragraph: `<kind>: <style> "<text>" | ...`, after normalization.
pub fn dump(doc: &Document) -> String {
    doc.normalized()
        .iter()
        .map(dump_paragraph)
        .collect::<Vec<_>>()
        .join("\n")
}

fn dump_paragraph(paragraph: &Paragraph) -> String {
    let kind = paragraph
        .heading
        .map_or_else(|| "p".to_string(), |level| level.to_string());
    let segments: Vec<String> = paragraph.segments.iter().map(dump_segment).collect();
    format!("{kind}: {}", segments.join(" | "))
}

fn dump_segment(segment: &Segment) -> String {
    let names = segment.style.names();
    let style = if names.is_empty() {
        "plain".to_string()
    } else {
        names.join("+")
    };
    format!("{style} {:?}", segment.text)
}
