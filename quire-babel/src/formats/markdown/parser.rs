//! Markdown parsing (markdown text → Document)
//!
//! Pipeline: text → line groups → heading prefix → inline segment decoder.

use super::inline::decode_segments;
use super::HEADING_MARKER;
use crate::error::FormatError;
use crate::model::{Document, HeadingLevel, Paragraph};

/// Parse markdown text into a fresh document.
///
/// Parsing never fails: unterminated markers degrade to literal text. The
/// `Result` keeps the signature aligned with the other codecs.
pub fn parse_from_markdown(source: &str) -> Result<Document, FormatError> {
    let paragraphs: Vec<Paragraph> = line_groups(source)
        .into_iter()
        .map(|group| parse_paragraph(&group))
        .collect();

    tracing::debug!(
        bytes = source.len(),
        paragraphs = paragraphs.len(),
        "parsed markdown"
    );
    Ok(Document::new(paragraphs))
}

/// Split the source into line groups.
///
/// A group is one or more non-blank lines joined by a single space, ended by a
/// blank line or the end of input.
pub fn line_groups(source: &str) -> Vec<String> {
    let mut groups = Vec::new();
    let mut current: Option<String> = None;

    for line in source.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() {
            if let Some(group) = current.take() {
                groups.push(group);
            }
            continue;
        }
        match current.as_mut() {
            Some(group) => {
                group.push(' ');
                group.push_str(line);
            }
            None => current = Some(line.to_string()),
        }
    }
    if let Some(group) = current {
        groups.push(group);
    }
    groups
}

/// Turn one line group into a paragraph.
pub fn parse_paragraph(group: &str) -> Paragraph {
    let (heading, body) = split_heading(group);
    Paragraph {
        heading,
        segments: decode_segments(body),
    }
}

/// Strip a leading heading prefix and at most one following space.
///
/// Runs of more than six markers are not headings and stay in the text.
fn split_heading(group: &str) -> (Option<HeadingLevel>, &str) {
    let count = group
        .bytes()
        .take_while(|&b| b == HEADING_MARKER as u8)
        .count();
    let Some(level) = u8::try_from(count).ok().and_then(HeadingLevel::new) else {
        return (None, group);
    };
    let rest = &group[count..];
    (Some(level), rest.strip_prefix(' ').unwrap_or(rest))
}
