//! Export tests for Markdown format (Document → Markdown)

use quire_babel::format::Format;
use quire_babel::formats::markdown::{BoldMarker, MarkdownFormat, MarkdownOptions};
use quire_babel::model::{Document, HeadingLevel, Paragraph, Segment, TextStyle};
use std::collections::HashMap;

fn sample() -> Document {
    Document::new(vec![
        Paragraph::heading(HeadingLevel::new(2).unwrap(), vec![Segment::plain("Intro")]),
        Paragraph::new(vec![
            Segment::plain("a "),
            Segment::new("b", TextStyle::BOLD | TextStyle::ITALIC),
            Segment::plain(" c*d"),
        ]),
        Paragraph::new(vec![
            Segment::plain("#tag line\nnext"),
            Segment::new("x", TextStyle::STRIKETHROUGH),
        ]),
    ])
}

#[test]
fn test_export_with_asterisk_bold() {
    let md = MarkdownFormat::default().serialize(&sample()).unwrap();
    assert_eq!(md, "## Intro\n\na **_b_** c\\*d\n\n\\#tag line nextx\n");
}

#[test]
fn test_export_with_underscore_bold() {
    let format = MarkdownFormat::new(MarkdownOptions {
        bold_marker: BoldMarker::Underscores,
    });
    let md = format.serialize(&sample()).unwrap();
    assert_eq!(md, "## Intro\n\na __*b*__ c\\*d\n\n\\#tag line nextx\n");
}

#[test]
fn test_bold_marker_extra_parameter() {
    let mut options = HashMap::new();
    options.insert("bold-marker".to_string(), "__".to_string());
    let md = MarkdownFormat::default()
        .serialize_with_options(&sample(), &options)
        .unwrap();
    assert!(md.contains("__*b*__"));

    options.insert("bold-marker".to_string(), "~~".to_string());
    let result = MarkdownFormat::default().serialize_with_options(&sample(), &options);
    assert!(matches!(
        result,
        Err(quire_babel::FormatError::SerializationError(_))
    ));
}

#[test]
fn test_empty_document_exports_nothing() {
    let md = MarkdownFormat::default()
        .serialize(&Document::default())
        .unwrap();
    assert_eq!(md, "");
}

#[test]
fn test_adjacent_segments_are_merged_before_encoding() {
    let doc = Document::new(vec![Paragraph::new(vec![
        Segment::new("one ", TextStyle::BOLD),
        Segment::new("", TextStyle::ITALIC),
        Segment::new("two", TextStyle::BOLD),
    ])]);
    let md = MarkdownFormat::default().serialize(&doc).unwrap();
    assert_eq!(md, "**one two**\n");
}
