//! Import tests for Markdown format (Markdown → Document)

use crate::common::dump;
use insta::assert_snapshot;
use quire_babel::format::Format;
use quire_babel::formats::markdown::MarkdownFormat;
use quire_babel::model::{Segment, TextStyle};

#[test]
fn test_kitchensink_import() {
    let md = include_str!("fixtures/kitchensink.md");
    let doc = MarkdownFormat::default()
        .parse(md)
        .expect("Failed to parse markdown");

    assert_snapshot!(dump(&doc), @r#########"
    h1: plain "Kitchen sink"
    p: plain "Some " | italic "italic" | plain " and " | bold "bold text" | plain " here."
    h3: plain "Nested " | bold "bold " | bold+italic "and italic"
    p: plain "####### seven markers"
    p: plain "# escaped heading"
    p: plain "Half **open and " | italic "shut"
    p: plain "snake_case and a*b stay " | italic "mostly"
    "#########);
}

#[test]
fn test_crlf_and_blank_runs() {
    let doc = MarkdownFormat::default()
        .parse("first\r\nline\r\n\r\n\r\n  \t\r\nsecond\r\n")
        .unwrap();

    assert_eq!(doc.len(), 2);
    assert_eq!(doc.paragraphs[0].text(), "first line");
    assert_eq!(doc.paragraphs[1].text(), "second");
}

#[test]
fn test_empty_source_is_empty_document() {
    let doc = MarkdownFormat::default().parse("\n\n").unwrap();
    assert!(doc.is_empty());
}

#[test]
fn test_empty_heading_keeps_one_empty_segment() {
    let doc = MarkdownFormat::default().parse("##").unwrap();
    let paragraph = &doc.paragraphs[0];
    assert_eq!(paragraph.heading.map(|level| level.get()), Some(2));
    assert_eq!(paragraph.segments, vec![Segment::empty()]);
}

#[test]
fn test_markers_close_only_on_the_same_token() {
    // The open `_` sits on top of the stack, so the second `*` cannot close.
    let doc = MarkdownFormat::default().parse("*one_ two*").unwrap();
    assert_eq!(
        doc.paragraphs[0].segments,
        vec![Segment::new("*one_ two*", TextStyle::PLAIN)]
    );

    let doc = MarkdownFormat::default().parse("*one _two_*").unwrap();
    assert_eq!(
        doc.paragraphs[0].segments,
        vec![Segment::new("one two", TextStyle::ITALIC)]
    );
}

#[test]
fn test_parse_bytes_rejects_invalid_utf8() {
    let result = MarkdownFormat::default().parse_bytes(b"caf\xe9");
    assert!(matches!(
        result,
        Err(quire_babel::FormatError::InvalidInput(_))
    ));
}
