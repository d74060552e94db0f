//! Import tests for HTML format (HTML → Document)

use crate::common::dump;
use insta::assert_snapshot;
use quire_babel::format::Format;
use quire_babel::formats::html::HtmlFormat;
use quire_babel::model::{Document, TextStyle};

fn parse(html: &str) -> Document {
    HtmlFormat.parse(html).expect("Failed to parse html")
}

#[test]
fn test_clipboard_fixture() {
    let doc = parse(include_str!("fixtures/clipboard.html"));

    assert_snapshot!(dump(&doc), @r#"
    h1: plain "Report " | italic "draft"
    p: plain "Plain and " | bold "bold" | plain " and " | bold+italic "both" | plain "."
    p: plain "not bold " | strikethrough "gone"
    p: plain "loose text"
    p: plain ""
    p: italic "after"
    "#);
}

#[test]
fn test_source_line_breaks_are_removed() {
    let doc = parse("<p>one\ntwo</p>");
    assert_eq!(doc.paragraphs[0].text(), "onetwo");
}

#[test]
fn test_nested_formatting_belongs_to_outer_element() {
    let doc = parse("<div><p>outer <b>inner <i>deep</i></b></p></div>");

    assert_snapshot!(dump(&doc), @r#"p: plain "outer " | bold "inner " | bold+italic "deep""#);
}

#[test]
fn test_inline_css_inside_heading() {
    let doc = parse(r#"<h2 style="font-style: italic">Title <span style="text-decoration: line-through">old</span></h2>"#);

    let paragraph = &doc.paragraphs[0];
    assert_eq!(paragraph.heading.map(|level| level.get()), Some(2));
    assert_eq!(paragraph.segments[0].style, TextStyle::ITALIC);
    assert_eq!(
        paragraph.segments[1].style,
        TextStyle::ITALIC | TextStyle::STRIKETHROUGH
    );
}

#[test]
fn test_plain_text_becomes_one_paragraph() {
    let doc = parse("just some text");
    assert_snapshot!(dump(&doc), @r#"p: plain "just some text""#);
}

#[test]
fn test_empty_input() {
    let doc = parse("");
    assert_snapshot!(dump(&doc), @r#"p: plain """#);
}

#[test]
fn test_scripts_are_not_text() {
    let doc = parse("<p>visible</p><script>var hidden = 1;</script>");
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.paragraphs[0].text(), "visible");
}

#[test]
fn test_serialization_is_not_supported() {
    let result = HtmlFormat.serialize(&Document::default());
    assert!(matches!(
        result,
        Err(quire_babel::FormatError::NotSupported(_))
    ));
}
