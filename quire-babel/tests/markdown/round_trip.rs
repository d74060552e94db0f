//! Markdown → Document → Markdown stability.

use proptest::prelude::*;
use quire_babel::format::Format;
use quire_babel::formats::markdown::{BoldMarker, MarkdownFormat, MarkdownOptions};
use quire_babel::model::{Document, HeadingLevel, Paragraph, Segment, TextStyle};

fn segment() -> impl Strategy<Value = Segment> {
    ("[a-z #*_\\\\]{1,6}", 0u8..8).prop_map(|(text, bits)| {
        Segment::new(text, TextStyle::from_bits_truncate(bits))
    })
}

fn paragraph() -> impl Strategy<Value = Paragraph> {
    (
        proptest::option::of(1u8..=6),
        proptest::collection::vec(segment(), 1..4),
    )
        .prop_map(|(level, segments)| Paragraph {
            heading: level.and_then(HeadingLevel::new),
            segments,
        })
        // Blank body paragraphs have no markdown form.
        .prop_filter("body text must not be blank", |paragraph| {
            paragraph.is_heading() || !paragraph.text().trim().is_empty()
        })
}

/// The document as markdown can carry it: strikethrough has no marker.
fn representable(doc: &Document) -> Document {
    let mut doc = doc.clone();
    for paragraph in &mut doc.paragraphs {
        for segment in &mut paragraph.segments {
            segment.style.remove(TextStyle::STRIKETHROUGH);
        }
    }
    doc.normalized()
}

fn bold_marker() -> impl Strategy<Value = BoldMarker> {
    prop_oneof![Just(BoldMarker::Asterisks), Just(BoldMarker::Underscores)]
}

proptest! {
    #[test]
    fn serialized_documents_parse_back(
        paragraphs in proptest::collection::vec(paragraph(), 0..5),
        bold_marker in bold_marker(),
    ) {
        let doc = Document::new(paragraphs);
        let format = MarkdownFormat::new(MarkdownOptions { bold_marker });

        let md = format.serialize(&doc).unwrap();
        let parsed = format.parse(&md).unwrap();

        prop_assert_eq!(parsed.normalized(), representable(&doc));
        prop_assert_eq!(format.serialize(&parsed).unwrap(), md);
    }
}

#[test]
fn test_fixture_is_stable_after_one_pass() {
    let format = MarkdownFormat::default();
    let md = include_str!("fixtures/kitchensink.md");

    let once = format.serialize(&format.parse(md).unwrap()).unwrap();
    let twice = format.serialize(&format.parse(&once).unwrap()).unwrap();
    assert_eq!(once, twice);
}
