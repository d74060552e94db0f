use proptest::prelude::*;
use quire_babel::model::{Document, HeadingLevel, Paragraph, Segment, TextStyle};
use quire_babel::wordcount::{WordCountOptions, WordCounter};

fn options() -> impl Strategy<Value = WordCountOptions> {
    (any::<bool>(), any::<bool>(), 0u8..8).prop_map(|(case_sensitive, count_numbers, bits)| {
        WordCountOptions {
            excluded_styles: TextStyle::from_bits_truncate(bits),
            case_sensitive,
            count_numbers,
            ..WordCountOptions::default()
        }
    })
}

fn document() -> impl Strategy<Value = Document> {
    let segment = ("[a-zA-Z0-9 ,.'\\-\u{2014}]{0,12}", 0u8..8)
        .prop_map(|(text, bits)| Segment::new(text, TextStyle::from_bits_truncate(bits)));
    let paragraph = (
        proptest::option::of(1u8..=6),
        proptest::collection::vec(segment, 1..4),
    )
        .prop_map(|(level, segments)| Paragraph {
            heading: level.and_then(HeadingLevel::new),
            segments,
        });
    proptest::collection::vec(paragraph, 0..6).prop_map(Document::new)
}

proptest! {
    #[test]
    fn sum_matches_frequency_total(text in "\\PC{0,40}", options in options()) {
        let counter = WordCounter::new(options);
        prop_assert_eq!(counter.sum(&text), counter.count(&text).values().sum::<usize>());
    }

    #[test]
    fn document_sum_matches_section_totals(doc in document(), options in options()) {
        let counter = WordCounter::new(options);
        let count = counter.count_document(&doc);
        prop_assert_eq!(counter.sum_document(&doc), count.total());
        prop_assert!(count.rollup_totals().iter().all(|&rollup| rollup <= count.total()));
    }
}
