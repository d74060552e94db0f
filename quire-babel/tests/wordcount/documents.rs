use quire_babel::format::Format;
use quire_babel::formats::markdown::MarkdownFormat;
use quire_babel::model::{DocumentRange, TextPosition, TextStyle};
use quire_babel::wordcount::{WordCountOptions, WordCounter};

const OUTLINE: &str = "# One\n\nalpha beta\n\n## Two\n\ngamma *delta*\n\n# Three\n\nepsilon\n";

#[test]
fn test_sections_follow_headings() {
    let doc = MarkdownFormat::default().parse(OUTLINE).unwrap();
    let count = WordCounter::default().count_document(&doc);

    let headings: Vec<&str> = count.sections.iter().map(|s| s.heading.as_str()).collect();
    assert_eq!(headings, vec!["One", "Two", "Three"]);

    let totals: Vec<usize> = count.sections.iter().map(|s| s.total()).collect();
    assert_eq!(totals, vec![3, 3, 2]);
    assert_eq!(count.rollup_totals(), vec![6, 3, 2]);
    assert_eq!(count.total(), 8);
}

#[test]
fn test_excluded_style_is_not_counted() {
    let doc = MarkdownFormat::default().parse(OUTLINE).unwrap();
    let counter = WordCounter::new(WordCountOptions {
        excluded_styles: TextStyle::ITALIC,
        ..WordCountOptions::default()
    });

    let count = counter.count_document(&doc);
    assert_eq!(count.sections[1].total(), 2);
    assert!(!count.frequencies().contains_key("delta"));
    assert_eq!(counter.sum_document(&doc), 7);
}

#[test]
fn test_selection_spanning_sections() {
    let doc = MarkdownFormat::default().parse(OUTLINE).unwrap();
    // From "beta" to the end of "gamma".
    let range = DocumentRange::new(TextPosition::new(1, 6), TextPosition::new(3, 5));
    let count = WordCounter::default().count_selection(&doc, range);

    assert_eq!(count.sections.len(), 2);
    assert!(count.sections[0].is_preamble());
    assert_eq!(count.sections[0].total(), 1);
    assert_eq!(count.sections[1].heading, "Two");
    assert_eq!(count.total(), 3);
}

#[test]
fn test_document_count_serializes_to_json() {
    let doc = MarkdownFormat::default().parse(OUTLINE).unwrap();
    let count = WordCounter::default().count_document(&doc);
    let json = serde_json::to_value(&count).unwrap();

    assert_eq!(json["sections"][1]["heading"], "Two");
    assert_eq!(json["sections"][1]["level"], 2);
    assert_eq!(json["sections"][1]["words"]["gamma"], 1);
}

#[test]
fn test_word_count_examples() {
    let counter = WordCounter::default();
    assert_eq!(counter.sum("there are 7 words in this string"), 6);

    let words = counter.count("The cat and the hat. The end");
    assert_eq!(words.get("the"), Some(&3));
    assert_eq!(words.get("hat"), Some(&1));
    assert_eq!(words.values().sum::<usize>(), 7);
}
