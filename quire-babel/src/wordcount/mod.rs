//! Word counting over plain text and styled documents.
//!
//! One left-to-right scan drives every operation. Letters and digits are
//! accumulated into a word; any other character, or a configured separator,
//! ends it. Purely numeric tokens are dropped unless `count_numbers` is set.
//!
//! [`WordCounter::sum`] only counts and never builds a frequency map, which
//! makes it the cheaper choice for a live word counter. Counting a document
//! partitions the result into [`Section`]s at heading paragraphs; a heading's
//! own words belong to the section it starts.
//!
//! Counting is a pure function of the input and the options, so it can run on
//! any thread against a document snapshot.

mod scanner;
pub mod sections;

pub use sections::{DocumentCount, Section};

use crate::model::{Document, DocumentRange, Segment, TextStyle};
use scanner::Scanner;
use std::collections::BTreeMap;

/// Word → number of occurrences.
pub type WordFrequencies = BTreeMap<String, usize>;

/// Separators used when none are configured.
pub const DEFAULT_SEPARATORS: &[&str] = &[" ", "--", "---", "\u{2013}", "\u{2014}", ",", ".", "\n"];

/// Knobs read at scan time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCountOptions {
    /// Segments carrying any of these styles are skipped entirely.
    pub excluded_styles: TextStyle,
    /// Count "Word" and "word" separately.
    pub case_sensitive: bool,
    /// Count tokens made only of digits.
    pub count_numbers: bool,
    /// Substrings that always end a word.
    pub separators: Vec<String>,
}

impl Default for WordCountOptions {
    fn default() -> Self {
        Self {
            excluded_styles: TextStyle::empty(),
            case_sensitive: false,
            count_numbers: false,
            separators: DEFAULT_SEPARATORS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Counts words according to a set of [`WordCountOptions`].
#[derive(Debug, Clone, Default)]
pub struct WordCounter {
    options: WordCountOptions,
}

impl WordCounter {
    pub fn new(options: WordCountOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &WordCountOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut WordCountOptions {
        &mut self.options
    }

    /// Frequency of every word in `text`.
    pub fn count(&self, text: &str) -> WordFrequencies {
        let mut words = WordFrequencies::new();
        let mut scanner = Scanner::new(&self.options, true, |word: &str| {
            tally(&mut words, word);
        });
        scanner.feed(text);
        scanner.finish();
        words
    }

    /// Number of words in `text`, without building a frequency map.
    pub fn sum(&self, text: &str) -> usize {
        let mut total = 0;
        let mut scanner = Scanner::new(&self.options, false, |_: &str| total += 1);
        scanner.feed(text);
        scanner.finish();
        total
    }

    /// Frequency of every word in a run of segments, honouring excluded styles.
    pub fn count_segments(&self, segments: &[Segment]) -> WordFrequencies {
        let mut words = WordFrequencies::new();
        self.tally_segments(segments, &mut words);
        words
    }

    /// Number of words in a run of segments, honouring excluded styles.
    pub fn sum_segments(&self, segments: &[Segment]) -> usize {
        let mut total = 0;
        let mut scanner = Scanner::new(&self.options, false, |_: &str| total += 1);
        self.feed_segments(&mut scanner, segments);
        scanner.finish();
        total
    }

    /// Total number of words in a document.
    pub fn sum_document(&self, doc: &Document) -> usize {
        doc.iter()
            .map(|paragraph| self.sum_segments(&paragraph.segments))
            .sum()
    }

    /// Count a document section by section.
    ///
    /// Text before the first heading goes into a preamble section, which is
    /// omitted when it holds no words and a heading follows. A document without
    /// headings yields exactly one (preamble) section.
    pub fn count_document(&self, doc: &Document) -> DocumentCount {
        let mut sections = Vec::new();
        let mut current = Section::preamble();

        for paragraph in doc {
            if let Some(level) = paragraph.heading {
                let heading = paragraph.text();
                let finished =
                    std::mem::replace(&mut current, Section::new(heading.trim(), level));
                if !(finished.is_preamble() && finished.words.is_empty()) {
                    sections.push(finished);
                }
            }
            self.tally_segments(&paragraph.segments, &mut current.words);
        }
        sections.push(current);

        tracing::debug!(
            paragraphs = doc.len(),
            sections = sections.len(),
            "counted document"
        );
        DocumentCount { sections }
    }

    /// Count only the selected part of a document.
    pub fn count_selection(&self, doc: &Document, range: DocumentRange) -> DocumentCount {
        self.count_document(&doc.slice(range))
    }

    fn tally_segments(&self, segments: &[Segment], words: &mut WordFrequencies) {
        let mut scanner = Scanner::new(&self.options, true, |word: &str| tally(words, word));
        self.feed_segments(&mut scanner, segments);
        scanner.finish();
    }

    fn feed_segments<F: FnMut(&str)>(&self, scanner: &mut Scanner<'_, F>, segments: &[Segment]) {
        for segment in segments {
            if segment.style.intersects(self.options.excluded_styles) {
                scanner.flush();
            } else {
                scanner.feed(&segment.text);
            }
        }
    }
}

fn tally(words: &mut WordFrequencies, word: &str) {
    match words.get_mut(word) {
        Some(count) => *count += 1,
        None => {
            words.insert(word.to_string(), 1);
        }
    }
}
