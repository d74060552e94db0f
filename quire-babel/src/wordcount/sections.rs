//! Per-section word statistics for a whole document.

use super::WordFrequencies;
use crate::model::HeadingLevel;
use serde::Serialize;

/// Words counted between one heading and the next.
///
/// The text before the first heading forms a preamble section without a
/// heading level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Section {
    pub heading: String,
    pub level: Option<HeadingLevel>,
    pub words: WordFrequencies,
}

impl Section {
    pub(crate) fn preamble() -> Self {
        Self::default()
    }

    pub(crate) fn new(heading: impl Into<String>, level: HeadingLevel) -> Self {
        Self {
            heading: heading.into(),
            level: Some(level),
            words: WordFrequencies::new(),
        }
    }

    pub fn is_preamble(&self) -> bool {
        self.level.is_none()
    }

    /// Number of words counted in this section alone.
    pub fn total(&self) -> usize {
        self.words.values().sum()
    }
}

/// Result of counting a document, one entry per section in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentCount {
    pub sections: Vec<Section>,
}

impl DocumentCount {
    pub fn total(&self) -> usize {
        self.sections.iter().map(Section::total).sum()
    }

    /// Frequencies across all sections.
    pub fn frequencies(&self) -> WordFrequencies {
        let mut merged = WordFrequencies::new();
        for section in &self.sections {
            for (word, count) in &section.words {
                *merged.entry(word.clone()).or_insert(0) += count;
            }
        }
        merged
    }

    /// Totals that include nested subsections.
    ///
    /// Entry `i` is section `i`'s own total plus every following section with
    /// a deeper heading level, up to the next heading at the same or a higher
    /// level. The preamble only counts itself.
    pub fn rollup_totals(&self) -> Vec<usize> {
        let own: Vec<usize> = self.sections.iter().map(Section::total).collect();
        self.sections
            .iter()
            .enumerate()
            .map(|(index, section)| {
                let Some(level) = section.level else {
                    return own[index];
                };
                let nested: usize = self.sections[index + 1..]
                    .iter()
                    .zip(&own[index + 1..])
                    .take_while(|(next, _)| next.level.is_some_and(|l| l > level))
                    .map(|(_, total)| *total)
                    .sum();
                own[index] + nested
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(level: Option<u8>, words: usize) -> Section {
        let mut freq = WordFrequencies::new();
        if words > 0 {
            freq.insert("w".to_string(), words);
        }
        Section {
            heading: String::new(),
            level: level.and_then(HeadingLevel::new),
            words: freq,
        }
    }

    #[test]
    fn rollup_includes_deeper_sections_only() {
        let count = DocumentCount {
            sections: vec![
                section(None, 1),
                section(Some(1), 2),
                section(Some(2), 3),
                section(Some(3), 4),
                section(Some(2), 5),
                section(Some(1), 6),
            ],
        };
        assert_eq!(count.rollup_totals(), vec![1, 14, 7, 4, 5, 6]);
        assert_eq!(count.total(), 21);
    }

    #[test]
    fn frequencies_merge_sections() {
        let mut first = Section::preamble();
        first.words.insert("a".to_string(), 1);
        let mut second = Section::new("H", HeadingLevel::new(1).unwrap());
        second.words.insert("a".to_string(), 2);
        second.words.insert("b".to_string(), 1);
        let count = DocumentCount {
            sections: vec![first, second],
        };
        let merged = count.frequencies();
        assert_eq!(merged.get("a"), Some(&3));
        assert_eq!(merged.get("b"), Some(&1));
    }
}
