//! Core data structures of the document model.

use super::style::{HeadingLevel, TextStyle};
use serde::{Deserialize, Serialize};

/// A run of text sharing one style set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub style: TextStyle,
}

impl Segment {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, TextStyle::PLAIN)
    }

    /// The empty, unstyled segment codecs emit for an empty paragraph.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A body paragraph or heading made of styled segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<HeadingLevel>,
    pub segments: Vec<Segment>,
}

impl Paragraph {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self {
            heading: None,
            segments,
        }
    }

    pub fn heading(level: HeadingLevel, segments: Vec<Segment>) -> Self {
        Self {
            heading: Some(level),
            segments,
        }
    }

    /// A single unstyled segment paragraph.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(vec![Segment::plain(text)])
    }

    pub fn is_heading(&self) -> bool {
        self.heading.is_some()
    }

    /// Concatenation of all segment texts in order.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Total length of the paragraph text in bytes.
    pub fn len(&self) -> usize {
        self.segments.iter().map(|s| s.text.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(Segment::is_empty)
    }

    /// Canonical form of the segment stream.
    ///
    /// Adjacent segments with identical styles are merged and empty segments
    /// dropped. A paragraph with no text keeps one empty segment.
    pub fn normalized(&self) -> Paragraph {
        Paragraph {
            heading: self.heading,
            segments: merge_segments(&self.segments),
        }
    }
}

pub(crate) fn merge_segments(segments: &[Segment]) -> Vec<Segment> {
    let mut merged: Vec<Segment> = Vec::with_capacity(segments.len());
    for segment in segments.iter().filter(|s| !s.is_empty()) {
        match merged.last_mut() {
            Some(last) if last.style == segment.style => last.text.push_str(&segment.text),
            _ => merged.push(segment.clone()),
        }
    }
    if merged.is_empty() {
        merged.push(Segment::empty());
    }
    merged
}

/// An ordered sequence of paragraphs in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub paragraphs: Vec<Paragraph>,
}

impl Document {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self { paragraphs }
    }

    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Paragraph> {
        self.paragraphs.iter()
    }

    /// Every paragraph in its [`Paragraph::normalized`] form.
    pub fn normalized(&self) -> Document {
        Document {
            paragraphs: self.paragraphs.iter().map(Paragraph::normalized).collect(),
        }
    }

    /// Copy out the part of the document covered by `range`.
    ///
    /// Endpoints past the end of the document or a paragraph are clamped, and
    /// byte offsets that fall inside a multi-byte character are moved back to
    /// the nearest character boundary. Paragraphs keep their heading level.
    pub fn slice(&self, range: DocumentRange) -> Document {
        let (start, end) = range.ordered();
        if self.paragraphs.is_empty() || start.paragraph >= self.paragraphs.len() {
            return Document::default();
        }
        let last = end.paragraph.min(self.paragraphs.len() - 1);
        let end_offset = if end.paragraph > last {
            usize::MAX
        } else {
            end.offset
        };

        let paragraphs = (start.paragraph..=last)
            .map(|index| {
                let from = if index == start.paragraph {
                    start.offset
                } else {
                    0
                };
                let to = if index == last { end_offset } else { usize::MAX };
                slice_paragraph(&self.paragraphs[index], from, to)
            })
            .collect();
        Document { paragraphs }
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Paragraph;
    type IntoIter = std::slice::Iter<'a, Paragraph>;

    fn into_iter(self) -> Self::IntoIter {
        self.paragraphs.iter()
    }
}

impl FromIterator<Paragraph> for Document {
    fn from_iter<I: IntoIterator<Item = Paragraph>>(iter: I) -> Self {
        Document {
            paragraphs: iter.into_iter().collect(),
        }
    }
}

fn slice_paragraph(paragraph: &Paragraph, from: usize, to: usize) -> Paragraph {
    let mut segments = Vec::new();
    let mut cursor = 0;
    for segment in &paragraph.segments {
        let seg_start = cursor;
        let seg_end = cursor + segment.text.len();
        cursor = seg_end;

        let lo = from.max(seg_start);
        let hi = to.min(seg_end);
        if lo >= hi {
            continue;
        }
        let lo = floor_char_boundary(&segment.text, lo - seg_start);
        let hi = floor_char_boundary(&segment.text, hi - seg_start);
        if lo < hi {
            segments.push(Segment::new(&segment.text[lo..hi], segment.style));
        }
    }
    if segments.is_empty() {
        segments.push(Segment::empty());
    }
    Paragraph {
        heading: paragraph.heading,
        segments,
    }
}

fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    if index >= text.len() {
        return text.len();
    }
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// A point in a document: paragraph index plus byte offset into its text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextPosition {
    pub paragraph: usize,
    pub offset: usize,
}

impl TextPosition {
    pub fn new(paragraph: usize, offset: usize) -> Self {
        Self { paragraph, offset }
    }
}

/// A selection between two positions. The endpoints may be given in either order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentRange {
    pub start: TextPosition,
    pub end: TextPosition,
}

impl DocumentRange {
    pub fn new(start: TextPosition, end: TextPosition) -> Self {
        Self { start, end }
    }

    fn ordered(self) -> (TextPosition, TextPosition) {
        if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        }
    }
}
