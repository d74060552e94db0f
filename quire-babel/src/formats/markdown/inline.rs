//! Inline markers: the segment decoder and encoder.
//!
//! Decoding runs a marker stack over the paragraph text. Each unescaped marker
//! either closes the innermost open marker (exact token match only) or opens a
//! new nesting level. Text between split points is emitted with the union of
//! the styles of all open markers.
//!
//! Markers still open at the end of input are unterminated. Their tokens stay
//! in the text as literal characters and contribute no style, so unterminated
//! formatting degrades to plain text without ever failing. Inner pairs that
//! did close keep their style.
//!
//! Decoding makes two passes over the marker occurrences: the first finds the
//! unterminated ones, the second emits segments with those treated as text.
//! Each marker's next occurrence is cached, so finding the markers is a single
//! forward walk over the source.

use super::BoldMarker;
use crate::common::escape::{escape, index_of_unescaped, unescape};
use crate::model::nodes::merge_segments;
use crate::model::{Segment, TextStyle};

/// An inline formatting token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    DoubleAsterisk,
    DoubleUnderscore,
    Asterisk,
    Underscore,
}

impl Marker {
    /// Every marker, longest first so ties at one index resolve to bold.
    pub const ALL: [Marker; 4] = [
        Marker::DoubleAsterisk,
        Marker::DoubleUnderscore,
        Marker::Asterisk,
        Marker::Underscore,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Marker::DoubleAsterisk => "**",
            Marker::DoubleUnderscore => "__",
            Marker::Asterisk => "*",
            Marker::Underscore => "_",
        }
    }

    pub fn style(self) -> TextStyle {
        match self {
            Marker::DoubleAsterisk | Marker::DoubleUnderscore => TextStyle::BOLD,
            Marker::Asterisk | Marker::Underscore => TextStyle::ITALIC,
        }
    }

    fn len(self) -> usize {
        self.token().len()
    }
}

/// Forward-only search for the next unescaped marker.
///
/// Holds the next hit of every marker and only searches again for a marker
/// once the scan has moved past its cached hit.
struct MarkerScanner<'a> {
    text: &'a str,
    /// `None` once a marker has no further occurrence.
    hits: [Option<usize>; 4],
}

impl<'a> MarkerScanner<'a> {
    fn new(text: &'a str) -> Self {
        let hits = Marker::ALL.map(|marker| index_of_unescaped(text, marker.token(), 0));
        MarkerScanner { text, hits }
    }

    /// Earliest marker at or after `from`. `from` must never decrease.
    fn next_from(&mut self, from: usize) -> Option<(usize, Marker)> {
        for (hit, marker) in self.hits.iter_mut().zip(Marker::ALL) {
            if hit.is_some_and(|index| index < from) {
                *hit = index_of_unescaped(self.text, marker.token(), from);
            }
        }
        self.hits
            .iter()
            .zip(Marker::ALL)
            .filter_map(|(hit, marker)| hit.map(|index| (index, marker)))
            .min_by_key(|(index, _)| *index)
    }
}

/// All marker occurrences in reading order, each consuming its token.
fn scan_markers(source: &str) -> Vec<(usize, Marker)> {
    let mut scanner = MarkerScanner::new(source);
    let mut found = Vec::new();
    let mut split = 0;
    while let Some((index, marker)) = scanner.next_from(split) {
        found.push((index, marker));
        split = index + marker.len();
    }
    found
}

/// Flags the occurrences still open once the stack has seen every marker.
///
/// A marker closes the innermost open one only on an exact token match.
fn unterminated(markers: &[(usize, Marker)]) -> Vec<bool> {
    let mut stack: Vec<usize> = Vec::new();
    for (position, (_, marker)) in markers.iter().enumerate() {
        if stack.last().is_some_and(|&open| markers[open].1 == *marker) {
            stack.pop();
        } else {
            stack.push(position);
        }
    }

    let mut literal = vec![false; markers.len()];
    for &position in &stack {
        literal[position] = true;
    }
    if let Some(&outermost) = stack.first() {
        tracing::trace!(
            marker = markers[outermost].1.token(),
            offset = markers[outermost].0,
            open = stack.len(),
            "unterminated marker degraded to text"
        );
    }
    literal
}

fn push_piece(pieces: &mut Vec<Segment>, raw: &str, style: TextStyle) {
    if !raw.is_empty() {
        pieces.push(Segment::new(unescape(raw), style));
    }
}

/// Decode a flat marker-annotated string into styled segments.
///
/// Always returns at least one segment: an empty input yields a single empty,
/// unstyled segment. Segment texts are unescaped, and adjacent segments with
/// the same style are merged.
pub fn decode_segments(source: &str) -> Vec<Segment> {
    let markers = scan_markers(source);
    let literal = unterminated(&markers);

    // Without the unterminated markers every push is matched by a pop, and
    // the stack is empty wherever a literal token sits.
    // Each entry carries the union of its own style and everything below it.
    let mut pieces: Vec<Segment> = Vec::new();
    let mut stack: Vec<(Marker, TextStyle)> = Vec::new();
    let mut split = 0;
    for (&(index, marker), &is_literal) in markers.iter().zip(&literal) {
        if is_literal {
            continue;
        }
        let open = stack.last().map_or(TextStyle::PLAIN, |&(_, style)| style);
        push_piece(&mut pieces, &source[split..index], open);
        if stack.last().is_some_and(|&(top, _)| top == marker) {
            stack.pop();
        } else {
            stack.push((marker, open | marker.style()));
        }
        split = index + marker.len();
    }
    push_piece(&mut pieces, &source[split..], TextStyle::PLAIN);

    merge_segments(&pieces)
}

/// Encode segments as marker-annotated text.
///
/// Strikethrough has no marker and is dropped before adjacent segments with
/// equal styles are merged, so the output only depends on the text stream the
/// format can carry. Line breaks become spaces since a paragraph is a single
/// line group.
pub fn encode_segments(segments: &[Segment], bold: BoldMarker) -> String {
    let representable: Vec<Segment> = segments
        .iter()
        .map(|segment| {
            Segment::new(
                segment.text.as_str(),
                segment.style.difference(TextStyle::STRIKETHROUGH),
            )
        })
        .collect();

    let mut out = String::new();
    for segment in merge_segments(&representable) {
        if segment.is_empty() {
            continue;
        }
        let flattened = flatten_line_breaks(&segment.text);
        let mut text = escape(&flattened);
        if segment.style.contains(TextStyle::ITALIC) {
            text = wrap(&text, bold.italic_token());
        }
        if segment.style.contains(TextStyle::BOLD) {
            text = wrap(&text, bold.bold_token());
        }
        out.push_str(&text);
    }
    out
}

fn wrap(text: &str, token: &str) -> String {
    format!("{token}{text}{token}")
}

fn flatten_line_breaks(text: &str) -> String {
    if !text.contains(['\n', '\r']) {
        return text.to_string();
    }
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}
