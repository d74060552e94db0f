//! Style vocabulary for segments and paragraphs.
//!
//! The tag vocabulary is closed: segments carry any combination of bold, italic
//! and strikethrough, paragraphs carry at most one heading level.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

bitflags! {
    /// Inline style tags active on a segment.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
    pub struct TextStyle: u8 {
        const BOLD          = 0b001;
        const ITALIC        = 0b010;
        const STRIKETHROUGH = 0b100;
    }
}

impl TextStyle {
    /// Unstyled text.
    pub const PLAIN: TextStyle = TextStyle::empty();

    /// Look up a single style tag by its lowercase name.
    ///
    /// Accepts `bold`, `italic` and `strikethrough` (also `strike`).
    pub fn from_style_name(name: &str) -> Option<TextStyle> {
        match name.trim().to_ascii_lowercase().as_str() {
            "bold" => Some(TextStyle::BOLD),
            "italic" => Some(TextStyle::ITALIC),
            "strikethrough" | "strike" => Some(TextStyle::STRIKETHROUGH),
            _ => None,
        }
    }

    /// Lowercase names of the active tags, in declaration order.
    pub fn names(self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.contains(TextStyle::BOLD) {
            names.push("bold");
        }
        if self.contains(TextStyle::ITALIC) {
            names.push("italic");
        }
        if self.contains(TextStyle::STRIKETHROUGH) {
            names.push("strikethrough");
        }
        names
    }
}

/// Heading level of a paragraph, always within `1..=6`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    /// Returns `None` when `level` is outside `1..=6`.
    pub fn new(level: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&level)
            .then_some(HeadingLevel(level))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Parse an HTML heading tag name (`h1`..`h6`, case-insensitive).
    pub fn from_tag(tag: &str) -> Option<Self> {
        let digits = tag
            .strip_prefix('h')
            .or_else(|| tag.strip_prefix('H'))?;
        if digits.len() != 1 {
            return None;
        }
        digits.parse::<u8>().ok().and_then(HeadingLevel::new)
    }

}

impl TryFrom<u8> for HeadingLevel {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        HeadingLevel::new(level).ok_or_else(|| format!("heading level {level} is outside 1..=6"))
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.0
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "h{}", self.0)
    }
}
