//! Markdown format implementation
//!
//! A small, reversible marker format rather than CommonMark. It carries exactly
//! what the document model needs: paragraphs, six heading levels, bold and
//! italic.
//!
//! # Syntax
//!
//! | Construct     | Markdown                 | Notes                                   |
//! |---------------|--------------------------|-----------------------------------------|
//! | Paragraph     | lines until a blank line | lines of one paragraph join with a space|
//! | Heading N     | `#`×N, optional space    | N in 1..=6                              |
//! | Bold          | `**text**` or `__text__` | the serializer writes the configured one|
//! | Italic        | `*text*` or `_text_`     | written with the character bold doesn't use |
//! | Escape        | `\`                      | before `*`, `_`, `\` and a leading `#`  |
//!
//! # Lossy Conversions
//!
//! - Strikethrough has no marker and is dropped on export.
//! - Line breaks inside a paragraph become spaces.
//! - Empty body paragraphs disappear; empty headings survive.
//! - Segment boundaries are not preserved, only the styled text stream.
//!
//! # Implementation Status
//!
//! - [x] Export (Document → Markdown)
//! - [x] Import (Markdown → Document)

pub mod inline;
pub mod parser;
pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use crate::model::Document;

/// Prefix character of heading lines.
pub const HEADING_MARKER: char = '#';

/// Which bold token the serializer writes. Italic uses the other character so
/// bold-italic text nests without ambiguous runs like `***`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoldMarker {
    /// `**bold**` with `_italic_`
    #[default]
    Asterisks,
    /// `__bold__` with `*italic*`
    Underscores,
}

impl BoldMarker {
    pub fn bold_token(self) -> &'static str {
        match self {
            BoldMarker::Asterisks => "**",
            BoldMarker::Underscores => "__",
        }
    }

    pub fn italic_token(self) -> &'static str {
        match self {
            BoldMarker::Asterisks => "_",
            BoldMarker::Underscores => "*",
        }
    }

    /// Parse the configured bold token (`**` or `__`).
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim() {
            "**" => Some(BoldMarker::Asterisks),
            "__" => Some(BoldMarker::Underscores),
            _ => None,
        }
    }
}

/// Serializer options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownOptions {
    pub bold_marker: BoldMarker,
}

/// Format implementation for Markdown
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormat {
    options: MarkdownOptions,
}

impl MarkdownFormat {
    pub fn new(options: MarkdownOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &MarkdownOptions {
        &self.options
    }
}

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Minimal reversible markdown (headings, bold, italic)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown", "txt"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        parser::parse_from_markdown(source)
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serializer::serialize_to_markdown(doc, &self.options)
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &std::collections::HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut resolved = self.options.clone();
        if let Some(token) = options.get("bold-marker") {
            resolved.bold_marker = BoldMarker::from_token(token).ok_or_else(|| {
                FormatError::SerializationError(format!(
                    "Unknown bold marker '{token}', expected '**' or '__'"
                ))
            })?;
        }
        serializer::serialize_to_markdown(doc, &resolved)
    }
}
