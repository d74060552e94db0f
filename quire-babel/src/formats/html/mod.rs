//! HTML format implementation
//!
//! One-directional: HTML (typically clipboard markup from word processors and
//! browsers) is imported into the document model. Export is not implemented
//! and fails loudly.
//!
//! # Library Choice
//!
//! We use the `html5ever` + `markup5ever_rcdom` pair for parsing:
//! - `html5ever`: Browser-grade HTML5 parser from the Servo project
//! - `markup5ever_rcdom`: Reference-counted DOM tree implementation
//!
//! It recovers from malformed markup the way browsers do, which matters more
//! here than strictness since clipboard HTML is routinely broken.
//!
//! # Element Mapping Table
//!
//! | HTML                           | Document model                        |
//! |--------------------------------|---------------------------------------|
//! | `<p>`                          | Paragraph                             |
//! | `<h1>`..`<h6>`                 | Paragraph with heading level          |
//! | `<br>` between inline elements | Paragraph boundary                    |
//! | `<br>` inside a paragraph      | `"\n"` segment                        |
//! | `<b>`, `<strong>`              | bold                                  |
//! | `<i>`, `<em>`                  | italic                                |
//! | `<s>`, `<del>`                 | strikethrough                         |
//! | `<span>`                       | inline grouping, styles from CSS only |
//!
//! Inline `style` attributes are honoured for `font-weight`, `font-style` and
//! `text-decoration`, and may switch a style off as well as on.
//!
//! # Implementation Status
//!
//! - [ ] Export (Document → HTML)
//! - [x] Import (HTML → Document)

pub mod parser;
pub mod style;

use crate::error::FormatError;
use crate::format::Format;
use crate::model::Document;

/// Format implementation for HTML
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML import (clipboard and web markup)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        false
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        parser::parse_from_html(source)
    }

    fn serialize(&self, _doc: &Document) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(
            "HTML export is not implemented".to_string(),
        ))
    }
}
