//! Format implementations
//!
//! This module contains the codecs that convert between the document model
//! and text representations.

pub mod html;
pub mod markdown;
pub mod rtf;

pub use html::HtmlFormat;
pub use markdown::{BoldMarker, MarkdownFormat, MarkdownOptions};
pub use rtf::RtfFormat;
