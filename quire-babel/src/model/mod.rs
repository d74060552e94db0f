//! The shared representation of styled text.
//!
//! A [`Document`] is an ordered list of [`Paragraph`]s, each holding an optional
//! heading level and an ordered list of [`Segment`]s. Codecs build fresh
//! documents on decode and only read them on encode.

pub mod nodes;
pub mod style;

pub use nodes::{Document, DocumentRange, Paragraph, Segment, TextPosition};
pub use style::{HeadingLevel, TextStyle};
