//! HTML format tests
//!
//! HTML is import only; these cover clipboard-style markup.

mod import;
