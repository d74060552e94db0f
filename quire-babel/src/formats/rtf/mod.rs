//! RTF format placeholder
//!
//! RTF is recognised by extension so that selecting it reports a clear error
//! instead of falling through to another codec. Neither direction is
//! implemented.

use crate::error::FormatError;
use crate::format::Format;
use crate::model::Document;

/// Format entry for RTF; every operation fails with `NotSupported`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RtfFormat;

impl Format for RtfFormat {
    fn name(&self) -> &str {
        "rtf"
    }

    fn description(&self) -> &str {
        "Rich Text Format (not implemented)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["rtf"]
    }

    fn parse(&self, _source: &str) -> Result<Document, FormatError> {
        Err(FormatError::NotSupported(
            "RTF import is not implemented".to_string(),
        ))
    }

    fn serialize(&self, _doc: &Document) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(
            "RTF export is not implemented".to_string(),
        ))
    }
}
