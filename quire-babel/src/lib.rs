//! Document marshalling for a rich-text editor
//!
//!     This crate moves documents between the editor's in-memory model and the outside world:
//!     a small reversible Markdown dialect (both directions), HTML as found on the clipboard
//!     (import only), and a word count engine that runs over plain text or whole documents.
//!
//!     This is a pure lib, that is, it powers quire-cli but is shell agnostic: no code here
//!     should suppose a shell environment, be it printing to stdout, reading env vars etc.
//!     Diagnostics go through `tracing`; the binary decides where they end up.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── model                   # Document, Paragraph, Segment, styles
//!     ├── common
//!     │   └── escape.rs           # Backslash escaping shared by the codecs
//!     ├── formats
//!     │   ├── markdown            # inline markers, parser, serializer
//!     │   ├── html                # DOM walk and CSS style mapping
//!     │   └── rtf                 # placeholder, both directions unsupported
//!     └── wordcount               # scanner, counter and per-section results
//!
//! Testing
//!     tests
//!     └── <area>
//!         ├── <testname>.rs
//!         └── fixtures
//!
//!     Note that rust does not by default discover tests in subdirectories, so these are
//!     included from tests/lib.rs.
//!
//! Document Model
//!
//!     A document is a flat list of paragraphs. A paragraph is either body text or a heading
//!     of level 1 to 6 and holds styled segments. Codecs never build nested structures: a
//!     heading is a property of the paragraph, not a container of what follows it. Sections
//!     only exist in word count results, where they are derived from heading paragraphs.
//!
//! Lossy Conversions
//!
//!     Every codec is lossy in some way (strikethrough in Markdown, everything but text,
//!     headings and three styles in HTML). The only round trip the crate guarantees is
//!     Markdown → Document → Markdown for text it serialized itself.

pub mod common;
pub mod error;
pub mod format;
pub mod formats;
pub mod model;
pub mod registry;
pub mod wordcount;

pub use error::FormatError;
pub use format::Format;
pub use model::{Document, DocumentRange, HeadingLevel, Paragraph, Segment, TextPosition, TextStyle};
pub use registry::FormatRegistry;
pub use wordcount::{DocumentCount, Section, WordCountOptions, WordCounter, WordFrequencies};
