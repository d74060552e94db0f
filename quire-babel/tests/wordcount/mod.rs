//! Word count tests over parsed documents.

mod documents;
mod properties;
