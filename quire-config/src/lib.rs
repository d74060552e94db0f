//! Shared configuration loader for the quire toolchain.
//!
//! `defaults/quire.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`QuireConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat};
use quire_babel::formats::markdown::{BoldMarker, MarkdownOptions};
use quire_babel::model::TextStyle;
use quire_babel::wordcount::WordCountOptions;
use serde::Deserialize;
use std::path::Path;

pub use config::{ConfigError, ValueKind};

const DEFAULT_TOML: &str = include_str!("../defaults/quire.default.toml");

/// File picked up from the working directory when present.
pub const LOCAL_CONFIG_FILE: &str = "quire.toml";

/// Top-level configuration consumed by quire applications.
#[derive(Debug, Clone, Deserialize)]
pub struct QuireConfig {
    pub markdown: MarkdownConfig,
    pub word_count: WordCountConfig,
}

/// Markdown serializer knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkdownConfig {
    pub bold_marker: BoldMarkerConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum BoldMarkerConfig {
    #[serde(rename = "**")]
    Asterisks,
    #[serde(rename = "__")]
    Underscores,
}

impl From<BoldMarkerConfig> for BoldMarker {
    fn from(config: BoldMarkerConfig) -> Self {
        match config {
            BoldMarkerConfig::Asterisks => BoldMarker::Asterisks,
            BoldMarkerConfig::Underscores => BoldMarker::Underscores,
        }
    }
}

impl From<&MarkdownConfig> for MarkdownOptions {
    fn from(config: &MarkdownConfig) -> Self {
        MarkdownOptions {
            bold_marker: config.bold_marker.into(),
        }
    }
}

/// Mirrors the knobs exposed by the word counter.
#[derive(Debug, Clone, Deserialize)]
pub struct WordCountConfig {
    pub case_sensitive: bool,
    pub count_numbers: bool,
    pub excluded_styles: Vec<StyleName>,
    pub separators: Vec<String>,
}

/// A text style as written in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleName {
    Bold,
    Italic,
    #[serde(alias = "strike")]
    Strikethrough,
}

impl From<StyleName> for TextStyle {
    fn from(name: StyleName) -> Self {
        match name {
            StyleName::Bold => TextStyle::BOLD,
            StyleName::Italic => TextStyle::ITALIC,
            StyleName::Strikethrough => TextStyle::STRIKETHROUGH,
        }
    }
}

impl From<&WordCountConfig> for WordCountOptions {
    fn from(config: &WordCountConfig) -> Self {
        WordCountOptions {
            excluded_styles: config
                .excluded_styles
                .iter()
                .fold(TextStyle::empty(), |styles, name| styles | (*name).into()),
            case_sensitive: config.case_sensitive,
            count_numbers: config.count_numbers,
            separators: config.separators.clone(),
        }
    }
}

impl From<WordCountConfig> for WordCountOptions {
    fn from(config: WordCountConfig) -> Self {
        WordCountOptions::from(&config)
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<QuireConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<QuireConfig, ConfigError> {
    Loader::new().build()
}
