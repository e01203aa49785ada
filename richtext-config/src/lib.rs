//! Shared configuration loader for the richtext toolchain.
//!
//! `defaults/richtext.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`RichtextConfig`].
//!
//! The converter itself takes no configuration; these settings govern the
//! shells around it (input ceiling, output format and its options).

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use richtext_babel::InputLimit;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/richtext.default.toml");

/// Top-level configuration consumed by richtext applications.
#[derive(Debug, Clone, Deserialize)]
pub struct RichtextConfig {
    pub convert: ConvertConfig,
    pub output: OutputConfig,
}

/// Conversion knobs applied before the HTML reaches the converter.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    /// Largest accepted input in bytes, `0` for no limit.
    pub max_input_bytes: usize,
}

impl From<&ConvertConfig> for InputLimit {
    fn from(config: &ConvertConfig) -> Self {
        InputLimit::bytes(config.max_input_bytes)
    }
}

/// Output selection and the defaults for the JSON format's options.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: String,
    pub pretty: bool,
    pub include_images: bool,
}

impl OutputConfig {
    /// Options for the `json` format, keyed the way `--extra-*` flags are.
    pub fn format_options(&self) -> HashMap<String, String> {
        HashMap::from([
            ("pretty".to_string(), self.pretty.to_string()),
            ("images".to_string(), self.include_images.to_string()),
        ])
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
    pub fn build(self) -> Result<RichtextConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<RichtextConfig, ConfigError> {
    Loader::new().build()
}
