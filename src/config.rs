//! Driver settings
//!
//! Defaults come from `defaults/peml.default.toml`, compiled in. [`Loader`] stacks an optional
//! `peml.toml`, an explicit `--config` file and command-line overrides on top, in that order,
//! and deserializes the result into [`PemlConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/peml.default.toml");

/// Name of the optional per-directory configuration file
pub const LOCAL_CONFIG_FILE: &str = "peml.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct PemlConfig {
    pub output: OutputConfig,
    pub input: InputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Appended to the input file name, after a dot
    pub extension: String,
    pub trailing_newline: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    pub announce_stdin: bool,
}

impl OutputConfig {
    /// Output path for an input file: the whole input name plus the extension.
    pub fn output_path(&self, input: &Path) -> std::path::PathBuf {
        let mut name = input.as_os_str().to_os_string();
        name.push(".");
        name.push(&self.extension);
        name.into()
    }
}

/// Builds a [`PemlConfig`]; later layers win over earlier ones.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Only the compiled-in defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Add a TOML file that must exist (`--config`).
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml_layer(path.as_ref(), true)
    }

    /// Add a TOML file that is skipped when missing ([`LOCAL_CONFIG_FILE`]).
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml_layer(path.as_ref(), false)
    }

    fn with_toml_layer(mut self, path: &Path, required: bool) -> Self {
        let layer = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(layer);
        self
    }

    /// Force one dotted key, e.g. `output.extension` from `--extension`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<PemlConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<PemlConfig, ConfigError> {
    Loader::new().build()
}
