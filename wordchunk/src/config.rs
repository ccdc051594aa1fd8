//! Chunker configuration

use crate::error::Result;
use wordchunk_core::WindowParams;

#[cfg(feature = "serde")]
use crate::error::ChunkError;
#[cfg(feature = "serde")]
use std::path::Path;

/// Default configuration constants
pub mod defaults {
    /// Default words per chunk
    pub const WINDOW_SIZE: usize = wordchunk_core::DEFAULT_WINDOW_SIZE;

    /// Default words of overlap between consecutive chunks
    pub const OVERLAP_SIZE: usize = wordchunk_core::DEFAULT_OVERLAP_SIZE;
}

/// Window configuration as supplied by a caller or a config file.
///
/// Absent and zero values both mean "use the default".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ChunkerConfig {
    /// Words per chunk
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub window_size: Option<usize>,
    /// Words repeated between consecutive chunks
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub overlap_size: Option<usize>,
}

impl ChunkerConfig {
    /// Create a configuration builder
    pub fn builder() -> ChunkerConfigBuilder {
        ChunkerConfigBuilder::default()
    }

    /// Window size after default substitution
    pub fn effective_window_size(&self) -> usize {
        or_default(self.window_size, defaults::WINDOW_SIZE)
    }

    /// Overlap size after default substitution
    pub fn effective_overlap_size(&self) -> usize {
        or_default(self.overlap_size, defaults::OVERLAP_SIZE)
    }

    /// Substitute defaults and validate
    pub fn resolve(&self) -> Result<WindowParams> {
        let params =
            WindowParams::new(self.effective_window_size(), self.effective_overlap_size())?;
        Ok(params)
    }

    /// Parse a TOML document with optional `window_size` and `overlap_size` keys
    #[cfg(feature = "serde")]
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Parse a JSON object with optional `window_size` and `overlap_size` keys
    #[cfg(feature = "serde")]
    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Load a configuration file.
    ///
    /// Files ending in `.json` are parsed as JSON, everything else as TOML.
    #[cfg(feature = "serde")]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read config {}: {e}", path.display()),
            )
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let parsed = if is_json {
            Self::from_json_str(&source)
        } else {
            Self::from_toml_str(&source)
        };
        parsed.map_err(|e| match e {
            ChunkError::ConfigParse(msg) => {
                ChunkError::ConfigParse(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }
}

fn or_default(value: Option<usize>, default: usize) -> usize {
    match value {
        None | Some(0) => default,
        Some(n) => n,
    }
}

/// Fluent builder for [`ChunkerConfig`]
#[derive(Debug, Default)]
pub struct ChunkerConfigBuilder {
    config: ChunkerConfig,
}

impl ChunkerConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the window size in words (0 = default)
    pub fn window_size(mut self, words: usize) -> Self {
        self.config.window_size = Some(words);
        self
    }

    /// Set the overlap size in words (0 = default)
    pub fn overlap_size(mut self, words: usize) -> Self {
        self.config.overlap_size = Some(words);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ChunkerConfig> {
        self.config.resolve()?;
        Ok(self.config)
    }
}
