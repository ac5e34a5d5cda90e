//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigSource;

use crate::domain::{JsonStyle, RemovalStrategy};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Backing store settings
    pub store: StoreConfig,
    /// Output settings
    pub output: OutputConfig,
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose logging
    pub verbose: bool,
}

/// Backing store configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct StoreConfig {
    /// Default backing file when -fileName is not given
    pub file_name: Option<String>,
    /// How remove closes the gap left by a removed record
    pub removal: RemovalStrategy,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON on stdout and in the stored file
    pub pretty: bool,
}

impl OutputConfig {
    /// JSON style selected by this configuration
    pub fn json_style(&self) -> JsonStyle {
        JsonStyle::from_pretty(self.pretty)
    }
}
