//! Configuration builder
//!
//! Merges configuration from files and CLI arguments.

use crate::config::file::{discover, read_config};
use crate::config::{Config, ConfigSource};

use std::path::Path;
use crate::error::ConfigError;

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Config,
    source: ConfigSource,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            source: ConfigSource::Defaults,
        }
    }

    /// Load configuration from a file
    ///
    /// An explicit path must load; without one the default locations are
    /// probed and a miss keeps the defaults.
    pub fn with_file(mut self, path: Option<&str>) -> Result<Self, ConfigError> {
        let found = match path {
            Some(path) => {
                let path = Path::new(path);
                Some((read_config(path)?, ConfigSource::File(path.to_path_buf())))
            }
            None => discover(),
        };

        if let Some((config, source)) = found {
            self.config = config;
            self.source = source;
        }

        Ok(self)
    }

    /// Override with CLI verbose flag
    pub fn with_verbose(mut self, verbose: Option<bool>) -> Self {
        if let Some(v) = verbose {
            self.config.general.verbose = v;
        }
        self
    }

    /// Override with CLI/env file name
    pub fn with_file_name(mut self, file_name: Option<String>) -> Self {
        if let Some(f) = file_name.filter(|f| !f.is_empty()) {
            self.config.store.file_name = Some(f);
        }
        self
    }

    /// Override with CLI pretty flag
    pub fn with_pretty(mut self, pretty: Option<bool>) -> Self {
        if let Some(p) = pretty {
            self.config.output.pretty = p;
        }
        self
    }

    /// Where the file layer of the configuration came from
    pub fn source(&self) -> &ConfigSource {
        &self.source
    }

    /// Build the final configuration
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
