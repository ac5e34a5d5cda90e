//! Configuration file discovery
//!
//! Finds and parses the TOML file that seeds [`Config`].

use crate::config::Config;
use crate::error::ConfigError;

use std::fmt;
use std::path::{Path, PathBuf};

/// Where the active configuration was taken from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    /// No file was found; built-in defaults apply
    #[default]
    Defaults,
    /// Parsed from this file
    File(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Defaults => write!(f, "built-in defaults"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Parse the config file at `path`
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let text = std::fs::read_to_string(path)
        .map_err(|_| ConfigError::FileNotFound(path.display().to_string()))?;
    Ok(toml::from_str(&text)?)
}

/// Candidate locations, most general first: system, user, working directory
pub fn search_paths() -> Vec<PathBuf> {
    let system = Some(PathBuf::from("/etc/userctl/config.toml"));
    let user = dirs::config_dir().map(|dir| dir.join("userctl").join("config.toml"));
    let local = ["userctl.toml", ".userctl.toml"].map(PathBuf::from);

    system.into_iter().chain(user).chain(local).collect()
}

/// First candidate in `paths` that exists and parses
///
/// Files that exist but fail to parse are skipped with a warning.
pub fn discover_in(paths: &[PathBuf]) -> Option<(Config, ConfigSource)> {
    paths
        .iter()
        .filter(|path| path.is_file())
        .find_map(|path| match read_config(path) {
            Ok(config) => Some((config, ConfigSource::File(path.clone()))),
            Err(e) => {
                log::warn!("Skipping config {}: {}", path.display(), e);
                None
            }
        })
}

/// First loadable config among [`search_paths`]
pub fn discover() -> Option<(Config, ConfigSource)> {
    discover_in(&search_paths())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RemovalStrategy;

    #[test]
    fn test_search_paths_start_with_system_file() {
        let paths = search_paths();
        assert_eq!(paths[0], PathBuf::from("/etc/userctl/config.toml"));
        assert_eq!(paths.last(), Some(&PathBuf::from(".userctl.toml")));
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_config(Path::new("/nonexistent/path/config.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_read_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[store\nremoval =").unwrap();

        let result = read_config(&path);
        assert!(matches!(result, Err(ConfigError::TomlError(_))));
    }

    #[test]
    fn test_discover_skips_missing_and_broken_files() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        let good = dir.path().join("good.toml");
        std::fs::write(&broken, "not = [valid").unwrap();
        std::fs::write(&good, "[store]\nremoval = \"swap\"\n").unwrap();

        let paths = vec![dir.path().join("absent.toml"), broken, good.clone()];
        let (config, source) = discover_in(&paths).unwrap();

        assert_eq!(config.store.removal, RemovalStrategy::Swap);
        assert_eq!(source, ConfigSource::File(good));
    }

    #[test]
    fn test_discover_nothing_found() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_in(&[dir.path().join("absent.toml")]).is_none());
    }

    #[test]
    fn test_source_display() {
        assert_eq!(ConfigSource::Defaults.to_string(), "built-in defaults");
        assert_eq!(
            ConfigSource::File(PathBuf::from("userctl.toml")).to_string(),
            "userctl.toml"
        );
    }
}
