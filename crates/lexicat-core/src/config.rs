use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::list::DEFAULT_WORDS_PER_LINE;

const CONFIG_FILE: &str = "config.toml";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# lexicat configuration file
# Location: ~/.lexicat/config.toml

[display]
# Words per line when rendering a category's word list
# Default: 5
words_per_line = 5

[catalog]
# Default catalog file used when --catalog is not given
# Example: file = "/home/me/words/catalog.txt"
"#;

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Words per line for wrapped renders
    #[serde(default = "default_words_per_line")]
    pub words_per_line: usize,
}

/// Catalog file configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// Default catalog file path
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_words_per_line() -> usize {
    DEFAULT_WORDS_PER_LINE
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            words_per_line: default_words_per_line(),
        }
    }
}

impl Config {
    /// Load config from base directory
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to base directory
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        fs::create_dir_all(base_dir)?;
        let path = base_dir.join(CONFIG_FILE);
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Write the commented default template if no config exists yet.
    /// Returns whether a file was created.
    pub fn init(base_dir: &Path) -> Result<bool> {
        let path = base_dir.join(CONFIG_FILE);
        if path.exists() {
            return Ok(false);
        }
        fs::create_dir_all(base_dir)?;
        fs::write(path, DEFAULT_CONFIG_TEMPLATE)?;
        Ok(true)
    }

    pub fn config_path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::tempdir;

    #[test]
    fn test_load_missing_returns_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.display.words_per_line, DEFAULT_WORDS_PER_LINE);
        assert!(config.catalog.file.is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let config = Config {
            display: DisplayConfig { words_per_line: 3 },
            catalog: CatalogConfig {
                file: Some(PathBuf::from("/tmp/catalog.txt")),
            },
        };
        config.save(dir.path()).unwrap();

        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded.display.words_per_line, 3);
        assert_eq!(loaded.catalog.file, Some(PathBuf::from("/tmp/catalog.txt")));
    }

    #[test]
    fn test_init_writes_template_once() {
        let dir = tempdir().unwrap();
        assert!(Config::init(dir.path()).unwrap());
        assert!(!Config::init(dir.path()).unwrap());

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.display.words_per_line, DEFAULT_WORDS_PER_LINE);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[display]\n").unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.display.words_per_line, DEFAULT_WORDS_PER_LINE);
        assert!(config.catalog.file.is_none());
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "not toml [").unwrap();
        assert!(Config::load(dir.path()).is_err());
    }
}
