use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::cli::Cli;
use super::paths::config_path;

pub const DEFAULT_TITLE: &str = "Simple Form with Validation";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Heading shown above the form
    pub title: String,
    /// Default tracing filter directive (RUST_LOG still wins)
    pub log_level: String,
    /// Allow copying submissions to the system clipboard
    pub clipboard: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            clipboard: true,
        }
    }
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub title: Option<String>,
    pub log_level: Option<String>,
    pub clipboard: Option<bool>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Config {
    /// Loads configuration from the default location, falling back to the
    /// defaults when no file exists there.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path. The file has to exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let toml_config = Self::parse(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::default();
        config.merge(toml_config);
        tracing::info!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    pub fn parse(contents: &str) -> Result<TomlConfig, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Applies the values present in the file over the current ones.
    pub fn merge(&mut self, toml_config: TomlConfig) {
        if let Some(title) = toml_config.title {
            self.title = title;
        }
        if let Some(log_level) = toml_config.log_level {
            self.log_level = log_level;
        }
        if let Some(clipboard) = toml_config.clipboard {
            self.clipboard = clipboard;
        }
    }

    /// Command-line flags take precedence over the config file.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(log_level) = &cli.log_level {
            self.log_level = log_level.clone();
        }
        if cli.no_clipboard {
            self.clipboard = false;
        }
    }
}
