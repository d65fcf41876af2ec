//! Settings for the argument handlers, read from `steel_config.json5`.
use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::Deserialize;
use steel_registry::FolderPackSource;
use thiserror::Error;

use crate::command::arguments::HandlerTable;
use crate::command::matcher::KeyMatcher;

const DEFAULT_CONFIG: &str = include_str!("../../package-content/steel_config.json5");

/// An error raised while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read or written.
    #[error("Cannot access config {}: {source}", .path.display())]
    Io {
        /// The config file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
    /// The file is not valid JSON5 or has unknown values.
    #[error("Cannot parse config {}: {source}", .path.display())]
    Parse {
        /// The config file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json5::Error,
    },
    /// The values parsed but are not usable.
    #[error("Invalid config: {0}")]
    Invalid(&'static str),
}

/// Handler configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DecreeConfig {
    /// Directory holding one sub-directory per data pack.
    pub packs_folder: PathBuf,
    /// How partial tokens are matched against load keys.
    pub matcher: KeyMatcher,
}

impl Default for DecreeConfig {
    fn default() -> Self {
        Self {
            packs_folder: PathBuf::from("packs"),
            matcher: KeyMatcher::Contains,
        }
    }
}

impl DecreeConfig {
    /// Reads the config at `path`, or writes the default config there and returns it if
    /// the file does not exist yet.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let config = Self::parse(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
            config.validate()?;
            return Ok(config);
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, DEFAULT_CONFIG).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Wrote default config to {}", path.display());

        Ok(Self::default())
    }

    /// Parses a JSON5 document.
    pub fn parse(content: &str) -> Result<Self, serde_json5::Error> {
        serde_json5::from_str(content)
    }

    /// Checks values that parse but cannot work.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.packs_folder.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("packs_folder must not be empty"));
        }
        Ok(())
    }

    /// Builds the standard handler table over the configured packs folder.
    #[must_use]
    pub fn handler_table(&self) -> HandlerTable {
        let source = Arc::new(FolderPackSource::new(&self.packs_folder));
        HandlerTable::standard(source, self.matcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_bundled_default_matches_default() {
        assert_eq!(
            DecreeConfig::parse(DEFAULT_CONFIG).unwrap(),
            DecreeConfig::default()
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = DecreeConfig::parse("{ matcher: 'prefix' }").unwrap();
        assert_eq!(config.matcher, KeyMatcher::Prefix);
        assert_eq!(config.packs_folder, PathBuf::from("packs"));
    }

    #[test]
    fn test_load_or_create_writes_default() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config/steel_config.json5");

        let created = DecreeConfig::load_or_create(&path).unwrap();
        assert_eq!(created, DecreeConfig::default());
        assert!(path.exists());

        fs::write(&path, "{ packs_folder: 'worlds/packs', matcher: 'exact' }").unwrap();
        let loaded = DecreeConfig::load_or_create(&path).unwrap();
        assert_eq!(loaded.packs_folder, PathBuf::from("worlds/packs"));
        assert_eq!(loaded.matcher, KeyMatcher::Exact);
    }

    #[test]
    fn test_rejects_empty_packs_folder() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("steel_config.json5");
        fs::write(&path, "{ packs_folder: '' }").unwrap();

        assert!(matches!(
            DecreeConfig::load_or_create(&path),
            Err(ConfigError::Invalid(_))
        ));
    }
}
