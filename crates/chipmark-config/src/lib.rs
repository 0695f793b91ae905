use chipmark_engine::{ReferenceEntry, RenderOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to read references file at {references_path}: {source}")]
    ReferencesReadError {
        references_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse references file at {references_path}: {source}")]
    ReferencesParseError {
        references_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Reference list used when the CLI is not given `--references`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references_path: Option<PathBuf>,
    pub render: RenderOptions,
}

/// On-disk shape of a reference list:
///
/// ```toml
/// [[reference]]
/// id = "e-acme"
/// title = "Acme Corp"
/// ```
#[derive(Debug, Default, Deserialize)]
struct ReferenceFile {
    #[serde(default, rename = "reference")]
    references: Vec<ReferenceEntry>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the references path
        config.references_path = config
            .references_path
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/chipmark");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

/// Reads a `[[reference]]` list. Entries keep file order, which is the
/// order duplicate titles are resolved in.
pub fn load_references<P: AsRef<Path>>(
    references_path: P,
) -> Result<Vec<ReferenceEntry>, ConfigError> {
    let references_path = references_path.as_ref();
    let content = std::fs::read_to_string(references_path).map_err(|source| {
        ConfigError::ReferencesReadError {
            references_path: references_path.to_path_buf(),
            source,
        }
    })?;

    let file: ReferenceFile =
        toml::from_str(&content).map_err(|source| ConfigError::ReferencesParseError {
            references_path: references_path.to_path_buf(),
            source,
        })?;

    Ok(file.references)
}
