use crate::error::{DocshelfError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// User configuration, stored as `config.json` in the platform config dir.
///
/// Categories and their extension whitelists are not configurable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocshelfConfig {
    /// Where the shelf lives. Falls back to the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_root: Option<PathBuf>,
}

impl DocshelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DocshelfError::Io)?;
        let config: DocshelfConfig =
            serde_json::from_str(&content).map_err(DocshelfError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DocshelfError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(DocshelfError::Serialization)?;
        fs::write(config_path, content).map_err(DocshelfError::Io)?;
        Ok(())
    }

    /// Picks the storage root: an explicit override first, then the
    /// configured root, then `default_root`.
    pub fn resolve_root(
        &self,
        explicit: Option<PathBuf>,
        default_root: Option<PathBuf>,
    ) -> Option<PathBuf> {
        explicit
            .or_else(|| self.storage_root.clone())
            .or(default_root)
    }
}
