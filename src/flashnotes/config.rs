use crate::error::{FlashnotesError, Result};
use crate::review::ReviewLimit;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "flashnotes.json";

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "FLASHNOTES_HOME";

/// Configuration for flashnotes, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlashnotesConfig {
    /// Cards per review; absent means every visible card
    #[serde(default)]
    pub review_limit: Option<usize>,

    /// Flashcard file name, relative to the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for FlashnotesConfig {
    fn default() -> Self {
        Self {
            review_limit: None,
            data_file: default_data_file(),
        }
    }
}

impl FlashnotesConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FlashnotesError::Io)?;
        let config: FlashnotesConfig =
            serde_json::from_str(&content).map_err(FlashnotesError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(FlashnotesError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content =
            serde_json::to_string_pretty(self).map_err(FlashnotesError::Serialization)?;
        fs::write(config_path, content).map_err(FlashnotesError::Io)?;
        Ok(())
    }

    pub fn review_limit(&self) -> ReviewLimit {
        ReviewLimit::from_option(self.review_limit)
    }

    pub fn set_review_limit(&mut self, limit: ReviewLimit) {
        self.review_limit = limit.as_option();
    }

    pub fn data_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.data_file)
    }
}

/// Resolve the data directory: explicit flag, then [`HOME_ENV`], then the platform
/// data directory.
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "flashnotes", "flashnotes")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| FlashnotesError::Store("could not determine the data directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = FlashnotesConfig::load(dir.path()).unwrap();
        assert_eq!(config, FlashnotesConfig::default());
        assert_eq!(config.review_limit(), ReviewLimit::Unlimited);
    }

    #[test]
    fn save_then_load() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("nested");
        let mut config = FlashnotesConfig::default();
        config.set_review_limit(ReviewLimit::from_option(Some(15)));
        config.save(&nested).unwrap();

        let loaded = FlashnotesConfig::load(&nested).unwrap();
        assert_eq!(loaded.review_limit, Some(15));
        assert_eq!(loaded.data_file, "flashnotes.json");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"review_limit": 3}"#).unwrap();
        let config = FlashnotesConfig::load(dir.path()).unwrap();
        assert_eq!(config.review_limit, Some(3));
        assert_eq!(config.data_path(dir.path()), dir.path().join("flashnotes.json"));
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ nope").unwrap();
        let err = FlashnotesConfig::load(dir.path()).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Storage);
    }

    #[test]
    fn explicit_dir_wins() {
        let dir = PathBuf::from("/tmp/somewhere");
        assert_eq!(resolve_data_dir(Some(dir.clone())).unwrap(), dir);
    }

    #[test]
    fn unlimited_clears_stored_limit() {
        let mut config = FlashnotesConfig {
            review_limit: Some(4),
            ..FlashnotesConfig::default()
        };
        config.set_review_limit(ReviewLimit::Unlimited);
        assert_eq!(config.review_limit, None);
    }
}
