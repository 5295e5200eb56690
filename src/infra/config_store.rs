// ============================================================
// Layer 6 — Config Store
// ============================================================
// Reads and writes QaConfig as pretty-printed JSON.
//
//   factoid-qa config init --path qa.json   → writes defaults
//   factoid-qa --config qa.json ask ...     → reads them back

use anyhow::{Context, Result};
use std::{fs, path::{Path, PathBuf}};

use crate::application::config::QaConfig;

pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the config file. Fields it omits keep their defaults.
    pub fn load(&self) -> Result<QaConfig> {
        let json = fs::read_to_string(&self.path).with_context(|| {
            format!("Cannot read config from '{}'", self.path.display())
        })?;

        let cfg = serde_json::from_str(&json).with_context(|| {
            format!("Invalid config JSON in '{}'", self.path.display())
        })?;

        tracing::debug!("Loaded config from '{}'", self.path.display());
        Ok(cfg)
    }

    /// Write `cfg`, creating parent directories as needed.
    pub fn save(&self, cfg: &QaConfig) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create '{}'", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(cfg)?;
        fs::write(&self.path, json).with_context(|| {
            format!("Cannot write config to '{}'", self.path.display())
        })?;

        tracing::debug!("Saved config to '{}'", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("nested/qa.json"));

        let cfg = QaConfig {
            top_paragraphs: 7,
            answer_log: Some(PathBuf::from("answers.csv")),
            ..QaConfig::default()
        };
        store.save(&cfg).unwrap();
        assert_eq!(store.load().unwrap(), cfg);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConfigStore::new(dir.path().join("none.json")).load().unwrap_err();
        assert!(err.to_string().contains("Cannot read config"));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(ConfigStore::new(&path).load().is_err());
    }
}
