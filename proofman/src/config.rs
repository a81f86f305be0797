//! Layered configuration for the `proofman` CLI.
//!
//! Settings are looked up in the current directory, then the user's home
//! directory, then the system config directory, falling back to defaults.

use std::path::{Path, PathBuf};

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

pub const CONFIG_FILE_NAME: &str = "proofman.toml";

/// Indexer-invocation defaults, distinct from the per-package manifest the
/// indexer itself emits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProofmanSettings {
    #[serde(default)]
    pub afp_path: Option<String>,

    #[serde(default)]
    pub index_repository_url: Option<String>,

    #[serde(default)]
    pub version_override: Option<String>,

    #[serde(default)]
    pub verbose: bool,
}

impl ProofmanSettings {
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::Config(format!("configuration file not found: {}", path.display())));
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::Config(format!("failed to parse configuration: {e}")))
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("failed to serialize configuration: {e}")))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir().map(|dir| dir.join(".config").join("proofman").join(CONFIG_FILE_NAME)).filter(|p| p.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir().map(|dir| dir.join("proofman").join(CONFIG_FILE_NAME)).filter(|p| p.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config().or_else(Self::check_home_config).or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_are_empty() {
        let settings = ProofmanSettings::default();
        assert!(settings.afp_path.is_none());
        assert!(!settings.verbose);
    }

    #[test]
    fn loads_from_an_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("proofman.toml");
        std::fs::write(&path, "afp_path = \"/opt/afp\"\nverbose = true\n").unwrap();

        let settings = ProofmanSettings::load_from_path(&path).unwrap();
        assert_eq!(settings.afp_path.as_deref(), Some("/opt/afp"));
        assert!(settings.verbose);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("proofman.toml");

        let settings = ProofmanSettings {
            afp_path: Some("/opt/afp".to_string()),
            index_repository_url: Some("https://example.com/index.git".to_string()),
            version_override: None,
            verbose: true,
        };
        settings.save_to_path(&path).unwrap();

        let loaded = ProofmanSettings::load_from_path(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let result = ProofmanSettings::load_from_path(Path::new("/nonexistent/proofman.toml"));
        assert!(result.is_err());
    }
}
