use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::GorokuError;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Environment override for the API base URL, applied after file config.
const ENV_BASE_URL: &str = "GOROKU_API_URL";

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

impl AppConfig {
    /// Load config: user file if present, otherwise built-in defaults, then
    /// the environment override for the base URL.
    pub fn load() -> Result<Self, GorokuError> {
        Self::load_from(&Self::config_path())
    }

    /// Load from an explicit user config path (for tests and custom setups).
    pub fn load_from(path: &Path) -> Result<Self, GorokuError> {
        let mut config = if path.exists() {
            let user_str = std::fs::read_to_string(path)?;
            toml::from_str(&user_str).map_err(|e| GorokuError::Config(e.to_string()))?
        } else {
            Self::default()
        };
        config.apply_env();
        Ok(config)
    }

    /// The API base URL, validated.
    pub fn base_url(&self) -> Result<Url, GorokuError> {
        Url::parse(&self.api.base_url)
            .map_err(|e| GorokuError::Config(format!("invalid base URL {:?}: {e}", self.api.base_url)))
    }

    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(ENV_BASE_URL) {
            if !url.is_empty() {
                self.api.base_url = url;
            }
        }
    }

    /// Path to the user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        Self::project_dirs()
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Directory for persisted client state (the favorites store).
    pub fn data_dir() -> PathBuf {
        Self::project_dirs()
            .map(|d| d.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "goroku")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8001");
        assert!(config.base_url().is_ok());
    }

    #[test]
    fn test_env_override_beats_user_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api]\nbase_url = \"http://file.example:1\"\n").unwrap();

        // Missing file falls back to defaults.
        let missing = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(missing.api.base_url, "http://localhost:8001");

        // The user file wins over defaults.
        let from_file = AppConfig::load_from(&path).unwrap();
        assert_eq!(from_file.api.base_url, "http://file.example:1");

        // The environment override wins over the file value.
        std::env::set_var(ENV_BASE_URL, "http://env.example:2");
        let overridden = AppConfig::load_from(&path).unwrap();
        std::env::remove_var(ENV_BASE_URL);
        assert_eq!(overridden.api.base_url, "http://env.example:2");
    }

    #[test]
    fn test_invalid_user_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not toml at all [").unwrap();
        assert!(matches!(
            AppConfig::load_from(&path),
            Err(GorokuError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_base_url_is_a_config_error() {
        let config = AppConfig {
            api: ApiConfig {
                base_url: "not a url".into(),
            },
        };
        assert!(matches!(config.base_url(), Err(GorokuError::Config(_))));
    }
}
