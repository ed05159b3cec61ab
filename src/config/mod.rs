//! Persistent wizard preferences.
//!
//! The configuration lives at `<base>/config/config.json` and is optional: a
//! missing file yields [`Config::default`]. `CAREER_WIZARD_SERVER_URL` overrides
//! the stored server address at runtime without rewriting the file.

use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{
    errors::{Result, WizardError},
    utils::{
        paths::{app_data_dir, storage_dir_in},
        persistence::{read_if_exists, write_atomic},
    },
};

pub const SERVER_URL_ENV: &str = "CAREER_WIZARD_SERVER_URL";

const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";
const SUBMIT_PATH: &str = "/save";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_server_url")]
    pub server_url: String,
    #[serde(default = "Config::default_status_clear_secs")]
    pub status_clear_secs: u64,
    #[serde(default)]
    pub plain_output: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Custom directory for the answer snapshot. Defaults to `<base>/storage`.
    pub storage_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: Self::default_server_url(),
            status_clear_secs: Self::default_status_clear_secs(),
            plain_output: false,
            storage_dir: None,
        }
    }
}

impl Config {
    pub fn default_server_url() -> String {
        "http://127.0.0.1:5000".into()
    }

    pub fn default_status_clear_secs() -> u64 {
        3
    }

    /// Full URL of the submission endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.server_url.trim_end_matches('/'), SUBMIT_PATH)
    }

    pub fn status_delay(&self) -> Duration {
        Duration::from_secs(self.status_clear_secs)
    }

    pub fn resolve_storage_dir(&self, base: &Path) -> PathBuf {
        self.storage_dir
            .clone()
            .unwrap_or_else(|| storage_dir_in(base))
    }

    /// Applies environment overrides on top of the persisted values.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = env::var(SERVER_URL_ENV) {
            let url = url.trim();
            if !url.is_empty() {
                self.server_url = url.to_string();
            }
        }
        self
    }
}

/// Handles loading and saving of [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    base: PathBuf,
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        let config_dir = base.join(CONFIG_DIR);
        fs::create_dir_all(&config_dir)?;
        Ok(Self {
            config_path: config_dir.join(CONFIG_FILE),
            base,
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<Config> {
        match read_if_exists(&self.config_path)? {
            Some(data) => serde_json::from_str(&data).map_err(|err| {
                WizardError::Config(format!("{}: {err}", self.config_path.display()))
            }),
            None => Ok(Config::default()),
        }
    }

    /// Like [`load`](Self::load), but writes the defaults out on first run so
    /// there is a file to edit.
    pub fn load_or_init(&self) -> Result<Config> {
        if self.config_path.exists() {
            return self.load();
        }
        let config = Config::default();
        self.save(&config)?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| WizardError::Config(err.to_string()))?;
        write_atomic(&self.config_path, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.endpoint(), "http://127.0.0.1:5000/save");
        assert_eq!(config.status_delay(), Duration::from_secs(3));
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let config = Config {
            server_url: "https://careers.example.org/".into(),
            status_clear_secs: 5,
            plain_output: true,
            storage_dir: Some(dir.path().join("elsewhere")),
        };
        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.endpoint(), "https://careers.example.org/save");
        assert_eq!(
            loaded.resolve_storage_dir(manager.base_dir()),
            dir.path().join("elsewhere")
        );
    }

    #[test]
    fn first_run_writes_the_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        assert!(!manager.config_path().exists());

        assert_eq!(manager.load_or_init().unwrap(), Config::default());
        assert!(manager.config_path().exists());

        fs::write(manager.config_path(), r#"{"status_clear_secs": 9}"#).unwrap();
        assert_eq!(manager.load_or_init().unwrap().status_clear_secs, 9);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        fs::write(manager.config_path(), r#"{"plain_output": true}"#).unwrap();
        let loaded = manager.load().unwrap();
        assert!(loaded.plain_output);
        assert_eq!(loaded.server_url, Config::default_server_url());
        assert_eq!(
            loaded.resolve_storage_dir(manager.base_dir()),
            dir.path().join("storage")
        );
    }

    #[test]
    fn corrupt_file_is_a_config_error() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        fs::write(manager.config_path(), "not json").unwrap();
        assert!(matches!(manager.load(), Err(WizardError::Config(_))));
    }
}
