use crate::{TaskError, TaskResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_SEED_URL: &str = "https://jsonplaceholder.typicode.com/todos";
pub const DEFAULT_SEED_LIMIT: u32 = 5;
const DATA_FILE_NAME: &str = "tasks.json";
const LOG_FILE_NAME: &str = "tasklist.log";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    #[serde(default)]
    pub seed: SeedConfig,
}

/// Settings for the one-time population of an empty store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub enabled: bool,
    pub url: String,
    pub limit: u32,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: DEFAULT_SEED_URL.to_string(),
            limit: DEFAULT_SEED_LIMIT,
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/tasklist/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("tasklist/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("tasklist\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Loads the user config, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(config) = Self::load_from(&config_path) {
                    return config;
                }
            }
        }
        Self::default()
    }

    pub fn load_from(path: &Path) -> TaskResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| TaskError::Config(e.to_string()))
    }

    /// Log file used while the terminal UI owns the screen.
    pub fn tui_log_file() -> Option<PathBuf> {
        dirs::state_dir()
            .or_else(dirs::cache_dir)
            .map(|dir| dir.join("tasklist").join(LOG_FILE_NAME))
    }

    /// Picks the data file: explicit path, then config, then the platform
    /// data dir, then the working directory.
    pub fn resolve_data_file(&self, explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        if let Some(path) = &self.data_file {
            return path.clone();
        }
        dirs::data_dir()
            .map(|dir| dir.join("tasklist").join(DATA_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(DATA_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.data_file.is_none());
        assert!(config.seed.enabled);
        assert_eq!(config.seed.url, DEFAULT_SEED_URL);
        assert_eq!(config.seed.limit, 5);
    }

    #[test]
    fn test_load_partial_seed_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_file = \"/tmp/t.json\"\n[seed]\nlimit = 12\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/t.json")));
        assert_eq!(config.seed.limit, 12);
        assert!(config.seed.enabled);
        assert_eq!(config.seed.url, DEFAULT_SEED_URL);
    }

    #[test]
    fn test_load_invalid_toml_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "seed = [not toml").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, TaskError::Config(_)));
    }

    #[test]
    fn test_resolve_data_file_precedence() {
        let config = AppConfig {
            data_file: Some(PathBuf::from("from-config.json")),
            ..AppConfig::default()
        };
        assert_eq!(
            config.resolve_data_file(Some(Path::new("explicit.json"))),
            PathBuf::from("explicit.json")
        );
        assert_eq!(
            config.resolve_data_file(None),
            PathBuf::from("from-config.json")
        );

        let fallback = AppConfig::default().resolve_data_file(None);
        assert!(fallback.ends_with(DATA_FILE_NAME));
    }

    #[test]
    fn test_tui_log_file_is_outside_data_file() {
        if let Some(path) = AppConfig::tui_log_file() {
            assert!(path.ends_with("tasklist/tasklist.log"));
            assert_ne!(path, AppConfig::default().resolve_data_file(None));
        }
    }
}
