//! Application configuration
//!
//! Configuration is loaded from:
//! 1. Default values
//! 2. Config file (~/.config/bookhub/config.toml)
//! 3. Environment variables (BOOKHUB_* prefix)
//!
//! Environment variables take precedence over config file values.
//! The config only holds preferences; the catalog itself is never persisted.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::reading::{MangaDirection, TextSize};

/// Environment variable prefix
const ENV_PREFIX: &str = "BOOKHUB";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory for local files (debug log)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Log file for the TUI (defaults to {data_dir}/debug.log)
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Start the TUI in dark mode
    #[serde(default)]
    pub dark_mode: bool,

    #[serde(default)]
    pub profile: ProfileConfig,

    #[serde(default)]
    pub reading: ReadingConfig,
}

/// Reader profile shown on the profile surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub name: String,
    /// Year the reader started
    pub reader_since: i32,
    pub favorite_genres: Vec<String>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: "Александр Книголюб".to_string(),
            reader_since: 2020,
            favorite_genres: vec![
                "Фантастика".to_string(),
                "Приключения".to_string(),
                "Классика".to_string(),
            ],
        }
    }
}

/// Reading screen preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingConfig {
    pub text_size: TextSize,
    pub manga_direction: MangaDirection,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_file: None,
            dark_mode: false,
            profile: ProfileConfig::default(),
            reading: ReadingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from default location and environment
    ///
    /// Order of precedence (highest to lowest):
    /// 1. Environment variables (BOOKHUB_DATA_DIR, BOOKHUB_LOG_FILE, BOOKHUB_DARK_MODE)
    /// 2. Config file (~/.config/bookhub/config.toml or BOOKHUB_CONFIG)
    /// 3. Default values
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::config_file_path())
    }

    /// Load configuration, preferring a path given on the command line
    pub fn load_with_cli_override(path: Option<&PathBuf>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => Self::load(),
        }
    }

    /// Load configuration from a specific path
    ///
    /// Environment variables are still applied as overrides.
    /// If the file doesn't exist, defaults are used.
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a TOML string (useful for testing)
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let mut config: Config =
            toml::from_str(toml_content).context("Failed to parse config TOML")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        // BOOKHUB_DATA_DIR
        if let Ok(val) = std::env::var(format!("{}_DATA_DIR", ENV_PREFIX)) {
            self.data_dir = PathBuf::from(val);
        }

        // BOOKHUB_LOG_FILE
        if let Ok(val) = std::env::var(format!("{}_LOG_FILE", ENV_PREFIX)) {
            self.log_file = if val.is_empty() {
                None
            } else {
                Some(PathBuf::from(val))
            };
        }

        // BOOKHUB_DARK_MODE
        if let Ok(val) = std::env::var(format!("{}_DARK_MODE", ENV_PREFIX)) {
            self.dark_mode = val.eq_ignore_ascii_case("true") || val == "1";
        }
    }

    /// Ensure data directory exists
    pub fn ensure_data_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            std::fs::create_dir_all(&self.data_dir)
                .with_context(|| format!("Failed to create data directory: {:?}", self.data_dir))?;
        }
        Ok(())
    }

    /// Save configuration to the default file
    pub fn save(&self) -> Result<()> {
        self.save_to_path(&Self::config_file_path())
    }

    /// Save configuration to a specific file
    pub fn save_to_path(&self, config_path: &PathBuf) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;
        Ok(())
    }

    /// Get the config file path
    ///
    /// Can be overridden with BOOKHUB_CONFIG environment variable
    pub fn config_file_path() -> PathBuf {
        if let Ok(path) = std::env::var(format!("{}_CONFIG", ENV_PREFIX)) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("bookhub")
            .join("config.toml")
    }

    /// Path of the TUI debug log
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| self.data_dir.join("debug.log"))
    }
}

/// Get the default data directory
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bookhub")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Mutex to serialize tests that touch environment variables
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Guard that locks env access and saves/restores env vars
    struct EnvGuard<'a> {
        _lock: std::sync::MutexGuard<'a, ()>,
        saved: Vec<(String, Option<String>)>,
    }

    impl<'a> EnvGuard<'a> {
        fn new(vars: &[&str]) -> Self {
            let lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
            let saved = vars
                .iter()
                .map(|&name| (name.to_string(), env::var(name).ok()))
                .collect();
            for name in vars {
                env::remove_var(name);
            }
            Self { _lock: lock, saved }
        }
    }

    impl Drop for EnvGuard<'_> {
        fn drop(&mut self) {
            for (name, value) in &self.saved {
                match value {
                    Some(v) => env::set_var(name, v),
                    None => env::remove_var(name),
                }
            }
        }
    }

    const ENV_VARS: &[&str] = &[
        "BOOKHUB_DATA_DIR",
        "BOOKHUB_LOG_FILE",
        "BOOKHUB_DARK_MODE",
        "BOOKHUB_CONFIG",
    ];

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.dark_mode);
        assert!(config.log_file.is_none());
        assert!(config.data_dir.ends_with("bookhub"));
        assert_eq!(config.profile.reader_since, 2020);
        assert_eq!(config.reading.text_size, TextSize::Large);
    }

    #[test]
    fn test_log_path() {
        let mut config = Config::default();
        assert!(config.log_path().ends_with("debug.log"));

        config.log_file = Some(PathBuf::from("/tmp/bookhub.log"));
        assert_eq!(config.log_path(), PathBuf::from("/tmp/bookhub.log"));
    }

    #[test]
    fn test_env_override_data_dir() {
        let _guard = EnvGuard::new(ENV_VARS);

        let mut config = Config::default();
        env::set_var("BOOKHUB_DATA_DIR", "/tmp/bookhub-test");
        config.apply_env_overrides();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/bookhub-test"));
    }

    #[test]
    fn test_env_override_dark_mode() {
        let _guard = EnvGuard::new(ENV_VARS);

        let mut config = Config::default();
        env::set_var("BOOKHUB_DARK_MODE", "TRUE");
        config.apply_env_overrides();
        assert!(config.dark_mode);

        env::set_var("BOOKHUB_DARK_MODE", "0");
        config.apply_env_overrides();
        assert!(!config.dark_mode);
    }

    #[test]
    fn test_env_override_log_file() {
        let _guard = EnvGuard::new(ENV_VARS);

        let mut config = Config::default();
        env::set_var("BOOKHUB_LOG_FILE", "/var/tmp/hub.log");
        config.apply_env_overrides();
        assert_eq!(config.log_file, Some(PathBuf::from("/var/tmp/hub.log")));

        // Empty string clears it
        env::set_var("BOOKHUB_LOG_FILE", "");
        config.apply_env_overrides();
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_load_from_str_with_sections() {
        let _guard = EnvGuard::new(ENV_VARS);

        let toml = r#"
            data_dir = "/custom/data"
            dark_mode = true

            [profile]
            name = "Мария"
            favorite_genres = ["Сэйнэн"]

            [reading]
            manga_direction = "left_to_right"
        "#;

        let config = Config::load_from_str(toml).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/custom/data"));
        assert!(config.dark_mode);
        assert_eq!(config.profile.name, "Мария");
        // Unset fields fall back to defaults
        assert_eq!(config.profile.reader_since, 2020);
        assert_eq!(config.profile.favorite_genres, vec!["Сэйнэн"]);
        assert_eq!(config.reading.manga_direction, MangaDirection::LeftToRight);
        assert_eq!(config.reading.text_size, TextSize::Large);
    }

    #[test]
    fn test_load_from_path_missing_file() {
        let _guard = EnvGuard::new(ENV_VARS);

        let path = PathBuf::from("/nonexistent/bookhub/config.toml");
        let config = Config::load_from_path(&path).unwrap();
        assert!(!config.dark_mode);
        assert_eq!(config.profile, ProfileConfig::default());
    }

    #[test]
    fn test_load_from_path_rejects_bad_toml() {
        let _guard = EnvGuard::new(ENV_VARS);

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "dark_mode = [not toml").unwrap();

        let err = Config::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_save_and_reload() {
        let _guard = EnvGuard::new(ENV_VARS);

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.dark_mode = true;
        config.reading.text_size = TextSize::Small;
        config.save_to_path(&path).unwrap();

        let loaded = Config::load_with_cli_override(Some(&path)).unwrap();
        assert!(loaded.dark_mode);
        assert_eq!(loaded.reading.text_size, TextSize::Small);
        assert_eq!(loaded.profile, config.profile);
    }

    #[test]
    fn test_save_writes_to_config_env_path() {
        let _guard = EnvGuard::new(ENV_VARS);

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bookhub").join("config.toml");
        env::set_var("BOOKHUB_CONFIG", &path);

        let mut config = Config::default();
        config.profile.name = "Мария Читалкина".to_string();
        config.save().unwrap();

        let loaded = Config::load().unwrap();
        assert_eq!(loaded.profile.name, "Мария Читалкина");
        assert!(path.is_file());
    }

    #[test]
    fn test_ensure_data_dir_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            data_dir: temp_dir.path().join("data"),
            ..Config::default()
        };
        config.ensure_data_dir().unwrap();
        assert!(config.data_dir.is_dir());
    }
}
