use navstack::PushPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine config directory")]
    NoConfigDir,
    #[error("config i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Demo configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Config {
    pub theme: ThemeConfig,
    pub window: WindowConfig,
    pub navigation: NavigationConfig,
    pub logging: LoggingConfig,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

/// Initial window size
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NavigationConfig {
    /// "discard_forward" or "append"
    pub push_policy: PushPolicy,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LoggingConfig {
    /// Used when RUST_LOG is not set
    pub filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            theme: ThemeConfig {
                mode: "dark".to_string(),
            },
            window: WindowConfig {
                width: 900.0,
                height: 600.0,
            },
            navigation: NavigationConfig {
                push_policy: PushPolicy::DiscardForward,
            },
            logging: LoggingConfig {
                filter: "navstack=debug,info".to_string(),
            },
        }
    }
}

impl Config {
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "navstack")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_or_default(&path),
            _ => Config::default(),
        }
    }

    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "using default configuration");
                Config::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str::<Config>(&contents)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        info!(path = %path.display(), "configuration saved");
        Ok(())
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<(), ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        if !path.exists() {
            Config::default().save_to(&path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("navstack-test-{}", uuid::Uuid::new_v4()))
            .join("config.toml")
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme.mode, "dark");
        assert_eq!(config.window.width, 900.0);
        assert_eq!(config.navigation.push_policy, PushPolicy::DiscardForward);
    }

    #[test]
    fn test_push_policy_in_toml() {
        let mut config = Config::default();
        config.navigation.push_policy = PushPolicy::Append;
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        assert!(toml_str.contains("push_policy = \"append\""));

        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(deserialized.navigation.push_policy, PushPolicy::Append);
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path();
        let mut config = Config::default();
        config.theme.mode = "light".to_string();
        config.save_to(&path).expect("save");

        let loaded = Config::load_from(&path).expect("load");
        assert_eq!(loaded.theme.mode, "light");
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let path = scratch_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "theme = [not toml").unwrap();

        assert!(matches!(Config::load_from(&path), Err(ConfigError::Parse(_))));
        let config = Config::load_or_default(&path);
        assert_eq!(config.theme.mode, "dark");
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            Config::load_from(&scratch_path()),
            Err(ConfigError::Io(_))
        ));
    }
}
