use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::store::JsonFileStorage;

const MIN_TICK_RATE_MS: u64 = 50;
const MAX_TICK_RATE_MS: u64 = 1000;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_confirm_reset_day")]
    pub confirm_reset_day: bool,
}

fn default_theme() -> String {
    "catppuccin-mocha".to_string()
}
fn default_tick_rate_ms() -> u64 {
    250
}
fn default_data_dir() -> String {
    JsonFileStorage::default_dir().to_string_lossy().to_string()
}
fn default_confirm_reset_day() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            tick_rate_ms: default_tick_rate_ms(),
            data_dir: default_data_dir(),
            confirm_reset_day: default_confirm_reset_day(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            let config: Config =
                toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dayboard")
    }

    fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }

    /// Clamp the tick rate and fall back to the default theme when the
    /// configured one is not known. Call after deserialization.
    pub fn validate(&mut self, available_themes: &[String]) {
        self.tick_rate_ms = self.tick_rate_ms.clamp(MIN_TICK_RATE_MS, MAX_TICK_RATE_MS);
        if !available_themes.iter().any(|t| *t == self.theme) {
            self.theme = default_theme();
        }
        if self.data_dir.trim().is_empty() {
            self.data_dir = default_data_dir();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn themes() -> Vec<String> {
        vec!["catppuccin-mocha".to_string(), "gruvbox-dark".to_string()]
    }

    #[test]
    fn test_config_serde_defaults_from_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.data_dir.contains("dayboard"));
    }

    #[test]
    fn test_config_partial_file_keeps_given_fields() {
        let toml_str = r#"
theme = "gruvbox-dark"
confirm_reset_day = false
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.theme, "gruvbox-dark");
        assert!(!config.confirm_reset_day);
        assert_eq!(config.tick_rate_ms, 250);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_validate_clamps_tick_rate() {
        let mut config = Config {
            tick_rate_ms: 1,
            ..Config::default()
        };
        config.validate(&themes());
        assert_eq!(config.tick_rate_ms, 50);

        config.tick_rate_ms = 60_000;
        config.validate(&themes());
        assert_eq!(config.tick_rate_ms, 1000);
    }

    #[test]
    fn test_validate_unknown_theme_resets() {
        let mut config = Config {
            theme: "neon".to_string(),
            ..Config::default()
        };
        config.validate(&themes());
        assert_eq!(config.theme, "catppuccin-mocha");
    }

    #[test]
    fn test_validate_blank_data_dir_resets() {
        let mut config = Config {
            data_dir: "  ".to_string(),
            ..Config::default()
        };
        config.validate(&themes());
        assert_eq!(config.data_dir, default_data_dir());
    }
}
