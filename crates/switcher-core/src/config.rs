//! Configuration types.
//!
//! Configuration lives in `config.toml` under the platform config directory.
//! Every field has a default, so a missing or partial file is fine.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

const APP_DIR: &str = "workspace-switcher";
const CONFIG_FILE: &str = "config.toml";

/// Runtime configuration loaded from config.toml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Appearance settings
    #[serde(default)]
    pub appearance: AppearanceConfig,

    /// Timing and list limits
    #[serde(default)]
    pub behavior: BehaviorConfig,

    /// Seed data
    #[serde(default)]
    pub data: DataConfig,

    /// Keystroke -> action name overrides, e.g. `"ctrl+j" = "cursor_down"`.
    #[serde(default)]
    pub keymap: BTreeMap<String, String>,
}

impl AppConfig {
    /// Parse a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Read and parse a config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Load the user config, falling back to defaults on any failure.
    pub fn load_or_default() -> Self {
        let Some(path) = config_path() else {
            tracing::warn!("{} - using default configuration", ConfigError::NoConfigDir);
            return Self::default();
        };

        if !path.exists() {
            tracing::info!("No config at {} - using defaults", path.display());
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Config loaded from {}", path.display());
                config
            }
            Err(e) => {
                tracing::error!("Failed to load {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}

/// Appearance configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppearanceConfig {
    /// Theme mode: "light", "dark", or "system"
    #[serde(default)]
    pub theme: ThemeMode,

    /// Accent hue in degrees (0-360). Default is blue.
    #[serde(default = "default_accent_hue")]
    pub accent_hue: f32,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            accent_hue: default_accent_hue(),
        }
    }
}

fn default_accent_hue() -> f32 {
    211.0
}

/// Theme mode selection.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

/// Timing and list limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Simulated latency when switching workspaces.
    pub select_delay_ms: u64,
    /// Simulated latency when creating a workspace.
    pub create_delay_ms: u64,
    /// Hover time before the preview card shows.
    pub preview_delay_ms: u64,
    /// Rows rendered in the dropdown list.
    pub max_visible_rows: usize,
    /// Recent searches kept.
    pub max_recent_searches: usize,
    /// Suggestions shown under the search input.
    pub max_suggestions: usize,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            select_delay_ms: 500,
            create_delay_ms: 800,
            preview_delay_ms: 300,
            max_visible_rows: 10,
            max_recent_searches: 5,
            max_suggestions: 3,
        }
    }
}

impl BehaviorConfig {
    pub fn select_delay(&self) -> Duration {
        Duration::from_millis(self.select_delay_ms)
    }

    pub fn create_delay(&self) -> Duration {
        Duration::from_millis(self.create_delay_ms)
    }

    pub fn preview_delay(&self) -> Duration {
        Duration::from_millis(self.preview_delay_ms)
    }
}

/// Seed data configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    /// JSON file with the starting workspace list. Built-in catalog if unset.
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(APP_DIR))
}

/// Get the path to config.toml.
///
/// Prefers `~/.config/workspace-switcher/config.toml` when it exists,
/// then the platform config directory.
pub fn config_path() -> Option<PathBuf> {
    if let Some(home) = dirs::home_dir() {
        let xdg_path = home.join(".config").join(APP_DIR).join(CONFIG_FILE);
        if xdg_path.exists() {
            return Some(xdg_path);
        }
    }

    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.appearance.theme, ThemeMode::System);
        assert_eq!(config.behavior.select_delay(), Duration::from_millis(500));
        assert_eq!(config.behavior.create_delay(), Duration::from_millis(800));
        assert_eq!(config.behavior.preview_delay(), Duration::from_millis(300));
        assert_eq!(config.behavior.max_visible_rows, 10);
        assert!(config.data.seed_file.is_none());
        assert!(config.keymap.is_empty());
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = AppConfig::from_toml(
            r#"
            [appearance]
            theme = "dark"

            [behavior]
            select_delay_ms = 0

            [keymap]
            "ctrl+j" = "cursor_down"
            "#,
        )
        .unwrap();

        assert_eq!(config.appearance.theme, ThemeMode::Dark);
        assert!((config.appearance.accent_hue - 211.0).abs() < f32::EPSILON);
        assert_eq!(config.behavior.select_delay_ms, 0);
        assert_eq!(config.behavior.create_delay_ms, 800);
        assert_eq!(
            config.keymap.get("ctrl+j").map(String::as_str),
            Some("cursor_down")
        );
    }

    #[test]
    fn test_invalid_document() {
        let err = AppConfig::from_toml("[appearance]\ntheme = \"sepia\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[data]\nseed_file = \"/tmp/seed.json\"").unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(
            config.data.seed_file,
            Some(PathBuf::from("/tmp/seed.json"))
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = AppConfig::load_from(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
