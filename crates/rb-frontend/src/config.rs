//! Application configuration
//!
//! Settings persist as RON in the platform config directory
//! (`<config_dir>/room-builder/config.ron`). A missing or unreadable file
//! falls back to defaults; the web build never touches the filesystem.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use rb_core::{RoomConfig, RoomSize, WallColor};
use rb_renderer::RendererConfig;
use serde::{Deserialize, Serialize};

/// Configuration file name inside the application config directory
pub const CONFIG_FILE_NAME: &str = "config.ron";

/// Errors from loading or saving the configuration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
}

/// UI color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UiTheme {
    #[default]
    Dark,
    Light,
}

/// Interface settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UiConfig {
    pub theme: UiTheme,
}

/// Room the application starts with
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StartupConfig {
    pub room_size: RoomSize,
    pub wall_color: WallColor,
}

impl StartupConfig {
    pub fn room(&self) -> RoomConfig {
        RoomConfig::new(self.room_size, self.wall_color)
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub startup: StartupConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub renderer: RendererConfig,
}

impl AppConfig {
    /// Parse a RON document
    pub fn from_ron(content: &str) -> Result<Self, ConfigError> {
        ron::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Render as a pretty RON document
    pub fn to_ron(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}

/// Owns the configuration and where it is stored
#[derive(Debug, Default)]
pub struct ConfigManager {
    config: AppConfig,
    path: Option<PathBuf>,
}

impl ConfigManager {
    /// Load from the default location, falling back to defaults
    pub fn load() -> Self {
        match default_config_path() {
            Some(path) => Self::load_from(path),
            None => {
                tracing::debug!("No config directory available, using defaults");
                Self::default()
            }
        }
    }

    /// Load from `path`, falling back to defaults if it is missing or broken.
    ///
    /// The path is remembered either way so a later save recreates the file.
    pub fn load_from(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let config = if path.exists() {
            match read_config(&path) {
                Ok(config) => {
                    tracing::info!("Loaded config from {:?}", path);
                    config
                }
                Err(e) => {
                    tracing::warn!("Ignoring config at {:?}: {}", path, e);
                    AppConfig::default()
                }
            }
        } else {
            AppConfig::default()
        };

        Self {
            config,
            path: Some(path),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut AppConfig {
        &mut self.config
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Restore every setting to its default
    pub fn reset_to_defaults(&mut self) {
        self.config = AppConfig::default();
    }

    /// Write the configuration to its file, creating the directory if needed.
    ///
    /// Without a known location this does nothing.
    pub fn save(&self) -> Result<(), ConfigError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| ConfigError::Io(e.to_string()))?;
        }
        let content = self.config.to_ron()?;
        std::fs::write(path, content).map_err(|e| ConfigError::Io(e.to_string()))?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
    AppConfig::from_ron(&content)
}

#[cfg(not(target_arch = "wasm32"))]
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("room-builder").join(CONFIG_FILE_NAME))
}

#[cfg(target_arch = "wasm32")]
fn default_config_path() -> Option<PathBuf> {
    None
}

/// Configuration shared between the app and its panels
pub type SharedConfig = Arc<RwLock<ConfigManager>>;

/// Load the configuration and wrap it for sharing
pub fn create_shared_config() -> SharedConfig {
    Arc::new(RwLock::new(ConfigManager::load()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let manager = ConfigManager::load_from(&path);
        assert_eq!(manager.config(), &AppConfig::default());
        assert_eq!(manager.path(), Some(path.as_path()));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("room-builder").join(CONFIG_FILE_NAME);

        let mut manager = ConfigManager::load_from(&path);
        {
            let config = manager.config_mut();
            config.startup.room_size = RoomSize::Large;
            config.startup.wall_color = WallColor([0x12, 0x34, 0x56]);
            config.ui.theme = UiTheme::Light;
            config.renderer.camera.orbit_sensitivity = 0.01;
        }
        manager.save().unwrap();

        let reloaded = ConfigManager::load_from(&path);
        assert_eq!(reloaded.config(), manager.config());
        assert_eq!(reloaded.config().startup.room().edge(), 15.0);
    }

    #[test]
    fn test_ron_uses_readable_values() {
        let ron = AppConfig::default().to_ron().unwrap();
        assert!(ron.contains("\"#8b0000\""), "{ron}");
        assert!(ron.contains("room_size: 10"), "{ron}");
    }

    #[test]
    fn test_broken_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "(startup: (room_size: 12").unwrap();

        let manager = ConfigManager::load_from(&path);
        assert_eq!(manager.config(), &AppConfig::default());
    }

    #[test]
    fn test_invalid_room_size_is_a_parse_error() {
        let err = AppConfig::from_ron("(startup: (room_size: 12, wall_color: \"#000000\"))")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let config = AppConfig::from_ron("(ui: (theme: Light))").unwrap();
        assert_eq!(config.ui.theme, UiTheme::Light);
        assert_eq!(config.startup, StartupConfig::default());
        assert_eq!(config.renderer, RendererConfig::default());
    }

    #[test]
    fn test_reset_to_defaults() {
        let mut manager = ConfigManager::default();
        manager.config_mut().ui.theme = UiTheme::Light;
        manager.reset_to_defaults();
        assert_eq!(manager.config().ui.theme, UiTheme::Dark);
        // No path: saving is a no-op
        assert_eq!(manager.save(), Ok(()));
    }
}
