//! Scene configuration persisted as RON.
//!
//! Every section is `#[serde(default)]`, so a config file only needs the
//! fields it wants to change. Missing or unreadable files fall back to the
//! defaults.

use std::{fs, path::Path};

use bevy_ecs::resource::Resource;
use bevy_log::{info, warn};
use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};

use crate::{MAX_SCROLL, OCEAN_DEPTH, OCEAN_SUBDIVISIONS, OCEAN_WIDTH};

pub const DEFAULT_CONFIG_FILE: &str = "seascape.ron";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write config: {0}")]
    Write(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] ron::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[source] ron::Error),
}

#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SeascapeConfig {
    pub window: WindowConfig,
    pub ocean: OceanConfig,
    pub scroll: ScrollConfig,
    pub fog: FogConfig,
    pub debug: DebugConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Logical width, ignored when mounted on a browser canvas
    pub width: f32,
    pub height: f32,
    /// CSS selector of the canvas to render into on the web
    pub canvas: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Seascape".to_string(),
            width: 1280.0,
            height: 720.0,
            canvas: "#seascape-canvas".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OceanConfig {
    pub width: f32,
    pub depth: f32,
    pub subdivisions: u32,
    /// Recompute smooth normals after each displacement.
    /// Off by default: the surface is lit as if flat.
    pub recompute_normals: bool,
}

impl Default for OceanConfig {
    fn default() -> Self {
        Self {
            width: OCEAN_WIDTH,
            depth: OCEAN_DEPTH,
            subdivisions: OCEAN_SUBDIVISIONS,
            recompute_normals: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScrollConfig {
    /// Scroll distance at which the fog is fully deep
    pub max_scroll: f32,
    /// Furthest the page can be scrolled
    pub page_extent: f32,
    /// Pixels scrolled per wheel line
    pub pixels_per_line: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            max_scroll: MAX_SCROLL,
            page_extent: MAX_SCROLL,
            pixels_per_line: 100.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FogConfig {
    pub enabled: bool,
    pub density: f32,
}

impl Default for FogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            density: 0.01,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    pub show_inspector: bool,
    pub show_hud: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            show_inspector: false,
            show_hud: true,
        }
    }
}

/// Writes `value` to `path` as pretty RON, creating parent directories.
pub fn write_ron<T: Serialize>(value: &T, path: &Path) -> Result<(), ConfigError> {
    let pretty_config = PrettyConfig::new()
        .with_depth_limit(3)
        .with_separate_tuple_members(true);
    let serialized =
        ron::ser::to_string_pretty(value, pretty_config).map_err(ConfigError::Serialize)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(ConfigError::Write)?;
    }
    fs::write(path, serialized).map_err(ConfigError::Write)
}

impl SeascapeConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(ConfigError::Read)?;
        ron::from_str(&content).map_err(ConfigError::Parse)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        write_ron(self, path)
    }

    /// Loads `path`, falling back to defaults when it is missing or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                info!("Loaded config from {:?}", path);
                config
            }
            Err(ConfigError::Read(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No config at {:?}, using defaults", path);
                Self::default()
            }
            Err(e) => {
                warn!("Ignoring config at {:?}: {}", path, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_scene() {
        let config = SeascapeConfig::default();
        assert_eq!(config.ocean.width, 512.0);
        assert_eq!(config.ocean.subdivisions, 100);
        assert!(!config.ocean.recompute_normals);
        assert_eq!(config.scroll.max_scroll, 2000.0);
        assert!(!config.fog.enabled);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join(DEFAULT_CONFIG_FILE);

        let mut config = SeascapeConfig::default();
        config.ocean.subdivisions = 32;
        config.fog.enabled = true;
        config.save(&path).expect("save");

        let loaded = SeascapeConfig::load(&path).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "(fog: (enabled: true))").expect("write");

        let loaded = SeascapeConfig::load(&path).expect("load");
        assert!(loaded.fog.enabled);
        assert_eq!(loaded.fog.density, 0.01);
        assert_eq!(loaded.ocean, OceanConfig::default());
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "(ocean: (subdivisions: \"many\"))").expect("write");

        assert!(matches!(
            SeascapeConfig::load(&path),
            Err(ConfigError::Parse(_))
        ));
        assert_eq!(SeascapeConfig::load_or_default(&path), SeascapeConfig::default());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.ron");
        assert_eq!(SeascapeConfig::load_or_default(&path), SeascapeConfig::default());
    }
}
