//! Configuration for TileKit
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats, chosen by file extension.
//!
//! Configuration is organized into sections:
//! - Placement settings (size of new components)
//! - Group presets (groups created at start-up, with their colors)
//! - The group active at start-up

use crate::error::{ConfigError, ConfigResult, SettingsResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tilekit_core::{Color, Size};

/// Placement settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementSettings {
    /// Width of new components in pixels
    pub component_width: i32,
    /// Height of new components in pixels
    pub component_height: i32,
}

impl Default for PlacementSettings {
    fn default() -> Self {
        Self {
            component_width: 60,
            component_height: 30,
        }
    }
}

impl PlacementSettings {
    pub fn size(&self) -> Size {
        Size::new(self.component_width, self.component_height)
    }
}

/// A group created at start-up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupPreset {
    pub name: String,
    pub color: Color,
}

impl GroupPreset {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Name of the preset made active at start-up
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_group: Option<String>,
    /// Placement settings
    pub placement: PlacementSettings,
    /// Group presets, created in order
    pub groups: Vec<GroupPreset>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> ConfigResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), groups = config.groups.len(), "config loaded");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "config saved");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let size = self.placement.size();
        if !size.is_valid() {
            let (key, value) = if size.width <= 0 {
                ("placement.component_width", size.width)
            } else {
                ("placement.component_height", size.height)
            };
            return Err(ConfigError::ValueOutOfRange {
                key: key.to_string(),
                value: value.to_string(),
            });
        }

        let mut seen = HashSet::new();
        for preset in &self.groups {
            let name = preset.name.trim();
            if name.is_empty() {
                return Err(ConfigError::InvalidPreset {
                    name: preset.name.clone(),
                    reason: "name must not be empty".to_string(),
                });
            }
            if !seen.insert(name) {
                return Err(ConfigError::InvalidPreset {
                    name: preset.name.clone(),
                    reason: "duplicate name".to_string(),
                });
            }
        }

        if let Some(active) = &self.active_group {
            if !seen.contains(active.trim()) {
                return Err(ConfigError::InvalidPreset {
                    name: active.clone(),
                    reason: "active group is not a preset".to_string(),
                });
            }
        }

        Ok(())
    }
}
