//! Settings manager
//!
//! Owns the active [`Config`] and the file it came from. The default
//! location is `<platform config dir>/tilekit/config.toml`.

use crate::config::Config;
use crate::error::{SettingsError, SettingsResult};
use std::path::{Path, PathBuf};

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "tilekit";

/// File name of the default config.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Loads, holds and saves the application configuration.
#[derive(Debug, Clone)]
pub struct SettingsManager {
    path: PathBuf,
    config: Config,
}

impl SettingsManager {
    /// Default config file path for this platform.
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config directory on this platform".to_string())
            })
    }

    /// Loads the config at `path`, falling back to defaults when the file
    /// does not exist. Any other failure is returned.
    pub fn load_or_default(path: impl Into<PathBuf>) -> SettingsResult<Self> {
        let path = path.into();
        let config = if path.exists() {
            Config::load_from_file(&path)?
        } else {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            Config::default()
        };
        Ok(Self { path, config })
    }

    /// Loads the config from the platform default location.
    pub fn load_default() -> SettingsResult<Self> {
        Self::load_or_default(Self::default_path()?)
    }

    /// Writes the current config back to its file.
    pub fn save(&self) -> SettingsResult<()> {
        self.config.save_to_file(&self.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }
}
