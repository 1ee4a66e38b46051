//! TileKit Settings Crate
//!
//! Handles placement configuration and its persistence.

pub mod config;
pub mod error;
pub mod manager;

pub use config::{Config, GroupPreset, PlacementSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
pub use manager::SettingsManager;
