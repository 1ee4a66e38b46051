//! # TileKit
//!
//! Place colored rectangular components on a canvas, sorted into named
//! groups, and replicate them into grids.
//!
//! ## Architecture
//!
//! TileKit is organized as a workspace with multiple crates:
//!
//! 1. **tilekit-core** - Value types (colors, points, sizes, ids) and core errors
//! 2. **tilekit-designer** - Groups, selection, components, the add/delete/tile
//!    actions and the modal tile dialog contract
//! 3. **tilekit-settings** - Placement configuration in JSON or TOML
//! 4. **tilekit** - This crate: logging setup, state bootstrap and the
//!    terminal front end

pub mod console;

pub use tilekit_core::{Color, ComponentId, GroupId, Point, Size};
pub use tilekit_designer::{
    actions, DesignerError, DesignerState, MemoryCanvas, PlacementDefaults, TileDialog, TileParams,
};
pub use tilekit_settings::{Config, GroupPreset, SettingsManager};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Builds the designer state described by `config`.
///
/// Group presets are created in order and the configured active group, if
/// any, is selected.
pub fn build_state(config: &Config) -> Result<DesignerState, DesignerError> {
    let defaults = PlacementDefaults {
        size: config.placement.size(),
    };
    let mut state = DesignerState::with_surface(MemoryCanvas::new(), defaults);

    for preset in &config.groups {
        state.create_group(&preset.name, preset.color)?;
    }
    if let Some(active) = &config.active_group {
        state.activate_group_by_name(active)?;
    }
    Ok(state)
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, so it never interleaves with the console prompt
/// - RUST_LOG environment variable support, `warn` when unset
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
