//! # TileKit Designer
//!
//! The placement model behind the TileKit canvas: colored rectangular
//! components sorted into named groups, a selection set, and the Object
//! menu actions that create and delete them.
//!
//! ## Core Components
//!
//! - **Group Registry**: named groups with a display color and an ordered
//!   member sequence
//! - **Component Store**: every live component, keyed by id
//! - **Selection Manager**: the currently selected components
//! - **Canvas Surface**: the seam to whatever draws the components
//! - **Tile**: grid parameters, position generation and the modal dialog
//!   that collects them
//! - **Actions**: add, delete and tile
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (owned by the host)
//!   ├── GroupRegistry
//!   ├── ComponentStore
//!   ├── SelectionManager
//!   └── CanvasSurface
//!
//! actions::{add_component, delete_component, tile}
//!   └── dialog::TileDialog (tile only)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use tilekit_designer::{actions, DesignerState, TileParams};
//! use tilekit_core::Color;
//!
//! let mut state = DesignerState::new();
//! let group = state.create_group("Resistors", Color::rgb(200, 40, 40))?;
//! state.set_active_group(Some(group))?;
//!
//! actions::add_component(&mut state)?;
//! let mut dialog = || Some(TileParams::new(0, 0, 70, 40, 3, 2));
//! let outcome = actions::tile(&mut state, &mut dialog)?;
//! assert_eq!(outcome.created().len(), 6);
//! assert_eq!(state.component_count(), 7);
//! # Ok::<(), tilekit_designer::DesignerError>(())
//! ```

pub mod actions;
pub mod canvas;
pub mod component;
pub mod component_store;
pub mod designer_state;
pub mod dialog;
pub mod error;
pub mod group_registry;
pub mod selection_manager;
pub mod tile;

pub use actions::{add_component, delete_component, tile, TileOutcome, ADD_COMPONENT_POSITION};
pub use canvas::{CanvasItem, CanvasSurface, ItemHandle, MemoryCanvas};
pub use component::Component;
pub use designer_state::{DesignerState, PlacementDefaults, StatusLine};
pub use dialog::{
    FormEvent, FormPrompt, ModalTileDialog, Notifier, RecordingNotifier, ScriptedEvent,
    ScriptedPrompt, TileDialog, TileField, TileForm,
};
pub use error::{DesignerError, Result, INVALID_INTEGERS_MESSAGE, NO_GROUP_SELECTED_MESSAGE};
pub use group_registry::{Group, GroupRegistry};
pub use tile::{TileGenerator, TileParams};
