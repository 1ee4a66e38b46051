//! The Object menu actions: add, delete and tile.
//!
//! Each action borrows the designer state for one call. Errors are returned
//! to the host, which decides how to show them; an action that fails has
//! not mutated anything.

use crate::canvas::CanvasSurface;
use crate::designer_state::DesignerState;
use crate::dialog::TileDialog;
use crate::error::Result;
use crate::tile::{TileGenerator, TileParams};
use tilekit_core::{ComponentId, Point};
use tracing::{debug, info};

/// Where Add Component places the new component.
pub const ADD_COMPONENT_POSITION: Point = Point::new(50, 50);

/// Result of a tile action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileOutcome {
    /// The dialog was cancelled; nothing was created.
    Cancelled,
    /// The grid was placed. `created` is in creation order and may be empty.
    Placed {
        params: TileParams,
        created: Vec<ComponentId>,
    },
}

impl TileOutcome {
    /// Components created by the action.
    pub fn created(&self) -> &[ComponentId] {
        match self {
            TileOutcome::Cancelled => &[],
            TileOutcome::Placed { created, .. } => created,
        }
    }
}

/// Adds one component to the active group at [`ADD_COMPONENT_POSITION`] and
/// makes it the only selected component.
pub fn add_component<S: CanvasSurface>(state: &mut DesignerState<S>) -> Result<ComponentId> {
    let group = state.require_active_group()?;
    let origin = ADD_COMPONENT_POSITION;

    let id = state.spawn_component(group, origin)?;
    // Replaces the previous selection and updates the status line.
    state.select(id, false)?;

    info!(%id, %group, %origin, "component added");
    Ok(id)
}

/// Deletes every selected component and empties the selection.
///
/// Returns the number of components removed. With nothing selected this is
/// a no-op returning zero.
pub fn delete_component<S: CanvasSurface>(state: &mut DesignerState<S>) -> Result<usize> {
    let selected = state.selected_ids();
    for &id in &selected {
        state.remove_component(id)?;
    }
    state.deselect_all();

    if !selected.is_empty() {
        info!(count = selected.len(), "components deleted");
    }
    Ok(selected.len())
}

/// Asks for tile parameters and places a grid of components in the active
/// group.
///
/// The dialog is not opened when no group is active. Tiled components are
/// not selected. When at least one component was created the status line
/// shows the last one, cell `(num_x - 1, num_y - 1)`.
pub fn tile<S: CanvasSurface>(
    state: &mut DesignerState<S>,
    dialog: &mut dyn TileDialog,
) -> Result<TileOutcome> {
    let group = state.require_active_group()?;

    let Some(params) = dialog.show() else {
        debug!(%group, "tile cancelled");
        return Ok(TileOutcome::Cancelled);
    };

    let positions = TileGenerator::generate(&params);
    let mut created = Vec::with_capacity(positions.len());
    for position in positions {
        created.push(state.spawn_component(group, position)?);
    }

    // Creation appends, so the last created id is also the group's last member.
    match created.last() {
        Some(&last) => state.update_label(last),
        None => debug!(?params, "tile produced an empty grid"),
    }

    info!(
        %group,
        columns = params.columns(),
        rows = params.rows(),
        cells = params.total_copies(),
        created = created.len(),
        "tile placed"
    );
    Ok(TileOutcome::Placed { params, created })
}
