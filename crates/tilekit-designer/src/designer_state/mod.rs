//! Designer state shared by every action.
//!
//! The host application owns one `DesignerState`; actions borrow it mutably
//! for the duration of a single call.
//!
//! This module is split into submodules:
//! - `groups`: group creation and the active group
//! - `selection`: selecting and deselecting components
//! - `components`: creating and removing components, the status line

mod components;
mod groups;
mod selection;

use crate::canvas::{CanvasSurface, MemoryCanvas};
use crate::component::Component;
use crate::component_store::ComponentStore;
use crate::error::{DesignerError, Result};
use crate::group_registry::GroupRegistry;
use crate::selection_manager::SelectionManager;
use std::fmt;
use tilekit_core::{ComponentId, GroupId, Point, Size};

/// Placement defaults applied to new components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementDefaults {
    /// Size of every new component
    pub size: Size,
}

impl Default for PlacementDefaults {
    fn default() -> Self {
        Self {
            size: Size::new(60, 30),
        }
    }
}

/// Status line describing one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub group_name: String,
    pub component: ComponentId,
    pub position: Point,
    pub size: Size,
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} at {} size {}",
            self.group_name, self.component, self.position, self.size
        )
    }
}

/// Designer state for UI integration
pub struct DesignerState<S: CanvasSurface = MemoryCanvas> {
    store: ComponentStore,
    groups: GroupRegistry,
    selection: SelectionManager,
    surface: S,
    defaults: PlacementDefaults,
    active_group: Option<GroupId>,
    status: Option<StatusLine>,
}

impl DesignerState<MemoryCanvas> {
    /// Creates a designer state drawing into an in-memory canvas.
    pub fn new() -> Self {
        Self::with_surface(MemoryCanvas::new(), PlacementDefaults::default())
    }
}

impl Default for DesignerState<MemoryCanvas> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: CanvasSurface> DesignerState<S> {
    /// Creates a designer state drawing into `surface`.
    pub fn with_surface(surface: S, defaults: PlacementDefaults) -> Self {
        Self {
            store: ComponentStore::new(),
            groups: GroupRegistry::new(),
            selection: SelectionManager::new(),
            surface,
            defaults,
            active_group: None,
            status: None,
        }
    }

    pub fn defaults(&self) -> PlacementDefaults {
        self.defaults
    }

    pub fn groups(&self) -> &GroupRegistry {
        &self.groups
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.store.get(id)
    }

    /// Number of live components.
    pub fn component_count(&self) -> usize {
        self.store.len()
    }

    /// Current status line, if any component has been reported.
    pub fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    /// Verifies the cross-structure invariants.
    ///
    /// - every component's group exists and lists it exactly once
    /// - no group lists a dead component
    /// - every selected id is alive
    /// - every live component owns a canvas item
    pub fn check_consistency(&self) -> Result<()> {
        for component in self.store.iter() {
            let members = self
                .groups
                .members(component.group())
                .map_err(|e| inconsistent(format!("component {}: {e}", component.id())))?;
            let occurrences = members.iter().filter(|&&m| m == component.id()).count();
            if occurrences != 1 {
                return Err(inconsistent(format!(
                    "component {} listed {occurrences} times in {}",
                    component.id(),
                    component.group()
                )));
            }
            if component.item().is_none() {
                return Err(inconsistent(format!(
                    "component {} has no canvas item",
                    component.id()
                )));
            }
        }

        if self.groups.total_members() != self.store.len() {
            return Err(inconsistent(format!(
                "groups list {} members but {} components are alive",
                self.groups.total_members(),
                self.store.len()
            )));
        }

        if let Some(dead) = self.selection.iter().find(|&id| !self.store.contains(id)) {
            return Err(inconsistent(format!(
                "selection holds deleted component {dead}"
            )));
        }

        if self.surface.item_count() != self.store.len() {
            return Err(inconsistent(format!(
                "canvas holds {} items for {} components",
                self.surface.item_count(),
                self.store.len()
            )));
        }

        Ok(())
    }

    /// Returns the active group, or the missing-selection error.
    pub(crate) fn require_active_group(&self) -> Result<GroupId> {
        let group = self.active_group.ok_or(DesignerError::NoGroupSelected)?;
        if !self.groups.contains(group) {
            return Err(DesignerError::UnknownGroup { id: group });
        }
        Ok(group)
    }
}

fn inconsistent(reason: String) -> DesignerError {
    DesignerError::Inconsistent(reason)
}
