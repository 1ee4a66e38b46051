//! Group operations for designer state.

use super::DesignerState;
use crate::canvas::CanvasSurface;
use crate::error::{DesignerError, Result};
use tilekit_core::{Color, GroupId};

impl<S: CanvasSurface> DesignerState<S> {
    /// Registers a new group with its display color.
    pub fn create_group(&mut self, name: &str, color: Color) -> Result<GroupId> {
        let id = self.groups.create_group(name, color)?;
        tracing::info!(%id, name = name.trim(), %color, "group created");
        Ok(id)
    }

    /// The group new components are placed into.
    pub fn active_group(&self) -> Option<GroupId> {
        self.active_group
    }

    /// Sets or clears the active group.
    pub fn set_active_group(&mut self, group: Option<GroupId>) -> Result<()> {
        if let Some(id) = group {
            if !self.groups.contains(id) {
                return Err(DesignerError::UnknownGroup { id });
            }
        }
        self.active_group = group;
        Ok(())
    }

    /// Makes the group called `name` active.
    pub fn activate_group_by_name(&mut self, name: &str) -> Result<GroupId> {
        let name = name.trim();
        let id = self
            .groups
            .find(name)
            .ok_or_else(|| DesignerError::UnknownGroupName {
                name: name.to_string(),
            })?;
        self.active_group = Some(id);
        Ok(id)
    }
}
