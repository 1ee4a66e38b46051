//! # Group Registry
//!
//! Named categories of components. Each group has a display color and an
//! ordered member sequence; sequence order is draw order, so appends go to
//! the end and removal keeps the relative order of the rest.
//!
//! Groups are addressed by [`GroupId`] handles issued here. Every lookup
//! checks that the handle exists and reports [`DesignerError::UnknownGroup`]
//! otherwise.

use crate::error::{DesignerError, Result};
use tilekit_core::{Color, ComponentId, CoreError, GroupId};

/// A named group of components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    id: GroupId,
    name: String,
    color: Color,
    members: Vec<ComponentId>,
}

impl Group {
    pub fn id(&self) -> GroupId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Member ids in insertion order.
    pub fn members(&self) -> &[ComponentId] {
        &self.members
    }
}

/// Registry of groups in creation order.
#[derive(Debug, Clone, Default)]
pub struct GroupRegistry {
    groups: Vec<Group>,
    next_id: u32,
}

impl GroupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new group.
    ///
    /// The name is trimmed; empty names and names already in use are
    /// rejected.
    pub fn create_group(&mut self, name: &str, color: Color) -> Result<GroupId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::invalid_group_name(name).into());
        }
        if self.find(name).is_some() {
            return Err(DesignerError::DuplicateGroup {
                name: name.to_string(),
            });
        }

        let id = GroupId::from_raw(self.next_id);
        self.next_id += 1;
        self.groups.push(Group {
            id,
            name: name.to_string(),
            color,
            members: Vec::new(),
        });
        tracing::debug!(%id, name, %color, "group registered");
        Ok(id)
    }

    /// Looks a group up by exact name.
    pub fn find(&self, name: &str) -> Option<GroupId> {
        self.groups.iter().find(|g| g.name == name).map(|g| g.id)
    }

    pub fn get(&self, id: GroupId) -> Result<&Group> {
        self.groups
            .iter()
            .find(|g| g.id == id)
            .ok_or(DesignerError::UnknownGroup { id })
    }

    fn get_mut(&mut self, id: GroupId) -> Result<&mut Group> {
        self.groups
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or(DesignerError::UnknownGroup { id })
    }

    pub fn contains(&self, id: GroupId) -> bool {
        self.groups.iter().any(|g| g.id == id)
    }

    pub fn color(&self, id: GroupId) -> Result<Color> {
        self.get(id).map(Group::color)
    }

    pub fn members(&self, id: GroupId) -> Result<&[ComponentId]> {
        self.get(id).map(Group::members)
    }

    /// Appends a component to the end of a group's sequence.
    pub fn append(&mut self, id: GroupId, component: ComponentId) -> Result<()> {
        self.get_mut(id)?.members.push(component);
        Ok(())
    }

    /// Removes a component from a group's sequence.
    ///
    /// Returns `Ok(false)` when the group exists but does not list the
    /// component.
    pub fn remove_member(&mut self, id: GroupId, component: ComponentId) -> Result<bool> {
        let group = self.get_mut(id)?;
        match group.members.iter().position(|&m| m == component) {
            Some(index) => {
                group.members.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Iterates groups in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of members across all groups.
    pub fn total_members(&self) -> usize {
        self.groups.iter().map(|g| g.members.len()).sum()
    }
}
