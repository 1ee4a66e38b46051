//! Component creation and removal for designer state.

use super::{DesignerState, StatusLine};
use crate::canvas::CanvasSurface;
use crate::component::Component;
use crate::error::{DesignerError, Result};
use tilekit_core::{ComponentId, GroupId, Point};

impl<S: CanvasSurface> DesignerState<S> {
    /// Creates a component with the default size in `group`'s color,
    /// draws it and appends it to the end of the group's sequence.
    pub fn spawn_component(&mut self, group: GroupId, position: Point) -> Result<ComponentId> {
        let color = self.groups.color(group)?;
        let id = self.store.generate_id();
        let mut component = Component::new(id, group, position, self.defaults.size, color);
        component.item = Some(self.surface.create_item(&component));

        self.groups.append(group, id)?;
        self.store.insert(component);
        tracing::trace!(%id, %group, %position, "component spawned");
        Ok(id)
    }

    /// Removes a component from its group, the selection and the canvas.
    ///
    /// # Panics
    ///
    /// Panics if the component is alive but its group does not list it.
    /// That can only happen through a bug in this crate.
    pub fn remove_component(&mut self, id: ComponentId) -> Result<Component> {
        let component = self
            .store
            .remove(id)
            .ok_or(DesignerError::ComponentNotFound { id })?;

        let listed = self.groups.remove_member(component.group(), id)?;
        if !listed {
            tracing::error!(%id, group = %component.group(), "component missing from its group");
            panic!(
                "component {id} is not listed in {}; group registry out of sync",
                component.group()
            );
        }

        if let Some(item) = component.item() {
            self.surface.delete_item(item);
        }
        self.selection.remove(id);
        if self.status.as_ref().is_some_and(|s| s.component == id) {
            self.status = None;
        }
        Ok(component)
    }

    /// Points the status line at `id`. Unknown ids leave it unchanged.
    pub fn update_label(&mut self, id: ComponentId) {
        let Some(component) = self.store.get(id) else {
            return;
        };
        let Ok(group) = self.groups.get(component.group()) else {
            return;
        };
        self.status = Some(StatusLine {
            group_name: group.name().to_string(),
            component: id,
            position: component.position,
            size: component.size,
        });
    }
}
