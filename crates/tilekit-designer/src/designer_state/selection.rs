//! Selection operations for designer state.

use super::DesignerState;
use crate::canvas::CanvasSurface;
use crate::error::{DesignerError, Result};
use tilekit_core::ComponentId;

impl<S: CanvasSurface> DesignerState<S> {
    /// Selects a component by id.
    ///
    /// Without `multi` the selection is replaced by `id`; with `multi` the
    /// membership of `id` is toggled and the rest is kept.
    ///
    /// # Returns
    ///
    /// Whether `id` is selected afterwards.
    pub fn select(&mut self, id: ComponentId, multi: bool) -> Result<bool> {
        if !self.store.contains(id) {
            return Err(DesignerError::ComponentNotFound { id });
        }

        let selected = if multi {
            self.selection.toggle(id)
        } else {
            self.deselect_all();
            self.selection.insert(id);
            true
        };
        self.highlight(id, selected);

        if selected {
            self.update_label(id);
        }
        Ok(selected)
    }

    /// Clears the selection and removes every highlight.
    pub fn deselect_all(&mut self) {
        for id in self.selection.clear() {
            self.highlight(id, false);
        }
    }

    /// Ids of the selected components in ascending order.
    pub fn selected_ids(&self) -> Vec<ComponentId> {
        let mut ids: Vec<_> = self.selection.iter().collect();
        ids.sort();
        ids
    }

    pub fn is_selected(&self, id: ComponentId) -> bool {
        self.selection.contains(id)
    }

    fn highlight(&mut self, id: ComponentId, on: bool) {
        if let Some(item) = self.store.get(id).and_then(|c| c.item()) {
            self.surface.set_highlight(item, on);
        }
    }
}
