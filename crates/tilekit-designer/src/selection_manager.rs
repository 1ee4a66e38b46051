use std::collections::HashSet;
use tilekit_core::ComponentId;

/// Tracks which components are selected.
///
/// `SelectionManager` owns only ids; it does not know whether they are
/// alive. `DesignerState` keeps the two in sync and forwards highlight
/// changes to the canvas surface.
///
/// # Selection Model
///
/// - **Set**: any number of components may be selected; iteration order
///   carries no meaning
/// - The status line is not driven from here; `DesignerState::select`
///   updates it
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selected: HashSet<ComponentId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilekit_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert!(manager.is_empty());
    /// assert_eq!(manager.len(), 0);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: ComponentId) -> bool {
        self.selected.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ComponentId> + '_ {
        self.selected.iter().copied()
    }

    /// Adds `id` to the selection.
    ///
    /// Returns `true` if it was not selected before.
    pub fn insert(&mut self, id: ComponentId) -> bool {
        self.selected.insert(id)
    }

    /// Flips the membership of `id`.
    ///
    /// # Returns
    ///
    /// `true` if `id` is selected afterwards.
    pub fn toggle(&mut self, id: ComponentId) -> bool {
        if self.remove(id) {
            false
        } else {
            self.insert(id);
            true
        }
    }

    /// Removes `id`; returns `true` if it was selected.
    pub fn remove(&mut self, id: ComponentId) -> bool {
        self.selected.remove(&id)
    }

    /// Empties the selection and returns the ids that were selected.
    pub fn clear(&mut self) -> Vec<ComponentId> {
        self.selected.drain().collect()
    }
}
