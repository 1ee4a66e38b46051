use crate::component::Component;
use std::collections::HashMap;
use tilekit_core::ComponentId;

/// Owns every live component and issues component ids.
///
/// Ids are monotonically increasing and never reused, so a stale id can
/// never alias a newer component.
#[derive(Debug, Clone)]
pub struct ComponentStore {
    components: HashMap<ComponentId, Component>,
    next_id: u64,
}

impl Default for ComponentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentStore {
    pub fn new() -> Self {
        Self {
            components: HashMap::new(),
            next_id: 1,
        }
    }

    /// Reserves the next component id.
    pub fn generate_id(&mut self) -> ComponentId {
        let id = ComponentId::from_raw(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn insert(&mut self, component: Component) {
        self.components.insert(component.id(), component);
    }

    pub fn get(&self, id: ComponentId) -> Option<&Component> {
        self.components.get(&id)
    }

    pub fn remove(&mut self, id: ComponentId) -> Option<Component> {
        self.components.remove(&id)
    }

    pub fn contains(&self, id: ComponentId) -> bool {
        self.components.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Iterates components in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Component> {
        self.components.values()
    }
}
