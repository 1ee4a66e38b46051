//! Canvas surface seam.
//!
//! The designer never draws. It asks a [`CanvasSurface`] to allocate an item
//! per component, to highlight items on selection and to release them on
//! delete. A GUI front end implements the trait over its widget toolkit;
//! [`MemoryCanvas`] keeps items in memory for headless hosts and tests.

use crate::component::Component;
use std::collections::BTreeMap;
use std::fmt;
use tilekit_core::{Color, ComponentId, Point, Size};

/// Handle to a drawn item owned by a canvas surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemHandle(u64);

impl ItemHandle {
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{}", self.0)
    }
}

/// Rendering backend for components.
pub trait CanvasSurface {
    /// Draws `component` and returns the handle of the new item.
    fn create_item(&mut self, component: &Component) -> ItemHandle;

    /// Releases an item. Unknown handles are ignored.
    fn delete_item(&mut self, item: ItemHandle);

    /// Shows or hides the selection highlight of an item.
    fn set_highlight(&mut self, item: ItemHandle, highlighted: bool);

    /// Number of live items.
    fn item_count(&self) -> usize;
}

/// A drawn rectangle as recorded by [`MemoryCanvas`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasItem {
    pub component: ComponentId,
    pub position: Point,
    pub size: Size,
    pub fill: Color,
    pub highlighted: bool,
}

/// In-memory canvas surface.
#[derive(Debug, Clone, Default)]
pub struct MemoryCanvas {
    items: BTreeMap<ItemHandle, CanvasItem>,
    next_handle: u64,
}

impl MemoryCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item(&self, handle: ItemHandle) -> Option<&CanvasItem> {
        self.items.get(&handle)
    }

    /// Items in creation order.
    pub fn items(&self) -> impl Iterator<Item = (ItemHandle, &CanvasItem)> {
        self.items.iter().map(|(h, item)| (*h, item))
    }

    /// Number of highlighted items.
    pub fn highlighted_count(&self) -> usize {
        self.items.values().filter(|i| i.highlighted).count()
    }
}

impl CanvasSurface for MemoryCanvas {
    fn create_item(&mut self, component: &Component) -> ItemHandle {
        let handle = ItemHandle(self.next_handle);
        self.next_handle += 1;
        self.items.insert(
            handle,
            CanvasItem {
                component: component.id(),
                position: component.position,
                size: component.size,
                fill: component.color,
                highlighted: false,
            },
        );
        handle
    }

    fn delete_item(&mut self, item: ItemHandle) {
        if self.items.remove(&item).is_none() {
            tracing::warn!(%item, "delete of unknown canvas item");
        }
    }

    fn set_highlight(&mut self, item: ItemHandle, highlighted: bool) {
        if let Some(entry) = self.items.get_mut(&item) {
            entry.highlighted = highlighted;
        }
    }

    fn item_count(&self) -> usize {
        self.items.len()
    }
}
