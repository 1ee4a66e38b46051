//! Components: positioned, sized, colored rectangles owned by one group.

use crate::canvas::ItemHandle;
use tilekit_core::{Color, ComponentId, GroupId, Point, Size};

/// A rectangle placed on the canvas.
///
/// The group is fixed at construction. `item` holds the canvas resource
/// allocated for the component while it is on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    id: ComponentId,
    group: GroupId,
    pub position: Point,
    pub size: Size,
    pub color: Color,
    pub(crate) item: Option<ItemHandle>,
}

impl Component {
    /// Creates a component that is not yet drawn.
    pub fn new(id: ComponentId, group: GroupId, position: Point, size: Size, color: Color) -> Self {
        Self {
            id,
            group,
            position,
            size,
            color,
            item: None,
        }
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn group(&self) -> GroupId {
        self.group
    }

    /// Canvas resource backing this component, if drawn.
    pub fn item(&self) -> Option<ItemHandle> {
        self.item
    }
}
