//! # TileKit Core
//!
//! Shared value types and the core error type used by every TileKit crate.
//! Geometry is integral: components live on a pixel grid, so positions and
//! sizes are `i32`.

pub mod error;
pub mod types;

pub use error::{CoreError, Result};
pub use types::{Color, ComponentId, GroupId, Point, Size};
