//! Bounding volumes and box intersection tests.
//!
//! Plain value types: nodes embed them, the scene merges them bottom-up,
//! cullers and collision queries read them.

mod aabb;
mod bounding_volume;
mod separating_axis;

pub use aabb::AABB;
pub use bounding_volume::BoundingVolume;
pub use separating_axis::{oriented_boxes_collide, SeparatingAxes};
