/// Per-scene configuration.

use crate::bounds::SeparatingAxes;

/// Scene configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    /// Update order inside the SceneManager (ascending, ties by name)
    pub order: i32,
    /// Margin added on every axis to `Scene::bounding_box()`
    pub bounds_margin: f32,
    /// Edge axes used by `Scene::nodes_collide()`
    pub separating_axes: SeparatingAxes,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            order: 0,
            bounds_margin: 0.0,
            separating_axes: SeparatingAxes::Reduced,
        }
    }
}
