/// RenderView: result of camera culling.
///
/// Produced by a `CameraCuller`. Holds a snapshot of the camera at culling
/// time and the visible nodes with the world center each one had then, so
/// the view can be depth-sorted without going back to the scene.
///
/// Ephemeral: lives for one frame. No Arc, no Mutex.

use glam::Vec3;
use crate::scene::NodeKey;
use super::camera::Camera;

/// One visible node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleNode {
    pub key: NodeKey,
    /// World-space center at culling time (see `SpatialNode::world_center`)
    pub world_center: Vec3,
}

/// Result of culling. Ephemeral, lives for one frame.
#[derive(Debug, Clone)]
pub struct RenderView {
    camera: Camera,
    visible_nodes: Vec<VisibleNode>,
}

impl RenderView {
    /// Create a new RenderView (crate-internal: only cullers create these).
    pub(crate) fn new(camera: Camera, visible_nodes: Vec<VisibleNode>) -> Self {
        Self {
            camera,
            visible_nodes,
        }
    }

    /// Camera snapshot at the time of culling.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn visible_nodes(&self) -> &[VisibleNode] {
        &self.visible_nodes
    }

    /// Keys of the visible nodes, in the current order.
    pub fn visible_keys(&self) -> impl Iterator<Item = NodeKey> + '_ {
        self.visible_nodes.iter().map(|node| node.key)
    }

    pub fn visible_count(&self) -> usize {
        self.visible_nodes.len()
    }

    pub fn is_visible(&self, key: NodeKey) -> bool {
        self.visible_nodes.iter().any(|node| node.key == key)
    }

    /// Farthest first, for alpha blending.
    pub fn sort_back_to_front(&mut self, eye: Vec3) {
        self.visible_nodes.sort_by(|a, b| {
            b.world_center.distance_squared(eye).total_cmp(&a.world_center.distance_squared(eye))
        });
    }

    /// Nearest first, for early depth rejection.
    pub fn sort_front_to_back(&mut self, eye: Vec3) {
        self.visible_nodes.sort_by(|a, b| {
            a.world_center.distance_squared(eye).total_cmp(&b.world_center.distance_squared(eye))
        });
    }
}

#[cfg(test)]
#[path = "render_view_tests.rs"]
mod tests;
