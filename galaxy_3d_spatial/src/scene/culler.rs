/// Camera culling strategies.
///
/// A CameraCuller determines which nodes of a Scene are visible from a
/// camera. Both strategies read the cached world state, so they must run
/// after the frame's update pass.

use crate::camera::{Camera, Frustum, FrustumTest, RenderView, VisibleNode};
use super::scene::Scene;
use super::spatial_node::{NodeKey, SpatialNode};

/// Strategy for determining visible nodes from a camera.
///
/// `&mut self` allows stateful implementations (e.g. caching)
/// to maintain state across frames.
pub trait CameraCuller: Send + Sync {
    /// Cull the scene against the camera and return visible nodes.
    fn cull(&mut self, scene: &Scene, camera: &Camera) -> RenderView;
}

fn visible(key: NodeKey, node: &SpatialNode) -> VisibleNode {
    VisibleNode { key, world_center: node.world_center() }
}

/// Brute-force culler: every node carrying geometry, no frustum test.
///
/// Baseline for comparison and for scenes small enough not to care.
pub struct BruteForceCuller;

impl BruteForceCuller {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BruteForceCuller {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraCuller for BruteForceCuller {
    fn cull(&mut self, scene: &Scene, camera: &Camera) -> RenderView {
        let nodes = scene
            .nodes()
            .filter(|(_, node)| node.local_bounds().is_active())
            .map(|(key, node)| visible(key, node))
            .collect();
        RenderView::new(camera.clone(), nodes)
    }
}

/// Hierarchical frustum culler over the scene graph.
///
/// Each subtree is classified by its world volume: `Outside` prunes it,
/// `Inside` takes it whole, `Partial` tests the node's own volume and
/// recurses. Nodes without local bounds are never reported.
pub struct FrustumCuller;

impl FrustumCuller {
    pub fn new() -> Self {
        Self
    }

    fn walk(scene: &Scene, frustum: &Frustum, key: NodeKey, out: &mut Vec<VisibleNode>) {
        let Some(node) = scene.node(key) else {
            return;
        };
        match frustum.classify_bounding_volume(node.world_bounds()) {
            FrustumTest::Outside => {}
            FrustumTest::Inside => {
                let mut subtree = Vec::new();
                scene.collect_subtree(key, &mut subtree);
                for k in subtree {
                    if let Some(n) = scene.node(k).filter(|n| n.local_bounds().is_active()) {
                        out.push(visible(k, n));
                    }
                }
            }
            FrustumTest::Partial => {
                let own = node.local_bounds().transform(node.world_matrix());
                if frustum.intersects_bounding_volume(&own) {
                    out.push(visible(key, node));
                }
                for &child in node.children() {
                    Self::walk(scene, frustum, child, out);
                }
            }
        }
    }
}

impl Default for FrustumCuller {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraCuller for FrustumCuller {
    fn cull(&mut self, scene: &Scene, camera: &Camera) -> RenderView {
        let mut nodes = Vec::new();
        for &root in scene.roots() {
            Self::walk(scene, camera.frustum(), root, &mut nodes);
        }
        RenderView::new(camera.clone(), nodes)
    }
}

#[cfg(test)]
#[path = "culler_tests.rs"]
mod tests;
