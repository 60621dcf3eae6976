/// SpatialNode: one entry of the scene graph transform cache.
///
/// A node owns its local transform (position, orientation, scale) and a
/// local bounding volume. The owning Scene derives and caches the local
/// matrix, the world matrix, the world bounding volume (whole subtree) and
/// the world-space center during its update pass.
///
/// Setters only record the new value and raise a dirty flag; nothing is
/// recomputed until the next `Scene::update()`.

use glam::{Mat3, Mat4, Quat, Vec3};
use crate::bounds::BoundingVolume;

slotmap::new_key_type! {
    /// Stable, generation-checked handle to a node inside a Scene.
    ///
    /// A key outlives the node it names: once the node is destroyed every
    /// lookup with the key returns `None`.
    pub struct NodeKey;
}

bitflags::bitflags! {
    /// Pending work for the next update pass.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Local transform was modified (or the node was moved in the tree)
        const TRANSFORM_CHANGED = 0b0000_0001;
        /// Local bounds or the child list were modified
        const BOUNDS_CHANGED    = 0b0000_0010;
    }
}

/// Column lengths below this make a world matrix non-decomposable.
pub(super) const MIN_AXIS_LENGTH: f32 = 1e-6;

/// A node of the scene graph.
#[derive(Debug, Clone)]
pub struct SpatialNode {
    name: String,

    // Local transform (owned, set by the application)
    position: Vec3,
    orientation: Quat,
    scale: Vec3,
    local_bounds: BoundingVolume,

    // Derived state (owned by the update pass)
    local_matrix: Mat4,
    world_matrix: Mat4,
    world_bounds: BoundingVolume,
    world_center: Vec3,
    flags: NodeFlags,

    // Hierarchy (maintained by Scene)
    pub(super) parent: Option<NodeKey>,
    pub(super) children: Vec<NodeKey>,
}

impl SpatialNode {
    /// Identity transform, empty bounds, dirty so the first pass computes it.
    pub(super) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            scale: Vec3::ONE,
            local_bounds: BoundingVolume::Empty,
            local_matrix: Mat4::IDENTITY,
            world_matrix: Mat4::IDENTITY,
            world_bounds: BoundingVolume::Empty,
            world_center: Vec3::ZERO,
            flags: NodeFlags::TRANSFORM_CHANGED | NodeFlags::BOUNDS_CHANGED,
            parent: None,
            children: Vec::new(),
        }
    }

    // ===== IDENTITY =====

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    // ===== LOCAL TRANSFORM =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.flags.insert(NodeFlags::TRANSFORM_CHANGED);
    }

    pub fn set_orientation(&mut self, orientation: Quat) {
        self.orientation = orientation;
        self.flags.insert(NodeFlags::TRANSFORM_CHANGED);
    }

    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
        self.flags.insert(NodeFlags::TRANSFORM_CHANGED);
    }

    pub fn set_scale_uniform(&mut self, scale: f32) {
        self.set_scale(Vec3::splat(scale));
    }

    /// Local-space bounds of the attached geometry.
    pub fn local_bounds(&self) -> &BoundingVolume {
        &self.local_bounds
    }

    /// Attach new geometry bounds. The subtree volume is rebuilt on the next pass.
    pub fn set_local_bounds(&mut self, bounds: BoundingVolume) {
        self.local_bounds = bounds;
        self.flags.insert(NodeFlags::BOUNDS_CHANGED);
    }

    // ===== DIRTY STATE =====

    pub fn flags(&self) -> NodeFlags {
        self.flags
    }

    /// True if this node's own local transform is waiting for an update pass.
    ///
    /// Ancestors are not consulted; see `Scene::transform_has_changed()`.
    pub fn transform_changed(&self) -> bool {
        self.flags.contains(NodeFlags::TRANSFORM_CHANGED)
    }

    // ===== CACHED STATE (valid after an update pass) =====

    /// `T * R * S` from the last pass.
    pub fn local_matrix(&self) -> &Mat4 {
        &self.local_matrix
    }

    pub fn world_matrix(&self) -> &Mat4 {
        &self.world_matrix
    }

    /// World-space volume of this node and all of its descendants.
    pub fn world_bounds(&self) -> &BoundingVolume {
        &self.world_bounds
    }

    /// Local bounds center through the world matrix, or the world origin of
    /// the node when it has no bounds.
    pub fn world_center(&self) -> Vec3 {
        self.world_center
    }

    pub fn world_position(&self) -> Vec3 {
        self.world_matrix.w_axis.truncate()
    }

    /// Map a local-space point to world space with the cached world matrix.
    pub fn local_to_world(&self, point: Vec3) -> Vec3 {
        self.world_matrix.transform_point3(point)
    }

    /// World scale and orientation decomposed from the cached world matrix.
    ///
    /// Returns `None` when an axis collapses (length below 1e-6). Shear is
    /// not represented: the rotation is taken from the normalized columns.
    pub fn world_scale_orientation(&self) -> Option<(Vec3, Quat)> {
        let linear = Mat3::from_mat4(self.world_matrix);
        let mut scale = Vec3::new(
            linear.x_axis.length(),
            linear.y_axis.length(),
            linear.z_axis.length(),
        );
        if scale.min_element() < MIN_AXIS_LENGTH {
            return None;
        }
        // Mirrored frame: fold the reflection into the x scale
        if linear.determinant() < 0.0 {
            scale.x = -scale.x;
        }
        let rotation = Mat3::from_cols(
            linear.x_axis / scale.x,
            linear.y_axis / scale.y,
            linear.z_axis / scale.z,
        );
        Some((scale, Quat::from_mat3(&rotation).normalize()))
    }

    // ===== HIERARCHY =====

    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Key of the child at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn child(&self, index: usize) -> NodeKey {
        debug_assert!(
            index < self.children.len(),
            "child index {} out of range ({} children)", index, self.children.len()
        );
        self.children[index]
    }

    // ===== UPDATE PASS =====

    /// Local matrix from the current fields, without touching the cache.
    pub(super) fn compose_local_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.orientation, self.position)
    }

    /// Overwrite the local transform fields from a decomposed matrix.
    pub(super) fn set_local_transform(&mut self, scale: Vec3, orientation: Quat, position: Vec3) {
        self.scale = scale;
        self.orientation = orientation;
        self.position = position;
        self.flags.insert(NodeFlags::TRANSFORM_CHANGED);
    }

    pub(super) fn mark(&mut self, flags: NodeFlags) {
        self.flags.insert(flags);
    }

    /// Rebuild local and world matrices under `parent_world` and clear the
    /// transform flag.
    pub(super) fn recompute_matrices(&mut self, parent_world: &Mat4) {
        self.local_matrix = self.compose_local_matrix();
        self.world_matrix = *parent_world * self.local_matrix;
        self.flags.remove(NodeFlags::TRANSFORM_CHANGED);
    }

    /// Start the subtree volume from the node's own bounds and refresh the
    /// world center. Children are merged in by the caller.
    pub(super) fn begin_world_bounds(&mut self) {
        self.world_bounds = self.local_bounds.transform(&self.world_matrix);
        self.world_center = match self.local_bounds.center() {
            Some(center) => self.world_matrix.transform_point3(center),
            None => self.world_position(),
        };
    }

    pub(super) fn merge_world_bounds(&mut self, child_bounds: &BoundingVolume) {
        self.world_bounds.merge(child_bounds);
    }

    pub(super) fn finish_world_bounds(&mut self) {
        self.flags.remove(NodeFlags::BOUNDS_CHANGED);
    }
}

#[cfg(test)]
#[path = "spatial_node_tests.rs"]
mod tests;
