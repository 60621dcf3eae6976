/// Scene: arena owning every SpatialNode of one scene graph.
///
/// Nodes live in a SlotMap: keys are stable and generation-checked, so a
/// child's parent link can never dangle. Destroying a node removes its
/// whole subtree and every key into it resolves to `None` afterwards.
///
/// Once per frame the owner calls `update()`. The pass walks each root
/// depth-first: matrices are rebuilt top-down where a node or one of its
/// ancestors is dirty, then world bounds are merged bottom-up.

use slotmap::SlotMap;
use glam::{Mat3, Mat4};
use crate::bounds::BoundingVolume;
use crate::error::Result;
use crate::engine_err;
use super::scene_config::SceneConfig;
use super::spatial_node::{NodeFlags, NodeKey, SpatialNode, MIN_AXIS_LENGTH};

const SOURCE: &str = "galaxy3d::Scene";

/// A scene graph of SpatialNodes.
pub struct Scene {
    config: SceneConfig,
    /// Every node of every tree in the scene
    nodes: SlotMap<NodeKey, SpatialNode>,
    /// Top-level nodes in insertion order
    roots: Vec<NodeKey>,
}

impl Scene {
    /// Create an empty scene
    pub fn new(config: SceneConfig) -> Self {
        Self {
            config,
            nodes: SlotMap::with_key(),
            roots: Vec::new(),
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SceneConfig) {
        self.config = config;
    }

    // ===== ACCESS =====

    pub fn node(&self, key: NodeKey) -> Option<&SpatialNode> {
        self.nodes.get(key)
    }

    /// Mutable access for the local transform and bounds setters.
    pub fn node_mut(&mut self, key: NodeKey) -> Option<&mut SpatialNode> {
        self.nodes.get_mut(key)
    }

    pub fn contains(&self, key: NodeKey) -> bool {
        self.nodes.contains_key(key)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn roots(&self) -> &[NodeKey] {
        &self.roots
    }

    /// Iterate over all nodes (key, node), in arena order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeKey, &SpatialNode)> {
        self.nodes.iter()
    }

    // ===== STRUCTURE =====

    /// Create a new root node.
    pub fn create_node(&mut self, name: &str) -> NodeKey {
        let key = self.nodes.insert(SpatialNode::new(name));
        self.roots.push(key);
        crate::engine_debug!(SOURCE, "Created root node '{}'", name);
        key
    }

    /// Create a new node as the last child of `parent`.
    pub fn create_child(&mut self, parent: NodeKey, name: &str) -> Result<NodeKey> {
        self.require(parent, "create_child")?;

        let mut node = SpatialNode::new(name);
        node.parent = Some(parent);
        let key = self.nodes.insert(node);

        let parent_node = &mut self.nodes[parent];
        parent_node.children.push(key);
        parent_node.mark(NodeFlags::BOUNDS_CHANGED);

        crate::engine_debug!(SOURCE, "Created node '{}' under '{}'", name, self.nodes[parent].name());
        Ok(key)
    }

    /// Attach `child` (with its subtree) as the last child of `parent`.
    ///
    /// The local transform is kept, so the world transform generally changes.
    pub fn add_child(&mut self, parent: NodeKey, child: NodeKey) -> Result<()> {
        self.set_parent(child, Some(parent))
    }

    /// Detach `child` from `parent`; it becomes a root and keeps its local transform.
    pub fn remove_child(&mut self, parent: NodeKey, child: NodeKey) -> Result<()> {
        self.require(parent, "remove_child")?;
        self.require(child, "remove_child")?;
        if self.nodes[child].parent != Some(parent) {
            return Err(engine_err!(SOURCE, InvalidHierarchy,
                "'{}' is not a child of '{}'", self.nodes[child].name(), self.nodes[parent].name()));
        }
        self.set_parent(child, None)
    }

    /// Move `child` under `new_parent` (or to the root level with `None`).
    ///
    /// Fails without modifying anything if `new_parent` is `child` itself or
    /// one of its descendants.
    pub fn set_parent(&mut self, child: NodeKey, new_parent: Option<NodeKey>) -> Result<()> {
        self.check_reparent(child, new_parent)?;
        self.relink(child, new_parent);
        Ok(())
    }

    /// Like `set_parent`, but rewrites the local transform so the world
    /// transform of `child` stays the same (up to floating-point error).
    ///
    /// World matrices are composed from the current local fields, so pending
    /// mutations are honored without an update pass. A shear in the
    /// resulting local matrix cannot be represented by position, orientation
    /// and scale and is dropped.
    ///
    /// # Errors
    ///
    /// - `InvalidNode` if a key is stale
    /// - `InvalidHierarchy` if the move would create a cycle
    /// - `DegenerateTransform` if the new parent's world matrix is singular
    ///   (an axis collapsed, or the axes are nearly coplanar)
    pub fn set_parent_preserve_world(
        &mut self,
        child: NodeKey,
        new_parent: Option<NodeKey>,
    ) -> Result<()> {
        self.check_reparent(child, new_parent)?;

        let world = self.compose_world_matrix(child);
        let parent_world = match new_parent {
            Some(parent) => self.compose_world_matrix(parent),
            None => Mat4::IDENTITY,
        };
        if !is_invertible(&parent_world) {
            return Err(engine_err!(SOURCE, DegenerateTransform,
                "Cannot preserve world transform of '{}': new parent matrix is singular",
                self.nodes[child].name()));
        }

        let local = parent_world.inverse() * world;
        let (scale, orientation, position) = local.to_scale_rotation_translation();
        self.nodes[child].set_local_transform(scale, orientation, position);
        self.relink(child, new_parent);
        Ok(())
    }

    /// Destroy a node and its whole subtree. Returns false if the key is stale.
    pub fn destroy_node(&mut self, key: NodeKey) -> bool {
        if !self.nodes.contains_key(key) {
            crate::engine_warn!(SOURCE, "destroy_node: node {:?} does not exist", key);
            return false;
        }
        self.unlink(key);

        let mut subtree = Vec::new();
        self.collect_subtree(key, &mut subtree);
        for &node in &subtree {
            self.nodes.remove(node);
        }
        crate::engine_debug!(SOURCE, "Destroyed {} node(s)", subtree.len());
        true
    }

    /// Remove every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.roots.clear();
    }

    // ===== UPDATE PASS =====

    /// Update every root. Returns true if any cached state changed.
    ///
    /// Called every frame; never logs.
    pub fn update(&mut self) -> bool {
        let mut changed = false;
        for i in 0..self.roots.len() {
            let root = self.roots[i];
            changed |= self.update_node(root, &Mat4::IDENTITY, false);
        }
        changed
    }

    /// Update one root and its subtree. Returns true if any cached state changed.
    ///
    /// # Errors
    ///
    /// `InvalidNode` for a stale key, `InvalidHierarchy` if `root` has a parent.
    pub fn update_transform(&mut self, root: NodeKey) -> Result<bool> {
        self.require(root, "update_transform")?;
        if self.nodes[root].parent.is_some() {
            return Err(engine_err!(SOURCE, InvalidHierarchy,
                "update_transform: '{}' is not a root", self.nodes[root].name()));
        }
        Ok(self.update_node(root, &Mat4::IDENTITY, false))
    }

    fn update_node(&mut self, key: NodeKey, parent_world: &Mat4, ancestor_changed: bool) -> bool {
        let node = &mut self.nodes[key];
        let recompute = ancestor_changed || node.transform_changed();
        if recompute {
            node.recompute_matrices(parent_world);
        }
        let world = *node.world_matrix();
        let mut bounds_dirty = recompute || node.flags().contains(NodeFlags::BOUNDS_CHANGED);

        for i in 0..self.nodes[key].children.len() {
            let child = self.nodes[key].children[i];
            bounds_dirty |= self.update_node(child, &world, recompute);
        }

        if bounds_dirty {
            self.nodes[key].begin_world_bounds();
            for i in 0..self.nodes[key].children.len() {
                let child = self.nodes[key].children[i];
                let child_bounds = *self.nodes[child].world_bounds();
                self.nodes[key].merge_world_bounds(&child_bounds);
            }
            self.nodes[key].finish_world_bounds();
        }
        bounds_dirty
    }

    // ===== QUERIES =====

    /// First root named `name`.
    pub fn find_node(&self, name: &str) -> Option<NodeKey> {
        self.roots.iter().copied().find(|&key| self.nodes[key].name() == name)
    }

    /// First node named `name`, depth-first pre-order over every tree.
    pub fn find_node_recursive(&self, name: &str) -> Option<NodeKey> {
        self.roots.iter().find_map(|&root| {
            if self.nodes[root].name() == name {
                Some(root)
            } else {
                self.find_in_subtree(root, name)
            }
        })
    }

    /// First descendant of `key` named `name` (the node itself excluded).
    pub fn find_in_subtree(&self, key: NodeKey, name: &str) -> Option<NodeKey> {
        let node = self.nodes.get(key)?;
        for &child in &node.children {
            if self.nodes[child].name() == name {
                return Some(child);
            }
            if let Some(found) = self.find_in_subtree(child, name) {
                return Some(found);
            }
        }
        None
    }

    /// Top-level ancestor of `key` (the node itself for a root).
    pub fn root_of(&self, key: NodeKey) -> Option<NodeKey> {
        let mut current = key;
        let mut node = self.nodes.get(key)?;
        while let Some(parent) = node.parent {
            current = parent;
            node = &self.nodes[parent];
        }
        Some(current)
    }

    /// True if `ancestor` is a strict ancestor of `key`.
    pub fn is_ancestor(&self, ancestor: NodeKey, key: NodeKey) -> bool {
        let mut parent = self.nodes.get(key).and_then(|node| node.parent);
        while let Some(current) = parent {
            if current == ancestor {
                return true;
            }
            parent = self.nodes[current].parent;
        }
        false
    }

    /// True if the node or any of its ancestors has a pending transform change.
    pub fn transform_has_changed(&self, key: NodeKey) -> bool {
        let mut current = Some(key);
        while let Some(k) = current {
            let Some(node) = self.nodes.get(k) else {
                return false;
            };
            if node.transform_changed() {
                return true;
            }
            current = node.parent;
        }
        false
    }

    /// Union of every root's world volume, grown by the configured margin.
    pub fn bounding_box(&self) -> BoundingVolume {
        let mut bounds = BoundingVolume::Empty;
        for &root in &self.roots {
            bounds.merge(self.nodes[root].world_bounds());
        }
        bounds.expand(self.config.bounds_margin);
        bounds
    }

    /// Oriented test between the local volumes of two nodes, each placed by
    /// its cached world matrix.
    pub fn nodes_collide(&self, a: NodeKey, b: NodeKey) -> Result<bool> {
        self.require(a, "nodes_collide")?;
        self.require(b, "nodes_collide")?;
        let (node_a, node_b) = (&self.nodes[a], &self.nodes[b]);
        Ok(node_a.local_bounds().collision_oriented_with(
            self.config.separating_axes,
            node_a.world_matrix(),
            node_b.local_bounds(),
            node_b.world_matrix(),
        ))
    }

    /// Axis-aligned test between the world (subtree) volumes of two nodes.
    pub fn nodes_overlap(&self, a: NodeKey, b: NodeKey) -> Result<bool> {
        self.require(a, "nodes_overlap")?;
        self.require(b, "nodes_overlap")?;
        Ok(self.nodes[a].world_bounds().collision(self.nodes[b].world_bounds()))
    }

    /// Push `key` and all of its descendants, pre-order.
    pub(crate) fn collect_subtree(&self, key: NodeKey, out: &mut Vec<NodeKey>) {
        let mut stack = vec![key];
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.nodes[current].children.iter().rev());
        }
    }

    // ===== INTERNALS =====

    fn require(&self, key: NodeKey, operation: &str) -> Result<()> {
        if self.nodes.contains_key(key) {
            Ok(())
        } else {
            Err(engine_err!(SOURCE, InvalidNode, "{}: node {:?} does not exist", operation, key))
        }
    }

    fn check_reparent(&self, child: NodeKey, new_parent: Option<NodeKey>) -> Result<()> {
        self.require(child, "set_parent")?;
        let Some(parent) = new_parent else {
            return Ok(());
        };
        self.require(parent, "set_parent")?;
        if parent == child || self.is_ancestor(child, parent) {
            return Err(engine_err!(SOURCE, InvalidHierarchy,
                "Cannot move '{}' under '{}': would create a cycle",
                self.nodes[child].name(), self.nodes[parent].name()));
        }
        Ok(())
    }

    /// World matrix composed from local fields up the parent chain.
    fn compose_world_matrix(&self, key: NodeKey) -> Mat4 {
        let mut node = &self.nodes[key];
        let mut world = node.compose_local_matrix();
        while let Some(parent) = node.parent {
            node = &self.nodes[parent];
            world = node.compose_local_matrix() * world;
        }
        world
    }

    /// Detach from the current parent (or the root list).
    fn unlink(&mut self, key: NodeKey) {
        match self.nodes[key].parent.take() {
            Some(parent) => {
                let parent_node = &mut self.nodes[parent];
                parent_node.children.retain(|&c| c != key);
                parent_node.mark(NodeFlags::BOUNDS_CHANGED);
            }
            None => self.roots.retain(|&r| r != key),
        }
    }

    fn relink(&mut self, child: NodeKey, new_parent: Option<NodeKey>) {
        if self.nodes[child].parent == new_parent {
            return;
        }
        self.unlink(child);
        match new_parent {
            Some(parent) => {
                let parent_node = &mut self.nodes[parent];
                parent_node.children.push(child);
                parent_node.mark(NodeFlags::BOUNDS_CHANGED);
            }
            None => self.roots.push(child),
        }
        let node = &mut self.nodes[child];
        node.parent = new_parent;
        node.mark(NodeFlags::TRANSFORM_CHANGED);

        crate::engine_debug!(SOURCE, "Re-parented '{}' under {}", self.nodes[child].name(),
            new_parent.map_or("<root>".to_string(), |p| format!("'{}'", self.nodes[p].name())));
    }
}

/// Scale-independent invertibility test for an affine matrix.
///
/// The determinant is compared to the product of the column lengths, so a
/// uniformly tiny (but well-formed) frame still counts as invertible.
fn is_invertible(matrix: &Mat4) -> bool {
    let linear = Mat3::from_mat4(*matrix);
    let lengths = [linear.x_axis.length(), linear.y_axis.length(), linear.z_axis.length()];
    if lengths.iter().any(|&length| length < MIN_AXIS_LENGTH) {
        return false;
    }
    let volume = lengths[0] * lengths[1] * lengths[2];
    linear.determinant().abs() > f32::EPSILON * volume
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
