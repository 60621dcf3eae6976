/// Bounding volume value type.
///
/// A BoundingVolume is either `Empty` (no extent yet, e.g. a node without
/// geometry) or `Active` with an axis-aligned box in some local frame.
/// It carries no ownership and no tree awareness; nodes embed it and
/// callers pass it around by copy.

use glam::{Mat4, Vec3};
use super::aabb::AABB;
use super::separating_axis::{oriented_boxes_collide, SeparatingAxes};

/// Empty-or-active axis-aligned bounding volume.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BoundingVolume {
    /// No extent. Merging it contributes nothing, colliding with it never hits.
    #[default]
    Empty,
    /// A box holding at least one point.
    Active(AABB),
}

impl BoundingVolume {
    // ===== CONSTRUCTION =====

    pub fn empty() -> Self {
        BoundingVolume::Empty
    }

    /// Degenerate volume holding exactly `p`.
    pub fn from_point(p: Vec3) -> Self {
        BoundingVolume::Active(AABB::from_point(p))
    }

    /// Volume spanning two points.
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        BoundingVolume::Active(AABB::from_points(a, b))
    }

    /// Affine image of another volume (see [`BoundingVolume::transform`]).
    pub fn from_transformed(other: &BoundingVolume, transform: &Mat4) -> Self {
        other.transform(transform)
    }

    // ===== STATE =====

    /// Reset to a degenerate volume holding exactly `p`.
    pub fn to_point(&mut self, p: Vec3) {
        *self = BoundingVolume::from_point(p);
    }

    /// Reset to the volume spanning two points.
    pub fn to_points(&mut self, a: Vec3, b: Vec3) {
        *self = BoundingVolume::from_points(a, b);
    }

    /// Drop any extent.
    pub fn deactivate(&mut self) {
        *self = BoundingVolume::Empty;
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, BoundingVolume::Empty)
    }

    pub fn is_active(&self) -> bool {
        !self.is_empty()
    }

    /// The underlying box, if any.
    pub fn aabb(&self) -> Option<&AABB> {
        match self {
            BoundingVolume::Empty => None,
            BoundingVolume::Active(aabb) => Some(aabb),
        }
    }

    pub fn min(&self) -> Option<Vec3> {
        self.aabb().map(|aabb| aabb.min)
    }

    pub fn max(&self) -> Option<Vec3> {
        self.aabb().map(|aabb| aabb.max)
    }

    pub fn center(&self) -> Option<Vec3> {
        self.aabb().map(AABB::center)
    }

    // ===== GROWTH =====

    /// Expand to include `p`. On an empty volume this starts the extent at `p`.
    pub fn add_point(&mut self, p: Vec3) {
        match self {
            BoundingVolume::Empty => self.to_point(p),
            BoundingVolume::Active(aabb) => aabb.add_point(p),
        }
    }

    /// Expand to the union with `other`. Merging an empty volume is a no-op.
    pub fn merge(&mut self, other: &BoundingVolume) {
        let Some(other_aabb) = other.aabb() else {
            return;
        };
        match self {
            BoundingVolume::Empty => *self = BoundingVolume::Active(*other_aabb),
            BoundingVolume::Active(aabb) => aabb.merge(other_aabb),
        }
    }

    /// Map `other`'s 8 corners through `transform` and fold each in.
    ///
    /// This is how a child's local volume joins its parent's frame.
    pub fn merge_transformed(&mut self, other: &BoundingVolume, transform: &Mat4) {
        let Some(other_aabb) = other.aabb() else {
            return;
        };
        match self {
            BoundingVolume::Empty => *self = BoundingVolume::Active(other_aabb.transformed(transform)),
            BoundingVolume::Active(aabb) => aabb.merge_transformed(other_aabb, transform),
        }
    }

    /// Tightest axis-aligned volume, in the destination frame, enclosing the
    /// image of all 8 corners. An empty volume stays empty.
    pub fn transform(&self, matrix: &Mat4) -> BoundingVolume {
        match self {
            BoundingVolume::Empty => BoundingVolume::Empty,
            BoundingVolume::Active(aabb) => BoundingVolume::Active(aabb.transformed(matrix)),
        }
    }

    /// Grow symmetrically by `margin` on every axis.
    pub fn expand(&mut self, margin: f32) {
        self.expand_by_vec(Vec3::splat(margin));
    }

    /// Grow symmetrically by a per-axis margin.
    pub fn expand_by_vec(&mut self, margin: Vec3) {
        if let BoundingVolume::Active(aabb) = self {
            aabb.expand(margin);
        }
    }

    // ===== QUERIES =====

    /// Maximum dot product of `direction` with any corner.
    ///
    /// The empty set has no support: `f32::NEG_INFINITY`.
    pub fn support_value(&self, direction: Vec3) -> f32 {
        match self {
            BoundingVolume::Empty => f32::NEG_INFINITY,
            BoundingVolume::Active(aabb) => aabb.support_value(direction),
        }
    }

    /// Inclusive point containment; always false when empty.
    pub fn contains_point(&self, p: Vec3) -> bool {
        self.aabb().is_some_and(|aabb| aabb.contains_point(p))
    }

    /// Axis-aligned overlap test in a shared frame. Touching counts.
    pub fn collision(&self, other: &BoundingVolume) -> bool {
        match (self.aabb(), other.aabb()) {
            (Some(a), Some(b)) => a.intersects(b),
            _ => false,
        }
    }

    /// Oriented test: `self` placed by `transform`, `other` by `other_transform`.
    ///
    /// Uses the 6 face axes and the reduced set of 6 edge axes.
    pub fn collision_oriented(
        &self,
        transform: &Mat4,
        other: &BoundingVolume,
        other_transform: &Mat4,
    ) -> bool {
        self.collision_oriented_with(SeparatingAxes::Reduced, transform, other, other_transform)
    }

    /// Oriented test with an explicit choice of edge axes.
    pub fn collision_oriented_with(
        &self,
        axes: SeparatingAxes,
        transform: &Mat4,
        other: &BoundingVolume,
        other_transform: &Mat4,
    ) -> bool {
        match (self.aabb(), other.aabb()) {
            (Some(a), Some(b)) => oriented_boxes_collide(a, transform, b, other_transform, axes),
            _ => false,
        }
    }
}

impl From<AABB> for BoundingVolume {
    fn from(aabb: AABB) -> Self {
        BoundingVolume::Active(aabb)
    }
}

#[cfg(test)]
#[path = "bounding_volume_tests.rs"]
mod tests;
