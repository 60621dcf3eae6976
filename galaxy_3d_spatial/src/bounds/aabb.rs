/// Axis-aligned box with a known extent.
///
/// An AABB always holds at least one point (`min <= max` componentwise).
/// The "no extent yet" state lives one level up, in `BoundingVolume`.

use glam::{Mat4, Vec3};

/// Axis-Aligned Bounding Box
///
/// Stored in whatever frame the owner works in (node-local for geometry,
/// world for cached subtree bounds).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl AABB {
    /// Box spanning two arbitrary points (order does not matter).
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        Self { min: a.min(b), max: a.max(b) }
    }

    /// Degenerate box holding exactly one point.
    pub fn from_point(p: Vec3) -> Self {
        Self { min: p, max: p }
    }

    /// Box centered at `center` with half-size `half_extents`.
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self { min: center - half, max: center + half }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Half-size along each axis.
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// The 8 corners. Index bit 0 selects x, bit 1 y, bit 2 z (0 = min, 1 = max).
    pub fn corners(&self) -> [Vec3; 8] {
        let mut corners = [Vec3::ZERO; 8];
        for (i, corner) in corners.iter_mut().enumerate() {
            *corner = Vec3::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            );
        }
        corners
    }

    /// Grow to include `p`.
    pub fn add_point(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Grow to the union with `other`.
    pub fn merge(&mut self, other: &AABB) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Grow to include the image of `other`'s corners under `transform`.
    pub fn merge_transformed(&mut self, other: &AABB, transform: &Mat4) {
        for corner in other.corners() {
            self.add_point(transform.transform_point3(corner));
        }
    }

    /// Tightest axis-aligned box enclosing the image of all 8 corners.
    ///
    /// Rotations make the result looser than the rotated shape itself.
    pub fn transformed(&self, matrix: &Mat4) -> AABB {
        let corners = self.corners();
        let mut result = AABB::from_point(matrix.transform_point3(corners[0]));
        for corner in &corners[1..] {
            result.add_point(matrix.transform_point3(*corner));
        }
        result
    }

    /// Grow symmetrically by a per-axis margin.
    ///
    /// Negative margins shrink; a shrink past zero size is clamped to the center.
    pub fn expand(&mut self, margin: Vec3) {
        let min = self.min - margin;
        let max = self.max + margin;
        let center = self.center();
        self.min = min.min(center);
        self.max = max.max(center);
    }

    /// Maximum of `dot(corner, direction)` over the 8 corners.
    ///
    /// Picking per axis the bound that agrees in sign with the direction
    /// reaches the same corner as evaluating all 8.
    pub fn support_value(&self, direction: Vec3) -> f32 {
        let corner = Vec3::new(
            if direction.x >= 0.0 { self.max.x } else { self.min.x },
            if direction.y >= 0.0 { self.max.y } else { self.min.y },
            if direction.z >= 0.0 { self.max.z } else { self.min.z },
        );
        corner.dot(direction)
    }

    /// Test if this AABB fully contains another AABB.
    pub fn contains(&self, other: &AABB) -> bool {
        self.min.x <= other.min.x && self.max.x >= other.max.x
        && self.min.y <= other.min.y && self.max.y >= other.max.y
        && self.min.z <= other.min.z && self.max.z >= other.max.z
    }

    /// Inclusive point containment.
    pub fn contains_point(&self, p: Vec3) -> bool {
        p.x >= self.min.x && p.x <= self.max.x
        && p.y >= self.min.y && p.y <= self.max.y
        && p.z >= self.min.z && p.z <= self.max.z
    }

    /// Test if the two boxes overlap on all three axes. Touching counts.
    pub fn intersects(&self, other: &AABB) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x
        && self.min.y <= other.max.y && self.max.y >= other.min.y
        && self.min.z <= other.max.z && self.max.z >= other.min.z
    }
}

#[cfg(test)]
#[path = "aabb_tests.rs"]
mod tests;
