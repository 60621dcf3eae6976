/// Frustum: six clipping planes for visibility culling.
///
/// Each plane is represented as a Vec4 (A, B, C, D) where:
/// - (A, B, C) is the inward-pointing normal
/// - D is the signed distance
/// - A point P is inside the frustum if dot(plane, P_homogeneous) >= 0 for all planes
///
/// Volumes are tested in world space: cullers pass a node's world
/// (subtree) volume, or its local volume mapped through the world matrix.

use glam::{Mat4, Vec3, Vec4};
use crate::bounds::{BoundingVolume, AABB};

/// Result of a 3-way frustum/volume classification.
///
/// Drives hierarchical culling over the scene graph:
/// - `Outside`: skip the entire subtree
/// - `Inside`: collect the subtree without further testing
/// - `Partial`: test the node itself and recurse into children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrustumTest {
    Outside,
    Inside,
    /// Straddles at least one plane
    Partial,
}

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Six frustum planes for culling.
///
/// Each plane is (A, B, C, D) where Ax + By + Cz + D = 0.
/// Normal (A, B, C) points inward (toward the visible volume).
/// Works with both perspective and orthographic projections.
#[derive(Debug, Clone, Copy)]
pub struct Frustum {
    /// Frustum planes: left, right, bottom, top, near, far
    pub planes: [Vec4; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix.
    ///
    /// Uses the Gribb & Hartmann method. Works for both perspective
    /// and orthographic projections.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let m = vp.to_cols_array_2d();

        // Gribb & Hartmann: extract planes from rows of the VP matrix
        // Each plane is normalized so that (A, B, C) is a unit vector
        let mut planes = [
            // Left:   row3 + row0
            Vec4::new(m[0][3] + m[0][0], m[1][3] + m[1][0], m[2][3] + m[2][0], m[3][3] + m[3][0]),
            // Right:  row3 - row0
            Vec4::new(m[0][3] - m[0][0], m[1][3] - m[1][0], m[2][3] - m[2][0], m[3][3] - m[3][0]),
            // Bottom: row3 + row1
            Vec4::new(m[0][3] + m[0][1], m[1][3] + m[1][1], m[2][3] + m[2][1], m[3][3] + m[3][1]),
            // Top:    row3 - row1
            Vec4::new(m[0][3] - m[0][1], m[1][3] - m[1][1], m[2][3] - m[2][1], m[3][3] - m[3][1]),
            // Near:   row3 + row2
            Vec4::new(m[0][3] + m[0][2], m[1][3] + m[1][2], m[2][3] + m[2][2], m[3][3] + m[3][2]),
            // Far:    row3 - row2
            Vec4::new(m[0][3] - m[0][2], m[1][3] - m[1][2], m[2][3] - m[2][2], m[3][3] - m[3][2]),
        ];

        // Normalize each plane
        for plane in &mut planes {
            let normal_len = Vec3::new(plane.x, plane.y, plane.z).length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }

        Self { planes }
    }

    /// Signed distance of `point` to plane `index` (positive inside).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not one of the `PLANE_*` constants (0..6).
    pub fn plane_distance(&self, index: usize, point: Vec3) -> f32 {
        self.planes[index].truncate().dot(point) + self.planes[index].w
    }

    /// Conservative overlap test: may accept a box near a frustum corner
    /// that is actually outside, never rejects a visible one.
    pub fn intersects_aabb(&self, aabb: &AABB) -> bool {
        self.classify_aabb(aabb) != FrustumTest::Outside
    }

    /// 3-way classification using the support value of the box along each
    /// plane normal (the p-vertex) and along its negation (the n-vertex).
    pub fn classify_aabb(&self, aabb: &AABB) -> FrustumTest {
        let mut all_inside = true;

        for plane in &self.planes {
            let normal = plane.truncate();

            // Farthest corner along the normal still behind the plane
            if aabb.support_value(normal) + plane.w < 0.0 {
                return FrustumTest::Outside;
            }

            // Nearest corner behind the plane: box straddles it
            if -aabb.support_value(-normal) + plane.w < 0.0 {
                all_inside = false;
            }
        }

        if all_inside { FrustumTest::Inside } else { FrustumTest::Partial }
    }

    /// Empty volumes never intersect.
    pub fn intersects_bounding_volume(&self, volume: &BoundingVolume) -> bool {
        volume.aabb().is_some_and(|aabb| self.intersects_aabb(aabb))
    }

    /// Empty volumes classify as `Outside`.
    pub fn classify_bounding_volume(&self, volume: &BoundingVolume) -> FrustumTest {
        match volume.aabb() {
            Some(aabb) => self.classify_aabb(aabb),
            None => FrustumTest::Outside,
        }
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
