/// Separating Axis Theorem test for two boxes placed by affine transforms.
///
/// Each box is an AABB in its own local frame; its transform maps that
/// frame to world space. Along a world direction `L`, a placed box reaches
/// `support(R^T * L) + t . L`, where `R` is the linear part of the transform
/// and `t` its translation. Two boxes are separated along `L` when one's
/// maximum lies strictly below the other's minimum; touching is contact.

use std::cmp::Ordering;
use glam::{Mat3, Mat4, Vec3};
use super::aabb::AABB;

/// Edge cross-product axes tried after the 6 face axes.
///
/// `Reduced` tries 6 of the 9 products (Ax×Bx, Ax×By, Ax×Bz, Ay×By, Ay×Bz,
/// Az×Bz). It never reports a separation that does not exist, but may miss
/// one that only an omitted product (Ay×Bx, Az×Bx, Az×By) reveals.
/// `Full` tries all 9 and is exact for boxes with orthogonal axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeparatingAxes {
    #[default]
    Reduced,
    Full,
}

const REDUCED_EDGE_PAIRS: [(usize, usize); 6] = [
    (0, 0), (0, 1), (0, 2),
    (1, 1), (1, 2),
    (2, 2),
];

const FULL_EDGE_PAIRS: [(usize, usize); 9] = [
    (0, 0), (0, 1), (0, 2),
    (1, 0), (1, 1), (1, 2),
    (2, 0), (2, 1), (2, 2),
];

impl SeparatingAxes {
    /// (axis of A, axis of B) index pairs whose cross product is tested.
    pub fn edge_pairs(self) -> &'static [(usize, usize)] {
        match self {
            SeparatingAxes::Reduced => &REDUCED_EDGE_PAIRS,
            SeparatingAxes::Full => &FULL_EDGE_PAIRS,
        }
    }

    /// Number of candidate axes, face axes included.
    pub fn axis_count(self) -> usize {
        6 + self.edge_pairs().len()
    }
}

/// A local box together with the pieces of its transform the test needs.
struct PlacedBox<'a> {
    aabb: &'a AABB,
    /// Local x/y/z directions expressed in world space (transform columns)
    axes: [Vec3; 3],
    /// Transposed linear part: maps a world direction into the local frame
    to_local: Mat3,
    translation: Vec3,
}

impl<'a> PlacedBox<'a> {
    fn new(aabb: &'a AABB, transform: &Mat4) -> Self {
        let linear = Mat3::from_mat4(*transform);
        Self {
            aabb,
            axes: [linear.x_axis, linear.y_axis, linear.z_axis],
            to_local: linear.transpose(),
            translation: transform.w_axis.truncate(),
        }
    }

    /// Largest world-space projection of the box onto `direction`.
    fn support(&self, direction: Vec3) -> f32 {
        self.aabb.support_value(self.to_local * direction) + self.translation.dot(direction)
    }
}

/// True if the projections of `a` and `b` on `axis` do not overlap.
///
/// Both orientations are checked. A zero axis yields a gap of exactly zero
/// and never separates.
fn separated_along(a: &PlacedBox<'_>, b: &PlacedBox<'_>, axis: Vec3) -> bool {
    a.support(axis) + b.support(-axis) < 0.0 || a.support(-axis) + b.support(axis) < 0.0
}

/// Lexicographic total order over the raw inputs of one box.
fn compare_inputs(a: &AABB, transform_a: &Mat4, b: &AABB, transform_b: &Mat4) -> Ordering {
    let lhs = transform_a.to_cols_array().into_iter().chain(a.min.to_array()).chain(a.max.to_array());
    let rhs = transform_b.to_cols_array().into_iter().chain(b.min.to_array()).chain(b.max.to_array());
    for (x, y) in lhs.zip(rhs) {
        match x.total_cmp(&y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// Intersection test for two oriented boxes.
///
/// Returns `false` as soon as one candidate axis separates the boxes,
/// `true` when none does.
pub fn oriented_boxes_collide(
    a: &AABB,
    transform_a: &Mat4,
    b: &AABB,
    transform_b: &Mat4,
    axes: SeparatingAxes,
) -> bool {
    // The reduced edge set is not closed under swapping A and B; evaluate
    // in a canonical order so the predicate stays symmetric.
    if axes == SeparatingAxes::Reduced
        && compare_inputs(a, transform_a, b, transform_b) == Ordering::Greater
    {
        return test_axes(b, transform_b, a, transform_a, axes);
    }
    test_axes(a, transform_a, b, transform_b, axes)
}

fn test_axes(
    a: &AABB,
    transform_a: &Mat4,
    b: &AABB,
    transform_b: &Mat4,
    axes: SeparatingAxes,
) -> bool {
    let placed_a = PlacedBox::new(a, transform_a);
    let placed_b = PlacedBox::new(b, transform_b);

    // Face normals of A, then of B
    for axis in placed_a.axes.iter().chain(placed_b.axes.iter()) {
        if separated_along(&placed_a, &placed_b, *axis) {
            return false;
        }
    }

    // Edge cross products
    for &(i, j) in axes.edge_pairs() {
        let axis = placed_a.axes[i].cross(placed_b.axes[j]);
        if separated_along(&placed_a, &placed_b, axis) {
            return false;
        }
    }

    true
}

#[cfg(test)]
#[path = "separating_axis_tests.rs"]
mod tests;
