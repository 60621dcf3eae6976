//! Integration tests for bounding volume geometry through the public API
//!
//! Run with: cargo test --test collision_integration_tests

use galaxy_3d_spatial::galaxy3d::bounds::{BoundingVolume, SeparatingAxes};
use galaxy_3d_spatial::glam::{Mat4, Quat, Vec3};

fn bv(min: [f32; 3], max: [f32; 3]) -> BoundingVolume {
    BoundingVolume::from_points(Vec3::from_array(min), Vec3::from_array(max))
}

#[test]
fn test_integration_separated_and_touching_boxes() {
    let a = bv([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
    let separated = bv([2.0, 0.0, 0.0], [3.0, 1.0, 1.0]);
    let touching = bv([1.0, 0.0, 0.0], [2.0, 1.0, 1.0]);

    assert!(!a.collision(&separated));
    assert!(a.collision(&touching));
    assert!(!a.collision_oriented(&Mat4::IDENTITY, &separated, &Mat4::IDENTITY));
    assert!(a.collision_oriented(&Mat4::IDENTITY, &touching, &Mat4::IDENTITY));
}

#[test]
fn test_integration_rotated_box_far_away() {
    let unit = bv([-0.5, -0.5, -0.5], [0.5, 0.5, 0.5]);
    let placed = Mat4::from_translation(Vec3::new(5.0, 0.0, 0.0))
        * Mat4::from_quat(Quat::from_rotation_z(std::f32::consts::FRAC_PI_4));

    for axes in [SeparatingAxes::Reduced, SeparatingAxes::Full] {
        assert!(!unit.collision_oriented_with(axes, &Mat4::IDENTITY, &unit, &placed));
        assert!(!unit.collision_oriented_with(axes, &placed, &unit, &Mat4::IDENTITY));
    }
}

#[test]
fn test_integration_child_merge_into_parent_frame() {
    let mut parent = bv([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
    let child = bv([-1.0, -1.0, -1.0], [1.0, 1.0, 1.0]);
    parent.merge_transformed(&child, &Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0)));

    assert_eq!(parent, bv([0.0, -1.0, -1.0], [11.0, 1.0, 1.0]));

    // Empty contributes nothing
    let before = parent;
    parent.merge(&BoundingVolume::empty());
    parent.merge_transformed(&BoundingVolume::empty(), &Mat4::from_scale(Vec3::splat(3.0)));
    assert_eq!(parent, before);
}
