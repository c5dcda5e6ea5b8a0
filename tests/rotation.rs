//! Unit tests for axis rotation.
//! Covers identity angles, round trips and norm preservation about each axis.
use approx::assert_relative_eq;
use glam::Vec3;
use rstest::rstest;
use sightline::{rotate, Axis};
use test_utils::assert_vec3_near;

const POINT: Vec3 = Vec3::new(1.0, -2.0, 3.0);

#[rstest]
#[case::x(Axis::X)]
#[case::y(Axis::Y)]
#[case::z(Axis::Z)]
fn zero_degrees_is_identity(#[case] axis: Axis) {
    assert_eq!(rotate(POINT, axis, 0.0), POINT);
}

#[rstest]
#[case::x(Axis::X)]
#[case::y(Axis::Y)]
#[case::z(Axis::Z)]
fn full_turn_returns_to_start(#[case] axis: Axis) {
    assert_vec3_near(rotate(POINT, axis, 360.0), POINT, 1e-4);
}

#[rstest]
fn opposite_angles_cancel(
    #[values(Axis::X, Axis::Y, Axis::Z)] axis: Axis,
    #[values(17.0, -45.0, 90.0, 233.5)] angle: f32,
) {
    let there = rotate(POINT, axis, angle);
    assert_vec3_near(rotate(there, axis, -angle), POINT, 1e-4);
}

#[rstest]
#[case::x(Axis::X, |v: Vec3| v.y * v.y + v.z * v.z)]
#[case::y(Axis::Y, |v: Vec3| v.x * v.x + v.z * v.z)]
#[case::z(Axis::Z, |v: Vec3| v.x * v.x + v.y * v.y)]
fn preserves_norm_in_rotation_plane(#[case] axis: Axis, #[case] plane_norm: fn(Vec3) -> f32) {
    for angle in [12.5, 90.0, 180.0, -271.0] {
        let rotated = rotate(POINT, axis, angle);
        assert_relative_eq!(plane_norm(rotated), plane_norm(POINT), epsilon = 1e-4);
    }
}

#[rstest]
#[case::x_quarter(Axis::X, 90.0, Vec3::new(1.0, -3.0, -2.0))]
#[case::y_quarter(Axis::Y, 90.0, Vec3::new(3.0, -2.0, -1.0))]
#[case::z_quarter(Axis::Z, 90.0, Vec3::new(2.0, 1.0, 3.0))]
#[case::z_half(Axis::Z, 180.0, Vec3::new(-1.0, 2.0, 3.0))]
fn rotates_counter_clockwise(#[case] axis: Axis, #[case] angle: f32, #[case] expected: Vec3) {
    assert_vec3_near(rotate(POINT, axis, angle), expected, 1e-5);
}
