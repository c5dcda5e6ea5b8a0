//! Unit tests for the perspective camera transform.
use approx::assert_relative_eq;
use rstest::rstest;
use sightline::camera::vertical_scale;
use sightline::{project_to_camera, Axis, CameraPoint, WorldPoint};

#[test]
fn point_on_axis_projects_to_centre() {
    let projected = project_to_camera(CameraPoint::new(0.0, 0.0, -1.0), 45.0)
        .unwrap_or_else(|| panic!("point in front of the camera should project"));
    assert_relative_eq!(projected.0.x, 0.0);
    assert_relative_eq!(projected.0.y, 0.0);
}

#[rstest]
#[case::level(0.0)]
#[case::behind(5.0)]
#[case::nan(f32::NAN)]
fn points_not_in_front_are_rejected(#[case] z: f32) {
    assert!(project_to_camera(CameraPoint::new(1.0, 1.0, z), 45.0).is_none());
}

#[rstest]
#[case::quarter(45.0, 1.0)]
#[case::sixth(30.0, 3.0_f32.sqrt())]
#[case::third(60.0, 1.0 / 3.0_f32.sqrt())]
fn vertical_scale_is_cotangent(#[case] half_fov: f32, #[case] expected: f32) {
    assert_relative_eq!(vertical_scale(half_fov), expected, max_relative = 1e-5);
}

#[test]
fn divides_by_depth_with_fixed_horizontal_scale() {
    let projected = project_to_camera(CameraPoint::new(4.0, 2.0, -8.0), 30.0)
        .unwrap_or_else(|| panic!("point in front of the camera should project"));
    assert_relative_eq!(projected.0.x, 0.5);
    assert_relative_eq!(projected.0.y, 0.25 * 3.0_f32.sqrt(), max_relative = 1e-5);
}

#[test]
fn frustum_edges_are_inclusive() {
    let projected = project_to_camera(CameraPoint::new(-3.0, 0.0, -3.0), 45.0)
        .unwrap_or_else(|| panic!("point in front of the camera should project"));
    assert!(projected.is_within_frustum(), "got {projected:?}");
}

#[test]
fn translated_point_gains_camera_orientation_only_after_rotation() {
    let relative = WorldPoint::new(10.0, 0.0, 0.0).relative_to(WorldPoint::new(0.0, 0.0, 0.0));
    assert!(!relative.is_in_front());
    let turned = relative.rotated(Axis::Y, 90.0);
    assert!(turned.is_in_front());
    assert_relative_eq!(turned.depth(), 10.0, epsilon = 1e-4);
}
