//! Perspective camera transform.
//!
//! Maps the camera's view frustum onto the normalized cube used for viewport
//! mapping. The transform is the perspective matrix followed by the divide by
//! `w = -z`; near and far clipping are not modelled, so only the x and y
//! coordinates survive.

use glam::Vec2;

use crate::space::{CameraPoint, NormalizedPoint};
use crate::{HORIZONTAL_FOV_COTANGENT, RADIANS_PER_DEGREE};

/// Vertical scale factor for a half field of view, `cot(half_fov_y)`.
#[must_use]
pub fn vertical_scale(half_fov_y_degrees: f32) -> f32 {
    (half_fov_y_degrees * RADIANS_PER_DEGREE).tan().recip()
}

/// Projects a camera-space point into normalized perspective space.
///
/// Returns `None` when the point is not in front of the camera (`z >= 0`),
/// where the perspective divide has no meaning.
///
/// # Examples
/// ```
/// use sightline::camera::project_to_camera;
/// use sightline::space::CameraPoint;
///
/// let projected = project_to_camera(CameraPoint::new(0.0, 0.0, -1.0), 45.0).unwrap();
/// assert_eq!(projected.0.to_array(), [0.0, 0.0]);
/// assert!(project_to_camera(CameraPoint::new(0.0, 0.0, 1.0), 45.0).is_none());
/// ```
#[must_use]
pub fn project_to_camera(point: CameraPoint, half_fov_y_degrees: f32) -> Option<NormalizedPoint> {
    if !point.is_in_front() {
        return None;
    }
    let w = point.depth();
    let scale = Vec2::new(HORIZONTAL_FOV_COTANGENT, vertical_scale(half_fov_y_degrees));
    Some(NormalizedPoint(point.0.truncate() * scale / w))
}
