//! Rotation of points about the principal axes.
//! Angles are in degrees and rotations are counter-clockwise in a right-handed frame.
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::RADIANS_PER_DEGREE;

/// Principal axis selector for [`rotate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// The X axis (right).
    X,
    /// The Y axis (up).
    Y,
    /// The Z axis (towards the viewer).
    Z,
}

/// Rotates `point` counter-clockwise about `axis` by `angle_degrees`.
///
/// The coordinate along `axis` is left untouched; the other two are mixed
/// with the sine and cosine of the angle.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use sightline::rotation::{rotate, Axis};
/// let rotated = rotate(Vec3::new(1.0, 0.0, 0.0), Axis::Z, 90.0);
/// assert!((rotated - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-6);
/// ```
#[must_use]
pub fn rotate(point: Vec3, axis: Axis, angle_degrees: f32) -> Vec3 {
    let (sin, cos) = (angle_degrees * RADIANS_PER_DEGREE).sin_cos();
    let Vec3 { x, y, z } = point;
    match axis {
        Axis::X => Vec3::new(x, y * cos - z * sin, y * sin + z * cos),
        Axis::Y => Vec3::new(x * cos + z * sin, y, -x * sin + z * cos),
        Axis::Z => Vec3::new(x * cos - y * sin, x * sin + y * cos, z),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_turn_about_x_maps_y_onto_z() {
        let rotated = rotate(Vec3::Y, Axis::X, 90.0);
        assert!((rotated - Vec3::Z).length() < 1e-6, "got {rotated:?}");
    }

    #[test]
    fn quarter_turn_about_y_maps_z_onto_x() {
        let rotated = rotate(Vec3::Z, Axis::Y, 90.0);
        assert!((rotated - Vec3::X).length() < 1e-6, "got {rotated:?}");
    }

    #[test]
    fn axis_component_is_untouched() {
        let point = Vec3::new(1.5, -2.0, 4.0);
        assert_eq!(rotate(point, Axis::X, 33.0).x, point.x);
        assert_eq!(rotate(point, Axis::Y, 33.0).y, point.y);
        assert_eq!(rotate(point, Axis::Z, 33.0).z, point.z);
    }
}
