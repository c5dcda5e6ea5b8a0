//! Coordinate-space value types.
//!
//! Each stage of the projection pipeline consumes a point in one space and
//! produces a point in the next. Keeping the spaces as distinct types means a
//! world-space position cannot be handed to the camera transform by mistake.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::rotation::{rotate, Axis};
use crate::{NORMALIZED_MAX, NORMALIZED_MIN};

/// A position in the global frame shared by all entities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorldPoint(pub Vec3);

impl WorldPoint {
    /// Creates a world-space point from its components.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    /// Translates this point so that `origin` becomes the origin.
    ///
    /// This is the first camera-space stage: the result is still axis-aligned
    /// with the world until [`CameraPoint::rotated`] turns it to face the
    /// viewpoint's look direction.
    ///
    /// ```
    /// use sightline::space::WorldPoint;
    /// let relative = WorldPoint::new(3.0, 2.0, 1.0).relative_to(WorldPoint::new(1.0, 1.0, 1.0));
    /// assert_eq!(relative.0.to_array(), [2.0, 1.0, 0.0]);
    /// ```
    #[must_use]
    pub fn relative_to(self, origin: Self) -> CameraPoint {
        CameraPoint(self.0 - origin.0)
    }

    /// Returns the point with `dx` and `dy` added to its x and y components.
    #[must_use]
    pub fn offset_xy(self, dx: f32, dy: f32) -> Self {
        Self(self.0 + Vec3::new(dx, dy, 0.0))
    }
}

impl From<[f32; 3]> for WorldPoint {
    fn from(components: [f32; 3]) -> Self {
        Self(Vec3::from_array(components))
    }
}

/// A position relative to the viewpoint.
///
/// Covers every viewpoint-relative stage of the pipeline, from the bare
/// translation returned by [`WorldPoint::relative_to`] through each rotation.
/// Only after both viewpoint rotations does the camera sit at the origin
/// looking down −Z, with X to the right and Y up; [`CameraPoint::depth`] and
/// [`CameraPoint::is_in_front`] assume that final orientation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraPoint(pub Vec3);

impl CameraPoint {
    /// Creates a camera-space point from its components.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    /// Rotates the point counter-clockwise about `axis`.
    #[must_use]
    pub fn rotated(self, axis: Axis, angle_degrees: f32) -> Self {
        Self(rotate(self.0, axis, angle_degrees))
    }

    /// Distance in front of the camera, positive when the point is visible.
    #[must_use]
    pub fn depth(self) -> f32 {
        -self.0.z
    }

    /// Whether the point lies strictly in front of the camera.
    ///
    /// NaN depths count as not in front.
    #[must_use]
    pub fn is_in_front(self) -> bool {
        self.0.z < 0.0
    }
}

/// A point after the perspective divide.
///
/// Points inside the view frustum have both coordinates in `[-1, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NormalizedPoint(pub Vec2);

impl NormalizedPoint {
    /// Creates a normalized point from its components.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    /// Returns `true` when both coordinates lie in `[-1, 1]`.
    ///
    /// ```
    /// use sightline::space::NormalizedPoint;
    /// assert!(NormalizedPoint::new(1.0, -1.0).is_within_frustum());
    /// assert!(!NormalizedPoint::new(1.01, 0.0).is_within_frustum());
    /// assert!(!NormalizedPoint::new(f32::NAN, 0.0).is_within_frustum());
    /// ```
    #[must_use]
    pub fn is_within_frustum(self) -> bool {
        let range = NORMALIZED_MIN..=NORMALIZED_MAX;
        range.contains(&self.0.x) && range.contains(&self.0.y)
    }
}

/// Pixel coordinates of a visible projection.
///
/// `x` grows to the right and `y` grows downward from the top-left corner of
/// the viewport. `depth` is the camera-space distance of the projected point,
/// kept so callers can scale markers with distance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    /// Horizontal pixel coordinate.
    pub x: f32,
    /// Vertical pixel coordinate.
    pub y: f32,
    /// Distance in front of the camera.
    pub depth: f32,
}
