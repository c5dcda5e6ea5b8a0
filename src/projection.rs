//! World-to-screen projection.
//!
//! Composes the viewpoint translation, the two viewpoint rotations and the
//! camera transform, then maps normalized coordinates onto the viewport. The
//! whole pipeline is a pure function of its arguments.

use serde::{Deserialize, Serialize};

use crate::camera::project_to_camera;
use crate::entity::WorldEntity;
use crate::rotation::Axis;
use crate::space::{CameraPoint, NormalizedPoint, ScreenPoint, WorldPoint};
use crate::FOV_Y_LIMITS_DEGREES;

/// Returns `true` when a full vertical field of view can be projected.
///
/// The angle must be finite and lie strictly inside `(0, 180)` degrees.
///
/// ```
/// use sightline::projection::is_valid_fov;
/// assert!(is_valid_fov(90.0));
/// assert!(!is_valid_fov(180.0));
/// assert!(!is_valid_fov(f32::NAN));
/// ```
#[must_use]
pub fn is_valid_fov(fov_y_degrees: f32) -> bool {
    let (min, max) = FOV_Y_LIMITS_DEGREES;
    fov_y_degrees > min && fov_y_degrees < max
}

/// Pixel rectangle that normalized coordinates are mapped onto.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Viewport {
    /// Creates a viewport of the given size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns `true` when both extents are finite and positive.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Maps a normalized point onto pixel coordinates.
    ///
    /// Screen y grows downward while normalized y grows upward, so the
    /// vertical axis is flipped.
    #[must_use]
    pub fn map(self, point: NormalizedPoint, depth: f32) -> ScreenPoint {
        let x = (point.0.x + 1.0) * self.width / 2.0;
        let y = self.height - (point.0.y + 1.0) * self.height / 2.0;
        ScreenPoint { x, y, depth }
    }
}

/// Why a target produced no screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OffScreenReason {
    /// The target is level with or behind the viewpoint.
    BehindCamera,
    /// The target is in front of the viewpoint but outside the view frustum.
    OutsideFrustum,
}

/// Outcome of projecting one target.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Projection {
    /// The target lands inside the viewport.
    Visible(ScreenPoint),
    /// The target is not visible.
    OffScreen(OffScreenReason),
}

impl Projection {
    /// Returns `true` for [`Projection::Visible`].
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        matches!(self, Self::Visible(_))
    }

    /// Screen coordinates of a visible projection.
    #[must_use]
    pub const fn screen_point(&self) -> Option<ScreenPoint> {
        match self {
            Self::Visible(point) => Some(*point),
            Self::OffScreen(_) => None,
        }
    }
}

/// Expresses `target` in the camera space of `viewpoint`.
///
/// The world is rotated opposite to the camera: first by the viewpoint's yaw
/// about Y, then by its negated pitch about X.
#[must_use]
pub fn to_camera_space(viewpoint: &WorldEntity, target: WorldPoint) -> CameraPoint {
    target
        .relative_to(viewpoint.position)
        .rotated(Axis::Y, viewpoint.orientation.yaw)
        .rotated(Axis::X, -viewpoint.orientation.pitch)
}

/// Projects `target` onto the screen of `viewpoint`.
///
/// `fov_y_degrees` is the full vertical field of view. A field of view
/// rejected by [`is_valid_fov`] yields
/// [`OffScreenReason::OutsideFrustum`]; NaN coordinates also come back as
/// [`Projection::OffScreen`]. Nothing here panics.
///
/// # Examples
/// ```
/// use sightline::entity::WorldEntity;
/// use sightline::projection::{world_to_screen, Projection, Viewport};
/// use sightline::space::WorldPoint;
///
/// let viewpoint = WorldEntity::default();
/// let projection = world_to_screen(
///     &viewpoint,
///     WorldPoint::new(0.0, 0.0, -10.0),
///     90.0,
///     Viewport::new(800.0, 600.0),
/// );
/// let point = projection.screen_point().unwrap();
/// assert!((point.x - 400.0).abs() < 1e-3);
/// assert!((point.y - 300.0).abs() < 1e-3);
/// ```
#[must_use]
pub fn world_to_screen(
    viewpoint: &WorldEntity,
    target: WorldPoint,
    fov_y_degrees: f32,
    viewport: Viewport,
) -> Projection {
    if !is_valid_fov(fov_y_degrees) {
        return Projection::OffScreen(OffScreenReason::OutsideFrustum);
    }
    let camera = to_camera_space(viewpoint, target);
    let Some(normalized) = project_to_camera(camera, fov_y_degrees / 2.0) else {
        return Projection::OffScreen(OffScreenReason::BehindCamera);
    };
    if normalized.is_within_frustum() {
        Projection::Visible(viewport.map(normalized, camera.depth()))
    } else {
        Projection::OffScreen(OffScreenReason::OutsideFrustum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_flips_vertical_axis() {
        let viewport = Viewport::new(800.0, 600.0);
        let top_right = viewport.map(NormalizedPoint::new(1.0, 1.0), 1.0);
        assert_eq!((top_right.x, top_right.y), (800.0, 0.0));
        let bottom_left = viewport.map(NormalizedPoint::new(-1.0, -1.0), 1.0);
        assert_eq!((bottom_left.x, bottom_left.y), (0.0, 600.0));
    }

    #[test]
    fn viewport_rejects_degenerate_extents() {
        assert!(Viewport::new(640.0, 480.0).is_valid());
        assert!(!Viewport::new(0.0, 480.0).is_valid());
        assert!(!Viewport::new(640.0, f32::INFINITY).is_valid());
        assert!(!Viewport::new(f32::NAN, 480.0).is_valid());
    }

    #[test]
    fn nan_target_is_never_visible() {
        let projection = world_to_screen(
            &WorldEntity::default(),
            WorldPoint::new(f32::NAN, 0.0, -5.0),
            90.0,
            Viewport::new(800.0, 600.0),
        );
        assert!(!projection.is_visible());
    }
}
