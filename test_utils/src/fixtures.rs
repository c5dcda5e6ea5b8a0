//! Convenience constructors for frames and entities used in tests.

use sightline::{Frame, Viewport, WorldEntity};

/// Viewport used by most tests.
pub const VIEWPORT: Viewport = Viewport::new(800.0, 600.0);

/// Field of view used by most tests; gives a vertical scale of exactly one.
pub const FOV_Y: f32 = 90.0;

/// A viewpoint at the origin looking down −Z.
///
/// # Examples
/// ```
/// use test_utils::fixtures::viewpoint;
/// assert_eq!(viewpoint().orientation.yaw, 0.0);
/// ```
pub const fn viewpoint() -> WorldEntity {
    WorldEntity::new(0.0, 0.0, 0.0, 100)
}

/// A living target at the given position.
pub const fn target(x: f32, y: f32, z: f32) -> WorldEntity {
    WorldEntity::new(x, y, z, 100)
}

/// A target with zero vitality at the given position.
pub const fn dead_target(x: f32, y: f32, z: f32) -> WorldEntity {
    WorldEntity::new(x, y, z, 0)
}

/// A frame seen from [`viewpoint`] with the default field of view and viewport.
pub fn frame(targets: Vec<WorldEntity>) -> Frame {
    Frame {
        viewpoint: viewpoint(),
        targets,
        fov_y_degrees: FOV_Y,
        viewport: VIEWPORT,
    }
}
