//! Projection constants used across the pipeline and the monitor.

/// Radians in one degree (π / 180).
pub const RADIANS_PER_DEGREE: f32 = std::f32::consts::PI / 180.0;

/// Horizontal scale factor of the camera transform.
///
/// This is `cot(45°)`: the horizontal field of view is fixed at 90° regardless
/// of the viewport's aspect ratio. Only the vertical field of view is taken
/// from the sampled frame.
pub const HORIZONTAL_FOV_COTANGENT: f32 = 1.0;

/// Lower bound (inclusive) of normalized coordinates inside the frustum.
pub const NORMALIZED_MIN: f32 = -1.0;
/// Upper bound (inclusive) of normalized coordinates inside the frustum.
pub const NORMALIZED_MAX: f32 = 1.0;

/// Vertical field of view values must lie strictly between these bounds.
pub const FOV_Y_LIMITS_DEGREES: (f32, f32) = (0.0, 180.0);

/// Marker half-extent in pixels for a target one world unit away.
pub const MARKER_SCALE: f32 = 750.0;
/// Anchor offset added to target x and y before projection by default.
pub const DEFAULT_ANCHOR_OFFSET: f32 = 0.0;
/// Targets with vitality at or below this value are not projected.
pub const DEFAULT_VITALITY_FLOOR: i32 = 0;
