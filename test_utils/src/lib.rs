//! Utility helpers for tests.
//!
//! Builders for the frames and entities most tests need, plus tolerance-aware
//! assertions for projection results.
pub mod fixtures;

use approx::abs_diff_eq;
use glam::Vec3;
use sightline::{Projection, ScreenPoint};

/// Pixel tolerance used when comparing screen coordinates.
pub const PIXEL_TOLERANCE: f32 = 1e-3;

/// Assert that `projection` is visible at `(x, y)` within [`PIXEL_TOLERANCE`].
///
/// Returns the screen point for further checks.
///
/// # Panics
/// Panics if the projection is off screen or lands elsewhere.
pub fn assert_visible_at(projection: Projection, x: f32, y: f32) -> ScreenPoint {
    let Projection::Visible(point) = projection else {
        panic!("expected a visible projection at ({x}, {y}), got {projection:?}");
    };
    assert!(
        abs_diff_eq!(point.x, x, epsilon = PIXEL_TOLERANCE)
            && abs_diff_eq!(point.y, y, epsilon = PIXEL_TOLERANCE),
        "expected ({x}, {y}), got ({}, {})",
        point.x,
        point.y
    );
    point
}

/// Assert that two vectors agree component-wise within `epsilon`.
///
/// # Panics
/// Panics with both vectors in the message when they differ.
pub fn assert_vec3_near(actual: Vec3, expected: Vec3, epsilon: f32) {
    assert!(
        abs_diff_eq!(actual.x, expected.x, epsilon = epsilon)
            && abs_diff_eq!(actual.y, expected.y, epsilon = epsilon)
            && abs_diff_eq!(actual.z, expected.z, epsilon = epsilon),
        "expected {expected:?}, got {actual:?}"
    );
}
