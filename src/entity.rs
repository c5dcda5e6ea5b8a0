//! Sampled entity records.
use serde::{Deserialize, Serialize};

use crate::space::WorldPoint;

/// Look direction of an entity in degrees.
///
/// Positive yaw turns the view from −Z towards +X; positive pitch tilts it
/// towards +Y.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    /// Rotation about the X axis.
    pub pitch: f32,
    /// Rotation about the Y axis.
    pub yaw: f32,
}

/// A point-like entity captured in one sampling cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldEntity {
    /// Position in world space.
    pub position: WorldPoint,
    /// Look direction; only meaningful for the viewpoint.
    #[serde(default)]
    pub orientation: Orientation,
    /// Opaque health-like value supplied by the data source.
    pub vitality: i32,
}

impl WorldEntity {
    /// Creates an entity at the given position with no rotation.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, vitality: i32) -> Self {
        Self {
            position: WorldPoint::new(x, y, z),
            orientation: Orientation {
                pitch: 0.0,
                yaw: 0.0,
            },
            vitality,
        }
    }

    /// Returns a copy facing the given direction.
    #[must_use]
    pub const fn looking(self, pitch: f32, yaw: f32) -> Self {
        Self {
            orientation: Orientation { pitch, yaw },
            ..self
        }
    }
}
