//! Marker geometry for visible targets.
//!
//! These helpers belong to the presentation side of the monitor: they decide
//! where a marker sits and how large it is, but never influence whether a
//! target is visible.

use serde::{Deserialize, Serialize};

use crate::numeric::trunc_to_i32;
use crate::space::{ScreenPoint, WorldPoint};

/// Axis-aligned square around a projected target, in whole pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkerBox {
    /// Left edge.
    pub left: i32,
    /// Top edge.
    pub top: i32,
    /// Right edge.
    pub right: i32,
    /// Bottom edge.
    pub bottom: i32,
}

impl MarkerBox {
    /// Builds a marker centred on `point` whose half-extent is `scale / depth`.
    ///
    /// Coordinates and the half-extent are truncated towards zero, so nearby
    /// targets get larger boxes than distant ones.
    ///
    /// # Examples
    /// ```
    /// use sightline::overlay::MarkerBox;
    /// use sightline::space::ScreenPoint;
    ///
    /// let marker = MarkerBox::around(ScreenPoint { x: 400.5, y: 300.0, depth: 10.0 }, 750.0);
    /// assert_eq!(marker.half_extent(), 75);
    /// assert_eq!((marker.left, marker.right), (325, 475));
    /// ```
    #[must_use]
    pub fn around(point: ScreenPoint, scale: f32) -> Self {
        let half = trunc_to_i32(scale / point.depth);
        let x = trunc_to_i32(point.x);
        let y = trunc_to_i32(point.y);
        Self {
            left: x.saturating_sub(half),
            top: y.saturating_sub(half),
            right: x.saturating_add(half),
            bottom: y.saturating_add(half),
        }
    }

    /// Half the width of the box.
    #[must_use]
    pub const fn half_extent(&self) -> u32 {
        self.right.abs_diff(self.left) / 2
    }
}

/// Nudges a target anchor by `offset` world units along x and y.
///
/// Used to move the marker anchor away from an entity's feet; a zero offset
/// returns the target unchanged.
#[must_use]
pub fn nudge_anchor(target: WorldPoint, offset: f32) -> WorldPoint {
    target.offset_xy(offset, offset)
}
