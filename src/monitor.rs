//! Sampling loop feeding snapshots through the projection pipeline.
//!
//! A [`Monitor`] pulls one [`Frame`] per tick from a [`SnapshotSource`],
//! filters the targets worth projecting, and produces a [`TickReport`] that a
//! presentation layer can draw or log. The monitor owns no entity state
//! between ticks; every report is derived from the frame it was sampled from.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entity::WorldEntity;
use crate::overlay::{nudge_anchor, MarkerBox};
use crate::projection::{is_valid_fov, world_to_screen, Projection, Viewport};
use crate::{DEFAULT_ANCHOR_OFFSET, DEFAULT_VITALITY_FLOOR, MARKER_SCALE};

/// One sampling snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// The entity whose screen the targets are projected onto.
    pub viewpoint: WorldEntity,
    /// Entities to project.
    #[serde(default)]
    pub targets: Vec<WorldEntity>,
    /// Full vertical field of view in degrees.
    #[serde(rename = "fov_y")]
    pub fov_y_degrees: f32,
    /// Screen size of the viewpoint.
    pub viewport: Viewport,
}

/// Reasons a frame cannot be projected.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FrameError {
    /// The field of view is not finite or lies outside `(0, 180)` degrees.
    #[error("vertical field of view {0} is outside (0, 180) degrees")]
    InvalidFov(f32),
    /// The viewport has a non-finite or non-positive extent.
    #[error("viewport {width}x{height} must have finite, positive extents")]
    InvalidViewport {
        /// Configured width.
        width: f32,
        /// Configured height.
        height: f32,
    },
}

impl Frame {
    /// Checks the frame-wide projection parameters.
    ///
    /// # Errors
    /// Returns [`FrameError`] when the field of view or the viewport cannot
    /// produce meaningful projections.
    pub fn validate(&self) -> Result<(), FrameError> {
        if !is_valid_fov(self.fov_y_degrees) {
            return Err(FrameError::InvalidFov(self.fov_y_degrees));
        }
        if !self.viewport.is_valid() {
            return Err(FrameError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        Ok(())
    }
}

/// Supplier of sampling snapshots.
///
/// Implementations acquire the viewpoint and target state from wherever it
/// lives. `Ok(None)` signals that no further frames will be produced.
pub trait SnapshotSource {
    /// Failure raised while acquiring a frame.
    type Error: std::error::Error + 'static;

    /// Samples the next frame.
    ///
    /// # Errors
    /// Returns the source's error when the frame cannot be acquired.
    fn sample(&mut self) -> Result<Option<Frame>, Self::Error>;
}

/// Runtime settings for the monitor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorSettings {
    /// Targets are projected only when their vitality exceeds this value.
    pub vitality_floor: i32,
    /// World units added to each target's x and y before projecting.
    pub anchor_offset: f32,
    /// Marker half-extent in pixels at a depth of one world unit.
    pub marker_scale: f32,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            vitality_floor: DEFAULT_VITALITY_FLOOR,
            anchor_offset: DEFAULT_ANCHOR_OFFSET,
            marker_scale: MARKER_SCALE,
        }
    }
}

/// Per-field replacements layered over [`MonitorSettings`].
///
/// `None` keeps the underlying value. The binary fills this from its command
/// line flags.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SettingsOverrides {
    /// Replacement for [`MonitorSettings::vitality_floor`].
    pub vitality_floor: Option<i32>,
    /// Replacement for [`MonitorSettings::anchor_offset`].
    pub anchor_offset: Option<f32>,
    /// Replacement for [`MonitorSettings::marker_scale`].
    pub marker_scale: Option<f32>,
}

impl MonitorSettings {
    /// Returns these settings with every field set in `overrides` replaced.
    ///
    /// ```
    /// use sightline::monitor::{MonitorSettings, SettingsOverrides};
    ///
    /// let merged = MonitorSettings::default().overridden_by(SettingsOverrides {
    ///     anchor_offset: Some(0.2),
    ///     ..SettingsOverrides::default()
    /// });
    /// assert_eq!(merged.anchor_offset, 0.2);
    /// assert_eq!(merged.marker_scale, 750.0);
    /// ```
    #[must_use]
    pub fn overridden_by(self, overrides: SettingsOverrides) -> Self {
        Self {
            vitality_floor: overrides.vitality_floor.unwrap_or(self.vitality_floor),
            anchor_offset: overrides.anchor_offset.unwrap_or(self.anchor_offset),
            marker_scale: overrides.marker_scale.unwrap_or(self.marker_scale),
        }
    }
}

/// Projection result for one eligible target.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TargetReport {
    /// Position of the target within its frame.
    pub index: usize,
    /// Vitality sampled with the target.
    pub vitality: i32,
    /// Where the target landed.
    pub projection: Projection,
    /// Marker to draw; present only for visible targets.
    pub marker: Option<MarkerBox>,
}

/// Everything produced by one tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    /// Zero-based tick counter.
    pub tick: u64,
    /// Reports for the targets that passed the vitality filter.
    pub targets: Vec<TargetReport>,
}

impl TickReport {
    /// Number of targets that landed on screen.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.targets
            .iter()
            .filter(|report| report.projection.is_visible())
            .count()
    }
}

/// Failures that stop the monitor.
#[derive(Debug, Error)]
pub enum MonitorError<E>
where
    E: std::error::Error + 'static,
{
    /// The snapshot source failed.
    #[error("snapshot source failed: {0}")]
    Source(#[source] E),
    /// The sampled frame cannot be projected.
    #[error("tick {tick}: {source}")]
    InvalidFrame {
        /// Tick at which the frame was sampled.
        tick: u64,
        /// Validation failure.
        #[source]
        source: FrameError,
    },
}

/// Projects every eligible target of `frame`.
///
/// The frame is assumed valid; see [`Frame::validate`].
#[must_use]
pub fn project_frame(frame: &Frame, settings: &MonitorSettings) -> Vec<TargetReport> {
    frame
        .targets
        .iter()
        .enumerate()
        .filter(|(index, target)| {
            let alive = target.vitality > settings.vitality_floor;
            if !alive {
                debug!("skipping target {index} with vitality {}", target.vitality);
            }
            alive
        })
        .map(|(index, target)| {
            let anchor = nudge_anchor(target.position, settings.anchor_offset);
            let projection = world_to_screen(
                &frame.viewpoint,
                anchor,
                frame.fov_y_degrees,
                frame.viewport,
            );
            let marker = projection
                .screen_point()
                .map(|point| MarkerBox::around(point, settings.marker_scale));
            debug!("target {index}: {projection:?}");
            TargetReport {
                index,
                vitality: target.vitality,
                projection,
                marker,
            }
        })
        .collect()
}

/// Pull loop over a [`SnapshotSource`].
#[derive(Debug)]
pub struct Monitor<S> {
    source: S,
    settings: MonitorSettings,
    ticks: u64,
}

impl<S: SnapshotSource> Monitor<S> {
    /// Creates a monitor reading from `source`.
    #[must_use]
    pub const fn new(source: S, settings: MonitorSettings) -> Self {
        Self {
            source,
            settings,
            ticks: 0,
        }
    }

    /// Number of ticks that produced a report so far.
    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Samples and projects one frame.
    ///
    /// Returns `Ok(None)` once the source is exhausted.
    ///
    /// # Errors
    /// Returns [`MonitorError::Source`] when sampling fails and
    /// [`MonitorError::InvalidFrame`] when the frame fails validation.
    pub fn tick(&mut self) -> Result<Option<TickReport>, MonitorError<S::Error>> {
        let Some(frame) = self.source.sample().map_err(MonitorError::Source)? else {
            return Ok(None);
        };
        let tick = self.ticks;
        frame
            .validate()
            .map_err(|source| MonitorError::InvalidFrame { tick, source })?;

        let targets = project_frame(&frame, &self.settings);
        self.ticks += 1;
        let report = TickReport { tick, targets };
        debug!(
            "tick {tick}: {} of {} targets eligible, {} visible",
            report.targets.len(),
            frame.targets.len(),
            report.visible_count()
        );
        Ok(Some(report))
    }

    /// Runs ticks until the source is exhausted or `max_ticks` is reached.
    ///
    /// Each report is handed to `sink`. Returns the number of ticks run.
    ///
    /// # Errors
    /// Stops at the first [`MonitorError`] and returns it.
    pub fn run<F>(
        &mut self,
        max_ticks: Option<u64>,
        mut sink: F,
    ) -> Result<u64, MonitorError<S::Error>>
    where
        F: FnMut(&TickReport),
    {
        let mut processed = 0;
        while max_ticks.map_or(true, |limit| processed < limit) {
            let Some(report) = self.tick()? else {
                break;
            };
            sink(&report);
            processed += 1;
        }
        info!("monitor finished after {processed} ticks");
        Ok(processed)
    }
}
