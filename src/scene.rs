//! Recorded scenes replayed as a snapshot source.
//!
//! A scene is a JSON document holding the frames a live source would have
//! produced:
//!
//! ```json
//! {
//!   "up_axis": "z",
//!   "settings": { "anchor_offset": 0.2 },
//!   "frames": [
//!     {
//!       "viewpoint": { "position": [0, 0, 0], "orientation": { "pitch": 0, "yaw": 90 }, "vitality": 100 },
//!       "targets": [ { "position": [10, 0, 0], "vitality": 100 } ],
//!       "fov_y": 90,
//!       "viewport": { "width": 800, "height": 600 }
//!     }
//!   ]
//! }
//! ```
//!
//! Frames are validated when the scene is loaded so replay itself cannot fail.

use std::convert::Infallible;
use std::fs;
use std::path::{Path, PathBuf};

use glam::Vec3;
use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use crate::entity::WorldEntity;
use crate::monitor::{Frame, FrameError, MonitorSettings, SnapshotSource};
use crate::space::WorldPoint;

/// Which world axis points up in the recorded positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpAxis {
    /// Y is up, as the projection pipeline expects.
    #[default]
    Y,
    /// Z is up; y and z are swapped on load.
    Z,
}

impl UpAxis {
    /// Converts a recorded position into the Y-up convention.
    #[must_use]
    pub fn to_y_up(self, point: WorldPoint) -> WorldPoint {
        match self {
            Self::Y => point,
            Self::Z => WorldPoint(Vec3::new(point.0.x, point.0.z, point.0.y)),
        }
    }

    fn convert_entity(self, entity: WorldEntity) -> WorldEntity {
        WorldEntity {
            position: self.to_y_up(entity.position),
            ..entity
        }
    }
}

/// Errors raised while loading a scene.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The scene file could not be read.
    #[error("failed to read scene {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The document is not a valid scene.
    #[error("failed to parse scene: {0}")]
    Parse(#[from] serde_json::Error),
    /// A frame carries unusable projection parameters.
    #[error("frame {index} is invalid: {source}")]
    InvalidFrame {
        /// Position of the frame in the document.
        index: usize,
        /// Validation failure.
        #[source]
        source: FrameError,
    },
}

const fn default_loops() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SceneDocument {
    #[serde(default)]
    up_axis: UpAxis,
    #[serde(default)]
    settings: Option<MonitorSettings>,
    #[serde(default = "default_loops")]
    loops: u32,
    frames: Vec<Frame>,
}

/// A validated sequence of frames in Y-up world coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    frames: Vec<Frame>,
    settings: Option<MonitorSettings>,
    loops: u32,
}

impl Scene {
    /// Builds a scene from frames that are already Y-up.
    ///
    /// # Errors
    /// Returns [`SceneError::InvalidFrame`] for the first invalid frame.
    pub fn new(frames: Vec<Frame>) -> Result<Self, SceneError> {
        for (index, frame) in frames.iter().enumerate() {
            frame
                .validate()
                .map_err(|source| SceneError::InvalidFrame { index, source })?;
        }
        Ok(Self {
            frames,
            settings: None,
            loops: default_loops(),
        })
    }

    /// Parses a scene from its JSON text.
    ///
    /// # Errors
    /// Returns [`SceneError::Parse`] for malformed documents and
    /// [`SceneError::InvalidFrame`] for frames that fail validation.
    pub fn from_json_str(text: &str) -> Result<Self, SceneError> {
        let document: SceneDocument = serde_json::from_str(text)?;
        let up_axis = document.up_axis;
        let frames = document
            .frames
            .into_iter()
            .map(|frame| Frame {
                viewpoint: up_axis.convert_entity(frame.viewpoint),
                targets: frame
                    .targets
                    .into_iter()
                    .map(|target| up_axis.convert_entity(target))
                    .collect(),
                ..frame
            })
            .collect();
        let mut scene = Self::new(frames)?;
        scene.settings = document.settings;
        scene.loops = document.loops;
        debug!(
            "parsed scene with {} frames ({up_axis:?} up, {} loops)",
            scene.frames.len(),
            scene.loops
        );
        Ok(scene)
    }

    /// Reads and parses a scene file.
    ///
    /// # Errors
    /// Returns [`SceneError::Io`] when the file cannot be read, otherwise the
    /// errors of [`Scene::from_json_str`].
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let text = fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let scene = Self::from_json_str(&text)?;
        info!("loaded scene {} ({} frames)", path.display(), scene.frames.len());
        Ok(scene)
    }

    /// Recorded frames in replay order.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Monitor settings stored alongside the frames, if any.
    #[must_use]
    pub const fn settings(&self) -> Option<MonitorSettings> {
        self.settings
    }

    /// Number of times the frame sequence is replayed.
    #[must_use]
    pub const fn loops(&self) -> u32 {
        self.loops
    }

    /// Returns the scene with a different replay count.
    #[must_use]
    pub fn with_loops(mut self, loops: u32) -> Self {
        self.loops = loops;
        self
    }

    /// Consumes the scene into a replaying source.
    #[must_use]
    pub fn into_source(self) -> SceneSource {
        SceneSource {
            remaining_loops: self.loops,
            scene: self,
            cursor: 0,
        }
    }
}

/// Replays a [`Scene`] frame by frame.
#[derive(Clone, Debug)]
pub struct SceneSource {
    scene: Scene,
    cursor: usize,
    remaining_loops: u32,
}

impl SnapshotSource for SceneSource {
    type Error = Infallible;

    fn sample(&mut self) -> Result<Option<Frame>, Self::Error> {
        if self.remaining_loops == 0 {
            return Ok(None);
        }
        let Some(frame) = self.scene.frames.get(self.cursor).cloned() else {
            return Ok(None);
        };
        self.cursor += 1;
        if self.cursor == self.scene.frames.len() {
            self.cursor = 0;
            self.remaining_loops -= 1;
        }
        Ok(Some(frame))
    }
}
