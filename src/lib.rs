//! Library crate projecting sampled world-space entities onto a viewpoint's screen.
//! Re-exports the projection pipeline and the sampling monitor for the binary and tests.
pub mod camera;
pub mod constants;
pub mod entity;
pub mod logging;
pub mod monitor;
pub mod numeric;
pub mod overlay;
pub mod projection;
pub mod rotation;
pub mod scene;
pub mod space;
pub use constants::*;

// Re-export commonly used items
pub use camera::project_to_camera;
pub use entity::{Orientation, WorldEntity};
pub use logging::init as init_logging;
pub use monitor::{
    Frame, FrameError, Monitor, MonitorError, MonitorSettings, SettingsOverrides, SnapshotSource,
    TargetReport, TickReport,
};
pub use overlay::MarkerBox;
pub use projection::{world_to_screen, OffScreenReason, Projection, Viewport};
pub use rotation::{rotate, Axis};
pub use scene::{Scene, SceneError, SceneSource};
pub use space::{CameraPoint, NormalizedPoint, ScreenPoint, WorldPoint};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use sightline::prelude::*;
    //! ```

    pub use crate::world_to_screen;
    pub use crate::Axis;
    pub use crate::Projection;
    pub use crate::Viewport;
    pub use crate::WorldEntity;
    pub use crate::WorldPoint;
    pub use glam::Vec3;
}
