pub mod camera;
pub mod config;
pub mod flight;
pub mod landing;
pub mod plane;
pub mod roster;
pub mod session;

pub use camera::{CameraMode, CameraRig, CameraView, FreeFlyControls};
pub use config::{
    Bounds, CameraConfig, ConfigError, FlightConfig, GameConfig, LandingConfig,
    ModelFrameConfig, SceneryConfig, SpawnConfig,
};
pub use flight::{FlightControls, FlightModel};
pub use landing::LandingDetector;
pub use plane::{Attitude, ModelFrame, Plane};
pub use roster::{MAX_PLANES, PlaneSlots, Roster, RosterError};
pub use session::{FrameInput, Phase, Session, plane_letter};
