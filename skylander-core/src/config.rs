use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("bounds on {axis} are inverted: min {min} > max {max}")]
    InvertedBounds { axis: char, min: f32, max: f32 },
    #[error("camera smoothing must be in (0, 1], got {0}")]
    Smoothing(f32),
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    pub point: Vec3,
    /// Offset along x between consecutive spawned planes.
    pub separation: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            point: Vec3::new(-1000.0, 5500.0, 19000.0),
            separation: 150.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    pub ground_altitude: f32,
    pub gravity: f32,
    pub ground_speed_factor: f32,
    pub cruise_speed: f32,
    pub climb_speed: f32,
    pub burst_speed: f32,
    pub vertical_speed: f32,
    pub pitch_rate: f32,
    pub pitch_recenter: f32,
    pub yaw_rate: f32,
    pub roll_rate: f32,
    pub roll_recenter: f32,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            ground_altitude: 6000.0,
            gravity: 0.5,
            ground_speed_factor: 0.5,
            cruise_speed: 40.5,
            climb_speed: 20.5,
            burst_speed: 50.0,
            vertical_speed: 12.0,
            pitch_rate: 0.2,
            pitch_recenter: 0.2,
            yaw_rate: 0.4,
            roll_rate: 0.7,
            roll_recenter: 0.3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    pub fn clamp(&self, position: Vec3) -> Vec3 {
        position.clamp(self.min, self.max)
    }

    pub fn contains(&self, position: Vec3) -> bool {
        position.cmpge(self.min).all() && position.cmple(self.max).all()
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min: Vec3::new(-189_900.0, 5500.0, -9900.0),
            max: Vec3::new(9900.0, 200_000.0, 189_900.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub spot: Vec3,
    pub threshold: f32,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            spot: Vec3::new(100.0, 27.458, 1.0),
            threshold: 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub initial_position: Vec3,
    pub initial_target: Vec3,
    pub fovy_degrees: f32,
    pub chase_offset: Vec3,
    /// Fraction of the remaining distance the chase camera covers each tick.
    pub chase_smoothing: f32,
    pub first_person_offset: Vec3,
    pub free_move_speed: f32,
    pub free_look_sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            initial_position: Vec3::new(0.0, 60.0, 120.0),
            initial_target: Vec3::new(0.0, 10.0, 0.0),
            fovy_degrees: 8.0,
            chase_offset: Vec3::new(-15.0, 2.5, 0.0),
            chase_smoothing: 0.1,
            first_person_offset: Vec3::new(0.0, 0.5, 0.0),
            free_move_speed: 0.09,
            free_look_sensitivity: 0.003,
        }
    }
}

/// Fixed correction applied between the plane's simulation coordinates and the
/// rendered scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelFrameConfig {
    pub correction_yaw_degrees: f32,
    pub scale: f32,
}

impl Default for ModelFrameConfig {
    fn default() -> Self {
        Self {
            correction_yaw_degrees: 90.0,
            scale: 0.005,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneryConfig {
    pub terrain_origin: Vec3,
    pub terrain_size: Vec3,
    pub terrain_saturation: f32,
    pub runway_center: Vec3,
    pub runway_width: f32,
    pub runway_length: f32,
    pub grid_slices: u32,
    pub grid_spacing: f32,
    pub landing_marker_radius: f32,
}

impl Default for SceneryConfig {
    fn default() -> Self {
        Self {
            terrain_origin: Vec3::new(-50.0, 0.0, -50.0),
            terrain_size: Vec3::new(1000.0, 350.0, 1000.0),
            terrain_saturation: 3.0,
            runway_center: Vec3::new(95.0, 27.458, 15.0),
            runway_width: 6.0,
            runway_length: 24.0,
            grid_slices: 500,
            grid_spacing: 1.0,
            landing_marker_radius: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub spawn: SpawnConfig,
    pub flight: FlightConfig,
    pub bounds: Bounds,
    pub landing: LandingConfig,
    pub camera: CameraConfig,
    pub model: ModelFrameConfig,
    pub scenery: SceneryConfig,
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let min = self.bounds.min.to_array();
        let max = self.bounds.max.to_array();
        for ((axis, min), max) in ['x', 'y', 'z'].into_iter().zip(min).zip(max) {
            if min > max {
                return Err(ConfigError::InvertedBounds { axis, min, max });
            }
        }

        let smoothing = self.camera.chase_smoothing;
        if !(smoothing > 0.0 && smoothing <= 1.0) {
            return Err(ConfigError::Smoothing(smoothing));
        }

        let positive = [
            ("landing.threshold", self.landing.threshold),
            ("model.scale", self.model.scale),
            ("camera.fovy_degrees", self.camera.fovy_degrees),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        Ok(())
    }
}
