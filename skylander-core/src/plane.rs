use crate::config::ModelFrameConfig;
use glam::{Mat4, Vec3};

/// Pitch, roll and yaw in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Attitude {
    pub pitch: f32,
    pub roll: f32,
    pub yaw: f32,
}

impl Attitude {
    pub fn new(pitch: f32, roll: f32, yaw: f32) -> Self {
        Self { pitch, roll, yaw }
    }

    /// The product `Rx(pitch) * Ry(yaw) * Rz(roll)`. Acting on a column
    /// vector, roll is applied first and pitch last.
    pub fn rotation(&self) -> Mat4 {
        rotation_xyz(self.pitch, self.yaw, self.roll)
    }

    /// Same rotation with roll dropped; used by the chase camera.
    pub fn heading_rotation(&self) -> Mat4 {
        rotation_xyz(self.pitch, self.yaw, 0.0)
    }

    pub fn forward(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        Vec3::new(yaw.sin(), 0.0, yaw.cos())
    }
}

fn rotation_xyz(x_degrees: f32, y_degrees: f32, z_degrees: f32) -> Mat4 {
    Mat4::from_rotation_x(x_degrees.to_radians())
        * Mat4::from_rotation_y(y_degrees.to_radians())
        * Mat4::from_rotation_z(z_degrees.to_radians())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub position: Vec3,
    pub attitude: Attitude,
    pub transform: Mat4,
    pub active: bool,
    pub autopilot: bool,
}

impl Plane {
    pub fn spawn(position: Vec3) -> Self {
        Self {
            position,
            attitude: Attitude::default(),
            transform: Mat4::IDENTITY,
            active: true,
            autopilot: false,
        }
    }

    /// Position in the rendered scene, read back from the transform.
    pub fn world_position(&self) -> Vec3 {
        self.transform.w_axis.truncate()
    }

    pub fn refresh_transform(&mut self, frame: &ModelFrame) {
        self.transform = frame.compose(self.position, &self.attitude);
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            attitude: Attitude::default(),
            transform: Mat4::IDENTITY,
            active: false,
            autopilot: false,
        }
    }
}

/// Correction rotation and uniform scale that map simulation coordinates
/// into the rendered scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelFrame {
    correction: Mat4,
    scale: Mat4,
}

impl ModelFrame {
    pub fn new(config: &ModelFrameConfig) -> Self {
        Self {
            correction: Mat4::from_rotation_y(config.correction_yaw_degrees.to_radians()),
            scale: Mat4::from_scale(Vec3::splat(config.scale)),
        }
    }

    pub fn correction(&self) -> Mat4 {
        self.correction
    }

    /// The attitude rotation is applied first, before the translation, so the
    /// whole translated block is then corrected and scaled. This is not a
    /// body-frame transform; the rendered scene depends on this exact order.
    pub fn compose(&self, position: Vec3, attitude: &Attitude) -> Mat4 {
        self.scale * self.correction * Mat4::from_translation(position) * attitude.rotation()
    }

    /// Orientation used by the first person camera.
    pub fn cockpit_rotation(&self, attitude: &Attitude) -> Mat4 {
        self.correction * attitude.rotation()
    }
}

impl Default for ModelFrame {
    fn default() -> Self {
        Self::new(&ModelFrameConfig::default())
    }
}
