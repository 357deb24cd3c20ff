use crate::config::CameraConfig;
use crate::plane::{ModelFrame, Plane};
use glam::{Quat, Vec2, Vec3};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    #[default]
    Chase,
    FirstPerson,
    Free,
}

impl CameraMode {
    /// Free flight wins over first person; neither toggle means chase.
    pub fn from_toggles(free_cam: bool, first_person: bool) -> Self {
        if free_cam {
            CameraMode::Free
        } else if first_person {
            CameraMode::FirstPerson
        } else {
            CameraMode::Chase
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fovy_degrees: f32,
}

/// Inputs for the free-fly camera. `look` is the mouse delta for this tick
/// and is only applied while `looking` is held.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FreeFlyControls {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub rise: bool,
    pub sink: bool,
    pub looking: bool,
    pub look: Vec2,
}

#[derive(Debug, Clone)]
pub struct CameraRig {
    view: CameraView,
    config: CameraConfig,
}

impl CameraRig {
    pub fn new(config: CameraConfig) -> Self {
        Self {
            view: CameraView {
                position: config.initial_position,
                target: config.initial_target,
                up: Vec3::Y,
                fovy_degrees: config.fovy_degrees,
            },
            config,
        }
    }

    pub fn view(&self) -> &CameraView {
        &self.view
    }

    pub fn update(
        &mut self,
        mode: CameraMode,
        focus: Option<&Plane>,
        frame: &ModelFrame,
        free: &FreeFlyControls,
    ) {
        // With nothing to follow the camera falls back to free flight.
        match (mode, focus) {
            (CameraMode::FirstPerson, Some(plane)) => self.cockpit(plane, frame),
            (CameraMode::Chase, Some(plane)) => self.chase(plane),
            (CameraMode::Free, _) | (_, None) => self.fly(free),
        }
    }

    fn cockpit(&mut self, plane: &Plane, frame: &ModelFrame) {
        let rotation = frame.cockpit_rotation(&plane.attitude);
        let position = plane.world_position() + self.config.first_person_offset;
        self.view.position = position;
        self.view.target = position + rotation.transform_point3(Vec3::Z);
        self.view.up = rotation.transform_point3(Vec3::Y);
    }

    fn chase(&mut self, plane: &Plane) {
        let focus = plane.world_position();
        let offset = plane
            .attitude
            .heading_rotation()
            .transform_point3(self.config.chase_offset);
        let desired = focus + offset;
        self.view.position = self
            .view
            .position
            .lerp(desired, self.config.chase_smoothing);
        self.view.target = focus;
    }

    fn fly(&mut self, controls: &FreeFlyControls) {
        let speed = self.config.free_move_speed;
        let view = &mut self.view;

        let mut forward = (view.target - view.position).normalize_or_zero();
        if forward == Vec3::ZERO {
            forward = Vec3::NEG_Z;
        }

        if controls.looking && controls.look != Vec2::ZERO {
            let sensitivity = self.config.free_look_sensitivity;
            let yaw = -controls.look.x * sensitivity;
            let pitch = -controls.look.y * sensitivity;
            forward = Quat::from_rotation_y(yaw) * forward;
            let right = forward.cross(Vec3::Y).normalize_or_zero();
            if right != Vec3::ZERO {
                let pitched = Quat::from_axis_angle(right, pitch) * forward;
                // Keep away from the poles so the right vector stays defined.
                if pitched.dot(Vec3::Y).abs() < 0.99 {
                    forward = pitched;
                }
            }
        }

        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let mut step = Vec3::ZERO;
        if controls.forward {
            step += forward;
        }
        if controls.back {
            step -= forward;
        }
        if controls.right {
            step += right;
        }
        if controls.left {
            step -= right;
        }
        if controls.rise {
            step += Vec3::Y;
        }
        if controls.sink {
            step -= Vec3::Y;
        }

        view.position += step * speed;
        view.target = view.position + forward;
        view.up = Vec3::Y;
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}
