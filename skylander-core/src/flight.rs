use crate::config::{Bounds, FlightConfig};
use crate::plane::Plane;

/// Keys held this tick for the player-controlled plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlightControls {
    pub boost: bool,
    pub burst: bool,
    pub climb: bool,
    pub descend: bool,
    pub pitch_down: bool,
    pub pitch_up: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
    pub roll_left: bool,
    pub roll_right: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightModel {
    config: FlightConfig,
    bounds: Bounds,
}

impl FlightModel {
    pub fn new(config: FlightConfig, bounds: Bounds) -> Self {
        Self { config, bounds }
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Planes at or below the ground altitude fly at reduced speed.
    pub fn speed_factor(&self, altitude: f32) -> f32 {
        if altitude <= self.config.ground_altitude {
            self.config.ground_speed_factor
        } else {
            1.0
        }
    }

    /// Advances one plane by one tick. `controls` is only given for the
    /// player-controlled plane.
    pub fn step(&self, plane: &mut Plane, controls: Option<&FlightControls>) {
        let cfg = &self.config;

        let speed_factor = self.speed_factor(plane.position.y);
        if plane.position.y <= cfg.ground_altitude {
            plane.position.y -= cfg.gravity;
        }

        if plane.autopilot {
            self.cruise(plane, speed_factor);
        }

        if let Some(controls) = controls {
            self.apply_controls(plane, controls, speed_factor);
        }

        plane.position = self.bounds.clamp(plane.position);
    }

    fn cruise(&self, plane: &mut Plane, speed_factor: f32) {
        let forward = plane.attitude.forward();
        let speed = self.config.cruise_speed * speed_factor;
        plane.position.x += forward.x * speed;
        plane.position.z += forward.z * speed;
        plane.position.y +=
            plane.attitude.pitch.to_radians().sin() * self.config.climb_speed * speed_factor;
    }

    fn apply_controls(&self, plane: &mut Plane, controls: &FlightControls, speed_factor: f32) {
        let cfg = &self.config;

        if controls.boost {
            self.cruise(plane, speed_factor);
        }
        if controls.burst {
            let forward = plane.attitude.forward();
            plane.position.x += forward.x * cfg.burst_speed * speed_factor;
            plane.position.z += forward.z * cfg.burst_speed * speed_factor;
        }
        if controls.climb {
            plane.position.y += cfg.vertical_speed * speed_factor;
        }
        if controls.descend {
            plane.position.y -= cfg.vertical_speed * speed_factor;
        }

        let attitude = &mut plane.attitude;

        if controls.pitch_down {
            attitude.pitch += cfg.pitch_rate;
        } else if controls.pitch_up {
            attitude.pitch -= cfg.pitch_rate;
        } else if attitude.pitch > cfg.pitch_recenter {
            attitude.pitch -= cfg.pitch_recenter;
        } else if attitude.pitch < -cfg.pitch_recenter {
            attitude.pitch += cfg.pitch_recenter;
        }

        if controls.yaw_right {
            attitude.yaw -= cfg.yaw_rate;
        }
        if controls.yaw_left {
            attitude.yaw += cfg.yaw_rate;
        }

        if controls.roll_left {
            attitude.roll -= cfg.roll_rate;
        } else if controls.roll_right {
            attitude.roll += cfg.roll_rate;
        } else if attitude.roll > 0.0 {
            attitude.roll -= cfg.roll_recenter;
        } else if attitude.roll < 0.0 {
            attitude.roll += cfg.roll_recenter;
        }
    }
}

impl Default for FlightModel {
    fn default() -> Self {
        Self::new(FlightConfig::default(), Bounds::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plane::Attitude;
    use approx::assert_relative_eq;
    use glam::Vec3;

    fn cruising_plane() -> Plane {
        Plane::spawn(Vec3::new(0.0, 10_000.0, 0.0))
    }

    #[test]
    fn idle_plane_above_ground_does_not_move() {
        let model = FlightModel::default();
        let mut plane = cruising_plane();

        model.step(&mut plane, None);

        assert_eq!(plane.position, Vec3::new(0.0, 10_000.0, 0.0));
    }

    #[test]
    fn low_plane_sinks_and_slows() {
        let model = FlightModel::default();
        let mut plane = Plane::spawn(Vec3::new(0.0, 6000.0, 0.0));
        plane.autopilot = true;

        model.step(&mut plane, None);

        assert_relative_eq!(plane.position.y, 5999.5);
        assert_relative_eq!(plane.position.z, 40.5 * 0.5);
        assert_eq!(model.speed_factor(6000.0), 0.5);
        assert_eq!(model.speed_factor(6000.1), 1.0);
    }

    #[test]
    fn gravity_stops_at_the_floor() {
        let model = FlightModel::default();
        let mut plane = Plane::spawn(Vec3::new(0.0, 5500.0, 0.0));

        for _ in 0..10 {
            model.step(&mut plane, None);
        }

        assert_eq!(plane.position.y, 5500.0);
    }

    #[test]
    fn autopilot_flies_along_heading_and_climbs_with_pitch() {
        let model = FlightModel::default();
        let mut plane = cruising_plane();
        plane.autopilot = true;
        plane.attitude = Attitude::new(30.0, 0.0, 90.0);

        model.step(&mut plane, None);

        assert_relative_eq!(plane.position.x, 40.5, epsilon = 1e-3);
        assert_relative_eq!(plane.position.z, 0.0, epsilon = 1e-3);
        assert_relative_eq!(plane.position.y, 10_000.0 + 20.5 * 0.5, epsilon = 1e-3);
    }

    #[test]
    fn autopilot_ignores_missing_controls_for_background_planes() {
        let model = FlightModel::default();
        let mut plane = cruising_plane();
        plane.autopilot = true;
        plane.attitude.roll = 5.0;

        model.step(&mut plane, None);

        assert_relative_eq!(plane.position.z, 40.5);
        assert_eq!(plane.attitude.roll, 5.0);
    }

    #[test]
    fn boost_stacks_with_autopilot() {
        let model = FlightModel::default();
        let mut plane = cruising_plane();
        plane.autopilot = true;
        let controls = FlightControls {
            boost: true,
            ..Default::default()
        };

        model.step(&mut plane, Some(&controls));

        assert_relative_eq!(plane.position.z, 81.0);
    }

    #[test]
    fn burst_moves_flat() {
        let model = FlightModel::default();
        let mut plane = cruising_plane();
        plane.attitude.pitch = 45.0;
        let controls = FlightControls {
            burst: true,
            pitch_down: true,
            ..Default::default()
        };

        model.step(&mut plane, Some(&controls));

        assert_relative_eq!(plane.position.z, 50.0);
        assert_eq!(plane.position.y, 10_000.0);
    }

    #[test]
    fn climb_and_descend_cancel_out() {
        let model = FlightModel::default();
        let mut plane = cruising_plane();
        let climb = FlightControls {
            climb: true,
            ..Default::default()
        };
        let both = FlightControls {
            climb: true,
            descend: true,
            ..Default::default()
        };

        model.step(&mut plane, Some(&climb));
        assert_eq!(plane.position.y, 10_012.0);

        model.step(&mut plane, Some(&both));
        assert_eq!(plane.position.y, 10_012.0);
    }

    #[test]
    fn pitch_and_roll_recenter_but_yaw_holds() {
        let model = FlightModel::default();
        let mut plane = cruising_plane();
        plane.attitude = Attitude::new(1.0, 0.9, 12.0);

        model.step(&mut plane, Some(&FlightControls::default()));

        assert_relative_eq!(plane.attitude.pitch, 0.8);
        assert_relative_eq!(plane.attitude.roll, 0.6);
        assert_eq!(plane.attitude.yaw, 12.0);
    }

    #[test]
    fn pitch_inside_dead_band_is_left_alone() {
        let model = FlightModel::default();
        let mut plane = cruising_plane();
        plane.attitude.pitch = 0.15;

        model.step(&mut plane, Some(&FlightControls::default()));

        assert_eq!(plane.attitude.pitch, 0.15);
    }

    #[test]
    fn attitude_keys_apply_fixed_increments() {
        let model = FlightModel::default();
        let mut plane = cruising_plane();
        let controls = FlightControls {
            pitch_up: true,
            yaw_right: true,
            roll_right: true,
            ..Default::default()
        };

        model.step(&mut plane, Some(&controls));

        assert_relative_eq!(plane.attitude.pitch, -0.2);
        assert_relative_eq!(plane.attitude.yaw, -0.4);
        assert_relative_eq!(plane.attitude.roll, 0.7);
    }

    #[test]
    fn opposing_yaw_keys_cancel() {
        let model = FlightModel::default();
        let mut plane = cruising_plane();
        let controls = FlightControls {
            yaw_left: true,
            yaw_right: true,
            ..Default::default()
        };

        model.step(&mut plane, Some(&controls));

        assert_relative_eq!(plane.attitude.yaw, 0.0);
    }

    #[test]
    fn every_step_respects_bounds() {
        let model = FlightModel::default();
        let controls = FlightControls {
            boost: true,
            burst: true,
            climb: true,
            yaw_left: true,
            pitch_down: true,
            ..Default::default()
        };
        let starts = [
            Vec3::new(9899.0, 199_999.0, 189_899.0),
            Vec3::new(-189_899.0, 5501.0, -9899.0),
            Vec3::new(0.0, 6000.0, 0.0),
        ];

        for start in starts {
            let mut plane = Plane::spawn(start);
            plane.autopilot = true;
            for _ in 0..2000 {
                model.step(&mut plane, Some(&controls));
                assert!(model.bounds().contains(plane.position), "{:?}", plane.position);
            }
        }
    }
}
