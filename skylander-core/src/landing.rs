use crate::config::LandingConfig;
use crate::roster::Roster;
use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandingDetector {
    spot: Vec3,
    threshold: f32,
}

impl LandingDetector {
    pub fn new(config: &LandingConfig) -> Self {
        Self {
            spot: config.spot,
            threshold: config.threshold,
        }
    }

    pub fn spot(&self) -> Vec3 {
        self.spot
    }

    pub fn is_touchdown(&self, world_position: Vec3) -> bool {
        world_position.distance(self.spot) < self.threshold
    }

    /// Checks the active plane's rendered position against the landing spot.
    /// On touchdown the plane's autopilot is switched off and `true` is returned.
    pub fn check(&self, roster: &mut Roster) -> bool {
        let Some(plane) = roster.active_mut() else {
            return false;
        };

        if !self.is_touchdown(plane.world_position()) {
            return false;
        }

        plane.autopilot = false;
        true
    }
}

impl Default for LandingDetector {
    fn default() -> Self {
        Self::new(&LandingConfig::default())
    }
}
