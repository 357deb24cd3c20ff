use crate::camera::{CameraMode, CameraRig, CameraView, FreeFlyControls};
use crate::config::GameConfig;
use crate::flight::{FlightControls, FlightModel};
use crate::landing::LandingDetector;
use crate::plane::{ModelFrame, Plane};
use crate::roster::{Roster, RosterError};
use log::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Menu,
    Flying,
    Landed,
    Exited,
}

/// Everything the player did during one tick. Edge-triggered fields are
/// `true` only on the tick the key went down.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub controls: FlightControls,
    pub free_fly: FreeFlyControls,
    pub toggle_first_person: bool,
    pub toggle_free_cam: bool,
    pub toggle_autopilot: bool,
    pub play_again: bool,
    pub quit: bool,
}

impl FrameInput {
    /// Copy with the edge-triggered fields and the mouse-look delta cleared,
    /// for extra ticks run in the same frame.
    pub fn held_only(&self) -> Self {
        Self {
            controls: self.controls,
            free_fly: FreeFlyControls {
                look: glam::Vec2::ZERO,
                ..self.free_fly
            },
            ..Default::default()
        }
    }

    /// Folds a newer sample into one that has not been consumed by a tick
    /// yet. Held state comes from `newer`; presses and look deltas add up.
    pub fn absorb(&mut self, newer: &FrameInput) {
        let look = self.free_fly.look + newer.free_fly.look;
        self.controls = newer.controls;
        self.free_fly = newer.free_fly;
        self.free_fly.look = look;
        self.toggle_first_person |= newer.toggle_first_person;
        self.toggle_free_cam |= newer.toggle_free_cam;
        self.toggle_autopilot |= newer.toggle_autopilot;
        self.play_again |= newer.play_again;
        self.quit |= newer.quit;
    }
}

pub struct Session {
    pub tick: u64,
    config: GameConfig,
    phase: Phase,
    roster: Roster,
    flight: FlightModel,
    landing: LandingDetector,
    frame: ModelFrame,
    camera: CameraRig,
    first_person: bool,
    free_cam: bool,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        Self {
            tick: 0,
            phase: Phase::Menu,
            roster: Roster::new(),
            flight: FlightModel::new(config.flight, config.bounds),
            landing: LandingDetector::new(&config.landing),
            frame: ModelFrame::new(&config.model),
            camera: CameraRig::new(config.camera),
            first_person: false,
            free_cam: false,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn active_plane(&self) -> Option<&Plane> {
        self.roster.active()
    }

    pub fn camera(&self) -> &CameraView {
        self.camera.view()
    }

    pub fn camera_mode(&self) -> CameraMode {
        CameraMode::from_toggles(self.free_cam, self.first_person)
    }

    pub fn landing_spot(&self) -> glam::Vec3 {
        self.landing.spot()
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::Landed
    }

    pub fn should_exit(&self) -> bool {
        self.phase == Phase::Exited
    }

    /// The engine sound runs once a game has been started.
    pub fn engine_running(&self) -> bool {
        matches!(self.phase, Phase::Flying | Phase::Landed)
    }

    pub fn start(&mut self) {
        info!("starting new game");
        self.phase = Phase::Flying;
        self.reset_roster();
    }

    pub fn play_again(&mut self) {
        if self.phase != Phase::Landed {
            return;
        }
        info!("restarting after landing");
        self.phase = Phase::Flying;
        self.reset_roster();
    }

    pub fn exit(&mut self) {
        info!("exit requested at tick {}", self.tick);
        self.phase = Phase::Exited;
    }

    pub fn add_plane(&mut self) -> Result<usize, RosterError> {
        let spawn = self.config.spawn;
        let index = self.roster.add(spawn.point, spawn.separation)?;
        info!("added plane {} ({} in roster)", plane_letter(index), self.roster.len());
        Ok(index)
    }

    pub fn remove_plane(&mut self, index: usize) -> Result<Plane, RosterError> {
        let removed = self.roster.remove(index)?;
        info!(
            "removed plane {} ({} left, active {})",
            plane_letter(index),
            self.roster.len(),
            self.roster.active_index()
        );
        Ok(removed)
    }

    /// Selecting a plane also hands the camera back from free flight.
    pub fn select_plane(&mut self, index: usize) -> Result<(), RosterError> {
        self.roster.select(index)?;
        self.free_cam = false;
        info!("selected plane {}", plane_letter(index));
        Ok(())
    }

    pub fn toggle_first_person(&mut self) {
        if self.phase == Phase::Flying {
            self.first_person = !self.first_person;
            debug!("first person view: {}", self.first_person);
        }
    }

    pub fn toggle_free_cam(&mut self) {
        if self.phase == Phase::Flying {
            self.free_cam = !self.free_cam;
            debug!("free camera: {}", self.free_cam);
        }
    }

    pub fn toggle_autopilot(&mut self) {
        if self.phase != Phase::Flying {
            return;
        }
        if let Some(enabled) = self.roster.toggle_autopilot() {
            debug!("autopilot on plane {}: {}", plane_letter(self.roster.active_index()), enabled);
        }
    }

    /// Runs one simulation tick.
    pub fn update(&mut self, input: &FrameInput) {
        self.tick += 1;

        if input.toggle_first_person {
            self.toggle_first_person();
        }
        if input.toggle_free_cam {
            self.toggle_free_cam();
        }
        if input.toggle_autopilot {
            self.toggle_autopilot();
        }

        if self.phase == Phase::Flying {
            self.fly(&input.controls);
        }

        if matches!(self.phase, Phase::Flying | Phase::Landed) {
            for plane in self.roster.planes_mut() {
                plane.refresh_transform(&self.frame);
            }

            if self.phase == Phase::Flying && self.landing.check(&mut self.roster) {
                self.phase = Phase::Landed;
                if let Some(plane) = self.roster.active() {
                    info!(
                        "plane {} landed at {:?} after {} ticks",
                        plane_letter(self.roster.active_index()),
                        plane.world_position(),
                        self.tick
                    );
                }
            }

            let mode = self.camera_mode();
            self.camera
                .update(mode, self.roster.active(), &self.frame, &input.free_fly);
        }

        if self.phase == Phase::Landed {
            if input.play_again {
                self.play_again();
            } else if input.quit {
                self.exit();
            }
        }
    }

    fn fly(&mut self, controls: &FlightControls) {
        let active_index = self.roster.active_index();
        for (index, plane) in self.roster.planes_mut().iter_mut().enumerate() {
            let controls = (index == active_index).then_some(controls);
            self.flight.step(plane, controls);
        }
    }

    fn reset_roster(&mut self) {
        self.roster.reset(self.config.spawn.point);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

/// Roster slots are labelled A, B, C, D.
pub fn plane_letter(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}
