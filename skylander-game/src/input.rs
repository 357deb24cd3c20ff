use macroquad::prelude::*;
use skylander_core::{FlightControls, FrameInput, FreeFlyControls};

/// Samples the keyboard and mouse once per rendered frame.
#[derive(Debug, Default)]
pub struct InputSampler {
    last_mouse: Option<Vec2>,
}

impl InputSampler {
    pub fn sample(&mut self) -> FrameInput {
        let mouse = Vec2::from(mouse_position());
        let delta = self.last_mouse.map(|last| mouse - last).unwrap_or(Vec2::ZERO);
        self.last_mouse = Some(mouse);

        FrameInput {
            controls: FlightControls {
                boost: is_key_down(KeyCode::LeftShift),
                burst: is_key_down(KeyCode::Space),
                climb: is_key_down(KeyCode::W),
                descend: is_key_down(KeyCode::S),
                pitch_down: is_key_down(KeyCode::Down),
                pitch_up: is_key_down(KeyCode::Up),
                yaw_left: is_key_down(KeyCode::A),
                yaw_right: is_key_down(KeyCode::D),
                roll_left: is_key_down(KeyCode::Left),
                roll_right: is_key_down(KeyCode::Right),
            },
            free_fly: FreeFlyControls {
                forward: is_key_down(KeyCode::W),
                back: is_key_down(KeyCode::S),
                left: is_key_down(KeyCode::A),
                right: is_key_down(KeyCode::D),
                rise: is_key_down(KeyCode::Space),
                sink: is_key_down(KeyCode::LeftControl),
                looking: is_mouse_button_down(MouseButton::Right),
                look: glam::Vec2::new(delta.x, delta.y),
            },
            toggle_first_person: is_key_pressed(KeyCode::F),
            toggle_free_cam: is_key_pressed(KeyCode::R),
            toggle_autopilot: is_key_pressed(KeyCode::C),
            play_again: is_key_pressed(KeyCode::Y),
            quit: is_key_pressed(KeyCode::N),
        }
    }
}

/// Escape or the window close button ends the program from any screen.
pub fn quit_requested() -> bool {
    is_key_pressed(KeyCode::Escape) || is_quit_requested()
}
