#[cfg(target_arch = "wasm32")]
use macroquad::miniquad;
use macroquad::audio::{PlaySoundParams, play_sound};
use macroquad::prelude::*;
use skylander_core::{FrameInput, GameConfig, Phase, Session};

use crate::assets::GameAssets;
use crate::hud::UiAction;
use crate::input::InputSampler;

mod assets;
mod hud;
mod input;
mod logging;
mod scene;

pub use hud::TITLE;

const FIXED_STEP_SECONDS: f32 = 1.0 / 60.0;
const CONFIG_PATH: &str = "skylander.json";

struct GameState {
    session: Session,
    assets: GameAssets,
    input: InputSampler,
    pending: FrameInput,
    engine_started: bool,
}

impl GameState {
    fn new(session: Session, assets: GameAssets) -> Self {
        Self {
            session,
            assets,
            input: InputSampler::default(),
            pending: FrameInput::default(),
            engine_started: false,
        }
    }

    fn sample_input(&mut self) {
        let sample = self.input.sample();
        self.pending.absorb(&sample);
        if input::quit_requested() {
            self.session.exit();
        }
    }

    /// Presses are handed to the first tick that runs after they happened.
    fn fixed_update(&mut self) {
        self.session.update(&self.pending);
        self.pending = self.pending.held_only();
    }

    fn render(&self) -> Vec<UiAction> {
        match self.session.phase() {
            Phase::Menu => {
                scene::draw_menu_background();
                hud::draw_menu()
            }
            Phase::Flying | Phase::Landed => {
                scene::draw_world(&self.session, &self.assets);
                hud::draw_flight_hud(self.session.roster());
                let actions = hud::draw_roster_panel(self.session.roster());
                if self.session.is_game_over() {
                    hud::draw_landed_overlay();
                }
                actions
            }
            Phase::Exited => Vec::new(),
        }
    }

    fn apply_ui_action(&mut self, action: UiAction) {
        let result = match action {
            UiAction::Start => {
                self.session.start();
                Ok(())
            }
            UiAction::Exit => {
                self.session.exit();
                Ok(())
            }
            UiAction::AddPlane => self.session.add_plane().map(|_| ()),
            UiAction::SelectPlane(index) => self.session.select_plane(index),
            UiAction::RemovePlane(index) => self.session.remove_plane(index).map(|_| ()),
        };
        if let Err(err) = result {
            log::debug!("ignored {action:?}: {err}");
        }
    }

    fn update_engine_sound(&mut self) {
        if self.engine_started || !self.session.engine_running() {
            return;
        }
        self.engine_started = true;
        if let Some(sound) = &self.assets.engine {
            play_sound(
                sound,
                PlaySoundParams {
                    looped: true,
                    volume: 1.0,
                },
            );
        }
    }
}

pub async fn run() {
    #[cfg(target_arch = "wasm32")]
    logging::install();
    install_panic_hook();
    prevent_quit();

    let config = load_config().await;
    let assets = match GameAssets::load(&config.scenery).await {
        Ok(assets) => assets,
        Err(err) => {
            log::error!("{err:#}");
            std::process::exit(1);
        }
    };
    let mut game = GameState::new(Session::new(config), assets);
    let mut accumulator = 0.0_f32;

    loop {
        game.sample_input();

        // Consume real elapsed time in fixed-size simulation steps.
        accumulator += get_frame_time();
        while accumulator >= FIXED_STEP_SECONDS {
            game.fixed_update();
            accumulator -= FIXED_STEP_SECONDS;
        }

        for action in game.render() {
            game.apply_ui_action(action);
        }
        game.update_engine_sound();

        if game.session.should_exit() {
            log::info!("shutting down after {} ticks", game.session.tick);
            break;
        }

        next_frame().await;
    }
}

/// Reads `skylander.json` from the working directory. A missing file means
/// defaults; a broken one is reported and also falls back to defaults.
async fn load_config() -> GameConfig {
    let text = match load_string(CONFIG_PATH).await {
        Ok(text) => text,
        Err(_) => {
            log::debug!("no {CONFIG_PATH}, using default configuration");
            return GameConfig::default();
        }
    };
    match GameConfig::from_json_str(&text) {
        Ok(config) => {
            log::info!("loaded configuration from {CONFIG_PATH}");
            config
        }
        Err(err) => {
            log::warn!("ignoring {CONFIG_PATH}: {err}");
            GameConfig::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let msg = info.to_string();
        if let Some(location) = info.location() {
            miniquad::error!("panic at {}:{}: {}", location.file(), location.line(), msg);
        } else {
            miniquad::error!("panic: {}", msg);
        }
    }));
}

#[cfg(not(target_arch = "wasm32"))]
fn install_panic_hook() {}
