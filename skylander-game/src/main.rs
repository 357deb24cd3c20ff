use macroquad::prelude::*;

fn window_conf() -> Conf {
    Conf {
        window_title: skylander_game::TITLE.to_owned(),
        window_width: 1920,
        window_height: 1080,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    skylander_game::run().await;
}
