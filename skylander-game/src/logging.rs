//! `log` backend for the wasm build, where `env_logger` has no terminal to
//! write to. Records are forwarded to miniquad's console logging.

use macroquad::miniquad;

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub struct MiniquadLogger;

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
static LOGGER: MiniquadLogger = MiniquadLogger;

impl log::Log for MiniquadLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::Level::Info
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        match record.level() {
            log::Level::Error => miniquad::error!("{}", record.args()),
            log::Level::Warn => miniquad::warn!("{}", record.args()),
            _ => miniquad::info!("{}", record.args()),
        }
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
pub fn install() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Info);
    }
}
