//! Toddler Keys core crate.
//!
//! A single-screen keyboard toy: an ASCII letter or digit is drawn as a big
//! coloured glyph, any other key brings out a randomly chosen bus friend
//! somewhere near the middle of the screen. Narrow screens get a tap-to-type
//! hidden input so phones and tablets can raise their on-screen keyboard.
//!
//! The logic is split so everything except [`bridge`] and [`dom`] is pure and
//! runs under plain `cargo test`: [`state::reduce`] takes an event and returns
//! the next presentation state plus the timers/focus requests to perform.

use wasm_bindgen::prelude::*;

pub mod bridge;
pub mod classify;
pub mod config;
pub mod dom;
pub mod error;
pub mod palette;
pub mod render;
pub mod rng;
pub mod state;

pub use classify::{KeyClass, classify, is_alphanumeric};
pub use config::GameConfig;
pub use error::{ConfigError, MountError};
pub use palette::{BACKGROUND_COLORS, Mascot, TEXT_COLORS};
pub use rng::{RandomSource, Xorshift64};
pub use state::{Effect, KeyOrigin, PresentationState, Transition, UiEvent, reduce};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Err only means a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);
}

// -----------------------------------------------------------------------------
// JS entrypoints
// -----------------------------------------------------------------------------

/// Mount into `#app` with default settings. Remounts if already running.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    bridge::mount(GameConfig::default()).map_err(Into::into)
}

/// Like [`start_game`] but with a JSON [`GameConfig`]; missing fields keep their defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    let config = GameConfig::from_json(json)?;
    bridge::mount(config).map_err(Into::into)
}

#[wasm_bindgen]
pub fn stop_game() {
    bridge::unmount();
}

#[wasm_bindgen]
pub fn is_alphanumeric_key(key: &str) -> bool {
    is_alphanumeric(key)
}
