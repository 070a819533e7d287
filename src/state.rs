//! Presentation state and the pure reducer that drives it.
//!
//! The browser layer turns DOM events into [`UiEvent`]s, feeds them through
//! [`reduce`] and then performs the returned [`Effect`]s (timers, focusing the
//! hidden input). Nothing in here touches the DOM, so every transition can be
//! exercised natively with a scripted [`RandomSource`].

use crate::classify::{KeyClass, classify};
use crate::config::GameConfig;
use crate::palette::{INITIAL_BACKGROUND, Mascot, TEXT_COLORS};
use crate::rng::{RandomSource, mascot_position, pick_background, pick_mascot, pick_text_color};

/// Everything currently on screen.
///
/// `last_key` and `mascot_visible` are never both set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresentationState {
    /// Upper-cased glyph being shown.
    pub last_key: Option<char>,
    pub mascot_visible: bool,
    /// Horizontal mascot offset in pixels (mascot is centred on it). Drawn
    /// against the width at the time of the draw; a later resize leaves it
    /// where it is, so it can sit outside the band of the new width until the
    /// next mascot appears.
    pub mascot_position: i32,
    pub animating: bool,
    pub background_color: &'static str,
    pub text_color: &'static str,
    pub mascot: Mascot,
    pub viewport_width: u32,
    pub is_mobile_layout: bool,
    pub virtual_keyboard_open: bool,
    /// Bumped on every display change; a pending animation reset only applies
    /// while its generation is still current.
    pub animation_generation: u64,
}

impl PresentationState {
    pub fn initial(viewport_width: u32, config: &GameConfig) -> Self {
        Self {
            last_key: None,
            mascot_visible: false,
            mascot_position: (viewport_width / 2) as i32,
            animating: false,
            background_color: INITIAL_BACKGROUND,
            text_color: TEXT_COLORS[0],
            mascot: Mascot::default(),
            viewport_width,
            is_mobile_layout: config.is_mobile_width(viewport_width),
            virtual_keyboard_open: false,
            animation_generation: 0,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.last_key.is_none() && !self.mascot_visible
    }
}

/// Where a key-down came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOrigin {
    /// Physical (or OS-level virtual) keyboard aimed at the page.
    Physical,
    /// Key-down targeted at the hidden mobile input. In the mobile layout only
    /// Enter is acted on; characters arrive through the following `input`
    /// event instead. Outside it the key is treated as physical.
    MobileInput,
}

#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    KeyDown { key: String, origin: KeyOrigin },
    Resize { width: u32 },
    /// Current value of the hidden mobile input after an `input` event. Only
    /// shown in the mobile layout; elsewhere the keydown already was.
    MobileInput { value: String },
    MobileFocus,
    MobileBlur,
    /// Tap or click on the game area.
    SurfaceTap,
    AnimationElapsed { generation: u64 },
}

/// Deferred work the host must carry out after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Dispatch `AnimationElapsed { generation }` after `after_ms`.
    ResetAnimation { generation: u64, after_ms: u32 },
    /// Empty the hidden input after `after_ms`.
    ClearMobileInput { after_ms: u32 },
    /// Focus the hidden input, raising the on-screen keyboard.
    FocusMobileInput,
    /// Drop focus from the hidden input after leaving the mobile layout.
    BlurMobileInput,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub state: PresentationState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn unchanged(state: &PresentationState) -> Self {
        Self {
            state: *state,
            effects: Vec::new(),
        }
    }
}

pub fn reduce(
    state: &PresentationState,
    event: &UiEvent,
    config: &GameConfig,
    rng: &mut dyn RandomSource,
) -> Transition {
    match event {
        UiEvent::KeyDown { key, origin } => {
            // Outside the mobile layout the hidden input has no role; its keys count as physical.
            if *origin == KeyOrigin::MobileInput && state.is_mobile_layout && key != "Enter" {
                return Transition::unchanged(state);
            }
            show_key(state, key, config, rng)
        }
        UiEvent::Resize { width } => {
            let mut next = *state;
            next.viewport_width = *width;
            next.is_mobile_layout = config.is_mobile_width(*width);
            let mut effects = Vec::new();
            if state.is_mobile_layout && !next.is_mobile_layout && state.virtual_keyboard_open {
                effects.push(Effect::BlurMobileInput);
            }
            Transition {
                state: next,
                effects,
            }
        }
        UiEvent::MobileInput { value } => {
            let Some(last) = value.chars().last() else {
                return Transition::unchanged(state);
            };
            let clear = Effect::ClearMobileInput {
                after_ms: config.input_clear_ms,
            };
            if !state.is_mobile_layout {
                // the matching keydown was already shown
                return Transition {
                    state: *state,
                    effects: vec![clear],
                };
            }
            let mut buf = [0u8; 4];
            let mut t = show_key(state, last.encode_utf8(&mut buf), config, rng);
            t.effects.push(clear);
            t
        }
        UiEvent::MobileFocus => set_keyboard_open(state, true),
        UiEvent::MobileBlur => set_keyboard_open(state, false),
        UiEvent::SurfaceTap => {
            if state.is_mobile_layout {
                Transition {
                    state: *state,
                    effects: vec![Effect::FocusMobileInput],
                }
            } else {
                show_mascot(state, config, rng)
            }
        }
        UiEvent::AnimationElapsed { generation } => {
            if *generation != state.animation_generation || !state.animating {
                return Transition::unchanged(state);
            }
            let mut next = *state;
            next.animating = false;
            Transition {
                state: next,
                effects: Vec::new(),
            }
        }
    }
}

fn show_key(
    state: &PresentationState,
    key: &str,
    config: &GameConfig,
    rng: &mut dyn RandomSource,
) -> Transition {
    match classify(key) {
        KeyClass::Glyph(c) => show_glyph(state, c, config, rng),
        // Enter, Space and every other key all land here.
        KeyClass::Other => show_mascot(state, config, rng),
    }
}

fn show_glyph(
    state: &PresentationState,
    glyph: char,
    config: &GameConfig,
    rng: &mut dyn RandomSource,
) -> Transition {
    let mut next = *state;
    next.background_color = pick_background(rng);
    next.text_color = pick_text_color(rng);
    next.last_key = Some(glyph);
    next.mascot_visible = false;
    start_animation(next, config)
}

fn show_mascot(
    state: &PresentationState,
    config: &GameConfig,
    rng: &mut dyn RandomSource,
) -> Transition {
    let mut next = *state;
    next.background_color = pick_background(rng);
    next.last_key = None;
    next.mascot_visible = true;
    next.mascot = pick_mascot(rng);
    next.mascot_position = mascot_position(state.viewport_width, config, rng);
    start_animation(next, config)
}

fn start_animation(mut next: PresentationState, config: &GameConfig) -> Transition {
    next.animating = true;
    next.animation_generation = next.animation_generation.wrapping_add(1);
    Transition {
        effects: vec![Effect::ResetAnimation {
            generation: next.animation_generation,
            after_ms: config.animation_ms,
        }],
        state: next,
    }
}

fn set_keyboard_open(state: &PresentationState, open: bool) -> Transition {
    let mut next = *state;
    next.virtual_keyboard_open = open;
    Transition {
        state: next,
        effects: Vec::new(),
    }
}
