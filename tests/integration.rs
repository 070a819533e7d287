// Integration tests (native) for the `toddler-keys` crate.
// These drive the pure reducer and renderer end to end so they run under
// `cargo test` on the host without a browser.

use std::collections::VecDeque;

use toddler_keys::render::{self, render};
use toddler_keys::{
    Effect, GameConfig, KeyOrigin, Mascot, PresentationState, RandomSource, UiEvent, reduce,
};

/// Replays a fixed list of answers (each clamped into range), then repeats the last.
struct Scripted {
    answers: VecDeque<usize>,
    last: usize,
}

impl Scripted {
    fn new(answers: &[usize]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            last: 0,
        }
    }
}

impl RandomSource for Scripted {
    fn next_index(&mut self, len: usize) -> usize {
        if let Some(a) = self.answers.pop_front() {
            self.last = a;
        }
        if len == 0 { 0 } else { self.last.min(len - 1) }
    }
}

fn key(k: &str) -> UiEvent {
    UiEvent::KeyDown {
        key: k.to_string(),
        origin: KeyOrigin::Physical,
    }
}

#[test]
fn press_a_then_question_mark_then_shrink_then_type_on_mobile() {
    let cfg = GameConfig::default();
    let mut rng = toddler_keys::Xorshift64::new(2024);
    let s0 = PresentationState::initial(1200, &cfg);

    // "a" shows a big A and nothing else
    let t = reduce(&s0, &key("a"), &cfg, &mut rng);
    let frame = render(&t.state);
    assert_eq!(frame.glyph.as_ref().map(|g| g.text.as_str()), Some("A"));
    assert!(frame.mascot.is_none());

    // "?" swaps the glyph for a mascot inside the band around the centre
    let t = reduce(&t.state, &key("?"), &cfg, &mut rng);
    assert_eq!(t.state.last_key, None);
    let mascot = render(&t.state).mascot.expect("mascot shown");
    let bound = cfg.spread_bound(1200);
    assert!((mascot.left_px as f64 - 600.0).abs() <= bound);
    assert!(render(&t.state).glyph.is_none());

    // shrinking the window flips to the mobile layout and shows the keyboard affordance
    let t = reduce(&t.state, &UiEvent::Resize { width: 500 }, &cfg, &mut rng);
    assert!(t.state.is_mobile_layout);
    assert!(t.state.mascot_visible, "resize leaves the display alone");
    let panel = render(&t.state).mobile.expect("mobile panel");
    assert_eq!(panel.button_label, render::KEYBOARD_BUTTON_LABEL);

    // typing "x" into the hidden input behaves like a physical "x", then clears
    let typed = reduce(&t.state, &UiEvent::MobileInput { value: "x".into() }, &cfg, &mut rng);
    let pressed = reduce(&t.state, &key("x"), &cfg, &mut rng);
    assert_eq!(typed.state.last_key, Some('X'));
    assert_eq!(typed.state.last_key, pressed.state.last_key);
    assert_eq!(typed.state.mascot_visible, pressed.state.mascot_visible);
    assert!(typed.effects.contains(&Effect::ClearMobileInput { after_ms: 10 }));
}

#[test]
fn scripted_source_controls_every_draw() {
    let cfg = GameConfig::default();
    let s0 = PresentationState::initial(1000, &cfg);

    // glyph: background index, then text colour index
    let mut rng = Scripted::new(&[3, 5]);
    let t = reduce(&s0, &key("7"), &cfg, &mut rng);
    assert_eq!(t.state.background_color, toddler_keys::BACKGROUND_COLORS[3]);
    assert_eq!(t.state.text_color, toddler_keys::TEXT_COLORS[5]);

    // mascot: background, mascot, position offset into the band
    let mut rng = Scripted::new(&[0, 9, 0]);
    let t = reduce(&s0, &key("Tab"), &cfg, &mut rng);
    assert_eq!(t.state.mascot, Mascot::ALL[9]);
    assert_eq!(t.state.mascot_position, 350);
}

#[test]
fn animation_flag_clears_once_per_latest_event() {
    let cfg = GameConfig::default();
    let mut rng = toddler_keys::Xorshift64::new(5);
    let mut s = PresentationState::initial(900, &cfg);
    let mut pending = Vec::new();
    for k in ["a", "b", "!"] {
        let t = reduce(&s, &key(k), &cfg, &mut rng);
        s = t.state;
        for e in t.effects {
            if let Effect::ResetAnimation { generation, after_ms } = e {
                assert_eq!(after_ms, 500);
                pending.push(generation);
            }
        }
    }
    assert_eq!(pending, vec![1, 2, 3]);
    // timers fire in order; only the newest one clears the flag
    let mut cleared = 0;
    for generation in pending {
        let t = reduce(&s, &UiEvent::AnimationElapsed { generation }, &cfg, &mut rng);
        if s.animating && !t.state.animating {
            cleared += 1;
        }
        s = t.state;
    }
    assert_eq!(cleared, 1);
    assert!(!s.animating);
    assert!(s.mascot_visible);
}

#[test]
fn glyph_and_mascot_never_coexist() {
    let cfg = GameConfig::default();
    let mut rng = toddler_keys::Xorshift64::new(77);
    let mut s = PresentationState::initial(640, &cfg);
    let events = [
        key("z"),
        key("Escape"),
        UiEvent::SurfaceTap,
        UiEvent::MobileFocus,
        UiEvent::MobileInput { value: "9".into() },
        UiEvent::Resize { width: 1280 },
        UiEvent::SurfaceTap,
        key("Q"),
        UiEvent::MobileBlur,
        UiEvent::KeyDown { key: "Enter".into(), origin: KeyOrigin::MobileInput },
    ];
    for e in events.iter().cycle().take(200) {
        s = reduce(&s, e, &cfg, &mut rng).state;
        assert!(!(s.last_key.is_some() && s.mascot_visible), "after {:?}: {:?}", e, s);
        let bound = cfg.spread_bound(s.viewport_width);
        if s.mascot_visible {
            // position is drawn against the width at the time of the draw, so
            // only check it right after a mascot draw
            if !matches!(e, UiEvent::Resize { .. }) {
                let center = s.viewport_width as f64 / 2.0;
                assert!((s.mascot_position as f64 - center).abs() <= bound);
            }
        }
    }
}

#[test]
fn classifier_export_matches_module() {
    for k in ["a", "Z", "0", "?", "Enter", "", "é"] {
        assert_eq!(toddler_keys::is_alphanumeric_key(k), toddler_keys::is_alphanumeric(k));
    }
}
