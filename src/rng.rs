//! Random selectors. Every draw goes through [`RandomSource`] so the reducer can
//! be driven by a scripted source in tests and by [`Xorshift64`] in the browser.

use crate::config::GameConfig;
use crate::palette::{BACKGROUND_COLORS, Mascot, TEXT_COLORS};

/// Uniform index selection.
pub trait RandomSource {
    /// Index in `[0, len)`; `0` when `len == 0`.
    fn next_index(&mut self, len: usize) -> usize;
}

/// Marsaglia xorshift64 (13, 7, 17). Not cryptographic; plenty for picking buses.
#[derive(Debug, Clone)]
pub struct Xorshift64 {
    state: u64,
}

/// Replaces a zero seed, which would stay zero forever.
const ZERO_SEED_REPLACEMENT: u64 = 0x9E37_79B9_7F4A_7C15;

impl Xorshift64 {
    pub fn new(seed: u64) -> Self {
        let state = match seed {
            0 => ZERO_SEED_REPLACEMENT,
            s => s,
        };
        Self { state }
    }

    /// Seeded from OS / browser entropy when the `rng` feature is on, otherwise
    /// from the clock.
    pub fn from_entropy() -> Self {
        Self::new(entropy_seed())
    }

    fn advance(&mut self) -> u64 {
        let s = self.state;
        let s = s ^ (s << 13);
        let s = s ^ (s >> 7);
        self.state = s ^ (s << 17);
        self.state
    }
}

impl RandomSource for Xorshift64 {
    fn next_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (self.advance() % len as u64) as usize
    }
}

#[cfg(feature = "rng")]
fn entropy_seed() -> u64 {
    let mut buf = [0u8; 8];
    match getrandom::getrandom(&mut buf) {
        Ok(()) => u64::from_le_bytes(buf),
        Err(e) => {
            log::warn!("getrandom failed ({}), seeding from clock", e);
            clock_seed()
        }
    }
}

#[cfg(not(feature = "rng"))]
fn entropy_seed() -> u64 {
    clock_seed()
}

#[cfg(target_arch = "wasm32")]
fn clock_seed() -> u64 {
    let now = web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0);
    now.to_bits()
        .wrapping_mul(1664525)
        .wrapping_add(1013904223)
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

pub fn pick_background(rng: &mut dyn RandomSource) -> &'static str {
    BACKGROUND_COLORS[rng.next_index(BACKGROUND_COLORS.len())]
}

pub fn pick_text_color(rng: &mut dyn RandomSource) -> &'static str {
    TEXT_COLORS[rng.next_index(TEXT_COLORS.len())]
}

pub fn pick_mascot(rng: &mut dyn RandomSource) -> Mascot {
    Mascot::ALL[rng.next_index(Mascot::ALL.len())]
}

/// Horizontal mascot offset in pixels, uniform over the integers inside
/// `[width/2 - bound, width/2 + bound]` with `bound = config.spread_bound(width)`.
pub fn mascot_position(width: u32, config: &GameConfig, rng: &mut dyn RandomSource) -> i32 {
    let center = width as f64 / 2.0;
    let bound = config.spread_bound(width);
    let lo = (center - bound).ceil() as i64;
    let hi = (center + bound).floor() as i64;
    if hi < lo {
        // band narrower than one pixel and straddling no integer
        return center.floor() as i32;
    }
    let span = (hi - lo + 1) as usize;
    (lo + rng.next_index(span) as i64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always answers the same fraction of `len`.
    struct Fixed(f64);

    impl RandomSource for Fixed {
        fn next_index(&mut self, len: usize) -> usize {
            if len == 0 {
                0
            } else {
                ((len as f64 * self.0) as usize).min(len - 1)
            }
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Xorshift64::new(42);
        let mut b = Xorshift64::new(42);
        for _ in 0..10 {
            assert_eq!(a.next_index(1000), b.next_index(1000));
        }
    }

    #[test]
    fn test_zero_seed_and_zero_len_handled() {
        let mut rng = Xorshift64::new(0);
        assert_eq!(rng.next_index(0), 0);
        assert!(rng.next_index(7) < 7);
    }

    #[test]
    fn test_covers_every_mascot() {
        let mut rng = Xorshift64::new(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..2_000 {
            seen.insert(pick_mascot(&mut rng));
        }
        assert_eq!(seen.len(), Mascot::ALL.len());
    }

    #[test]
    fn test_position_extremes_hit_band_edges() {
        let cfg = GameConfig::default();
        // width 500: centre 250, bound 100
        assert_eq!(mascot_position(500, &cfg, &mut Fixed(0.0)), 150);
        assert_eq!(mascot_position(500, &cfg, &mut Fixed(0.999)), 350);
        // width 1000: bound capped at 150
        assert_eq!(mascot_position(1000, &cfg, &mut Fixed(0.0)), 350);
        assert_eq!(mascot_position(1000, &cfg, &mut Fixed(0.999)), 650);
    }

    #[test]
    fn test_position_stays_in_band_for_many_widths() {
        let cfg = GameConfig::default();
        let mut rng = Xorshift64::new(99);
        for width in [0u32, 1, 2, 3, 10, 320, 375, 767, 768, 1023, 1366, 2560] {
            let center = width as f64 / 2.0;
            let bound = cfg.spread_bound(width);
            for _ in 0..200 {
                let p = mascot_position(width, &cfg, &mut rng) as f64;
                if width > 1 {
                    assert!(
                        p >= center - bound && p <= center + bound,
                        "width {} produced {} outside band",
                        width,
                        p
                    );
                }
            }
        }
    }

    #[test]
    fn test_selectors_use_the_fixed_sets() {
        let mut rng = Xorshift64::new(3);
        for _ in 0..50 {
            assert!(BACKGROUND_COLORS.contains(&pick_background(&mut rng)));
            assert!(TEXT_COLORS.contains(&pick_text_color(&mut rng)));
        }
    }
}
