//! Runtime tuning knobs. Everything has a default matching the shipped toy, so
//! `start_game()` needs no configuration at all.

use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Id of the element the toy mounts into (created under `<body>` if missing).
    pub root_id: String,
    /// How long the scale-up animation flag stays set.
    pub animation_ms: u32,
    /// Delay before the hidden mobile input is emptied after each character.
    pub input_clear_ms: u32,
    /// Viewports narrower than this use the mobile layout.
    pub mobile_breakpoint_px: u32,
    /// Upper bound on the mascot's horizontal spread band.
    pub max_spread_px: f64,
    /// Fraction of the viewport width the spread band may cover.
    pub spread_ratio: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            root_id: "app".to_string(),
            animation_ms: 500,
            input_clear_ms: 10,
            mobile_breakpoint_px: 768,
            max_spread_px: 300.0,
            spread_ratio: 0.4,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root_id.trim().is_empty() {
            return Err(ConfigError::EmptyRootId);
        }
        if self.animation_ms == 0 {
            return Err(ConfigError::ZeroAnimation);
        }
        if self.mobile_breakpoint_px == 0 {
            return Err(ConfigError::ZeroBreakpoint);
        }
        if !self.max_spread_px.is_finite() || self.max_spread_px < 0.0 {
            return Err(ConfigError::InvalidSpread(self.max_spread_px));
        }
        if !(self.spread_ratio > 0.0 && self.spread_ratio <= 1.0) {
            return Err(ConfigError::InvalidSpreadRatio(self.spread_ratio));
        }
        Ok(())
    }

    pub fn is_mobile_width(&self, width: u32) -> bool {
        width < self.mobile_breakpoint_px
    }

    /// Half-width of the band around the viewport centre the mascot may land in:
    /// `min(max_spread, width * ratio) / 2`.
    pub fn spread_bound(&self, width: u32) -> f64 {
        self.max_spread_px.min(width as f64 * self.spread_ratio) / 2.0
    }

    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
