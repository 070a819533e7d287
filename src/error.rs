//! Error types surfaced at the wasm boundary.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Invalid `GameConfig` values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("root element id must not be empty")]
    EmptyRootId,

    #[error("animation duration must be greater than zero")]
    ZeroAnimation,

    #[error("mobile breakpoint must be greater than zero")]
    ZeroBreakpoint,

    #[error("max spread {0} must be a finite, non-negative pixel count")]
    InvalidSpread(f64),

    #[error("spread ratio {0} must lie in (0, 1]")]
    InvalidSpreadRatio(f64),

    #[error("config is not valid JSON: {0}")]
    Json(String),
}

/// Failures while mounting the toy into the page.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MountError {
    #[error("no window")]
    NoWindow,

    #[error("no document")]
    NoDocument,

    #[error("no document body")]
    NoBody,

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A DOM call threw; carries the debug rendering of the JS exception.
    #[error("dom error: {0}")]
    Dom(String),
}

impl From<JsValue> for MountError {
    fn from(value: JsValue) -> Self {
        MountError::Dom(format!("{:?}", value))
    }
}

impl From<MountError> for JsValue {
    fn from(err: MountError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
