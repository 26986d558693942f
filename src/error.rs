use std::error::Error;
use std::fmt;

use wasm_bindgen::JsValue;

/// Problems with a scene configuration supplied by the host page.
#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    NonFinite(&'static str),
    NegativeMargin(f64),
    NonPositiveStep(f64),
    NonPositiveTick(i32),
    EmptyRoom { width: f64, height: f64, margin: f64 },
    SpawnOutOfBounds { x: f64, y: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "invalid room config: {}", e),
            ConfigError::NonFinite(field) => write!(f, "{} must be a finite number", field),
            ConfigError::NegativeMargin(margin) => {
                write!(f, "margin must not be negative, got {}", margin)
            }
            ConfigError::NonPositiveStep(step) => {
                write!(f, "movement step must be positive, got {}", step)
            }
            ConfigError::NonPositiveTick(ms) => {
                write!(f, "tick period must be positive, got {}ms", ms)
            }
            ConfigError::EmptyRoom { width, height, margin } => write!(
                f,
                "room {}x{} leaves no playable area with margin {}",
                width, height, margin
            ),
            ConfigError::SpawnOutOfBounds { x, y } => {
                write!(f, "spawn ({}, {}) lies outside the playable area", x, y)
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// The host refused something the room needs to run. Fatal to activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivationError {
    NoWindow,
    Listener { event: &'static str, reason: String },
    Timer { reason: String },
}

impl ActivationError {
    pub fn listener(event: &'static str, err: JsValue) -> Self {
        ActivationError::Listener { event, reason: js_reason(&err) }
    }

    pub fn timer(err: JsValue) -> Self {
        ActivationError::Timer { reason: js_reason(&err) }
    }
}

impl fmt::Display for ActivationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivationError::NoWindow => write!(f, "no global window is available"),
            ActivationError::Listener { event, reason } => {
                write!(f, "could not register '{}' listener: {}", event, reason)
            }
            ActivationError::Timer { reason } => {
                write!(f, "could not schedule movement tick: {}", reason)
            }
        }
    }
}

impl Error for ActivationError {}

fn js_reason(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
