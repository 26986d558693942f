//! Room geometry, movement tuning and the scene labels handed in by the host page.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::{Bounds, Position};

/// What happens on an axis when both of its opposing keys are held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OppositeKeys {
    /// Down beats up and right beats left.
    #[default]
    LastWins,
    /// The axis does not move.
    Cancel,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    pub room_width: f64,
    pub room_height: f64,
    /// Distance from every wall the actor's anchor must keep.
    pub margin: f64,
    /// Units moved per tick on each active axis.
    pub step: f64,
    pub tick_ms: i32,
    pub spawn: Position,
    pub opposite_keys: OppositeKeys,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            room_width: 800.0,
            room_height: 600.0,
            margin: 20.0,
            step: 5.0,
            tick_ms: 16,
            spawn: Position::default(),
            opposite_keys: OppositeKeys::LastWins,
        }
    }
}

impl MovementConfig {
    pub fn bounds(&self) -> Bounds {
        Bounds {
            min_x: self.margin,
            max_x: self.room_width - self.margin,
            min_y: self.margin,
            max_y: self.room_height - self.margin,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let numbers = [
            ("room_width", self.room_width),
            ("room_height", self.room_height),
            ("margin", self.margin),
            ("step", self.step),
            ("spawn.x", self.spawn.x),
            ("spawn.y", self.spawn.y),
        ];
        if let Some((field, _)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite(*field));
        }
        if self.margin < 0.0 {
            return Err(ConfigError::NegativeMargin(self.margin));
        }
        if self.step <= 0.0 {
            return Err(ConfigError::NonPositiveStep(self.step));
        }
        if self.tick_ms <= 0 {
            return Err(ConfigError::NonPositiveTick(self.tick_ms));
        }
        let bounds = self.bounds();
        if bounds.is_empty() {
            return Err(ConfigError::EmptyRoom {
                width: self.room_width,
                height: self.room_height,
                margin: self.margin,
            });
        }
        if !bounds.contains(self.spawn) {
            return Err(ConfigError::SpawnOutOfBounds { x: self.spawn.x, y: self.spawn.y });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub studio_name: String,
    pub player_name: String,
    pub movement: MovementConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            studio_name: "My Studio".into(),
            player_name: "Player".into(),
            movement: MovementConfig::default(),
        }
    }
}

impl SceneConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: SceneConfig = serde_json::from_str(raw)?;
        cfg.movement.validate()?;
        Ok(cfg)
    }

    /// Reads the `data-room` attribute of the document body, falling back to defaults.
    pub fn from_document() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .and_then(|b| b.get_attribute("data-room"));
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("{}; using default room", e);
                Self::default()
            }
        }
    }
}
