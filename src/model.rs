//! Core data models for the studio room.
//! Coordinates are logical room pixels with the origin at the top-left.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(400.0, 300.0)
    }
}

/// Closed rectangle the actor is allowed to occupy.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn contains(&self, p: Position) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }
}

/// Per-axis direction derived from the held keys each tick; never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveIntent {
    /// -1 left, 0 none, 1 right.
    pub dx: i8,
    /// -1 up, 0 none, 1 down.
    pub dy: i8,
}

impl MoveIntent {
    pub const IDLE: MoveIntent = MoveIntent { dx: 0, dy: 0 };

    pub fn is_idle(&self) -> bool {
        *self == Self::IDLE
    }
}
