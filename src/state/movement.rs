use crate::config::MovementConfig;
use crate::model::{Bounds, MoveIntent, Position};

use super::held_keys::HeldKeys;

/// One fixed-period movement step from the keys held right now.
pub fn tick(prev: Position, held: &HeldKeys, cfg: &MovementConfig) -> Position {
    advance(prev, held.intent(cfg.opposite_keys), cfg.step, cfg.bounds())
}

/// Axes move independently by a full `step`, so diagonals travel faster than straight lines.
/// An axis with no intent is left untouched.
pub fn advance(prev: Position, intent: MoveIntent, step: f64, bounds: Bounds) -> Position {
    if intent.is_idle() {
        return prev;
    }
    let mut next = prev;
    if intent.dy < 0 {
        next.y = (prev.y - step).max(bounds.min_y);
    } else if intent.dy > 0 {
        next.y = (prev.y + step).min(bounds.max_y);
    }
    if intent.dx < 0 {
        next.x = (prev.x - step).max(bounds.min_x);
    } else if intent.dx > 0 {
        next.x = (prev.x + step).min(bounds.max_x);
    }
    next
}
