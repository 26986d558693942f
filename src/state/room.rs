use std::rc::Rc;
use yew::Reducible;

use crate::config::MovementConfig;
use crate::model::Position;

use super::held_keys::HeldKeys;
use super::movement;

/// Everything the room's simulation owns. Position and held keys are only
/// changed through [`RoomAction`]s, and only while the room is active.
#[derive(Clone, Debug, PartialEq)]
pub struct RoomState {
    position: Position,
    held: HeldKeys,
    active: bool,
    config: MovementConfig,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoomAction {
    Activate,
    KeyDown(String),
    KeyUp(String),
    /// Window lost focus; release events may never arrive.
    ReleaseAll,
    Tick, // one fixed period elapsed
    Deactivate,
}

impl RoomState {
    pub fn new(config: MovementConfig) -> Self {
        Self {
            position: config.spawn,
            held: HeldKeys::default(),
            active: false,
            config,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    #[cfg(test)]
    pub fn held(&self) -> &HeldKeys {
        &self.held
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn config(&self) -> &MovementConfig {
        &self.config
    }
}

impl Default for RoomState {
    fn default() -> Self {
        Self::new(MovementConfig::default())
    }
}

impl Reducible for RoomState {
    type Action = RoomAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use RoomAction::*;
        if !self.active && action != Activate {
            return self;
        }
        let mut new = (*self).clone();
        match action {
            Activate => new.active = true,
            KeyDown(raw) => {
                new.held.press(&raw);
            }
            KeyUp(raw) => {
                new.held.release(&raw);
            }
            ReleaseAll => {
                new.held.release_all();
            }
            Tick => new.position = movement::tick(self.position, &self.held, &self.config),
            Deactivate => {
                new.active = false;
                new.held.release_all();
            }
        }
        if new == *self {
            return self;
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OppositeKeys;

    fn active_room() -> Rc<RoomState> {
        Rc::new(RoomState::default()).reduce(RoomAction::Activate)
    }

    fn apply(state: Rc<RoomState>, actions: impl IntoIterator<Item = RoomAction>) -> Rc<RoomState> {
        actions.into_iter().fold(state, |s, a| s.reduce(a))
    }

    fn key_down(k: &str) -> RoomAction {
        RoomAction::KeyDown(k.to_string())
    }

    fn key_up(k: &str) -> RoomAction {
        RoomAction::KeyUp(k.to_string())
    }

    #[test]
    fn spawns_inactive_at_the_configured_point() {
        let s = RoomState::default();
        assert!(!s.is_active());
        assert_eq!(s.position(), Position::new(400.0, 300.0));
        assert!(s.held().is_empty());
    }

    #[test]
    fn key_events_before_a_tick_are_visible_to_it() {
        let s = apply(active_room(), [key_down("W"), key_down("a"), RoomAction::Tick]);
        assert_eq!(s.position(), Position::new(395.0, 295.0));
    }

    #[test]
    fn tick_reads_the_latest_keys_not_a_snapshot() {
        let s = apply(active_room(), [key_down("d"), RoomAction::Tick, key_up("D"), key_down("s"), RoomAction::Tick]);
        assert_eq!(s.position(), Position::new(405.0, 305.0));
    }

    #[test]
    fn releasing_everything_stops_movement() {
        let s = apply(active_room(), [key_down("d"), RoomAction::Tick, RoomAction::Tick, key_up("d")]);
        let resting = s.position();
        assert_eq!(resting, Position::new(410.0, 300.0));
        let after = apply(s.clone(), [RoomAction::Tick, RoomAction::Tick, RoomAction::Tick]);
        assert_eq!(after.position(), resting);
        assert!(Rc::ptr_eq(&s, &after));
    }

    #[test]
    fn focus_loss_releases_held_keys() {
        let s = apply(active_room(), [key_down("ArrowLeft"), key_down("w"), RoomAction::ReleaseAll, RoomAction::Tick]);
        assert!(s.held().is_empty());
        assert_eq!(s.position(), Position::new(400.0, 300.0));
    }

    #[test]
    fn no_op_actions_keep_the_same_state() {
        let s = apply(active_room(), [key_down("w")]);
        let repeat = s.clone().reduce(key_down("W"));
        assert!(Rc::ptr_eq(&s, &repeat));
        let unknown = s.clone().reduce(key_up("Escape"));
        assert!(Rc::ptr_eq(&s, &unknown));
    }

    #[test]
    fn nothing_moves_before_activation() {
        let s = apply(Rc::new(RoomState::default()), [key_down("d"), RoomAction::Tick]);
        assert!(s.held().is_empty());
        assert_eq!(s.position(), Position::new(400.0, 300.0));
    }

    #[test]
    fn deactivation_clears_keys_and_freezes_position() {
        let s = apply(active_room(), [key_down("s"), RoomAction::Tick, RoomAction::Deactivate]);
        assert!(!s.is_active());
        assert!(s.held().is_empty());
        let frozen = s.position();
        // Ticks that were already queued when the room went away.
        let s = apply(s, [RoomAction::Tick, key_down("d"), RoomAction::Tick]);
        assert_eq!(s.position(), frozen);
        assert!(s.held().is_empty());
    }

    #[test]
    fn deactivate_is_idempotent() {
        let once = apply(active_room(), [key_down("a"), RoomAction::Deactivate]);
        let twice = once.clone().reduce(RoomAction::Deactivate);
        assert!(Rc::ptr_eq(&once, &twice));
    }

    #[test]
    fn reactivation_starts_without_stuck_keys() {
        let s = apply(active_room(), [key_down("d"), RoomAction::Deactivate, RoomAction::Activate, RoomAction::Tick]);
        assert!(s.is_active());
        assert_eq!(s.position(), Position::new(400.0, 300.0));
    }

    #[test]
    fn opposite_policy_comes_from_config() {
        let cfg = MovementConfig { opposite_keys: OppositeKeys::Cancel, ..Default::default() };
        let s = Rc::new(RoomState::new(cfg)).reduce(RoomAction::Activate);
        let s = apply(s, [key_down("w"), key_down("s"), RoomAction::Tick]);
        assert_eq!(s.position(), Position::new(400.0, 300.0));

        let s = apply(active_room(), [key_down("w"), key_down("s"), RoomAction::Tick]);
        assert_eq!(s.position(), Position::new(400.0, 305.0));
    }
}
