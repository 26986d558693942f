// Live set of movement keys currently held down.
use std::collections::HashSet;

use crate::config::OppositeKeys;
use crate::model::MoveIntent;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveKey {
    W,
    A,
    S,
    D,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl MoveKey {
    #[cfg(test)]
    pub const ALL: [MoveKey; 8] = [
        MoveKey::W,
        MoveKey::A,
        MoveKey::S,
        MoveKey::D,
        MoveKey::ArrowUp,
        MoveKey::ArrowDown,
        MoveKey::ArrowLeft,
        MoveKey::ArrowRight,
    ];

    /// Case-insensitive; `None` for anything outside WASD and the arrows.
    pub fn parse(raw: &str) -> Option<Self> {
        let key = match raw.to_lowercase().as_str() {
            "w" => MoveKey::W,
            "a" => MoveKey::A,
            "s" => MoveKey::S,
            "d" => MoveKey::D,
            "arrowup" => MoveKey::ArrowUp,
            "arrowdown" => MoveKey::ArrowDown,
            "arrowleft" => MoveKey::ArrowLeft,
            "arrowright" => MoveKey::ArrowRight,
            _ => return None,
        };
        Some(key)
    }

    pub fn direction(self) -> Direction {
        match self {
            MoveKey::W | MoveKey::ArrowUp => Direction::Up,
            MoveKey::S | MoveKey::ArrowDown => Direction::Down,
            MoveKey::A | MoveKey::ArrowLeft => Direction::Left,
            MoveKey::D | MoveKey::ArrowRight => Direction::Right,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys {
    keys: HashSet<MoveKey>,
}

impl HeldKeys {
    /// Returns whether membership changed. Repeats and unknown keys do not.
    pub fn press(&mut self, raw: &str) -> bool {
        match MoveKey::parse(raw) {
            Some(key) => self.keys.insert(key),
            None => false,
        }
    }

    pub fn release(&mut self, raw: &str) -> bool {
        match MoveKey::parse(raw) {
            Some(key) => self.keys.remove(&key),
            None => false,
        }
    }

    pub fn release_all(&mut self) -> bool {
        let had_keys = !self.is_empty();
        self.keys.clear();
        had_keys
    }

    #[cfg(test)]
    pub fn contains(&self, key: MoveKey) -> bool {
        self.keys.contains(&key)
    }

    pub fn holding(&self, dir: Direction) -> bool {
        self.keys.iter().any(|k| k.direction() == dir)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn intent(&self, policy: OppositeKeys) -> MoveIntent {
        let axis = |neg: Direction, pos: Direction| -> i8 {
            let (n, p) = (self.holding(neg), self.holding(pos));
            match policy {
                OppositeKeys::LastWins => {
                    if p {
                        1
                    } else if n {
                        -1
                    } else {
                        0
                    }
                }
                OppositeKeys::Cancel => p as i8 - n as i8,
            }
        };
        MoveIntent {
            dx: axis(Direction::Left, Direction::Right),
            dy: axis(Direction::Up, Direction::Down),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(MoveKey::parse("W"), Some(MoveKey::W));
        assert_eq!(MoveKey::parse("ArrowLeft"), Some(MoveKey::ArrowLeft));
        assert_eq!(MoveKey::parse("ARROWDOWN"), Some(MoveKey::ArrowDown));
        assert_eq!(MoveKey::parse("Shift"), None);
        assert_eq!(MoveKey::parse(""), None);
    }

    #[test]
    fn repeat_press_is_idempotent() {
        let mut held = HeldKeys::default();
        assert!(held.press("d"));
        assert!(!held.press("d"));
        assert!(!held.press("D"));
        assert_eq!(held.len(), 1);
        assert!(held.release("D"));
        assert!(held.is_empty());
    }

    #[test]
    fn unknown_and_unmatched_releases_are_ignored() {
        let mut held = HeldKeys::default();
        assert!(!held.press("q"));
        assert!(!held.release("Escape"));
        assert!(!held.release("w"));
        assert!(held.is_empty());
    }

    #[test]
    fn release_all_reports_whether_anything_was_held() {
        let mut held = HeldKeys::default();
        assert!(!held.release_all());
        held.press("w");
        held.press("ArrowRight");
        assert!(held.release_all());
        assert!(held.is_empty());
    }

    #[test]
    fn letters_and_arrows_share_directions() {
        let mut held = HeldKeys::default();
        held.press("ArrowUp");
        assert!(held.holding(Direction::Up));
        assert!(!held.holding(Direction::Down));
        held.press("a");
        assert_eq!(held.intent(OppositeKeys::LastWins), MoveIntent { dx: -1, dy: -1 });
    }

    #[test]
    fn last_wins_policy_prefers_down_and_right() {
        let mut held = HeldKeys::default();
        for k in ["w", "s", "a", "d"] {
            held.press(k);
        }
        assert_eq!(held.intent(OppositeKeys::LastWins), MoveIntent { dx: 1, dy: 1 });
    }

    #[test]
    fn cancel_policy_zeroes_opposed_axes() {
        let mut held = HeldKeys::default();
        held.press("ArrowUp");
        held.press("s");
        held.press("a");
        assert_eq!(held.intent(OppositeKeys::Cancel), MoveIntent { dx: -1, dy: 0 });
    }

    #[derive(Clone, Debug)]
    enum KeyEvent {
        Down(String),
        Up(String),
    }

    fn raw_key() -> impl Strategy<Value = String> {
        let known = prop::sample::select(vec![
            "w", "W", "a", "s", "D", "ArrowUp", "arrowdown", "ArrowLeft", "ARROWRIGHT", "Shift",
        ])
        .prop_map(str::to_string);
        prop_oneof![3 => known, 1 => "[a-z]{1,6}"]
    }

    fn key_event() -> impl Strategy<Value = KeyEvent> {
        prop_oneof![raw_key().prop_map(KeyEvent::Down), raw_key().prop_map(KeyEvent::Up)]
    }

    proptest! {
        #[test]
        fn membership_tracks_pressed_minus_released(events in prop::collection::vec(key_event(), 0..64)) {
            let mut held = HeldKeys::default();
            let mut model: HashSet<String> = HashSet::new();
            for ev in &events {
                match ev {
                    KeyEvent::Down(k) => {
                        held.press(k);
                        model.insert(k.to_lowercase());
                    }
                    KeyEvent::Up(k) => {
                        held.release(k);
                        model.remove(&k.to_lowercase());
                    }
                }
            }
            let expected: HashSet<MoveKey> =
                model.iter().filter_map(|k| MoveKey::parse(k)).collect();
            for key in MoveKey::ALL {
                prop_assert_eq!(held.contains(key), expected.contains(&key));
            }
            prop_assert_eq!(held.len(), expected.len());
        }
    }
}
