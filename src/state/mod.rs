pub mod held_keys;
pub mod movement;
pub mod room;

pub use held_keys::MoveKey;
pub use room::{RoomAction, RoomState};
