pub mod activation_error_overlay;
pub mod app;
pub mod controls_hint;
pub mod furniture;
pub mod room_info;
pub mod studio_room;
