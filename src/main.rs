mod components;
mod config;
mod error;
mod lifecycle;
mod model;
mod state;

use log::Level;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    let _ = console_log::init_with_level(level);
    yew::Renderer::<components::app::App>::new().render();
}
