use super::studio_room::StudioRoom;
use crate::config::SceneConfig;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    // Read once; the labels and tuning are fixed for the lifetime of the room.
    let scene = use_state(SceneConfig::from_document);
    html! {
        <div id="root" style="min-height:100vh; background:#0d1117; color:#e6edf3; font-family:sans-serif;">
            <StudioRoom scene={(*scene).clone()} />
        </div>
    }
}
