use yew::prelude::*;

#[function_component]
pub fn ControlsHint() -> Html {
    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:6px 12px; font-size:12px; opacity:0.8;">
            {"Use WASD or Arrow Keys to move"}
        </div>
    }
}
