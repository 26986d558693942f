use crate::error::ActivationError;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ActivationErrorOverlayProps {
    pub error: Option<ActivationError>,
}

#[function_component]
pub fn ActivationErrorOverlay(props: &ActivationErrorOverlayProps) -> Html {
    let Some(error) = &props.error else {
        return html! {};
    };
    html! {
        <div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.85); border:2px solid #f85149; padding:24px 32px; border-radius:12px; text-align:center; min-width:320px;">
            <h2 style="margin:0 0 12px 0; color:#f85149;">{"Room unavailable"}</h2>
            <p style="margin:4px 0;">{ error.to_string() }</p>
            <p style="margin:4px 0; font-size:12px; opacity:0.7;">{"Keyboard movement could not be started. Reload the page to try again."}</p>
        </div>
    }
}
