use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RoomInfoProps {
    pub studio_name: AttrValue,
    pub player_name: AttrValue,
}

#[function_component]
pub fn RoomInfo(props: &RoomInfoProps) -> Html {
    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:230px; text-align:center;">
            <h2 style="margin:0 0 4px 0; color:#58a6ff;">{ props.studio_name.clone() }</h2>
            <p style="margin:0; font-size:14px; opacity:0.85;">{ format!("Player: {}", props.player_name) }</p>
        </div>
    }
}
