use yew::prelude::*;

use crate::config::SceneConfig;
use crate::error::ActivationError;
use crate::lifecycle::RoomListeners;
use crate::state::{RoomAction, RoomState};

use super::{
    activation_error_overlay::ActivationErrorOverlay, controls_hint::ControlsHint,
    furniture::Furniture, room_info::RoomInfo,
};

const ACTOR_SIZE_PX: f64 = 30.0;

#[derive(Properties, PartialEq, Clone)]
pub struct StudioRoomProps {
    pub scene: SceneConfig,
}

#[function_component(StudioRoom)]
pub fn studio_room(props: &StudioRoomProps) -> Html {
    let room = {
        let movement = props.scene.movement.clone();
        use_reducer(move || RoomState::new(movement))
    };
    let activation_error = use_state(|| None::<ActivationError>);

    {
        // Listeners and the tick interval live exactly as long as this component.
        let dispatcher = room.dispatcher();
        let activation_error = activation_error.clone();
        let tick_ms = props.scene.movement.tick_ms;
        use_effect_with((), move |_| {
            let dispatch = Callback::from(move |action: RoomAction| dispatcher.dispatch(action));
            let attached = web_sys::window()
                .ok_or(ActivationError::NoWindow)
                .and_then(|window| RoomListeners::attach(window, dispatch.clone(), tick_ms));
            let listeners = match attached {
                Ok(listeners) => {
                    dispatch.emit(RoomAction::Activate);
                    log::info!("studio room active");
                    Some(listeners)
                }
                Err(e) => {
                    log::error!("studio room failed to activate: {}", e);
                    activation_error.set(Some(e));
                    None
                }
            };
            move || {
                dispatch.emit(RoomAction::Deactivate);
                if let Some(mut listeners) = listeners {
                    listeners.detach();
                }
                log::info!("studio room left");
            }
        });
    }

    let cfg = room.config();
    let pos = room.position();
    let room_style = format!(
        "position:relative; width:{}px; height:{}px; background:#2d333b; border:2px solid #30363d; border-radius:8px; overflow:hidden;",
        cfg.room_width, cfg.room_height
    );
    let actor_style = format!(
        "position:absolute; left:{}px; top:{}px; width:{s}px; height:{s}px; transform:translate(-50%, -50%); border-radius:50%; background:#58a6ff; box-shadow:0 0 0 2px #0d1117;",
        pos.x,
        pos.y,
        s = ACTOR_SIZE_PX
    );
    let room_class = if room.is_active() { "room active" } else { "room" };

    html! {
        <div style="position:relative; display:flex; flex-direction:column; align-items:center; gap:12px; padding:16px;">
            <RoomInfo
                studio_name={props.scene.studio_name.clone()}
                player_name={props.scene.player_name.clone()}
            />
            <div class={room_class} style={room_style}>
                <Furniture />
                <div class="player" style={actor_style}></div>
            </div>
            <ControlsHint />
            <ActivationErrorOverlay error={(*activation_error).clone()} />
        </div>
    }
}
