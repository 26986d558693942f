use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, KeyboardEvent, Window};
use yew::Callback;

use crate::error::ActivationError;
use crate::state::{MoveKey, RoomAction};

/// Where the room hangs its global listeners and tick timer.
pub trait RoomHost {
    type Listener;
    type Interval;

    fn add_listener(
        &mut self,
        event: &'static str,
        handler: Box<dyn FnMut(Event)>,
    ) -> Result<Self::Listener, ActivationError>;
    fn remove_listener(&mut self, event: &'static str, listener: Self::Listener);
    fn start_interval(
        &mut self,
        period_ms: i32,
        tick: Box<dyn FnMut()>,
    ) -> Result<Self::Interval, ActivationError>;
    fn stop_interval(&mut self, interval: Self::Interval);
}

impl RoomHost for Window {
    type Listener = Closure<dyn FnMut(Event)>;
    type Interval = (i32, Closure<dyn FnMut()>);

    fn add_listener(
        &mut self,
        event: &'static str,
        handler: Box<dyn FnMut(Event)>,
    ) -> Result<Self::Listener, ActivationError> {
        let cb = Closure::wrap(handler);
        self.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
            .map_err(|e| ActivationError::listener(event, e))?;
        Ok(cb)
    }

    fn remove_listener(&mut self, event: &'static str, listener: Self::Listener) {
        let _ = self.remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
    }

    fn start_interval(
        &mut self,
        period_ms: i32,
        tick: Box<dyn FnMut()>,
    ) -> Result<Self::Interval, ActivationError> {
        let cb = Closure::wrap(tick);
        let id = self
            .set_interval_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), period_ms)
            .map_err(ActivationError::timer)?;
        Ok((id, cb))
    }

    fn stop_interval(&mut self, interval: Self::Interval) {
        let (id, _tick) = interval;
        self.clear_interval_with_handle(id);
    }
}

/// Global key/blur listeners plus the movement interval for one mounted room.
/// Everything acquired is released by [`RoomListeners::detach`] or on drop,
/// including after a failed [`RoomListeners::attach`].
pub struct RoomListeners<H: RoomHost = Window> {
    host: H,
    listeners: Vec<(&'static str, H::Listener)>,
    interval: Option<H::Interval>,
}

impl<H: RoomHost> RoomListeners<H> {
    pub fn attach(host: H, dispatch: Callback<RoomAction>, tick_ms: i32) -> Result<Self, ActivationError> {
        let mut guard = RoomListeners { host, listeners: Vec::new(), interval: None };

        let down = dispatch.clone();
        guard.listen("keydown", move |e: Event| {
            let Some(e) = e.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let key = e.key();
            let modified = e.ctrl_key() || e.meta_key() || e.alt_key();
            if claims_key_press(&key, modified) {
                e.prevent_default();
                down.emit(RoomAction::KeyDown(key));
            }
        })?;
        // Releases always go through, even with a modifier now held.
        let up = dispatch.clone();
        guard.listen("keyup", move |e: Event| {
            if let Some(e) = e.dyn_ref::<KeyboardEvent>() {
                up.emit(RoomAction::KeyUp(e.key()));
            }
        })?;
        let blur = dispatch.clone();
        guard.listen("blur", move |_e: Event| blur.emit(RoomAction::ReleaseAll))?;
        let tick = guard
            .host
            .start_interval(tick_ms, Box::new(move || dispatch.emit(RoomAction::Tick)))?;
        guard.interval = Some(tick);

        log::debug!("room listeners attached, tick every {}ms", tick_ms);
        Ok(guard)
    }

    fn listen(&mut self, event: &'static str, handler: impl FnMut(Event) + 'static) -> Result<(), ActivationError> {
        let listener = self.host.add_listener(event, Box::new(handler))?;
        self.listeners.push((event, listener));
        Ok(())
    }

    /// Safe to call more than once.
    pub fn detach(&mut self) {
        if self.interval.is_none() && self.listeners.is_empty() {
            return;
        }
        if let Some(tick) = self.interval.take() {
            self.host.stop_interval(tick);
        }
        for (event, listener) in self.listeners.drain(..) {
            self.host.remove_listener(event, listener);
        }
        log::debug!("room listeners detached");
    }
}

impl<H: RoomHost> Drop for RoomListeners<H> {
    fn drop(&mut self) {
        self.detach();
    }
}

// A plain movement key press, claimed so arrow keys do not scroll the page.
// Chorded presses (Ctrl+D, Cmd+S, ...) stay with the browser.
fn claims_key_press(key: &str, modified: bool) -> bool {
    !modified && MoveKey::parse(key).is_some()
}
