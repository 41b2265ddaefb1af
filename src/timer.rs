//! One-second countdown interval as an owned, cancellable handle.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::Callback;

/// A running 1 Hz interval. Whoever owns the handle owns the ticks: dropping
/// it clears the interval, so a discarded round cannot tick into the next.
pub struct Countdown {
    id: i32,
    // Keeps the tick closure alive for as long as the interval can fire.
    _tick: Closure<dyn FnMut()>,
}

impl Countdown {
    /// Schedule `on_tick` once per second. Returns `None` outside a browser
    /// window or when the interval cannot be registered.
    pub fn start(on_tick: Callback<()>) -> Option<Self> {
        let window = web_sys::window()?;
        let tick = Closure::wrap(Box::new(move || on_tick.emit(())) as Box<dyn FnMut()>);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                tick.as_ref().unchecked_ref(),
                1000,
            )
            .ok()?;
        Some(Self { id, _tick: tick })
    }

    pub fn cancel(&self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.id);
        }
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.cancel();
    }
}
