//! Window event listeners tied to the lifetime of a value.

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::Window;

/// A callback registered on `window`. Dropping it unregisters the callback.
pub struct WindowListener {
	window: Window,
	event: &'static str,
	callback: Closure<dyn FnMut()>,
}

impl WindowListener {
	/// Registers `f` for `event`. Returns `None` outside a browser or if registration fails.
	pub fn new(event: &'static str, f: impl FnMut() + 'static) -> Option<Self> {
		let window = web_sys::window()?;
		let callback = Closure::<dyn FnMut()>::new(f);
		if let Err(err) =
			window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
		{
			warn!("failed to listen for {event}: {:?}", err);
			return None;
		}
		Some(Self {
			window,
			event,
			callback,
		})
	}
}

impl Drop for WindowListener {
	fn drop(&mut self) {
		if let Err(err) = self
			.window
			.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
		{
			warn!("failed to stop listening for {}: {:?}", self.event, err);
		}
	}
}
