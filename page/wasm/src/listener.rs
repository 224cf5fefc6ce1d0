//! Event listeners tied to a Rust owner.
//!
//! An [`EventListener`] registers its closure on construction and
//! unregisters it on drop, so a widget that goes away leaves nothing
//! attached to the page.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget};

use crate::console;

/// A registered DOM event listener, removed when dropped.
pub struct EventListener {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    /// Attach `handler` for `event_type` on `target`.
    ///
    /// Returns `None` (and logs) if the browser refuses the registration.
    pub fn new<F>(target: &EventTarget, event_type: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        match target.add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event_type,
                callback,
            }),
            Err(err) => {
                console::warn(&format!(
                    "could not listen for {event_type}: {}",
                    console::describe(&err)
                ));
                None
            }
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_type,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
