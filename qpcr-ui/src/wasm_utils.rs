//! WASM utilities for browser interop
//!
//! # Event Listener Cleanup Pattern
//!
//! A JavaScript listener backed by a Rust `Closure` must not outlive the
//! closure. Rather than `closure.forget()`, which leaks and leaves the
//! listener attached forever, the closure is stored in a guard whose `Drop`
//! removes the listener:
//!
//! ```ignore
//! // Listener is attached when EventListener is created
//! let listener = EventListener::new(&button, "click", move || { /* ... */ });
//!
//! // Listener is removed when `listener` goes out of scope or is dropped
//! drop(listener);
//! ```
//!
//! The controllers hold one guard per button, so dropping a controller
//! unbinds it completely.

use wasm_bindgen_x::prelude::*;

/// An event listener that removes itself when dropped.
pub struct EventListener {
    target: web_sys_x::EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl EventListener {
    /// Attaches `callback` for `event_name` on `target`.
    pub fn new(
        target: &web_sys_x::EventTarget,
        event_name: &'static str,
        callback: impl FnMut() + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut()> = Closure::wrap(Box::new(callback));

        target
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok();

        Self {
            target: target.clone(),
            event_name,
            callback,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
