use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget};

use crate::error::{LandingError, Result};

/// An attached DOM event listener. Dropping it detaches the listener and
/// frees the closure.
pub struct EventSubscription {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventSubscription {
    pub fn listen<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|err| LandingError::dom("addEventListener", err))?;
        tracing::trace!(event, "listener attached");

        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        let removed = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        if removed.is_err() {
            tracing::warn!(event = self.event, "failed to detach listener");
        } else {
            tracing::trace!(event = self.event, "listener detached");
        }
    }
}
