//! RAII wrappers over browser resources.
//!
//! Each guard releases its resource on `Drop`. Components hand guards to
//! [`own`], which parks them in the current reactive owner; when the owner
//! is cleaned up (unmount, or an effect re-running) the guard drops.

mod frame;
mod listener;
mod observer;

pub use frame::FrameLoop;
pub use listener::EventSubscription;
pub use observer::ViewportWatcher;

use leptos::prelude::{LocalStorage, StoredValue};
use web_sys::{Document, Window};

use crate::error::{LandingError, Result};

/// Keep `resource` alive until the current owner is disposed.
pub fn own<T: 'static>(resource: T) -> StoredValue<T, LocalStorage> {
    StoredValue::new_local(resource)
}

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(LandingError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(LandingError::NoDocument)
}
