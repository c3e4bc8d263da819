use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::{LandingError, Result};

/// Watches one element for viewport intersection. Dropping the watcher
/// disconnects the observer.
pub struct ViewportWatcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ViewportWatcher {
    /// `root_margin` uses CSS margin syntax, e.g. `"-10% 0px"` to require the
    /// element to be 10% inside the viewport. `on_change` receives whether
    /// the element currently intersects.
    pub fn watch<F>(element: &Element, root_margin: &str, mut on_change: F) -> Result<Self>
    where
        F: FnMut(bool) + 'static,
    {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<IntersectionObserverEntry>()
                        .map(|entry| entry.is_intersecting())
                        .unwrap_or(false)
                });
                on_change(intersecting);
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_root_margin(root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|err| LandingError::dom("IntersectionObserver", err))?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
