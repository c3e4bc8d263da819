use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::error::{LandingError, Result};

/// Step assumed for the first frame after a wake, when there is no previous
/// timestamp to diff against.
const FIRST_FRAME: f64 = 1.0 / 60.0;

/// Longest step handed to the callback; a tab returning from the background
/// would otherwise report seconds.
const MAX_FRAME: f64 = 0.1;

/// `requestAnimationFrame` loop that sleeps when idle.
///
/// The step callback receives the elapsed seconds and returns whether it
/// wants another frame. [`FrameLoop::wake`] restarts a sleeping loop.
/// Dropping the loop cancels any pending frame.
pub struct FrameLoop {
    shared: Rc<Shared>,
}

struct Shared {
    window: Window,
    pending: Cell<Option<i32>>,
    last_timestamp: Cell<Option<f64>>,
    step: RefCell<Box<dyn FnMut(f64) -> bool>>,
    tick: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FrameLoop {
    pub fn new<F>(step: F) -> Result<Self>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let window = web_sys::window().ok_or(LandingError::NoWindow)?;
        let shared = Rc::new(Shared {
            window,
            pending: Cell::new(None),
            last_timestamp: Cell::new(None),
            step: RefCell::new(Box::new(step)),
            tick: RefCell::new(None),
        });

        // The closure only holds a weak handle, so the loop is freed with
        // its owner even while a frame is queued.
        let weak: Weak<Shared> = Rc::downgrade(&shared);
        let tick = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            if let Some(shared) = weak.upgrade() {
                shared.on_frame(timestamp);
            }
        });
        *shared.tick.borrow_mut() = Some(tick);

        Ok(Self { shared })
    }

    /// Schedule a frame unless one is already queued.
    pub fn wake(&self) {
        if self.shared.pending.get().is_none() {
            self.shared.schedule();
        }
    }
}

impl Shared {
    fn schedule(&self) {
        let tick = self.tick.borrow();
        let Some(tick) = tick.as_ref() else {
            return;
        };
        match self.window.request_animation_frame(tick.as_ref().unchecked_ref()) {
            Ok(id) => self.pending.set(Some(id)),
            Err(err) => {
                tracing::warn!(error = %LandingError::dom("requestAnimationFrame", err), "animation stalled");
            }
        }
    }

    fn on_frame(&self, timestamp: f64) {
        self.pending.set(None);
        let dt = match self.last_timestamp.replace(Some(timestamp)) {
            Some(previous) => ((timestamp - previous) / 1000.0).clamp(0.0, MAX_FRAME),
            None => FIRST_FRAME,
        };

        let again = (self.step.borrow_mut())(dt);
        if again {
            // the step may already have woken us
            if self.pending.get().is_none() {
                self.schedule();
            }
        } else {
            self.last_timestamp.set(None);
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.shared.pending.take() {
            let _ = self.shared.window.cancel_animation_frame(id);
        }
    }
}
