use leptos::html::Div;
use leptos::prelude::*;
use tracing::{debug, warn};

use crate::dom::{self, ViewportWatcher};
use crate::motion::RevealLatch;

/// Wrapper that flips `data-revealed` to `true` the first time it scrolls
/// into view and never back. The transition itself is CSS keyed on that
/// attribute (`.reveal-rise`, `.progress-track`).
#[component]
pub fn Reveal(
    #[prop(optional)] class: &'static str,
    /// CSS margin around the viewport; negative values require the element
    /// to be that far inside before it counts.
    #[prop(default = "0px")]
    root_margin: &'static str,
    #[prop(optional, into)] style: String,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let (revealed, set_revealed) = signal(false);

    // Re-runs once `revealed` flips, which drops the watcher owned by the
    // previous run and disconnects the observer.
    Effect::new(move || {
        if revealed.get() {
            return;
        }
        let Some(element) = node.get() else {
            return;
        };

        let mut latch = RevealLatch::default();
        let watcher = ViewportWatcher::watch(&element, root_margin, move |intersecting| {
            if latch.observe(intersecting) {
                debug!(root_margin, "revealed");
                set_revealed.set(true);
            }
        });
        match watcher {
            Ok(watcher) => {
                dom::own(watcher);
            }
            Err(err) => {
                warn!(%err, "viewport tracking unavailable, revealing immediately");
                set_revealed.set(true);
            }
        }
    });

    view! {
        <div
            node_ref=node
            class=class
            style=style
            data-revealed=move || if revealed.get() { "true" } else { "false" }
        >
            {children()}
        </div>
    }
}
