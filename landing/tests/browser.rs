//! End-to-end checks against a real DOM.
//!
//! Run with `wasm-pack test --headless --firefox landing` (or `--chrome`).

#![cfg(target_arch = "wasm32")]

use std::any::Any;
use std::cell::Cell;
use std::rc::Rc;

use agentic_landing::App;
use agentic_landing::dom::{EventSubscription, FrameLoop, ViewportWatcher};
use agentic_landing::state::{Bounds, PointerOffset};
use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, EventTarget, HtmlElement, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

/// Mount a fresh page into its own root at scroll offset 0. Queries go
/// through the returned root so earlier tests' markup cannot interfere.
/// Dropping the returned handle unmounts the page.
fn mount() -> (HtmlElement, Box<dyn Any>) {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let body = document.body().unwrap();
    body.style().set_property("min-height", "4000px").unwrap();
    window.scroll_to_with_x_and_y(0.0, 0.0);

    let root: HtmlElement = document.create_element("div").unwrap().unchecked_into();
    body.append_child(&root).unwrap();
    let handle = mount_to(root.clone(), || view! { <App /> });
    (root, Box::new(handle))
}

fn find(root: &HtmlElement, selector: &str) -> Option<Element> {
    root.query_selector(selector).unwrap()
}

fn count(root: &HtmlElement, selector: &str) -> u32 {
    root.query_selector_all(selector).unwrap().length()
}

fn click(root: &HtmlElement, selector: &str) {
    find(root, selector)
        .unwrap_or_else(|| panic!("{} not rendered", selector))
        .unchecked_into::<HtmlElement>()
        .click();
}

fn nav_state(root: &HtmlElement) -> String {
    find(root, "header").unwrap().get_attribute("data-nav-state").unwrap()
}

#[wasm_bindgen_test]
async fn nav_turns_solid_and_menu_opens_and_closes() {
    let (root, handle) = mount();
    let window = web_sys::window().unwrap();
    sleep(50).await;

    assert_eq!(nav_state(&root), "transparent");
    assert!(find(&root, "#mobile-sheet").is_none());

    window.scroll_to_with_x_and_y(0.0, 100.0);
    window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
    sleep(50).await;
    assert_eq!(nav_state(&root), "solid");

    click(&root, "[data-menu-toggle]");
    sleep(400).await;
    let sheet = find(&root, "#mobile-sheet").expect("sheet mounted after toggle");
    assert_eq!(sheet.get_attribute("data-presence").as_deref(), Some("settled"));
    assert_eq!(sheet.query_selector_all("a").unwrap().length(), 4);
    assert_eq!(sheet.query_selector_all("button").unwrap().length(), 2);
    assert_eq!(
        find(&root, "[data-menu-toggle]").unwrap().get_attribute("aria-expanded").as_deref(),
        Some("true")
    );

    click(&root, "#mobile-sheet a");
    sleep(500).await;
    assert!(find(&root, "#mobile-sheet").is_none(), "sheet removed after exit");

    window.scroll_to_with_x_and_y(0.0, 0.0);
    drop(handle);
    root.remove();
}

#[wasm_bindgen_test]
async fn renders_every_section_with_its_content() {
    let (root, handle) = mount();
    sleep(20).await;

    assert_eq!(count(&root, "[data-hero]"), 1);
    assert_eq!(count(&root, "[data-agent-card]"), 3);
    assert_eq!(count(&root, "[data-orbit-node]"), 8);
    assert_eq!(count(&root, "[data-feature-card]"), 3);
    assert_eq!(count(&root, "[data-checklist=\"hero\"] li"), 3);
    assert_eq!(count(&root, "[data-checklist=\"cta\"] li"), 4);

    let groups: Vec<u32> = ["Product", "Company", "Resources"]
        .iter()
        .map(|title| count(&root, &format!("[data-link-group=\"{}\"] li", title)))
        .collect();
    assert_eq!(groups, [4, 3, 3]);

    // Only these two anchors have targets on the page.
    assert!(find(&root, "section#product").is_some());
    assert!(find(&root, "section#get-started").is_some());
    assert!(find(&root, "#signup").is_none());

    let year = js_sys::Date::new_0().get_full_year();
    let copyright = find(&root, "[data-copyright]").unwrap().text_content().unwrap();
    assert_eq!(copyright, format!("\u{a9} {} Agentic, Inc. All rights reserved.", year));

    drop(handle);
    root.remove();
}

#[wasm_bindgen_test]
async fn glow_settles_under_the_pointer() {
    let (root, handle) = mount();
    sleep(20).await;

    let hero = find(&root, "[data-hero]").unwrap();
    let rect = hero.get_bounding_client_rect();
    let client_x = rect.left() as i32 + 40;
    let client_y = rect.top() as i32 + 30;

    let init = MouseEventInit::new();
    init.set_client_x(client_x);
    init.set_client_y(client_y);
    let event = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).unwrap();
    hero.dispatch_event(&event).unwrap();

    let bounds = Bounds {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    };
    let expected = PointerOffset::within(f64::from(client_x), f64::from(client_y), bounds);

    sleep(2000).await;
    let glow = find(&root, "[data-glow]").unwrap();
    assert_eq!(glow.get_attribute("style"), Some(expected.position_style()));

    drop(handle);
    root.remove();
}

#[wasm_bindgen_test]
fn dropped_subscription_stops_listening() {
    let target = EventTarget::new().unwrap();
    let calls = Rc::new(Cell::new(0u32));
    let counter = calls.clone();
    let subscription =
        EventSubscription::listen(&target, "ping", move |_| counter.set(counter.get() + 1))
            .unwrap();

    target.dispatch_event(&Event::new("ping").unwrap()).unwrap();
    assert_eq!(calls.get(), 1);

    drop(subscription);
    target.dispatch_event(&Event::new("ping").unwrap()).unwrap();
    assert_eq!(calls.get(), 1);
}

#[wasm_bindgen_test]
async fn dropped_frame_loop_cancels_queued_frame() {
    let frames = Rc::new(Cell::new(0u32));

    let counter = frames.clone();
    let running = FrameLoop::new(move |_| {
        counter.set(counter.get() + 1);
        false
    })
    .unwrap();
    running.wake();
    sleep(100).await;
    assert_eq!(frames.get(), 1);

    let counter = frames.clone();
    let cancelled = FrameLoop::new(move |_| {
        counter.set(counter.get() + 1);
        true
    })
    .unwrap();
    cancelled.wake();
    drop(cancelled);
    sleep(100).await;
    assert_eq!(frames.get(), 1);
}

#[wasm_bindgen_test]
async fn dropped_watcher_reports_nothing() {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&element).unwrap();

    let reports = Rc::new(Cell::new(0u32));
    let counter = reports.clone();
    let watcher = ViewportWatcher::watch(&element, "0px", move |_| counter.set(counter.get() + 1))
        .unwrap();
    drop(watcher);
    sleep(100).await;
    assert_eq!(reports.get(), 0);

    element.remove();
}

#[wasm_bindgen_test]
async fn unmounted_page_ignores_window_events() {
    let (root, handle) = mount();
    let window = web_sys::window().unwrap();
    sleep(20).await;
    let hero = find(&root, "[data-hero]").unwrap();

    drop(handle);
    root.remove();
    assert!(find(&root, "header").is_none());

    window.scroll_to_with_x_and_y(0.0, 100.0);
    window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
    hero.dispatch_event(&MouseEvent::new("mousemove").unwrap()).unwrap();
    sleep(100).await;

    assert!(find(&root, "header").is_none());
    window.scroll_to_with_x_and_y(0.0, 0.0);
}
