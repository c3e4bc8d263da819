use leptos::prelude::*;
use tracing::{debug, warn};

use super::buttons::{CtaPrimary, CtaSecondary, CtaSize};
use super::logo::Brand;
use crate::config::LandingConfig;
use crate::content::{Anchor, NAV_LINKS};
use crate::dom::{self, EventSubscription, FrameLoop};
use crate::error::LandingError;
use crate::motion::{Presence, collapse_style};
use crate::state::{MenuState, NavBackground};

/// Fixed header. Turns solid once the page scrolls past the configured
/// threshold; below `md` the links collapse into a toggled sheet.
#[component]
pub fn NavBar() -> impl IntoView {
    let config = use_context::<LandingConfig>().unwrap_or_default();
    let background = track_scroll(config.scroll_threshold_px);

    let (menu, set_menu) = signal(MenuState::Closed);
    let sheet = RwSignal::new(Presence::new(config.sheet_transition_secs()));
    let frames = animate_presence(sheet);

    Effect::new(move || {
        let open = menu.get().is_open();
        sheet.update(|presence| presence.set_visible(open));
        match frames {
            Some(frames) => frames.with_value(FrameLoop::wake),
            None => sheet.update(Presence::finish),
        }
    });

    view! {
        <header class="fixed inset-x-0 top-0 z-50" data-nav-state=move || background.get().as_str()>
            <div
                class="mx-auto max-w-7xl rounded-b-2xl px-4 py-3 backdrop-blur-md transition-colors duration-300 sm:px-6 lg:px-8"
                style=move || format!("background-color:{};", background.get().background_color())
            >
                <nav class="flex items-center justify-between" aria-label="Main">
                    <Brand />
                    <div class="hidden items-center gap-6 md:flex">
                        {NAV_LINKS
                            .iter()
                            .map(|link| view! { <NavLink href=link.anchor.href() label=link.label /> })
                            .collect_view()}
                        <div class="ml-2 flex items-center gap-2">
                            <CtaSecondary href=Anchor::Login.href() label="Log in" size=CtaSize::Compact />
                            <CtaPrimary href=Anchor::GetStarted.href() label="Start free" size=CtaSize::Compact />
                        </div>
                    </div>
                    <MenuButton menu=menu set_menu=set_menu />
                </nav>
                <Show when=move || sheet.with(Presence::is_mounted)>
                    <MobileSheet sheet=sheet set_menu=set_menu />
                </Show>
            </div>
        </header>
    }
}

/// Nav background signal, evaluated once now and again on every window
/// scroll.
fn track_scroll(threshold: f64) -> ReadSignal<NavBackground> {
    let (background, set_background) = signal(NavBackground::Transparent);
    let window = match dom::window() {
        Ok(window) => window,
        Err(err) => {
            warn!(%err, "scroll tracking disabled");
            return background;
        }
    };

    let evaluate = move |window: &web_sys::Window| {
        NavBackground::from_offset(window.scroll_y().unwrap_or(0.0), threshold)
    };
    // A page restored mid-scroll starts solid.
    set_background.set(evaluate(&window));

    let target = window.clone();
    let subscription = EventSubscription::listen(&target, "scroll", move |_| {
        let next = evaluate(&window);
        if background.get_untracked() != next {
            debug!(state = next.as_str(), "nav background changed");
            set_background.set(next);
        }
    });
    match subscription {
        Ok(subscription) => {
            dom::own(subscription);
        }
        Err(err) => warn!(%err, "scroll tracking disabled"),
    }
    background
}

/// Frame loop ticking the sheet transition. `None` when the browser gives
/// us no animation frames; callers then jump straight to the end state.
fn animate_presence(sheet: RwSignal<Presence>) -> Option<StoredValue<FrameLoop, LocalStorage>> {
    let step = move |dt: f64| {
        let mut running = false;
        sheet.update(|presence| running = presence.tick(dt));
        running
    };
    match FrameLoop::new(step) {
        Ok(frames) => Some(dom::own(frames)),
        Err(err) => {
            warn!(%err, "menu transitions disabled");
            None
        }
    }
}

#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a href=href class="group relative text-sm text-neutral-300 transition-colors hover:text-white">
            {label}
            <span
                class="absolute inset-x-0 -bottom-1 h-px origin-left scale-x-0 bg-white/60 transition-transform duration-200 group-hover:scale-x-100"
                aria-hidden="true"
            ></span>
        </a>
    }
}

#[component]
fn MenuButton(menu: ReadSignal<MenuState>, set_menu: WriteSignal<MenuState>) -> impl IntoView {
    let toggle = move |_| {
        set_menu.update(|state| *state = state.toggled());
        debug!(open = menu.get_untracked().is_open(), "menu toggled");
    };

    view! {
        <button
            type="button"
            class="relative inline-flex h-10 w-10 items-center justify-center rounded-lg border border-white/10 bg-white/5 text-white md:hidden"
            aria-label="Toggle menu"
            aria-controls="mobile-sheet"
            aria-expanded=move || menu.get().is_open().to_string()
            data-menu-toggle=""
            on:click=toggle
        >
            <span
                class="menu-bar absolute h-[2px] w-5 rounded bg-white"
                style=bar_style(menu, "transform:translateY(-6px);", "transform:rotate(45deg);")
            ></span>
            <span
                class="menu-bar absolute h-[2px] w-5 rounded bg-white"
                style=bar_style(menu, "opacity:1;", "opacity:0;")
            ></span>
            <span
                class="menu-bar absolute h-[2px] w-5 rounded bg-white"
                style=bar_style(menu, "transform:translateY(6px);", "transform:rotate(-45deg);")
            ></span>
        </button>
    }
}

/// Hamburger bar style: three bars when closed, an X when open.
fn bar_style(
    menu: ReadSignal<MenuState>,
    closed: &'static str,
    open: &'static str,
) -> impl Fn() -> &'static str + Send + Sync + 'static {
    move || if menu.get().is_open() { open } else { closed }
}

#[component]
fn MobileSheet(sheet: RwSignal<Presence>, set_menu: WriteSignal<MenuState>) -> impl IntoView {
    let close = move |_| {
        set_menu.update(|state| *state = state.navigated());
        debug!("menu closed by navigation");
    };
    let go = move |anchor: Anchor| {
        set_menu.update(|state| *state = state.navigated());
        if !anchor.has_target() {
            debug!(anchor = anchor.id(), "no section on this page for anchor");
        }
        let navigated = dom::window().and_then(|window| {
            window
                .location()
                .set_hash(anchor.id())
                .map_err(|err| LandingError::dom("location.hash", err))
        });
        if let Err(err) = navigated {
            warn!(%err, anchor = anchor.id(), "navigation failed");
        }
    };

    view! {
        <div
            id="mobile-sheet"
            class="md:hidden"
            data-presence=move || sheet.with(|presence| presence.phase().as_str())
            style=move || collapse_style(sheet.with(Presence::eased))
        >
            <div class="collapse-inner">
                <div class="mt-3 rounded-xl border border-white/10 bg-neutral-900/80 p-2 backdrop-blur">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.anchor.href()
                                    class="group flex items-center justify-between rounded-lg px-3 py-2 text-sm text-neutral-200 hover:bg-white/5 hover:text-white"
                                    on:click=close
                                >
                                    {link.label}
                                    <span class="opacity-0 transition-opacity group-hover:opacity-100" aria-hidden="true">
                                        "→"
                                    </span>
                                </a>
                            }
                        })
                        .collect_view()}
                    <div class="mt-2 grid grid-cols-2 gap-2 p-1">
                        <button
                            type="button"
                            class="press rounded-lg border border-white/15 px-3 py-2 text-sm text-white"
                            on:click=move |_| go(Anchor::Login)
                        >
                            "Log in"
                        </button>
                        <button
                            type="button"
                            class="press rounded-lg bg-white px-3 py-2 text-sm font-semibold text-neutral-900"
                            on:click=move |_| go(Anchor::GetStarted)
                        >
                            "Start free"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
