use leptos::prelude::*;

const CHECK_PATH: &str = "M5 13l4 4L19 7";

/// Small emerald check mark used in the hero and CTA checklists.
#[component]
pub fn CheckIcon(#[prop(optional)] class: &'static str) -> impl IntoView {
    let class = format!(
        "inline-flex h-4 w-4 shrink-0 items-center justify-center rounded-full bg-emerald-500/15 text-emerald-400 {}",
        class
    );
    view! {
        <span class=class aria-hidden="true">
            <svg width="10" height="10" viewBox="0 0 24 24" fill="none">
                <path
                    d=CHECK_PATH
                    stroke="currentColor"
                    stroke-width="3"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                />
            </svg>
        </span>
    }
}

#[component]
pub fn ArrowRight() -> impl IntoView {
    view! {
        <svg width="14" height="14" viewBox="0 0 24 24" fill="none" aria-hidden="true">
            <path
                d="M5 12h14M13 6l6 6-6 6"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
        </svg>
    }
}
