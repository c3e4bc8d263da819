use leptos::prelude::*;

use crate::config::LandingConfig;

const RING_PATH: &str = "M4 12a8 8 0 1116 0 8 8 0 01-16 0zm3.5 0a4.5 4.5 0 109 0 4.5 4.5 0 00-9 0z";

/// White rounded tile holding a ring, with a slowly breathing halo behind it.
#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <span class="relative inline-flex">
            <span
                class="logo-halo absolute -inset-2 rounded-full bg-fuchsia-500/20 blur-md"
                aria-hidden="true"
            ></span>
            <span class="relative flex h-8 w-8 items-center justify-center rounded-xl bg-white text-neutral-900 shadow-lg shadow-white/10">
                <svg width="18" height="18" viewBox="0 0 24 24" aria-hidden="true">
                    <path d=RING_PATH fill="currentColor" />
                </svg>
            </span>
        </span>
    }
}

/// Logo plus brand name, linking home.
#[component]
pub fn Brand() -> impl IntoView {
    let brand = use_context::<LandingConfig>().unwrap_or_default().brand;
    view! {
        <a href="/" class="flex items-center gap-2" data-brand="">
            <Logo />
            <span class="text-lg font-semibold tracking-tight text-white">{brand}</span>
        </a>
    }
}
