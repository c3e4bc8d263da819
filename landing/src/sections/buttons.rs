//! Call-to-action links shared by the nav, hero and closing CTA.
//!
//! Hover lift and tap squash live in `style/landing.css` (`.press`), so the
//! buttons carry no state of their own.

use leptos::prelude::*;

use super::icons::ArrowRight;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CtaSize {
    /// Nav bar
    Compact,
    #[default]
    Regular,
}

impl CtaSize {
    fn padding(self) -> &'static str {
        match self {
            CtaSize::Compact => "px-4 py-2",
            CtaSize::Regular => "px-5 py-3",
        }
    }
}

/// What follows the label of a primary button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Trailing {
    #[default]
    None,
    /// Arrow inside a tinted circle (hero)
    Chip,
    /// Bare arrow (closing CTA)
    Inline,
}

#[component]
pub fn CtaPrimary(
    href: &'static str,
    label: &'static str,
    #[prop(optional)] size: CtaSize,
    #[prop(optional)] trailing: Trailing,
) -> impl IntoView {
    let class = format!(
        "press group relative inline-flex items-center justify-center overflow-hidden rounded-xl bg-white {} text-sm font-semibold text-neutral-900 shadow-lg shadow-white/10",
        size.padding()
    );
    let trailing = match trailing {
        Trailing::None => None,
        Trailing::Chip => Some(
            view! {
                <span class="relative z-10 ml-2 inline-flex h-5 w-5 items-center justify-center rounded-full bg-neutral-900/10">
                    <ArrowRight />
                </span>
            }
            .into_any(),
        ),
        Trailing::Inline => Some(
            view! {
                <span class="relative z-10 ml-2 inline-flex">
                    <ArrowRight />
                </span>
            }
            .into_any(),
        ),
    };

    view! {
        <a href=href class=class data-cta="primary">
            <span class="relative z-10">{label}</span>
            <span
                class="pointer-events-none absolute inset-0 bg-gradient-to-r from-indigo-500 via-fuchsia-500 to-pink-500 opacity-0 transition-opacity duration-300 group-hover:opacity-10"
                aria-hidden="true"
            ></span>
            {trailing}
        </a>
    }
}

#[component]
pub fn CtaSecondary(
    href: &'static str,
    label: &'static str,
    #[prop(optional)] size: CtaSize,
    /// Spinning ring icon before the label
    #[prop(optional)]
    ring: bool,
) -> impl IntoView {
    let class = format!(
        "press inline-flex items-center justify-center gap-2 rounded-xl border border-white/15 bg-white/5 {} text-sm font-medium text-white backdrop-blur transition-colors hover:bg-white/10",
        size.padding()
    );
    let ring = ring.then(|| {
        view! {
            <span class="relative flex h-4 w-4 items-center justify-center" aria-hidden="true">
                <span class="spin-slow absolute h-4 w-4 rounded-full border border-white/30 border-t-white/80"></span>
                <span class="h-1.5 w-1.5 rounded-full bg-white/90"></span>
            </span>
        }
    });

    view! {
        <a href=href class=class data-cta="secondary">
            {ring}
            <span>{label}</span>
        </a>
    }
}
