use leptos::prelude::*;

use super::buttons::{CtaPrimary, CtaSecondary, Trailing};
use super::icons::CheckIcon;
use super::reveal::Reveal;
use crate::content::{Anchor, CTA_CHECKLIST};

/// Closing call to action. The panel fades and rises into place the first
/// time it is 10% inside the viewport.
#[component]
pub fn CtaSection() -> impl IntoView {
    view! {
        <section id=Anchor::GetStarted.id() class="relative isolate overflow-hidden bg-neutral-950 py-20 sm:py-28">
            <div
                class="pointer-events-none absolute inset-0 -z-10 bg-[radial-gradient(700px_300px_at_20%_20%,rgba(147,51,234,0.12),transparent),radial-gradient(700px_300px_at_80%_60%,rgba(59,130,246,0.12),transparent)]"
                aria-hidden="true"
            ></div>
            <div class="mx-auto max-w-5xl px-6">
                <Reveal
                    class="reveal-rise rounded-3xl border border-white/10 bg-white/[0.03] p-8 backdrop-blur sm:p-12"
                    root_margin="-10% 0px"
                >
                    <div class="grid items-center gap-8 sm:grid-cols-3">
                        <div class="sm:col-span-2">
                            <h2 class="text-balance text-3xl font-semibold tracking-tight sm:text-4xl">
                                "Launch your first agent in under 10 minutes."
                            </h2>
                            <p class="mt-3 max-w-xl text-neutral-300">
                                "Plug into your stack, set goals, and let agents execute. "
                                "Start free—upgrade when you scale."
                            </p>
                            <ul class="mt-5 grid gap-2 text-sm text-neutral-300 sm:grid-cols-2" data-checklist="cta">
                                {CTA_CHECKLIST
                                    .iter()
                                    .map(|item| {
                                        view! {
                                            <li class="flex items-center gap-2">
                                                <CheckIcon />
                                                {*item}
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                        <div class="flex flex-col items-start gap-3 sm:items-end">
                            <CtaPrimary href=Anchor::Signup.href() label="Start free" trailing=Trailing::Inline />
                            <CtaSecondary href=Anchor::Demo.href() label="Book a demo" />
                            <span class="text-xs text-neutral-400">"Free trial • Cancel anytime"</span>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
