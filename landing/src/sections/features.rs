use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::{Anchor, FEATURE_CARDS, FeatureCard};
use crate::motion::Entrance;

#[component]
pub fn WhyAgentic() -> impl IntoView {
    view! {
        <section id=Anchor::Product.id() class="mx-auto max-w-7xl px-6 py-20">
            <Reveal class="reveal-rise mx-auto max-w-2xl text-center">
                <h3 class="text-2xl font-semibold sm:text-3xl">"Why Agentic"</h3>
                <p class="mt-3 text-neutral-300">
                    "Agents that execute tasks across your stack with auditable steps, "
                    "human handoff, and built‑in safeguards."
                </p>
            </Reveal>
            <div class="mt-10 grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                {FEATURE_CARDS
                    .iter()
                    .enumerate()
                    .map(|(index, card)| view! { <FeatureTile card=*card index=index /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn FeatureTile(card: FeatureCard, index: usize) -> impl IntoView {
    let delay = format!("--reveal-delay:{:.2}s;", Entrance::stagger(0.0, 0.08, index));
    view! {
        <Reveal
            class="reveal-rise rounded-2xl border border-white/10 bg-white/5 p-5 text-sm text-neutral-300"
            style=delay
        >
            <article data-feature-card=card.title>
                <div class="mb-2 text-base font-semibold text-white">{card.title}</div>
                {card.description}
            </article>
        </Reveal>
    }
}
