use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::{AGENT_CARDS, AgentCard, AgentIcon, MINI_STATS, ORBIT_NODE_COUNT};
use crate::motion::{Entrance, INNER_RING_PERIOD, OUTER_RING_PERIOD, OrbitNode};

/// Stacked agent cards with live-looking progress, a stat row, and the
/// orbit decoration behind them.
#[component]
pub fn AgentStack() -> impl IntoView {
    view! {
        <div class="relative">
            <div class="pointer-events-none absolute -inset-10" aria-hidden="true">
                <OrbitingNodes />
            </div>

            <div class="relative mx-auto w-full max-w-md">
                <div
                    class="pointer-events-none absolute -inset-x-10 -top-10 h-40 bg-gradient-to-b from-white/10 to-transparent blur-2xl"
                    aria-hidden="true"
                ></div>

                <div class="space-y-4" data-agent-stack="">
                    {AGENT_CARDS
                        .iter()
                        .enumerate()
                        .map(|(index, card)| view! { <AgentCardView card=*card index=index /> })
                        .collect_view()}
                </div>

                <div class="mt-5 grid grid-cols-3 gap-2 text-center text-xs text-neutral-300">
                    {MINI_STATS
                        .iter()
                        .map(|stat| view! { <MiniStat label=stat.label value=stat.value /> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn AgentCardView(card: AgentCard, index: usize) -> impl IntoView {
    let entrance = Entrance::rise(Entrance::stagger(0.15, 0.08, index), 0.5, 20.0).with_scale(0.98);
    let chip = Entrance::rise(Entrance::stagger(0.3, 0.08, index), 0.4, 6.0);
    let fill_delay = format!("--reveal-delay:{:.2}s;", Entrance::stagger(0.2, 0.05, index));
    let surface = format!(
        "card-lift group relative overflow-hidden rounded-2xl border border-white/10 bg-gradient-to-br {} p-4 backdrop-blur",
        card.gradient.classes()
    );

    // Entrance and hover lift sit on separate elements; a finished
    // animation with `fill-mode: both` would pin the transform otherwise.
    view! {
        <div class="enter" style=entrance.style() data-agent-card=card.title>
            <div class=surface>
                <div class="pointer-events-none absolute inset-0 opacity-0 transition-opacity duration-300 group-hover:opacity-100" aria-hidden="true">
                    <div class="absolute -inset-1 rounded-2xl bg-gradient-to-br from-white/10 to-transparent blur-xl"></div>
                </div>

                <div class="relative flex items-start justify-between gap-4">
                    <div class="flex items-center gap-3">
                        <span class="flex h-9 w-9 items-center justify-center rounded-xl bg-neutral-900/60 ring-1 ring-white/10">
                            <AgentGlyph icon=card.icon />
                        </span>
                        <div>
                            <div class="text-sm font-semibold text-white">{card.title}</div>
                            <div class="text-xs text-neutral-400">{card.subtitle}</div>
                        </div>
                    </div>
                    <span class="enter rounded-full bg-white/10 px-2 py-0.5 text-[11px] text-neutral-200" style=chip.style()>
                        {card.stat}
                    </span>
                </div>

                <Reveal
                    class="progress-track relative mt-4 h-1.5 overflow-hidden rounded-full bg-white/10"
                    root_margin="-10% 0px -10% 0px"
                    style=fill_delay
                >
                    <div class="progress-fill h-full rounded-full bg-gradient-to-r from-white/70 to-white/20">
                        <div class="progress-shimmer h-full w-1/3 bg-gradient-to-r from-transparent via-white/60 to-transparent"></div>
                    </div>
                </Reveal>
            </div>
        </div>
    }
}

#[component]
fn AgentGlyph(icon: AgentIcon) -> impl IntoView {
    let (fill, stroke) = if icon.is_stroked() {
        ("none", "currentColor")
    } else {
        ("currentColor", "none")
    };
    view! {
        <svg class=icon.color_class() width="18" height="18" viewBox="0 0 24 24" aria-hidden="true">
            <path d=icon.path() fill=fill stroke=stroke stroke-width="2" stroke-linecap="round" />
        </svg>
    }
}

#[component]
fn MiniStat(label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <Reveal
            class="reveal-rise rounded-lg border border-white/10 bg-white/5 p-2"
            style="--reveal-y:6px;"
        >
            <div class="text-[10px] uppercase tracking-wide text-neutral-400">{label}</div>
            <div class="text-sm font-semibold text-white">{value}</div>
        </Reveal>
    }
}

/// Decorative dots and counter-rotating rings. Pointer events off, hidden
/// from assistive tech by the caller's wrapper.
#[component]
fn OrbitingNodes() -> impl IntoView {
    view! {
        <div class="absolute inset-0">
            {(0..ORBIT_NODE_COUNT)
                .map(|index| {
                    let node = OrbitNode::new(index);
                    let style = format!(
                        "{}{}",
                        node.position_style(),
                        Entrance::rise(0.0, 0.6, 0.0).with_scale(0.6).with_opacity(0.8).style()
                    );
                    let pulse = format!("animation-duration:{:.1}s;", node.pulse_period());
                    view! {
                        <span class="enter absolute h-2 w-2 rounded-full bg-white/70" style=style data-orbit-node="">
                            <span class="orbit-pulse absolute -inset-3 rounded-full bg-white/20 blur-md" style=pulse></span>
                        </span>
                    }
                })
                .collect_view()}
            <div
                class="orbit-ring absolute left-1/2 top-1/2 h-64 w-64 rounded-full border border-white/10"
                style=format!("--orbit-period:{}s;", INNER_RING_PERIOD)
            ></div>
            <div
                class="orbit-ring orbit-ccw absolute left-1/2 top-1/2 h-80 w-80 rounded-full border border-white/5"
                style=format!("--orbit-period:{}s;", OUTER_RING_PERIOD)
            ></div>
        </div>
    }
}
