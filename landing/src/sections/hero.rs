use leptos::html::Section;
use leptos::prelude::*;
use tracing::{trace, warn};
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use super::agent_stack::AgentStack;
use super::buttons::{CtaPrimary, CtaSecondary, Trailing};
use super::icons::CheckIcon;
use crate::config::LandingConfig;
use crate::content::{Anchor, BadgeEntry, HERO_BADGES, HERO_CHECKLIST};
use crate::dom::{self, EventSubscription, FrameLoop};
use crate::motion::{Entrance, Spring2D};
use crate::state::{Bounds, PointerOffset};

/// Above-the-fold section: copy on the left, animated agent stack on the
/// right, and a soft glow that trails the pointer.
#[component]
pub fn HeroAgents() -> impl IntoView {
    let config = use_context::<LandingConfig>().unwrap_or_default();
    let hero = NodeRef::<Section>::new();
    let glow = RwSignal::new(Spring2D::new(config.glow_spring, PointerOffset::ORIGIN));

    let frames = match FrameLoop::new(move |dt| {
        let mut moving = false;
        glow.update(|spring| moving = spring.step(dt));
        moving
    }) {
        Ok(frames) => Some(dom::own(frames)),
        Err(err) => {
            warn!(%err, "glow will jump instead of easing");
            None
        }
    };

    Effect::new(move || {
        let Some(section) = hero.get() else {
            return;
        };
        let element = section.clone();
        let subscription = EventSubscription::listen(&section, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let rect = element.get_bounding_client_rect();
            let bounds = Bounds {
                left: rect.left(),
                top: rect.top(),
                width: rect.width(),
                height: rect.height(),
            };
            let target = PointerOffset::within(
                f64::from(event.client_x()),
                f64::from(event.client_y()),
                bounds,
            );
            trace!(x = target.x, y = target.y, "glow target");
            glow.update(|spring| spring.aim(target));
            match frames {
                Some(frames) => frames.with_value(FrameLoop::wake),
                None => glow.update(Spring2D::snap),
            }
        });
        match subscription {
            Ok(subscription) => {
                dom::own(subscription);
            }
            Err(err) => warn!(%err, "pointer glow disabled"),
        }
    });

    view! {
        <section node_ref=hero class="relative isolate overflow-hidden bg-neutral-950 text-white" data-hero="">
            <div class="hero-grid pointer-events-none absolute inset-0" aria-hidden="true"></div>
            <div
                class="pointer-events-none absolute inset-0 bg-[radial-gradient(1200px_600px_at_50%_-20%,rgba(99,102,241,0.10),transparent)]"
                aria-hidden="true"
            ></div>
            <div
                class="pointer-events-none absolute inset-0 bg-gradient-to-b from-transparent via-transparent to-black/30"
                aria-hidden="true"
            ></div>
            <div
                class="pointer-events-none absolute h-56 w-56 -translate-x-1/2 -translate-y-1/2 rounded-full bg-fuchsia-500/20 blur-3xl"
                aria-hidden="true"
                data-glow=""
                style=move || glow.with(|spring| spring.position().position_style())
            ></div>

            <div class="relative mx-auto grid max-w-7xl grid-cols-1 px-6 pt-28 pb-16 sm:pt-36 lg:grid-cols-12 lg:gap-8 lg:pb-24">
                <div class="z-10 lg:col-span-7">
                    <div class="mb-4 flex flex-wrap items-center gap-2">
                        <Pill label="Introducing" />
                        <span class="enter text-sm text-neutral-300" style=Entrance::rise(0.10, 0.4, 6.0).style()>
                            "Adaptive AI Agents for teams that move fast"
                        </span>
                    </div>

                    <h1
                        class="enter text-balance text-4xl font-semibold tracking-tight sm:text-5xl lg:text-6xl"
                        style=Entrance::rise(0.05, 0.5, 12.0).style()
                    >
                        "Deploy AI agents that do the work—"
                        <span class="bg-gradient-to-r from-white via-white to-neutral-400 bg-clip-text text-transparent">
                            "not just the chat."
                        </span>
                    </h1>

                    <p
                        class="enter mt-4 max-w-xl text-pretty text-neutral-300 sm:text-lg"
                        style=Entrance::rise(0.15, 0.5, 12.0).style()
                    >
                        "Spin up specialized agents for support, sales, and ops. Connect your tools, "
                        "set the goals, and watch tasks complete end‑to‑end—accurately, auditable, and on-brand."
                    </p>

                    <div class="mt-6 flex flex-wrap gap-2">
                        {HERO_BADGES
                            .iter()
                            .enumerate()
                            .map(|(i, badge)| {
                                view! { <GradientBadge badge=*badge delay=Entrance::stagger(0.2, 0.06, i) /> }
                            })
                            .collect_view()}
                    </div>

                    <div class="mt-8 flex flex-wrap items-center gap-3">
                        <CtaPrimary href=Anchor::GetStarted.href() label="Start free" trailing=Trailing::Chip />
                        <CtaSecondary href=Anchor::Demo.href() label="See live demo" ring=true />
                        <span class="enter text-xs text-neutral-400" style=Entrance::rise(0.35, 0.4, 6.0).style()>
                            "No credit card • Cancel anytime"
                        </span>
                    </div>

                    <ul class="mt-6 space-y-2 text-sm text-neutral-300" data-checklist="hero">
                        {HERO_CHECKLIST
                            .iter()
                            .enumerate()
                            .map(|(i, item)| {
                                let entrance = Entrance::slide(Entrance::stagger(0.25, 0.06, i), 0.4, -8.0);
                                view! {
                                    <li class="enter flex items-start gap-2" style=entrance.style()>
                                        <CheckIcon class="mt-0.5" />
                                        <span>{*item}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div class="relative mt-12 lg:col-span-5 lg:mt-0">
                    <AgentStack />
                </div>
            </div>
        </section>
    }
}

#[component]
fn Pill(label: &'static str) -> impl IntoView {
    view! {
        <span
            class="enter inline-flex items-center gap-1.5 rounded-full border border-white/10 bg-white/5 px-3 py-1 text-xs font-medium text-neutral-200 backdrop-blur"
            style=Entrance::rise(0.0, 0.4, 6.0).style()
        >
            <span class="relative inline-flex h-1.5 w-1.5" aria-hidden="true">
                <span class="absolute inset-0 rounded-full bg-emerald-400"></span>
                <span class="pulse-dot absolute inset-0 rounded-full bg-emerald-400/60 blur-[2px]"></span>
            </span>
            {label}
        </span>
    }
}

#[component]
fn GradientBadge(badge: BadgeEntry, delay: f64) -> impl IntoView {
    let class = format!(
        "enter inline-flex items-center rounded-full bg-gradient-to-r {} px-3 py-1 text-xs font-medium text-white/90 ring-1 ring-white/10",
        badge.gradient.classes()
    );
    view! {
        <span class=class style=Entrance::rise(delay, 0.45, 8.0).with_scale(0.96).style()>
            {badge.text}
        </span>
    }
}
