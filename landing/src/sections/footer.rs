use leptos::prelude::*;

use super::logo::Brand;
use crate::config::LandingConfig;
use crate::content::{COMPLIANCE_BADGES, FOOTER_GROUPS, LEGAL_LINKS, copyright_line, current_year};

#[component]
pub fn Footer() -> impl IntoView {
    let brand = use_context::<LandingConfig>().unwrap_or_default().brand;
    let copyright = copyright_line(&brand, current_year());

    view! {
        <footer class="relative isolate bg-neutral-950">
            <div class="mx-auto max-w-7xl px-6 pt-16 pb-8">
                <div class="grid gap-10 sm:grid-cols-2 lg:grid-cols-4">
                    <div>
                        <Brand />
                        <p class="mt-4 max-w-xs text-sm text-neutral-400">
                            "Deploy autonomous AI agents that ship work, not just chat. Built for modern teams."
                        </p>
                        <div class="mt-4 flex items-center gap-3">
                            {COMPLIANCE_BADGES
                                .iter()
                                .map(|badge| {
                                    view! {
                                        <span class="inline-flex items-center rounded-md border border-white/10 bg-white/5 px-2 py-1 text-[10px] uppercase tracking-wide text-neutral-300">
                                            {*badge}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    {FOOTER_GROUPS
                        .iter()
                        .map(|group| {
                            view! {
                                <div data-link-group=group.title>
                                    <h4 class="text-sm font-semibold text-white">{group.title}</h4>
                                    <ul class="mt-3 space-y-2 text-sm text-neutral-300">
                                        {group
                                            .items
                                            .iter()
                                            .map(|item| {
                                                view! {
                                                    <li>
                                                        <a class="hover:text-white" href="#">
                                                            {*item}
                                                        </a>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="mt-12 border-t border-white/10 pt-6 text-xs text-neutral-400 sm:flex sm:items-center sm:justify-between">
                    <p data-copyright="">{copyright}</p>
                    <div class="mt-3 space-x-4 sm:mt-0">
                        {LEGAL_LINKS
                            .iter()
                            .map(|link| view! { <a href="#" class="hover:text-white">{*link}</a> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
