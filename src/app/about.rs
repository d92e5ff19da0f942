use leptos::{html, prelude::*};

use crate::config::OWNER;
use crate::content::{ABOUT_PARAGRAPHS, ABOUT_STATS};
use crate::motion::Threshold;

use super::motion::{reveal_class, use_reveal};

#[component]
pub fn About() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let visible = use_reveal(section, Threshold::SECTION);

    let initials: String = OWNER
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .collect();

    view! {
        <section id="about" node_ref=section class="py-24 px-6">
            <div class="max-w-6xl mx-auto">
                <div class=move || reveal_class(visible.get(), "mb-16", "translate-y-12")>
                    <div class="flex items-center mb-4">
                        <span class="section-number">"02"</span>
                        <div class="w-16 h-0.5 bg-accent ml-4"></div>
                    </div>
                    <h2 class="section-title">"About Me"</h2>
                </div>

                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class=move || reveal_class(visible.get(), "space-y-6 delay-300", "-translate-x-12")>
                        {ABOUT_PARAGRAPHS
                            .iter()
                            .map(|p| view! { <p class="text-lg text-text-subtle leading-relaxed">{*p}</p> })
                            .collect_view()}

                        <div class="grid grid-cols-3 gap-4 md:gap-8 pt-6 md:pt-8 border-t border-border">
                            {ABOUT_STATS
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div class="text-center">
                                            <div class="text-2xl md:text-3xl font-bold text-accent">{stat.value}</div>
                                            <div class="text-xs md:text-sm text-text-subtle mt-1">{stat.label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class=move || reveal_class(visible.get(), "delay-500", "translate-x-12")>
                        <div class="relative aspect-square max-w-sm mx-auto rounded-2xl bg-gradient-warm flex items-center justify-center hover-lift">
                            <span class="text-7xl font-bold text-accent/60">{initials}</span>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
