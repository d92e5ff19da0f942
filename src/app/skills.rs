use std::sync::Arc;

use leptos::{html, prelude::*};
use leptos_use::use_media_query;

use crate::content::{SkillCategory, CORE_COMPETENCIES, SKILL_CATEGORIES};
use crate::motion::carousel::SKILL_SLIDE_INTERVAL;
use crate::motion::{AutoAdvance, Threshold};

use super::motion::{reveal_class, use_reveal, BrowserScheduler};

fn category_card(category: &'static SkillCategory) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 mb-4">
            <span class="text-2xl">{category.icon}</span>
            <h3 class="font-semibold">{category.title}</h3>
        </div>
        <div class="flex flex-wrap gap-2 mb-4">
            {category
                .skills
                .iter()
                .map(|skill| view! { <span class="tag">{*skill}</span> })
                .collect_view()}
        </div>
        <div class="pt-2 border-t border-border/20 flex items-center justify-between text-xs text-text-subtle">
            <span>{format!("{} Technologies", category.skills.len())}</span>
            <span class="flex items-center gap-1">
                <span class="w-2 h-2 rounded-full bg-accent"></span>
                "Active Use"
            </span>
        </div>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let visible = use_reveal(section, Threshold::SECTION);
    let narrow = use_media_query("(max-width: 767px)");
    let (slide, set_slide) = signal(0usize);

    let auto = Arc::new(AutoAdvance::new(
        SKILL_CATEGORIES.len(),
        SKILL_SLIDE_INTERVAL,
        BrowserScheduler::default(),
        move |i| set_slide.set(i),
    ));
    on_cleanup({
        let auto = auto.clone();
        move || auto.dispose()
    });
    let auto = StoredValue::new(auto);

    // the slider only runs while it's the layout on screen
    Effect::new(move |_| {
        if narrow.get() {
            auto.with_value(|a| a.start());
        } else {
            auto.with_value(|a| a.stop());
        }
    });

    view! {
        <section id="skills" node_ref=section class="py-24 px-6 bg-surface">
            <div class="max-w-6xl mx-auto">
                <div class=move || reveal_class(visible.get(), "mb-16", "translate-y-12")>
                    <div class="flex items-center mb-4">
                        <span class="section-number">"04"</span>
                        <div class="w-16 h-0.5 bg-accent ml-4"></div>
                    </div>
                    <h2 class="section-title">"Skills & Technologies"</h2>
                    <p class="text-lg text-text-subtle max-w-2xl">
                        "A comprehensive overview of my technical expertise and proficiency levels."
                    </p>
                </div>

                <div class="hidden md:grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {SKILL_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(i, category)| {
                            let delay = format!("transition-delay: {}ms", (i + 1) * 100);
                            view! {
                                <div
                                    class=move || reveal_class(visible.get(), "card p-6 hover-lift", "translate-y-8 scale-95")
                                    style=delay
                                >
                                    {category_card(category)}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class=move || reveal_class(visible.get(), "md:hidden", "translate-y-8")>
                    <div class="overflow-hidden">
                        <div
                            class="flex transition-transform duration-500 ease-out"
                            style=move || format!("transform: translateX(-{}%)", slide.get() * 100)
                        >
                            {SKILL_CATEGORIES
                                .iter()
                                .map(|category| {
                                    view! {
                                        <div class="w-full flex-shrink-0 px-1">
                                            <div class="card p-6">{category_card(category)}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="flex justify-center gap-2 mt-6">
                        {(0..SKILL_CATEGORIES.len())
                            .map(|i| {
                                view! {
                                    <button
                                        class=move || {
                                            if slide.get() == i {
                                                "w-2.5 h-2.5 rounded-full transition-all duration-300 bg-accent scale-125"
                                            } else {
                                                "w-2.5 h-2.5 rounded-full transition-all duration-300 bg-border"
                                            }
                                        }
                                        aria-label=format!("Show skill group {}", i + 1)
                                        on:click=move |_| auto.with_value(|a| a.select(i))
                                    ></button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class=move || reveal_class(visible.get(), "mt-16 delay-700", "translate-y-12")>
                    <div class="text-center mb-8">
                        <h3 class="text-xl font-semibold mb-2">"Core Competencies"</h3>
                        <p class="text-text-subtle text-sm">"Primary technologies I work with daily"</p>
                    </div>
                    <div class="grid grid-cols-3 sm:grid-cols-4 lg:grid-cols-6 gap-3 sm:gap-4">
                        {CORE_COMPETENCIES
                            .iter()
                            .map(|(name, icon)| {
                                view! {
                                    <div class="card p-3 sm:p-4 text-center hover-lift group cursor-default">
                                        <div class="text-lg sm:text-2xl group-hover:scale-110 transition-transform duration-300">
                                            {*icon}
                                        </div>
                                        <div class="text-xs sm:text-sm font-medium">{*name}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
