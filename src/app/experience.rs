use leptos::{html, prelude::*};

use crate::content::{EDUCATION, EXPERIENCE};
use crate::motion::Threshold;

use super::motion::{reveal_class, use_reveal};

fn bullet_list(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="space-y-2">
            {items
                .iter()
                .map(|item| {
                    view! {
                        <li class="flex items-start gap-2 text-sm text-text-subtle">
                            <span class="mt-2 w-1.5 h-1.5 rounded-full bg-accent flex-shrink-0"></span>
                            {*item}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
pub fn Experience() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let visible = use_reveal(section, Threshold::SECTION);

    view! {
        <section id="experience" node_ref=section class="py-24 px-6">
            <div class="max-w-6xl mx-auto">
                <div class=move || reveal_class(visible.get(), "mb-16", "translate-y-12")>
                    <div class="flex items-center mb-4">
                        <span class="section-number">"05"</span>
                        <div class="w-16 h-0.5 bg-accent ml-4"></div>
                    </div>
                    <h2 class="section-title">"Experience & Education"</h2>
                </div>

                <div class="grid lg:grid-cols-3 gap-12">
                    <div class="lg:col-span-2">
                        <h3 class="text-2xl font-bold mb-8">"Professional Experience"</h3>
                        <div class="space-y-8">
                            {EXPERIENCE
                                .iter()
                                .enumerate()
                                .map(|(i, job)| {
                                    let delay = format!("transition-delay: {}ms", (i + 1) * 200);
                                    view! {
                                        <div class=move || reveal_class(visible.get(), "", "-translate-x-12") style=delay>
                                            <div class="card p-6 hover-lift">
                                                <div class="flex flex-col md:flex-row md:items-start md:justify-between mb-4">
                                                    <div>
                                                        <h4 class="text-xl font-semibold">{job.position}</h4>
                                                        <p class="text-accent font-medium">{job.company}</p>
                                                    </div>
                                                    <span class="text-sm text-text-subtle font-mono mt-2 md:mt-0">{job.period}</span>
                                                </div>
                                                <p class="text-text-subtle leading-relaxed mb-4">{job.description}</p>
                                                <div class="mb-4">{bullet_list(job.achievements)}</div>
                                                <div class="flex flex-wrap gap-2">
                                                    {job
                                                        .tech
                                                        .iter()
                                                        .map(|t| view! { <span class="tag font-mono">{*t}</span> })
                                                        .collect_view()}
                                                </div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class=move || reveal_class(visible.get(), "delay-700", "translate-x-12")>
                        <h3 class="text-2xl font-bold mb-8">"Education"</h3>
                        <div class="space-y-6">
                            {EDUCATION
                                .iter()
                                .map(|edu| {
                                    view! {
                                        <div class="card p-6">
                                            <div class="space-y-4">
                                                <div>
                                                    <h4 class="font-semibold">{edu.degree}</h4>
                                                    <p class="text-accent text-sm">{edu.institution}</p>
                                                    <span class="text-xs text-text-subtle font-mono">{edu.period}</span>
                                                </div>
                                                <p class="text-text-subtle text-sm leading-relaxed">{edu.description}</p>
                                                {bullet_list(edu.achievements)}
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
