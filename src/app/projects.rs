use leptos::{either::Either, html, prelude::*};

use crate::content::{featured_projects, other_projects, Project, ProjectLink};
use crate::motion::Threshold;

use super::motion::{reveal_class, use_reveal};
use super::ticker::TradingDashboard;

fn tech_tags(tech: &'static [&'static str]) -> impl IntoView {
    tech.iter()
        .map(|t| view! { <span class="tag font-mono">{*t}</span> })
        .collect_view()
}

fn live_link(project: &Project, label: &'static str, class: &'static str) -> impl IntoView {
    match project.live {
        ProjectLink::Url(href) => Either::Left(view! {
            <a href=href target="_blank" rel="noopener noreferrer" class=class>
                {label}
            </a>
        }),
        ProjectLink::Status(status) => Either::Right(view! {
            <span class="text-sm font-mono text-text-subtle">{status}</span>
        }),
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let visible = use_reveal(section, Threshold::TALL_SECTION);

    view! {
        <section id="projects" node_ref=section class="py-24 px-6">
            <div class="max-w-6xl mx-auto">
                <div class=move || reveal_class(visible.get(), "mb-16", "translate-y-12")>
                    <div class="flex items-center mb-4">
                        <span class="section-number">"03"</span>
                        <div class="w-16 h-0.5 bg-accent ml-4"></div>
                    </div>
                    <h2 class="section-title">"Featured Work"</h2>
                    <p class="text-lg text-text-subtle max-w-2xl">
                        "A collection of projects that showcase my skills in full-stack development, UI/UX design, and problem-solving."
                    </p>
                </div>

                <div class="space-y-24 mb-24">
                    {featured_projects()
                        .enumerate()
                        .map(|(i, project)| {
                            let flipped = i % 2 == 1;
                            let art = if project.dashboard {
                                Either::Left(view! {
                                    <div class="card aspect-video overflow-hidden border-none hover-lift">
                                        <TradingDashboard />
                                    </div>
                                })
                            } else {
                                Either::Right(view! {
                                    <div class="card aspect-video bg-gradient-warm border-none hover-lift overflow-hidden flex items-center justify-center">
                                        <div class="text-6xl font-bold text-accent/30">{project.number}</div>
                                    </div>
                                })
                            };
                            view! {
                                <div class=move || reveal_class(visible.get(), "", "translate-y-12")>
                                    <div class="grid lg:grid-cols-2 gap-12 items-center">
                                        <div class=if flipped { "lg:order-2" } else { "" }>{art}</div>
                                        <div class=if flipped { "space-y-6 lg:order-1" } else { "space-y-6" }>
                                            <div>
                                                <div class="flex items-center gap-4 mb-4">
                                                    <span class="text-accent font-mono text-sm">
                                                        {format!("Project {}", project.number)}
                                                    </span>
                                                    <div class="flex-1 h-px bg-border"></div>
                                                    {project
                                                        .status
                                                        .map(|s| view! { <span class="tag text-xs">{s}</span> })}
                                                </div>
                                                <h3 class="text-3xl font-bold mb-4">{project.title}</h3>
                                            </div>
                                            <p class="text-text-subtle text-lg leading-relaxed">{project.description}</p>
                                            <div class="flex flex-wrap gap-2">{tech_tags(project.tech)}</div>
                                            <div class="flex items-center gap-4 pt-4">
                                                {live_link(project, "Live Demo", "btn-accent btn-sm")}
                                                <a href=project.source target="_blank" rel="noopener noreferrer" class="btn-minimal btn-sm">
                                                    "Source Code"
                                                </a>
                                            </div>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class=move || reveal_class(visible.get(), "delay-700", "translate-y-12")>
                    <h3 class="text-2xl font-bold mb-8">"Other Projects"</h3>
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {other_projects()
                            .map(|project| {
                                view! {
                                    <div class="card p-6 hover-lift group">
                                        <div class="flex items-center justify-between mb-4">
                                            <span class="text-accent font-mono text-sm">{project.number}</span>
                                            <div class="flex items-center gap-3 text-sm">
                                                <a href=project.source target="_blank" rel="noopener noreferrer" class="text-text-subtle hover:text-accent">
                                                    "Code"
                                                </a>
                                                {live_link(project, "Live", "text-text-subtle hover:text-accent")}
                                            </div>
                                        </div>
                                        <h4 class="text-xl font-semibold mb-3 group-hover:text-accent transition-colors">
                                            {project.title}
                                        </h4>
                                        <p class="text-text-subtle mb-4">{project.description}</p>
                                        <div class="flex flex-wrap gap-2">{tech_tags(project.tech)}</div>
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
