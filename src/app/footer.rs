use chrono::{DateTime, Datelike, Local};
use leptos::prelude::*;

use crate::config::OWNER;
use crate::content::{SOCIAL_LINKS, SOURCE_REPO};

use super::hero::social_glyph;

/// Build date stamped by `build.rs`, if it parses.
fn built_on() -> Option<String> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|dt| dt.format("%Y-%m-%d").to_string())
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = Local::now().year();

    view! {
        <footer class="py-12 px-6 border-t border-border bg-surface">
            <div class="max-w-6xl mx-auto">
                <div class="flex flex-col md:flex-row justify-between items-center gap-6">
                    <div class="text-center md:text-left">
                        <h3 class="text-xl font-bold mb-2">{OWNER}</h3>
                        <p class="text-text-subtle text-sm flex items-center gap-1 justify-center md:justify-start">
                            {format!("© {year} Built with")}
                            <span class="text-accent">"♥"</span>
                            "and lots of caffeine"
                        </p>
                    </div>
                    <div class="flex items-center gap-4">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=link.label
                                        class="p-2 font-mono font-bold text-text-subtle hover:text-accent transition-colors duration-300"
                                    >
                                        {social_glyph(link.kind)}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="mt-8 pt-6 border-t border-border text-center">
                    <p class="text-text-subtle text-xs">
                        "This website is open source and available on "
                        <a
                            href=SOURCE_REPO
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-accent hover:underline"
                        >
                            "GitHub"
                        </a>
                    </p>
                    {built_on()
                        .map(|date| {
                            view! { <p class="text-text-subtle text-xs mt-2 font-mono">"built " {date}</p> }
                        })}
                </div>
            </div>
        </footer>
    }
}
