use leptos::prelude::*;

use crate::content::{SocialKind, HERO_BLURB, HERO_KICKER, HERO_TITLE, SOCIAL_LINKS};

use super::navigation::scroll_to_section;
use super::terminal::TerminalWindow;

pub fn social_glyph(kind: SocialKind) -> &'static str {
    match kind {
        SocialKind::GitHub => "GH",
        SocialKind::LinkedIn => "in",
        SocialKind::Instagram => "IG",
        SocialKind::Email => "@",
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let (entered, set_entered) = signal(false);
    // slide in after the first client render
    Effect::new(move |_| set_entered.set(true));

    let slide = move |hidden: &'static str, delay: &'static str| {
        move || {
            if entered.get() {
                format!("transform transition-all duration-1000 {delay} translate-x-0 opacity-100")
            } else {
                format!("transform transition-all duration-1000 {delay} {hidden} opacity-0")
            }
        }
    };

    view! {
        <section id="hero" class="min-h-screen flex items-center justify-center relative px-6 pt-16">
            <div class="max-w-6xl mx-auto grid lg:grid-cols-2 gap-12 items-center">
                <div class=slide("-translate-x-12", "")>
                    <TerminalWindow />
                </div>

                <div class=move || format!("text-center lg:text-left {}", slide("translate-x-12", "delay-300")())>
                    <div class="space-y-6">
                        <div class="space-y-4">
                            <div class="inline-block">
                                <span class="section-number">"01"</span>
                                <div class="w-16 h-0.5 bg-accent inline-block ml-4"></div>
                            </div>
                            <h1 class="section-title">
                                <span class="block text-2xl md:text-3xl font-normal text-text-subtle mb-2">
                                    {HERO_KICKER}
                                </span>
                                <span class="gradient-text">{HERO_TITLE}</span>
                            </h1>
                        </div>

                        <p class="text-lg md:text-xl text-text-subtle max-w-2xl leading-relaxed">
                            {HERO_BLURB}
                        </p>

                        <div class="flex flex-col sm:flex-row gap-4 pt-6">
                            <button class="btn-accent btn-lg group" on:click=move |_| scroll_to_section("projects")>
                                "View My Work"
                                <span class="ml-2 inline-block transition-transform group-hover:translate-y-1">"↓"</span>
                            </button>
                            <button class="btn-minimal btn-lg" on:click=move |_| scroll_to_section("contact")>
                                "Get In Touch"
                            </button>
                        </div>

                        <div class="flex justify-center lg:justify-start space-x-6 pt-8">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=link.label
                                            class="font-mono font-bold text-text-subtle hover:text-accent transition-colors duration-300"
                                        >
                                            {social_glyph(link.kind)}
                                        </a>
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
