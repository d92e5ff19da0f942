use leptos::prelude::*;
use leptos_use::use_window_scroll;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::nav::{active_section, is_scrolled, MobileMenu, NavItem, SectionBounds, NAV_ITEMS};

/// Smooth-scrolls to the section with id `anchor`, if it's on the page.
pub fn scroll_to_section(anchor: &str) {
    let Some(el) = document().get_element_by_id(anchor) else {
        log::debug!("no section #{anchor} to scroll to");
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

fn scroll_to_top() {
    let opts = ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

fn measure_sections() -> Option<&'static str> {
    let document = document();
    let bounds: Vec<_> = NAV_ITEMS
        .iter()
        .filter_map(|item| {
            let rect = document.get_element_by_id(item.anchor)?.get_bounding_client_rect();
            Some(SectionBounds {
                anchor: item.anchor,
                top: rect.top(),
                bottom: rect.bottom(),
            })
        })
        .collect();
    active_section(&bounds)
}

#[component]
pub fn Navigation() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let (menu, set_menu) = signal(MobileMenu::default());
    let (active, set_active) = signal(None::<&'static str>);

    // keeps the last match when the marker line falls between sections
    Effect::new(move |_| {
        scroll_y.track();
        if let Some(section) = measure_sections() {
            if active.get_untracked() != Some(section) {
                set_active.set(Some(section));
            }
        }
    });

    let go = move |anchor: &'static str| {
        scroll_to_section(anchor);
        set_menu.update(MobileMenu::navigate);
    };
    let is_active = move |item: &NavItem| active.get() == Some(item.anchor);

    view! {
        <nav class=move || {
            if is_scrolled(scroll_y.get()) {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-background/95 backdrop-blur-md border-b border-border shadow-lg"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent"
            }
        }>
            <div class="max-w-6xl mx-auto px-6">
                <div class="flex items-center justify-between h-16">
                    <button
                        class="text-xl font-bold hover:text-accent transition-colors duration-300"
                        on:click=move |_| {
                            scroll_to_top();
                            set_menu.update(MobileMenu::navigate);
                        }
                    >
                        "gova.dev"
                    </button>

                    <div class="hidden md:flex items-center space-x-8">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <button
                                        class=move || {
                                            if is_active(item) {
                                                "relative text-sm font-medium transition-colors duration-300 hover:text-accent text-accent"
                                            } else {
                                                "relative text-sm font-medium transition-colors duration-300 hover:text-accent text-text-subtle"
                                            }
                                        }
                                        on:click=move |_| go(item.anchor)
                                    >
                                        {item.label}
                                        <Show when=move || is_active(item)>
                                            <div class="absolute -bottom-1 left-0 right-0 h-0.5 bg-accent"></div>
                                        </Show>
                                    </button>
                                }
                            })
                            .collect_view()}
                        <button class="btn-accent btn-sm" on:click=move |_| go("contact")>
                            "Hire Me"
                        </button>
                    </div>

                    <button
                        class="md:hidden p-2 text-foreground hover:text-accent transition-colors duration-300"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu.update(MobileMenu::toggle)
                    >
                        {move || if menu.get().is_open() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || menu.get().is_open()>
                <div class="md:hidden border-t border-border bg-background/95 backdrop-blur-md">
                    <div class="px-6 py-4 space-y-4">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <button
                                        class=move || {
                                            if is_active(item) {
                                                "block w-full text-left text-sm font-medium hover:text-accent text-accent"
                                            } else {
                                                "block w-full text-left text-sm font-medium hover:text-accent text-text-subtle"
                                            }
                                        }
                                        on:click=move |_| go(item.anchor)
                                    >
                                        {item.label}
                                    </button>
                                }
                            })
                            .collect_view()}
                        <button class="btn-accent btn-sm w-full mt-4" on:click=move |_| go("contact")>
                            "Hire Me"
                        </button>
                    </div>
                </div>
            </Show>
        </nav>

        <div class="fixed right-6 top-1/2 -translate-y-1/2 z-40 hidden lg:block">
            <div class="space-y-3">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        view! {
                            <button
                                class=move || {
                                    if is_active(item) {
                                        "block w-3 h-3 rounded-full transition-all duration-300 bg-accent scale-125"
                                    } else {
                                        "block w-3 h-3 rounded-full transition-all duration-300 bg-border hover:bg-accent/50"
                                    }
                                }
                                title=item.label
                                aria-label=item.label
                                on:click=move |_| go(item.anchor)
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
