use std::sync::Arc;

use leptos::{html, prelude::*};

use crate::content::TESTIMONIALS;
use crate::motion::carousel::TESTIMONIAL_INTERVAL;
use crate::motion::{AutoAdvance, Threshold};

use super::motion::{reveal_class, use_reveal, BrowserScheduler};

#[component]
pub fn Testimonials() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let visible = use_reveal(section, Threshold::TALL_SECTION);
    let (index, set_index) = signal(0usize);

    let auto = Arc::new(AutoAdvance::new(
        TESTIMONIALS.len(),
        TESTIMONIAL_INTERVAL,
        BrowserScheduler::default(),
        move |i| set_index.set(i),
    ));
    on_cleanup({
        let auto = auto.clone();
        move || auto.dispose()
    });
    let auto = StoredValue::new(auto);

    Effect::new(move |_| {
        if visible.get() {
            auto.with_value(|a| a.start());
        }
    });

    let current = move || TESTIMONIALS[index.get() % TESTIMONIALS.len()];

    view! {
        <section id="testimonials" node_ref=section class="py-24 px-6 bg-surface-elevated">
            <div class="max-w-4xl mx-auto">
                <div class=move || reveal_class(visible.get(), "mb-16 text-center", "translate-y-12")>
                    <div class="flex items-center justify-center mb-8">
                        <span class="section-number">"07"</span>
                        <div class="w-16 h-0.5 bg-accent ml-4"></div>
                    </div>
                    <h2 class="section-title">"Client Testimonials"</h2>
                    <p class="text-lg text-text-subtle max-w-2xl mx-auto">
                        "What clients and collaborators say about working with me"
                    </p>
                </div>

                <div class=move || reveal_class(visible.get(), "relative delay-300", "translate-y-12")>
                    <div class="card relative p-8 md:p-12 bg-surface overflow-hidden">
                        <span class="absolute top-6 right-6 text-6xl text-accent/10 font-serif">"“"</span>
                        <div class="relative z-10">
                            <div class="flex flex-col md:flex-row items-center gap-8 mb-8">
                                <div class="relative">
                                    <div class="w-20 h-20 md:w-24 md:h-24 rounded-full overflow-hidden border-4 border-accent/20 hover-lift">
                                        <img
                                            src=move || current().image
                                            alt=move || current().name
                                            class="w-full h-full object-cover"
                                        />
                                    </div>
                                    <div class="absolute -bottom-2 -right-2 w-6 h-6 bg-accent rounded-full border-2 border-surface"></div>
                                </div>
                                <div class="text-center md:text-left">
                                    <h4 class="text-xl font-semibold mb-1">{move || current().name}</h4>
                                    <p class="text-accent font-medium">{move || current().position}</p>
                                </div>
                            </div>
                            <blockquote class="text-lg md:text-xl leading-relaxed text-text-subtle italic text-justify">
                                {move || format!("\"{}\"", current().text)}
                            </blockquote>
                        </div>
                    </div>

                    <div class="flex items-center justify-between mt-8">
                        <button
                            class="btn-minimal btn-sm"
                            aria-label="Previous testimonial"
                            on:click=move |_| auto.with_value(|a| a.prev())
                        >
                            "‹"
                        </button>
                        <div class="flex space-x-2">
                            {(0..TESTIMONIALS.len())
                                .map(|i| {
                                    view! {
                                        <button
                                            class=move || {
                                                if index.get() == i {
                                                    "w-3 h-3 rounded-full transition-all duration-300 bg-accent scale-125"
                                                } else {
                                                    "w-3 h-3 rounded-full transition-all duration-300 bg-border hover:bg-accent/50"
                                                }
                                            }
                                            aria-label=format!("Go to testimonial {}", i + 1)
                                            on:click=move |_| auto.with_value(|a| a.select(i))
                                        ></button>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <button
                            class="btn-minimal btn-sm"
                            aria-label="Next testimonial"
                            on:click=move |_| auto.with_value(|a| a.next())
                        >
                            "›"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
