use leptos::{html, prelude::*};

use crate::content::{gallery_span, GALLERY_IMAGES};
use crate::motion::Threshold;

use super::motion::{reveal_class, use_reveal};

#[component]
pub fn Gallery() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let visible = use_reveal(section, Threshold::SECTION);

    view! {
        <section id="gallery" node_ref=section class="py-24 px-6 bg-surface">
            <div class="max-w-7xl mx-auto">
                <div class=move || reveal_class(visible.get(), "mb-16 text-center", "translate-y-12")>
                    <div class="flex items-center justify-center mb-4">
                        <span class="section-number">"06"</span>
                        <div class="w-16 h-0.5 bg-accent ml-4"></div>
                    </div>
                    <h2 class="section-title">"My Hobbies & Interests"</h2>
                    <p class="text-lg text-text-subtle max-w-2xl mx-auto">
                        "Beyond coding and consulting, I explore creativity through various passions that keep me inspired and balanced."
                    </p>
                </div>

                <div class="grid grid-cols-2 md:grid-cols-4 lg:grid-cols-5 gap-3 auto-rows-auto">
                    {GALLERY_IMAGES
                        .iter()
                        .enumerate()
                        .map(|(i, src)| {
                            let base = format!(
                                "{} group relative overflow-hidden rounded-xl hover:scale-105 hover:z-10",
                                gallery_span(i),
                            );
                            let delay = move || {
                                if visible.get() {
                                    format!("transition-delay: {}ms", i * 80)
                                } else {
                                    "transition-delay: 0ms".to_string()
                                }
                            };
                            view! {
                                <div class=move || reveal_class(visible.get(), &base, "translate-y-8") style=delay>
                                    <div class="aspect-square w-full h-full min-h-[150px]">
                                        <img
                                            src=*src
                                            alt=format!("Gallery image {}", i + 1)
                                            loading="lazy"
                                            class="w-full h-full object-cover transition-all duration-500 group-hover:brightness-110"
                                        />
                                        <div class="absolute inset-0 bg-gradient-to-t from-black/40 via-transparent to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
