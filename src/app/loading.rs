use leptos::prelude::*;

use crate::motion::loading::{LoadingPhase, LoadingSnapshot, CARDS};

#[cfg(feature = "hydrate")]
use super::motion::{hold_until_cleanup, BrowserScheduler};
#[cfg(feature = "hydrate")]
use crate::motion::loading::{self as shuffle, LoadingTiming};

#[component]
pub fn LoadingScreen(on_done: WriteSignal<bool>) -> impl IntoView {
    let (snapshot, set_snapshot) = signal(LoadingSnapshot {
        card: 0,
        phase: LoadingPhase::Shuffling,
    });

    #[cfg(feature = "hydrate")]
    hold_until_cleanup(shuffle::LoadingScreen::start(
        BrowserScheduler::default(),
        LoadingTiming::default(),
        move |snap| set_snapshot.set(snap),
        move || on_done.set(true),
    ));
    #[cfg(not(feature = "hydrate"))]
    let _ = (on_done, set_snapshot);

    let exiting = move || snapshot.get().phase != LoadingPhase::Shuffling;

    view! {
        <div class=move || {
            format!(
                "fixed inset-0 z-50 flex items-center justify-center bg-background transition-opacity duration-700 {}",
                if exiting() { "opacity-0" } else { "opacity-100" },
            )
        }>
            <div class="text-center space-y-8">
                <div class="relative w-32 h-44 mx-auto">
                    {CARDS
                        .iter()
                        .enumerate()
                        .map(|(index, card)| {
                            let colour = if card.is_red() { "text-red-500" } else { "text-foreground" };
                            let class = move || {
                                let face_up = snapshot.get().card == index;
                                format!(
                                    "absolute inset-0 w-32 h-44 bg-surface border-2 border-border rounded-xl flex flex-col items-center justify-between p-4 transition-all duration-500 {colour} {}",
                                    if face_up { "scale-110 z-10 opacity-100" } else { "opacity-40" },
                                )
                            };
                            let offset = format!(
                                "transform: translate({}px, {}px)",
                                index * 5,
                                index * 3,
                            );
                            view! {
                                <div class=class style=offset>
                                    <div class="text-2xl font-bold">{card.value.to_string()}</div>
                                    <div class="text-4xl">{card.suit.to_string()}</div>
                                    <div class="text-2xl font-bold rotate-180">
                                        {card.value.to_string()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="space-y-4">
                    <h2 class="text-2xl font-bold gradient-text">"Loading Experience"</h2>
                    <div class="flex items-center justify-center space-x-2">
                        <div class="w-2 h-2 bg-accent rounded-full animate-bounce"></div>
                        <div class="w-2 h-2 bg-accent rounded-full animate-bounce [animation-delay:200ms]"></div>
                        <div class="w-2 h-2 bg-accent rounded-full animate-bounce [animation-delay:400ms]"></div>
                    </div>
                </div>
            </div>
        </div>
    }
}
