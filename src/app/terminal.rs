use leptos::prelude::*;

use crate::content::hero_script;
use crate::motion::{Frame, Playback};

#[cfg(feature = "hydrate")]
use super::motion::{hold_until_cleanup, BrowserScheduler};
#[cfg(feature = "hydrate")]
use crate::motion::{Timing, TypewriterSequencer};

/// Fake shell window that types out the hero script.
#[component]
pub fn TerminalWindow() -> impl IntoView {
    let (frame, set_frame) = signal(Playback::new(hero_script()).frame());

    #[cfg(feature = "hydrate")]
    hold_until_cleanup(TypewriterSequencer::start(
        hero_script(),
        Timing::default(),
        BrowserScheduler::default(),
        move |f: &Frame| set_frame.set(f.clone()),
    ));
    #[cfg(not(feature = "hydrate"))]
    let _ = set_frame;

    let lines = move || {
        let frame: Frame = frame.get();
        frame
            .started()
            .iter()
            .map(|line| {
                let class = line.style.class();
                let text = line.text.clone();
                let cursor = line.active.then(|| {
                    view! { <span class="animate-pulse text-green">"|"</span> }
                });
                view! {
                    <div class="mb-2">
                        <span class=class>{text}{cursor}</span>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="w-full max-w-lg mx-auto lg:mx-0">
            <div class="bg-gray-900 rounded-lg border border-gray-700 shadow-2xl overflow-hidden">
                <div class="flex items-center justify-between px-4 py-3 bg-gray-800 border-b border-gray-700">
                    <div class="flex items-center space-x-2">
                        <div class="w-3 h-3 bg-red-500 rounded-full"></div>
                        <div class="w-3 h-3 bg-yellow-500 rounded-full"></div>
                        <div class="w-3 h-3 bg-green-500 rounded-full"></div>
                    </div>
                    <div class="text-gray-400 text-sm font-mono">"terminal"</div>
                    <div class="w-16"></div>
                </div>
                <div class="p-4 font-mono text-sm bg-gray-900 min-h-[400px]">{lines}</div>
            </div>
        </div>
    }
}
