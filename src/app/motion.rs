use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::motion::reveal::RatioCallback;
use crate::motion::{
    IntersectionSource, RevealOnVisible, SubscriptionId, Task, Threshold, TimeoutBackend,
    TimeoutScheduler,
};

/// `setTimeout` as a [`TimeoutBackend`]; refused timeouts are deferred to a
/// local task.
#[derive(Clone, Copy, Default)]
pub struct BrowserTimeouts;

impl TimeoutBackend for BrowserTimeouts {
    type Handle = TimeoutHandle;

    fn set_timeout(&self, delay: Duration, fire: Task) -> Result<TimeoutHandle, String> {
        set_timeout_with_handle(fire, delay).map_err(|err| format!("{err:?}"))
    }

    fn clear(&self, handle: TimeoutHandle) {
        handle.clear();
    }

    fn defer(&self, task: Task) {
        leptos::task::spawn_local(async move { task() });
    }
}

pub type BrowserScheduler = TimeoutScheduler<BrowserTimeouts>;

type Stop = Arc<dyn Fn() + Send + Sync>;

/// [`IntersectionSource`] over the browser's `IntersectionObserver`.
#[derive(Clone, Default)]
pub struct ViewportObserver {
    stops: Arc<Mutex<(u64, HashMap<u64, Stop>)>>,
}

impl IntersectionSource for ViewportObserver {
    type Target = NodeRef<html::Section>;

    fn observe(
        &self,
        target: &NodeRef<html::Section>,
        threshold: Threshold,
        on_change: RatioCallback,
    ) -> SubscriptionId {
        let on_change = Arc::new(Mutex::new(on_change));
        let observer = use_intersection_observer_with_options(
            *target,
            move |entries, _| {
                let Ok(mut on_change) = on_change.lock() else {
                    return;
                };
                for entry in entries {
                    on_change(entry.intersection_ratio());
                }
            },
            UseIntersectionObserverOptions::default().thresholds(vec![threshold.value()]),
        );

        let mut stops = self.stops.lock().unwrap_or_else(|e| e.into_inner());
        let id = stops.0;
        stops.0 += 1;
        stops.1.insert(id, Arc::new(observer.stop));
        SubscriptionId(id)
    }

    fn unobserve(&self, id: SubscriptionId) {
        let stop = self
            .stops
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .1
            .remove(&id.0);
        if let Some(stop) = stop {
            stop();
        }
    }
}

/// Keeps `value` alive until the current reactive owner is cleaned up, then
/// drops it (which is how the motion types release their timers).
pub fn hold_until_cleanup<T: Send + Sync + 'static>(value: T) {
    let slot = Arc::new(Mutex::new(Some(value)));
    on_cleanup(move || {
        if let Ok(mut slot) = slot.lock() {
            slot.take();
        }
    });
}

/// Flips to `true` once `target` is at least `threshold` visible and stays
/// that way.
pub fn use_reveal(target: NodeRef<html::Section>, threshold: Threshold) -> ReadSignal<bool> {
    let (visible, set_visible) = signal(false);
    let reveal = RevealOnVisible::attach_with(
        ViewportObserver::default(),
        Some(&target),
        threshold,
        move |_| set_visible.set(true),
    );
    hold_until_cleanup(reveal);
    visible
}

/// Tailwind classes for an element that slides in from `hidden` once
/// `visible`.
pub fn reveal_class(visible: bool, base: &str, hidden: &str) -> String {
    if visible {
        format!("{base} transform transition-all duration-1000 translate-x-0 translate-y-0 opacity-100")
    } else {
        format!("{base} transform transition-all duration-1000 {hidden} opacity-0")
    }
}
