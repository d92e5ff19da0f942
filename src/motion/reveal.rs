use std::sync::{Arc, Mutex};

use super::MotionError;

/// Fraction of a target's area that must be on screen, in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    /// Sections with short bodies.
    pub const SECTION: Threshold = Threshold(0.3);
    /// Tall sections (projects, testimonials) that rarely show 30% at once.
    pub const TALL_SECTION: Threshold = Threshold(0.2);

    pub fn new(value: f64) -> Result<Self, MotionError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(MotionError::InvalidThreshold(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::SECTION
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateState {
    Pending,
    Visible,
}

/// One-shot visibility gate: `Pending -> Visible`, never back.
#[derive(Debug, Clone)]
pub struct RevealGate {
    threshold: Threshold,
    state: GateState,
    disposed: bool,
}

impl RevealGate {
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            state: GateState::Pending,
            disposed: false,
        }
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Feeds one intersection ratio. Returns `true` only for the observation
    /// that performs the transition.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.disposed || self.state == GateState::Visible {
            return false;
        }
        if ratio >= self.threshold.value() {
            self.state = GateState::Visible;
            return true;
        }
        false
    }

    pub fn is_visible(&self) -> bool {
        self.state == GateState::Visible
    }

    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Callback receiving the target's current intersection ratio.
pub type RatioCallback = Box<dyn FnMut(f64) + Send + 'static>;

/// The platform's viewport observer.
pub trait IntersectionSource {
    type Target: ?Sized;

    fn observe(
        &self,
        target: &Self::Target,
        threshold: Threshold,
        on_change: RatioCallback,
    ) -> SubscriptionId;

    fn unobserve(&self, id: SubscriptionId);
}

/// A [`RevealGate`] bound to one observation subscription.
///
/// Dropping (or calling [`RevealOnVisible::dispose`]) unregisters the
/// subscription whether or not the gate already fired.
pub struct RevealOnVisible<S: IntersectionSource> {
    gate: Arc<Mutex<RevealGate>>,
    source: S,
    subscription: Option<SubscriptionId>,
}

impl<S: IntersectionSource> RevealOnVisible<S> {
    pub fn attach(source: S, target: Option<&S::Target>, threshold: Threshold) -> Self {
        Self::attach_with(source, target, threshold, |_| {})
    }

    /// Like [`RevealOnVisible::attach`], calling `on_reveal` once when the
    /// gate opens.
    pub fn attach_with<F>(
        source: S,
        target: Option<&S::Target>,
        threshold: Threshold,
        on_reveal: F,
    ) -> Self
    where
        F: Fn(f64) + Send + 'static,
    {
        let gate = Arc::new(Mutex::new(RevealGate::new(threshold)));
        let subscription = target.map(|target| {
            let gate = gate.clone();
            source.observe(
                target,
                threshold,
                Box::new(move |ratio| {
                    let opened = match gate.lock() {
                        Ok(mut gate) => gate.observe(ratio),
                        Err(_) => false,
                    };
                    if opened {
                        log::debug!("reveal gate opened at ratio {ratio:.2}");
                        on_reveal(ratio);
                    }
                }),
            )
        });
        if subscription.is_none() {
            log::debug!("reveal target missing; gate stays pending");
        }
        Self {
            gate,
            source,
            subscription,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.gate.lock().map(|g| g.is_visible()).unwrap_or(false)
    }

    pub fn is_observing(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn dispose(&mut self) {
        if let Ok(mut gate) = self.gate.lock() {
            gate.dispose();
        }
        if let Some(id) = self.subscription.take() {
            self.source.unobserve(id);
        }
    }
}

impl<S: IntersectionSource> Drop for RevealOnVisible<S> {
    fn drop(&mut self) {
        self.dispose();
    }
}
