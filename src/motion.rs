//! Timer-driven presentation mechanics shared by the page sections.
//!
//! Nothing in here touches the DOM; the `app` module adapts these state
//! machines to Leptos signals and browser timers.

pub mod carousel;
pub mod loading;
pub mod reveal;
pub mod timer;
pub mod typewriter;

use std::time::Duration;

use thiserror::Error;

pub use carousel::{AutoAdvance, Carousel};
pub use loading::{LoadingPhase, LoadingScreen};
pub use reveal::{IntersectionSource, RevealGate, RevealOnVisible, SubscriptionId, Threshold};
pub use timer::{
    Jitter, ManualScheduler, Scheduler, Task, TimeoutBackend, TimeoutScheduler, TimerId,
};
pub use typewriter::{
    Frame, LineStyle, Playback, RevealedLine, StyleRule, TerminalScript, Timing,
    TypewriterSequencer,
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    #[error("threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f64),
    #[error("jitter lower bound {min:?} exceeds upper bound {max:?}")]
    InvalidJitter { min: Duration, max: Duration },
}
