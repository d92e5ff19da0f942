use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::timer::{Scheduler, TimerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub value: char,
    pub suit: char,
}

impl Card {
    pub fn is_red(&self) -> bool {
        matches!(self.suit, '♥' | '♦')
    }
}

pub const CARDS: [Card; 4] = [
    Card { value: 'A', suit: '♠' },
    Card { value: 'K', suit: '♥' },
    Card { value: 'Q', suit: '♦' },
    Card { value: 'J', suit: '♣' },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPhase {
    Shuffling,
    /// Fading out; the page is not mounted yet.
    Exiting,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingTiming {
    pub card_interval: Duration,
    pub exit_after: Duration,
    pub fade_out: Duration,
}

impl Default for LoadingTiming {
    fn default() -> Self {
        Self {
            card_interval: Duration::from_millis(500),
            exit_after: Duration::from_millis(3000),
            fade_out: Duration::from_millis(800),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingSnapshot {
    pub card: usize,
    pub phase: LoadingPhase,
}

type Listener = Arc<dyn Fn(LoadingSnapshot) + Send + Sync + 'static>;
type Completion = Box<dyn FnOnce() + Send + 'static>;

struct LoadState {
    card: usize,
    phase: LoadingPhase,
    cycle: Option<TimerId>,
    exit: Option<TimerId>,
    on_complete: Option<Completion>,
    disposed: bool,
}

impl LoadState {
    fn snapshot(&self) -> LoadingSnapshot {
        LoadingSnapshot {
            card: self.card,
            phase: self.phase,
        }
    }
}

/// Card-flip splash shown before the page mounts.
///
/// Cycles through [`CARDS`] on a fixed interval, starts exiting after
/// `exit_after`, and runs the completion callback once `fade_out` later.
pub struct LoadingScreen<S: Scheduler> {
    state: Arc<Mutex<LoadState>>,
    scheduler: S,
}

impl<S: Scheduler> LoadingScreen<S> {
    pub fn start<F, C>(scheduler: S, timing: LoadingTiming, on_change: F, on_complete: C) -> Self
    where
        F: Fn(LoadingSnapshot) + Send + Sync + 'static,
        C: FnOnce() + Send + 'static,
    {
        let listener: Listener = Arc::new(on_change);
        let state = Arc::new(Mutex::new(LoadState {
            card: 0,
            phase: LoadingPhase::Shuffling,
            cycle: None,
            exit: None,
            on_complete: Some(Box::new(on_complete)),
            disposed: false,
        }));
        listener(LoadingSnapshot {
            card: 0,
            phase: LoadingPhase::Shuffling,
        });
        schedule_cycle(&state, &scheduler, &listener, timing.card_interval);

        let exit_state = state.clone();
        let exit_sched = scheduler.clone();
        let exit_listener = listener.clone();
        let exit = scheduler.schedule(
            timing.exit_after,
            Box::new(move || begin_exit(&exit_state, &exit_sched, &exit_listener, timing.fade_out)),
        );
        if let Ok(mut s) = state.lock() {
            s.exit = Some(exit);
        }
        Self { state, scheduler }
    }

    pub fn snapshot(&self) -> LoadingSnapshot {
        self.state
            .lock()
            .map(|s| s.snapshot())
            .unwrap_or(LoadingSnapshot {
                card: 0,
                phase: LoadingPhase::Done,
            })
    }

    pub fn dispose(&self) {
        let Ok(mut s) = self.state.lock() else {
            return;
        };
        if s.disposed {
            return;
        }
        s.disposed = true;
        s.on_complete = None;
        for id in [s.cycle.take(), s.exit.take()].into_iter().flatten() {
            self.scheduler.cancel(id);
        }
    }
}

impl<S: Scheduler> Drop for LoadingScreen<S> {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn schedule_cycle<S: Scheduler>(
    state: &Arc<Mutex<LoadState>>,
    scheduler: &S,
    listener: &Listener,
    interval: Duration,
) {
    let Ok(mut s) = state.lock() else {
        return;
    };
    if s.disposed || s.phase == LoadingPhase::Done {
        return;
    }
    let task_state = state.clone();
    let task_sched = scheduler.clone();
    let task_listener = listener.clone();
    s.cycle = Some(scheduler.schedule(
        interval,
        Box::new(move || {
            let snapshot = {
                let Ok(mut s) = task_state.lock() else {
                    return;
                };
                if s.disposed || s.phase == LoadingPhase::Done {
                    return;
                }
                s.cycle = None;
                s.card = (s.card + 1) % CARDS.len();
                s.snapshot()
            };
            task_listener(snapshot);
            schedule_cycle(&task_state, &task_sched, &task_listener, interval);
        }),
    ));
}

fn begin_exit<S: Scheduler>(
    state: &Arc<Mutex<LoadState>>,
    scheduler: &S,
    listener: &Listener,
    fade_out: Duration,
) {
    let snapshot = {
        let Ok(mut s) = state.lock() else {
            return;
        };
        if s.disposed {
            return;
        }
        s.phase = LoadingPhase::Exiting;
        s.snapshot()
    };
    listener(snapshot);

    let Ok(mut s) = state.lock() else {
        return;
    };
    if s.disposed {
        return;
    }
    let task_state = state.clone();
    let task_sched = scheduler.clone();
    let task_listener = listener.clone();
    s.exit = Some(scheduler.schedule(
        fade_out,
        Box::new(move || {
            let (snapshot, done) = {
                let Ok(mut s) = task_state.lock() else {
                    return;
                };
                if s.disposed {
                    return;
                }
                s.exit = None;
                s.phase = LoadingPhase::Done;
                if let Some(id) = s.cycle.take() {
                    task_sched.cancel(id);
                }
                (s.snapshot(), s.on_complete.take())
            };
            task_listener(snapshot);
            if let Some(done) = done {
                log::debug!("loading screen finished");
                done();
            }
        }),
    ));
}
