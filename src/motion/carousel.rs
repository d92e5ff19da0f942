use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::timer::{Scheduler, TimerId};

/// Wrapping slide index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.index = if self.index == 0 {
                self.len - 1
            } else {
                self.index - 1
            };
        }
        self.index
    }

    /// Jumps to `index`; out-of-range requests are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }
}

pub const TESTIMONIAL_INTERVAL: Duration = Duration::from_secs(5);
/// Dwell per skill card in the narrow-screen slider.
pub const SKILL_SLIDE_INTERVAL: Duration = Duration::from_millis(2500);

type Listener = Arc<dyn Fn(usize) + Send + Sync + 'static>;

struct AdvanceState {
    carousel: Carousel,
    pending: Option<TimerId>,
    disposed: bool,
}

/// Advances a [`Carousel`] on a fixed interval once started.
///
/// Manual navigation restarts the interval so a slide the visitor just picked
/// gets a full dwell.
pub struct AutoAdvance<S: Scheduler> {
    state: Arc<Mutex<AdvanceState>>,
    scheduler: S,
    interval: Duration,
    listener: Listener,
}

impl<S: Scheduler> AutoAdvance<S> {
    pub fn new<F>(len: usize, interval: Duration, scheduler: S, on_change: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        Self {
            state: Arc::new(Mutex::new(AdvanceState {
                carousel: Carousel::new(len),
                pending: None,
                disposed: false,
            })),
            scheduler,
            interval,
            listener: Arc::new(on_change),
        }
    }

    pub fn index(&self) -> usize {
        self.state.lock().map(|s| s.carousel.index()).unwrap_or(0)
    }

    pub fn is_running(&self) -> bool {
        self.state
            .lock()
            .map(|s| s.pending.is_some())
            .unwrap_or(false)
    }

    /// Starts (or restarts) the interval.
    pub fn start(&self) {
        let Ok(mut s) = self.state.lock() else {
            return;
        };
        if s.disposed || s.carousel.len() < 2 {
            return;
        }
        if let Some(id) = s.pending.take() {
            self.scheduler.cancel(id);
        }
        drop(s);
        schedule_advance(&self.state, &self.scheduler, &self.listener, self.interval);
    }

    /// Cancels the pending advance, keeping the current slide. `start`
    /// resumes it.
    pub fn stop(&self) {
        let Ok(mut s) = self.state.lock() else {
            return;
        };
        if let Some(id) = s.pending.take() {
            self.scheduler.cancel(id);
        }
    }

    pub fn next(&self) {
        self.navigate(|c| {
            c.next();
        });
    }

    pub fn prev(&self) {
        self.navigate(|c| {
            c.prev();
        });
    }

    pub fn select(&self, index: usize) {
        self.navigate(|c| {
            c.select(index);
        });
    }

    fn navigate(&self, f: impl FnOnce(&mut Carousel)) {
        let (index, running) = {
            let Ok(mut s) = self.state.lock() else {
                return;
            };
            if s.disposed {
                return;
            }
            f(&mut s.carousel);
            (s.carousel.index(), s.pending.is_some())
        };
        (self.listener)(index);
        if running {
            self.start();
        }
    }

    pub fn dispose(&self) {
        let Ok(mut s) = self.state.lock() else {
            return;
        };
        s.disposed = true;
        if let Some(id) = s.pending.take() {
            self.scheduler.cancel(id);
        }
    }
}

impl<S: Scheduler> Drop for AutoAdvance<S> {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn schedule_advance<S: Scheduler>(
    state: &Arc<Mutex<AdvanceState>>,
    scheduler: &S,
    listener: &Listener,
    interval: Duration,
) {
    let Ok(mut s) = state.lock() else {
        return;
    };
    if s.disposed {
        return;
    }
    let task_state = state.clone();
    let task_sched = scheduler.clone();
    let task_listener = listener.clone();
    s.pending = Some(scheduler.schedule(
        interval,
        Box::new(move || {
            let index = {
                let Ok(mut s) = task_state.lock() else {
                    return;
                };
                if s.disposed {
                    return;
                }
                s.pending = None;
                s.carousel.next()
            };
            task_listener(index);
            schedule_advance(&task_state, &task_sched, &task_listener, interval);
        }),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::timer::ManualScheduler;

    #[test]
    fn test_wrapping_navigation() {
        let mut c = Carousel::new(3);
        assert_eq!(c.prev(), 2);
        assert_eq!(c.next(), 0);
        assert_eq!(c.next(), 1);
        assert!(c.select(2));
        assert!(!c.select(3));
        assert_eq!(c.index(), 2);

        let mut empty = Carousel::new(0);
        assert_eq!(empty.next(), 0);
        assert_eq!(empty.prev(), 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_auto_advance_after_start() {
        let sched = ManualScheduler::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let s = seen.clone();
        let auto = AutoAdvance::new(3, TESTIMONIAL_INTERVAL, sched.clone(), move |i| {
            s.lock().unwrap().push(i)
        });
        sched.advance(Duration::from_secs(20));
        assert!(seen.lock().unwrap().is_empty());

        auto.start();
        sched.advance(Duration::from_secs(15));
        assert_eq!(*seen.lock().unwrap(), vec![1, 2, 0]);
        assert!(auto.is_running());
    }

    #[test]
    fn test_manual_navigation_restarts_dwell() {
        let sched = ManualScheduler::new();
        let auto = AutoAdvance::new(3, TESTIMONIAL_INTERVAL, sched.clone(), |_| {});
        auto.start();
        sched.advance(Duration::from_secs(4));
        auto.select(2);
        sched.advance(Duration::from_secs(4));
        assert_eq!(auto.index(), 2);
        sched.advance(Duration::from_secs(1));
        assert_eq!(auto.index(), 0);
        assert_eq!(sched.pending(), 1);
    }

    #[test]
    fn test_single_slide_never_schedules() {
        let sched = ManualScheduler::new();
        let auto = AutoAdvance::new(1, TESTIMONIAL_INTERVAL, sched.clone(), |_| {});
        auto.start();
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_dispose_stops_advancing() {
        let sched = ManualScheduler::new();
        let auto = AutoAdvance::new(3, TESTIMONIAL_INTERVAL, sched.clone(), |_| {});
        auto.start();
        auto.dispose();
        auto.next();
        sched.advance(Duration::from_secs(30));
        assert_eq!(auto.index(), 0);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_skill_slider_dwell_and_stop() {
        let sched = ManualScheduler::new();
        let auto = AutoAdvance::new(6, SKILL_SLIDE_INTERVAL, sched.clone(), |_| {});
        auto.start();
        sched.advance(Duration::from_millis(5000));
        assert_eq!(auto.index(), 2);

        sched.advance(Duration::from_millis(2000));
        auto.select(4);
        sched.advance(Duration::from_millis(2000));
        assert_eq!(auto.index(), 4);
        sched.advance(Duration::from_millis(500));
        assert_eq!(auto.index(), 5);

        auto.stop();
        assert!(!auto.is_running());
        sched.advance(Duration::from_secs(30));
        assert_eq!(auto.index(), 5);

        // manual navigation while stopped doesn't resume the interval
        auto.next();
        assert_eq!(auto.index(), 0);
        assert_eq!(sched.pending(), 0);
        auto.start();
        sched.advance(SKILL_SLIDE_INTERVAL);
        assert_eq!(auto.index(), 1);
    }
}
