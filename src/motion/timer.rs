use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use rand::Rng;

use super::MotionError;

pub type Task = Box<dyn FnOnce() + Send + 'static>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// The timer primitive everything in `motion` is built on.
///
/// Implementations must make [`Scheduler::cancel`] idempotent: cancelling a
/// timer that already fired, or was already cancelled, does nothing.
pub trait Scheduler: Clone + Send + Sync + 'static {
    fn schedule(&self, delay: Duration, task: Task) -> TimerId;
    fn cancel(&self, id: TimerId);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jitter {
    min: Duration,
    max: Duration,
}

impl Jitter {
    pub fn new(min: Duration, max: Duration) -> Result<Self, MotionError> {
        if min > max {
            return Err(MotionError::InvalidJitter { min, max });
        }
        Ok(Self { min, max })
    }

    pub const fn fixed(delay: Duration) -> Self {
        Self {
            min: delay,
            max: delay,
        }
    }

    pub fn min(&self) -> Duration {
        self.min
    }

    pub fn max(&self) -> Duration {
        self.max
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        if self.min == self.max {
            self.min
        } else {
            rng.gen_range(self.min..=self.max)
        }
    }
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    next_id: u64,
    // keyed by (deadline, id) so ties fire in scheduling order
    queue: BTreeMap<(Duration, u64), Task>,
    live: HashSet<u64>,
    fired: usize,
    cancelled: usize,
}

/// Virtual-time scheduler. Nothing fires until the clock is advanced.
///
/// Tasks run outside the internal lock, so a task may schedule or cancel
/// further timers on the same scheduler.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Arc<Mutex<ManualState>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, ManualState> {
        // a task that panicked mid-test shouldn't hide the first failure
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn now(&self) -> Duration {
        self.state().now
    }

    pub fn pending(&self) -> usize {
        self.state().live.len()
    }

    pub fn fired(&self) -> usize {
        self.state().fired
    }

    pub fn cancelled(&self) -> usize {
        self.state().cancelled
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.state().queue.keys().next().map(|(at, _)| *at)
    }

    /// Moves the clock forward by `by`, firing every timer that falls due on
    /// the way, in deadline order. Returns how many fired.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        let mut count = 0;
        while let Some(task) = self.pop_due(target) {
            task();
            count += 1;
        }
        self.state().now = target;
        count
    }

    /// Fires timers one at a time, jumping the clock to each deadline, until
    /// nothing is pending or `limit` timers have fired.
    pub fn run_until_idle(&self, limit: usize) -> usize {
        let mut count = 0;
        while count < limit {
            let Some(deadline) = self.next_deadline() else {
                break;
            };
            let Some(task) = self.pop_due(deadline) else {
                break;
            };
            task();
            count += 1;
        }
        count
    }

    fn pop_due(&self, target: Duration) -> Option<Task> {
        let mut state = self.state();
        let key = *state.queue.keys().next()?;
        if key.0 > target {
            return None;
        }
        let task = state.queue.remove(&key)?;
        state.live.remove(&key.1);
        state.now = key.0;
        state.fired += 1;
        Some(task)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerId {
        let mut state = self.state();
        let id = state.next_id;
        state.next_id += 1;
        let deadline = state.now + delay;
        state.queue.insert((deadline, id), task);
        state.live.insert(id);
        TimerId(id)
    }

    fn cancel(&self, id: TimerId) {
        let mut state = self.state();
        if !state.live.remove(&id.0) {
            return;
        }
        state.queue.retain(|(_, queued), _| *queued != id.0);
        state.cancelled += 1;
    }
}

pub trait TimeoutBackend: Clone + Send + Sync + 'static {
    type Handle: Send + 'static;

    fn set_timeout(&self, delay: Duration, fire: Task) -> Result<Self::Handle, String>;
    fn clear(&self, handle: Self::Handle);
    /// Runs `task` once the current call stack has unwound.
    fn defer(&self, task: Task);
}

struct TimeoutState<H> {
    next: u64,
    handles: HashMap<u64, H>,
    deferred: HashSet<u64>,
}

impl<H> Default for TimeoutState<H> {
    fn default() -> Self {
        Self {
            next: 0,
            handles: HashMap::new(),
            deferred: HashSet::new(),
        }
    }
}

/// [`Scheduler`] over a [`TimeoutBackend`]. Refused timeouts are deferred,
/// never dropped.
pub struct TimeoutScheduler<B: TimeoutBackend> {
    backend: B,
    state: Arc<Mutex<TimeoutState<B::Handle>>>,
}

impl<B: TimeoutBackend> Clone for TimeoutScheduler<B> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            state: self.state.clone(),
        }
    }
}

impl<B: TimeoutBackend + Default> Default for TimeoutScheduler<B> {
    fn default() -> Self {
        Self::new(B::default())
    }
}

impl<B: TimeoutBackend> TimeoutScheduler<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: Arc::new(Mutex::new(TimeoutState::default())),
        }
    }

    fn state(&self) -> MutexGuard<'_, TimeoutState<B::Handle>> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<B: TimeoutBackend> Scheduler for TimeoutScheduler<B> {
    fn schedule(&self, delay: Duration, task: Task) -> TimerId {
        let id = {
            let mut state = self.state();
            let id = state.next;
            state.next += 1;
            id
        };
        let slot = Arc::new(Mutex::new(Some(task)));

        let fire = {
            let state = self.state.clone();
            let slot = slot.clone();
            move || {
                if let Ok(mut s) = state.lock() {
                    s.handles.remove(&id);
                }
                let task = slot.lock().ok().and_then(|mut t| t.take());
                if let Some(task) = task {
                    task();
                }
            }
        };
        match self.backend.set_timeout(delay, Box::new(fire)) {
            Ok(handle) => {
                self.state().handles.insert(id, handle);
            }
            Err(err) => {
                log::warn!("timeout {id} refused ({err}); deferring it");
                self.state().deferred.insert(id);
                let state = self.state.clone();
                self.backend.defer(Box::new(move || {
                    let live = state.lock().map(|mut s| s.deferred.remove(&id)).unwrap_or(false);
                    if !live {
                        return;
                    }
                    let task = slot.lock().ok().and_then(|mut t| t.take());
                    if let Some(task) = task {
                        task();
                    }
                }));
            }
        }
        TimerId(id)
    }

    fn cancel(&self, id: TimerId) {
        let handle = {
            let mut state = self.state();
            state.deferred.remove(&id.0);
            state.handles.remove(&id.0)
        };
        if let Some(handle) = handle {
            self.backend.clear(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_fires_in_deadline_order() {
        let sched = ManualScheduler::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        for (delay, tag) in [(30, 'c'), (10, 'a'), (20, 'b')] {
            let order = order.clone();
            sched.schedule(ms(delay), Box::new(move || order.lock().unwrap().push(tag)));
        }
        assert_eq!(sched.advance(ms(15)), 1);
        assert_eq!(sched.advance(ms(100)), 2);
        assert_eq!(*order.lock().unwrap(), vec!['a', 'b', 'c']);
        assert_eq!(sched.now(), ms(115));
    }

    #[test]
    fn test_task_can_reschedule_within_window() {
        let sched = ManualScheduler::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let inner = sched.clone();
        let h = hits.clone();
        sched.schedule(
            ms(10),
            Box::new(move || {
                h.fetch_add(1, Ordering::SeqCst);
                let h = h.clone();
                inner.schedule(
                    ms(10),
                    Box::new(move || {
                        h.fetch_add(1, Ordering::SeqCst);
                    }),
                );
            }),
        );
        sched.advance(ms(25));
        assert_eq!(hits.load(Ordering::SeqCst), 2);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let sched = ManualScheduler::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let h = hits.clone();
        let id = sched.schedule(
            ms(5),
            Box::new(move || {
                h.fetch_add(1, Ordering::SeqCst);
            }),
        );
        sched.cancel(id);
        sched.cancel(id);
        sched.advance(ms(10));
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert_eq!(sched.cancelled(), 1);

        // cancelling after fire is a no-op too
        let fired = sched.schedule(ms(1), Box::new(|| {}));
        sched.advance(ms(1));
        sched.cancel(fired);
        assert_eq!(sched.cancelled(), 1);
        assert_eq!(sched.fired(), 1);
    }

    #[test]
    fn test_run_until_idle_respects_limit() {
        let sched = ManualScheduler::new();
        for i in 0..5 {
            sched.schedule(ms(i * 100), Box::new(|| {}));
        }
        assert_eq!(sched.run_until_idle(3), 3);
        assert_eq!(sched.pending(), 2);
        assert_eq!(sched.run_until_idle(100), 2);
        assert_eq!(sched.now(), ms(400));
    }

    #[test]
    fn test_jitter_bounds() {
        assert!(Jitter::new(ms(10), ms(5)).is_err());
        let jitter = Jitter::new(ms(40), ms(60)).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let d = jitter.sample(&mut rng);
            assert!(d >= ms(40) && d <= ms(60));
        }
        assert_eq!(Jitter::fixed(ms(50)).sample(&mut rng), ms(50));
    }

    #[derive(Default)]
    struct FakeHost {
        refuse: bool,
        next: u64,
        armed: Vec<(u64, Task)>,
        deferred: Vec<Task>,
        cleared: Vec<u64>,
    }

    #[derive(Clone, Default)]
    struct FakeBackend(Arc<Mutex<FakeHost>>);

    impl FakeBackend {
        fn refusing() -> Self {
            let backend = Self::default();
            backend.0.lock().unwrap().refuse = true;
            backend
        }

        fn fire_all(&self) {
            let armed = std::mem::take(&mut self.0.lock().unwrap().armed);
            for (_, task) in armed {
                task();
            }
        }

        fn run_deferred(&self) {
            let deferred = std::mem::take(&mut self.0.lock().unwrap().deferred);
            for task in deferred {
                task();
            }
        }
    }

    impl TimeoutBackend for FakeBackend {
        type Handle = u64;

        fn set_timeout(&self, _delay: Duration, fire: Task) -> Result<u64, String> {
            let mut host = self.0.lock().unwrap();
            if host.refuse {
                return Err("no timers".to_string());
            }
            let handle = host.next;
            host.next += 1;
            host.armed.push((handle, fire));
            Ok(handle)
        }

        fn clear(&self, handle: u64) {
            let mut host = self.0.lock().unwrap();
            host.armed.retain(|(h, _)| *h != handle);
            host.cleared.push(handle);
        }

        fn defer(&self, task: Task) {
            self.0.lock().unwrap().deferred.push(task);
        }
    }

    fn counter() -> (Arc<AtomicUsize>, Task) {
        let hits = Arc::new(AtomicUsize::new(0));
        let h = hits.clone();
        (
            hits,
            Box::new(move || {
                h.fetch_add(1, Ordering::SeqCst);
            }),
        )
    }

    #[test]
    fn test_timeout_scheduler_fires_and_clears() {
        let backend = FakeBackend::default();
        let sched = TimeoutScheduler::new(backend.clone());
        let (fired, task) = counter();
        let (dropped, other) = counter();
        sched.schedule(ms(10), task);
        let id = sched.schedule(ms(10), other);
        sched.cancel(id);
        sched.cancel(id);
        backend.fire_all();
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert_eq!(dropped.load(Ordering::SeqCst), 0);
        assert_eq!(backend.0.lock().unwrap().cleared, vec![1]);
    }

    #[test]
    fn test_refused_timeout_is_deferred_not_lost() {
        let backend = FakeBackend::refusing();
        let sched = TimeoutScheduler::new(backend.clone());
        let (hits, task) = counter();
        sched.schedule(ms(50), task);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        backend.run_deferred();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        backend.run_deferred();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_cancelled_deferred_task_never_runs() {
        let backend = FakeBackend::refusing();
        let sched = TimeoutScheduler::new(backend.clone());
        let (hits, task) = counter();
        let id = sched.schedule(ms(50), task);
        sched.cancel(id);
        backend.run_deferred();
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_sequencer_survives_refused_timeouts() {
        use crate::motion::{TerminalScript, Timing, TypewriterSequencer};

        let backend = FakeBackend::refusing();
        let seq = TypewriterSequencer::start(
            TerminalScript::new(["$ ls", "a"]),
            Timing::uniform(ms(1)),
            TimeoutScheduler::new(backend.clone()),
            |_| {},
        );
        for _ in 0..20 {
            backend.run_deferred();
        }
        assert!(seq.is_completed());
    }
}
