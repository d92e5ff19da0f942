use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::timer::{Jitter, Scheduler, TimerId};

pub const PROMPT_SENTINEL: char = '$';

/// Display category of a script line. Decided from the line's text alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineStyle {
    Prompt,
    Identity,
    Listing,
    Emphasis,
    Output,
    Blank,
}

impl LineStyle {
    pub fn class(self) -> &'static str {
        match self {
            LineStyle::Prompt => "text-green",
            LineStyle::Identity => "text-blue",
            LineStyle::Listing => "text-yellow",
            LineStyle::Emphasis => "text-purple",
            LineStyle::Output | LineStyle::Blank => "text-foreground",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    pub needle: String,
    pub style: LineStyle,
}

impl StyleRule {
    pub fn new(needle: impl Into<String>, style: LineStyle) -> Self {
        Self {
            needle: needle.into(),
            style,
        }
    }
}

/// An ordered script of terminal lines plus the rules used to style them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerminalScript {
    lines: Vec<String>,
    rules: Vec<StyleRule>,
}

impl TerminalScript {
    pub fn new<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            rules: Vec::new(),
        }
    }

    pub fn with_rule(mut self, needle: impl Into<String>, style: LineStyle) -> Self {
        self.rules.push(StyleRule::new(needle, style));
        self
    }

    pub fn with_rules(mut self, rules: impl IntoIterator<Item = StyleRule>) -> Self {
        self.rules.extend(rules);
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Blank first, then the prompt sentinel, then the first matching rule.
    pub fn classify(&self, line: &str) -> LineStyle {
        if line.trim().is_empty() {
            return LineStyle::Blank;
        }
        if line.starts_with(PROMPT_SENTINEL) {
            return LineStyle::Prompt;
        }
        self.rules
            .iter()
            .find(|rule| line.contains(rule.needle.as_str()))
            .map(|rule| rule.style)
            .unwrap_or(LineStyle::Output)
    }

    pub fn style_of(&self, index: usize) -> LineStyle {
        self.lines
            .get(index)
            .map(|line| self.classify(line))
            .unwrap_or(LineStyle::Blank)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub char_delay: Jitter,
    pub after_prompt: Duration,
    pub after_output: Duration,
    pub after_blank: Duration,
}

impl Timing {
    /// Every delay fixed at the same value; handy for deterministic playback.
    pub const fn uniform(delay: Duration) -> Self {
        Self {
            char_delay: Jitter::fixed(delay),
            after_prompt: delay,
            after_output: delay,
            after_blank: delay,
        }
    }

    pub fn pause_after(&self, style: LineStyle) -> Duration {
        match style {
            LineStyle::Prompt => self.after_prompt,
            LineStyle::Blank => self.after_blank,
            _ => self.after_output,
        }
    }

    pub fn max_delay(&self) -> Duration {
        self.char_delay
            .max()
            .max(self.after_prompt)
            .max(self.after_output)
            .max(self.after_blank)
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            char_delay: Jitter::new(Duration::from_millis(40), Duration::from_millis(60))
                .unwrap_or(Jitter::fixed(Duration::from_millis(50))),
            after_prompt: Duration::from_millis(1000),
            after_output: Duration::from_millis(800),
            after_blank: Duration::from_millis(200),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Pausing,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealedLine {
    pub text: String,
    pub style: LineStyle,
    /// Carries the blinking cursor.
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    pub lines: Vec<RevealedLine>,
    pub cursor: Option<usize>,
    pub completed: bool,
}

impl Frame {
    pub fn started(&self) -> &[RevealedLine] {
        let end = match self.cursor {
            Some(line) => line + 1,
            None if self.completed => self.lines.len(),
            None => 0,
        };
        &self.lines[..end.min(self.lines.len())]
    }
}

fn char_prefix(s: &str, chars: usize) -> &str {
    match s.char_indices().nth(chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Character-by-character playback cursor over a [`TerminalScript`].
#[derive(Debug, Clone)]
pub struct Playback {
    script: TerminalScript,
    line: usize,
    chars: usize,
    phase: Phase,
}

impl Playback {
    pub fn new(script: TerminalScript) -> Self {
        let phase = if script.is_empty() {
            Phase::Completed
        } else {
            Phase::Typing
        };
        Self {
            script,
            line: 0,
            chars: 0,
            phase,
        }
    }

    pub fn script(&self) -> &TerminalScript {
        &self.script
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.line, self.chars)
    }

    pub fn is_completed(&self) -> bool {
        self.phase == Phase::Completed
    }

    fn current_len(&self) -> usize {
        self.script
            .lines
            .get(self.line)
            .map(|l| l.chars().count())
            .unwrap_or(0)
    }

    pub fn first_delay<R: Rng + ?Sized>(&self, timing: &Timing, rng: &mut R) -> Option<Duration> {
        match self.phase {
            Phase::Completed => None,
            _ => Some(timing.char_delay.sample(rng)),
        }
    }

    /// Applies one tick and returns the delay until the next one, or `None`
    /// once the script is complete.
    pub fn tick<R: Rng + ?Sized>(&mut self, timing: &Timing, rng: &mut R) -> Option<Duration> {
        match self.phase {
            Phase::Completed => None,
            Phase::Typing => {
                let len = self.current_len();
                if self.chars < len {
                    self.chars += 1;
                }
                if self.chars >= len {
                    self.phase = Phase::Pausing;
                    Some(timing.pause_after(self.script.style_of(self.line)))
                } else {
                    Some(timing.char_delay.sample(rng))
                }
            }
            Phase::Pausing => {
                self.line += 1;
                self.chars = 0;
                if self.line >= self.script.len() {
                    self.phase = Phase::Completed;
                    None
                } else {
                    self.phase = Phase::Typing;
                    Some(timing.char_delay.sample(rng))
                }
            }
        }
    }

    pub fn tick_budget(script: &TerminalScript) -> usize {
        script
            .lines()
            .iter()
            .map(|l| l.chars().count().max(1) + 1)
            .sum()
    }

    pub fn frame(&self) -> Frame {
        let completed = self.is_completed();
        let lines = self
            .script
            .lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let text = if completed || i < self.line {
                    line.as_str()
                } else if i == self.line {
                    char_prefix(line, self.chars)
                } else {
                    ""
                };
                RevealedLine {
                    text: text.to_string(),
                    style: self.script.classify(line),
                    active: !completed && i == self.line,
                }
            })
            .collect();
        Frame {
            lines,
            cursor: (!completed).then_some(self.line),
            completed,
        }
    }
}

pub type FrameListener = Arc<dyn Fn(&Frame) + Send + Sync + 'static>;

struct Shared {
    playback: Playback,
    timing: Timing,
    rng: StdRng,
    pending: Option<TimerId>,
    disposed: bool,
    ticks: usize,
}

/// Drives a [`Playback`] from a [`Scheduler`], publishing a [`Frame`] after
/// every tick. At most one timer is pending at any time.
pub struct TypewriterSequencer<S: Scheduler> {
    shared: Arc<Mutex<Shared>>,
    scheduler: S,
}

impl<S: Scheduler> TypewriterSequencer<S> {
    pub fn start<F>(script: TerminalScript, timing: Timing, scheduler: S, on_frame: F) -> Self
    where
        F: Fn(&Frame) + Send + Sync + 'static,
    {
        Self::start_with_rng(script, timing, scheduler, StdRng::from_entropy(), on_frame)
    }

    pub fn start_with_rng<F>(
        script: TerminalScript,
        timing: Timing,
        scheduler: S,
        mut rng: StdRng,
        on_frame: F,
    ) -> Self
    where
        F: Fn(&Frame) + Send + Sync + 'static,
    {
        let listener: FrameListener = Arc::new(on_frame);
        let playback = Playback::new(script);
        let first = playback.first_delay(&timing, &mut rng);
        listener(&playback.frame());

        let shared = Arc::new(Mutex::new(Shared {
            playback,
            timing,
            rng,
            pending: None,
            disposed: false,
            ticks: 0,
        }));
        match first {
            Some(delay) => schedule_tick(&shared, &scheduler, &listener, delay),
            None => log::debug!("typewriter started with an empty script"),
        }
        Self { shared, scheduler }
    }

    pub fn snapshot(&self) -> Frame {
        self.shared
            .lock()
            .map(|s| s.playback.frame())
            .unwrap_or_default()
    }

    pub fn is_completed(&self) -> bool {
        self.shared
            .lock()
            .map(|s| s.playback.is_completed())
            .unwrap_or(false)
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.shared
            .lock()
            .map(|s| s.playback.cursor())
            .unwrap_or_default()
    }

    pub fn ticks(&self) -> usize {
        self.shared.lock().map(|s| s.ticks).unwrap_or(0)
    }

    pub fn has_pending_timer(&self) -> bool {
        self.shared
            .lock()
            .map(|s| s.pending.is_some())
            .unwrap_or(false)
    }

    pub fn dispose(&self) {
        let Ok(mut shared) = self.shared.lock() else {
            return;
        };
        if shared.disposed {
            return;
        }
        shared.disposed = true;
        if let Some(id) = shared.pending.take() {
            self.scheduler.cancel(id);
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.shared.lock().map(|s| s.disposed).unwrap_or(true)
    }
}

impl<S: Scheduler> Drop for TypewriterSequencer<S> {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn schedule_tick<S: Scheduler>(
    shared: &Arc<Mutex<Shared>>,
    scheduler: &S,
    listener: &FrameListener,
    delay: Duration,
) {
    let Ok(mut guard) = shared.lock() else {
        return;
    };
    if guard.disposed {
        return;
    }
    let task_shared = shared.clone();
    let task_scheduler = scheduler.clone();
    let task_listener = listener.clone();
    let id = scheduler.schedule(
        delay,
        Box::new(move || on_tick(&task_shared, &task_scheduler, &task_listener)),
    );
    guard.pending = Some(id);
}

fn on_tick<S: Scheduler>(shared: &Arc<Mutex<Shared>>, scheduler: &S, listener: &FrameListener) {
    let (next, frame) = {
        let Ok(mut guard) = shared.lock() else {
            return;
        };
        if guard.disposed {
            return;
        }
        guard.pending = None;
        let state = &mut *guard;
        let next = state.playback.tick(&state.timing, &mut state.rng);
        state.ticks += 1;
        (next, state.playback.frame())
    };
    listener(&frame);
    match next {
        Some(delay) => schedule_tick(shared, scheduler, listener, delay),
        None => log::debug!("typewriter script completed after {} lines", frame.lines.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::timer::{ManualScheduler, Task};
    use proptest::prelude::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn hero_like() -> TerminalScript {
        TerminalScript::new(["$ whoami", "gova", "", "$ ls skills/", "web/ ml/"])
            .with_rule("gova", LineStyle::Identity)
            .with_rule("ml/", LineStyle::Listing)
    }

    fn recorder() -> (Arc<Mutex<Vec<Frame>>>, impl Fn(&Frame) + Send + Sync + 'static) {
        let frames = Arc::new(Mutex::new(Vec::new()));
        let sink = frames.clone();
        (frames, move |f: &Frame| sink.lock().unwrap().push(f.clone()))
    }

    /// Pretends `cancel` never reaches the platform, so callbacks keep firing
    /// after teardown.
    #[derive(Clone, Default)]
    struct LeakyScheduler(ManualScheduler);

    impl Scheduler for LeakyScheduler {
        fn schedule(&self, delay: Duration, task: Task) -> TimerId {
            self.0.schedule(delay, task)
        }

        fn cancel(&self, _id: TimerId) {}
    }

    #[test]
    fn test_classification() {
        let script = hero_like().with_rule("build", LineStyle::Emphasis);
        assert_eq!(script.classify("$ whoami"), LineStyle::Prompt);
        assert_eq!(script.classify("hi gova"), LineStyle::Identity);
        assert_eq!(script.classify("   "), LineStyle::Blank);
        assert_eq!(script.classify("let's build"), LineStyle::Emphasis);
        assert_eq!(script.classify("plain"), LineStyle::Output);
        // prompt wins over rules
        assert_eq!(script.classify("$ echo gova"), LineStyle::Prompt);
        assert_eq!(script.style_of(99), LineStyle::Blank);
    }

    #[test]
    fn test_pause_depends_on_style() {
        let timing = Timing::default();
        assert!(timing.pause_after(LineStyle::Prompt) > timing.pause_after(LineStyle::Output));
        assert!(timing.pause_after(LineStyle::Output) > timing.pause_after(LineStyle::Blank));
        assert_eq!(timing.max_delay(), ms(1000));
    }

    #[test]
    fn test_playback_steps_characters() {
        let mut pb = Playback::new(TerminalScript::new(["ab", "c"]));
        let timing = Timing {
            char_delay: Jitter::fixed(ms(50)),
            after_prompt: ms(1000),
            after_output: ms(800),
            after_blank: ms(200),
        };
        let mut r = rng();
        assert_eq!(pb.first_delay(&timing, &mut r), Some(ms(50)));
        assert_eq!(pb.tick(&timing, &mut r), Some(ms(50)));
        assert_eq!(pb.cursor(), (0, 1));
        assert_eq!(pb.frame().lines[0].text, "a");
        assert_eq!(pb.tick(&timing, &mut r), Some(ms(800)));
        assert_eq!(pb.phase(), Phase::Pausing);
        assert_eq!(pb.tick(&timing, &mut r), Some(ms(50)));
        assert_eq!(pb.cursor(), (1, 0));
        assert_eq!(pb.tick(&timing, &mut r), Some(ms(800)));
        assert_eq!(pb.tick(&timing, &mut r), None);
        assert!(pb.is_completed());
        assert_eq!(pb.tick(&timing, &mut r), None);

        let frame = pb.frame();
        assert!(frame.completed);
        assert_eq!(frame.cursor, None);
        assert_eq!(frame.started().len(), 2);
        assert!(frame.lines.iter().all(|l| !l.active));
    }

    #[test]
    fn test_prefix_counts_chars_not_bytes() {
        let mut pb = Playback::new(TerminalScript::new(["Gova 👋!"]));
        let timing = Timing::uniform(ms(1));
        let mut r = rng();
        for _ in 0..6 {
            pb.tick(&timing, &mut r);
        }
        assert_eq!(pb.frame().lines[0].text, "Gova 👋");
    }

    #[test]
    fn test_blank_line_uses_short_pause() {
        let mut pb = Playback::new(TerminalScript::new(["", "x"]));
        let timing = Timing {
            char_delay: Jitter::fixed(ms(50)),
            ..Timing::default()
        };
        let mut r = rng();
        assert_eq!(pb.tick(&timing, &mut r), Some(timing.after_blank));
    }

    #[test]
    fn test_empty_script_completes_immediately() {
        let sched = ManualScheduler::new();
        let (frames, sink) = recorder();
        let seq = TypewriterSequencer::start_with_rng(
            TerminalScript::default(),
            Timing::default(),
            sched.clone(),
            rng(),
            sink,
        );
        assert!(seq.is_completed());
        assert_eq!(sched.pending(), 0);
        let frames = frames.lock().unwrap();
        assert_eq!(frames.len(), 1);
        assert!(frames[0].completed);
        assert!(frames[0].lines.is_empty());
    }

    #[test]
    fn test_sequencer_runs_to_completion() {
        let sched = ManualScheduler::new();
        let script = hero_like();
        let budget = Playback::tick_budget(&script);
        let (frames, sink) = recorder();
        let seq = TypewriterSequencer::start_with_rng(
            script.clone(),
            Timing::default(),
            sched.clone(),
            rng(),
            sink,
        );
        assert_eq!(sched.pending(), 1);

        sched.run_until_idle(budget + 10);
        assert!(seq.is_completed());
        assert!(seq.ticks() <= budget);
        assert!(!seq.has_pending_timer());
        assert_eq!(sched.pending(), 0);

        let fired = sched.fired();
        sched.advance(ms(60_000));
        assert_eq!(sched.fired(), fired);

        let last = frames.lock().unwrap().last().cloned().unwrap();
        let texts: Vec<_> = last.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, script.lines().iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_dispose_cancels_pending_timer() {
        let sched = ManualScheduler::new();
        let (frames, sink) = recorder();
        let seq = TypewriterSequencer::start_with_rng(
            hero_like(),
            Timing::uniform(ms(10)),
            sched.clone(),
            rng(),
            sink,
        );
        sched.advance(ms(35));
        let seen = frames.lock().unwrap().len();
        seq.dispose();
        seq.dispose();
        assert_eq!(sched.pending(), 0);
        sched.advance(ms(10_000));
        assert_eq!(frames.lock().unwrap().len(), seen);
        assert!(!seq.is_completed());
    }

    #[test]
    fn test_drop_disposes() {
        let sched = ManualScheduler::new();
        {
            let _seq = TypewriterSequencer::start_with_rng(
                hero_like(),
                Timing::uniform(ms(10)),
                sched.clone(),
                rng(),
                |_| {},
            );
            assert_eq!(sched.pending(), 1);
        }
        assert_eq!(sched.pending(), 0);
        assert_eq!(sched.cancelled(), 1);
    }

    #[test]
    fn test_late_callbacks_do_not_mutate_after_teardown() {
        for stop_at in [0u64, 25, 95, 10_000] {
            let leaky = LeakyScheduler::default();
            let (frames, sink) = recorder();
            let seq = TypewriterSequencer::start_with_rng(
                hero_like(),
                Timing::uniform(ms(10)),
                leaky.clone(),
                rng(),
                sink,
            );
            leaky.0.advance(ms(stop_at));
            seq.dispose();
            let cursor = seq.cursor();
            let ticks = seq.ticks();
            let published = frames.lock().unwrap().len();

            leaky.0.advance(ms(60_000));
            assert_eq!(seq.cursor(), cursor);
            assert_eq!(seq.ticks(), ticks);
            assert_eq!(frames.lock().unwrap().len(), published);
        }
    }

    #[test]
    fn test_listener_may_dispose_mid_run() {
        let sched = ManualScheduler::new();
        let slot: Arc<Mutex<Option<TypewriterSequencer<ManualScheduler>>>> =
            Arc::new(Mutex::new(None));
        let hits = Arc::new(Mutex::new(0usize));
        let (h, s) = (hits.clone(), slot.clone());
        let seq = TypewriterSequencer::start_with_rng(
            hero_like(),
            Timing::uniform(ms(10)),
            sched.clone(),
            rng(),
            move |_| {
                let mut n = h.lock().unwrap();
                *n += 1;
                if *n == 3 {
                    if let Some(seq) = s.lock().unwrap().as_ref() {
                        seq.dispose();
                    }
                }
            },
        );
        *slot.lock().unwrap() = Some(seq);
        sched.advance(ms(1_000));
        assert_eq!(*hits.lock().unwrap(), 3);
        assert_eq!(sched.pending(), 0);
    }

    proptest! {
        #[test]
        fn lines_reveal_in_order(
            lines in prop::collection::vec("[a-z $]{0,8}", 0..8),
            step in 1u64..40,
        ) {
            let script = TerminalScript::new(lines.clone());
            let sched = ManualScheduler::new();
            let frames = Arc::new(Mutex::new(Vec::new()));
            let sink = frames.clone();
            let timing = Timing {
                char_delay: Jitter::new(ms(5), ms(15)).unwrap(),
                after_prompt: ms(30),
                after_output: ms(20),
                after_blank: ms(5),
            };
            let seq = TypewriterSequencer::start_with_rng(
                script.clone(),
                timing,
                sched.clone(),
                StdRng::seed_from_u64(step),
                move |f: &Frame| sink.lock().unwrap().push(f.clone()),
            );
            let budget = Playback::tick_budget(&script);
            let horizon = timing.max_delay().as_millis() as u64 * (budget as u64 + 1);
            let mut elapsed = 0;
            while elapsed <= horizon {
                sched.advance(ms(step));
                elapsed += step;
            }
            prop_assert!(seq.is_completed());
            prop_assert!(seq.ticks() <= budget);
            prop_assert_eq!(sched.pending(), 0);

            for frame in frames.lock().unwrap().iter() {
                for i in 1..frame.lines.len() {
                    let full = |k: usize| frame.lines[k].text == lines[k];
                    if full(i) && !lines[i].is_empty() {
                        prop_assert!(full(i - 1));
                    }
                    if !frame.lines[i].text.is_empty() {
                        prop_assert!(full(i - 1));
                    }
                }
            }
        }
    }
}
