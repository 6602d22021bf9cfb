//! Threaded path animator.
//!
//! Each path gets a generation number. A timer thread is spawned per path and
//! only advances the shared reveal state while its generation is current, so
//! a replaced path's timer can never move the new path's reveal index.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use pv_search::Path;

use crate::clock::{DEFAULT_STEP_DELAY, RevealClock};

/// Published every time the reveal index advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealEvent {
    /// Generation of the path this step belongs to.
    pub generation: u64,
    /// New reveal index.
    pub index: usize,
    /// True on the final step.
    pub finished: bool,
}

#[derive(Debug)]
struct RevealState {
    generation: u64,
    path: Path,
    clock: RevealClock,
}

/// What a timer thread should do after one step attempt.
#[derive(Debug, PartialEq, Eq)]
enum StepOutcome {
    /// A newer path replaced ours.
    Stale,
    /// Sleep this long and try again.
    Wait(Duration),
    /// Last step taken.
    Done,
}

fn lock(shared: &Mutex<RevealState>) -> MutexGuard<'_, RevealState> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Advance `generation`'s clock to `elapsed`, publishing one event per step.
fn step(
    shared: &Mutex<RevealState>,
    generation: u64,
    elapsed: Duration,
    events: &Sender<RevealEvent>,
) -> StepOutcome {
    let mut state = lock(shared);
    if state.generation != generation {
        return StepOutcome::Stale;
    }

    let before = state.clock.reveal_index();
    state.clock.tick(elapsed);
    let after = state.clock.reveal_index();
    let last = state.clock.last_index();
    for index in before + 1..=after {
        // receiver may be gone if nobody listens; reveal state is still updated
        let _ = events.send(RevealEvent {
            generation,
            index,
            finished: index == last,
        });
    }

    match state.clock.time_until_step(elapsed) {
        Some(wait) => StepOutcome::Wait(wait),
        None => StepOutcome::Done,
    }
}

/// Reveals the current path one point per `delay`.
///
/// `set_path` restarts from index 0 and cancels the previous timer; `clear`
/// cancels without a replacement. Progress is readable at any time and also
/// published as [`RevealEvent`]s.
pub struct Animator {
    shared: Arc<Mutex<RevealState>>,
    delay: Duration,
    events_tx: Sender<RevealEvent>,
    events_rx: Receiver<RevealEvent>,
    /// Dropping this wakes the current timer thread so it exits early.
    cancel: Option<Sender<()>>,
    _worker: Option<JoinHandle<()>>,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_DELAY)
    }
}

impl std::fmt::Debug for Animator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = lock(&self.shared);
        f.debug_struct("Animator")
            .field("delay", &self.delay)
            .field("generation", &state.generation)
            .field("path", &state.path)
            .field("reveal_index", &state.clock.reveal_index())
            .finish()
    }
}

impl Animator {
    pub fn new(delay: Duration) -> Self {
        let (events_tx, events_rx) = mpsc::channel();
        Self {
            shared: Arc::new(Mutex::new(RevealState {
                generation: 0,
                path: Path::empty(),
                clock: RevealClock::idle(delay),
            })),
            delay,
            events_tx,
            events_rx,
            cancel: None,
            _worker: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace the animated path and start revealing it from index 0.
    ///
    /// Returns the new generation. Paths of one point or none are stored but
    /// not animated.
    pub fn set_path(&mut self, path: Path) -> u64 {
        self.cancel = None;
        let (generation, animate) = {
            let mut state = lock(&self.shared);
            state.generation += 1;
            state.clock = RevealClock::new(path.len(), self.delay);
            state.path = path;
            (state.generation, state.clock.is_animating())
        };
        self.discard_queued();

        self._worker = if animate {
            let (cancel_tx, cancel_rx) = mpsc::channel::<()>();
            self.cancel = Some(cancel_tx);
            Some(self.spawn_timer(generation, cancel_rx))
        } else {
            None
        };

        tracing::debug!(generation, animate, "animator path set");
        generation
    }

    /// Drop the current path and cancel its timer.
    pub fn clear(&mut self) {
        self.cancel = None;
        self._worker = None;
        let mut state = lock(&self.shared);
        state.generation += 1;
        state.path = Path::empty();
        state.clock = RevealClock::idle(self.delay);
        let generation = state.generation;
        drop(state);
        self.discard_queued();
        tracing::debug!(generation, "animator cleared");
    }

    /// Drop queued events. Called right after a generation bump, so anything
    /// still queued belongs to an older path.
    fn discard_queued(&self) {
        let stale = self.events_rx.try_iter().count();
        if stale > 0 {
            tracing::trace!(stale, "discarded stale reveal events");
        }
    }

    fn spawn_timer(&self, generation: u64, cancel_rx: Receiver<()>) -> JoinHandle<()> {
        let shared = Arc::clone(&self.shared);
        let events = self.events_tx.clone();
        let started = Instant::now();
        let mut wait = self.delay;

        thread::spawn(move || {
            loop {
                match cancel_rx.recv_timeout(wait) {
                    Err(RecvTimeoutError::Timeout) => {}
                    // cancelled (sender dropped) or explicit signal
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                        tracing::trace!(generation, "reveal timer cancelled");
                        return;
                    }
                }
                match step(&shared, generation, started.elapsed(), &events) {
                    StepOutcome::Wait(next) => wait = next,
                    StepOutcome::Stale => {
                        tracing::trace!(generation, "stale reveal timer");
                        return;
                    }
                    StepOutcome::Done => return,
                }
            }
        })
    }

    /// Generation of the current path (0 before any path was set).
    pub fn generation(&self) -> u64 {
        lock(&self.shared).generation
    }

    pub fn path(&self) -> Path {
        lock(&self.shared).path.clone()
    }

    pub fn reveal_index(&self) -> usize {
        lock(&self.shared).clock.reveal_index()
    }

    pub fn is_finished(&self) -> bool {
        lock(&self.shared).clock.is_finished()
    }

    /// Points revealed so far: `path[..=reveal_index]`.
    pub fn revealed(&self) -> Vec<usize> {
        let state = lock(&self.shared);
        let path = state.path.as_slice();
        if path.is_empty() {
            return Vec::new();
        }
        path[..=state.clock.reveal_index()].to_vec()
    }

    /// Segments drawn so far.
    ///
    /// Every revealed point draws the segment leaving it, so the first segment
    /// is visible immediately and the whole path is drawn one step before the
    /// reveal index reaches the last point.
    pub fn revealed_segments(&self) -> Vec<(usize, usize)> {
        let state = lock(&self.shared);
        let shown = state.clock.reveal_index() + 1;
        state.path.segments().take(shown).collect()
    }

    /// Reveal events published since the last call.
    pub fn drain_events(&self) -> Vec<RevealEvent> {
        self.events_rx.try_iter().collect()
    }

    /// Wait up to `timeout` for the next reveal event.
    pub fn next_event(&self, timeout: Duration) -> Option<RevealEvent> {
        self.events_rx.recv_timeout(timeout).ok()
    }
}

impl Drop for Animator {
    fn drop(&mut self) {
        self.cancel = None;
        lock(&self.shared).generation += 1;
    }
}
