// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Virtual-clock timer service.
//!
//! Nothing happens on its own: time only moves when [`ManualTimerService::advance`]
//! (or one of its siblings) is called, and due callbacks run on the calling
//! thread, in deadline order, ties broken by scheduling order. This mirrors a
//! single-threaded event loop's timer queue: a zero-delay callback never runs
//! inside `schedule`, only once the loop is driven again.

use crate::timer_service::{Callback, TimerService};
use core::fmt;
use core::time::Duration;
use pacer_core::{TimerHandle, TimerId};
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Hand-driven [`TimerService`].
///
/// Clones share one clock and one queue.
///
/// # Example
///
/// ```
/// use pacer_runtime::{ManualTimerService, TimerService};
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let service = ManualTimerService::new();
/// let fired = Arc::new(AtomicBool::new(false));
/// let flag = fired.clone();
///
/// service.schedule(Duration::from_millis(50), move || flag.store(true, Ordering::SeqCst));
///
/// service.advance(Duration::from_millis(49));
/// assert!(!fired.load(Ordering::SeqCst));
///
/// service.advance(Duration::from_millis(1));
/// assert!(fired.load(Ordering::SeqCst));
/// ```
#[derive(Clone, Default)]
pub struct ManualTimerService {
    inner: Arc<Mutex<ManualState>>,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    queue: BTreeMap<(Duration, TimerId), Scheduled>,
    deadlines: HashMap<TimerId, Duration>,
}

struct Scheduled {
    handle: TimerHandle,
    callback: Callback,
}

impl ManualTimerService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since the service was created.
    pub fn now(&self) -> Duration {
        self.inner.lock().now
    }

    /// Number of callbacks still waiting to fire.
    pub fn pending_count(&self) -> usize {
        self.inner
            .lock()
            .queue
            .values()
            .filter(|scheduled| scheduled.handle.is_pending())
            .count()
    }

    /// Move the clock forward by `by`, running every callback that becomes
    /// due on the way.
    ///
    /// Callbacks observe [`now`](Self::now) equal to their own deadline, and
    /// may schedule new timers; those run during this same call if they fall
    /// due before the target time. Returns the number of callbacks run.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        let mut fired = 0;

        while let Some(scheduled) = self.pop_due(target) {
            if scheduled.handle.try_fire() {
                (scheduled.callback)();
                fired += 1;
            }
        }

        let mut state = self.inner.lock();
        if state.now < target {
            state.now = target;
        }
        fired
    }

    /// Run callbacks already due at the current instant, including zero-delay
    /// ones, without moving the clock.
    pub fn run_pending(&self) -> usize {
        self.advance(Duration::ZERO)
    }

    /// Keep advancing to the next deadline until no callback is left.
    ///
    /// Does not return if callbacks keep rescheduling themselves.
    pub fn run_until_idle(&self) -> usize {
        let mut fired = 0;
        while let Some(next) = self.next_deadline() {
            let by = next.saturating_sub(self.now());
            fired += self.advance(by);
        }
        fired
    }

    /// Deadline of the earliest callback still pending.
    pub fn next_deadline(&self) -> Option<Duration> {
        let mut state = self.inner.lock();
        state.prune();
        state.queue.keys().next().map(|(deadline, _)| *deadline)
    }

    fn pop_due(&self, target: Duration) -> Option<Scheduled> {
        let mut state = self.inner.lock();
        let key = *state
            .queue
            .keys()
            .next()
            .filter(|(deadline, _)| *deadline <= target)?;
        let scheduled = state.queue.remove(&key)?;
        state.deadlines.remove(&key.1);
        if state.now < key.0 {
            state.now = key.0;
        }
        Some(scheduled)
    }
}

impl TimerService for ManualTimerService {
    fn schedule_boxed(&self, delay: Duration, callback: Callback) -> TimerHandle {
        let handle = TimerHandle::new();
        let mut state = self.inner.lock();
        let deadline = state.now + delay;

        pacer_core::trace!("scheduling {} at {:?}", handle.id(), deadline);

        state.deadlines.insert(handle.id(), deadline);
        state.queue.insert(
            (deadline, handle.id()),
            Scheduled {
                handle: handle.clone(),
                callback,
            },
        );
        handle
    }

    fn cancel(&self, handle: &TimerHandle) -> bool {
        let cancelled = handle.cancel();
        if cancelled {
            let mut state = self.inner.lock();
            if let Some(deadline) = state.deadlines.remove(&handle.id()) {
                state.queue.remove(&(deadline, handle.id()));
            }
        }
        cancelled
    }
}

impl ManualState {
    // Drops entries whose handle was cancelled without going through the service
    fn prune(&mut self) {
        let deadlines = &mut self.deadlines;
        self.queue.retain(|(_, id), scheduled| {
            let keep = scheduled.handle.is_pending();
            if !keep {
                deadlines.remove(id);
            }
            keep
        });
    }
}

impl fmt::Debug for ManualTimerService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.lock();
        f.debug_struct("ManualTimerService")
            .field("now", &state.now)
            .field("queued", &state.queue.len())
            .finish()
    }
}
