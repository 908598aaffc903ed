// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cancellable token for a scheduled callback.
//!
//! A [`TimerHandle`] is handed out by a timer service for every scheduled
//! callback. The handle and the service share one piece of state that moves
//! from `Pending` to exactly one of `Fired` or `Cancelled`. Whoever wins that
//! transition decides the fate of the callback: the service only runs it after
//! a successful [`TimerHandle::try_fire`], and [`TimerHandle::cancel`] only
//! reports success if it got there first.

use core::fmt;
use core::future::Future;
use core::pin::Pin;
use core::sync::atomic::{AtomicU64, AtomicU8, Ordering};
use core::task::{Context, Poll};
use event_listener::{Event, EventListener};
use std::sync::Arc;

const PENDING: u8 = 0;
const FIRED: u8 = 1;
const CANCELLED: u8 = 2;

static NEXT_TIMER_ID: AtomicU64 = AtomicU64::new(0);

/// Process-wide unique, monotonically increasing timer identifier.
///
/// Services use it as a tie-breaker so that timers sharing a deadline fire in
/// the order they were scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    fn next() -> Self {
        Self(NEXT_TIMER_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value of the identifier.
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Observable lifecycle of a scheduled callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerState {
    /// Scheduled, neither fired nor cancelled yet.
    Pending,
    /// The callback was released to run.
    Fired,
    /// The callback was cancelled before it could run.
    Cancelled,
}

/// Handle to a scheduled callback.
///
/// Clones share the same state, so a combinator can keep one clone while the
/// service holds another.
///
/// # Example
///
/// ```
/// use pacer_core::{TimerHandle, TimerState};
///
/// let handle = TimerHandle::new();
/// assert!(handle.is_pending());
///
/// assert!(handle.cancel());
/// assert!(!handle.cancel()); // second cancel is a no-op
/// assert!(!handle.try_fire()); // a cancelled timer never fires
/// assert_eq!(handle.state(), TimerState::Cancelled);
/// ```
#[derive(Clone)]
pub struct TimerHandle {
    inner: Arc<Inner>,
}

struct Inner {
    id: TimerId,
    state: AtomicU8,
    event: Event,
}

impl TimerHandle {
    /// Create a fresh handle in the `Pending` state.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                id: TimerId::next(),
                state: AtomicU8::new(PENDING),
                event: Event::new(),
            }),
        }
    }

    pub fn id(&self) -> TimerId {
        self.inner.id
    }

    pub fn state(&self) -> TimerState {
        match self.inner.state.load(Ordering::Acquire) {
            PENDING => TimerState::Pending,
            FIRED => TimerState::Fired,
            _ => TimerState::Cancelled,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state() == TimerState::Pending
    }

    pub fn is_fired(&self) -> bool {
        self.state() == TimerState::Fired
    }

    pub fn is_cancelled(&self) -> bool {
        self.state() == TimerState::Cancelled
    }

    /// Cancel the scheduled callback.
    ///
    /// Returns `true` if this call prevented the callback from running.
    /// Cancelling a handle that already fired or was already cancelled does
    /// nothing and returns `false`.
    pub fn cancel(&self) -> bool {
        let won = self
            .inner
            .state
            .compare_exchange(PENDING, CANCELLED, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();

        if won {
            self.inner.event.notify(usize::MAX);
        }
        won
    }

    /// Claim the right to run the callback.
    ///
    /// Called by timer services once the delay has elapsed. Returns `true`
    /// exactly once, and never after a successful [`cancel`](Self::cancel).
    pub fn try_fire(&self) -> bool {
        self.inner
            .state
            .compare_exchange(PENDING, FIRED, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Wait until the handle is cancelled.
    ///
    /// Never resolves for a handle that fires instead.
    pub fn cancelled(&self) -> Cancelled<'_> {
        Cancelled {
            handle: self,
            listener: None,
        }
    }
}

impl Default for TimerHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandle")
            .field("id", &self.inner.id)
            .field("state", &self.state())
            .finish()
    }
}

impl PartialEq for TimerHandle {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for TimerHandle {}

/// Future returned by [`TimerHandle::cancelled()`].
pub struct Cancelled<'a> {
    handle: &'a TimerHandle,
    listener: Option<EventListener>,
}

impl Future for Cancelled<'_> {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        loop {
            if self.handle.is_cancelled() {
                return Poll::Ready(());
            }

            match self.listener.as_mut() {
                None => {
                    // Re-check after registering: cancel() may have run in between
                    self.listener = Some(self.handle.inner.event.listen());
                }
                Some(listener) => match Pin::new(listener).poll(cx) {
                    Poll::Ready(()) => self.listener = None,
                    Poll::Pending => return Poll::Pending,
                },
            }
        }
    }
}
