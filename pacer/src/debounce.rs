// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Trailing-edge debouncing of a callback.
//!
//! Every call replaces the pending one: the previous timer is cancelled, the
//! new arguments are stored and a fresh timer of `delay` is scheduled. The
//! action therefore runs once per quiet period, `delay` after the last call
//! of a burst, with the arguments of that last call. A caller that never
//! pauses for `delay` never sees the action run.
//!
//! ```text
//! calls:    0   100  200
//! action:                  700 (args of 200)      (delay = 500)
//! ```

use crate::action::ActionCell;
use core::fmt;
use core::time::Duration;
use pacer_core::{PacerError, TimerHandle};
use pacer_runtime::TimerService;
use parking_lot::Mutex;
use std::sync::Arc;

type Action<A> = dyn FnMut(A) + Send;

/// Callback wrapper deferring the action until calls stop for `delay`.
///
/// # Example
///
/// ```
/// use pacer::Debounce;
/// use pacer_runtime::ManualTimerService;
/// use std::sync::{Arc, Mutex};
/// use std::time::Duration;
///
/// let service = ManualTimerService::new();
/// let saved = Arc::new(Mutex::new(Vec::new()));
/// let sink = saved.clone();
/// let save = Debounce::new(
///     move |text: String| sink.lock().unwrap().push(text),
///     Duration::from_millis(500),
///     service.clone(),
/// );
///
/// save.call("h".to_string());
/// service.advance(Duration::from_millis(100));
/// save.call("he".to_string());
/// service.advance(Duration::from_millis(100));
/// save.call("hey".to_string());
///
/// service.advance(Duration::from_millis(499));
/// assert!(saved.lock().unwrap().is_empty());
///
/// service.advance(Duration::from_millis(1));
/// assert_eq!(*saved.lock().unwrap(), vec!["hey".to_string()]);
/// ```
pub struct Debounce<A, TS: TimerService> {
    inner: Arc<Inner<A>>,
    delay: Duration,
    service: TS,
}

struct Inner<A> {
    action: ActionCell<Action<A>>,
    pending: Mutex<Pending<A>>,
}

struct Pending<A> {
    timer: Option<TimerHandle>,
    args: Option<A>,
    // Bumped by every call; a timer only delivers if it belongs to the latest one
    generation: u64,
}

impl<A, TS> Debounce<A, TS>
where
    A: Send + 'static,
    TS: TimerService,
{
    /// Wrap `action` so that it only runs once calls stop for `delay`.
    pub fn new<F>(action: F, delay: Duration, service: TS) -> Self
    where
        F: FnMut(A) + Send + 'static,
    {
        Self {
            inner: Arc::new(Inner {
                action: ActionCell::new(Box::new(action)),
                pending: Mutex::new(Pending {
                    timer: None,
                    args: None,
                    generation: 0,
                }),
            }),
            delay,
            service,
        }
    }

    /// Wrap a fallible `action`; failures of the deferred invocation are
    /// handed to `on_error`, as there is no caller left to return them to.
    pub fn fallible<F, E, H>(mut action: F, delay: Duration, service: TS, mut on_error: H) -> Self
    where
        F: FnMut(A) -> Result<(), E> + Send + 'static,
        E: 'static,
        H: FnMut(E) + Send + 'static,
    {
        Self::new(
            move |args| {
                if let Err(error) = action(args) {
                    on_error(error);
                }
            },
            delay,
            service,
        )
    }

    /// Wrap a fallible `action` whose failures are logged as
    /// [`PacerError::Action`].
    pub fn logged<F, E>(action: F, delay: Duration, service: TS) -> Self
    where
        F: FnMut(A) -> Result<(), E> + Send + 'static,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::fallible(action, delay, service, |error: E| {
            let error = PacerError::action_error(error);
            pacer_core::error!("debounced {}", error);
        })
    }

    /// Record a call: cancel the pending invocation, if any, and schedule a
    /// new one with `args` after `delay`.
    pub fn call(&self, args: A) {
        let mut pending = self.inner.pending.lock();

        if let Some(previous) = pending.timer.take() {
            if self.service.cancel(&previous) {
                pacer_core::trace!("debounce superseded {}", previous.id());
            }
        }

        pending.generation = pending.generation.wrapping_add(1);
        pending.args = Some(args);

        let generation = pending.generation;
        let inner = Arc::clone(&self.inner);
        pending.timer = Some(
            self.service
                .schedule(self.delay, move || inner.deliver(generation)),
        );
    }

    /// Drop the pending invocation. Returns `true` if one was pending.
    pub fn cancel(&self) -> bool {
        let mut pending = self.inner.pending.lock();
        if let Some(timer) = pending.timer.take() {
            self.service.cancel(&timer);
        }
        pending.args.take().is_some()
    }

    /// Run the pending invocation now instead of waiting for its timer.
    /// Returns `true` if there was one to run.
    ///
    /// Called from inside the action, `flush` does nothing and returns
    /// `false`: the pending invocation stays on its timer.
    pub fn flush(&self) -> bool {
        if self.inner.action.is_running_here() {
            pacer_core::trace!("debounce ignored a flush from inside the action");
            return false;
        }

        let args = {
            let mut pending = self.inner.pending.lock();
            if let Some(timer) = pending.timer.take() {
                self.service.cancel(&timer);
            }
            pending.args.take()
        };

        match args {
            Some(args) => {
                self.inner.invoke(args);
                true
            }
            None => false,
        }
    }

    /// `true` while an invocation is waiting for its quiet period.
    pub fn is_pending(&self) -> bool {
        self.inner.pending.lock().args.is_some()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<A> Inner<A> {
    fn deliver(&self, generation: u64) {
        // A timer driven from inside the action leaves its arguments pending
        // for the next flush or call
        if self.action.is_running_here() {
            return;
        }

        let args = {
            let mut pending = self.pending.lock();
            if pending.generation != generation {
                return;
            }
            pending.timer = None;
            pending.args.take()
        };

        if let Some(args) = args {
            self.invoke(args);
        }
    }

    fn invoke(&self, args: A) {
        self.action.run(|action| action(args));
    }
}

impl<A, TS: TimerService> fmt::Debug for Debounce<A, TS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pending = self.inner.pending.lock();
        f.debug_struct("Debounce")
            .field("delay", &self.delay)
            .field("timer", &pending.timer)
            .field("generation", &pending.generation)
            .field("service", &self.service)
            .finish_non_exhaustive()
    }
}

/// Shorthand for [`Debounce::new`].
pub fn debounce<A, F, TS>(action: F, delay: Duration, service: TS) -> Debounce<A, TS>
where
    A: Send + 'static,
    F: FnMut(A) + Send + 'static,
    TS: TimerService,
{
    Debounce::new(action, delay, service)
}
