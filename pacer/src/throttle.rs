// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Leading-edge throttling of a callback.
//!
//! The first call of a burst runs immediately and opens a cooldown window of
//! `interval`. Every call made while the window is open is dropped: there is
//! no queue and no trailing invocation. When the cooldown timer fires the
//! window closes and the next call runs again.
//!
//! ```text
//! calls:    0   100  200            1100
//! action:   0                       1100      (interval = 1000)
//! ```

use crate::action::ActionCell;
use core::fmt;
use core::time::Duration;
use pacer_core::TimerHandle;
use pacer_runtime::TimerService;
use parking_lot::Mutex;

type Action<A, R> = dyn FnMut(A) -> R + Send;

/// Callback wrapper enforcing at most one invocation per `interval`.
///
/// # Example
///
/// ```
/// use pacer::Throttle;
/// use pacer_runtime::ManualTimerService;
/// use std::time::Duration;
///
/// let service = ManualTimerService::new();
/// let throttled = Throttle::new(|x: i32| x * 2, Duration::from_millis(1000), service.clone());
///
/// assert_eq!(throttled.call(1), Some(2));
/// assert_eq!(throttled.call(2), None); // inside the window
///
/// service.advance(Duration::from_millis(1000));
/// assert_eq!(throttled.call(3), Some(6));
/// ```
pub struct Throttle<A, R, TS: TimerService> {
    action: ActionCell<Action<A, R>>,
    interval: Duration,
    cooldown: Mutex<Option<TimerHandle>>,
    service: TS,
}

impl<A, R, TS> Throttle<A, R, TS>
where
    A: 'static,
    R: 'static,
    TS: TimerService,
{
    /// Wrap `action` so that it runs at most once per `interval`.
    ///
    /// A zero `interval` disables throttling: every call runs.
    pub fn new<F>(action: F, interval: Duration, service: TS) -> Self
    where
        F: FnMut(A) -> R + Send + 'static,
    {
        Self {
            action: ActionCell::new(Box::new(action)),
            interval,
            cooldown: Mutex::new(None),
            service,
        }
    }

    /// Invoke the wrapped action unless a cooldown is running.
    ///
    /// Returns `Some` with the action's result when it ran, `None` when the
    /// call was dropped. A result of `R = Result<_, _>` is handed back
    /// untouched, so action failures surface to the caller right here.
    ///
    /// A call made from inside the action itself is always dropped, even
    /// with a zero interval.
    pub fn call(&self, args: A) -> Option<R> {
        if self.action.is_running_here() {
            pacer_core::trace!("throttle dropped a re-entrant call");
            return None;
        }

        if !self.arm_cooldown() {
            pacer_core::trace!("throttle dropped a call during cooldown");
            return None;
        }

        self.action.run(|action| action(args))
    }

    /// `true` while calls are being dropped.
    pub fn is_cooling_down(&self) -> bool {
        self.cooldown
            .lock()
            .as_ref()
            .is_some_and(TimerHandle::is_pending)
    }

    /// End the current cooldown early so that the next call runs.
    pub fn reset(&self) {
        if let Some(handle) = self.cooldown.lock().take() {
            self.service.cancel(&handle);
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    // Armed before the action runs, so the window starts at the call
    fn arm_cooldown(&self) -> bool {
        let mut cooldown = self.cooldown.lock();

        if cooldown.as_ref().is_some_and(TimerHandle::is_pending) {
            return false;
        }

        // An expired handle is already `Fired`, which is all the state clearing
        // the cooldown needs; the timer callback itself has nothing left to do.
        *cooldown = if self.interval.is_zero() {
            None
        } else {
            Some(self.service.schedule(self.interval, || {}))
        };
        true
    }
}

impl<A, R, TS: TimerService> fmt::Debug for Throttle<A, R, TS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Throttle")
            .field("interval", &self.interval)
            .field("cooldown", &*self.cooldown.lock())
            .field("service", &self.service)
            .finish_non_exhaustive()
    }
}

/// Shorthand for [`Throttle::new`].
pub fn throttle<A, R, F, TS>(action: F, interval: Duration, service: TS) -> Throttle<A, R, TS>
where
    A: 'static,
    R: 'static,
    F: FnMut(A) -> R + Send + 'static,
    TS: TimerService,
{
    Throttle::new(action, interval, service)
}
