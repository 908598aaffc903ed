// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use core::time::Duration;
use pacer_core::TimerHandle;

/// Deferred callback owned by a timer service until it fires or is cancelled.
pub type Callback = Box<dyn FnOnce() + Send + 'static>;

/// Schedules callbacks to run after a delay.
///
/// Contract for implementations:
/// - a callback runs at most once, and only after its handle won
///   [`TimerHandle::try_fire`]
/// - it never runs earlier than `delay` after `schedule` returned
/// - it never runs synchronously inside `schedule`, even for a zero delay
/// - a callback whose handle was cancelled first never runs
pub trait TimerService: Clone + Send + Sync + Debug + 'static {
    /// Schedule an already boxed callback.
    fn schedule_boxed(&self, delay: Duration, callback: Callback) -> TimerHandle;

    /// Schedule `callback` to run once `delay` has elapsed.
    fn schedule<F>(&self, delay: Duration, callback: F) -> TimerHandle
    where
        F: FnOnce() + Send + 'static,
        Self: Sized,
    {
        self.schedule_boxed(delay, Box::new(callback))
    }

    /// Cancel a scheduled callback.
    ///
    /// Returns `true` if the callback was still pending. Idempotent.
    fn cancel(&self, handle: &TimerHandle) -> bool {
        handle.cancel()
    }
}
