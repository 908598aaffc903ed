// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::spawn::spawn_detached;
use crate::timer::Timer;
use crate::timer_service::{Callback, TimerService};
use core::pin::pin;
use core::time::Duration;
use futures::future::{select, Either};
use pacer_core::TimerHandle;

/// [`TimerService`] built on any [`Timer`].
///
/// Every scheduled callback gets its own detached task that races the timer's
/// sleep against the handle's cancellation. The sleep future is created
/// inside `schedule`, so the deadline counts from the moment of scheduling and
/// not from whenever the runtime first polls the task.
#[derive(Clone, Debug, Default)]
pub struct AsyncTimerService<TM: Timer> {
    timer: TM,
}

impl<TM: Timer> AsyncTimerService<TM> {
    pub fn new(timer: TM) -> Self {
        Self { timer }
    }
}

impl<TM: Timer> TimerService for AsyncTimerService<TM> {
    fn schedule_boxed(&self, delay: Duration, callback: Callback) -> TimerHandle {
        let handle = TimerHandle::new();
        let task_handle = handle.clone();
        let sleep = self.timer.sleep_future(delay);

        pacer_core::trace!("scheduling {} in {:?}", handle.id(), delay);

        spawn_detached(async move {
            let sleep = pin!(sleep);
            let cancelled = pin!(task_handle.cancelled());

            if let Either::Left(_) = select(sleep, cancelled).await {
                if task_handle.try_fire() {
                    callback();
                }
            }
        });

        handle
    }

    fn cancel(&self, handle: &TimerHandle) -> bool {
        let cancelled = handle.cancel();
        if cancelled {
            pacer_core::trace!("cancelled {}", handle.id());
        }
        cancelled
    }
}
