// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::impls::async_service::AsyncTimerService;
use crate::timer::Timer;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::time::Duration;

#[derive(Clone, Debug, Default)]
pub struct SmolTimer;

pub struct SmolSleep {
    timer: async_io::Timer,
}

impl SmolSleep {
    fn new(duration: Duration) -> Self {
        Self {
            timer: async_io::Timer::after(duration),
        }
    }
}

impl Future for SmolSleep {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.timer).poll(cx).map(|_| ())
    }
}

impl Timer for SmolTimer {
    type Sleep = SmolSleep;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        SmolSleep::new(duration)
    }
}

/// Timer service spawning one task per scheduled callback on smol's global
/// executor.
pub type SmolTimerService = AsyncTimerService<SmolTimer>;
