// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::impls::async_service::AsyncTimerService;
use crate::timer::Timer;
use std::time::Duration;

/// Timer backed by `tokio::time`, so it honours `tokio::time::pause`.
#[derive(Clone, Debug, Default)]
pub struct TokioTimer;

impl Timer for TokioTimer {
    type Sleep = tokio::time::Sleep;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        tokio::time::sleep(duration)
    }
}

/// Timer service spawning one tokio task per scheduled callback.
///
/// Must be used from within a tokio runtime.
pub type TokioTimerService = AsyncTimerService<TokioTimer>;
