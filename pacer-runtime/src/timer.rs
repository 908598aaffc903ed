// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use core::future::Future;
use core::time::Duration;

pub trait Timer: Clone + Send + Sync + Debug + 'static {
    type Sleep: Future<Output = ()> + Send + 'static;

    /// Creates a future that completes once `duration` has elapsed.
    ///
    /// The deadline is fixed when the future is created, not when it is first
    /// polled.
    fn sleep_future(&self, duration: Duration) -> Self::Sleep;
}
