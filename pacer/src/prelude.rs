// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub use crate::{curry2, curry3, curry4, debounce, throttle, Debounce, PacerConfig, Throttle};
pub use pacer_runtime::{ManualTimerService, TimerService};

#[cfg(feature = "runtime-tokio")]
pub use pacer_runtime::TokioTimerService;

#[cfg(feature = "runtime-smol")]
pub use pacer_runtime::SmolTimerService;
