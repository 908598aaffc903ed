// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Stream counterparts of the pacer callback combinators.
//!
//! - **`ThrottleExt`** - `.throttle_with_timer(duration, timer)`: leading-edge
//!   throttling of stream values
//! - **`DebounceExt`** - `.debounce_with_timer(duration, timer)`: trailing-edge
//!   debouncing of stream values
//!
//! With `runtime-tokio` (default) the `ThrottleWithDefaultTimerExt` and
//! `DebounceWithDefaultTimerExt` traits add `.throttle(duration)` and
//! `.debounce(duration)` using `TokioTimer`.
//!
//! Errors (`StreamItem::Error`) are never delayed or dropped by these
//! operators.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "runtime-tokio")]
//! # #[tokio::main]
//! # async fn main() {
//! use pacer_core::StreamItem;
//! use pacer_stream_time::prelude::*;
//! use futures::stream::{self, StreamExt};
//! use std::time::Duration;
//!
//! let source = stream::iter(vec![1, 2, 3]).map(StreamItem::Value);
//! let mut throttled = source.throttle(Duration::from_millis(100));
//!
//! assert_eq!(throttled.next().await.unwrap().unwrap(), 1);
//! # }
//! # #[cfg(not(feature = "runtime-tokio"))]
//! # fn main() {}
//! ```

mod debounce;
pub mod prelude;
mod throttle;

pub use debounce::DebounceExt;
pub use throttle::ThrottleExt;

#[cfg(feature = "runtime-tokio")]
pub use debounce::DebounceWithDefaultTimerExt;
#[cfg(feature = "runtime-tokio")]
pub use throttle::ThrottleWithDefaultTimerExt;
