// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Timing combinators for callbacks: throttle, debounce and curry.
//!
//! # Overview
//!
//! - **[`Throttle`]** - leading-edge throttling; the first call of a burst runs
//!   immediately, the rest of the window is dropped
//! - **[`Debounce`]** - trailing-edge debouncing; only the last call of a burst
//!   runs, `delay` after it
//! - **[`curry2`], [`curry3`], [`curry4`]** - strict unary currying
//! - **[`PacerConfig`]** - TOML-loadable timing settings
//!
//! Throttle and debounce never sleep. They schedule callbacks on a
//! [`TimerService`](pacer_runtime::TimerService) and return at once, so the
//! same wrapper works on tokio, on smol, or on a hand-driven
//! [`ManualTimerService`](pacer_runtime::ManualTimerService).
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "runtime-tokio")]
//! # #[tokio::main]
//! # async fn main() {
//! use pacer::prelude::*;
//! use std::time::Duration;
//!
//! let service = TokioTimerService::default();
//!
//! let on_scroll = throttle(|y: u32| println!("scrolled to {y}"), Duration::from_millis(100), service.clone());
//! on_scroll.call(10); // printed
//! on_scroll.call(20); // dropped
//!
//! let on_input = debounce(|q: String| println!("search {q}"), Duration::from_millis(300), service);
//! on_input.call("ru".to_string());
//! on_input.call("rust".to_string()); // only this one is searched, 300ms later
//! # tokio::time::sleep(Duration::from_millis(400)).await;
//! # }
//! # #[cfg(not(feature = "runtime-tokio"))]
//! # fn main() {}
//! ```

mod action;
mod config;
mod curry;
mod debounce;
mod throttle;

pub mod prelude;

pub use config::PacerConfig;
pub use curry::{curry2, curry3, curry4, Unary};
pub use debounce::{debounce, Debounce};
pub use throttle::{throttle, Throttle};

pub use pacer_core::{PacerError, Result, TimerHandle, TimerState};
pub use pacer_runtime::{ManualTimerService, TimerService};

#[cfg(feature = "runtime-tokio")]
pub use pacer_runtime::TokioTimerService;

#[cfg(feature = "runtime-smol")]
pub use pacer_runtime::SmolTimerService;
