// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Timer abstractions consumed by the pacer combinators.
//!
//! - [`Timer`](timer::Timer) - runtime-agnostic sleep future and clock
//! - [`TimerService`](timer_service::TimerService) - "run this callback after
//!   a delay, unless cancelled"
//! - [`ManualTimerService`](impls::manual::ManualTimerService) - virtual clock
//!   advanced by hand, for deterministic tests and simulations
//! - `TokioTimerService` / `SmolTimerService` - spawn one detached task per
//!   scheduled callback on the selected runtime
//!
//! # Runtime Support
//!
//! - `runtime-tokio` (default) - `TokioTimer`, `TokioTimerService`
//! - `runtime-smol` - `SmolTimer`, `SmolTimerService`
//!
//! When both are enabled, timer tasks are spawned on tokio.

pub mod impls;
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
mod spawn;
pub mod timer;
pub mod timer_service;

pub use impls::manual::ManualTimerService;
pub use timer::Timer;
pub use timer_service::{Callback, TimerService};

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use impls::async_service::AsyncTimerService;

#[cfg(feature = "runtime-tokio")]
pub use impls::tokio::{TokioTimer, TokioTimerService};

#[cfg(feature = "runtime-smol")]
pub use impls::smol::{SmolTimer, SmolTimerService};
