// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod error;
mod logging;
pub mod stream_item;
pub mod timer_handle;

pub use self::error::{PacerError, Result};
pub use self::stream_item::StreamItem;
pub use self::timer_handle::{Cancelled, TimerHandle, TimerId, TimerState};

#[doc(hidden)]
pub mod __private {
    #[cfg(feature = "tracing")]
    pub use tracing;
}
