// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod helpers;
pub mod recorder;
pub mod test_channel;

pub use recorder::{Recorder, TimelineRecorder};
pub use test_channel::{channel_sink, test_channel, test_channel_with_errors};

/// Milliseconds as a `Duration`, to keep timelines in tests readable.
pub const fn ms(millis: u64) -> std::time::Duration {
    std::time::Duration::from_millis(millis)
}
