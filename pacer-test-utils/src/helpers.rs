// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_channel::Receiver;
use futures::stream::StreamExt;
use futures::Stream;
use std::time::Duration;
use tokio::time::{sleep, timeout};

/// Receive the next value, giving up after `timeout_ms`.
pub async fn recv_timeout<T>(rx: &Receiver<T>, timeout_ms: u64) -> Option<T> {
    timeout(Duration::from_millis(timeout_ms), rx.recv())
        .await
        .ok()
        .and_then(Result::ok)
}

/// Panic if a value arrives within `timeout_ms`.
pub async fn assert_no_recv<T: std::fmt::Debug>(rx: &Receiver<T>, timeout_ms: u64) {
    if let Some(value) = recv_timeout(rx, timeout_ms).await {
        panic!("expected nothing to be received, got {value:?}");
    }
}

/// Next stream item, or `None` after `timeout_ms`.
pub async fn unwrap_stream<S, T>(stream: &mut S, timeout_ms: u64) -> Option<T>
where
    S: Stream<Item = T> + Unpin,
{
    timeout(Duration::from_millis(timeout_ms), stream.next())
        .await
        .ok()
        .flatten()
}

pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!("Unexpected element emitted, expected no output.");
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {}
    }
}
