// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_channel::Receiver;
use futures::channel::mpsc::{unbounded, UnboundedSender};
use futures::stream::StreamExt;
use futures::Stream;
use pacer_core::StreamItem;

/// An action forwarding its argument into a channel, for tests where the
/// action runs on a runtime task.
pub fn channel_sink<T: Send + 'static>() -> (impl FnMut(T) + Send + 'static, Receiver<T>) {
    let (tx, rx) = async_channel::unbounded();
    let sink = move |value| {
        let _ = tx.try_send(value);
    };
    (sink, rx)
}

/// A sender plus the stream of `StreamItem::Value`s it produces.
pub fn test_channel<T: Send + 'static>(
) -> (UnboundedSender<T>, impl Stream<Item = StreamItem<T>> + Unpin) {
    let (tx, rx) = unbounded();
    (tx, rx.map(StreamItem::Value))
}

/// Like [`test_channel`] but the sender can inject errors too.
pub fn test_channel_with_errors<T: Send + 'static>(
) -> (UnboundedSender<StreamItem<T>>, impl Stream<Item = StreamItem<T>> + Unpin) {
    unbounded()
}
