// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use core::time::Duration;
use futures::Stream;
use pacer_core::StreamItem;
use pacer_runtime::Timer;
use pin_project::pin_project;

/// Extension trait providing the `debounce` operator for streams.
pub trait DebounceExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Debounces the stream by the specified duration.
    ///
    /// This implements **trailing debounce** semantics:
    /// - When a value arrives, start/restart the timer
    /// - If no new value arrives before the timer expires, emit the latest value
    /// - If a new value arrives, discard the pending value and restart the timer
    /// - When the stream ends, emit any pending value immediately
    ///
    /// Errors pass through immediately and discard the pending value.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # #[cfg(feature = "runtime-tokio")]
    /// # #[tokio::main]
    /// # async fn main() {
    /// use pacer_core::StreamItem;
    /// use pacer_runtime::TokioTimer;
    /// use pacer_stream_time::DebounceExt;
    /// use futures::channel::mpsc;
    /// use futures::stream::StreamExt;
    /// use std::time::Duration;
    ///
    /// let (tx, rx) = mpsc::unbounded();
    /// let mut debounced = rx
    ///     .map(StreamItem::Value)
    ///     .debounce_with_timer(Duration::from_millis(100), TokioTimer);
    ///
    /// tx.unbounded_send("h").unwrap();
    /// tx.unbounded_send("he").unwrap();
    /// tx.unbounded_send("hey").unwrap();
    ///
    /// assert_eq!(debounced.next().await.unwrap().unwrap(), "hey");
    /// # }
    /// # #[cfg(not(feature = "runtime-tokio"))]
    /// # fn main() {}
    /// ```
    fn debounce_with_timer<TM: Timer>(
        self,
        duration: Duration,
        timer: TM,
    ) -> impl Stream<Item = StreamItem<T>> + Unpin {
        Box::pin(DebounceStream {
            stream: self,
            duration,
            timer,
            pending_value: None,
            sleep: None,
            stream_ended: false,
        })
    }
}

impl<S, T> DebounceExt<T> for S where S: Stream<Item = StreamItem<T>> {}

#[pin_project]
struct DebounceStream<S, T, TM: Timer> {
    #[pin]
    stream: S,
    duration: Duration,
    timer: TM,
    pending_value: Option<T>,
    #[pin]
    sleep: Option<TM::Sleep>,
    stream_ended: bool,
}

impl<S, T, TM> Stream for DebounceStream<S, T, TM>
where
    S: Stream<Item = StreamItem<T>>,
    TM: Timer,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            if *this.stream_ended {
                return Poll::Ready(this.pending_value.take().map(StreamItem::Value));
            }

            if this.pending_value.is_some() {
                if let Some(sleep) = this.sleep.as_mut().as_pin_mut() {
                    if sleep.poll(cx).is_ready() {
                        this.sleep.set(None);
                        return Poll::Ready(this.pending_value.take().map(StreamItem::Value));
                    }
                }
            }

            match this.stream.as_mut().poll_next(cx) {
                Poll::Ready(Some(StreamItem::Value(value))) => {
                    if this.pending_value.replace(value).is_some() {
                        pacer_core::trace!("debounce stream superseded a pending value");
                    }
                    this.sleep
                        .set(Some(this.timer.sleep_future(*this.duration)));
                    // Loop so that a zero duration is observed right away
                    continue;
                }
                Poll::Ready(Some(StreamItem::Error(err))) => {
                    *this.pending_value = None;
                    this.sleep.set(None);
                    return Poll::Ready(Some(StreamItem::Error(err)));
                }
                Poll::Ready(None) => {
                    *this.stream_ended = true;
                    this.sleep.set(None);
                    continue;
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

#[cfg(feature = "runtime-tokio")]
mod default_timer {
    use super::DebounceExt;
    use core::time::Duration;
    use futures::Stream;
    use pacer_core::StreamItem;
    use pacer_runtime::TokioTimer;

    /// Extension trait for debouncing with the tokio timer.
    pub trait DebounceWithDefaultTimerExt<T>: Stream<Item = StreamItem<T>> + Sized {
        /// Same as [`DebounceExt::debounce_with_timer`] with `TokioTimer`.
        fn debounce(self, duration: Duration) -> impl Stream<Item = StreamItem<T>> + Unpin {
            self.debounce_with_timer(duration, TokioTimer)
        }
    }

    impl<S, T> DebounceWithDefaultTimerExt<T> for S where S: Stream<Item = StreamItem<T>> {}
}

#[cfg(feature = "runtime-tokio")]
pub use default_timer::DebounceWithDefaultTimerExt;
