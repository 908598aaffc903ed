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

/// Extension trait providing the `throttle` operator for streams.
pub trait ThrottleExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Throttles the stream by the specified duration.
    ///
    /// This implements **leading throttle** semantics:
    /// - When a value arrives and we are not throttling:
    ///   - Emit the value immediately
    ///   - Start the throttle timer
    ///   - Drop subsequent values until the timer expires
    /// - When the timer expires:
    ///   - We become ready to accept a new value
    ///
    /// There is no trailing emission of the last dropped value. A zero
    /// `duration` lets every value through.
    ///
    /// Errors pass through immediately without throttling, to ensure timely
    /// error propagation.
    fn throttle_with_timer<TM: Timer>(
        self,
        duration: Duration,
        timer: TM,
    ) -> impl Stream<Item = StreamItem<T>> + Unpin {
        Box::pin(ThrottleStream {
            stream: self,
            duration,
            timer,
            sleep: None,
        })
    }
}

impl<S, T> ThrottleExt<T> for S where S: Stream<Item = StreamItem<T>> {}

#[pin_project]
struct ThrottleStream<S, TM: Timer> {
    #[pin]
    stream: S,
    duration: Duration,
    timer: TM,
    // `Some` while a throttle window is open
    #[pin]
    sleep: Option<TM::Sleep>,
}

impl<S, T, TM> Stream for ThrottleStream<S, TM>
where
    S: Stream<Item = StreamItem<T>>,
    TM: Timer,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            // 1. Close the window if its timer has expired
            if let Some(sleep) = this.sleep.as_mut().as_pin_mut() {
                if sleep.poll(cx).is_ready() {
                    this.sleep.set(None);
                }
            }

            // 2. Poll source stream
            match this.stream.as_mut().poll_next(cx) {
                Poll::Ready(Some(StreamItem::Value(value))) => {
                    if this.sleep.is_some() {
                        pacer_core::trace!("throttle stream dropped a value");
                        continue;
                    }
                    if !this.duration.is_zero() {
                        this.sleep
                            .set(Some(this.timer.sleep_future(*this.duration)));
                    }
                    return Poll::Ready(Some(StreamItem::Value(value)));
                }
                Poll::Ready(Some(StreamItem::Error(err))) => {
                    return Poll::Ready(Some(StreamItem::Error(err)));
                }
                Poll::Ready(None) => return Poll::Ready(None),
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

#[cfg(feature = "runtime-tokio")]
mod default_timer {
    use super::ThrottleExt;
    use core::time::Duration;
    use futures::Stream;
    use pacer_core::StreamItem;
    use pacer_runtime::TokioTimer;

    /// `throttle` with the tokio timer.
    pub trait ThrottleWithDefaultTimerExt<T>: Stream<Item = StreamItem<T>> + Sized {
        fn throttle(self, duration: Duration) -> impl Stream<Item = StreamItem<T>> + Unpin {
            self.throttle_with_timer(duration, TokioTimer)
        }
    }

    impl<S, T> ThrottleWithDefaultTimerExt<T> for S where S: Stream<Item = StreamItem<T>> {}
}

#[cfg(feature = "runtime-tokio")]
pub use default_timer::ThrottleWithDefaultTimerExt;
