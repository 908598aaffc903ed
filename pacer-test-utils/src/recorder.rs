// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer_runtime::ManualTimerService;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

/// Collects every value an action was invoked with.
#[derive(Debug)]
pub struct Recorder<T> {
    calls: Arc<Mutex<Vec<T>>>,
}

impl<T: Send + 'static> Recorder<T> {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// An action appending its argument to this recorder.
    pub fn sink(&self) -> impl FnMut(T) + Send + 'static {
        let calls = self.calls.clone();
        move |value| calls.lock().push(value)
    }

    pub fn len(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.lock().is_empty()
    }
}

impl<T: Clone> Recorder<T> {
    pub fn values(&self) -> Vec<T> {
        self.calls.lock().clone()
    }
}

impl<T: Send + 'static> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
        }
    }
}

/// Collects `(virtual time, value)` pairs read from a [`ManualTimerService`].
#[derive(Debug, Clone)]
pub struct TimelineRecorder<T> {
    clock: ManualTimerService,
    calls: Arc<Mutex<Vec<(Duration, T)>>>,
}

impl<T: Send + 'static> TimelineRecorder<T> {
    pub fn new(clock: &ManualTimerService) -> Self {
        Self {
            clock: clock.clone(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// An action stamping its argument with the current virtual time.
    pub fn sink(&self) -> impl FnMut(T) + Send + 'static {
        let clock = self.clock.clone();
        let calls = self.calls.clone();
        move |value| calls.lock().push((clock.now(), value))
    }

    /// Virtual instants at which the action ran.
    pub fn times(&self) -> Vec<Duration> {
        self.calls.lock().iter().map(|(at, _)| *at).collect()
    }

    pub fn len(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.lock().is_empty()
    }
}

impl<T: Clone> TimelineRecorder<T> {
    pub fn entries(&self) -> Vec<(Duration, T)> {
        self.calls.lock().clone()
    }
}
