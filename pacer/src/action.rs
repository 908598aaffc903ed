// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::thread::{self, ThreadId};

/// User action guarded against re-entrant invocation.
///
/// Other threads wait for the running invocation to finish. The thread that
/// is currently running the action is turned away instead, since it would
/// otherwise block on a lock it already holds.
pub(crate) struct ActionCell<F: ?Sized> {
    running_on: Mutex<Option<ThreadId>>,
    action: Mutex<Box<F>>,
}

impl<F: ?Sized> ActionCell<F> {
    pub(crate) fn new(action: Box<F>) -> Self {
        Self {
            running_on: Mutex::new(None),
            action: Mutex::new(action),
        }
    }

    /// `true` when called from inside the action.
    pub(crate) fn is_running_here(&self) -> bool {
        *self.running_on.lock() == Some(thread::current().id())
    }

    /// Run `f` with exclusive access to the action, or return `None` when
    /// called from inside the action.
    pub(crate) fn run<T>(&self, f: impl FnOnce(&mut F) -> T) -> Option<T> {
        if self.is_running_here() {
            return None;
        }

        let mut action = self.action.lock();
        let _running = Running::enter(&self.running_on);
        Some(f(&mut **action))
    }
}

// Clears the running marker even if the action panics
struct Running<'a>(&'a Mutex<Option<ThreadId>>);

impl<'a> Running<'a> {
    fn enter(slot: &'a Mutex<Option<ThreadId>>) -> Self {
        *slot.lock() = Some(thread::current().id());
        Self(slot)
    }
}

impl Drop for Running<'_> {
    fn drop(&mut self) {
        *self.0.lock() = None;
    }
}
