// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::future::Future;

/// Spawn a fire-and-forget task on the runtime selected by features.
///
/// tokio takes precedence when several runtimes are enabled.
pub(crate) fn spawn_detached<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    #[cfg(feature = "runtime-tokio")]
    {
        drop(tokio::spawn(future));
    }

    #[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
    smol::spawn(future).detach();
}
