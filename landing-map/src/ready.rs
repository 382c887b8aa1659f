//! Handshake between the library loader and the bootstrap.
//!
//! The loader keeps the [`ReadySignal`] and fires it once the library is usable. The
//! bootstrap side awaits [`LibraryReady`], and only then gets a [`Loaded`] handle to pass
//! to [`MapBootstrap`](crate::MapBootstrap).

use std::ops::Deref;

use tokio::sync::oneshot;

use crate::BootstrapError;

/// Creates a connected signal/waiter pair.
pub fn readiness_channel<L>() -> (ReadySignal<L>, LibraryReady<L>) {
    let (sender, receiver) = oneshot::channel();
    (ReadySignal { sender }, LibraryReady { receiver })
}

/// Loader side of the handshake.
#[derive(Debug)]
pub struct ReadySignal<L> {
    sender: oneshot::Sender<L>,
}

impl<L> ReadySignal<L> {
    /// Hands the loaded library over to the waiting side.
    ///
    /// Fails if the waiting side was dropped.
    pub fn signal(self, library: L) -> Result<(), BootstrapError> {
        self.sender
            .send(library)
            .map_err(|_| BootstrapError::LibraryUnavailable)?;
        log::debug!("Map library signaled ready");
        Ok(())
    }
}

/// Waiting side of the handshake.
#[derive(Debug)]
pub struct LibraryReady<L> {
    receiver: oneshot::Receiver<L>,
}

impl<L> LibraryReady<L> {
    /// Resolves once the library is signaled ready.
    ///
    /// Returns [`BootstrapError::LibraryUnavailable`] if the signal is dropped without firing.
    pub async fn wait(self) -> Result<Loaded<L>, BootstrapError> {
        match self.receiver.await {
            Ok(library) => Ok(Loaded(library)),
            Err(_) => {
                log::warn!("Map library loader went away before signaling readiness");
                Err(BootstrapError::LibraryUnavailable)
            }
        }
    }
}

/// Library that has completed loading. Only obtainable through [`LibraryReady::wait`].
#[derive(Debug)]
pub struct Loaded<L>(L);

impl<L> Loaded<L> {
    /// Returns the library.
    pub fn into_inner(self) -> L {
        self.0
    }
}

impl<L> Deref for Loaded<L> {
    type Target = L;

    fn deref(&self) -> &L {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wait_resolves_after_signal() {
        let (signal, ready) = readiness_channel();
        signal.signal(42u32).expect("waiter is alive");

        let loaded = tokio_test::block_on(ready.wait()).expect("library is signaled");
        assert_eq!(*loaded, 42);
        assert_eq!(loaded.into_inner(), 42);
    }

    #[test]
    fn dropped_signal_fails_wait() {
        let (signal, ready) = readiness_channel::<u32>();
        drop(signal);

        let result = tokio_test::block_on(ready.wait());
        assert!(matches!(result, Err(BootstrapError::LibraryUnavailable)));
    }

    #[test]
    fn signal_without_waiter_fails() {
        let (signal, ready) = readiness_channel();
        drop(ready);

        assert!(matches!(
            signal.signal(1u32),
            Err(BootstrapError::LibraryUnavailable)
        ));
    }
}
