//! Cooperative cancellation for the monitor loop.
//!
//! Backed by a `watch` channel so any number of loops can observe a
//! single trigger, and so a dropped trigger simply means "never".

use std::time::Duration;

use tokio::sync::watch;

/// Fires the shutdown signal.
#[derive(Debug, Clone)]
pub struct ShutdownTrigger {
    tx: watch::Sender<bool>,
}

impl ShutdownTrigger {
    /// Signal every [`Shutdown`] created from this trigger.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }
}

/// Observes the shutdown signal.
#[derive(Debug, Clone)]
pub struct Shutdown {
    rx: watch::Receiver<bool>,
}

/// Create a connected trigger / signal pair.
#[must_use]
pub fn channel() -> (ShutdownTrigger, Shutdown) {
    let (tx, rx) = watch::channel(false);
    (ShutdownTrigger { tx }, Shutdown { rx })
}

impl Shutdown {
    /// A signal that never fires.
    #[must_use]
    pub fn never() -> Self {
        let (_, rx) = watch::channel(false);
        Self { rx }
    }

    #[must_use]
    pub fn is_triggered(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolve once shutdown has been signalled.
    pub async fn triggered(&mut self) {
        loop {
            if *self.rx.borrow_and_update() {
                return;
            }
            if self.rx.changed().await.is_err() {
                // Trigger dropped without firing.
                std::future::pending::<()>().await;
            }
        }
    }

    /// Sleep for `duration` unless shutdown fires first.
    ///
    /// Returns `true` when the full delay elapsed and `false` when the
    /// sleep was cut short by shutdown.
    pub async fn sleep(&mut self, duration: Duration) -> bool {
        let elapsed = tokio::select! {
            () = tokio::time::sleep(duration) => true,
            () = self.triggered() => false,
        };
        elapsed && !self.is_triggered()
    }
}
