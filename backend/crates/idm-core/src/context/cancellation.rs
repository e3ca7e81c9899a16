//! Process-wide cancellation.
//!
//! A single [`CancellationSource`] is created at startup and triggered on
//! shutdown. Every request context holds a [`CancellationSignal`] subscribed
//! to it, so in-flight store operations abort instead of completing silently.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;

/// Condition surfaced when an operation is abandoned
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Cancelled {
    #[error("deadline exceeded after {elapsed_ms}ms")]
    DeadlineExceeded { elapsed_ms: u64 },

    #[error("operation cancelled")]
    Signalled,
}

/// Owner side of the cancellation channel
#[derive(Debug, Clone)]
pub struct CancellationSource {
    tx: Arc<watch::Sender<bool>>,
}

impl CancellationSource {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Trigger cancellation (call this from the signal handler)
    pub fn cancel(&self) {
        log::info!("Cancellation requested, notifying in-flight operations");
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }

    pub fn signal(&self) -> CancellationSignal {
        CancellationSignal {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for CancellationSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiver side, cheap to clone into each request
#[derive(Debug, Clone)]
pub struct CancellationSignal {
    rx: watch::Receiver<bool>,
}

impl CancellationSignal {
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once cancellation is triggered. Never resolves if the
    /// source is dropped without cancelling.
    pub async fn cancelled(&mut self) {
        if self.rx.wait_for(|cancelled| *cancelled).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
