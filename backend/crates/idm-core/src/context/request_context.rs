use crate::{CancellationSignal, Cancelled};

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::time::Instant;
use uuid::Uuid;

static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Per-request carrier for correlation, deadline and cancellation.
///
/// Passed by reference into every workflow and store operation.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique correlation ID for this request chain
    pub correlation_id: String,
    /// Sequence number within this server instance
    pub request_seq: u64,
    /// Start time for latency tracking
    pub started_at: Instant,
    deadline: Option<Instant>,
    signal: Option<CancellationSignal>,
}

impl RequestContext {
    /// Context with a fresh correlation ID, no deadline and no cancellation
    pub fn background() -> Self {
        Self::new("")
    }

    pub fn new(correlation_id: &str) -> Self {
        let request_seq = REQUEST_COUNTER.fetch_add(1, Ordering::SeqCst);

        let correlation_id = if correlation_id.is_empty() {
            format!("req-{}-{}", request_seq, Uuid::new_v4().as_simple())
        } else {
            correlation_id.to_string()
        };

        Self {
            correlation_id,
            request_seq,
            started_at: Instant::now(),
            deadline: None,
            signal: None,
        }
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        let deadline = Instant::now() + timeout;
        self.with_deadline(deadline)
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_signal(mut self, signal: CancellationSignal) -> Self {
        self.signal = Some(signal);
        self
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.started_at.elapsed().as_millis() as u64
    }

    /// Create a log prefix for structured logging
    pub fn log_prefix(&self) -> String {
        let short: String = self.correlation_id.chars().take(12).collect();
        format!("[req={} seq={}]", short, self.request_seq)
    }

    /// Non-blocking check, for use between steps
    pub fn check(&self) -> Result<(), Cancelled> {
        if self.signal.as_ref().is_some_and(|s| s.is_cancelled()) {
            return Err(Cancelled::Signalled);
        }

        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            return Err(Cancelled::DeadlineExceeded {
                elapsed_ms: self.elapsed_ms(),
            });
        }

        Ok(())
    }

    /// Drive `fut` to completion unless the context is cancelled or its
    /// deadline passes first, in which case `fut` is dropped.
    pub async fn run<F: Future>(&self, fut: F) -> Result<F::Output, Cancelled> {
        self.check()?;

        let mut signal = self.signal.clone();
        let cancelled = async move {
            match signal.as_mut() {
                Some(signal) => signal.cancelled().await,
                None => std::future::pending::<()>().await,
            }
        };

        let deadline = self.deadline;
        let expired = async move {
            match deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            output = fut => Ok(output),
            _ = cancelled => Err(Cancelled::Signalled),
            _ = expired => Err(Cancelled::DeadlineExceeded {
                elapsed_ms: self.elapsed_ms(),
            }),
        }
    }
}
