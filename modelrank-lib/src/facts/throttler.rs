use core::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

const LOG_TARGET: &str = " throttler";

/// Bounds how many metric tasks run at once, and gates the admission of new work.
///
/// Every metric task of a batch calls [`Throttler::acquire`] before touching the network.
/// [`Throttler::close`] marks the batch as shutting down: the orchestrator stops admitting
/// artifacts while those already admitted finish normally.
#[derive(Debug)]
pub struct Throttler {
    semaphore: Arc<Semaphore>,
    closed: AtomicBool,
}

impl Throttler {
    /// Create a throttler allowing at most `max_concurrent` permits at a time.
    #[must_use]
    pub fn new(max_concurrent: usize) -> Arc<Self> {
        Arc::new(Self {
            semaphore: Arc::new(Semaphore::new(max_concurrent.max(1))),
            closed: AtomicBool::new(false),
        })
    }

    /// Take a permit. Hold it for as long as the work runs.
    pub async fn acquire(&self) -> OwnedSemaphorePermit {
        Arc::clone(&self.semaphore)
            .acquire_owned()
            .await
            .expect("semaphore is never closed")
    }

    /// Stop admitting new work. Idempotent.
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            log::warn!(target: LOG_TARGET, "Shutdown requested, no further models will be admitted");
        }
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}
