use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Marks that a controller has a write in flight.
///
/// Clones share the same flag, so a UI thread can hold one to grey out
/// buttons while the controller awaits the gateway.
#[derive(Clone, Debug, Default)]
pub struct PendingFlag {
    inner: Arc<AtomicBool>,
}

impl PendingFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.inner.load(Ordering::Acquire)
    }

    /// Claim the flag, or `None` when a write is already outstanding.
    pub fn try_begin(&self) -> Option<InFlight> {
        self.inner
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight {
                flag: self.inner.clone(),
            })
    }
}

// Clears the flag on drop, including when the submitting future is dropped
#[derive(Debug)]
pub struct InFlight {
    flag: Arc<AtomicBool>,
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
