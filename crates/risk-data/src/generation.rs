//! Request generation tracking for latest-batch-wins semantics.
//!
//! A view that refetches on every parameter change can have several
//! batches in flight at once. Each batch is stamped with a generation
//! at start; when it resolves, the stamp is compared against the
//! counter's current value. Only the newest batch is still current, so
//! stale results are discarded explicitly instead of racing on writes.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Monotonic generation counter for one refetchable view.
///
/// Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct QueryGeneration {
    counter: Arc<AtomicU64>,
}

impl QueryGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, making every earlier stamp stale.
    pub fn begin(&self) -> Generation {
        let id = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        Generation {
            id,
            counter: Arc::clone(&self.counter),
        }
    }

    /// Invalidate all outstanding stamps without starting a batch.
    /// Used when the portfolio itself changes under in-flight requests.
    pub fn invalidate(&self) {
        self.counter.fetch_add(1, Ordering::SeqCst);
    }

    /// The id the next `begin` will supersede.
    pub fn current(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }
}

/// Stamp for one batch, handed out by [`QueryGeneration::begin`].
#[derive(Debug, Clone)]
pub struct Generation {
    id: u64,
    counter: Arc<AtomicU64>,
}

impl Generation {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Whether this stamp is still the newest one issued.
    pub fn is_current(&self) -> bool {
        self.counter.load(Ordering::SeqCst) == self.id
    }
}
