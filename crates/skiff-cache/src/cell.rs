//! The current-snapshot slot
//!
//! The one piece of truly shared mutable state in the runtime: a reference
//! to the latest published snapshot. It is replaced, never mutated, so
//! readers load it without locking and keep whatever snapshot they already
//! hold across later publishes.

use std::sync::Arc;

use arc_swap::ArcSwap;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use crate::snapshot::Snapshot;

/// Process-wide current-snapshot reference
#[derive(Debug)]
pub struct SnapshotCell {
    current: ArcSwap<Snapshot>,
    publisher: watch::Sender<Arc<Snapshot>>,
}

impl SnapshotCell {
    /// Create a cell starting from the given snapshot
    #[must_use]
    pub fn new(initial: Snapshot) -> Self {
        let initial = Arc::new(initial);
        let (publisher, _) = watch::channel(Arc::clone(&initial));
        Self {
            current: ArcSwap::new(initial),
            publisher,
        }
    }

    /// The latest published snapshot; never blocks
    #[must_use]
    pub fn current(&self) -> Arc<Snapshot> {
        self.current.load_full()
    }

    /// Atomically swap in a new snapshot and notify subscribers
    ///
    /// Only the dispatcher's single-writer path calls this; readers holding
    /// the old snapshot are unaffected.
    pub(crate) fn publish(&self, snapshot: Arc<Snapshot>) {
        self.current.store(Arc::clone(&snapshot));
        // No receivers is fine; the watch just holds the latest value
        let _ = self.publisher.send(snapshot);
    }

    /// Subscribe to published snapshots (one per completed dispatch)
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<Snapshot>> {
        self.publisher.subscribe()
    }

    /// Published snapshots as a [`tokio_stream::Stream`]
    #[must_use]
    pub fn snapshots(&self) -> WatchStream<Arc<Snapshot>> {
        WatchStream::new(self.subscribe())
    }
}

impl Default for SnapshotCell {
    fn default() -> Self {
        Self::new(Snapshot::empty())
    }
}
