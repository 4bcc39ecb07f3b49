//! Dispatch pipeline
//!
//! One update transaction per inbound payload: acquire a builder from the
//! current snapshot, fold the payload through its handler, freeze, publish.
//! The write path is serialized by a mutex so at most one builder is live
//! at a time; readers of the cell never block.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;

use skiff_model::GatewayEvent;

use crate::cell::SnapshotCell;
use crate::registry;
use crate::snapshot::Snapshot;

/// The single-writer update path over a [`SnapshotCell`]
#[derive(Debug)]
pub struct Dispatcher {
    cell: Arc<SnapshotCell>,
    write: Mutex<()>,
}

impl Dispatcher {
    #[must_use]
    pub fn new(cell: Arc<SnapshotCell>) -> Self {
        Self {
            cell,
            write: Mutex::new(()),
        }
    }

    /// The cell this dispatcher publishes to
    #[must_use]
    pub fn cell(&self) -> &Arc<SnapshotCell> {
        &self.cell
    }

    /// Apply one event and publish the resulting snapshot
    ///
    /// Never fails: a no-op handler still publishes (state possibly
    /// unchanged). Returns the snapshot that became current.
    pub fn apply(&self, event: GatewayEvent) -> Arc<Snapshot> {
        let kind = event.kind();
        // Serializes builders: the next transaction waits for this freeze
        let _write = self.write.lock();

        let mut builder = self.cell.current().to_builder();
        registry::apply_event(&mut builder, event);
        let snapshot = Arc::new(builder.freeze());
        self.cell.publish(Arc::clone(&snapshot));

        tracing::debug!(event = %kind, guilds = snapshot.guild_count(), "snapshot published");
        snapshot
    }

    /// Queue-fed sequential processor
    ///
    /// Applies payloads strictly in arrival order; the bounded channel is
    /// the backpressure that stops builder fan-out when payloads arrive
    /// faster than they fold.
    pub async fn run(&self, mut events: mpsc::Receiver<GatewayEvent>) {
        while let Some(event) = events.recv().await {
            self.apply(event);
        }
        tracing::debug!("event queue closed; dispatcher stopping");
    }
}
