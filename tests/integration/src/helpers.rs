//! Test helpers for integration tests
//!
//! A small harness around the cache engine: decode raw frame bodies,
//! push them through a real dispatcher, and read the published
//! snapshots back.

use std::sync::Arc;

use anyhow::{Context, Result};
use serde_json::Value;

use skiff_cache::{Dispatcher, Snapshot, SnapshotCell};
use skiff_model::{GatewayEvent, Message, Snowflake};

/// A dispatcher wired to a fresh cell, the way the runtime assembles one
pub struct TestEngine {
    pub cell: Arc<SnapshotCell>,
    pub dispatcher: Arc<Dispatcher>,
}

impl TestEngine {
    /// Start from an empty snapshot
    pub fn new() -> Self {
        let cell = Arc::new(SnapshotCell::default());
        let dispatcher = Arc::new(Dispatcher::new(Arc::clone(&cell)));
        Self { cell, dispatcher }
    }

    /// Decode a raw frame and apply it, returning the published snapshot
    pub fn apply_frame(&self, event: &str, body: Value) -> Result<Arc<Snapshot>> {
        let event = GatewayEvent::decode(event, body)
            .with_context(|| format!("decoding {event} fixture"))?;
        Ok(self.dispatcher.apply(event))
    }

    /// Apply a sequence of raw frames in order
    pub fn apply_frames(&self, frames: Vec<(&str, Value)>) -> Result<Arc<Snapshot>> {
        let mut last = self.cell.current();
        for (event, body) in frames {
            last = self.apply_frame(event, body)?;
        }
        Ok(last)
    }

    /// The currently published snapshot
    pub fn current(&self) -> Arc<Snapshot> {
        self.cell.current()
    }

    /// Look up a cached message by numeric id
    pub fn message(&self, id: i64) -> Result<Message> {
        self.current()
            .message(Snowflake::new(id))
            .cloned()
            .context("message not cached")
    }
}

impl Default for TestEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorthand for [`Snowflake::new`] in assertions
pub fn id(raw: i64) -> Snowflake {
    Snowflake::new(raw)
}
