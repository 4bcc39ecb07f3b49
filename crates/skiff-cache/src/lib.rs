//! # skiff-cache
//!
//! The cache synchronization engine. Inbound gateway payloads are folded
//! into an immutable [`Snapshot`] through a short-lived [`SnapshotBuilder`],
//! then published atomically so any number of readers can traverse the
//! latest state without synchronization.
//!
//! Writers are serialized: at most one builder is live at a time, owned by
//! the [`Dispatcher`]. Readers never block and never observe a torn state.

pub mod builder;
pub mod cell;
pub mod dispatch;
pub mod handlers;
pub mod registry;
pub mod snapshot;
pub mod source;

pub use builder::SnapshotBuilder;
pub use cell::SnapshotCell;
pub use dispatch::Dispatcher;
pub use handlers::Handler;
pub use registry::{apply_event, Registry};
pub use snapshot::Snapshot;
pub use source::{pump, EventSource};
