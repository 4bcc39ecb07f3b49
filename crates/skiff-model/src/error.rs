//! Model-layer errors

use thiserror::Error;

/// Failure to decode a wire payload into its typed shape
///
/// A decode failure never yields a partial entity; the payload is rejected
/// whole, upstream of the handler registry.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The event name is not one the client recognizes
    #[error("unknown gateway event: {0}")]
    UnknownEvent(String),

    /// The payload body did not match the event's schema
    ///
    /// The inner error carries the offending field position.
    #[error("malformed {event} payload: {source}")]
    Malformed {
        event: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl DecodeError {
    pub(crate) fn malformed(event: &'static str, source: serde_json::Error) -> Self {
        Self::Malformed { event, source }
    }
}
