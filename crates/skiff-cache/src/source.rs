//! Event source boundary
//!
//! The seam between the (out of scope) gateway transport and the cache
//! engine: the transport yields decoded events or per-message decode
//! failures; [`pump`] drops failures after logging them and feeds the rest
//! to the dispatcher. Dropped messages never reach the handler registry.

use async_trait::async_trait;

use skiff_model::{DecodeError, GatewayEvent};

use crate::dispatch::Dispatcher;

/// An ordered stream of decoded gateway events
#[async_trait]
pub trait EventSource: Send {
    /// The next event, a per-message decode failure, or `None` at end of
    /// stream. Delivery reliability and reconnects are the transport's job.
    async fn next_event(&mut self) -> Option<Result<GatewayEvent, DecodeError>>;
}

/// Drive a dispatcher from an event source until the source ends
pub async fn pump<S: EventSource>(mut source: S, dispatcher: &Dispatcher) {
    loop {
        match source.next_event().await {
            Some(Ok(event)) => {
                dispatcher.apply(event);
            }
            Some(Err(error)) => {
                // Malformed payloads cost one message, never the stream
                tracing::warn!(%error, "dropping undecodable payload");
            }
            None => break,
        }
    }
    tracing::debug!("event source ended");
}

#[async_trait]
impl EventSource for tokio::sync::mpsc::Receiver<Result<GatewayEvent, DecodeError>> {
    async fn next_event(&mut self) -> Option<Result<GatewayEvent, DecodeError>> {
        self.recv().await
    }
}
