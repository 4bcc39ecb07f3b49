//! Client-wide error type
//!
//! Nothing in the cache-update path is fatal; these errors surface at the
//! runtime's edges (startup, transport, subscription handles).

use skiff_model::DecodeError;

use crate::config::ConfigError;
use crate::telemetry::TracingError;

/// Runtime-wide error type
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A wire payload failed to decode (logged and dropped per message)
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Telemetry could not be initialized
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TracingError),

    /// The gateway transport reported a failure
    #[error("gateway error: {0}")]
    Gateway(String),
}
