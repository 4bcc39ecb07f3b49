//! # skiff-common
//!
//! Shared infrastructure for the skiff client runtime: environment-driven
//! configuration, tracing subscriber setup, and the unified error type.

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::{AppSettings, CacheConfig, CommandConfig, ConfigError, Environment, RuntimeConfig};
pub use error::ClientError;
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig, TracingError};
