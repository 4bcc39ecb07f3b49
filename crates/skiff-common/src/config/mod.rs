//! Configuration loading

mod runtime_config;

pub use runtime_config::{
    AppSettings, CacheConfig, CommandConfig, ConfigError, Environment, RuntimeConfig,
};
