//! Runtime configuration structs
//!
//! Loads configuration from environment variables (with `.env` support).

use serde::Deserialize;
use std::env;

/// Main runtime configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeConfig {
    pub app: AppSettings,
    pub command: CommandConfig,
    pub cache: CacheConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Command pipeline configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CommandConfig {
    /// Prefix that marks a chat message as a command candidate
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Match command names case-insensitively
    #[serde(default = "default_true")]
    pub case_insensitive: bool,
}

/// Cache configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Capacity hint for the event queue feeding the dispatcher
    #[serde(default = "default_event_queue")]
    pub event_queue: usize,
    /// Per-channel message retention hint for embedders; the engine itself
    /// never evicts
    #[serde(default)]
    pub message_limit: Option<usize>,
}

// Default value functions
fn default_app_name() -> String {
    "skiff".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_prefix() -> String {
    "!".to_string()
}

fn default_true() -> bool {
    true
}

fn default_event_queue() -> usize {
    256
}

/// Error loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {var}: {value}")]
    InvalidValue { var: &'static str, value: String },
}

impl RuntimeConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a set variable carries an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: match env::var("APP_ENV") {
                    Ok(s) => match s.to_lowercase().as_str() {
                        "production" => Environment::Production,
                        "staging" => Environment::Staging,
                        "development" => Environment::Development,
                        _ => {
                            return Err(ConfigError::InvalidValue {
                                var: "APP_ENV",
                                value: s,
                            })
                        }
                    },
                    Err(_) => Environment::default(),
                },
            },
            command: CommandConfig {
                prefix: env::var("COMMAND_PREFIX").unwrap_or_else(|_| default_prefix()),
                case_insensitive: env::var("COMMAND_CASE_INSENSITIVE")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(true),
            },
            cache: CacheConfig {
                event_queue: match env::var("CACHE_EVENT_QUEUE") {
                    Ok(s) => s.parse().map_err(|_| ConfigError::InvalidValue {
                        var: "CACHE_EVENT_QUEUE",
                        value: s,
                    })?,
                    Err(_) => default_event_queue(),
                },
                message_limit: match env::var("CACHE_MESSAGE_LIMIT") {
                    Ok(s) => Some(s.parse().map_err(|_| ConfigError::InvalidValue {
                        var: "CACHE_MESSAGE_LIMIT",
                        value: s,
                    })?),
                    Err(_) => None,
                },
            },
        })
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            app: AppSettings {
                name: default_app_name(),
                env: Environment::default(),
            },
            command: CommandConfig {
                prefix: default_prefix(),
                case_insensitive: true,
            },
            cache: CacheConfig {
                event_queue: default_event_queue(),
                message_limit: None,
            },
        }
    }
}
