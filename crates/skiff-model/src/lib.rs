//! # skiff-model
//!
//! Model layer for the skiff client runtime: cache-resident entities, value
//! objects, raw wire payloads, the gateway event enum, and the tri-state
//! `Possible` field wrapper. This crate has zero dependencies on the cache or
//! transport layers.

pub mod entities;
pub mod error;
pub mod events;
pub mod payloads;
pub mod possible;
pub mod request;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Channel, ChannelType, Emoji, Guild, Member, Message, Role, User,
};
pub use error::DecodeError;
pub use events::{GatewayEvent, GatewayEventKind};
pub use possible::Possible;
pub use request::{remove_undefined, ModifyChannel, ModifyGuild, PatchBody};
pub use value_objects::{Permissions, Snowflake, SnowflakeParseError};
