//! Cache-resident entities
//!
//! Resolved domain objects as stored in a snapshot. Entities reference each
//! other by `Snowflake` only, never by owning pointer, so partial arrival
//! and cyclic relationships (guild <-> member <-> user) never create
//! ownership cycles.

mod channel;
mod emoji;
mod guild;
mod member;
mod message;
mod role;
mod user;

pub use channel::{Channel, ChannelType};
pub use emoji::Emoji;
pub use guild::Guild;
pub use member::Member;
pub use message::Message;
pub use role::Role;
pub use user::User;
