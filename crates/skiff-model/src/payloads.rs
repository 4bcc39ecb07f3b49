//! Raw wire payloads
//!
//! The as-decoded shapes of entities and gateway event bodies. A raw entity
//! may omit fields the resolved model carries (a member payload nested in
//! GUILD_CREATE has no guild id; the caller supplies it). Resolving raw
//! shapes into cache entities is the handlers' job, not the decoder's.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::possible::Possible;
use crate::value_objects::{Permissions, Snowflake};

// === Raw entities ===

/// User data as it appears in payloads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawUser {
    pub id: Snowflake,
    pub username: String,
    pub discriminator: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bot: bool,
}

/// Channel data as it appears in payloads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawChannel {
    pub id: Snowflake,
    #[serde(rename = "type", default)]
    pub kind: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default)]
    pub position: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_message_id: Option<Snowflake>,
}

/// Role data as it appears in payloads
///
/// Roles arrive without a guild id; the owning guild is supplied by the
/// surrounding event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRole {
    pub id: Snowflake,
    pub name: String,
    #[serde(default)]
    pub color: u32,
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub permissions: Permissions,
    #[serde(default)]
    pub mentionable: bool,
}

/// Member data as it appears in payloads
///
/// Lacks the guild id; the caller supplies it separately.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMember {
    pub user: RawUser,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nick: Option<String>,
    #[serde(default)]
    pub roles: Vec<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<DateTime<Utc>>,
}

/// Custom emoji data as it appears in payloads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEmoji {
    pub id: Snowflake,
    pub name: String,
    #[serde(default)]
    pub animated: bool,
    #[serde(default = "default_true")]
    pub available: bool,
}

/// Message data as it appears in MESSAGE_CREATE
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMessage {
    pub id: Snowflake,
    pub channel_id: Snowflake,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    pub author: RawUser,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub pinned: bool,
}

/// Guild data as it appears in GUILD_CREATE
///
/// Nested child lists are dispatched through the element handlers with the
/// guild id injected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawGuild {
    pub id: Snowflake,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub owner_id: Snowflake,
    #[serde(default)]
    pub channels: Vec<RawChannel>,
    #[serde(default)]
    pub roles: Vec<RawRole>,
    #[serde(default)]
    pub members: Vec<RawMember>,
    #[serde(default)]
    pub emojis: Vec<RawEmoji>,
    #[serde(default)]
    pub member_count: i32,
}

fn default_true() -> bool {
    true
}

// === Connection events ===

/// Guild stub listed in READY before the full GUILD_CREATE arrives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnavailableGuild {
    pub id: Snowflake,
    #[serde(default)]
    pub unavailable: bool,
}

/// READY event payload
///
/// Sent once after identify; carries the self identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ready {
    /// Gateway protocol version
    pub v: i32,
    /// The bot's own user
    pub user: RawUser,
    /// Session ID for resuming
    pub session_id: String,
    /// Guilds the user is in (initially unavailable)
    #[serde(default)]
    pub guilds: Vec<UnavailableGuild>,
}

// === Guild events ===

/// GUILD_UPDATE event payload (partial guild, no nested lists)
///
/// `icon` and `description` are nullable on the wire, so they keep the
/// null-versus-absent distinction the way MESSAGE_UPDATE fields do.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuildUpdate {
    pub id: Snowflake,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Possible::is_undefined")]
    pub icon: Possible<String>,
    #[serde(default, skip_serializing_if = "Possible::is_undefined")]
    pub description: Possible<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<Snowflake>,
}

/// GUILD_DELETE event payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuildDelete {
    pub id: Snowflake,
    /// If true, this is a temporary outage; if false, the user left or the
    /// guild was deleted
    #[serde(default)]
    pub unavailable: bool,
}

// === Member events ===

/// GUILD_MEMBER_ADD event payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuildMemberAdd {
    pub guild_id: Snowflake,
    #[serde(flatten)]
    pub member: RawMember,
}

/// GUILD_MEMBER_UPDATE event payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuildMemberUpdate {
    pub guild_id: Snowflake,
    pub user: RawUser,
    #[serde(default, skip_serializing_if = "Possible::is_undefined")]
    pub nick: Possible<String>,
    #[serde(default)]
    pub roles: Vec<Snowflake>,
}

/// GUILD_MEMBER_REMOVE event payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuildMemberRemove {
    pub guild_id: Snowflake,
    pub user: RawUser,
}

// === Role events ===

/// GUILD_ROLE_CREATE / GUILD_ROLE_UPDATE event payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuildRole {
    pub guild_id: Snowflake,
    pub role: RawRole,
}

/// GUILD_ROLE_DELETE event payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuildRoleDelete {
    pub guild_id: Snowflake,
    pub role_id: Snowflake,
}

// === Emoji events ===

/// GUILD_EMOJIS_UPDATE event payload (full replacement of the guild's set)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuildEmojisUpdate {
    pub guild_id: Snowflake,
    #[serde(default)]
    pub emojis: Vec<RawEmoji>,
}

// === Message events ===

/// MESSAGE_UPDATE event payload
///
/// Partial: only the edited fields arrive, and an explicit null means
/// "cleared" rather than "unchanged".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageUpdate {
    pub id: Snowflake,
    pub channel_id: Snowflake,
    #[serde(default, skip_serializing_if = "Possible::is_undefined")]
    pub content: Possible<String>,
    #[serde(default, skip_serializing_if = "Possible::is_undefined")]
    pub edited_timestamp: Possible<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Possible::is_undefined")]
    pub pinned: Possible<bool>,
}

/// MESSAGE_DELETE event payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDelete {
    pub id: Snowflake,
    pub channel_id: Snowflake,
}

/// MESSAGE_DELETE_BULK event payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDeleteBulk {
    pub ids: Vec<Snowflake>,
    pub channel_id: Snowflake,
}

// === Cache-irrelevant events ===

/// PRESENCE_UPDATE event payload (not cached; handled by the no-op handler)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresenceUpdate {
    pub user_id: Snowflake,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    pub status: String,
}

/// TYPING_START event payload (not cached; handled by the no-op handler)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypingStart {
    pub channel_id: Snowflake,
    pub user_id: Snowflake,
    pub timestamp: i64,
}
