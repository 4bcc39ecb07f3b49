//! Gateway events
//!
//! The typed event enum the dispatch pipeline consumes, plus the decode
//! entry point that turns a dispatch frame's name and JSON body into it.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::DecodeError;
use crate::payloads::{
    GuildDelete, GuildEmojisUpdate, GuildMemberAdd, GuildMemberRemove, GuildMemberUpdate,
    GuildRole, GuildRoleDelete, GuildUpdate, MessageDelete, MessageDeleteBulk, MessageUpdate,
    PresenceUpdate, RawChannel, RawGuild, RawMessage, RawUser, Ready, TypingStart,
};

/// Gateway event names, as carried in a dispatch frame's `t` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GatewayEventKind {
    Ready,
    GuildCreate,
    GuildUpdate,
    GuildDelete,
    ChannelCreate,
    ChannelUpdate,
    ChannelDelete,
    GuildMemberAdd,
    GuildMemberUpdate,
    GuildMemberRemove,
    GuildRoleCreate,
    GuildRoleUpdate,
    GuildRoleDelete,
    GuildEmojisUpdate,
    MessageCreate,
    MessageUpdate,
    MessageDelete,
    MessageDeleteBulk,
    UserUpdate,
    PresenceUpdate,
    TypingStart,
}

impl GatewayEventKind {
    /// Get the wire name of the event
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "READY",
            Self::GuildCreate => "GUILD_CREATE",
            Self::GuildUpdate => "GUILD_UPDATE",
            Self::GuildDelete => "GUILD_DELETE",
            Self::ChannelCreate => "CHANNEL_CREATE",
            Self::ChannelUpdate => "CHANNEL_UPDATE",
            Self::ChannelDelete => "CHANNEL_DELETE",
            Self::GuildMemberAdd => "GUILD_MEMBER_ADD",
            Self::GuildMemberUpdate => "GUILD_MEMBER_UPDATE",
            Self::GuildMemberRemove => "GUILD_MEMBER_REMOVE",
            Self::GuildRoleCreate => "GUILD_ROLE_CREATE",
            Self::GuildRoleUpdate => "GUILD_ROLE_UPDATE",
            Self::GuildRoleDelete => "GUILD_ROLE_DELETE",
            Self::GuildEmojisUpdate => "GUILD_EMOJIS_UPDATE",
            Self::MessageCreate => "MESSAGE_CREATE",
            Self::MessageUpdate => "MESSAGE_UPDATE",
            Self::MessageDelete => "MESSAGE_DELETE",
            Self::MessageDeleteBulk => "MESSAGE_DELETE_BULK",
            Self::UserUpdate => "USER_UPDATE",
            Self::PresenceUpdate => "PRESENCE_UPDATE",
            Self::TypingStart => "TYPING_START",
        }
    }

    /// Parse an event kind from its wire name
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "READY" => Some(Self::Ready),
            "GUILD_CREATE" => Some(Self::GuildCreate),
            "GUILD_UPDATE" => Some(Self::GuildUpdate),
            "GUILD_DELETE" => Some(Self::GuildDelete),
            "CHANNEL_CREATE" => Some(Self::ChannelCreate),
            "CHANNEL_UPDATE" => Some(Self::ChannelUpdate),
            "CHANNEL_DELETE" => Some(Self::ChannelDelete),
            "GUILD_MEMBER_ADD" => Some(Self::GuildMemberAdd),
            "GUILD_MEMBER_UPDATE" => Some(Self::GuildMemberUpdate),
            "GUILD_MEMBER_REMOVE" => Some(Self::GuildMemberRemove),
            "GUILD_ROLE_CREATE" => Some(Self::GuildRoleCreate),
            "GUILD_ROLE_UPDATE" => Some(Self::GuildRoleUpdate),
            "GUILD_ROLE_DELETE" => Some(Self::GuildRoleDelete),
            "GUILD_EMOJIS_UPDATE" => Some(Self::GuildEmojisUpdate),
            "MESSAGE_CREATE" => Some(Self::MessageCreate),
            "MESSAGE_UPDATE" => Some(Self::MessageUpdate),
            "MESSAGE_DELETE" => Some(Self::MessageDelete),
            "MESSAGE_DELETE_BULK" => Some(Self::MessageDeleteBulk),
            "USER_UPDATE" => Some(Self::UserUpdate),
            "PRESENCE_UPDATE" => Some(Self::PresenceUpdate),
            "TYPING_START" => Some(Self::TypingStart),
            _ => None,
        }
    }
}

impl fmt::Display for GatewayEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded gateway event with its typed payload
#[derive(Debug, Clone)]
pub enum GatewayEvent {
    Ready(Ready),
    GuildCreate(RawGuild),
    GuildUpdate(GuildUpdate),
    GuildDelete(GuildDelete),
    ChannelCreate(RawChannel),
    ChannelUpdate(RawChannel),
    ChannelDelete(RawChannel),
    GuildMemberAdd(GuildMemberAdd),
    GuildMemberUpdate(GuildMemberUpdate),
    GuildMemberRemove(GuildMemberRemove),
    GuildRoleCreate(GuildRole),
    GuildRoleUpdate(GuildRole),
    GuildRoleDelete(GuildRoleDelete),
    GuildEmojisUpdate(GuildEmojisUpdate),
    MessageCreate(RawMessage),
    MessageUpdate(MessageUpdate),
    MessageDelete(MessageDelete),
    MessageDeleteBulk(MessageDeleteBulk),
    UserUpdate(RawUser),
    PresenceUpdate(PresenceUpdate),
    TypingStart(TypingStart),
}

impl GatewayEvent {
    /// Decode a dispatch frame's body into a typed event
    ///
    /// Fails whole: a payload that does not match its schema never produces
    /// a partial entity.
    pub fn decode(event: &str, data: Value) -> Result<Self, DecodeError> {
        let kind = GatewayEventKind::parse(event)
            .ok_or_else(|| DecodeError::UnknownEvent(event.to_string()))?;
        Self::decode_kind(kind, data)
    }

    /// Decode a body for an already-identified event kind
    pub fn decode_kind(kind: GatewayEventKind, data: Value) -> Result<Self, DecodeError> {
        fn body<T: serde::de::DeserializeOwned>(
            event: &'static str,
            data: Value,
        ) -> Result<T, DecodeError> {
            serde_json::from_value(data).map_err(|e| DecodeError::malformed(event, e))
        }

        let name = kind.as_str();
        Ok(match kind {
            GatewayEventKind::Ready => Self::Ready(body(name, data)?),
            GatewayEventKind::GuildCreate => Self::GuildCreate(body(name, data)?),
            GatewayEventKind::GuildUpdate => Self::GuildUpdate(body(name, data)?),
            GatewayEventKind::GuildDelete => Self::GuildDelete(body(name, data)?),
            GatewayEventKind::ChannelCreate => Self::ChannelCreate(body(name, data)?),
            GatewayEventKind::ChannelUpdate => Self::ChannelUpdate(body(name, data)?),
            GatewayEventKind::ChannelDelete => Self::ChannelDelete(body(name, data)?),
            GatewayEventKind::GuildMemberAdd => Self::GuildMemberAdd(body(name, data)?),
            GatewayEventKind::GuildMemberUpdate => Self::GuildMemberUpdate(body(name, data)?),
            GatewayEventKind::GuildMemberRemove => Self::GuildMemberRemove(body(name, data)?),
            GatewayEventKind::GuildRoleCreate => Self::GuildRoleCreate(body(name, data)?),
            GatewayEventKind::GuildRoleUpdate => Self::GuildRoleUpdate(body(name, data)?),
            GatewayEventKind::GuildRoleDelete => Self::GuildRoleDelete(body(name, data)?),
            GatewayEventKind::GuildEmojisUpdate => Self::GuildEmojisUpdate(body(name, data)?),
            GatewayEventKind::MessageCreate => Self::MessageCreate(body(name, data)?),
            GatewayEventKind::MessageUpdate => Self::MessageUpdate(body(name, data)?),
            GatewayEventKind::MessageDelete => Self::MessageDelete(body(name, data)?),
            GatewayEventKind::MessageDeleteBulk => Self::MessageDeleteBulk(body(name, data)?),
            GatewayEventKind::UserUpdate => Self::UserUpdate(body(name, data)?),
            GatewayEventKind::PresenceUpdate => Self::PresenceUpdate(body(name, data)?),
            GatewayEventKind::TypingStart => Self::TypingStart(body(name, data)?),
        })
    }

    /// Get the kind of this event
    #[must_use]
    pub const fn kind(&self) -> GatewayEventKind {
        match self {
            Self::Ready(_) => GatewayEventKind::Ready,
            Self::GuildCreate(_) => GatewayEventKind::GuildCreate,
            Self::GuildUpdate(_) => GatewayEventKind::GuildUpdate,
            Self::GuildDelete(_) => GatewayEventKind::GuildDelete,
            Self::ChannelCreate(_) => GatewayEventKind::ChannelCreate,
            Self::ChannelUpdate(_) => GatewayEventKind::ChannelUpdate,
            Self::ChannelDelete(_) => GatewayEventKind::ChannelDelete,
            Self::GuildMemberAdd(_) => GatewayEventKind::GuildMemberAdd,
            Self::GuildMemberUpdate(_) => GatewayEventKind::GuildMemberUpdate,
            Self::GuildMemberRemove(_) => GatewayEventKind::GuildMemberRemove,
            Self::GuildRoleCreate(_) => GatewayEventKind::GuildRoleCreate,
            Self::GuildRoleUpdate(_) => GatewayEventKind::GuildRoleUpdate,
            Self::GuildRoleDelete(_) => GatewayEventKind::GuildRoleDelete,
            Self::GuildEmojisUpdate(_) => GatewayEventKind::GuildEmojisUpdate,
            Self::MessageCreate(_) => GatewayEventKind::MessageCreate,
            Self::MessageUpdate(_) => GatewayEventKind::MessageUpdate,
            Self::MessageDelete(_) => GatewayEventKind::MessageDelete,
            Self::MessageDeleteBulk(_) => GatewayEventKind::MessageDeleteBulk,
            Self::UserUpdate(_) => GatewayEventKind::UserUpdate,
            Self::PresenceUpdate(_) => GatewayEventKind::PresenceUpdate,
            Self::TypingStart(_) => GatewayEventKind::TypingStart,
        }
    }
}
