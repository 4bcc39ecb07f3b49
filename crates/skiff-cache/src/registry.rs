//! Handler registry
//!
//! Associates every payload type with its handler at composition time.
//! [`apply_event`] is the gateway path: an exhaustive match from event
//! variant to handler function, so a payload without a handler is a compile
//! error rather than a runtime lookup miss. [`Registry`] carries the same
//! handlers (plus sequence and no-op variants) as values for REST call
//! sites that pass their handler explicitly.

use skiff_model::payloads::{
    GuildEmojisUpdate, GuildMemberAdd, GuildRole, MessageDelete, RawChannel, RawGuild, RawMessage,
    RawUser,
};
use skiff_model::GatewayEvent;

use crate::builder::SnapshotBuilder;
use crate::handlers::{self, Handler};

/// Fold one decoded gateway event into the builder
pub fn apply_event(builder: &mut SnapshotBuilder, event: GatewayEvent) {
    match event {
        GatewayEvent::Ready(p) => handlers::ready(builder, p),
        GatewayEvent::GuildCreate(p) => handlers::guild_create(builder, p),
        GatewayEvent::GuildUpdate(p) => handlers::guild_update(builder, p),
        GatewayEvent::GuildDelete(p) => handlers::guild_delete(builder, p),
        GatewayEvent::ChannelCreate(p) | GatewayEvent::ChannelUpdate(p) => {
            handlers::channel_create(builder, p);
        }
        GatewayEvent::ChannelDelete(p) => handlers::channel_delete(builder, p),
        GatewayEvent::GuildMemberAdd(p) => handlers::member_add(builder, p),
        GatewayEvent::GuildMemberUpdate(p) => handlers::member_update(builder, p),
        GatewayEvent::GuildMemberRemove(p) => handlers::member_remove(builder, p),
        GatewayEvent::GuildRoleCreate(p) | GatewayEvent::GuildRoleUpdate(p) => {
            handlers::role_create(builder, p);
        }
        GatewayEvent::GuildRoleDelete(p) => handlers::role_delete(builder, p),
        GatewayEvent::GuildEmojisUpdate(p) => handlers::emojis_update(builder, p),
        GatewayEvent::MessageCreate(p) => handlers::message_create(builder, p),
        GatewayEvent::MessageUpdate(p) => handlers::message_update(builder, p),
        GatewayEvent::MessageDelete(p) => handlers::message_delete(builder, p),
        GatewayEvent::MessageDeleteBulk(p) => handlers::message_delete_bulk(builder, p),
        GatewayEvent::UserUpdate(p) => handlers::user_update(builder, p),
        // Cache-irrelevant events mutate nothing
        GatewayEvent::PresenceUpdate(_) | GatewayEvent::TypingStart(_) => {}
    }
}

/// Handlers as values, assembled once at startup
///
/// REST responses reuse the gateway handlers: fetching a guild applies the
/// same fold as GUILD_CREATE. Sequence handlers cover bulk endpoints, where
/// later elements win over earlier ones on conflicting ids.
pub struct Registry {
    pub guild: Handler<RawGuild>,
    pub channel: Handler<RawChannel>,
    pub channels: Handler<Vec<RawChannel>>,
    pub user: Handler<RawUser>,
    pub member: Handler<GuildMemberAdd>,
    pub members: Handler<Vec<GuildMemberAdd>>,
    pub role: Handler<GuildRole>,
    /// Bulk role updates (e.g. position reorders) in response order
    pub roles: Handler<Vec<GuildRole>>,
    pub emojis: Handler<GuildEmojisUpdate>,
    pub message: Handler<RawMessage>,
    pub messages: Handler<Vec<RawMessage>>,
    pub message_delete: Handler<MessageDelete>,
    /// Responses with nothing cache-worthy (voice regions, audit logs)
    pub voice_regions: Handler<Vec<serde_json::Value>>,
    pub audit_log: Handler<serde_json::Value>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            guild: Handler::new("guild", handlers::guild_create),
            channel: Handler::new("channel", handlers::channel_create),
            channels: Handler::new("channel", handlers::channel_create).for_each(),
            user: Handler::new("user", handlers::user_update),
            member: Handler::new("member", handlers::member_add),
            members: Handler::new("member", handlers::member_add).for_each(),
            role: Handler::new("role", handlers::role_create),
            roles: Handler::new("role", handlers::role_create).for_each(),
            emojis: Handler::new("emojis", handlers::emojis_update),
            message: Handler::new("message", handlers::message_create),
            messages: Handler::new("message", handlers::message_create).for_each(),
            message_delete: Handler::new("message_delete", handlers::message_delete),
            voice_regions: Handler::noop("voice_regions"),
            audit_log: Handler::noop("audit_log"),
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
