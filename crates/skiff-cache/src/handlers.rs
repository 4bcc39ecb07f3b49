//! Payload handlers
//!
//! One update or delete function per raw payload type, each folding its
//! payload into builder mutations. Handlers never fail: a referenced parent
//! that is missing from the cache costs only that cross-link, logged at
//! debug, and the rest of the payload still applies.
//!
//! [`Handler`] wraps these functions behind a uniform interface for call
//! sites that carry a handler as a value (the REST catalogue); the gateway
//! path in [`crate::registry`] calls them statically.

use skiff_model::payloads::{
    GuildDelete, GuildEmojisUpdate, GuildMemberAdd, GuildMemberRemove, GuildMemberUpdate,
    GuildRole, GuildRoleDelete, GuildUpdate, MessageDelete, MessageDeleteBulk, MessageUpdate,
    RawChannel, RawEmoji, RawGuild, RawMember, RawMessage, RawRole, RawUser, Ready,
};
use skiff_model::{Channel, ChannelType, Emoji, Guild, Member, Message, Role, Snowflake, User};

use crate::builder::SnapshotBuilder;

/// A uniform handler over one payload type
///
/// Wraps a pure `(builder, payload)` function with a name for diagnostics.
/// Every REST response type gets an associated handler at composition time,
/// possibly [`Handler::noop`]; there is no runtime handler lookup to miss.
pub struct Handler<T> {
    name: &'static str,
    apply: Box<dyn Fn(&mut SnapshotBuilder, T) + Send + Sync>,
}

impl<T> Handler<T> {
    /// Wrap an update or delete function
    pub fn new(
        name: &'static str,
        apply: impl Fn(&mut SnapshotBuilder, T) + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            apply: Box::new(apply),
        }
    }

    /// A handler that performs no mutation
    ///
    /// For responses that satisfy the uniform interface but carry nothing
    /// cache-worthy (voice-region lists, audit logs).
    #[must_use]
    pub fn noop(name: &'static str) -> Self {
        Self::new(name, |_, _| {})
    }

    /// Apply the handler to one payload
    pub fn run(&self, builder: &mut SnapshotBuilder, payload: T) {
        tracing::trace!(handler = self.name, "applying payload");
        (self.apply)(builder, payload);
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<T: 'static> Handler<T> {
    /// Lift an element handler to a sequence handler
    ///
    /// Elements are applied in sequence order, so later elements win over
    /// earlier ones on conflicting ids (ordered bulk updates rely on this).
    #[must_use]
    pub fn for_each(self) -> Handler<Vec<T>> {
        Handler {
            name: self.name,
            apply: Box::new(move |builder, items| {
                for item in items {
                    (self.apply)(builder, item);
                }
            }),
        }
    }
}

impl<T> std::fmt::Debug for Handler<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handler").field("name", &self.name).finish()
    }
}

// === raw -> resolved conversions ===

fn resolve_user(raw: &RawUser) -> User {
    User {
        id: raw.id,
        username: raw.username.clone(),
        discriminator: raw.discriminator.clone(),
        avatar: raw.avatar.clone(),
        bot: raw.bot,
    }
}

/// Store a user learned from an embedded shape (message author, member)
///
/// Embedded user objects decode `bot` as false and `avatar` as none when the
/// wire shape omits them; a cached record from USER_UPDATE is richer, so
/// those fields are only ever upgraded here, never reset.
fn put_embedded_user(builder: &mut SnapshotBuilder, raw: &RawUser) {
    let mut user = resolve_user(raw);
    if let Some(cached) = builder.user(raw.id) {
        user.bot = user.bot || cached.bot;
        if user.avatar.is_none() {
            user.avatar = cached.avatar.clone();
        }
    }
    builder.put_user(user);
}

fn resolve_channel(raw: &RawChannel) -> Channel {
    Channel {
        id: raw.id,
        kind: ChannelType::from(raw.kind),
        guild_id: raw.guild_id,
        name: raw.name.clone(),
        topic: raw.topic.clone(),
        position: raw.position,
        parent_id: raw.parent_id,
        last_message_id: raw.last_message_id,
    }
}

fn resolve_role(guild_id: Snowflake, raw: &RawRole) -> Role {
    Role {
        id: raw.id,
        guild_id,
        name: raw.name.clone(),
        color: raw.color,
        position: raw.position,
        permissions: raw.permissions,
        mentionable: raw.mentionable,
    }
}

fn resolve_member(guild_id: Snowflake, raw: &RawMember) -> Member {
    Member {
        guild_id,
        user_id: raw.user.id,
        nickname: raw.nick.clone(),
        role_ids: raw.roles.clone(),
        joined_at: raw.joined_at,
    }
}

fn resolve_emoji(guild_id: Snowflake, raw: &RawEmoji) -> Emoji {
    Emoji {
        id: raw.id,
        guild_id,
        name: raw.name.clone(),
        animated: raw.animated,
        available: raw.available,
    }
}

// === connection ===

/// READY: retain the self identity and mark listed guilds unavailable
pub fn ready(builder: &mut SnapshotBuilder, payload: Ready) {
    let user = resolve_user(&payload.user);
    builder.put_user(user.clone());
    builder.set_self_user(user);

    for stub in payload.guilds {
        // A full GUILD_CREATE follows for each; until it arrives the guild
        // is visible as an unavailable placeholder
        match builder.guild_mut(stub.id) {
            Some(guild) => guild.unavailable = stub.unavailable,
            None => builder.put_guild(Guild::unavailable_stub(stub.id)),
        }
    }
    tracing::debug!(session = %payload.session_id, "ready applied");
}

/// USER_UPDATE: refresh a user record (and the self identity if it matches)
pub fn user_update(builder: &mut SnapshotBuilder, payload: RawUser) {
    let user = resolve_user(&payload);
    if builder.self_user().is_some_and(|u| u.id == user.id) {
        builder.set_self_user(user.clone());
    }
    builder.put_user(user);
}

// === guilds ===

/// GUILD_CREATE: insert the guild and dispatch its nested entity lists
pub fn guild_create(builder: &mut SnapshotBuilder, payload: RawGuild) {
    let mut guild = Guild::new(payload.id, payload.name.clone(), payload.owner_id);
    guild.icon = payload.icon.clone();
    guild.description = payload.description.clone();
    guild.member_count = payload.member_count;
    guild.role_ids = payload.roles.iter().map(|r| r.id).collect();
    guild.channel_ids = payload.channels.iter().map(|c| c.id).collect();
    guild.emoji_ids = payload.emojis.iter().map(|e| e.id).collect();
    builder.put_guild(guild);

    // Nested payloads flow through the same element handlers, with the
    // guild id injected where the raw shape lacks it
    for mut channel in payload.channels {
        channel.guild_id.get_or_insert(payload.id);
        channel_create(builder, channel);
    }
    for role in payload.roles {
        role_create(
            builder,
            GuildRole {
                guild_id: payload.id,
                role,
            },
        );
    }
    // Memberships are inserted directly: the count above already came from
    // the payload, so the per-member bump in member_add must not run
    for member in payload.members {
        put_embedded_user(builder, &member.user);
        builder.put_member(resolve_member(payload.id, &member));
    }
    for emoji in payload.emojis {
        builder.put_emoji(resolve_emoji(payload.id, &emoji));
    }
}

/// GUILD_UPDATE: merge changed fields into the cached guild
pub fn guild_update(builder: &mut SnapshotBuilder, payload: GuildUpdate) {
    if let Some(guild) = builder.guild_mut(payload.id) {
        if let Some(name) = payload.name {
            guild.name = name;
        }
        if let Some(owner_id) = payload.owner_id {
            guild.owner_id = owner_id;
        }
        // Undefined leaves the current value alone; an explicit null clears
        guild.icon = payload.icon.fold(|| None, || guild.icon.take(), Some);
        guild.description = payload
            .description
            .fold(|| None, || guild.description.take(), Some);
    } else if let (Some(name), Some(owner_id)) = (payload.name, payload.owner_id) {
        // Update for a guild we never saw created; enough fields to store it
        let mut guild = Guild::new(payload.id, name, owner_id);
        guild.icon = payload.icon.into_option();
        guild.description = payload.description.into_option();
        builder.put_guild(guild);
    } else {
        tracing::debug!(guild = %payload.id, "guild update for uncached guild; skipped");
    }
}

/// GUILD_DELETE: remove (or mark unavailable) the guild entry only
///
/// Channels, roles, and members are left cached; their own delete events
/// clear them. This matches the granularity of the originating event.
pub fn guild_delete(builder: &mut SnapshotBuilder, payload: GuildDelete) {
    if payload.unavailable {
        if let Some(guild) = builder.guild_mut(payload.id) {
            guild.unavailable = true;
        }
    } else if builder.remove_guild(payload.id).is_none() {
        tracing::debug!(guild = %payload.id, "delete for uncached guild");
    }
}

// === channels ===

/// CHANNEL_CREATE / CHANNEL_UPDATE: insert or overwrite the channel
pub fn channel_create(builder: &mut SnapshotBuilder, payload: RawChannel) {
    let channel = resolve_channel(&payload);
    let guild_id = channel.guild_id;
    builder.put_channel(channel);

    // Cross-link into the owning guild; an unknown guild costs only the link
    if let Some(guild_id) = guild_id {
        match builder.guild_mut(guild_id) {
            Some(guild) => guild.add_channel(payload.id),
            None => {
                tracing::debug!(channel = %payload.id, guild = %guild_id,
                    "channel stored; owning guild not cached");
            }
        }
    }
}

/// CHANNEL_DELETE: remove the channel entry and its guild association
pub fn channel_delete(builder: &mut SnapshotBuilder, payload: RawChannel) {
    let removed = builder.remove_channel(payload.id);
    let guild_id = payload.guild_id.or(removed.and_then(|c| c.guild_id));
    if let Some(guild) = guild_id.and_then(|id| builder.guild_mut(id)) {
        guild.remove_channel(payload.id);
    }
}

// === members ===

/// GUILD_MEMBER_ADD: store the membership and its user record
pub fn member_add(builder: &mut SnapshotBuilder, payload: GuildMemberAdd) {
    put_embedded_user(builder, &payload.member.user);
    let member = resolve_member(payload.guild_id, &payload.member);
    let is_new = builder.member(member.guild_id, member.user_id).is_none();
    builder.put_member(member);

    if is_new {
        if let Some(guild) = builder.guild_mut(payload.guild_id) {
            guild.member_count += 1;
        }
    }
}

/// GUILD_MEMBER_UPDATE: merge nickname and role changes
pub fn member_update(builder: &mut SnapshotBuilder, payload: GuildMemberUpdate) {
    put_embedded_user(builder, &payload.user);

    let user_id = payload.user.id;
    if let Some(member) = builder.member_mut(payload.guild_id, user_id) {
        member.set_roles(payload.roles);
        // Undefined leaves the nickname alone; an explicit null clears it
        member.nickname = payload
            .nick
            .fold(|| None, || member.nickname.take(), Some);
    } else {
        // Partial information beats dropping the event
        let mut member = Member::new(payload.guild_id, user_id);
        member.role_ids = payload.roles;
        member.nickname = payload.nick.into_option();
        builder.put_member(member);
    }
}

/// GUILD_MEMBER_REMOVE: drop the membership; the user record stays
pub fn member_remove(builder: &mut SnapshotBuilder, payload: GuildMemberRemove) {
    if builder.remove_member(payload.guild_id, payload.user.id).is_some() {
        if let Some(guild) = builder.guild_mut(payload.guild_id) {
            guild.member_count = (guild.member_count - 1).max(0);
        }
    }
}

// === roles ===

/// GUILD_ROLE_CREATE / GUILD_ROLE_UPDATE: insert or overwrite the role
pub fn role_create(builder: &mut SnapshotBuilder, payload: GuildRole) {
    let role = resolve_role(payload.guild_id, &payload.role);
    let role_id = role.id;
    builder.put_role(role);

    match builder.guild_mut(payload.guild_id) {
        Some(guild) => guild.add_role(role_id),
        None => {
            tracing::debug!(role = %role_id, guild = %payload.guild_id,
                "role stored; owning guild not cached");
        }
    }
}

/// GUILD_ROLE_DELETE: remove the role and its guild association
///
/// Member role lists are not walked; stale ids age out through member
/// update events.
pub fn role_delete(builder: &mut SnapshotBuilder, payload: GuildRoleDelete) {
    builder.remove_role(payload.role_id);
    if let Some(guild) = builder.guild_mut(payload.guild_id) {
        guild.remove_role(payload.role_id);
    }
}

// === emojis ===

/// GUILD_EMOJIS_UPDATE: replace the guild's emoji set wholesale
pub fn emojis_update(builder: &mut SnapshotBuilder, payload: GuildEmojisUpdate) {
    builder.remove_guild_emojis(payload.guild_id);
    let ids: Vec<Snowflake> = payload.emojis.iter().map(|e| e.id).collect();
    for emoji in &payload.emojis {
        builder.put_emoji(resolve_emoji(payload.guild_id, emoji));
    }
    if let Some(guild) = builder.guild_mut(payload.guild_id) {
        guild.emoji_ids = ids;
    }
}

// === messages ===

/// MESSAGE_CREATE: store the message, its author, and bump the channel
pub fn message_create(builder: &mut SnapshotBuilder, payload: RawMessage) {
    put_embedded_user(builder, &payload.author);

    let message = Message {
        id: payload.id,
        channel_id: payload.channel_id,
        guild_id: payload.guild_id,
        author_id: payload.author.id,
        content: payload.content,
        timestamp: payload.timestamp,
        edited_timestamp: payload.edited_timestamp,
        pinned: payload.pinned,
    };
    builder.put_message(message);

    match builder.channel_mut(payload.channel_id) {
        Some(channel) => channel.last_message_id = Some(payload.id),
        None => {
            tracing::debug!(message = %payload.id, channel = %payload.channel_id,
                "message stored; channel not cached");
        }
    }
}

/// MESSAGE_UPDATE: merge edited fields into the cached message
pub fn message_update(builder: &mut SnapshotBuilder, payload: MessageUpdate) {
    let Some(message) = builder.message_mut(payload.id) else {
        // Without the original author there is nothing safe to store
        tracing::debug!(message = %payload.id, "update for uncached message; skipped");
        return;
    };

    if let Some(content) = payload.content.into_option() {
        message.content = content;
    }
    message.edited_timestamp = payload
        .edited_timestamp
        .fold(|| None, || message.edited_timestamp.take(), Some);
    if let Some(pinned) = payload.pinned.into_option() {
        message.pinned = pinned;
    }
}

/// MESSAGE_DELETE: remove the message entry
pub fn message_delete(builder: &mut SnapshotBuilder, payload: MessageDelete) {
    builder.remove_message(payload.id);
}

/// MESSAGE_DELETE_BULK: per-id deletes in sequence order
pub fn message_delete_bulk(builder: &mut SnapshotBuilder, payload: MessageDeleteBulk) {
    for id in payload.ids {
        message_delete(
            builder,
            MessageDelete {
                id,
                channel_id: payload.channel_id,
            },
        );
    }
}
