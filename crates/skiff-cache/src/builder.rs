//! Mutable staging snapshot
//!
//! A builder is derived from the current snapshot, mutated by exactly one
//! update transaction, then frozen into the next snapshot. Cloning is
//! copy-on-write: a backing map is only copied once the transaction first
//! touches it, so deriving a builder is O(1) even for a large cache.

use std::collections::HashMap;
use std::sync::Arc;

use skiff_model::{Channel, Emoji, Guild, Member, Message, Role, Snowflake, User};

use crate::snapshot::Snapshot;

/// Mutable staging snapshot, exclusively owned during one update
#[derive(Debug)]
pub struct SnapshotBuilder {
    guilds: Arc<HashMap<Snowflake, Guild>>,
    channels: Arc<HashMap<Snowflake, Channel>>,
    users: Arc<HashMap<Snowflake, User>>,
    members: Arc<HashMap<(Snowflake, Snowflake), Member>>,
    roles: Arc<HashMap<Snowflake, Role>>,
    messages: Arc<HashMap<Snowflake, Message>>,
    emojis: Arc<HashMap<Snowflake, Emoji>>,
    channel_guild: Arc<HashMap<Snowflake, Snowflake>>,
    self_user: Option<User>,
}

impl SnapshotBuilder {
    pub(crate) fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            guilds: Arc::clone(&snapshot.guilds),
            channels: Arc::clone(&snapshot.channels),
            users: Arc::clone(&snapshot.users),
            members: Arc::clone(&snapshot.members),
            roles: Arc::clone(&snapshot.roles),
            messages: Arc::clone(&snapshot.messages),
            emojis: Arc::clone(&snapshot.emojis),
            channel_guild: Arc::clone(&snapshot.channel_guild),
            self_user: snapshot.self_user.clone(),
        }
    }

    /// Freeze the builder into an immutable snapshot
    ///
    /// Consumes the builder; a frozen transaction cannot be reopened.
    #[must_use]
    pub fn freeze(self) -> Snapshot {
        Snapshot {
            guilds: self.guilds,
            channels: self.channels,
            users: self.users,
            members: self.members,
            roles: self.roles,
            messages: self.messages,
            emojis: self.emojis,
            channel_guild: self.channel_guild,
            self_user: self.self_user,
        }
    }

    // === self identity ===

    pub fn set_self_user(&mut self, user: User) {
        self.self_user = Some(user);
    }

    #[must_use]
    pub fn self_user(&self) -> Option<&User> {
        self.self_user.as_ref()
    }

    // === guilds ===

    #[must_use]
    pub fn guild(&self, id: Snowflake) -> Option<&Guild> {
        self.guilds.get(&id)
    }

    /// Mutable access to a cached guild (copies the guild map on first touch)
    pub fn guild_mut(&mut self, id: Snowflake) -> Option<&mut Guild> {
        Arc::make_mut(&mut self.guilds).get_mut(&id)
    }

    pub fn put_guild(&mut self, guild: Guild) {
        Arc::make_mut(&mut self.guilds).insert(guild.id, guild);
    }

    /// Remove a guild entry
    ///
    /// Children (channels, roles, members) are deliberately left in place;
    /// their own delete events remove them.
    pub fn remove_guild(&mut self, id: Snowflake) -> Option<Guild> {
        Arc::make_mut(&mut self.guilds).remove(&id)
    }

    // === channels ===

    #[must_use]
    pub fn channel(&self, id: Snowflake) -> Option<&Channel> {
        self.channels.get(&id)
    }

    pub fn channel_mut(&mut self, id: Snowflake) -> Option<&mut Channel> {
        Arc::make_mut(&mut self.channels).get_mut(&id)
    }

    /// Insert or overwrite a channel, keeping the channel->guild index in step
    pub fn put_channel(&mut self, channel: Channel) {
        match channel.guild_id {
            Some(guild_id) => {
                Arc::make_mut(&mut self.channel_guild).insert(channel.id, guild_id);
            }
            None => {
                Arc::make_mut(&mut self.channel_guild).remove(&channel.id);
            }
        }
        Arc::make_mut(&mut self.channels).insert(channel.id, channel);
    }

    pub fn remove_channel(&mut self, id: Snowflake) -> Option<Channel> {
        Arc::make_mut(&mut self.channel_guild).remove(&id);
        Arc::make_mut(&mut self.channels).remove(&id)
    }

    // === users ===

    #[must_use]
    pub fn user(&self, id: Snowflake) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn put_user(&mut self, user: User) {
        Arc::make_mut(&mut self.users).insert(user.id, user);
    }

    pub fn remove_user(&mut self, id: Snowflake) -> Option<User> {
        Arc::make_mut(&mut self.users).remove(&id)
    }

    // === members ===

    #[must_use]
    pub fn member(&self, guild_id: Snowflake, user_id: Snowflake) -> Option<&Member> {
        self.members.get(&(guild_id, user_id))
    }

    pub fn member_mut(&mut self, guild_id: Snowflake, user_id: Snowflake) -> Option<&mut Member> {
        Arc::make_mut(&mut self.members).get_mut(&(guild_id, user_id))
    }

    pub fn put_member(&mut self, member: Member) {
        Arc::make_mut(&mut self.members).insert((member.guild_id, member.user_id), member);
    }

    pub fn remove_member(&mut self, guild_id: Snowflake, user_id: Snowflake) -> Option<Member> {
        Arc::make_mut(&mut self.members).remove(&(guild_id, user_id))
    }

    // === roles ===

    #[must_use]
    pub fn role(&self, id: Snowflake) -> Option<&Role> {
        self.roles.get(&id)
    }

    pub fn put_role(&mut self, role: Role) {
        Arc::make_mut(&mut self.roles).insert(role.id, role);
    }

    pub fn remove_role(&mut self, id: Snowflake) -> Option<Role> {
        Arc::make_mut(&mut self.roles).remove(&id)
    }

    // === messages ===

    #[must_use]
    pub fn message(&self, id: Snowflake) -> Option<&Message> {
        self.messages.get(&id)
    }

    pub fn message_mut(&mut self, id: Snowflake) -> Option<&mut Message> {
        Arc::make_mut(&mut self.messages).get_mut(&id)
    }

    pub fn put_message(&mut self, message: Message) {
        Arc::make_mut(&mut self.messages).insert(message.id, message);
    }

    pub fn remove_message(&mut self, id: Snowflake) -> Option<Message> {
        Arc::make_mut(&mut self.messages).remove(&id)
    }

    // === emojis ===

    #[must_use]
    pub fn emoji(&self, id: Snowflake) -> Option<&Emoji> {
        self.emojis.get(&id)
    }

    pub fn put_emoji(&mut self, emoji: Emoji) {
        Arc::make_mut(&mut self.emojis).insert(emoji.id, emoji);
    }

    pub fn remove_emoji(&mut self, id: Snowflake) -> Option<Emoji> {
        Arc::make_mut(&mut self.emojis).remove(&id)
    }

    /// Remove every emoji owned by a guild, returning the removed ids
    pub fn remove_guild_emojis(&mut self, guild_id: Snowflake) -> Vec<Snowflake> {
        let emojis = Arc::make_mut(&mut self.emojis);
        let ids: Vec<Snowflake> = emojis
            .values()
            .filter(|e| e.guild_id == guild_id)
            .map(|e| e.id)
            .collect();
        for id in &ids {
            emojis.remove(id);
        }
        ids
    }
}
