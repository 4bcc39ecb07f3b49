//! Immutable point-in-time view of the entity cache
//!
//! A snapshot owns one map per entity type plus derived lookup indices.
//! It is never mutated after construction; the maps are shared with the
//! builder that produced the next snapshot, so holding an old snapshot is
//! cheap and always consistent.

use std::collections::HashMap;
use std::sync::Arc;

use skiff_model::{Channel, Emoji, Guild, Member, Message, Role, Snowflake, User};

use crate::builder::SnapshotBuilder;

/// Immutable, shareable view of all cached entities
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub(crate) guilds: Arc<HashMap<Snowflake, Guild>>,
    pub(crate) channels: Arc<HashMap<Snowflake, Channel>>,
    pub(crate) users: Arc<HashMap<Snowflake, User>>,
    pub(crate) members: Arc<HashMap<(Snowflake, Snowflake), Member>>,
    pub(crate) roles: Arc<HashMap<Snowflake, Role>>,
    pub(crate) messages: Arc<HashMap<Snowflake, Message>>,
    pub(crate) emojis: Arc<HashMap<Snowflake, Emoji>>,
    /// Derived index: channel id -> owning guild id
    pub(crate) channel_guild: Arc<HashMap<Snowflake, Snowflake>>,
    /// The bot's own identity, set by READY
    pub(crate) self_user: Option<User>,
}

impl Snapshot {
    /// An empty cache
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Derive a mutable builder from this snapshot
    ///
    /// O(1): the backing maps are shared until a collection is touched.
    #[must_use]
    pub fn to_builder(&self) -> SnapshotBuilder {
        SnapshotBuilder::from_snapshot(self)
    }

    /// The bot's own user, once READY has been applied
    #[must_use]
    pub fn self_user(&self) -> Option<&User> {
        self.self_user.as_ref()
    }

    #[must_use]
    pub fn guild(&self, id: Snowflake) -> Option<&Guild> {
        self.guilds.get(&id)
    }

    #[must_use]
    pub fn channel(&self, id: Snowflake) -> Option<&Channel> {
        self.channels.get(&id)
    }

    #[must_use]
    pub fn user(&self, id: Snowflake) -> Option<&User> {
        self.users.get(&id)
    }

    #[must_use]
    pub fn member(&self, guild_id: Snowflake, user_id: Snowflake) -> Option<&Member> {
        self.members.get(&(guild_id, user_id))
    }

    #[must_use]
    pub fn role(&self, id: Snowflake) -> Option<&Role> {
        self.roles.get(&id)
    }

    #[must_use]
    pub fn message(&self, id: Snowflake) -> Option<&Message> {
        self.messages.get(&id)
    }

    #[must_use]
    pub fn emoji(&self, id: Snowflake) -> Option<&Emoji> {
        self.emojis.get(&id)
    }

    /// O(1) lookup of the guild owning a channel, via the derived index
    #[must_use]
    pub fn guild_of_channel(&self, channel_id: Snowflake) -> Option<Snowflake> {
        self.channel_guild.get(&channel_id).copied()
    }

    /// All cached channels of a guild
    pub fn guild_channels(&self, guild_id: Snowflake) -> impl Iterator<Item = &Channel> {
        self.channels
            .values()
            .filter(move |c| c.guild_id == Some(guild_id))
    }

    /// All cached members of a guild
    pub fn members_of(&self, guild_id: Snowflake) -> impl Iterator<Item = &Member> {
        self.members
            .values()
            .filter(move |m| m.guild_id == guild_id)
    }

    /// All cached roles of a guild
    pub fn roles_of(&self, guild_id: Snowflake) -> impl Iterator<Item = &Role> {
        self.roles.values().filter(move |r| r.guild_id == guild_id)
    }

    pub fn guilds(&self) -> impl Iterator<Item = &Guild> {
        self.guilds.values()
    }

    #[must_use]
    pub fn guild_count(&self) -> usize {
        self.guilds.len()
    }

    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }
}
