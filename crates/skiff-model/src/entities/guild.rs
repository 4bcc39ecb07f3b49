//! Guild entity - a server as resolved into the cache

use crate::value_objects::Snowflake;

/// Guild (server) entity
///
/// Child collections are kept as id lists; the entities themselves live in
/// their own snapshot maps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guild {
    pub id: Snowflake,
    pub name: String,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub owner_id: Snowflake,
    pub role_ids: Vec<Snowflake>,
    pub channel_ids: Vec<Snowflake>,
    pub emoji_ids: Vec<Snowflake>,
    pub member_count: i32,
    /// True during a platform outage; the guild stays cached but stale
    pub unavailable: bool,
}

impl Guild {
    /// Create a new Guild
    pub fn new(id: Snowflake, name: String, owner_id: Snowflake) -> Self {
        Self {
            id,
            name,
            icon: None,
            description: None,
            owner_id,
            role_ids: Vec::new(),
            channel_ids: Vec::new(),
            emoji_ids: Vec::new(),
            member_count: 0,
            unavailable: false,
        }
    }

    /// Placeholder for a guild announced before its full data arrives
    ///
    /// Name and owner are unknown until the full guild is sent; the zero
    /// owner id never matches a real user.
    pub fn unavailable_stub(id: Snowflake) -> Self {
        let mut guild = Self::new(id, String::new(), Snowflake::default());
        guild.unavailable = true;
        guild
    }

    /// Check if a user is the guild owner
    #[inline]
    pub fn is_owner(&self, user_id: Snowflake) -> bool {
        self.owner_id == user_id
    }

    /// Track a channel id, keeping the list duplicate-free
    pub fn add_channel(&mut self, channel_id: Snowflake) {
        if !self.channel_ids.contains(&channel_id) {
            self.channel_ids.push(channel_id);
        }
    }

    /// Forget a channel id
    pub fn remove_channel(&mut self, channel_id: Snowflake) {
        self.channel_ids.retain(|&id| id != channel_id);
    }

    /// Track a role id, keeping the list duplicate-free
    pub fn add_role(&mut self, role_id: Snowflake) {
        if !self.role_ids.contains(&role_id) {
            self.role_ids.push(role_id);
        }
    }

    /// Forget a role id
    pub fn remove_role(&mut self, role_id: Snowflake) {
        self.role_ids.retain(|&id| id != role_id);
    }
}
