//! Message entity - a chat message as resolved into the cache

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Message entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: Snowflake,
    pub channel_id: Snowflake,
    pub guild_id: Option<Snowflake>,
    pub author_id: Snowflake,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub edited_timestamp: Option<DateTime<Utc>>,
    pub pinned: bool,
}

impl Message {
    /// Create a new Message
    pub fn new(
        id: Snowflake,
        channel_id: Snowflake,
        author_id: Snowflake,
        content: String,
    ) -> Self {
        Self {
            id,
            channel_id,
            guild_id: None,
            author_id,
            content,
            timestamp: id.created_at(),
            edited_timestamp: None,
            pinned: false,
        }
    }

    /// Check if the message has been edited
    #[inline]
    pub fn is_edited(&self) -> bool {
        self.edited_timestamp.is_some()
    }

    /// Check if the message was sent in a guild channel
    #[inline]
    pub fn is_guild_message(&self) -> bool {
        self.guild_id.is_some()
    }
}
