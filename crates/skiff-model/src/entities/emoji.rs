//! Emoji entity - a custom guild emoji

use crate::value_objects::Snowflake;

/// Custom emoji entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emoji {
    pub id: Snowflake,
    pub guild_id: Snowflake,
    pub name: String,
    pub animated: bool,
    pub available: bool,
}

impl Emoji {
    /// Create a new Emoji
    pub fn new(id: Snowflake, guild_id: Snowflake, name: String) -> Self {
        Self {
            id,
            guild_id,
            name,
            animated: false,
            available: true,
        }
    }

    /// Chat markup for this emoji
    pub fn mention(&self) -> String {
        if self.animated {
            format!("<a:{}:{}>", self.name, self.id)
        } else {
            format!("<:{}:{}>", self.name, self.id)
        }
    }
}
