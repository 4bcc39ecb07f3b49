//! Test fixtures and data generators
//!
//! Raw gateway frame bodies as JSON, shaped the way the wire delivers
//! them. Tests decode these through [`GatewayEvent::decode`] so every
//! scenario exercises the real decode path, not hand-built structs.

use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::{json, Value};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A user object as nested in payloads
pub fn user_json(id: u64, username: &str) -> Value {
    json!({
        "id": id.to_string(),
        "username": username,
        "discriminator": "0001",
    })
}

/// A bot user object
pub fn bot_json(id: u64, username: &str) -> Value {
    json!({
        "id": id.to_string(),
        "username": username,
        "discriminator": "0001",
        "bot": true,
    })
}

/// A READY body carrying the self user and unavailable guild stubs
pub fn ready_json(self_id: u64, guild_ids: &[u64]) -> Value {
    json!({
        "v": 10,
        "user": user_json(self_id, "skiff"),
        "session_id": format!("session-{}", unique_suffix()),
        "guilds": guild_ids
            .iter()
            .map(|id| json!({"id": id.to_string(), "unavailable": true}))
            .collect::<Vec<_>>(),
    })
}

/// A GUILD_CREATE body with one text channel, one role, one member, and
/// one emoji nested, the way the gateway sends a newly available guild
pub fn guild_create_json(guild_id: u64, owner_id: u64) -> Value {
    json!({
        "id": guild_id.to_string(),
        "name": format!("Test Guild {}", unique_suffix()),
        "owner_id": owner_id.to_string(),
        "member_count": 1,
        "channels": [
            {
                "id": (guild_id * 10).to_string(),
                "type": 0,
                "name": "general",
                "position": 0,
            }
        ],
        "roles": [
            {
                "id": (guild_id * 10 + 1).to_string(),
                "name": "@everyone",
                "permissions": "3072",
            }
        ],
        "members": [
            {
                "user": user_json(owner_id, "owner"),
                "roles": [(guild_id * 10 + 1).to_string()],
                "joined_at": "2024-06-01T12:00:00Z",
            }
        ],
        "emojis": [
            {
                "id": (guild_id * 10 + 2).to_string(),
                "name": "blob",
            }
        ],
    })
}

/// A bare GUILD_CREATE body with no nested lists
pub fn bare_guild_json(guild_id: u64, owner_id: u64) -> Value {
    json!({
        "id": guild_id.to_string(),
        "name": format!("Test Guild {}", unique_suffix()),
        "owner_id": owner_id.to_string(),
    })
}

/// A CHANNEL_CREATE / CHANNEL_UPDATE body
pub fn channel_json(channel_id: u64, guild_id: Option<u64>, name: &str) -> Value {
    let mut body = json!({
        "id": channel_id.to_string(),
        "type": 0,
        "name": name,
        "position": 0,
    });
    if let Some(guild_id) = guild_id {
        body["guild_id"] = json!(guild_id.to_string());
    }
    body
}

/// A GUILD_MEMBER_ADD body (member fields flattened beside guild_id)
pub fn member_add_json(guild_id: u64, user_id: u64, username: &str) -> Value {
    json!({
        "guild_id": guild_id.to_string(),
        "user": user_json(user_id, username),
        "roles": [],
        "joined_at": "2024-06-01T12:00:00Z",
    })
}

/// A GUILD_ROLE_CREATE / GUILD_ROLE_UPDATE body
pub fn role_json(guild_id: u64, role_id: u64, name: &str, permissions: &str) -> Value {
    json!({
        "guild_id": guild_id.to_string(),
        "role": {
            "id": role_id.to_string(),
            "name": name,
            "permissions": permissions,
        },
    })
}

/// A MESSAGE_CREATE body
pub fn message_json(message_id: u64, channel_id: u64, author_id: u64, content: &str) -> Value {
    json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "author": user_json(author_id, "author"),
        "content": content,
        "timestamp": "2024-06-01T12:00:00Z",
    })
}

/// A MESSAGE_CREATE body sent inside a guild channel
pub fn guild_message_json(
    message_id: u64,
    channel_id: u64,
    guild_id: u64,
    author_id: u64,
    content: &str,
) -> Value {
    let mut body = message_json(message_id, channel_id, author_id, content);
    body["guild_id"] = json!(guild_id.to_string());
    body
}
