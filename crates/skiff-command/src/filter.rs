//! Command filters
//!
//! Ordered predicates applied before a command reaches its subscriber.
//! A rejection is not an error: the candidate surfaces as a
//! [`FilteredCommand`](crate::command::FilteredCommand) naming the filters
//! that failed, so callers can tell the user why.

use skiff_cache::Snapshot;
use skiff_model::{Message, Permissions};

/// A predicate over a command candidate
pub trait CommandFilter: Send + Sync {
    /// Stable name reported in `FilteredCommand`
    fn name(&self) -> &'static str;

    /// True if the message may proceed
    fn check(&self, snapshot: &Snapshot, message: &Message) -> bool;
}

/// Rejects messages authored by bot accounts
pub struct IgnoreBots;

impl CommandFilter for IgnoreBots {
    fn name(&self) -> &'static str {
        "ignore_bots"
    }

    fn check(&self, snapshot: &Snapshot, message: &Message) -> bool {
        // An uncached author cannot be proven a bot; let it through
        snapshot
            .user(message.author_id)
            .is_none_or(|user| !user.bot)
    }
}

/// Rejects messages sent outside a guild channel
pub struct GuildOnly;

impl CommandFilter for GuildOnly {
    fn name(&self) -> &'static str {
        "guild_only"
    }

    fn check(&self, _snapshot: &Snapshot, message: &Message) -> bool {
        message.guild_id.is_some()
    }
}

/// Requires the sender to hold a permission in the message's guild
///
/// Effective permissions are the union of the sender's cached roles; the
/// guild owner always passes. If the membership or guild cannot be
/// resolved from the snapshot the filter rejects.
pub struct RequirePermission(pub Permissions);

impl CommandFilter for RequirePermission {
    fn name(&self) -> &'static str {
        "require_permission"
    }

    fn check(&self, snapshot: &Snapshot, message: &Message) -> bool {
        let Some(guild_id) = message.guild_id else {
            return false;
        };
        let Some(guild) = snapshot.guild(guild_id) else {
            return false;
        };
        if guild.is_owner(message.author_id) {
            return true;
        }
        let Some(member) = snapshot.member(guild_id, message.author_id) else {
            return false;
        };

        let effective = Permissions::combine(
            member
                .role_ids
                .iter()
                .filter_map(|&id| snapshot.role(id))
                .map(|role| role.permissions),
        );
        effective.has(self.0)
    }
}
