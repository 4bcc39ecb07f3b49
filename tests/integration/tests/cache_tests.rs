//! Cache Engine Integration Tests
//!
//! Drives raw JSON frames through the full decode and dispatch pipeline
//! and asserts on the published snapshots.
//!
//! Run with: cargo test -p integration-tests --test cache_tests

use std::sync::Arc;

use serde_json::json;

use integration_tests::{
    bare_guild_json, channel_json, guild_create_json, guild_message_json, id, member_add_json,
    message_json, ready_json, role_json, TestEngine,
};
use skiff_cache::{pump, Dispatcher, SnapshotCell};
use skiff_model::{GatewayEvent, Permissions};

// ============================================================================
// Ready and Guild Hydration
// ============================================================================

#[test]
fn test_ready_then_guild_create_hydrates_the_cache() {
    let engine = TestEngine::new();
    let snap = engine
        .apply_frames(vec![
            ("READY", ready_json(1, &[10])),
            ("GUILD_CREATE", guild_create_json(10, 2)),
        ])
        .unwrap();

    assert_eq!(snap.self_user().unwrap().id, id(1));

    let guild = snap.guild(id(10)).unwrap();
    assert!(!guild.unavailable);
    assert_eq!(guild.owner_id, id(2));
    assert_eq!(guild.member_count, 1);

    // Nested lists landed in their own maps, linked back to the guild
    assert_eq!(snap.guild_of_channel(id(100)), Some(id(10)));
    assert_eq!(snap.channel(id(100)).unwrap().name.as_deref(), Some("general"));
    assert!(snap.role(id(101)).is_some());
    assert!(snap.member(id(10), id(2)).is_some());
    assert!(snap.user(id(2)).is_some());
    assert_eq!(snap.emoji(id(102)).unwrap().name, "blob");
}

#[test]
fn test_ready_lists_guilds_as_unavailable_stubs() {
    let engine = TestEngine::new();
    let snap = engine.apply_frame("READY", ready_json(1, &[10, 11])).unwrap();

    assert_eq!(snap.guild_count(), 2);
    assert!(snap.guild(id(10)).unwrap().unavailable);
    assert!(snap.guild(id(11)).unwrap().unavailable);
}

// ============================================================================
// Replay Determinism
// ============================================================================

#[test]
fn test_same_frame_sequence_yields_the_same_snapshot() {
    let frames = || {
        vec![
            ("READY", ready_json(1, &[])),
            ("GUILD_CREATE", guild_create_json(10, 2)),
            ("GUILD_MEMBER_ADD", member_add_json(10, 3, "alice")),
            ("MESSAGE_CREATE", guild_message_json(500, 100, 10, 3, "hi")),
            ("MESSAGE_DELETE", json!({"id": "500", "channel_id": "100"})),
        ]
    };

    // unique_suffix makes guild names differ between runs; pin them
    let mut first = frames();
    first[1].1["name"] = json!("replay");
    let mut second = frames();
    second[1].1["name"] = json!("replay");

    let a = TestEngine::new().apply_frames(first).unwrap();
    let b = TestEngine::new().apply_frames(second).unwrap();

    assert_eq!(a.guild(id(10)), b.guild(id(10)));
    assert_eq!(a.member(id(10), id(3)), b.member(id(10), id(3)));
    assert_eq!(a.message_count(), 0);
    assert_eq!(b.message_count(), 0);
    assert_eq!(a.user_count(), b.user_count());
}

#[test]
fn test_later_frame_wins_for_the_same_entity() {
    let engine = TestEngine::new();
    let snap = engine
        .apply_frames(vec![
            ("CHANNEL_CREATE", channel_json(7, None, "first")),
            ("CHANNEL_UPDATE", channel_json(7, None, "second")),
        ])
        .unwrap();

    assert_eq!(snap.channel_count(), 1);
    assert_eq!(snap.channel(id(7)).unwrap().name.as_deref(), Some("second"));
}

// ============================================================================
// Snapshot Immutability
// ============================================================================

#[test]
fn test_held_snapshots_never_change_under_later_publishes() {
    let engine = TestEngine::new();
    let before = engine
        .apply_frame("GUILD_CREATE", guild_create_json(10, 2))
        .unwrap();

    engine
        .apply_frames(vec![
            ("GUILD_UPDATE", json!({"id": "10", "name": "renamed"})),
            ("CHANNEL_CREATE", channel_json(8, Some(10), "extra")),
            ("GUILD_DELETE", json!({"id": "10", "unavailable": false})),
        ])
        .unwrap();

    // The snapshot captured earlier still shows the world as it was
    assert!(before.guild(id(10)).is_some());
    assert_ne!(before.guild(id(10)).unwrap().name, "renamed");
    assert!(before.channel(id(8)).is_none());

    let after = engine.current();
    assert!(after.guild(id(10)).is_none());
    assert!(after.channel(id(8)).is_some());
}

// ============================================================================
// Guild Removal
// ============================================================================

#[test]
fn test_guild_delete_removes_only_the_guild_record() {
    let engine = TestEngine::new();
    engine
        .apply_frames(vec![
            ("GUILD_CREATE", guild_create_json(10, 2)),
            ("MESSAGE_CREATE", guild_message_json(500, 100, 10, 2, "hi")),
            ("GUILD_DELETE", json!({"id": "10", "unavailable": false})),
        ])
        .unwrap();

    let snap = engine.current();
    assert!(snap.guild(id(10)).is_none());
    // Children survive until their own removal events arrive
    assert!(snap.channel(id(100)).is_some());
    assert!(snap.role(id(101)).is_some());
    assert!(snap.member(id(10), id(2)).is_some());
    assert!(snap.message(id(500)).is_some());
}

#[test]
fn test_guild_outage_marks_instead_of_removing() {
    let engine = TestEngine::new();
    let snap = engine
        .apply_frames(vec![
            ("GUILD_CREATE", guild_create_json(10, 2)),
            ("GUILD_DELETE", json!({"id": "10", "unavailable": true})),
        ])
        .unwrap();

    let guild = snap.guild(id(10)).unwrap();
    assert!(guild.unavailable);
    // Becomes available again when the full guild is re-sent
    let snap = engine
        .apply_frame("GUILD_CREATE", guild_create_json(10, 2))
        .unwrap();
    assert!(!snap.guild(id(10)).unwrap().unavailable);
}

// ============================================================================
// Unresolved References
// ============================================================================

#[test]
fn test_frames_for_unknown_guilds_cache_what_they_carry() {
    let engine = TestEngine::new();
    let snap = engine
        .apply_frames(vec![
            // No GUILD_CREATE for guild 99 ever arrived
            ("GUILD_MEMBER_ADD", member_add_json(99, 3, "alice")),
            ("GUILD_ROLE_CREATE", role_json(99, 40, "mod", "2")),
            ("CHANNEL_CREATE", channel_json(7, Some(99), "orphan")),
        ])
        .unwrap();

    assert!(snap.guild(id(99)).is_none());
    assert!(snap.member(id(99), id(3)).is_some());
    assert!(snap.user(id(3)).is_some());
    assert!(snap.role(id(40)).is_some());
    assert!(snap.channel(id(7)).is_some());
}

#[test]
fn test_member_remove_keeps_the_user_record() {
    let engine = TestEngine::new();
    let snap = engine
        .apply_frames(vec![
            ("GUILD_MEMBER_ADD", member_add_json(10, 3, "alice")),
            (
                "GUILD_MEMBER_REMOVE",
                json!({
                    "guild_id": "10",
                    "user": {"id": "3", "username": "alice", "discriminator": "0001"},
                }),
            ),
        ])
        .unwrap();

    assert!(snap.member(id(10), id(3)).is_none());
    // The user may still author messages in other guilds
    assert!(snap.user(id(3)).is_some());
}

#[test]
fn test_role_delete_leaves_member_role_ids_stale() {
    let engine = TestEngine::new();
    let snap = engine
        .apply_frames(vec![
            ("GUILD_CREATE", guild_create_json(10, 2)),
            ("GUILD_ROLE_DELETE", json!({"guild_id": "10", "role_id": "101"})),
        ])
        .unwrap();

    assert!(snap.role(id(101)).is_none());
    // The dangling id stays on the member; lookups simply miss
    let member = snap.member(id(10), id(2)).unwrap();
    assert!(member.role_ids.contains(&id(101)));
    let effective = Permissions::combine(
        member
            .role_ids
            .iter()
            .filter_map(|&rid| snap.role(rid))
            .map(|r| r.permissions),
    );
    assert_eq!(effective, Permissions::empty());
}

// ============================================================================
// Message Edits
// ============================================================================

#[test]
fn test_message_update_merges_only_the_fields_sent() {
    let engine = TestEngine::new();
    engine
        .apply_frames(vec![
            ("MESSAGE_CREATE", message_json(500, 100, 3, "original")),
            // pinned changes; content absent, so it must not change
            (
                "MESSAGE_UPDATE",
                json!({"id": "500", "channel_id": "100", "pinned": true}),
            ),
        ])
        .unwrap();

    let message = engine.message(500).unwrap();
    assert_eq!(message.content, "original");
    assert!(message.pinned);

    // An explicit null clears, it does not preserve
    engine
        .apply_frame(
            "MESSAGE_UPDATE",
            json!({
                "id": "500",
                "channel_id": "100",
                "content": "edited",
                "edited_timestamp": "2024-06-01T13:00:00Z",
            }),
        )
        .unwrap();
    engine
        .apply_frame(
            "MESSAGE_UPDATE",
            json!({"id": "500", "channel_id": "100", "edited_timestamp": null}),
        )
        .unwrap();

    let message = engine.message(500).unwrap();
    assert_eq!(message.content, "edited");
    assert!(message.edited_timestamp.is_none());
}

#[test]
fn test_update_for_uncached_message_is_skipped() {
    let engine = TestEngine::new();
    let snap = engine
        .apply_frame(
            "MESSAGE_UPDATE",
            json!({"id": "500", "channel_id": "100", "content": "edit"}),
        )
        .unwrap();

    // Partial data never materializes an entity
    assert_eq!(snap.message_count(), 0);
}

#[test]
fn test_bulk_delete_removes_every_listed_message() {
    let engine = TestEngine::new();
    let snap = engine
        .apply_frames(vec![
            ("MESSAGE_CREATE", message_json(500, 100, 3, "a")),
            ("MESSAGE_CREATE", message_json(501, 100, 3, "b")),
            ("MESSAGE_CREATE", message_json(502, 100, 3, "c")),
            (
                "MESSAGE_DELETE_BULK",
                json!({"ids": ["500", "502", "999"], "channel_id": "100"}),
            ),
        ])
        .unwrap();

    assert_eq!(snap.message_count(), 1);
    assert!(snap.message(id(501)).is_some());
}

// ============================================================================
// The Pump
// ============================================================================

#[tokio::test]
async fn test_pump_survives_malformed_frames() {
    let cell = Arc::new(SnapshotCell::default());
    let dispatcher = Dispatcher::new(Arc::clone(&cell));
    let (tx, rx) = tokio::sync::mpsc::channel(8);

    tx.send(GatewayEvent::decode("NOT_A_REAL_EVENT", json!({})))
        .await
        .unwrap();
    tx.send(GatewayEvent::decode("GUILD_DELETE", json!({"whoops": true})))
        .await
        .unwrap();
    tx.send(GatewayEvent::decode(
        "GUILD_CREATE",
        bare_guild_json(10, 2),
    ))
    .await
    .unwrap();
    drop(tx);

    pump(rx, &dispatcher).await;

    // Two bad frames cost nothing but themselves
    assert!(cell.current().guild(id(10)).is_some());
}

#[tokio::test]
async fn test_snapshot_stream_sees_each_publish() {
    use tokio_stream::StreamExt;

    let engine = TestEngine::new();
    let mut snapshots = engine.cell.snapshots();

    // Initial value
    assert_eq!(snapshots.next().await.unwrap().guild_count(), 0);

    engine
        .apply_frame("GUILD_CREATE", bare_guild_json(10, 2))
        .unwrap();
    assert_eq!(snapshots.next().await.unwrap().guild_count(), 1);
}
