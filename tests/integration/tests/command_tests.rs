//! Command Pipeline Integration Tests
//!
//! Wires the cache engine to the command router the way the runtime does:
//! frames update the snapshot, cached messages flow into the router, and
//! subscribers receive typed command events.
//!
//! Run with: cargo test -p integration-tests --test command_tests

use std::sync::Arc;

use serde_json::json;

use integration_tests::{
    bot_json, guild_create_json, guild_message_json, message_json, role_json, TestEngine,
};
use skiff_command::{
    CommandEvent, CommandRouter, CommandSpec, ExactArgs, GuildOnly, IgnoreBots, RequirePermission,
};
use skiff_model::Permissions;

fn rig() -> (TestEngine, CommandRouter) {
    let engine = TestEngine::new();
    let prefix = skiff_common::RuntimeConfig::default().command.prefix;
    let router = CommandRouter::new(prefix, Arc::clone(&engine.cell));
    (engine, router)
}

// ============================================================================
// End-to-End Flow
// ============================================================================

#[tokio::test]
async fn test_cached_message_reaches_subscriber_with_live_snapshot() {
    let (engine, router) = rig();
    let mut events = router.subscribe(CommandSpec::new("ping"));

    engine
        .apply_frames(vec![
            ("GUILD_CREATE", guild_create_json(10, 2)),
            ("MESSAGE_CREATE", guild_message_json(500, 100, 10, 2, "!ping")),
        ])
        .unwrap();
    router.handle_message(&engine.message(500).unwrap());

    match events.recv().await.unwrap() {
        CommandEvent::Invocation(inv) => {
            assert_eq!(inv.message.id, integration_tests::id(500));
            // The snapshot delivered with the invocation can resolve context
            assert!(inv.snapshot.guild(integration_tests::id(10)).is_some());
            assert_eq!(
                inv.snapshot.guild_of_channel(integration_tests::id(100)),
                Some(integration_tests::id(10))
            );
        }
        other => panic!("expected invocation, got {other:?}"),
    }
}

#[tokio::test]
async fn test_filters_observe_cache_updates() {
    let (engine, router) = rig();
    let mut events = router.subscribe(
        CommandSpec::new("kick").filter(RequirePermission(Permissions::KICK_MEMBERS)),
    );

    engine
        .apply_frames(vec![
            ("GUILD_CREATE", guild_create_json(10, 2)),
            (
                "GUILD_MEMBER_ADD",
                json!({
                    "guild_id": "10",
                    "user": {"id": "3", "username": "mod", "discriminator": "0001"},
                    "roles": ["40"],
                }),
            ),
            ("MESSAGE_CREATE", guild_message_json(500, 100, 10, 3, "!kick")),
        ])
        .unwrap();
    let message = engine.message(500).unwrap();

    // Role 40 is not cached yet, so the permission cannot be proven
    router.handle_message(&message);
    assert!(matches!(
        events.recv().await.unwrap(),
        CommandEvent::Filtered(f) if f.failed == vec!["require_permission"]
    ));

    // The role grant arrives; the same message now passes
    engine
        .apply_frame(
            "GUILD_ROLE_CREATE",
            role_json(10, 40, "mod", &Permissions::KICK_MEMBERS.bits().to_string()),
        )
        .unwrap();
    router.handle_message(&message);
    assert!(matches!(
        events.recv().await.unwrap(),
        CommandEvent::Invocation(_)
    ));
}

// ============================================================================
// Filter Stage
// ============================================================================

#[tokio::test]
async fn test_bot_authors_are_filtered_by_cached_identity() {
    let (engine, router) = rig();
    let mut events = router.subscribe(CommandSpec::new("ping").filter(IgnoreBots));

    engine
        .apply_frames(vec![
            ("USER_UPDATE", bot_json(3, "beep")),
            ("MESSAGE_CREATE", message_json(500, 100, 3, "!ping")),
        ])
        .unwrap();
    router.handle_message(&engine.message(500).unwrap());

    match events.recv().await.unwrap() {
        CommandEvent::Filtered(filtered) => {
            assert_eq!(filtered.failed, vec!["ignore_bots"]);
        }
        other => panic!("expected filtered, got {other:?}"),
    }
}

#[tokio::test]
async fn test_every_failing_filter_is_reported_and_parser_skipped() {
    let (engine, router) = rig();
    let mut events = router.subscribe(
        CommandSpec::new("kick")
            .filter(GuildOnly)
            .filter(RequirePermission(Permissions::KICK_MEMBERS))
            .parser(ExactArgs(1)),
    );

    // A direct message with no arguments: both filters fail, and the
    // parser (which would also fail) never runs
    engine
        .apply_frame("MESSAGE_CREATE", message_json(500, 100, 3, "!kick"))
        .unwrap();
    router.handle_message(&engine.message(500).unwrap());

    match events.recv().await.unwrap() {
        CommandEvent::Filtered(filtered) => {
            assert_eq!(filtered.failed, vec!["guild_only", "require_permission"]);
        }
        other => panic!("expected filtered, got {other:?}"),
    }
}

// ============================================================================
// Subscriber Isolation
// ============================================================================

#[tokio::test]
async fn test_a_panicking_subscriber_does_not_disturb_its_siblings() {
    let (engine, router) = rig();

    let doomed = router
        .subscribe(CommandSpec::new("ping"))
        .spawn_for_each(|_| panic!("subscriber bug"));
    let mut steady = router.subscribe(CommandSpec::new("ping"));

    engine
        .apply_frame("MESSAGE_CREATE", message_json(500, 100, 3, "!ping"))
        .unwrap();
    router.handle_message(&engine.message(500).unwrap());

    // The fault is contained in the doomed subscriber's task
    assert!(doomed.await.is_err());

    engine
        .apply_frame("MESSAGE_CREATE", message_json(501, 100, 3, "!ping"))
        .unwrap();
    router.handle_message(&engine.message(501).unwrap());

    assert!(matches!(
        steady.recv().await.unwrap(),
        CommandEvent::Invocation(_)
    ));
    assert!(matches!(
        steady.recv().await.unwrap(),
        CommandEvent::Invocation(_)
    ));
}

#[tokio::test]
async fn test_subscriptions_match_independently() {
    let (engine, router) = rig();
    let mut ping = router.subscribe(CommandSpec::new("ping"));
    let mut echo = router.subscribe(CommandSpec::new("echo"));

    engine
        .apply_frames(vec![
            ("MESSAGE_CREATE", message_json(500, 100, 3, "!ping")),
            ("MESSAGE_CREATE", message_json(501, 100, 3, "!echo hello")),
        ])
        .unwrap();
    router.handle_message(&engine.message(500).unwrap());
    router.handle_message(&engine.message(501).unwrap());

    match ping.recv().await.unwrap() {
        CommandEvent::Invocation(inv) => assert_eq!(inv.message.content, "!ping"),
        other => panic!("expected invocation, got {other:?}"),
    }
    match echo.recv().await.unwrap() {
        CommandEvent::Invocation(inv) => assert_eq!(inv.message.content, "!echo hello"),
        other => panic!("expected invocation, got {other:?}"),
    }
}
