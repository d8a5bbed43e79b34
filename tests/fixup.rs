//! The deferred permission fixup pass.

mod common;

use common::{bridge_before_fixup, Call, TestSender, ALL_PERMS};

#[test]
fn registration_stamps_every_name_with_a_host_permission() {
    let fixture = bridge_before_fixup();
    let commands = fixture.dispatcher.commands();

    for name in ["mural", "image", "images"] {
        assert_eq!(
            commands.host_permission(name).as_deref(),
            Some(format!("host.command.{name}").as_str()),
        );
    }
}

#[test]
fn host_permission_blocks_dispatch_until_the_fixup_tick() {
    let fixture = bridge_before_fixup();

    // Full surface permissions, but not the host-stamped node.
    let sender = TestSender::console(&ALL_PERMS);
    let err = fixture.dispatcher.execute(&sender, "/mural list").unwrap_err();
    assert_eq!(err.error_code(), "permission_denied");
    assert!(fixture.service.is_empty());

    // The pass is deferred, not synchronous.
    assert_eq!(fixture.scheduler.pending(), 1);
    fixture.scheduler.tick();
    assert_eq!(fixture.scheduler.pending(), 0);

    fixture.dispatcher.execute(&sender, "/mural list").unwrap();
    assert_eq!(fixture.service.take(), [Call::List { page: 0 }]);
}

#[test]
fn fixup_covers_aliases_too() {
    let fixture = bridge_before_fixup();
    fixture.scheduler.tick();

    let commands = fixture.dispatcher.commands();
    for name in ["mural", "image", "images"] {
        assert!(commands.host_permission(name).is_none(), "{name} still stamped");
    }

    // After the fixup, the engine's permission sets are the only gate.
    let sender = TestSender::console(&ALL_PERMS);
    fixture.dispatcher.execute(&sender, "/images top").unwrap();
    assert_eq!(fixture.service.take(), [Call::Top]);
}
