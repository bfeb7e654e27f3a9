//! Scope lifecycle specs
//!
//! Verify that teardown releases every listener a scope registered.

use crate::prelude::*;
use serde_json::json;
use treecast_core::{default_key, ReceiveOptions, Scope};

#[test]
fn dispose_releases_every_listener_the_scope_registered() {
    let key = default_key();
    let root = Scope::root();
    let host = root.provide(&key);
    let widget = root.child();

    let recorder = Recorder::new();
    widget.receive(&key, "open", recorder.handler("open"), ReceiveOptions::default());
    widget.receive(&key, "close", recorder.handler("close"), ReceiveOptions::default());
    widget.receive(
        &key,
        "move",
        recorder.handler("move"),
        ReceiveOptions::default().once(),
    );

    widget.dispose();

    host.broadcast("open", &json!(1));
    host.broadcast("close", &json!(1));
    host.broadcast("move", &json!(1));

    assert!(recorder.is_empty());
    assert!(host.broadcaster().event_types().is_empty());
}

#[test]
fn dropping_a_scope_is_equivalent_to_disposing_it() {
    let key = default_key();
    let root = Scope::root();
    let host = root.provide(&key);

    let recorder = Recorder::new();
    {
        let widget = root.child();
        widget.receive(&key, "evt", recorder.handler("w"), ReceiveOptions::default());
    }

    host.broadcast("evt", &json!(1));
    assert!(recorder.is_empty());
}

#[test]
fn surviving_scopes_keep_their_listeners() {
    let key = default_key();
    let root = Scope::root();
    let host = root.provide(&key);

    let stays = root.child();
    let goes = root.child();

    let recorder = Recorder::new();
    stays.receive(&key, "evt", recorder.handler("stays"), ReceiveOptions::default());
    goes.receive(&key, "evt", recorder.handler("goes"), ReceiveOptions::default());

    goes.dispose();
    host.broadcast("evt", &json!(1));

    assert_eq!(recorder.labels(), vec!["stays"]);
}

#[test]
fn host_channel_with_exclude_self_only_hears_descendants() {
    let key = default_key();
    let root = Scope::root();
    let host = root.provide(&key);
    let child = root.child();

    let recorder = Recorder::new();
    host.receive(
        "evt",
        recorder.handler("host"),
        ReceiveOptions::default().exclude_self(),
    );

    host.broadcast("evt", &json!("self"));
    assert!(recorder.is_empty());

    child.broadcast(&key, "evt", &json!("child"));
    assert_eq!(recorder.payloads_for("host"), vec![json!("child")]);
}
