//! Registration specs
//!
//! Verify duplicate collapsing, removal by identity, and handle
//! behavior.

use crate::prelude::*;
use serde_json::Value;
use std::rc::Rc;
use treecast_core::{Broadcaster, Handler, ReceiveOptions};

#[test]
fn duplicate_registration_collapses_to_one_listener() {
    let bus = Broadcaster::new();
    let recorder = Recorder::new();
    let handler = recorder.handler("h");

    bus.subscribe("t", handler.clone(), ReceiveOptions::default(), None);
    bus.subscribe("t", handler, ReceiveOptions::default(), None);

    bus.publish("t", &Value::Null, None);

    assert_eq!(recorder.len(), 1);
    assert_eq!(bus.listener_count("t"), 1);
}

#[test]
fn unsubscribe_handle_equals_direct_removal() {
    let bus = Broadcaster::new();
    let recorder = Recorder::new();

    let via_handle = recorder.handler("via-handle");
    let direct = recorder.handler("direct");

    let handle = bus.subscribe("t", via_handle, ReceiveOptions::default(), None);
    bus.subscribe("t", direct.clone(), ReceiveOptions::default(), None);

    handle.unsubscribe();
    bus.unsubscribe("t", &direct);

    bus.publish("t", &Value::Null, None);
    assert!(recorder.is_empty());
    assert!(bus.event_types().is_empty());
}

#[test]
fn removing_an_unknown_handler_changes_nothing() {
    let bus = Broadcaster::new();
    let recorder = Recorder::new();

    bus.subscribe("t", recorder.handler("kept"), ReceiveOptions::default(), None);

    let never_registered: Handler = Rc::new(|_| Ok(()));
    bus.unsubscribe("t", &never_registered);
    bus.unsubscribe("unrelated", &never_registered);

    bus.publish("t", &Value::Null, None);
    assert_eq!(recorder.labels(), vec!["kept"]);
}

#[test]
fn event_entries_disappear_with_their_last_listener() {
    let bus = Broadcaster::new();
    let recorder = Recorder::new();
    let handler = recorder.handler("h");

    bus.subscribe("alpha", handler.clone(), ReceiveOptions::default(), None);
    bus.subscribe("beta", handler.clone(), ReceiveOptions::default(), None);

    let mut types = bus.event_types();
    types.sort();
    assert_eq!(types, vec!["alpha".to_string(), "beta".to_string()]);

    bus.unsubscribe("alpha", &handler);
    assert_eq!(bus.event_types(), vec!["beta".to_string()]);
}
