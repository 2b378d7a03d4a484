// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapshots survive a trip through JSON and resume the same session.

#![cfg(feature = "serde")]

use kurbo::Size;
use ramify_editor::{Command, Direction, EditError, Editor, EditorConfig, Snapshot};
use ramify_tree::NodeId;

fn session() -> Editor {
    let mut editor = Editor::new("Central Topic", EditorConfig::default());
    let root = editor.store().root().clone();
    editor.apply(Command::InsertChild(root.clone())).unwrap();
    let a = editor.focus().unwrap().clone();
    editor
        .apply(Command::UpdateText(a.clone(), "Ideas".into()))
        .unwrap();
    editor.apply(Command::InsertChild(a.clone())).unwrap();
    editor.apply(Command::InsertSibling(a.clone())).unwrap();
    editor.apply(Command::SetFocus(a)).unwrap();
    editor
}

#[test]
fn json_round_trip_resumes_session() {
    let editor = session();
    let json = serde_json::to_string(&editor.snapshot()).unwrap();
    let snapshot: Snapshot = serde_json::from_str(&json).unwrap();
    let mut restored = Editor::restore(snapshot, EditorConfig::default()).unwrap();

    assert_eq!(restored.snapshot(), editor.snapshot());
    assert_eq!(restored.focus(), editor.focus());
    assert_eq!(restored.layout(), editor.layout());

    // New ids never collide with restored ones.
    let root = restored.store().root().clone();
    restored.apply(Command::InsertChild(root)).unwrap();
    assert_eq!(restored.store().len(), editor.store().len() + 1);
}

#[test]
fn ids_serialize_as_plain_strings() {
    let editor = Editor::new("Central Topic", EditorConfig::default());
    let value = serde_json::to_value(editor.snapshot()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "nodes": { "root": { "parent": null, "text": "Central Topic" } },
            "focus": "root",
        })
    );
}

#[test]
fn focus_is_optional_in_documents() {
    let json = r#"{
        "nodes": {
            "root": { "parent": null, "text": "Plans" },
            "n00000001": { "parent": "root", "text": "Travel" }
        }
    }"#;
    let snapshot: Snapshot = serde_json::from_str(json).unwrap();
    assert_eq!(snapshot.focus, None);
    let mut editor = Editor::restore(snapshot, EditorConfig::default()).unwrap();
    assert_eq!(editor.focus(), None);
    assert_eq!(editor.layout().len(), 2);

    let travel = NodeId::from("n00000001");
    editor
        .report_dimensions(&travel, Size::new(90.0, 30.0))
        .unwrap();
    editor
        .apply(Command::Navigate(travel, Direction::Left))
        .unwrap();
    assert_eq!(editor.focus().map(|id| id.as_str()), Some("root"));
}

#[test]
fn documents_with_two_roots_are_rejected() {
    let json = r#"{
        "nodes": {
            "a": { "parent": null, "text": "" },
            "b": { "parent": null, "text": "" }
        }
    }"#;
    let snapshot: Snapshot = serde_json::from_str(json).unwrap();
    let err = Editor::restore(snapshot, EditorConfig::default()).unwrap_err();
    assert!(matches!(err, EditError::Tree(_)));
    assert!(!err.is_recoverable());
}
