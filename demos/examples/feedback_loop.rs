// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The measure → re-layout loop with a fake renderer.
//!
//! A real front end draws each node, measures it, and reports the size back. Here the
//! "renderer" derives a size from the text length and adds a little jitter, so you can
//! watch reports being accepted at first and dropped once sizes settle.
//!
//! Run:
//! - `RUST_LOG=ramify_editor=debug cargo run -p ramify_demos --example feedback_loop`

use kurbo::Size;
use ramify_editor::{Changes, Command, Direction, Editor, EditorConfig};
use ramify_tree::NodeId;
use tracing_subscriber::EnvFilter;

/// Pretend text shaping: eight units per character plus padding, with `jitter` added.
fn measure(text: &str, jitter: f64) -> Size {
    let chars = text.chars().count() as f64;
    Size::new((chars * 8.0 + 24.0).max(60.0) + jitter, 30.0 + jitter)
}

/// Draw every laid-out node and report its size. Returns how many reports were accepted.
fn render(editor: &mut Editor, jitter: f64) -> usize {
    let drawn: Vec<(NodeId, Size)> = editor
        .layout()
        .nodes
        .iter()
        .map(|placed| {
            let text = editor.store().text(&placed.id).unwrap_or_default();
            (placed.id.clone(), measure(text, jitter))
        })
        .collect();
    let mut accepted = 0;
    for (id, size) in drawn {
        match editor.report_dimensions(&id, size) {
            Ok(true) => accepted += 1,
            Ok(false) => {}
            Err(err) => tracing::error!(%err, "layout failed"),
        }
    }
    accepted
}

fn apply(editor: &mut Editor, command: Command) -> Changes {
    match editor.apply(command) {
        Ok(changes) => changes,
        Err(err) if err.is_recoverable() => {
            tracing::warn!(%err, "ignored command");
            Changes::empty()
        }
        Err(err) => {
            tracing::error!(%err, "command failed");
            Changes::empty()
        }
    }
}

fn focused(editor: &Editor) -> NodeId {
    editor
        .focus()
        .cloned()
        .unwrap_or_else(|| editor.store().root().clone())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut editor = Editor::new("Weekend plans", EditorConfig::default());
    let root = editor.store().root().clone();

    for topic in ["Hiking", "Groceries", "Call grandparents"] {
        apply(&mut editor, Command::InsertSibling(root.clone()));
        let id = focused(&editor);
        apply(&mut editor, Command::UpdateText(id, topic.into()));
    }
    apply(&mut editor, Command::Navigate(root.clone(), Direction::Right));
    let hiking = focused(&editor);
    for item in ["Boots", "Water"] {
        apply(&mut editor, Command::InsertChild(hiking.clone()));
        let id = focused(&editor);
        apply(&mut editor, Command::UpdateText(id, item.into()));
    }

    // First frame: every node changes from the default size.
    let accepted = render(&mut editor, 0.0);
    tracing::info!(accepted, "first frame");
    // Later frames only wobble by subpixel amounts and settle immediately.
    for (frame, jitter) in [0.4, -0.7, 1.2].into_iter().enumerate() {
        let accepted = render(&mut editor, jitter);
        tracing::info!(frame = frame + 2, accepted, "next frame");
    }

    // Renaming grows a node; the next frame picks up the new width.
    apply(
        &mut editor,
        Command::UpdateText(hiking.clone(), "Hiking at the lake".into()),
    );
    let accepted = render(&mut editor, 0.0);
    tracing::info!(accepted, "after rename");

    for placed in &editor.layout().nodes {
        println!(
            "{indent}{text:<24} at ({x:>6.1}, {y:>6.1})  {w:>5.1} x {h:>4.1}",
            indent = "  ".repeat(placed.depth),
            text = editor.store().text(&placed.id).unwrap_or_default(),
            x = placed.x(),
            y = placed.y(),
            w = placed.width(),
            h = placed.height(),
        );
    }
    let bounds = editor.layout().bounds;
    println!("canvas: {:.1} x {:.1}", bounds.width, bounds.height);

    match serde_json::to_string_pretty(&editor.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(err) => tracing::error!(%err, "snapshot serialization failed"),
    }
}
