// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ramify Editor: a single mind-map editing session.
//!
//! [`Editor`] ties the pieces together the way an interactive front end drives them:
//!
//! - Input handling turns key presses into [`Command`]s and calls [`Editor::apply`].
//!   Each command mutates the [`NodeStore`](ramify_tree::NodeStore), moves focus, and
//!   recomputes the layout; the returned [`Changes`] tell the renderer what to redraw.
//! - The renderer draws [`Editor::layout`], measures the nodes it drew, and reports
//!   their sizes through [`Editor::report_dimensions`]. A report that moves a size by at
//!   least [`EditorConfig::dimension_tolerance`] triggers another layout pass; smaller
//!   ones are dropped so measurement jitter cannot keep the loop spinning.
//!
//! Everything is synchronous and runs to completion; the editor owns no timers,
//! callbacks or threads. Hosts call it from their own event loop.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use ramify_editor::{Changes, Command, Editor, EditorConfig};
//!
//! let mut editor = Editor::new("Central Topic", EditorConfig::default());
//! let root = editor.store().root().clone();
//!
//! let changes = editor.apply(Command::InsertChild(root)).unwrap();
//! assert!(changes.contains(Changes::STRUCTURE | Changes::FOCUS | Changes::LAYOUT));
//!
//! // The renderer measured the new node: lay out again with its real size.
//! let child = editor.focus().unwrap().clone();
//! assert!(editor.report_dimensions(&child, Size::new(120.0, 30.0)).unwrap());
//! // Jitter below the tolerance is ignored.
//! assert!(!editor.report_dimensions(&child, Size::new(120.5, 30.0)).unwrap());
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies.
//! - `libm`: `no_std` builds relying on `libm` for floating-point math.
//! - `serde` (default): `Serialize`/`Deserialize` for [`Snapshot`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod command;
mod config;
mod editor;
mod error;
mod snapshot;

pub use command::{Changes, Command};
pub use config::EditorConfig;
pub use editor::Editor;
pub use error::EditError;
pub use snapshot::Snapshot;

pub use ramify_focus::Direction;
