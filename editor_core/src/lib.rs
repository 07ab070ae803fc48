#![no_std]

//! # Editor Core
//!
//! In-memory text editing primitives shared by every editor host.
//!
//! ## Philosophy
//!
//! - **No_std compatible**: Uses alloc but not std
//! - **Deterministic**: Same operation trace => same document state
//! - **Clamp, don't fail**: Out-of-range offsets are clamped or ignored, never errors
//! - **Value snapshots**: History entries are deep copies, never views into the live buffer
//!
//! ## Design
//!
//! The core provides:
//! - TextBuffer: Character-indexed text storage
//! - Selection: Half-open range with clamping rules
//! - Document: Buffer + cursor + selection + per-document History
//! - Clipboard: Last cut text, shared across documents by the host
//! - EditCommand: Typed operation set for scripted replay

extern crate alloc;

pub mod buffer;
pub mod clipboard;
pub mod command;
pub mod document;
pub mod history;
pub mod mode;
pub mod selection;
pub mod snapshot;

pub use buffer::TextBuffer;
pub use clipboard::Clipboard;
pub use command::{parse_command, CommandError, EditCommand};
pub use document::Document;
pub use history::History;
pub use mode::SelectionMode;
pub use selection::{clamp_cursor, Selection};
pub use snapshot::Snapshot;
