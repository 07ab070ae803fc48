//! # Text Editor Service
//!
//! This crate implements the multi-document editing surface on top of
//! `editor_core`.
//!
//! ## Philosophy
//!
//! - **One active document**: Every edit goes to the active document
//! - **Owned state**: Switching moves documents in and out of the registry
//! - **Shared clipboard**: One clipboard for all documents, outside history
//! - **Errors are values**: Duplicate and missing names come back as `Result`
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A persistence layer (contents are exposed, never written to disk)
//! - A rich text or syntax-aware editor
//! - Safe for concurrent editors
//!
//! ## Design
//!
//! - `DocumentRegistry` owns every document plus the active key
//! - `TextEditor` orchestrates clipboard, registry and history
//! - `EditorConfig` carries JSON-backed editor settings
//! - `EditorStatus` is the serializable view handed to a UI

pub mod config;
pub mod editor;
pub mod registry;
pub mod status;

pub use config::{load_config_safe, ConfigError, EditorConfig};
pub use editor::{CommandOutcome, EditorError, EditorResult, TextEditor};
pub use registry::{DocumentRegistry, RegistryError, RegistryResult};
pub use status::EditorStatus;
