//! Named document registry
//!
//! The registry owns every document. The active one is held out of the
//! map so it can be edited in place; switching moves it back under its
//! name and moves the target out.

use editor_core::Document;
use std::collections::BTreeMap;
use std::mem;
use thiserror::Error;

/// Error types for registry operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A document with this name already exists
    #[error("Document already exists: {0}")]
    DuplicateName(String),

    /// No document with this name exists
    #[error("Document not found: {0}")]
    NotFound(String),
}

/// Registry result
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry of named documents with exactly one active entry
#[derive(Debug, Clone)]
pub struct DocumentRegistry {
    /// Inactive documents by name
    documents: BTreeMap<String, Document>,
    active_name: String,
    active: Document,
    history_limit: Option<usize>,
}

impl DocumentRegistry {
    /// Creates a registry whose only document is `initial`, active and empty
    pub fn new(initial: impl Into<String>) -> Self {
        Self::with_history_limit(initial, None)
    }

    /// Creates a registry whose documents keep at most `history_limit`
    /// undo entries
    pub fn with_history_limit(initial: impl Into<String>, history_limit: Option<usize>) -> Self {
        Self {
            documents: BTreeMap::new(),
            active_name: initial.into(),
            active: Document::with_history_limit(history_limit),
            history_limit,
        }
    }

    pub fn active_name(&self) -> &str {
        &self.active_name
    }

    pub fn active(&self) -> &Document {
        &self.active
    }

    pub fn active_mut(&mut self) -> &mut Document {
        &mut self.active
    }

    pub fn contains(&self, name: &str) -> bool {
        self.active_name == name || self.documents.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.documents.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// All document names in sorted order
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.documents.keys().cloned().collect();
        names.push(self.active_name.clone());
        names.sort();
        names
    }

    /// Looks up any document, active or not
    pub fn get(&self, name: &str) -> Option<&Document> {
        if self.active_name == name {
            Some(&self.active)
        } else {
            self.documents.get(name)
        }
    }

    /// Registers a fresh empty document without activating it
    pub fn create(&mut self, name: &str) -> RegistryResult<()> {
        if self.contains(name) {
            return Err(RegistryError::DuplicateName(name.to_string()));
        }

        self.documents.insert(
            name.to_string(),
            Document::with_history_limit(self.history_limit),
        );
        Ok(())
    }

    /// Makes `name` the active document
    ///
    /// The previously active document is stored under its own name with
    /// its content, cursor, selection and history intact.
    pub fn switch(&mut self, name: &str) -> RegistryResult<()> {
        if self.active_name == name {
            return Ok(());
        }

        let target = self
            .documents
            .remove(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;

        let previous = mem::replace(&mut self.active, target);
        let previous_name = mem::replace(&mut self.active_name, name.to_string());
        self.documents.insert(previous_name, previous);
        Ok(())
    }

    /// Content of every document keyed by name
    pub fn contents(&self) -> BTreeMap<String, String> {
        let mut contents: BTreeMap<String, String> = self
            .documents
            .iter()
            .map(|(name, doc)| (name.clone(), doc.content().to_string()))
            .collect();
        contents.insert(self.active_name.clone(), self.active.content().to_string());
        contents
    }
}

impl Default for DocumentRegistry {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_DOCUMENT_NAME)
    }
}
