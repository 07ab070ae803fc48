//! Main editor implementation

use crate::config::EditorConfig;
use crate::registry::{DocumentRegistry, RegistryError, RegistryResult};
use crate::status::EditorStatus;
use editor_core::{parse_command, Clipboard, CommandError, Document, EditCommand, Selection};
use std::collections::BTreeMap;
use thiserror::Error;

/// Editor error
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Command error: {0}")]
    Command(CommandError),
}

impl From<CommandError> for EditorError {
    fn from(err: CommandError) -> Self {
        EditorError::Command(err)
    }
}

/// Editor result
pub type EditorResult<T> = Result<T, EditorError>;

/// Result of executing one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Content of the active document after the command
    Content(String),
    /// Cursor position after a move
    CursorMoved(usize),
    /// Selection after a select request
    Selection(Option<Selection>),
    /// A document was created and activated
    DocumentCreated(String),
}

/// Multi-document text editor
///
/// All editing operations act on the active document and return its full
/// content. Out-of-range positions are clamped or ignored, never errors.
pub struct TextEditor {
    registry: DocumentRegistry,
    clipboard: Clipboard,
}

impl TextEditor {
    /// Create an editor with one empty document
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        tracing::debug!(
            document = %config.default_document,
            history_limit = ?config.history_limit,
            "creating editor"
        );
        Self {
            registry: DocumentRegistry::with_history_limit(
                config.default_document,
                config.history_limit,
            ),
            clipboard: Clipboard::new(),
        }
    }

    // Public accessors for rendering/testing
    pub fn document(&self) -> &Document {
        self.registry.active()
    }

    pub fn registry(&self) -> &DocumentRegistry {
        &self.registry
    }

    pub fn content(&self) -> String {
        self.document().content().to_string()
    }

    pub fn cursor(&self) -> usize {
        self.document().cursor()
    }

    pub fn selection(&self) -> Option<Selection> {
        self.document().selection()
    }

    pub fn clipboard(&self) -> &str {
        self.clipboard.contents()
    }

    pub fn active_document(&self) -> &str {
        self.registry.active_name()
    }

    pub fn document_names(&self) -> Vec<String> {
        self.registry.names()
    }

    pub fn can_undo(&self) -> bool {
        self.document().history().can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.document().history().can_redo()
    }

    /// Content of a named document, active or not
    pub fn document_content(&self, name: &str) -> Option<String> {
        self.registry.get(name).map(|doc| doc.content().to_string())
    }

    /// Content of every document keyed by name
    pub fn export_documents(&self) -> BTreeMap<String, String> {
        self.registry.contents()
    }

    pub fn status(&self) -> EditorStatus {
        let doc = self.document();
        EditorStatus {
            document: self.registry.active_name().to_string(),
            content: doc.content().to_string(),
            cursor: doc.cursor(),
            selection: doc.selection(),
            mode: doc.mode(),
            clipboard: self.clipboard.contents().to_string(),
            undo_depth: doc.history().undo_depth(),
            redo_depth: doc.history().redo_depth(),
        }
    }

    // Editing

    /// Type `value` at the cursor, or over the selection
    pub fn append(&mut self, value: &str) -> String {
        self.registry.active_mut().append(value);
        self.log_edit("append");
        self.content()
    }

    /// Delete the selection, or the character at the cursor
    pub fn delete(&mut self) -> String {
        self.registry.active_mut().delete();
        self.log_edit("delete");
        self.content()
    }

    /// Move the cursor (clamped) and clear the selection
    pub fn move_cursor(&mut self, position: isize) {
        self.registry.active_mut().move_to(position);
    }

    /// Select `[left, right)`; invalid requests are ignored
    pub fn select(&mut self, left: isize, right: isize) {
        if !self.registry.active_mut().select(left, right) {
            tracing::debug!(left, right, "selection request ignored");
        }
    }

    /// Move the selected text into the clipboard
    ///
    /// The clipboard is emptied first, so cutting without a selection
    /// leaves it empty and the document untouched.
    pub fn cut(&mut self) -> String {
        self.clipboard.clear();
        match self.document().selected_text() {
            Some(text) => {
                self.clipboard.set(text);
                self.delete()
            }
            None => self.content(),
        }
    }

    /// Type the clipboard contents, even when empty
    pub fn paste(&mut self) -> String {
        let text = self.clipboard.contents().to_string();
        self.append(&text)
    }

    pub fn undo(&mut self) -> String {
        if self.registry.active_mut().undo() {
            self.log_edit("undo");
        }
        self.content()
    }

    pub fn redo(&mut self) -> String {
        if self.registry.active_mut().redo() {
            self.log_edit("redo");
        }
        self.content()
    }

    // Documents

    /// Create an empty document and make it active
    pub fn create_document(&mut self, name: &str) -> RegistryResult<()> {
        if let Err(err) = self.registry.create(name) {
            tracing::warn!(document = name, error = %err, "create rejected");
            return Err(err);
        }
        self.registry.switch(name)?;
        tracing::debug!(document = name, "created document");
        Ok(())
    }

    /// Make an existing document active and return its content
    pub fn switch_document(&mut self, name: &str) -> RegistryResult<String> {
        let previous = self.registry.active_name().to_string();
        if let Err(err) = self.registry.switch(name) {
            tracing::warn!(document = name, error = %err, "switch rejected");
            return Err(err);
        }
        tracing::debug!(from = %previous, to = name, "switched document");
        Ok(self.content())
    }

    // Command replay

    /// Apply one typed command
    pub fn execute(&mut self, command: EditCommand) -> EditorResult<CommandOutcome> {
        let outcome = match command {
            EditCommand::Append(text) => CommandOutcome::Content(self.append(&text)),
            EditCommand::Move(pos) => {
                self.move_cursor(pos);
                CommandOutcome::CursorMoved(self.cursor())
            }
            EditCommand::Delete => CommandOutcome::Content(self.delete()),
            EditCommand::Select { left, right } => {
                self.select(left, right);
                CommandOutcome::Selection(self.selection())
            }
            EditCommand::Cut => CommandOutcome::Content(self.cut()),
            EditCommand::Paste => CommandOutcome::Content(self.paste()),
            EditCommand::Undo => CommandOutcome::Content(self.undo()),
            EditCommand::Redo => CommandOutcome::Content(self.redo()),
            EditCommand::CreateDocument(name) => {
                self.create_document(&name)?;
                CommandOutcome::DocumentCreated(name)
            }
            EditCommand::SwitchDocument(name) => CommandOutcome::Content(self.switch_document(&name)?),
        };
        Ok(outcome)
    }

    /// Parse and apply one command line
    pub fn execute_line(&mut self, line: &str) -> EditorResult<CommandOutcome> {
        let command = parse_command(line)?;
        self.execute(command)
    }

    fn log_edit(&self, op: &'static str) {
        let doc = self.document();
        tracing::debug!(
            op,
            document = %self.registry.active_name(),
            len = doc.len(),
            cursor = doc.cursor(),
            undo_depth = doc.history().undo_depth(),
            "edit applied"
        );
    }
}

impl Default for TextEditor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn test_new_editor() {
        let editor = TextEditor::new();
        assert_eq!(editor.content(), "");
        assert_eq!(editor.cursor(), 0);
        assert_eq!(editor.active_document(), "untitled");
        assert!(!editor.can_undo());
        assert!(!editor.can_redo());
    }

    #[test]
    fn test_cut_without_selection_empties_clipboard() {
        let mut editor = TextEditor::new();
        editor.append("Lorem");
        editor.select(0, 2);
        editor.cut();
        assert_eq!(editor.clipboard(), "Lo");

        let depth = editor.status().undo_depth;
        assert_eq!(editor.cut(), "rem");
        assert_eq!(editor.clipboard(), "");
        assert_eq!(editor.status().undo_depth, depth);
    }

    #[test]
    fn test_paste_empty_clipboard_records_history() {
        let mut editor = TextEditor::new();
        editor.append("abc");
        assert_eq!(editor.paste(), "abc");
        assert_eq!(editor.status().undo_depth, 3);
    }

    #[test]
    fn test_clipboard_shared_across_documents() {
        let mut editor = TextEditor::new();
        editor.append("shared");
        editor.select(0, 6);
        editor.cut();
        editor.create_document("other").unwrap();
        assert_eq!(editor.paste(), "shared");
    }

    #[test]
    fn test_undo_does_not_restore_clipboard() {
        let mut editor = TextEditor::new();
        editor.append("Lorem");
        editor.select(0, 3);
        editor.cut();
        assert_eq!(editor.undo(), "Lorem");
        assert_eq!(editor.clipboard(), "Lor");
    }

    #[test]
    fn test_create_document_activates() {
        let mut editor = TextEditor::new();
        editor.append("first");
        editor.create_document("second").unwrap();
        assert_eq!(editor.active_document(), "second");
        assert_eq!(editor.content(), "");
        assert_eq!(editor.document_content("untitled").as_deref(), Some("first"));
    }

    #[test]
    fn test_document_errors() {
        let mut editor = TextEditor::new();
        assert_eq!(
            editor.create_document("untitled"),
            Err(RegistryError::DuplicateName("untitled".into()))
        );
        assert_eq!(
            editor.switch_document("nope"),
            Err(RegistryError::NotFound("nope".into()))
        );
    }

    #[test]
    fn test_execute_commands() {
        let mut editor = TextEditor::new();
        assert_eq!(
            editor.execute_line("append Lorem").unwrap(),
            CommandOutcome::Content("Lorem".into())
        );
        assert_eq!(
            editor.execute_line("move 99").unwrap(),
            CommandOutcome::CursorMoved(5)
        );
        assert_eq!(
            editor.execute_line("select 0 3").unwrap(),
            CommandOutcome::Selection(Some(Selection { start: 0, end: 3 }))
        );
        assert_eq!(
            editor.execute_line("cut").unwrap(),
            CommandOutcome::Content("em".into())
        );
        assert_eq!(
            editor.execute_line("create notes").unwrap(),
            CommandOutcome::DocumentCreated("notes".into())
        );
        assert_eq!(
            editor.execute_line("switch untitled").unwrap(),
            CommandOutcome::Content("em".into())
        );
    }

    #[test]
    fn test_execute_errors() {
        let mut editor = TextEditor::new();
        assert!(matches!(
            editor.execute_line("jump 3"),
            Err(EditorError::Command(CommandError::Unknown(_)))
        ));
        assert!(matches!(
            editor.execute_line("switch ghost"),
            Err(EditorError::Registry(RegistryError::NotFound(_)))
        ));
    }

    #[test]
    fn test_with_config() {
        let config = EditorConfig::new()
            .with_default_document("scratch")
            .with_history_limit(1);
        let mut editor = TextEditor::with_config(config);
        assert_eq!(editor.active_document(), "scratch");

        editor.append("a");
        editor.append("b");
        assert_eq!(editor.undo(), "a");
        assert_eq!(editor.undo(), "a");
    }

    #[test]
    #[traced_test]
    fn test_edits_are_logged() {
        let mut editor = TextEditor::new();
        editor.append("Lorem");
        assert!(logs_contain("edit applied"));
        assert!(logs_contain("append"));
    }

    #[test]
    #[traced_test]
    fn test_rejected_switch_is_logged() {
        let mut editor = TextEditor::new();
        let _ = editor.switch_document("missing");
        assert!(logs_contain("switch rejected"));
    }
}
