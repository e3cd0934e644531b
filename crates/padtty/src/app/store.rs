use std::collections::BTreeMap;

use thiserror::Error;
use tracing::debug;

use crate::domain::entry::{Entry, EntryKind};

/// Recoverable workspace mutation failures.
///
/// Neither variant is fatal: `DuplicatePath` aborts the operation with the
/// store unchanged, and callers treat `NotFound` as a no-op.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum WorkspaceError {
    /// Create or rename targeted a path that is already taken.
    #[error("an entry named `{0}` already exists")]
    DuplicatePath(String),
    /// A mutation targeted a path with no entry.
    #[error("no entry named `{0}`")]
    NotFound(String),
}

/// In-memory store of workspace entries plus the active-file pointer.
///
/// Invariants: at most one entry per path, and the active pointer (when set)
/// always names an existing entry. Every mutation below either preserves both
/// or fails without touching the store.
pub struct WorkspaceStore {
    entries: BTreeMap<String, Entry>,
    active: Option<String>,
}

impl WorkspaceStore {
    /// Creates an empty store with no active file.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            active: None,
        }
    }

    /// Creates a new entry at `path`.
    ///
    /// When `content` is `None`, files receive the language-specific default
    /// stub for their extension.
    ///
    /// # Errors
    /// Returns [`WorkspaceError::DuplicatePath`] when `path` is already taken.
    pub fn create(
        &mut self,
        path: &str,
        kind: EntryKind,
        content: Option<String>,
    ) -> Result<&Entry, WorkspaceError> {
        if self.entries.contains_key(path) {
            return Err(WorkspaceError::DuplicatePath(path.to_string()));
        }

        let entry = Entry::new(path, kind, content);
        debug!(path, language = entry.language, "created workspace entry");

        Ok(self.entries.entry(path.to_string()).or_insert(entry))
    }

    /// Moves the entry at `old` to `new`, preserving content, kind, and
    /// language tag.
    ///
    /// When `old` is the active file, the active pointer moves to `new` in the
    /// same step; no intermediate cleared state is observable.
    ///
    /// # Errors
    /// Returns [`WorkspaceError::DuplicatePath`] when `new` is already taken,
    /// then [`WorkspaceError::NotFound`] when `old` has no entry.
    pub fn rename(&mut self, old: &str, new: &str) -> Result<(), WorkspaceError> {
        if self.entries.contains_key(new) {
            return Err(WorkspaceError::DuplicatePath(new.to_string()));
        }

        let mut entry = self
            .entries
            .remove(old)
            .ok_or_else(|| WorkspaceError::NotFound(old.to_string()))?;
        entry.path = new.to_string();
        self.entries.insert(new.to_string(), entry);

        if self.active.as_deref() == Some(old) {
            self.active = Some(new.to_string());
        }
        debug!(old, new, "renamed workspace entry");

        Ok(())
    }

    /// Removes and returns the entry at `path`.
    ///
    /// When `path` is the active file, the active pointer is cleared; the
    /// caller is responsible for resetting the editing surface.
    ///
    /// # Errors
    /// Returns [`WorkspaceError::NotFound`] when `path` has no entry.
    pub fn delete(&mut self, path: &str) -> Result<Entry, WorkspaceError> {
        let entry = self
            .entries
            .remove(path)
            .ok_or_else(|| WorkspaceError::NotFound(path.to_string()))?;

        if self.active.as_deref() == Some(path) {
            self.active = None;
        }
        debug!(path, "deleted workspace entry");

        Ok(entry)
    }

    /// Returns all entries, directories first, each group in lexicographic
    /// byte-wise path order.
    pub fn list(&self) -> Vec<&Entry> {
        let (directories, files): (Vec<&Entry>, Vec<&Entry>) =
            self.entries.values().partition(|entry| entry.is_dir());

        directories.into_iter().chain(files).collect()
    }

    /// Returns the entry at `path`, if any.
    pub fn get(&self, path: &str) -> Option<&Entry> {
        self.entries.get(path)
    }

    /// Returns the path of the active file, if any.
    pub fn active_file(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Points the active file at `path`.
    ///
    /// Returns `false` (leaving the pointer unchanged) when `path` has no
    /// entry, upholding the active-pointer invariant.
    pub(crate) fn set_active(&mut self, path: &str) -> bool {
        if !self.entries.contains_key(path) {
            return false;
        }

        self.active = Some(path.to_string());

        true
    }

    /// Replaces the content of the entry at `path`.
    ///
    /// # Errors
    /// Returns [`WorkspaceError::NotFound`] when `path` has no entry.
    pub fn update_content(&mut self, path: &str, content: String) -> Result<(), WorkspaceError> {
        let entry = self
            .entries
            .get_mut(path)
            .ok_or_else(|| WorkspaceError::NotFound(path.to_string()))?;
        entry.content = content;

        Ok(())
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the store has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for WorkspaceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(paths: &[&str]) -> WorkspaceStore {
        let mut store = WorkspaceStore::new();
        for path in paths {
            store
                .create(path, EntryKind::File, None)
                .expect("create failed");
        }

        store
    }

    #[test]
    fn test_create_duplicate_fails_and_keeps_single_entry() {
        // Arrange
        let mut store = store_with(&["x"]);

        // Act
        let result = store.create("x", EntryKind::File, None);

        // Assert
        assert_eq!(result, Err(WorkspaceError::DuplicatePath("x".to_string())));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_create_js_file_gets_script_stub_and_tag() {
        // Arrange
        let mut store = WorkspaceStore::new();

        // Act
        store
            .create("test.js", EntryKind::File, None)
            .expect("create failed");

        // Assert
        let entry = store.get("test.js").expect("entry missing");
        assert_eq!(entry.language, "javascript");
        assert_eq!(entry.content, "// JavaScript code for test.js");
    }

    #[test]
    fn test_rename_moves_entry_preserving_content() {
        // Arrange
        let mut store = WorkspaceStore::new();
        store
            .create("a.md", EntryKind::File, Some("# a".to_string()))
            .expect("create failed");

        // Act
        store.rename("a.md", "b.md").expect("rename failed");

        // Assert
        assert!(store.get("a.md").is_none());
        let moved = store.get("b.md").expect("entry missing");
        assert_eq!(moved.path, "b.md");
        assert_eq!(moved.content, "# a");
        assert_eq!(moved.language, "markdown");
    }

    #[test]
    fn test_rename_keeps_language_tag_across_extension_change() {
        // Arrange
        let mut store = store_with(&["app.js"]);

        // Act
        store.rename("app.js", "app.txt").expect("rename failed");

        // Assert
        assert_eq!(store.get("app.txt").expect("entry missing").language, "javascript");
    }

    #[test]
    fn test_rename_active_file_moves_pointer() {
        // Arrange
        let mut store = store_with(&["a.js", "b.js"]);
        assert!(store.set_active("a.js"));
        let content_before = store.get("a.js").expect("entry missing").content.clone();

        // Act
        store.rename("a.js", "c.js").expect("rename failed");

        // Assert
        assert_eq!(store.active_file(), Some("c.js"));
        assert_eq!(store.get("c.js").expect("entry missing").content, content_before);
    }

    #[test]
    fn test_rename_to_taken_path_fails_without_changes() {
        // Arrange
        let mut store = store_with(&["a.js", "b.js"]);

        // Act
        let result = store.rename("a.js", "b.js");

        // Assert
        assert_eq!(
            result,
            Err(WorkspaceError::DuplicatePath("b.js".to_string()))
        );
        assert!(store.get("a.js").is_some());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_rename_missing_entry_fails_not_found() {
        // Arrange
        let mut store = WorkspaceStore::new();

        // Act
        let result = store.rename("ghost.js", "real.js");

        // Assert
        assert_eq!(
            result,
            Err(WorkspaceError::NotFound("ghost.js".to_string()))
        );
    }

    #[test]
    fn test_delete_active_file_clears_pointer() {
        // Arrange
        let mut store = store_with(&["a.js"]);
        assert!(store.set_active("a.js"));

        // Act
        store.delete("a.js").expect("delete failed");

        // Assert
        assert_eq!(store.active_file(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_other_file_keeps_pointer() {
        // Arrange
        let mut store = store_with(&["a.js", "b.js"]);
        assert!(store.set_active("a.js"));

        // Act
        store.delete("b.js").expect("delete failed");

        // Assert
        assert_eq!(store.active_file(), Some("a.js"));
    }

    #[test]
    fn test_delete_missing_entry_fails_not_found() {
        // Arrange
        let mut store = WorkspaceStore::new();

        // Act
        let result = store.delete("ghost.js");

        // Assert
        assert_eq!(
            result,
            Err(WorkspaceError::NotFound("ghost.js".to_string()))
        );
    }

    #[test]
    fn test_list_orders_directories_before_files() {
        // Arrange
        let mut store = store_with(&["zeta.js", "alpha.js"]);
        store
            .create("vendor", EntryKind::Directory, None)
            .expect("create failed");
        store
            .create("assets", EntryKind::Directory, None)
            .expect("create failed");

        // Act
        let paths: Vec<&str> = store.list().iter().map(|entry| entry.path.as_str()).collect();

        // Assert
        assert_eq!(paths, vec!["assets", "vendor", "alpha.js", "zeta.js"]);
    }

    #[test]
    fn test_list_orders_within_group_byte_wise() {
        // Arrange
        let store = store_with(&["b.js", "B.js", "a.js"]);

        // Act
        let paths: Vec<&str> = store.list().iter().map(|entry| entry.path.as_str()).collect();

        // Assert: uppercase sorts before lowercase in ordinal order.
        assert_eq!(paths, vec!["B.js", "a.js", "b.js"]);
    }

    #[test]
    fn test_set_active_refuses_missing_path() {
        // Arrange
        let mut store = store_with(&["a.js"]);
        assert!(store.set_active("a.js"));

        // Act
        let accepted = store.set_active("ghost.js");

        // Assert
        assert!(!accepted);
        assert_eq!(store.active_file(), Some("a.js"));
    }

    #[test]
    fn test_mutation_sequence_never_duplicates_paths() {
        // Arrange
        let mut store = WorkspaceStore::new();

        // Act: create/rename/delete churn that revisits the same names.
        store.create("a", EntryKind::File, None).expect("create failed");
        store.create("b", EntryKind::File, None).expect("create failed");
        store.rename("a", "c").expect("rename failed");
        assert!(store.create("a", EntryKind::File, None).is_ok());
        assert!(store.rename("b", "c").is_err());
        store.delete("c").expect("delete failed");
        store.rename("b", "c").expect("rename failed");

        // Assert
        let paths: Vec<&str> = store.list().iter().map(|entry| entry.path.as_str()).collect();
        assert_eq!(paths, vec!["a", "c"]);
    }
}
