use std::sync::Arc;

use crate::app::store::WorkspaceStore;
use crate::infra::surface::EditorSurface;

/// Synchronizes the store's active entry with the editing surface.
///
/// Activation pushes store state into the surface; flushing pulls surface
/// state back into the store. Flushes are explicit; callers decide when a
/// document is worth persisting, nothing happens per keystroke.
pub struct EditorBinding {
    surface: Arc<dyn EditorSurface>,
}

impl EditorBinding {
    /// Creates a binding over the injected editing surface.
    pub fn new(surface: Arc<dyn EditorSurface>) -> Self {
        Self { surface }
    }

    /// Makes `path` the active file and loads it into the surface.
    ///
    /// Sets the surface's language mode first so highlighting matches the
    /// incoming content. When `path` has no entry this is a no-op and the
    /// current active file is unchanged.
    pub fn activate(&self, store: &mut WorkspaceStore, path: &str) {
        let Some(entry) = store.get(path) else {
            return;
        };
        let language = entry.language;
        let content = entry.content.clone();

        store.set_active(path);
        self.surface.set_language(language);
        self.surface.set_value(&content);
    }

    /// Writes the current surface content into the active entry.
    ///
    /// No-op when no file is active.
    pub fn flush(&self, store: &mut WorkspaceStore) {
        let Some(path) = store.active_file().map(str::to_string) else {
            return;
        };

        let value = self.surface.get_value();
        // The active pointer always names an existing entry.
        let _ = store.update_content(&path, value);
    }

    /// Resets the surface to empty content.
    ///
    /// Used after the active entry is deleted out from under the surface.
    pub fn reset(&self) {
        self.surface.set_value("");
    }

    /// Asks the surface to reformat the current document.
    pub fn format(&self) {
        self.surface.run_format();
    }

    /// Returns the bound editing surface.
    pub fn surface(&self) -> &Arc<dyn EditorSurface> {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::EntryKind;
    use crate::infra::buffer::BufferEditorSurface;
    use crate::infra::surface::MockEditorSurface;

    fn store_with_script() -> WorkspaceStore {
        let mut store = WorkspaceStore::new();
        store
            .create("script.js", EntryKind::File, Some("let a = 1;".to_string()))
            .expect("create failed");

        store
    }

    #[test]
    fn test_activate_pushes_language_then_content() {
        // Arrange
        let mut store = store_with_script();
        let mut surface = MockEditorSurface::new();
        let mut sequence = mockall::Sequence::new();
        surface
            .expect_set_language()
            .withf(|tag| tag == "javascript")
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_| ());
        surface
            .expect_set_value()
            .withf(|text| text == "let a = 1;")
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_| ());
        let binding = EditorBinding::new(Arc::new(surface));

        // Act
        binding.activate(&mut store, "script.js");

        // Assert
        assert_eq!(store.active_file(), Some("script.js"));
    }

    #[test]
    fn test_activate_missing_path_is_noop() {
        // Arrange
        let mut store = store_with_script();
        store.set_active("script.js");
        let surface = MockEditorSurface::new();
        let binding = EditorBinding::new(Arc::new(surface));

        // Act
        binding.activate(&mut store, "ghost.js");

        // Assert: no surface calls expected, active file untouched.
        assert_eq!(store.active_file(), Some("script.js"));
    }

    #[test]
    fn test_flush_writes_surface_content_into_active_entry() {
        // Arrange
        let mut store = store_with_script();
        let surface = Arc::new(BufferEditorSurface::new());
        let binding = EditorBinding::new(surface.clone());
        binding.activate(&mut store, "script.js");
        surface.set_value("let a = 2;");

        // Act
        binding.flush(&mut store);

        // Assert
        assert_eq!(
            store.get("script.js").expect("entry missing").content,
            "let a = 2;"
        );
    }

    #[test]
    fn test_flush_without_active_file_is_noop() {
        // Arrange
        let mut store = store_with_script();
        let surface = MockEditorSurface::new();
        let binding = EditorBinding::new(Arc::new(surface));

        // Act & Assert: would panic on an unexpected get_value call.
        binding.flush(&mut store);
        assert_eq!(
            store.get("script.js").expect("entry missing").content,
            "let a = 1;"
        );
    }

    #[test]
    fn test_reset_clears_surface() {
        // Arrange
        let surface = Arc::new(BufferEditorSurface::new());
        surface.set_value("leftover");
        let binding = EditorBinding::new(surface.clone());

        // Act
        binding.reset();

        // Assert
        assert_eq!(surface.get_value(), "");
    }
}
