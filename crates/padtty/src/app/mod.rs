pub mod binding;
pub mod console;
pub mod dialog;
pub mod store;

use std::io;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::app::binding::EditorBinding;
use crate::app::dialog::DialogService;
use crate::app::store::{WorkspaceError, WorkspaceStore};
use crate::domain::entry::EntryKind;
use crate::infra::export::ExportSink;
use crate::infra::surface::{EditorSurface, Notifier, TreeSurface};
use crate::ui::tree;

const DUPLICATE_NOTICE: &str = "File already exists!";

const DEFAULT_HTML: &str = "<!DOCTYPE html>\n<html>\n<head>\n  <title>New Project</title>\n</head>\n<body>\n  <h1>Welcome!</h1>\n</body>\n</html>";
const DEFAULT_CSS: &str =
    "/* Your styles here */\n\nbody {\n  margin: 0;\n  padding: 20px;\n  font-family: Arial, sans-serif;\n}";
const DEFAULT_JS: &str = "// Your JavaScript code here\n\nconsole.log(\"Hello, World!\");";

/// Dependency-injected workspace orchestration.
///
/// Owns the store and editor binding, drives the dialog-backed mutation
/// flows, and pushes a fresh tree projection to the tree surface after every
/// mutation. `DuplicatePath` failures surface as transient notifications;
/// `NotFound` and cancelled dialogs are silent no-ops.
pub struct Workspace {
    binding: EditorBinding,
    notifier: Arc<dyn Notifier>,
    store: WorkspaceStore,
    tree: Arc<dyn TreeSurface>,
}

impl Workspace {
    /// Creates an empty workspace over the injected surfaces.
    pub fn new(
        editor: Arc<dyn EditorSurface>,
        tree: Arc<dyn TreeSurface>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            binding: EditorBinding::new(editor),
            notifier,
            store: WorkspaceStore::new(),
            tree,
        }
    }

    /// Seeds the stock starter files and draws the initial tree.
    pub fn seed_default_files(&mut self) {
        for (path, content) in [
            ("index.html", DEFAULT_HTML),
            ("styles.css", DEFAULT_CSS),
            ("script.js", DEFAULT_JS),
        ] {
            // The store is empty when seeding; duplicates cannot occur.
            let _ = self
                .store
                .create(path, EntryKind::File, Some(content.to_string()));
        }

        self.redraw_tree();
    }

    /// Prompts for a file name and creates the file.
    ///
    /// Returns the created path, or `None` when the user cancelled or the
    /// name was already taken (which is notified, not propagated). The new
    /// file becomes the active document, matching the original open-on-create
    /// behavior.
    pub async fn create_file(&mut self, dialog: &dyn DialogService) -> Option<String> {
        let name = dialog
            .prompt("Enter file name:".to_string(), String::new())
            .await?;

        if let Err(error) = self.store.create(&name, EntryKind::File, None) {
            warn!(%error, "create aborted");
            self.notifier.notify(DUPLICATE_NOTICE);
            return None;
        }

        self.redraw_tree();
        self.open_file(&name);

        Some(name)
    }

    /// Prompts for a new name and renames the entry at `path`.
    ///
    /// Returns whether a rename happened. Cancelling or re-entering the same
    /// name is a no-op; a taken name is notified; a vanished `path` is a
    /// silent no-op. The active pointer follows the rename inside the store.
    pub async fn rename_entry(&mut self, dialog: &dyn DialogService, path: &str) -> bool {
        let Some(new_name) = dialog
            .prompt("Enter new name:".to_string(), path.to_string())
            .await
        else {
            return false;
        };
        if new_name == path {
            return false;
        }

        match self.store.rename(path, &new_name) {
            Ok(()) => {
                self.redraw_tree();
                true
            }
            Err(error @ WorkspaceError::DuplicatePath(_)) => {
                warn!(%error, "rename aborted");
                self.notifier.notify(DUPLICATE_NOTICE);
                false
            }
            Err(WorkspaceError::NotFound(_)) => false,
        }
    }

    /// Asks for confirmation and deletes the entry at `path`.
    ///
    /// Returns whether a delete happened. Deleting the active document also
    /// resets the editing surface to empty content.
    pub async fn delete_entry(&mut self, dialog: &dyn DialogService, path: &str) -> bool {
        if !dialog.confirm(format!("Delete {path}?")).await {
            return false;
        }

        let was_active = self.store.active_file() == Some(path);
        if self.store.delete(path).is_err() {
            return false;
        }

        if was_active {
            self.binding.reset();
        }
        self.redraw_tree();

        true
    }

    /// Opens `path` in the editing surface and redraws the tree.
    ///
    /// Unknown paths are a silent no-op.
    pub fn open_file(&mut self, path: &str) {
        self.binding.activate(&mut self.store, path);
        self.redraw_tree();
        debug!(path, "opened file");
    }

    /// Flushes the editing surface into the active entry.
    pub fn save_active(&mut self) {
        self.binding.flush(&mut self.store);
    }

    /// Reformats the active document in the editing surface.
    pub fn format_active(&self) {
        if self.store.active_file().is_some() {
            self.binding.format();
        }
    }

    /// Exports the entry at `path` through `sink`.
    ///
    /// Unknown paths are a silent no-op.
    ///
    /// # Errors
    /// Returns an error when the sink fails to produce the artifact.
    pub fn export_entry(&self, path: &str, sink: &dyn ExportSink) -> io::Result<()> {
        let Some(entry) = self.store.get(path) else {
            return Ok(());
        };

        sink.export(&entry.path, &entry.content)
    }

    /// Returns the workspace store.
    pub fn store(&self) -> &WorkspaceStore {
        &self.store
    }

    /// Returns the workspace store for direct, non-dialog mutations.
    pub fn store_mut(&mut self) -> &mut WorkspaceStore {
        &mut self.store
    }

    /// Returns the editor binding.
    pub fn binding(&self) -> &EditorBinding {
        &self.binding
    }

    fn redraw_tree(&self) {
        self.tree.render(&tree::rows(&self.store.list()));
    }
}
