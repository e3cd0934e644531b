use crate::domain::language;

/// Whether an entry is a regular file or a directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// A single workspace record keyed by its path.
///
/// The path is unique across the store and doubles as the display name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// Unique path of the entry (e.g., `script.js`).
    pub path: String,
    /// File or directory.
    pub kind: EntryKind,
    /// Text buffer of the entry. Always empty for directories.
    pub content: String,
    /// Language tag derived from the path's extension at creation time.
    ///
    /// Deliberately not re-derived on rename: the original document keeps its
    /// editing mode until reopened.
    pub language: &'static str,
}

impl Entry {
    /// Creates an entry, deriving the language tag from the path and filling
    /// in the language-specific default stub when `content` is `None`.
    pub fn new(path: impl Into<String>, kind: EntryKind, content: Option<String>) -> Self {
        let path = path.into();
        let language = language::language_for_path(&path);
        let content = match kind {
            EntryKind::Directory => String::new(),
            EntryKind::File => content.unwrap_or_else(|| language::default_content(&path)),
        };

        Self {
            path,
            kind,
            content,
            language,
        }
    }

    /// Returns whether this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}
