use std::fmt;

use crate::domain::entry::EntryKind;

/// Glyphs used for workspace tree rows.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FileIcon {
    /// Structured data files (json).
    Data,
    /// Directory entries.
    Directory,
    /// Prose documents (md).
    Doc,
    /// Fallback for unrecognized files.
    File,
    /// Markup files (html).
    Markup,
    /// Script files (js).
    Script,
    /// Stylesheet files (css).
    Stylesheet,
}

/// Extension → icon, sorted by extension.
const ICON_TABLE: &[(&str, FileIcon)] = &[
    ("css", FileIcon::Stylesheet),
    ("html", FileIcon::Markup),
    ("js", FileIcon::Script),
    ("json", FileIcon::Data),
    ("md", FileIcon::Doc),
];

impl FileIcon {
    /// Selects the icon for an entry of `kind` at `path`.
    pub fn for_entry(kind: EntryKind, path: &str) -> Self {
        if kind == EntryKind::Directory {
            return FileIcon::Directory;
        }

        let Some((_, extension)) = path.rsplit_once('.') else {
            return FileIcon::File;
        };
        let extension = extension.to_ascii_lowercase();

        ICON_TABLE
            .iter()
            .find(|(known, _)| *known == extension)
            .map_or(FileIcon::File, |(_, icon)| *icon)
    }

    /// Returns the string representation of the icon.
    pub fn as_str(self) -> &'static str {
        match self {
            FileIcon::Data => "{}",
            FileIcon::Directory => "▸",
            FileIcon::Doc => "¶",
            FileIcon::File => "·",
            FileIcon::Markup => "<>",
            FileIcon::Script => "ƒ",
            FileIcon::Stylesheet => "#",
        }
    }
}

impl fmt::Display for FileIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_entry_maps_known_extensions() {
        // Arrange & Act & Assert
        assert_eq!(
            FileIcon::for_entry(EntryKind::File, "index.html"),
            FileIcon::Markup
        );
        assert_eq!(
            FileIcon::for_entry(EntryKind::File, "styles.css"),
            FileIcon::Stylesheet
        );
        assert_eq!(
            FileIcon::for_entry(EntryKind::File, "script.js"),
            FileIcon::Script
        );
        assert_eq!(
            FileIcon::for_entry(EntryKind::File, "data.json"),
            FileIcon::Data
        );
        assert_eq!(
            FileIcon::for_entry(EntryKind::File, "README.md"),
            FileIcon::Doc
        );
    }

    #[test]
    fn test_for_entry_prefers_directory_over_extension() {
        // Arrange & Act & Assert
        assert_eq!(
            FileIcon::for_entry(EntryKind::Directory, "assets.css"),
            FileIcon::Directory
        );
    }

    #[test]
    fn test_for_entry_falls_back_to_file() {
        // Arrange & Act & Assert
        assert_eq!(
            FileIcon::for_entry(EntryKind::File, "Makefile"),
            FileIcon::File
        );
    }
}
