//! Static extension → language-tag lookup and default content stubs.
//!
//! Replaces per-extension control-flow switches with data so both directions
//! (editor mode selection and new-file stubs) stay testable in one place.

/// Language tag used when the extension is unknown or absent.
pub const PLAIN_TEXT: &str = "plain text";

/// Extension → language tag, sorted by extension.
const LANGUAGE_TABLE: &[(&str, &str)] = &[
    ("cpp", "cpp"),
    ("cs", "csharp"),
    ("css", "css"),
    ("html", "html"),
    ("java", "java"),
    ("js", "javascript"),
    ("json", "json"),
    ("md", "markdown"),
    ("php", "php"),
    ("py", "python"),
    ("rb", "ruby"),
    ("sql", "sql"),
    ("ts", "typescript"),
];

const HTML_STUB: &str = "<!DOCTYPE html>\n<html>\n<head>\n  <title>New Page</title>\n</head>\n<body>\n\n</body>\n</html>";

/// Returns the language tag for `path` based on its extension, falling back
/// to [`PLAIN_TEXT`].
pub fn language_for_path(path: &str) -> &'static str {
    let Some(extension) = extension_of(path) else {
        return PLAIN_TEXT;
    };

    LANGUAGE_TABLE
        .iter()
        .find(|(known, _)| *known == extension)
        .map_or(PLAIN_TEXT, |(_, tag)| tag)
}

/// Returns the default content stub for a newly created file at `path`.
///
/// Only markup, stylesheet, and script files get a stub; everything else
/// starts empty.
pub fn default_content(path: &str) -> String {
    match extension_of(path).as_deref() {
        Some("html") => HTML_STUB.to_string(),
        Some("css") => format!("/* Styles for {path} */"),
        Some("js") => format!("// JavaScript code for {path}"),
        _ => String::new(),
    }
}

/// Lowercased extension of `path`, or `None` when it has no `.` separator.
fn extension_of(path: &str) -> Option<String> {
    let (stem, extension) = path.rsplit_once('.')?;
    if stem.is_empty() {
        // Dotfiles like `.gitignore` have no extension.
        return None;
    }

    Some(extension.to_ascii_lowercase())
}
