//! External surface capabilities consumed by the workspace core.
//!
//! The rich editing widget, terminal widget, tree widget, and toast area are
//! collaborators owned by the embedding UI. The core only ever talks to these
//! traits, so production wires up real widgets while tests inject mocks.

use crate::ui::tree::TreeRow;

/// Text-editing surface bound to the active document.
///
/// Syntax highlighting, autocompletion, and formatting live behind this
/// boundary; the core only pulls and pushes the document value and mode.
#[cfg_attr(test, mockall::automock)]
pub trait EditorSurface: Send + Sync {
    /// Returns the current surface content.
    fn get_value(&self) -> String;

    /// Replaces the surface content.
    fn set_value(&self, text: &str);

    /// Switches the surface's language mode.
    fn set_language(&self, tag: &str);

    /// Asks the surface to reformat the current document.
    fn run_format(&self);
}

/// Line-oriented terminal output surface.
#[cfg_attr(test, mockall::automock)]
pub trait TerminalSurface: Send + Sync {
    /// Writes `text` without a trailing line break.
    fn write(&self, text: &str);

    /// Writes `text` followed by a line break.
    fn writeln(&self, text: &str);

    /// Clears the terminal screen.
    fn clear(&self);
}

/// Renders the projected workspace tree.
///
/// The projection in [`crate::ui::tree`] owns ordering and icon selection;
/// implementations only draw the rows they are handed.
#[cfg_attr(test, mockall::automock)]
pub trait TreeSurface: Send + Sync {
    /// Replaces the rendered tree with `rows`.
    fn render(&self, rows: &[TreeRow]);
}

/// Transient, non-blocking user notification (a toast).
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// Shows `message` briefly without interrupting the caller flow.
    fn notify(&self, message: &str);
}
