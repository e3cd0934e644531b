use std::io::{self, Write};
use std::sync::Arc;

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode};

use crate::infra::surface::{Notifier, TerminalSurface, TreeSurface};
use crate::ui::tree::TreeRow;

/// Restores terminal state on all exit paths after raw mode is enabled.
///
/// The run loop uses `?` after entering raw mode; without this guard an early
/// return can leave the user's shell in a broken state. Keeping cleanup in
/// `Drop` guarantees restore runs during normal exit, runtime errors, and
/// unwinding panics.
pub(crate) struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = stdout.write_all(b"\r\n");
        let _ = stdout.flush();
    }
}

/// Enables raw mode so key events arrive unbuffered.
pub(crate) fn enter_raw_mode() -> io::Result<()> {
    enable_raw_mode()
}

/// Terminal surface writing straight to stdout.
///
/// Uses `\r\n` line breaks so output renders identically in cooked and raw
/// mode. Write failures to a closed stdout are ignored; there is nowhere
/// left to report them.
pub struct ConsoleSurface;

impl ConsoleSurface {
    /// Creates a stdout-backed surface.
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalSurface for ConsoleSurface {
    fn write(&self, text: &str) {
        let mut stdout = io::stdout();
        let _ = stdout.write_all(text.as_bytes());
        let _ = stdout.flush();
    }

    fn writeln(&self, text: &str) {
        self.write(text);
        self.write("\r\n");
    }

    fn clear(&self) {
        let _ = execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0));
    }
}

impl Notifier for ConsoleSurface {
    fn notify(&self, message: &str) {
        self.writeln(&format!("! {message}"));
    }
}

/// Tree surface printing one line per row to the console.
pub struct ConsoleTree {
    console: Arc<ConsoleSurface>,
}

impl ConsoleTree {
    /// Creates a tree surface sharing the console output.
    pub fn new(console: Arc<ConsoleSurface>) -> Self {
        Self { console }
    }
}

impl TreeSurface for ConsoleTree {
    fn render(&self, rows: &[TreeRow]) {
        self.console.writeln("workspace:");
        for row in rows {
            self.console.writeln(&format!("  {} {}", row.icon, row.label));
        }
    }
}
