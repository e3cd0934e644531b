use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::domain::input::InputState;
use crate::infra::remote::{RemoteChannel, RemoteCommand};
use crate::infra::surface::TerminalSurface;

/// Prompt marker written after every dispatch.
pub const PROMPT: &str = "$ ";

/// Erases the current terminal line before a history-recall redraw.
const CLEAR_LINE: &str = "\r\x1b[2K";

const WELCOME_LINES: &[&str] = &[
    "╔══════════════════════════════════════╗",
    "║  Padtty console                      ║",
    "║  Type \"help\" for available commands  ║",
    "╚══════════════════════════════════════╝",
    "",
];

const HELP_LINES: &[&str] = &[
    "Available Commands:",
    "  clear     Clear the terminal screen",
    "  help      Show this help message",
    "  ssh       Connect to remote server via SSH",
];

const SSH_PLACEHOLDER_LINES: &[&str] = &[
    "SSH Connection (Coming Soon)",
    "This feature will allow secure SSH connections to remote servers.",
    "Features will include:",
    "- Secure key-based authentication",
    "- Connection management",
    "- Multiple session support",
    "- Command history",
    "- Auto-completion",
];

/// Append-only history of submitted lines plus a recall cursor.
///
/// The cursor stays in `[0, len]`; `len` means "past the newest entry", i.e.
/// an empty prompt line.
pub struct CommandHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl CommandHistory {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
        }
    }

    /// Returns all submitted lines, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Returns the recall cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn push(&mut self, line: String) {
        self.entries.push(line);
        self.cursor = self.entries.len();
    }

    /// Moves the cursor one entry back, returning the line to recall.
    fn recall_back(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }

        self.cursor -= 1;

        Some(&self.entries[self.cursor])
    }

    /// Moves the cursor one entry forward, returning the line to recall.
    ///
    /// Stepping past the newest entry recalls the empty prompt line.
    fn recall_forward(&mut self) -> Option<&str> {
        if self.cursor >= self.entries.len() {
            return None;
        }

        self.cursor += 1;

        Some(
            self.entries
                .get(self.cursor)
                .map_or("", String::as_str),
        )
    }
}

/// Whether submitted lines are handled locally or forwarded to a remote
/// shell.
///
/// The channel handle is a placeholder seam: no transport ships yet, so
/// connections only ever come from explicitly attached channels (tests, or a
/// future `ssh` implementation).
pub struct ConnectionState {
    connected: bool,
    channel: Option<Arc<dyn RemoteChannel>>,
}

impl ConnectionState {
    fn disconnected() -> Self {
        Self {
            connected: false,
            channel: None,
        }
    }

    /// Returns whether a remote connection is active.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    fn forward(&self, line: &str) {
        if let Some(channel) = &self.channel {
            channel.forward(RemoteCommand::command(line));
        }
    }
}

/// Line-oriented command console: buffer edits, history, and dispatch.
///
/// Key events mutate the line buffer and echo to the injected terminal
/// surface; Enter submits the line for dispatch to a built-in handler, the
/// remote channel, or the not-found fallback.
pub struct CommandInterpreter {
    connection: ConnectionState,
    history: CommandHistory,
    input: InputState,
    terminal: Arc<dyn TerminalSurface>,
}

impl CommandInterpreter {
    /// Creates a disconnected interpreter writing to `terminal`.
    pub fn new(terminal: Arc<dyn TerminalSurface>) -> Self {
        Self {
            connection: ConnectionState::disconnected(),
            history: CommandHistory::new(),
            input: InputState::new(),
            terminal,
        }
    }

    /// Writes the startup banner and the first prompt marker.
    pub fn write_welcome(&self) {
        for line in WELCOME_LINES {
            self.terminal.writeln(line);
        }
        self.terminal.write(PROMPT);
    }

    /// Returns the current line buffer.
    pub fn buffer(&self) -> &str {
        self.input.text()
    }

    /// Returns the command history.
    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Returns the connection state.
    pub fn connection(&self) -> &ConnectionState {
        &self.connection
    }

    /// Attaches a remote channel; subsequent non-built-in lines are forwarded.
    pub fn attach_channel(&mut self, channel: Arc<dyn RemoteChannel>) {
        self.connection = ConnectionState {
            connected: true,
            channel: Some(channel),
        };
    }

    /// Drops the remote channel and returns to local dispatch.
    pub fn detach_channel(&mut self) {
        self.connection = ConnectionState::disconnected();
    }

    /// Applies one key event to the line buffer.
    ///
    /// Printable keys (no control/alt/super modifier) append and echo;
    /// Backspace erases one character when the buffer is non-empty; Up/Down
    /// recall history; Enter submits.
    pub fn key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_line(),
            KeyCode::Backspace => {
                if !self.input.is_empty() {
                    self.input.delete_backward();
                    self.terminal.write("\x08 \x08");
                }
            }
            KeyCode::Up => {
                if let Some(line) = self.history.recall_back().map(str::to_string) {
                    self.input.set_text(line);
                    self.redraw_line();
                }
            }
            KeyCode::Down => {
                if let Some(line) = self.history.recall_forward().map(str::to_string) {
                    self.input.set_text(line);
                    self.redraw_line();
                }
            }
            KeyCode::Char(ch) if is_printable(key) => {
                self.input.insert_char(ch);
                self.terminal.write(ch.encode_utf8(&mut [0; 4]));
            }
            _ => {}
        }
    }

    /// Submits the current line buffer.
    ///
    /// Whitespace-only lines are discarded without touching history; anything
    /// else is appended to history and dispatched. Either way the buffer
    /// resets and a fresh prompt marker is written.
    pub fn submit_line(&mut self) {
        let raw = self.input.take_text();
        let line = raw.trim();

        self.terminal.write("\r\n");
        if !line.is_empty() {
            self.history.push(line.to_string());
            self.dispatch(line);
        }
        self.terminal.write(PROMPT);
    }

    fn dispatch(&mut self, line: &str) {
        debug!(line, connected = self.connection.is_connected(), "dispatching command");

        match line {
            "clear" => self.terminal.clear(),
            "help" => {
                for help_line in HELP_LINES {
                    self.terminal.writeln(help_line);
                }
            }
            "ssh" => self.write_ssh_notice(),
            _ => {
                if self.connection.is_connected() {
                    self.connection.forward(line);
                } else {
                    self.terminal.writeln(&format!("Command not found: {line}"));
                }
            }
        }
    }

    fn write_ssh_notice(&self) {
        if self.connection.is_connected() {
            self.terminal
                .writeln("Already connected to SSH. Type \"exit\" to disconnect.");
            return;
        }

        for line in SSH_PLACEHOLDER_LINES {
            self.terminal.writeln(line);
        }
    }

    fn redraw_line(&self) {
        self.terminal.write(CLEAR_LINE);
        self.terminal.write(PROMPT);
        self.terminal.write(self.input.text());
    }
}

fn is_printable(key: KeyEvent) -> bool {
    !key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
}
