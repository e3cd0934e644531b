//! Demo console runtime.
//!
//! Hosts a [`CommandInterpreter`] on the real terminal: raw mode in, a
//! dedicated thread reading crossterm events, and key events routed into the
//! interpreter until the user quits with Ctrl+C or Ctrl+D.

mod terminal;

use std::io;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::app::console::CommandInterpreter;

pub use terminal::{ConsoleSurface, ConsoleTree};

/// Runs the console loop until the user quits.
///
/// # Errors
/// Returns an error if raw mode cannot be enabled.
pub async fn run(interpreter: &mut CommandInterpreter) -> io::Result<()> {
    let _terminal_guard = terminal::TerminalGuard;
    terminal::enter_raw_mode()?;

    // Spawn a dedicated thread for crossterm event reading so the main async
    // loop can yield to tokio between iterations.
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    spawn_event_reader(event_tx);

    interpreter.write_welcome();

    while let Some(event) = event_rx.recv().await {
        if let Event::Key(key) = event {
            if is_quit_key(key) {
                break;
            }
            interpreter.key_event(key);
        }
    }

    Ok(())
}

fn spawn_event_reader(event_tx: mpsc::UnboundedSender<Event>) {
    std::thread::spawn(move || {
        loop {
            match crossterm::event::poll(Duration::from_millis(250)) {
                Ok(true) => {
                    if let Ok(event) = crossterm::event::read()
                        && event_tx.send(event).is_err()
                    {
                        break;
                    }
                }
                Ok(false) => {}
                Err(_) => break,
            }
        }
    });
}

fn is_quit_key(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c' | 'd'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_quit_key_matches_ctrl_c_and_ctrl_d() {
        // Arrange & Act & Assert
        assert!(is_quit_key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(is_quit_key(KeyEvent::new(
            KeyCode::Char('d'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_quit_key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::NONE
        )));
    }
}
