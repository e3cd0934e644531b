use std::sync::{Mutex, PoisonError};

use crate::domain::language::PLAIN_TEXT;
use crate::infra::surface::EditorSurface;

/// In-memory editing surface.
///
/// Stands in for the rich editor widget in the demo binary and in tests:
/// same `get/set/format` contract, no rendering.
pub struct BufferEditorSurface {
    state: Mutex<BufferState>,
}

struct BufferState {
    language: String,
    value: String,
}

impl BufferEditorSurface {
    /// Creates an empty surface in plain-text mode.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(BufferState {
                language: PLAIN_TEXT.to_string(),
                value: String::new(),
            }),
        }
    }

    /// Returns the current language mode.
    pub fn language(&self) -> String {
        self.lock().language.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BufferState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for BufferEditorSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSurface for BufferEditorSurface {
    fn get_value(&self) -> String {
        self.lock().value.clone()
    }

    fn set_value(&self, text: &str) {
        self.lock().value = text.to_string();
    }

    fn set_language(&self, tag: &str) {
        self.lock().language = tag.to_string();
    }

    fn run_format(&self) {
        let mut state = self.lock();
        let formatted: Vec<&str> = state.value.lines().map(str::trim_end).collect();
        state.value = formatted.join("\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_value_then_get_value_round_trips() {
        // Arrange
        let surface = BufferEditorSurface::new();

        // Act
        surface.set_value("console.log(1);");

        // Assert
        assert_eq!(surface.get_value(), "console.log(1);");
    }

    #[test]
    fn test_set_language_updates_mode() {
        // Arrange
        let surface = BufferEditorSurface::new();

        // Act
        surface.set_language("javascript");

        // Assert
        assert_eq!(surface.language(), "javascript");
    }

    #[test]
    fn test_run_format_trims_trailing_whitespace() {
        // Arrange
        let surface = BufferEditorSurface::new();
        surface.set_value("let a = 1;   \nlet b = 2;\t");

        // Act
        surface.run_format();

        // Assert
        assert_eq!(surface.get_value(), "let a = 1;\nlet b = 2;");
    }
}
