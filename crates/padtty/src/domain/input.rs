/// Editable console line buffer with a character-based cursor index.
pub struct InputState {
    /// Cursor position measured in Unicode scalar values from the start.
    cursor: usize,
    text: String,
}

impl InputState {
    /// Creates an empty input state with the cursor at position `0`.
    pub fn new() -> Self {
        Self {
            cursor: 0,
            text: String::new(),
        }
    }

    /// Returns the current text buffer.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns whether the current text buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Drains and returns the text buffer, then resets the cursor to `0`.
    pub fn take_text(&mut self) -> String {
        self.cursor = 0;

        std::mem::take(&mut self.text)
    }

    /// Replaces the buffer with `text` and moves the cursor to the end.
    ///
    /// Used by history recall, which swaps in a previously submitted line.
    pub fn set_text(&mut self, text: String) {
        self.cursor = text.chars().count();
        self.text = text;
    }

    /// Inserts one character at the cursor and advances the cursor by one.
    pub fn insert_char(&mut self, ch: char) {
        let byte_offset = self.byte_offset();
        self.text.insert(byte_offset, ch);
        self.cursor += 1;
    }

    /// Deletes the character immediately before the cursor.
    pub fn delete_backward(&mut self) {
        if self.cursor == 0 {
            return;
        }

        let start = self.byte_offset_at(self.cursor - 1);
        let end = self.byte_offset();
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
    }

    /// Byte offset of the cursor within the text buffer.
    fn byte_offset(&self) -> usize {
        self.byte_offset_at(self.cursor)
    }

    fn byte_offset_at(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(offset, _)| offset)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_char_appends_and_advances_cursor() {
        // Arrange
        let mut input = InputState::new();

        // Act
        input.insert_char('l');
        input.insert_char('s');

        // Assert
        assert_eq!(input.text(), "ls");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_delete_backward_removes_last_char() {
        // Arrange
        let mut input = InputState::new();
        input.set_text("héllo".to_string());

        // Act
        input.delete_backward();

        // Assert
        assert_eq!(input.text(), "héll");
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn test_delete_backward_on_empty_buffer_is_noop() {
        // Arrange
        let mut input = InputState::new();

        // Act
        input.delete_backward();

        // Assert
        assert_eq!(input.text(), "");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_take_text_drains_buffer_and_resets_cursor() {
        // Arrange
        let mut input = InputState::new();
        input.set_text("help".to_string());

        // Act
        let taken = input.take_text();

        // Assert
        assert_eq!(taken, "help");
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }
}
