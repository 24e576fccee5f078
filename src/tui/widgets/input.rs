//! Text input state
//!
//! Cursor-aware single-line input backing the wizard dialog. Rendering is
//! done by the dialog so the prompt can style the field to its step.

/// A single-line text input with a cursor
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    content: String,
    cursor: usize,
}

impl TextInput {
    /// Create an empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        self.content.insert(self.byte_cursor(), c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_cursor();
            self.content.remove(at);
        }
    }

    /// Delete the character at the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_cursor();
            self.content.remove(at);
        }
    }

    /// Move the cursor left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    /// Move the cursor to the start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end
    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// The current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Cursor position in characters
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_cursor(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_value() {
        let mut input = TextInput::new();
        for c in "10mg".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "10mg");
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn test_backspace_at_cursor() {
        let mut input = TextInput::new();
        for c in "81x".chars() {
            input.insert(c);
        }
        input.backspace();
        assert_eq!(input.value(), "81");
    }

    #[test]
    fn test_insert_mid_string() {
        let mut input = TextInput::new();
        for c in "8 AM".chars() {
            input.insert(c);
        }
        input.move_start();
        input.move_right();
        input.insert(':');
        assert_eq!(input.value(), "8: AM");
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut input = TextInput::new();
        for c in "A++".chars() {
            input.insert(c);
        }
        input.move_left();
        input.delete();
        assert_eq!(input.value(), "A+");
    }

    #[test]
    fn test_multibyte_input() {
        let mut input = TextInput::new();
        for c in "café".chars() {
            input.insert(c);
        }
        input.backspace();
        assert_eq!(input.value(), "caf");
        input.insert('e');
        assert_eq!(input.value(), "cafe");
    }

    #[test]
    fn test_clear() {
        let mut input = TextInput::new();
        input.insert('x');
        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor(), 0);
    }
}
