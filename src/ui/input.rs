//! Single-line text input with cursor movement
//!
//! Supports:
//! - Left/Right, Home/End: cursor movement
//! - Ctrl+A / Ctrl+E: beginning / end of line
//! - Ctrl+U: delete to beginning of line
//! - Ctrl+W: delete word backward
//! - Backspace / Delete: delete before / at cursor

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A text input holding its content and a cursor position.
///
/// The cursor is a char index, converted to a byte offset only when the
/// text is spliced, so multi-byte input never lands mid-codepoint.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input prefilled with text, cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position as a byte offset, for split-at-cursor rendering.
    pub fn cursor_byte(&self) -> usize {
        self.byte_at(self.cursor)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Handle a key event, returns true if the event was handled
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char(c) if !ctrl => {
                let at = self.byte_at(self.cursor);
                self.text.insert(at, c);
                self.cursor += 1;
                true
            }
            KeyCode::Char('a') if ctrl => {
                self.cursor = 0;
                true
            }
            KeyCode::Char('e') if ctrl => {
                self.cursor = self.char_len();
                true
            }
            KeyCode::Char('u') if ctrl => {
                let at = self.byte_at(self.cursor);
                self.text.replace_range(..at, "");
                self.cursor = 0;
                true
            }
            KeyCode::Char('w') if ctrl => {
                self.delete_word_backward();
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.char_len());
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.char_len();
                true
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    let start = self.byte_at(self.cursor - 1);
                    let end = self.byte_at(self.cursor);
                    self.text.replace_range(start..end, "");
                    self.cursor -= 1;
                }
                true
            }
            KeyCode::Delete => {
                if self.cursor < self.char_len() {
                    let start = self.byte_at(self.cursor);
                    let end = self.byte_at(self.cursor + 1);
                    self.text.replace_range(start..end, "");
                }
                true
            }
            _ => false,
        }
    }

    fn delete_word_backward(&mut self) {
        let chars: Vec<char> = self.text.chars().collect();
        let mut pos = self.cursor;

        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }

        let start = self.byte_at(pos);
        let end = self.byte_at(self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor = pos;
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Byte offset of the nth char (text length if past the end).
    fn byte_at(&self, nth: usize) -> usize {
        self.text
            .char_indices()
            .nth(nth)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(input: &mut TextInput, s: &str) {
        for c in s.chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_insert() {
        let mut input = TextInput::new();
        type_str(&mut input, "hi");
        assert_eq!(input.text(), "hi");
        assert_eq!(input.cursor_byte(), 2);
    }

    #[test]
    fn test_insert_mid_line() {
        let mut input = TextInput::with_text("hllo");
        input.handle_key(key(KeyCode::Home));
        input.handle_key(key(KeyCode::Right));
        input.handle_key(key(KeyCode::Char('e')));
        assert_eq!(input.text(), "hello");
    }

    #[test]
    fn test_ctrl_a_e() {
        let mut input = TextInput::with_text("hello");
        input.handle_key(ctrl('a'));
        assert_eq!(input.cursor_byte(), 0);
        input.handle_key(ctrl('e'));
        assert_eq!(input.cursor_byte(), 5);
    }

    #[test]
    fn test_ctrl_u() {
        let mut input = TextInput::with_text("hello world");
        input.handle_key(ctrl('u'));
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_ctrl_w() {
        let mut input = TextInput::with_text("hello world");
        input.handle_key(ctrl('w'));
        assert_eq!(input.text(), "hello ");
    }

    #[test]
    fn test_backspace() {
        let mut input = TextInput::with_text("hello");
        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(input.text(), "hell");
    }

    #[test]
    fn test_multibyte_round_trip() {
        let mut input = TextInput::new();
        type_str(&mut input, "caf\u{e9}");
        assert_eq!(input.text(), "caf\u{e9}");
        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(input.text(), "caf");
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut input = TextInput::with_text("abc");
        input.handle_key(key(KeyCode::Home));
        input.handle_key(key(KeyCode::Delete));
        assert_eq!(input.text(), "bc");
    }
}
