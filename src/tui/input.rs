//! Keyboard input handling for the terminal user interface.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key press reduced to what a menu cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    MoveUp,
    MoveDown,
    Confirm,
    Cancel,
    Other,
}

/// Map a raw key event onto a menu input.
pub fn classify(key: &KeyEvent) -> MenuInput {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => MenuInput::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => MenuInput::MoveDown,
        KeyCode::Enter => MenuInput::Confirm,
        KeyCode::Esc => MenuInput::Cancel,
        _ => MenuInput::Other,
    }
}

/// Ctrl+C quits from any screen.
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// A single-line text input with a cursor.
///
/// The cursor counts characters, not bytes.
#[derive(Debug, Clone, Default)]
pub struct InputField {
    pub value: String,
    pub cursor: usize,
}

impl InputField {
    /// Create a new empty input field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input field with initial text value, cursor at the end.
    pub fn with_value(value: &str) -> Self {
        Self {
            value: value.to_string(),
            cursor: value.chars().count(),
        }
    }

    fn byte_offset(&self, cursor: usize) -> usize {
        self.value
            .char_indices()
            .nth(cursor)
            .map_or(self.value.len(), |(i, _)| i)
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    /// Insert a character at the current cursor position.
    pub fn handle_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn handle_backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset(self.cursor);
            self.value.remove(at);
        }
    }

    /// Delete the character at the cursor position.
    pub fn handle_delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_offset(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    /// Apply an editing key. Returns false for keys the field ignores.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => self.handle_char(c),
            KeyCode::Backspace => self.handle_backspace(),
            KeyCode::Delete => self.handle_delete(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.char_len(),
            _ => return false,
        }
        true
    }
}
