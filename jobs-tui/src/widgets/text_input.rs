use crate::events::{Key, Modifiers};

/// Text content and cursor of one input.
///
/// The cursor is a character index, not a byte offset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
    multiline: bool,
}

/// Result of handling a text editing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEditResult {
    /// Text was modified.
    Changed,
    /// Key was handled but text didn't change (e.g., cursor movement).
    Handled,
    /// Key was not handled, should be passed through.
    Ignored,
}

impl TextInput {
    /// Single-line input with the cursor at the end.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self {
            text,
            cursor,
            multiline: false,
        }
    }

    /// Multi-line input; Enter inserts a line break.
    pub fn multiline(text: impl Into<String>) -> Self {
        Self {
            multiline: true,
            ..Self::new(text)
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Line and column (both in characters) of the cursor.
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let before: String = self.text.chars().take(self.cursor).collect();
        let line = before.matches('\n').count();
        let col = before.rsplit('\n').next().map_or(0, |l| l.chars().count());
        (line, col)
    }

    /// Handle a key press for text editing.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> TextEditResult {
        match key {
            Key::Char(c) if modifiers.none() || (modifiers.shift && !modifiers.ctrl) => {
                self.insert_char(c);
                TextEditResult::Changed
            }

            Key::Enter if self.multiline => {
                self.insert_char('\n');
                TextEditResult::Changed
            }

            Key::Backspace => {
                if self.delete_back() {
                    TextEditResult::Changed
                } else {
                    TextEditResult::Handled
                }
            }

            Key::Delete => {
                if self.delete_forward() {
                    TextEditResult::Changed
                } else {
                    TextEditResult::Handled
                }
            }

            Key::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                TextEditResult::Handled
            }

            Key::Right => {
                self.cursor = (self.cursor + 1).min(self.len());
                TextEditResult::Handled
            }

            Key::Home => {
                self.cursor = self.line_start();
                TextEditResult::Handled
            }

            Key::End => {
                self.cursor = self.line_end();
                TextEditResult::Handled
            }

            _ => TextEditResult::Ignored,
        }
    }

    /// Insert a character at the cursor.
    fn insert_char(&mut self, c: char) {
        let byte_pos = char_to_byte_index(&self.text, self.cursor);
        self.text.insert(byte_pos, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor. Returns true if text changed.
    fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let byte_pos = char_to_byte_index(&self.text, self.cursor - 1);
        self.text.remove(byte_pos);
        self.cursor -= 1;
        true
    }

    /// Delete the character at the cursor. Returns true if text changed.
    fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        let byte_pos = char_to_byte_index(&self.text, self.cursor);
        self.text.remove(byte_pos);
        true
    }

    /// Character index of the start of the cursor's line.
    fn line_start(&self) -> usize {
        if !self.multiline {
            return 0;
        }
        let (_, col) = self.cursor_line_col();
        self.cursor - col
    }

    /// Character index of the end of the cursor's line.
    fn line_end(&self) -> usize {
        if !self.multiline {
            return self.len();
        }
        let rest = self.text.chars().skip(self.cursor).take_while(|c| *c != '\n').count();
        self.cursor + rest
    }
}

/// Convert character index to byte index in a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
