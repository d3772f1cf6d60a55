use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::WidgetAction;

/// Rows the draft grows to before it scrolls.
pub const MAX_VISIBLE_ROWS: u16 = 3;

/// Multi-line draft editor at the bottom of the chat panel.
#[derive(Debug, Clone)]
pub struct Composer {
    lines: Vec<String>,
    /// (line_index, char_column)
    cursor: (usize, usize),
    scroll_offset: u16,
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

impl Composer {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            cursor: (0, 0),
            scroll_offset: 0,
        }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll_offset
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// Whether sending is possible, i.e. the draft has non-whitespace text.
    pub fn can_send(&self) -> bool {
        !self.text().trim().is_empty()
    }

    /// Rows the composer wants: one per line, capped.
    pub fn visible_rows(&self) -> u16 {
        (self.lines.len() as u16).clamp(1, MAX_VISIBLE_ROWS)
    }

    pub fn clear(&mut self) {
        self.lines = vec![String::new()];
        self.cursor = (0, 0);
        self.scroll_offset = 0;
    }

    pub fn paste_text(&mut self, text: &str) {
        for c in text.chars() {
            match c {
                '\n' => self.insert_newline(),
                '\r' => {}
                c => self.insert_char(c),
            }
        }
    }

    fn insert_char(&mut self, c: char) {
        let (line, col) = self.cursor;
        let current = &mut self.lines[line];
        current.insert(char_to_byte_pos(current, col), c);
        self.cursor.1 = col + 1;
    }

    fn insert_newline(&mut self) {
        let (line, col) = self.cursor;
        let current = &self.lines[line];
        let byte_pos = char_to_byte_pos(current, col);
        let remainder = current[byte_pos..].to_string();
        self.lines[line].truncate(byte_pos);
        self.lines.insert(line + 1, remainder);
        self.cursor = (line + 1, 0);
        self.ensure_cursor_visible();
    }

    fn delete_char_before(&mut self) {
        let (line, col) = self.cursor;
        if col > 0 {
            let current = &mut self.lines[line];
            let start = char_to_byte_pos(current, col - 1);
            let end = char_to_byte_pos(current, col);
            current.replace_range(start..end, "");
            self.cursor.1 = col - 1;
        } else if line > 0 {
            let current = self.lines.remove(line);
            let prev_len = self.lines[line - 1].chars().count();
            self.lines[line - 1].push_str(&current);
            self.cursor = (line - 1, prev_len);
        }
        self.ensure_cursor_visible();
    }

    fn delete_char_at(&mut self) {
        let (line, col) = self.cursor;
        let len = self.lines[line].chars().count();
        if col < len {
            let current = &mut self.lines[line];
            let start = char_to_byte_pos(current, col);
            let end = char_to_byte_pos(current, col + 1);
            current.replace_range(start..end, "");
        } else if line + 1 < self.lines.len() {
            let next = self.lines.remove(line + 1);
            self.lines[line].push_str(&next);
        }
    }

    fn move_left(&mut self) {
        let (line, col) = self.cursor;
        if col > 0 {
            self.cursor.1 = col - 1;
        } else if line > 0 {
            self.cursor = (line - 1, self.lines[line - 1].chars().count());
        }
        self.ensure_cursor_visible();
    }

    fn move_right(&mut self) {
        let (line, col) = self.cursor;
        if col < self.lines[line].chars().count() {
            self.cursor.1 = col + 1;
        } else if line + 1 < self.lines.len() {
            self.cursor = (line + 1, 0);
        }
        self.ensure_cursor_visible();
    }

    fn move_vertical(&mut self, down: bool) {
        let (line, col) = self.cursor;
        let target = if down {
            (line + 1 < self.lines.len()).then_some(line + 1)
        } else {
            line.checked_sub(1)
        };
        if let Some(target) = target {
            self.cursor = (target, col.min(self.lines[target].chars().count()));
        }
        self.ensure_cursor_visible();
    }

    fn ensure_cursor_visible(&mut self) {
        let cursor_line = self.cursor.0 as u16;
        if cursor_line < self.scroll_offset {
            self.scroll_offset = cursor_line;
        } else if cursor_line >= self.scroll_offset + MAX_VISIBLE_ROWS {
            self.scroll_offset = cursor_line + 1 - MAX_VISIBLE_ROWS;
        }
    }

    /// Edit the draft. Plain Enter asks to send; Shift/Alt+Enter and Ctrl+J
    /// insert a newline. Unhandled keys return `None`.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<WidgetAction> {
        match (key.modifiers, key.code) {
            (mods, KeyCode::Char('j')) if mods.contains(KeyModifiers::CONTROL) => {
                self.insert_newline();
                Some(WidgetAction::None)
            }
            (mods, KeyCode::Enter) if mods.intersects(KeyModifiers::ALT | KeyModifiers::SHIFT) => {
                self.insert_newline();
                Some(WidgetAction::None)
            }
            (_, KeyCode::Enter) => Some(WidgetAction::Submit),
            (_, KeyCode::Backspace) => {
                self.delete_char_before();
                Some(WidgetAction::None)
            }
            (_, KeyCode::Delete) => {
                self.delete_char_at();
                Some(WidgetAction::None)
            }
            (KeyModifiers::NONE, KeyCode::Left) => {
                self.move_left();
                Some(WidgetAction::None)
            }
            (KeyModifiers::NONE, KeyCode::Right) => {
                self.move_right();
                Some(WidgetAction::None)
            }
            (KeyModifiers::NONE, KeyCode::Up) => {
                self.move_vertical(false);
                Some(WidgetAction::None)
            }
            (KeyModifiers::NONE, KeyCode::Down) => {
                self.move_vertical(true);
                Some(WidgetAction::None)
            }
            (KeyModifiers::NONE, KeyCode::Home) | (KeyModifiers::CONTROL, KeyCode::Char('a')) => {
                self.cursor.1 = 0;
                Some(WidgetAction::None)
            }
            (KeyModifiers::NONE, KeyCode::End) | (KeyModifiers::CONTROL, KeyCode::Char('e')) => {
                self.cursor.1 = self.lines[self.cursor.0].chars().count();
                Some(WidgetAction::None)
            }
            (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
                self.clear();
                Some(WidgetAction::None)
            }
            (KeyModifiers::NONE, KeyCode::Char(c)) | (KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                self.insert_char(c);
                Some(WidgetAction::None)
            }
            _ => None,
        }
    }
}

fn char_to_byte_pos(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(pos, _)| pos)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(composer: &mut Composer, text: &str) {
        for c in text.chars() {
            composer.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut composer = Composer::new();
        type_text(&mut composer, "hello");
        composer.handle_key(key(KeyCode::Backspace));
        assert_eq!(composer.text(), "hell");
        assert_eq!(composer.cursor(), (0, 4));
    }

    #[test]
    fn test_enter_submits_and_shift_enter_breaks_line() {
        let mut composer = Composer::new();
        type_text(&mut composer, "a");
        assert_eq!(
            composer.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::SHIFT)),
            Some(WidgetAction::None)
        );
        type_text(&mut composer, "b");
        assert_eq!(composer.text(), "a\nb");
        assert_eq!(composer.handle_key(key(KeyCode::Enter)), Some(WidgetAction::Submit));
    }

    #[test]
    fn test_blank_draft_cannot_send() {
        let mut composer = Composer::new();
        assert!(!composer.can_send());
        type_text(&mut composer, "   ");
        assert!(!composer.can_send());
        type_text(&mut composer, "x");
        assert!(composer.can_send());
    }

    #[test]
    fn test_visible_rows_are_capped() {
        let mut composer = Composer::new();
        composer.paste_text("1\n2\n3\n4\n5");
        assert_eq!(composer.visible_rows(), MAX_VISIBLE_ROWS);
        assert_eq!(composer.scroll_offset(), 2);
        composer.handle_key(key(KeyCode::Up));
        composer.handle_key(key(KeyCode::Up));
        composer.handle_key(key(KeyCode::Up));
        assert_eq!(composer.scroll_offset(), 1);
    }

    #[test]
    fn test_unicode_editing() {
        let mut composer = Composer::new();
        type_text(&mut composer, "héllo");
        composer.handle_key(key(KeyCode::Left));
        composer.handle_key(key(KeyCode::Left));
        composer.handle_key(key(KeyCode::Left));
        composer.handle_key(key(KeyCode::Delete));
        assert_eq!(composer.text(), "hélo");
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut composer = Composer::new();
        composer.paste_text("ab\ncd");
        composer.handle_key(key(KeyCode::Home));
        composer.handle_key(key(KeyCode::Backspace));
        assert_eq!(composer.text(), "abcd");
        assert_eq!(composer.cursor(), (0, 2));
    }

    #[test]
    fn test_unhandled_keys_bubble_up() {
        let mut composer = Composer::new();
        assert_eq!(composer.handle_key(key(KeyCode::Esc)), None);
        assert_eq!(composer.handle_key(key(KeyCode::Tab)), None);
    }
}
