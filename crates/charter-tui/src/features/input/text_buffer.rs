//! Multi-line editing buffer behind the message input.
//!
//! The cursor is a `(row, col)` pair where `col` counts chars, not bytes.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Up,
    Down,
    Forward,
    Back,
    Head,
    End,
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
    row: usize,
    col: usize,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
            row: 0,
            col: 0,
        }
    }
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Full contents with rows joined by `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// Replaces the contents and moves the cursor to the end.
    pub fn set_text(&mut self, text: &str) {
        self.lines = text.split('\n').map(str::to_string).collect();
        self.move_cursor(CursorMove::Bottom);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Inserts `text` at the cursor; `\n` starts a new row.
    pub fn insert_str(&mut self, text: &str) {
        let mut parts = text.split('\n');
        if let Some(first) = parts.next() {
            self.insert_inline(first);
        }
        for part in parts {
            self.insert_newline();
            self.insert_inline(part);
        }
    }

    pub fn insert_char(&mut self, ch: char) {
        if ch == '\n' {
            self.insert_newline();
            return;
        }
        let at = self.byte_at(self.col);
        self.lines[self.row].insert(at, ch);
        self.col += 1;
    }

    /// Splits the current row at the cursor.
    pub fn insert_newline(&mut self) {
        let at = self.byte_at(self.col);
        let tail = self.lines[self.row].split_off(at);
        self.row += 1;
        self.col = 0;
        self.lines.insert(self.row, tail);
    }

    /// Backspace. At the start of a row, joins it onto the previous row.
    pub fn delete_prev_char(&mut self) {
        if self.col > 0 {
            let start = self.byte_at(self.col - 1);
            let end = self.byte_at(self.col);
            self.lines[self.row].replace_range(start..end, "");
            self.col -= 1;
        } else if self.row > 0 {
            let current = self.lines.remove(self.row);
            self.row -= 1;
            self.col = self.row_len(self.row);
            self.lines[self.row].push_str(&current);
        }
    }

    /// Delete. At the end of a row, pulls the next row up.
    pub fn delete_next_char(&mut self) {
        if self.col < self.row_len(self.row) {
            let start = self.byte_at(self.col);
            let end = self.byte_at(self.col + 1);
            self.lines[self.row].replace_range(start..end, "");
        } else if self.row + 1 < self.lines.len() {
            let next = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&next);
        }
    }

    /// Removes everything between the start of the row and the cursor.
    pub fn delete_line_by_head(&mut self) {
        let at = self.byte_at(self.col);
        self.lines[self.row].replace_range(..at, "");
        self.col = 0;
    }

    /// Removes everything between the cursor and the end of the row.
    pub fn delete_line_by_end(&mut self) {
        let at = self.byte_at(self.col);
        self.lines[self.row].truncate(at);
    }

    /// Removes the word before the cursor along with any whitespace after it.
    pub fn delete_word_left(&mut self) {
        if self.col == 0 {
            self.delete_prev_char();
            return;
        }
        let target = self.word_start_before(self.col);
        let start = self.byte_at(target);
        let end = self.byte_at(self.col);
        self.lines[self.row].replace_range(start..end, "");
        self.col = target;
    }

    pub fn move_word_left(&mut self) {
        if self.col == 0 {
            self.move_cursor(CursorMove::Back);
        } else {
            self.col = self.word_start_before(self.col);
        }
    }

    pub fn move_word_right(&mut self) {
        let chars: Vec<char> = self.lines[self.row].chars().collect();
        if self.col >= chars.len() {
            self.move_cursor(CursorMove::Forward);
            return;
        }
        let mut col = self.col;
        while col < chars.len() && chars[col].is_whitespace() {
            col += 1;
        }
        while col < chars.len() && !chars[col].is_whitespace() {
            col += 1;
        }
        self.col = col;
    }

    pub fn move_cursor(&mut self, movement: CursorMove) {
        match movement {
            CursorMove::Forward => {
                if self.col < self.row_len(self.row) {
                    self.col += 1;
                } else if self.row + 1 < self.lines.len() {
                    self.row += 1;
                    self.col = 0;
                }
            }
            CursorMove::Back => {
                if self.col > 0 {
                    self.col -= 1;
                } else if self.row > 0 {
                    self.row -= 1;
                    self.col = self.row_len(self.row);
                }
            }
            CursorMove::Up => {
                if self.row > 0 {
                    self.row -= 1;
                    self.col = self.col.min(self.row_len(self.row));
                }
            }
            CursorMove::Down => {
                if self.row + 1 < self.lines.len() {
                    self.row += 1;
                    self.col = self.col.min(self.row_len(self.row));
                }
            }
            CursorMove::Head => self.col = 0,
            CursorMove::End => self.col = self.row_len(self.row),
            CursorMove::Top => {
                self.row = 0;
                self.col = 0;
            }
            CursorMove::Bottom => {
                self.row = self.lines.len() - 1;
                self.col = self.row_len(self.row);
            }
        }
    }

    fn insert_inline(&mut self, text: &str) {
        let at = self.byte_at(self.col);
        self.lines[self.row].insert_str(at, text);
        self.col += text.chars().count();
    }

    fn row_len(&self, row: usize) -> usize {
        self.lines[row].chars().count()
    }

    /// Byte offset of char column `col` in the current row.
    fn byte_at(&self, col: usize) -> usize {
        let line = &self.lines[self.row];
        line.char_indices().nth(col).map_or(line.len(), |(i, _)| i)
    }

    fn word_start_before(&self, col: usize) -> usize {
        let chars: Vec<char> = self.lines[self.row].chars().collect();
        let mut idx = col.min(chars.len());
        while idx > 0 && chars[idx - 1].is_whitespace() {
            idx -= 1;
        }
        while idx > 0 && !chars[idx - 1].is_whitespace() {
            idx -= 1;
        }
        idx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(text: &str) -> TextBuffer {
        let mut buf = TextBuffer::new();
        buf.set_text(text);
        buf
    }

    #[test]
    fn test_new_buffer_is_empty() {
        let buf = TextBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.text(), "");
        assert_eq!(buf.cursor(), (0, 0));
    }

    #[test]
    fn test_insert_str_with_newlines() {
        let mut buf = TextBuffer::new();
        buf.insert_str("first\nsecond");
        assert_eq!(buf.lines(), ["first", "second"]);
        assert_eq!(buf.cursor(), (1, 6));
    }

    #[test]
    fn test_insert_in_middle_of_multibyte_text() {
        let mut buf = buffer("héllo");
        buf.move_cursor(CursorMove::Head);
        buf.move_cursor(CursorMove::Forward);
        buf.move_cursor(CursorMove::Forward);
        buf.insert_char('X');
        assert_eq!(buf.text(), "héXllo");
    }

    #[test]
    fn test_newline_splits_row() {
        let mut buf = buffer("abcd");
        buf.move_cursor(CursorMove::Back);
        buf.move_cursor(CursorMove::Back);
        buf.insert_newline();
        assert_eq!(buf.lines(), ["ab", "cd"]);
        assert_eq!(buf.cursor(), (1, 0));
    }

    #[test]
    fn test_backspace_joins_rows() {
        let mut buf = buffer("ab\ncd");
        buf.move_cursor(CursorMove::Head);
        buf.delete_prev_char();
        assert_eq!(buf.text(), "abcd");
        assert_eq!(buf.cursor(), (0, 2));
    }

    #[test]
    fn test_delete_pulls_next_row_up() {
        let mut buf = buffer("ab\ncd");
        buf.move_cursor(CursorMove::Top);
        buf.move_cursor(CursorMove::End);
        buf.delete_next_char();
        assert_eq!(buf.text(), "abcd");
    }

    #[test]
    fn test_delete_word_left() {
        let mut buf = buffer("admission policy  ");
        buf.delete_word_left();
        assert_eq!(buf.text(), "admission ");
        buf.delete_word_left();
        assert_eq!(buf.text(), "");
    }

    #[test]
    fn test_line_kills() {
        let mut buf = buffer("hello world");
        for _ in 0..5 {
            buf.move_cursor(CursorMove::Back);
        }
        buf.delete_line_by_end();
        assert_eq!(buf.text(), "hello ");
        buf.delete_line_by_head();
        assert_eq!(buf.text(), "");
        assert_eq!(buf.cursor(), (0, 0));
    }

    #[test]
    fn test_vertical_moves_clamp_column() {
        let mut buf = buffer("a long row\nab");
        buf.move_cursor(CursorMove::Up);
        assert_eq!(buf.cursor(), (0, 2));
        buf.move_cursor(CursorMove::End);
        buf.move_cursor(CursorMove::Down);
        assert_eq!(buf.cursor(), (1, 2));
    }

    #[test]
    fn test_word_moves() {
        let mut buf = buffer("one two three");
        buf.move_word_left();
        assert_eq!(buf.cursor(), (0, 8));
        buf.move_word_left();
        assert_eq!(buf.cursor(), (0, 4));
        buf.move_word_right();
        assert_eq!(buf.cursor(), (0, 7));
    }

    #[test]
    fn test_clear_resets_cursor() {
        let mut buf = buffer("x\ny");
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.cursor(), (0, 0));
    }
}
