//! Cursor tracking for the InputBox: byte-offset position, word and line
//! navigation, and the scroll that keeps the cursor row on screen.
//!
//! Every method takes the buffer as `&str`; the text itself is owned by
//! `InputBox`, keeping the data flow visible at the call site.

use ratatui::layout::Rect;

use super::{MAX_VISIBLE_LINES, line_count, text_width, wrap_opts};

pub(super) struct CursorState {
    /// Byte offset into the buffer, always on a char boundary.
    pub pos: usize,
    /// First visible wrapped row when the content overflows the box.
    pub scroll_offset: u16,
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
        }
    }

    /// Back to the origin (after Submit empties the buffer).
    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll_offset = 0;
    }

    /// Step one char left. Returns false at the start of the buffer.
    pub fn move_left(&mut self, text: &str) -> bool {
        match self.peek_left(text) {
            Some(c) => {
                self.pos -= c.len_utf8();
                true
            }
            None => false,
        }
    }

    /// Step one char right. Returns false at the end of the buffer.
    pub fn move_right(&mut self, text: &str) -> bool {
        match self.peek_right(text) {
            Some(c) => {
                self.pos += c.len_utf8();
                true
            }
            None => false,
        }
    }

    /// Jump to the start of the previous word, readline style: first skip
    /// separators leftwards, then the word itself.
    pub fn move_word_left(&mut self, text: &str) -> bool {
        let start = self.pos;
        while self.peek_left(text).is_some_and(|c| !is_word_char(c)) {
            self.move_left(text);
        }
        while self.peek_left(text).is_some_and(is_word_char) {
            self.move_left(text);
        }
        self.pos != start
    }

    /// Jump past the end of the next word.
    pub fn move_word_right(&mut self, text: &str) -> bool {
        let start = self.pos;
        while self.peek_right(text).is_some_and(|c| !is_word_char(c)) {
            self.move_right(text);
        }
        while self.peek_right(text).is_some_and(is_word_char) {
            self.move_right(text);
        }
        self.pos != start
    }

    /// Home: start of the current logical line.
    pub fn move_line_start(&mut self, text: &str) -> bool {
        let target = text[..self.pos].rfind('\n').map_or(0, |i| i + 1);
        let moved = self.pos != target;
        self.pos = target;
        moved
    }

    /// End: end of the current logical line.
    pub fn move_line_end(&mut self, text: &str) -> bool {
        let target = text[self.pos..]
            .find('\n')
            .map_or(text.len(), |i| self.pos + i);
        let moved = self.pos != target;
        self.pos = target;
        moved
    }

    fn peek_left(&self, text: &str) -> Option<char> {
        text[..self.pos].chars().next_back()
    }

    fn peek_right(&self, text: &str) -> Option<char> {
        text[self.pos..].chars().next()
    }

    /// Wrapped row (0-based) the cursor sits on: full rows of every logical
    /// line above it, plus the rows its own line has produced so far.
    fn row(&self, text: &str, width: u16) -> u16 {
        if width == 0 {
            return 0;
        }
        let mut rows = 0u16;
        let mut lines = text[..self.pos].split('\n').peekable();
        while let Some(line) = lines.next() {
            let produced = textwrap::wrap(line, wrap_opts(width)).len().max(1) as u16;
            // The last entry is the line the cursor is on; it contributes
            // its produced rows minus the one the cursor occupies.
            rows = rows.saturating_add(if lines.peek().is_some() {
                produced
            } else {
                produced - 1
            });
        }
        rows
    }

    /// Scroll so the cursor row stays inside the visible window.
    pub fn follow(&mut self, text: &str, box_width: u16) {
        let width = text_width(box_width);
        if line_count(text, width) <= MAX_VISIBLE_LINES {
            self.scroll_offset = 0;
            return;
        }
        let row = self.row(text, width);
        if row < self.scroll_offset {
            self.scroll_offset = row;
        } else if row >= self.scroll_offset.saturating_add(MAX_VISIBLE_LINES) {
            self.scroll_offset = row - (MAX_VISIBLE_LINES - 1);
        }
    }

    /// Terminal cell of the cursor, offset by the box border.
    pub fn screen_pos(&self, text: &str, area: Rect) -> (u16, u16) {
        let width = text_width(area.width);
        if width == 0 {
            return (area.x + 1, area.y + 1);
        }

        // Column: chars between the start of the current wrapped row and the
        // cursor. Wrapped rows drop trailing spaces, so count from the raw
        // logical-line prefix minus whatever earlier rows consumed.
        let line_start = text[..self.pos].rfind('\n').map_or(0, |i| i + 1);
        let prefix = &text[line_start..self.pos];
        let wrapped = textwrap::wrap(prefix, wrap_opts(width));
        let consumed: usize = wrapped
            .iter()
            .rev()
            .skip(1)
            .map(|row| row.chars().count())
            .sum();
        let col = prefix.chars().count().saturating_sub(consumed) as u16;

        let visible_row = self.row(text, width).saturating_sub(self.scroll_offset);
        (area.x + 1 + col, area.y + 1 + visible_row)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor_at(pos: usize) -> CursorState {
        let mut cursor = CursorState::new();
        cursor.pos = pos;
        cursor
    }

    #[test]
    fn test_move_left_right_step_whole_chars() {
        // "año" = [97, 195, 177, 111]; 'ñ' is two bytes
        let text = "año";
        let mut cursor = cursor_at(text.len());

        assert!(cursor.move_left(text));
        assert_eq!(cursor.pos, 3);
        assert!(cursor.move_left(text));
        assert_eq!(cursor.pos, 1);
        assert!(cursor.move_left(text));
        assert_eq!(cursor.pos, 0);
        assert!(!cursor.move_left(text));

        assert!(cursor.move_right(text));
        assert_eq!(cursor.pos, 1);
        assert!(cursor.move_right(text));
        assert_eq!(cursor.pos, 3);
    }

    #[test]
    fn test_move_right_stops_at_end() {
        let mut cursor = cursor_at(4);
        assert!(!cursor.move_right("milk"));
        assert_eq!(cursor.pos, 4);
    }

    #[test]
    fn test_word_left_skips_separators_then_word() {
        let text = "buy milk, eggs";
        let mut cursor = cursor_at(text.len());

        assert!(cursor.move_word_left(text));
        assert_eq!(cursor.pos, 10); // start of "eggs"
        assert!(cursor.move_word_left(text));
        assert_eq!(cursor.pos, 4); // start of "milk", past ", "
        assert!(cursor.move_word_left(text));
        assert_eq!(cursor.pos, 0);
        assert!(!cursor.move_word_left(text));
    }

    #[test]
    fn test_word_right_lands_after_word() {
        let text = "buy milk, eggs";
        let mut cursor = cursor_at(0);

        assert!(cursor.move_word_right(text));
        assert_eq!(cursor.pos, 3); // after "buy"
        assert!(cursor.move_word_right(text));
        assert_eq!(cursor.pos, 8); // after "milk", before ","
    }

    #[test]
    fn test_word_moves_treat_underscore_as_word() {
        let text = "todo_list now";
        let mut cursor = cursor_at(9);
        cursor.move_word_left(text);
        assert_eq!(cursor.pos, 0);
    }

    #[test]
    fn test_line_start_and_end_respect_newlines() {
        let text = "buy milk\ncall mom";
        let mut cursor = cursor_at(13); // inside "call"

        assert!(cursor.move_line_start(text));
        assert_eq!(cursor.pos, 9);
        assert!(!cursor.move_line_start(text));

        assert!(cursor.move_line_end(text));
        assert_eq!(cursor.pos, text.len());
    }

    #[test]
    fn test_row_counts_newlines_and_wrapping() {
        let cursor = cursor_at(4); // just after the newline
        assert_eq!(cursor.row("abc\ndef", 80), 1);

        // 12 chars at width 5 wrap to three rows; cursor at the end is on row 2
        let cursor = cursor_at(12);
        assert_eq!(cursor.row("aaaaaaaaaaaa", 5), 2);
    }

    #[test]
    fn test_follow_keeps_cursor_row_in_window() {
        // 8 logical lines, box wide enough that nothing wraps
        let text = "a\nb\nc\nd\ne\nf\ng\nh";
        let mut cursor = cursor_at(text.len());
        cursor.follow(text, 40);
        assert_eq!(cursor.scroll_offset, 7 - (MAX_VISIBLE_LINES - 1));

        // Moving back to the top scrolls the window back up
        cursor.pos = 0;
        cursor.follow(text, 40);
        assert_eq!(cursor.scroll_offset, 0);
    }

    #[test]
    fn test_follow_resets_when_content_fits() {
        let mut cursor = cursor_at(2);
        cursor.scroll_offset = 3;
        cursor.follow("ok", 40);
        assert_eq!(cursor.scroll_offset, 0);
    }

    #[test]
    fn test_screen_pos_offsets_by_border() {
        let cursor = CursorState::new();
        let (x, y) = cursor.screen_pos("", Rect::new(0, 0, 40, 7));
        assert_eq!((x, y), (1, 1));
    }

    #[test]
    fn test_screen_pos_on_second_logical_line() {
        let text = "buy milk\ncall";
        let cursor = cursor_at(text.len());
        let (x, y) = cursor.screen_pos(text, Rect::new(0, 0, 40, 7));
        assert_eq!((x, y), (1 + 4, 1 + 1));
    }
}
