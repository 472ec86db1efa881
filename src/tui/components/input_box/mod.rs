//! # InputBox Component
//!
//! Captures the pending user text and the submission trigger.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Handle submission (Enter): blank or whitespace-only buffers are
//!   never submitted
//!
//! ## State Management
//!
//! The buffer is internal state. Cursor position and scroll state are
//! encapsulated in `CursorState`. Whether a submission is *accepted* is not
//! this component's call; the reducer re-checks the in-flight flag.

mod cursor;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::CursorState;

/// Borders plus one column of padding on each side.
const FRAME_COLS: u16 = 4;
/// Top and bottom border rows.
const FRAME_ROWS: u16 = 2;
/// Content rows shown before the box scrolls internally.
const MAX_VISIBLE_LINES: u16 = 5;

/// Wrapping options shared by rendering, height prediction, and cursor math.
/// Must match Ratatui's `Paragraph` wrapping so predicted rows line up with
/// what gets drawn.
fn wrap_opts(width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Columns available for text inside the bordered box.
fn text_width(box_width: u16) -> u16 {
    box_width.saturating_sub(FRAME_COLS)
}

/// Rows `text` occupies when wrapped to `width` columns. Empty text still
/// occupies the row the cursor sits on, and a trailing newline opens a row.
fn line_count(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 1;
    }
    text.split('\n')
        .map(|line| textwrap::wrap(line, wrap_opts(width)).len().max(1) as u16)
        .fold(0u16, |rows, n| rows.saturating_add(n))
        .max(1)
}

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the text (Enter on a non-blank buffer)
    Submit(String),
    /// Text content changed (parent uses this to trigger a redraw)
    ContentChanged,
}

/// Multi-line text input with internal scrolling.
pub struct InputBox {
    /// Text buffer (internal state)
    pub buffer: String,
    /// Cursor position and scroll offset (see `CursorState`)
    cursor: CursorState,
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: CursorState::new(),
        }
    }

    /// Height the box needs for the current buffer, clamped to the visible
    /// window. Returns a value in
    /// `[1 + FRAME_ROWS, MAX_VISIBLE_LINES + FRAME_ROWS]`.
    pub fn calculate_height(&self, box_width: u16) -> u16 {
        let rows = line_count(&self.buffer, text_width(box_width));
        rows.min(MAX_VISIBLE_LINES) + FRAME_ROWS
    }

    /// Buffer split into wrapped display rows, one String per row. Logical
    /// lines are wrapped independently so empty lines survive.
    fn wrapped_rows(&self, width: u16) -> Vec<String> {
        self.buffer
            .split('\n')
            .flat_map(|line| {
                let mut rows: Vec<String> = textwrap::wrap(line, wrap_opts(width))
                    .iter()
                    .map(|row| row.to_string())
                    .collect();
                if rows.is_empty() {
                    rows.push(String::new());
                }
                rows
            })
            .collect()
    }

    /// The slice of rows currently scrolled into view.
    fn visible_text(&self, box_width: u16) -> String {
        if self.cursor.scroll_offset == 0 {
            return self.buffer.clone();
        }

        let width = text_width(box_width);
        if width == 0 {
            return String::new();
        }

        let rows = self.wrapped_rows(width);
        let start = (self.cursor.scroll_offset as usize).min(rows.len());
        let end = (start + MAX_VISIBLE_LINES as usize).min(rows.len());
        rows[start..end].join("\n")
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.cursor.follow(&self.buffer, area.width);

        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .title("Message ToDoGPT");

        let input = Paragraph::new(self.visible_text(area.width))
            .block(block)
            .style(Style::default().fg(Color::Gray));

        frame.render_widget(input, area);

        let (cursor_x, cursor_y) = self.cursor.screen_pos(&self.buffer, area);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor.pos, *c);
                self.cursor.pos += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                self.buffer.insert_str(self.cursor.pos, text);
                self.cursor.pos += text.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                let end = self.cursor.pos;
                self.cursor.move_left(&self.buffer).then(|| {
                    self.buffer.drain(self.cursor.pos..end);
                    InputEvent::ContentChanged
                })
            }
            TuiEvent::Delete => {
                let start = self.cursor.pos;
                let under_cursor = self.buffer[start..].chars().next();
                under_cursor.map(|c| {
                    self.buffer.drain(start..start + c.len_utf8());
                    InputEvent::ContentChanged
                })
            }
            TuiEvent::CursorLeft => self
                .cursor
                .move_left(&self.buffer)
                .then_some(InputEvent::ContentChanged),
            TuiEvent::CursorRight => self
                .cursor
                .move_right(&self.buffer)
                .then_some(InputEvent::ContentChanged),
            TuiEvent::CursorWordLeft => self
                .cursor
                .move_word_left(&self.buffer)
                .then_some(InputEvent::ContentChanged),
            TuiEvent::CursorWordRight => self
                .cursor
                .move_word_right(&self.buffer)
                .then_some(InputEvent::ContentChanged),
            TuiEvent::CursorHome => self
                .cursor
                .move_line_start(&self.buffer)
                .then_some(InputEvent::ContentChanged),
            TuiEvent::CursorEnd => self
                .cursor
                .move_line_end(&self.buffer)
                .then_some(InputEvent::ContentChanged),
            TuiEvent::Submit => {
                if !self.buffer.trim().is_empty() {
                    let text = std::mem::take(&mut self.buffer);
                    self.cursor.reset();
                    Some(InputEvent::Submit(text))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_input_box_new() {
        let input = InputBox::new();
        assert!(input.buffer.is_empty());
    }

    #[test]
    fn test_handle_input() {
        let mut input = InputBox::new();

        let res = input.handle_event(&TuiEvent::InputChar('a'));
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");

        let res = input.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "ab");

        let res = input.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");
    }

    #[test]
    fn test_backspace_removes_a_whole_multibyte_char() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::InputChar('a'));
        input.handle_event(&TuiEvent::InputChar('ñ'));

        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.buffer, "a");
    }

    #[test]
    fn test_delete_at_end_is_noop() {
        let mut input = InputBox::new();
        input.buffer = "ab".to_string();
        input.handle_event(&TuiEvent::CursorEnd);
        assert_eq!(input.handle_event(&TuiEvent::Delete), None);
        assert_eq!(input.buffer, "ab");
    }

    #[test]
    fn test_submit_clears_buffer() {
        let mut input = InputBox::new();
        input.buffer = "hello".to_string();

        let res = input.handle_event(&TuiEvent::Submit);
        match res {
            Some(InputEvent::Submit(text)) => assert_eq!(text, "hello"),
            _ => panic!("Expected Submit event"),
        }

        assert!(input.buffer.is_empty(), "Buffer should be cleared after submit");
    }

    #[test]
    fn test_submit_blank_buffer_is_noop() {
        let mut input = InputBox::new();
        assert_eq!(input.handle_event(&TuiEvent::Submit), None);

        input.buffer = "   \t ".to_string();
        assert_eq!(input.handle_event(&TuiEvent::Submit), None);
        // Whitespace buffer is kept, not consumed
        assert_eq!(input.buffer, "   \t ");
    }

    #[test]
    fn test_paste_preserves_newlines() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::Paste("line one\nline two".to_string()));
        assert_eq!(input.buffer, "line one\nline two");
    }

    // -- line_count --------------------------------------------------------

    #[test]
    fn test_line_count_empty_is_one_row() {
        assert_eq!(line_count("", 40), 1);
    }

    #[test]
    fn test_line_count_zero_width_is_one_row() {
        assert_eq!(line_count("hello", 0), 1);
    }

    #[test]
    fn test_line_count_trailing_newline_opens_a_row() {
        assert_eq!(line_count("hello\n", 40), 2);
    }

    #[test]
    fn test_line_count_blank_line_between_text_survives() {
        assert_eq!(line_count("a\n\nb", 40), 3);
    }

    #[test]
    fn test_line_count_wraps_long_text() {
        // 12 chars into a 5-wide column
        assert_eq!(line_count("aaaaaaaaaaaa", 5), 3);
    }

    // -- geometry ----------------------------------------------------------

    #[test]
    fn test_calculate_height_grows_with_content() {
        let mut input = InputBox::new();
        assert_eq!(input.calculate_height(40), 1 + FRAME_ROWS);

        input.buffer = "a\nb\nc".to_string();
        assert_eq!(input.calculate_height(40), 3 + FRAME_ROWS);
    }

    #[test]
    fn test_calculate_height_clamps_at_max_visible() {
        let mut input = InputBox::new();
        input.buffer = "a\nb\nc\nd\ne\nf\ng\nh".to_string();
        assert_eq!(input.calculate_height(40), MAX_VISIBLE_LINES + FRAME_ROWS);
    }

    #[test]
    fn test_render_shows_placeholder_title() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut input = InputBox::new();

        terminal
            .draw(|f| {
                input.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();

        assert!(text.contains("Message ToDoGPT"));
    }
}
