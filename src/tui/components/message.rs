use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Padding, Paragraph, Widget, Wrap};

use crate::core::conversation::{Message, Role};

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;
/// A bubble never spans more than this fraction of the row width (percent).
const MAX_BUBBLE_PERCENT: u16 = 75;

/// A stateless component that renders one chat bubble with role-based styling.
///
/// `MessageBubble` is a transient widget: it's created fresh each frame with
/// the data it needs. User messages are right-aligned, assistant messages
/// left-aligned, each capped at 75% of the row width, the terminal
/// equivalent of the familiar chat layout.
///
/// [`calculate_height`](Self::calculate_height) predicts rendered height
/// using `textwrap` with options matching Ratatui's `Paragraph` wrapping, so
/// the parent `MessageList` can compute scroll positions without rendering.
#[derive(Clone, Copy)]
pub struct MessageBubble<'a> {
    pub message: &'a Message,
    /// Current pulse intensity (0.0 to 1.0) while a reply is being awaited
    pub pulse_intensity: f32,
}

/// Pulse intensity threshold above which the border transitions to BOLD.
const PULSE_BOLD_THRESHOLD: f32 = 0.6;
/// Pulse intensity threshold above which the border transitions from DIM to normal.
const PULSE_NORMAL_THRESHOLD: f32 = 0.2;

impl<'a> MessageBubble<'a> {
    pub fn new(message: &'a Message, pulse_intensity: f32) -> Self {
        Self {
            message,
            pulse_intensity,
        }
    }

    /// Widest bubble allowed for the given row width.
    fn max_bubble_width(row_width: u16) -> u16 {
        let capped = (u32::from(row_width) * u32::from(MAX_BUBBLE_PERCENT) / 100) as u16;
        capped.max(HORIZONTAL_OVERHEAD + 1)
    }

    /// Actual bubble width: shrinks to fit short messages so a two-word
    /// reply doesn't get a three-quarter-screen box.
    pub fn bubble_width(message: &Message, row_width: u16) -> u16 {
        // max_bubble_width has a floor above HORIZONTAL_OVERHEAD, so the
        // clamp below is well-formed even for degenerate row widths.
        let max_width = Self::max_bubble_width(row_width);
        let longest_line = message
            .content
            .trim()
            .lines()
            .map(|l| l.chars().count() as u16)
            .max()
            .unwrap_or(0);
        (longest_line + HORIZONTAL_OVERHEAD).clamp(HORIZONTAL_OVERHEAD + 1, max_width)
    }

    /// Calculate the height required for this message given the row width.
    ///
    /// The wrapping options must match the Ratatui default for `Paragraph`
    /// to ensure 1:1 mapping between calculated and actual height.
    pub fn calculate_height(message: &Message, row_width: u16) -> u16 {
        let bubble = Self::bubble_width(message, row_width);
        let content_width = bubble.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            // Degenerate case: terminal too narrow for borders + padding.
            return 1;
        }

        let content = message.content.trim();
        if content.is_empty() {
            return VERTICAL_OVERHEAD;
        }

        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);

        let lines = textwrap::wrap(content, options);
        (lines.len() as u16).max(1) + VERTICAL_OVERHEAD
    }

    /// Sub-rect of `area` the bubble occupies: flush right for the user,
    /// flush left for the assistant.
    fn bubble_rect(&self, area: Rect) -> Rect {
        let width = Self::bubble_width(self.message, area.width).min(area.width);
        let x = match self.message.role {
            Role::User => area.x + area.width.saturating_sub(width),
            Role::Assistant => area.x,
        };
        Rect::new(x, area.y, width, area.height)
    }
}

impl<'a> Widget for MessageBubble<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let (title, style) = match self.message.role {
            Role::User => ("you", Style::default().fg(Color::Green)),
            Role::Assistant => ("todogpt", Style::default().fg(Color::Blue)),
        };

        let mut border_style = style.add_modifier(Modifier::DIM);

        // Breathing border while the reply to this message is pending:
        // DIM → normal → BOLD in the role's own color
        if self.pulse_intensity > PULSE_BOLD_THRESHOLD {
            border_style = border_style
                .remove_modifier(Modifier::DIM)
                .add_modifier(Modifier::BOLD);
        } else if self.pulse_intensity > PULSE_NORMAL_THRESHOLD {
            border_style = border_style.remove_modifier(Modifier::DIM);
        }

        let bubble_area = self.bubble_rect(area);

        let block = Block::bordered()
            .title(title)
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(border_style)
            .title_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_area = block.inner(bubble_area);
        block.render(bubble_area, buf);

        let paragraph = Paragraph::new(self.message.content.trim())
            .style(style)
            .wrap(Wrap { trim: true });

        paragraph.render(inner_area, buf);
    }
}
