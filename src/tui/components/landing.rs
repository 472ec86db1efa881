//! # Landing Component
//!
//! Welcome placeholder shown in the message area until the first
//! message exists. Disappears permanently once the conversation starts.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

const GREETING: &str = "👋 Hi there";
const WELCOME: &str = "Welcome to ToDoGPT.";
const PROMPT: &str = "What's on your mind today?";

/// Stateless welcome screen.
pub struct Landing;

impl Component for Landing {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                GREETING,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(WELCOME, Style::default().fg(Color::Gray))),
            Line::from(Span::styled(
                PROMPT,
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let height = lines.len() as u16;

        // Center the block both ways; Flex handles undersized areas
        let [vertical] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, vertical);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_landing_renders_welcome_text() {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| Landing.render(f, f.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("Welcome to ToDoGPT."));
        assert!(text.contains("What's on your mind today?"));
    }

    #[test]
    fn test_landing_survives_tiny_area() {
        let backend = TestBackend::new(10, 2);
        let mut terminal = Terminal::new(backend).unwrap();

        // Must not panic when there is no room to center
        terminal
            .draw(|f| Landing.render(f, f.area()))
            .unwrap();
    }
}
