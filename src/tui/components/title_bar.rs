//! # TitleBar Component
//!
//! Single-row header: app name on the left, transient status in the
//! middle, endpoint on the right. When the user has scrolled away from
//! the newest message and more content arrives below, a "↓ New"
//! indicator appears next to the status.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

/// Stateless title bar. Everything it shows is owned elsewhere, so it
/// borrows its props for the duration of the frame.
pub struct TitleBar<'a> {
    pub status_message: &'a str,
    pub endpoint: &'a str,
    pub has_unseen_content: bool,
}

impl<'a> TitleBar<'a> {
    pub fn new(status_message: &'a str, endpoint: &'a str, has_unseen_content: bool) -> Self {
        Self {
            status_message,
            endpoint,
            has_unseen_content,
        }
    }
}

impl<'a> Component for TitleBar<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [left, center, right] = Layout::horizontal([
            Constraint::Length(12),
            Constraint::Min(0),
            Constraint::Length(self.endpoint.len() as u16 + 2),
        ])
        .areas(area);

        let title = Paragraph::new(Line::from(Span::styled(
            " ToDoGPT",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, left);

        let mut status_spans = Vec::new();
        if self.has_unseen_content {
            status_spans.push(Span::styled(
                "↓ New ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        status_spans.push(Span::styled(
            self.status_message,
            Style::default().fg(Color::DarkGray),
        ));
        let status = Paragraph::new(Line::from(status_spans)).alignment(Alignment::Center);
        frame.render_widget(status, center);

        let endpoint = Paragraph::new(Line::from(Span::styled(
            format!("{} ", self.endpoint),
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Right);
        frame.render_widget(endpoint, right);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_string(title_bar: &mut TitleBar, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| title_bar.render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_shows_name_status_and_endpoint() {
        let mut bar = TitleBar::new("Thinking...", "http://localhost:8000", false);
        let text = render_to_string(&mut bar, 80);
        assert!(text.contains("ToDoGPT"));
        assert!(text.contains("Thinking..."));
        assert!(text.contains("http://localhost:8000"));
        assert!(!text.contains("↓ New"));
    }

    #[test]
    fn test_title_bar_shows_unseen_indicator() {
        let mut bar = TitleBar::new("", "http://localhost:8000", true);
        let text = render_to_string(&mut bar, 80);
        assert!(text.contains("↓ New"));
    }
}
