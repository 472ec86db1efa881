//! # Frame Composition
//!
//! `draw_ui` assembles the whole frame from the component tree. Two
//! arrangements exist: before the first message the input floats in the
//! center of the screen under the welcome text, afterwards it docks to
//! the bottom under the message list.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::input_box::InputBox;
use crate::tui::components::landing::Landing;
use crate::tui::components::message_list::MessageList;
use crate::tui::components::title_bar::TitleBar;

const DISCLAIMER: &str = "ToDoGPT can make mistakes. Check important info.";

/// Widest the floating input gets on large terminals.
const CENTERED_INPUT_MAX_WIDTH: u16 = 72;

pub fn draw_ui(frame: &mut Frame, state: &mut TuiState) {
    if state.app.started {
        draw_chat_layout(frame, state);
    } else {
        draw_landing_layout(frame, state);
    }
}

/// Title bar, scrollable conversation, docked input, disclaimer.
fn draw_chat_layout(frame: &mut Frame, state: &mut TuiState) {
    let input_height = state.input_box.calculate_height(frame.area().width);

    let [title_area, messages_area, input_area, disclaimer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(input_height),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let mut title_bar = TitleBar::new(
        &state.app.status_message,
        &state.endpoint,
        state.message_list.has_unseen_content,
    );
    title_bar.render(frame, title_area);

    let pulse = state.pulse_value();
    let spinner = state.spinner_frame();
    let mut message_list = MessageList::new(
        &mut state.message_list,
        &state.app.conversation,
        state.app.is_loading,
        pulse,
        spinner,
    );
    message_list.render(frame, messages_area);

    state.input_box.render(frame, input_area);
    draw_disclaimer(frame, disclaimer_area);
}

/// Welcome text with the input floating beneath it, centered.
fn draw_landing_layout(frame: &mut Frame, state: &mut TuiState) {
    let [title_area, main_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame.area());

    let mut title_bar = TitleBar::new(&state.app.status_message, &state.endpoint, false);
    title_bar.render(frame, title_area);

    let [input_column] = Layout::horizontal([Constraint::Max(CENTERED_INPUT_MAX_WIDTH)])
        .flex(Flex::Center)
        .areas(main_area);
    let input_height = state.input_box.calculate_height(input_column.width);

    let [landing_area, input_area, disclaimer_area] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(input_height),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .areas(input_column);

    Landing.render(frame, landing_area);
    state.input_box.render(frame, input_area);
    draw_disclaimer(frame, disclaimer_area);
}

fn draw_disclaimer(frame: &mut Frame, area: ratatui::layout::Rect) {
    let disclaimer = Paragraph::new(DISCLAIMER)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(disclaimer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_string(state: &mut TuiState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_empty_conversation_shows_landing() {
        let mut state = TuiState::new("http://localhost:8000".to_string());
        let text = render_to_string(&mut state, 80, 24);
        assert!(text.contains("Welcome to ToDoGPT."));
        assert!(text.contains("ToDoGPT can make mistakes."));
    }

    #[test]
    fn test_started_conversation_shows_messages_not_landing() {
        let mut state = TuiState::new("http://localhost:8000".to_string());
        update(&mut state.app, Action::Submit("Buy milk".to_string()));
        update(
            &mut state.app,
            Action::ResponseReceived("Got it!".to_string()),
        );

        let text = render_to_string(&mut state, 80, 24);
        assert!(text.contains("Buy milk"));
        assert!(text.contains("Got it!"));
        assert!(!text.contains("Welcome to ToDoGPT."));
    }

    #[test]
    fn test_loading_shows_thinking_indicator() {
        let mut state = TuiState::new("http://localhost:8000".to_string());
        update(&mut state.app, Action::Submit("Buy milk".to_string()));

        let text = render_to_string(&mut state, 80, 24);
        assert!(text.contains("Thinking..."));
    }
}
