//! # Terminal User Interface
//!
//! Owns the terminal, the event loop, and the dispatch of background
//! requests. The loop is synchronous: it draws a frame, drains any
//! actions reported by background tasks, then polls for input. State
//! changes only happen through [`update`], which returns the effect
//! the loop must perform.
//!
//! ```text
//! draw → drain actions → poll input → update() → effect → repeat
//! ```
//!
//! Network requests run on a Tokio task and report back over an mpsc
//! channel, so the UI never blocks on the endpoint.

pub mod component;
pub mod components;
pub mod event;
pub mod ui;

use std::io::{self, Write};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use log::{debug, error, info};

use crate::api::{ChatBackend, HttpChatClient};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::input_box::{InputBox, InputEvent};
use crate::tui::components::message_list::MessageListState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::draw_ui;

/// Poll timeout while something on screen is animating.
const ANIMATING_POLL: Duration = Duration::from_millis(80);
/// Poll timeout when the screen is static.
const IDLE_POLL: Duration = Duration::from_millis(500);

/// Everything the render pass and event loop need, in one place.
pub struct TuiState {
    pub app: App,
    pub input_box: InputBox,
    pub message_list: MessageListState,
    /// Shown in the title bar so the user knows where queries go.
    pub endpoint: String,
    animation_tick: u64,
}

impl TuiState {
    pub fn new(endpoint: String) -> Self {
        Self {
            app: App::new(),
            input_box: InputBox::new(),
            message_list: MessageListState::new(),
            endpoint,
            animation_tick: 0,
        }
    }

    /// Breathing intensity in [0, 1] for the pending message border.
    pub fn pulse_value(&self) -> f32 {
        ((self.animation_tick as f32) * 0.3).sin() * 0.5 + 0.5
    }

    pub fn spinner_frame(&self) -> usize {
        self.animation_tick as usize
    }

    /// The spinner and pulse only move while a request is pending.
    fn is_animating(&self) -> bool {
        self.app.is_loading
    }
}

/// Restores terminal modes on drop, including on panic unwind.
struct TerminalModeGuard;

impl TerminalModeGuard {
    fn enable() -> io::Result<Self> {
        execute!(
            io::stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
        )?;
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            io::stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape,
        );
        let _ = io::stdout().flush();
    }
}

/// Run the TUI until the user quits.
pub async fn run(config: ResolvedConfig) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let _mode_guard = TerminalModeGuard::enable()?;

    let (tx, rx): (Sender<Action>, Receiver<Action>) = std::sync::mpsc::channel();
    let backend: Arc<dyn ChatBackend> = Arc::new(HttpChatClient::new(config.endpoint.clone()));
    let mut state = TuiState::new(config.endpoint);

    info!("TUI started, endpoint: {}", state.endpoint);

    'main: loop {
        terminal.draw(|frame| draw_ui(frame, &mut state))?;

        // Actions reported by background request tasks
        while let Ok(action) = rx.try_recv() {
            if apply(&mut state, action, &backend, &tx) {
                break 'main;
            }
        }

        let timeout = if state.is_animating() {
            ANIMATING_POLL
        } else {
            IDLE_POLL
        };

        // Drain every pending input event before redrawing, so a paste
        // or a fast typist never lags a frame behind per character.
        let mut next = poll_event_timeout(timeout);
        while let Some(tui_event) = next {
            if handle_input(&mut state, &tui_event, &backend, &tx) {
                break 'main;
            }
            next = poll_event_immediate();
        }

        state.animation_tick = state.animation_tick.wrapping_add(1);
    }

    ratatui::restore();
    Ok(())
}

/// Route one input event. Returns true when the loop should exit.
fn handle_input(
    state: &mut TuiState,
    tui_event: &TuiEvent,
    backend: &Arc<dyn ChatBackend>,
    tx: &Sender<Action>,
) -> bool {
    match tui_event {
        TuiEvent::ForceQuit => {
            return apply(state, Action::Quit, backend, tx);
        }
        TuiEvent::Escape => {
            // Esc is ignored mid-request so a stray key cannot abandon
            // an answer the user is waiting on.
            if !state.app.is_loading {
                return apply(state, Action::Quit, backend, tx);
            }
        }
        TuiEvent::Submit if state.app.is_loading => {
            // Keep the typed text in the box; the user can re-send it
            // once the current request settles.
            debug!("Enter ignored while a request is in flight");
        }
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            state.message_list.handle_event(tui_event);
        }
        TuiEvent::Resize => {} // The next draw re-measures everything
        _ => {
            if let Some(InputEvent::Submit(text)) = state.input_box.handle_event(tui_event) {
                return apply(state, Action::Submit(text), backend, tx);
            }
        }
    }
    false
}

/// Run the reducer and perform the returned effect.
/// Returns true when the loop should exit.
fn apply(
    state: &mut TuiState,
    action: Action,
    backend: &Arc<dyn ChatBackend>,
    tx: &Sender<Action>,
) -> bool {
    match update(&mut state.app, action) {
        Effect::None => false,
        Effect::SpawnRequest(query) => {
            state.message_list.stick_to_bottom = true;
            spawn_request(Arc::clone(backend), query, tx.clone());
            false
        }
        Effect::Quit => true,
    }
}

/// Send the query on a background task and report the outcome as an
/// action. The task never touches state directly.
fn spawn_request(backend: Arc<dyn ChatBackend>, query: String, tx: Sender<Action>) {
    tokio::spawn(async move {
        let action = match backend.send(&query).await {
            Ok(text) => Action::ResponseReceived(text),
            Err(err) => Action::RequestFailed(err.to_string()),
        };
        if tx.send(action).is_err() {
            // The UI is gone; nothing left to notify.
            error!("Dropping request outcome: event loop has shut down");
        }
    });
}
