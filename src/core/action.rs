//! # Actions
//!
//! Everything that can happen in ToDoGPT becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! The endpoint answers? That's `Action::ResponseReceived`.
//!
//! The `update()` function takes the current state and an action,
//! then returns the effect the event loop should perform next.
//! No I/O here. The network call happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: apply an action, assert on the state.
//! The whole lifecycle is `idle → submitting → (success | failure) → idle`,
//! driven entirely by `is_loading`.

use log::{debug, info, warn};

use crate::core::state::App;

/// Fallback assistant message appended when the request fails for any
/// reason - network error, non-JSON body. The user never sees the cause.
pub const FALLBACK_RESPONSE: &str = "⚠ Failed to get response. Try again.";

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// User submitted input text (Enter in the input box).
    Submit(String),
    /// The endpoint returned assistant text.
    ResponseReceived(String),
    /// The request failed. The payload is logged, not displayed.
    RequestFailed(String),
    Quit,
}

/// Side effect the event loop must perform after a state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Dispatch this query on a background task.
    SpawnRequest(String),
    Quit,
}

/// The reducer. All state mutation flows through here.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Submit(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                debug!("Submit ignored: blank input");
                return Effect::None;
            }
            if app.is_loading {
                debug!("Submit ignored: request already in flight");
                return Effect::None;
            }

            let query = trimmed.to_string();
            app.conversation.push_user(query.clone());
            app.started = true;
            app.is_loading = true;
            app.status_message = String::from("Thinking...");
            info!("Submitting query ({} bytes)", query.len());
            Effect::SpawnRequest(query)
        }
        Action::ResponseReceived(text) => {
            // Empty content is displayed as-is; the endpoint owns its answer.
            debug!("Response received ({} bytes)", text.len());
            app.conversation.push_assistant(text);
            app.is_loading = false;
            app.status_message = String::new();
            Effect::None
        }
        Action::RequestFailed(cause) => {
            warn!("Request failed: {cause}");
            app.conversation.push_assistant(FALLBACK_RESPONSE.to_string());
            app.is_loading = false;
            app.status_message = String::new();
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
