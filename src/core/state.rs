//! # Application State
//!
//! Core business state for ToDoGPT. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── conversation: Conversation    // ordered message sequence
//! ├── status_message: String        // title bar text
//! ├── is_loading: bool              // one request in flight at most
//! └── started: bool                 // first submission happened (layout only)
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::conversation::Conversation;

pub struct App {
    pub conversation: Conversation,
    pub status_message: String,
    /// True while a request is outstanding. Gates new submissions.
    pub is_loading: bool,
    /// Flips true on the first accepted submission. Moves the input bar from
    /// centered to docked. No effect on data.
    pub started: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            conversation: Conversation::new(),
            status_message: String::from("Welcome to ToDoGPT!"),
            is_loading: false,
            started: false,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
