//! # ToDoGPT
//!
//! Terminal chat client for a local to-do assistant. Type a query,
//! press Enter, read the answer. One request at a time against
//! `POST {endpoint}/chat`.
//!
//! - [`core`]: state, actions, the reducer, configuration
//! - [`api`]: HTTP client for the chat endpoint
//! - [`tui`]: terminal rendering and the event loop

pub mod api;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
