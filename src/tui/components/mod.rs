//! # UI Components
//!
//! Each component implements [`Component`](crate::tui::component::Component)
//! for rendering and, where it reacts to input, [`EventHandler`](crate::tui::component::EventHandler).
//!
//! - [`title_bar`]: header row (app name, status, endpoint)
//! - [`landing`]: welcome placeholder shown before the first message
//! - [`message_list`]: scrollable conversation view
//! - [`message`]: a single chat bubble
//! - [`input_box`]: multi-line text entry

pub mod input_box;
pub mod landing;
pub mod message;
pub mod message_list;
pub mod title_bar;
