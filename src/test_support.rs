//! Shared helpers for unit tests. Compiled only under `cfg(test)`.

use crate::core::state::App;

/// Fresh application state for reducer and render tests.
pub fn test_app() -> App {
    App::new()
}
