use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive data via props (struct fields), may hold internal
/// presentation state, and render into a `Rect` on the frame. `render`
/// takes `&mut self` so components can update layout caches and scroll
/// offsets during the render pass, matching Ratatui's `StatefulWidget`
/// pattern.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that consumes terminal events.
pub trait EventHandler {
    /// The high-level event this component emits back to the event loop.
    type Event;

    /// Handle a low-level `TuiEvent`, optionally emitting a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
