//! # MessageList Component
//!
//! Scrollable view of the conversation.
//!
//! ## Responsibilities
//!
//! - Display the message sequence (user right-aligned, assistant left-aligned)
//! - Auto-scroll to the latest entry whenever the sequence changes
//! - Render the transient "Thinking..." indicator while a request is in flight
//! - Cache per-message heights for scroll math
//!
//! ## Architecture
//!
//! `MessageList` is a transient component (created each frame) that wraps
//! `&'a mut MessageListState` (persistent state) and the `Conversation`
//! (props). Since `Component::render` takes `&mut self`, the state (layout
//! cache, scroll offsets) can be mutated during the render pass, aligning
//! with Ratatui's `StatefulWidget` pattern.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::conversation::Conversation;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::message::MessageBubble;
use crate::tui::event::TuiEvent;

/// Spinner frames for the "Thinking..." indicator.
const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Rows occupied by the transient indicator (one line, plus breathing room).
const THINKING_HEIGHT: u16 = 2;

/// Layout and scroll state for the message list.
/// Must be persisted in the parent TuiState.
pub struct MessageListState {
    /// Scroll offset and view state
    pub scroll_state: ScrollViewState,
    /// Cached layout measurements
    pub layout: LayoutCache,
    /// When true, auto-scroll to bottom on new content
    pub stick_to_bottom: bool,
    /// True when content extends below the current scroll position
    pub has_unseen_content: bool,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
}

impl Default for MessageListState {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            layout: LayoutCache::new(),
            stick_to_bottom: true, // Start attached to bottom
            has_unseen_content: false,
            viewport_height: 0,
        }
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    /// Prevents overscrolling past the last message.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.layout.total_height().saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Clamp scroll and re-engage auto-scroll if the user has reached the bottom.
    /// Called on scroll-down events so that scrolling past the end re-pins.
    pub fn repin_if_at_bottom(&mut self) {
        let max_y = self.layout.total_height().saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y >= max_y {
            self.stick_to_bottom = true;
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

/// Scrollable conversation view component.
/// Created fresh each frame with references to state and data.
pub struct MessageList<'a> {
    pub state: &'a mut MessageListState,
    pub conversation: &'a Conversation,
    pub is_loading: bool,
    pub pulse_value: f32,
    pub spinner_frame: usize,
}

impl<'a> MessageList<'a> {
    pub fn new(
        state: &'a mut MessageListState,
        conversation: &'a Conversation,
        is_loading: bool,
        pulse_value: f32,
        spinner_frame: usize,
    ) -> Self {
        Self {
            state,
            conversation,
            is_loading,
            pulse_value,
            spinner_frame,
        }
    }

    fn thinking_line(&self) -> Line<'static> {
        let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
        Line::from(vec![
            Span::styled(
                format!(" {spinner} "),
                Style::default().fg(Color::Blue),
            ),
            Span::styled(
                "Thinking...",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ])
    }
}

impl<'a> Component for MessageList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area
        let num_messages = self.conversation.len();

        // 1. Update layout cache. Messages are immutable once appended, so
        // cached heights only go stale on width change or conversation reset.
        let layout = &mut self.state.layout;
        let reusable = layout.reusable_count(num_messages, content_width);
        layout.heights.truncate(reusable.min(layout.heights.len()));

        for message in self.conversation.messages.iter().skip(layout.heights.len()) {
            layout
                .heights
                .push(MessageBubble::calculate_height(message, content_width));
        }
        layout.rebuild_prefix_heights();
        layout.update_metadata(num_messages, content_width);

        let total_height = self.state.layout.total_height();

        // The transient indicator lives inside the scroll canvas so that
        // stick-to-bottom keeps it in view. It is not part of the data.
        let canvas_height = if self.is_loading {
            total_height.saturating_add(THINKING_HEIGHT)
        } else {
            total_height
        };

        // 2. Clamp scroll offset to prevent overscrolling past content.
        self.state.viewport_height = area.height;
        if !self.state.stick_to_bottom {
            self.state.clamp_scroll();
        }

        // When pinned, the effective offset after this frame is the bottom of
        // the canvas, not whatever the state still holds from last frame.
        let scroll_offset = if self.state.stick_to_bottom {
            canvas_height.saturating_sub(area.height)
        } else {
            self.state.scroll_state.offset().y
        };
        let visible_range = self.state.layout.visible_range(scroll_offset, area.height);

        // 3. Render visible messages into a ScrollView
        let mut scroll_view = ScrollView::new(Size::new(content_width, canvas_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = if visible_range.start > 0 {
            self.state.layout.prefix_heights[visible_range.start - 1]
        } else {
            0
        };

        for i in visible_range {
            let message = &self.conversation.messages[i];
            let height = self.state.layout.heights[i];

            // The newest user message breathes while its reply is pending
            let is_last = i == num_messages.saturating_sub(1);
            let pulse_intensity = if is_last && self.is_loading {
                self.pulse_value
            } else {
                0.0
            };

            let row_rect = Rect::new(0, y_offset, content_width, height);
            scroll_view.render_widget(MessageBubble::new(message, pulse_intensity), row_rect);
            y_offset = y_offset.saturating_add(height);
        }

        if self.is_loading {
            let indicator_rect = Rect::new(0, total_height, content_width, THINKING_HEIGHT);
            scroll_view.render_widget(Paragraph::new(self.thinking_line()), indicator_rect);
        }

        // Auto-scroll: stay attached to the latest entry
        if self.state.stick_to_bottom {
            self.state.scroll_state.scroll_to_bottom();
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);

        // 4. Update the unseen-content indicator for the title bar
        let current_offset = self.state.scroll_state.offset().y;
        self.state.has_unseen_content = canvas_height > area.height
            && current_offset < canvas_height.saturating_sub(area.height);
    }
}

/// EventHandler is implemented on `MessageListState` rather than `MessageList`
/// because event handling needs persistent state (scroll position,
/// stick_to_bottom), and `MessageList` is recreated each frame.
impl EventHandler for MessageListState {
    type Event = (); // Scrolling is handled internally, nothing to emit

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                self.stick_to_bottom = false;
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.repin_if_at_bottom();
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                self.stick_to_bottom = false;
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.repin_if_at_bottom();
                None
            }
            _ => None,
        }
    }
}

/// Cached layout measurements
pub struct LayoutCache {
    pub heights: Vec<u16>,
    pub prefix_heights: Vec<u16>,
    message_count: usize,
    content_width: u16,
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutCache {
    pub fn new() -> Self {
        Self {
            heights: Vec::new(),
            prefix_heights: Vec::new(),
            message_count: 0,
            content_width: 0,
        }
    }

    /// How many cached heights are still valid. Messages never mutate, so
    /// everything is reusable unless the width changed or the conversation
    /// was replaced with a shorter one.
    pub fn reusable_count(&self, message_count: usize, content_width: u16) -> usize {
        if self.content_width != content_width || self.heights.is_empty() {
            return 0;
        }
        if message_count < self.message_count {
            return 0;
        }
        self.message_count
    }

    pub fn update_metadata(&mut self, message_count: usize, content_width: u16) {
        self.message_count = message_count;
        self.content_width = content_width;
    }

    /// Summed content height. Saturates instead of overflowing when a very
    /// long session exceeds `u16` rows.
    pub fn total_height(&self) -> u16 {
        self.heights
            .iter()
            .fold(0u16, |acc, &h| acc.saturating_add(h))
    }

    pub fn rebuild_prefix_heights(&mut self) {
        self.prefix_heights = self
            .heights
            .iter()
            .scan(0u16, |acc, &h| {
                *acc = acc.saturating_add(h);
                Some(*acc)
            })
            .collect();
    }

    /// Messages overlapping the viewport, padded by half a screen either side.
    pub fn visible_range(
        &self,
        scroll_offset: u16,
        viewport_height: u16,
    ) -> std::ops::Range<usize> {
        let buffer = viewport_height / 2;
        let buffered_start = scroll_offset.saturating_sub(buffer);
        let buffered_end = scroll_offset
            .saturating_add(viewport_height)
            .saturating_add(buffer);

        let start = self
            .prefix_heights
            .partition_point(|&end| end <= buffered_start);
        let end = self
            .prefix_heights
            .partition_point(|&end| end < buffered_end)
            .saturating_add(1)
            .min(self.prefix_heights.len());

        start..end
    }
}
