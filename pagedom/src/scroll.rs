use std::collections::HashMap;

use crate::document::NodeId;

/// Scroll offset for the window or a scroll container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollOffset {
    pub x: u32,
    pub y: u32,
}

impl ScrollOffset {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Tracks the window scroll position and per-element `scrollTop` values.
#[derive(Debug, Default)]
pub struct ScrollState {
    window: ScrollOffset,
    elements: HashMap<NodeId, u32>,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn window(&self) -> ScrollOffset {
        self.window
    }

    /// Scroll the window, clamping each axis to `max`.
    /// Returns true if the offset changed.
    pub fn scroll_window_to(&mut self, x: u32, y: u32, max: ScrollOffset) -> bool {
        let next = ScrollOffset::new(x.min(max.x), y.min(max.y));
        if next == self.window {
            return false;
        }
        self.window = next;
        true
    }

    pub fn scroll_top(&self, node: NodeId) -> u32 {
        self.elements.get(&node).copied().unwrap_or_default()
    }

    /// Set an element's vertical offset, clamped to `max_y`.
    /// Returns true if the offset changed.
    pub fn set_scroll_top(&mut self, node: NodeId, y: u32, max_y: u32) -> bool {
        let next = y.min(max_y);
        if self.scroll_top(node) == next {
            return false;
        }
        self.elements.insert(node, next);
        true
    }
}
