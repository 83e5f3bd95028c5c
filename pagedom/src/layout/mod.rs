//! Block layout.
//!
//! Every element is a block stacked vertically inside its parent: text lines
//! first, then children in order. Text wraps at the parent's content width,
//! so narrowing the viewport makes text-bearing boxes taller.

mod length;

pub use length::{parse_length, FONT_SIZE};

use crate::document::{Document, NodeId};
use crate::text::line_count;
use crate::types::Size;

/// Line box height in pixels.
pub const LINE_HEIGHT: u32 = 20;
/// Advance of a one-column glyph in pixels.
pub const GLYPH_WIDTH: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1024, 768)
    }
}

impl Document {
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Width available to the children of `id`.
    pub fn content_width(&self, id: NodeId) -> u32 {
        let outer = match self.parent(id) {
            Some(parent) => self.content_width(parent),
            None => self.viewport.width,
        };
        outer.saturating_sub(self.node(id).padding.horizontal_total())
    }

    /// Height of the text laid out directly inside `id`.
    pub fn text_height(&self, id: NodeId) -> u32 {
        let Some(text) = self.text(id) else {
            return 0;
        };
        let columns = (self.content_width(id) / GLYPH_WIDTH) as usize;
        line_count(text, columns) as u32 * LINE_HEIGHT
    }

    /// Height the element would have without any inline `height`.
    pub fn natural_height(&self, id: NodeId) -> u32 {
        let node = self.node(id);
        match node.height {
            Size::Fixed(height) => height,
            Size::Auto => {
                let children: u32 = node.children.iter().map(|&c| self.client_height(c)).sum();
                node.padding.vertical_total() + self.text_height(id) + children
            }
        }
    }

    /// Rendered box height: the inline `height` if it resolves, the natural
    /// height otherwise.
    pub fn client_height(&self, id: NodeId) -> u32 {
        self.style_property(id, "height")
            .and_then(parse_length)
            .unwrap_or_else(|| self.natural_height(id))
    }

    /// Height of the element's content including any overflow hidden by an
    /// inline height, never less than the box itself.
    pub fn scroll_height(&self, id: NodeId) -> u32 {
        self.natural_height(id).max(self.client_height(id))
    }

    /// Distance from the top of the page to the top of the element's box.
    pub fn offset_top(&self, id: NodeId) -> u32 {
        let Some(parent) = self.parent(id) else {
            return 0;
        };
        let preceding: u32 = self
            .children(parent)
            .iter()
            .take_while(|&&sibling| sibling != id)
            .map(|&sibling| self.client_height(sibling))
            .sum();
        self.offset_top(parent)
            + self.node(parent).padding.top
            + self.text_height(parent)
            + preceding
    }
}
