//! Expanded height bookkeeping.
//!
//! Content heights are animated between `0` and a cached pixel value, since
//! `auto` cannot be transitioned to. The cache lives in an attribute on the
//! content element and is refreshed on every viewport resize. Refreshing a
//! collapsed item needs it expanded first, and the new height can only be
//! read after a layout pass, so the measurement is finished in an animation
//! frame.

use super::Accordion;
use super::state::Transition;
use crate::attributes;
use crate::dom::{Dom, FrameId};
use crate::error::Result;

/// A measurement waiting for its frame.
#[derive(Debug, Clone)]
pub(crate) struct PendingFrame<N> {
    pub(crate) frame: FrameId,
    pub(crate) item: N,
    pub(crate) was_expanded: bool,
}

impl<D: Dom> Accordion<D> {
    /// Measure the content's natural height and cache it with the buffer
    /// added. Returns the cached value.
    pub fn item_expanded_height_calculate(&mut self, item: &D::Node) -> Result<u32> {
        let content = self.content(item)?;
        self.dom.remove_style(&content, "height");
        let height = self.dom.scroll_height(&content) + self.config.height_buffer;
        self.dom
            .set_attribute(&content, attributes::EXPANDED_HEIGHT, &height.to_string());
        Ok(height)
    }

    /// Re-measure `item` on the next frame, expanding it out of sight first
    /// if it is collapsed.
    pub fn item_expanded_height_recalculate(&mut self, item: &D::Node) -> Result<FrameId> {
        let was_expanded = self.item_is_expanded(item);
        if !was_expanded {
            self.expand_with(item, Transition::Shadow)?;
        }

        let frame = self.dom.request_animation_frame();
        log::debug!("[item_expanded_height_recalculate] {item:?} waits for {frame:?}");
        self.pending.push(PendingFrame {
            frame,
            item: item.clone(),
            was_expanded,
        });
        Ok(frame)
    }

    /// Recalculate every item of every bundle.
    pub fn resize_handler(&mut self) -> Result<()> {
        for bundle in self.bundles()? {
            for item in self.items(&bundle)? {
                self.item_expanded_height_recalculate(&item)?;
            }
        }
        Ok(())
    }

    /// Cached expanded height of `item`, if it has been measured.
    pub fn expanded_height(&self, item: &D::Node) -> Result<Option<u32>> {
        let content = self.content(item)?;
        Ok(self
            .dom
            .get_attribute(&content, attributes::EXPANDED_HEIGHT)
            .and_then(|value| value.parse().ok()))
    }

    /// Measurements still waiting for a frame.
    pub fn pending_frames(&self) -> usize {
        self.pending.len()
    }

    /// Set the content height to the cached expanded height. Without a
    /// cached value the inline height is dropped instead.
    pub fn height_apply_expanded(&mut self, item: &D::Node) -> Result<()> {
        let content = self.content(item)?;
        match self.dom.get_attribute(&content, attributes::EXPANDED_HEIGHT) {
            Some(height) => {
                let value = format!("{height}{}", self.config.height_units);
                self.dom.set_style(&content, "height", &value);
            }
            None => {
                log::warn!("[height_apply_expanded] {item:?} has no cached height");
                self.dom.remove_style(&content, "height");
            }
        }
        Ok(())
    }

    pub fn height_apply_collapsed(&mut self, item: &D::Node) -> Result<()> {
        let content = self.content(item)?;
        let value = format!("0{}", self.config.height_units);
        self.dom.set_style(&content, "height", &value);
        Ok(())
    }

    /// Whether `item` is only expanded to be measured.
    pub(crate) fn is_shadowed(&self, item: &D::Node) -> bool {
        self.pending
            .iter()
            .any(|pending| pending.item == *item && !pending.was_expanded)
    }

    /// Record a real transition of `item` so waiting measurements restore
    /// it instead of the state it had when they were requested.
    pub(crate) fn pending_settle(&mut self, item: &D::Node, expanded: bool) {
        for pending in self.pending.iter_mut().filter(|pending| pending.item == *item) {
            pending.was_expanded = expanded;
        }
    }

    /// Finish every measurement queued for `frame`, in request order. A
    /// failing item does not stop the others; the first error is returned
    /// once all of them ran.
    pub(crate) fn run_frame(&mut self, frame: FrameId) -> Result<bool> {
        let (due, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|pending| pending.frame == frame);
        self.pending = rest;

        if due.is_empty() {
            log::warn!("[run_frame] {frame:?} was not requested by this accordion");
            return Ok(false);
        }

        let mut first_error = None;
        for pending in due {
            if let Err(err) = self.frame_finish(&pending) {
                log::error!("[run_frame] {:?}: {err}", pending.item);
                first_error.get_or_insert(err);
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(true),
        }
    }

    fn frame_finish(&mut self, pending: &PendingFrame<D::Node>) -> Result<()> {
        let item = &pending.item;
        self.item_expanded_height_calculate(item)?;
        if pending.was_expanded || self.is_shadowed(item) {
            // Expanded for real, or a later measurement still needs it open
            self.height_apply_expanded(item)
        } else {
            self.collapse_with(item, Transition::Quiet)
        }
    }
}
