use pagedom::{Document, NodeId, SelectorError};

use super::{Dom, Event, EventKind, EventTarget, FrameId};
use crate::accordion::Accordion;
use crate::error::{DomError, Result};

impl From<SelectorError> for DomError {
    fn from(err: SelectorError) -> Self {
        Self::InvalidSelector {
            selector: err.selector,
            reason: err.reason,
        }
    }
}

impl From<pagedom::Event> for Event<NodeId> {
    fn from(event: pagedom::Event) -> Self {
        match event {
            pagedom::Event::Click { current_target, .. } => Event::Click { current_target },
            pagedom::Event::Resize { width, height } => Event::Resize { width, height },
            pagedom::Event::AnimationFrame { id } => Event::AnimationFrame { id: FrameId(id.0) },
        }
    }
}

impl From<EventKind> for pagedom::EventKind {
    fn from(kind: EventKind) -> Self {
        match kind {
            EventKind::Click => pagedom::EventKind::Click,
            EventKind::Resize => pagedom::EventKind::Resize,
        }
    }
}

impl Dom for Document {
    type Node = NodeId;

    fn query_selector_all(
        &self,
        scope: Option<&NodeId>,
        selector: &str,
    ) -> std::result::Result<Vec<NodeId>, DomError> {
        Ok(Document::query_selector_all(self, scope.copied(), selector)?)
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.get_element_by_id(id)
    }

    fn get_attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        Document::get_attribute(self, *node, name)
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) {
        Document::set_attribute(self, *node, name, value);
    }

    fn add_class(&mut self, node: &NodeId, class: &str) {
        Document::add_class(self, *node, class);
    }

    fn remove_class(&mut self, node: &NodeId, class: &str) {
        Document::remove_class(self, *node, class);
    }

    fn set_style(&mut self, node: &NodeId, property: &str, value: &str) {
        self.set_style_property(*node, property, value);
    }

    fn remove_style(&mut self, node: &NodeId, property: &str) {
        self.remove_style_property(*node, property);
    }

    fn scroll_height(&self, node: &NodeId) -> u32 {
        Document::scroll_height(self, *node)
    }

    fn offset_top(&self, node: &NodeId) -> u32 {
        Document::offset_top(self, *node)
    }

    fn scroll_window_to(&mut self, x: u32, y: u32) {
        self.scroll_to(x, y);
    }

    fn set_scroll_top(&mut self, node: &NodeId, y: u32) {
        Document::set_scroll_top(self, *node, y);
    }

    fn add_event_listener(&mut self, target: EventTarget<NodeId>, kind: EventKind) {
        let target = match target {
            EventTarget::Window => pagedom::EventTarget::Window,
            EventTarget::Node(node) => pagedom::EventTarget::Node(node),
        };
        Document::add_event_listener(self, target, kind.into());
    }

    fn request_animation_frame(&mut self) -> FrameId {
        FrameId(Document::request_animation_frame(self).0)
    }
}

/// Event pumping for accordions hosted by an in-memory document.
impl Accordion<Document> {
    /// Click `node` and dispatch the resulting events. Dispatch stops at the
    /// first listener that handles the click.
    pub fn click(&mut self, node: NodeId) -> Result<bool> {
        for event in self.dom().click(node) {
            if self.handle_event(&event.into())? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Resize the viewport and dispatch the resize event, if any.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        for event in self.dom_mut().resize(width, height) {
            self.handle_event(&event.into())?;
        }
        Ok(())
    }

    /// Run one rendering frame. Returns how many frame callbacks ran.
    ///
    /// Every frame is delivered even when one fails; the first error is
    /// returned afterwards.
    pub fn advance_frame(&mut self) -> Result<usize> {
        let mut ran = 0;
        let mut first_error = None;
        for event in self.dom_mut().advance_frame() {
            match self.handle_event(&event.into()) {
                Ok(true) => ran += 1,
                Ok(false) => {}
                Err(err) => {
                    first_error.get_or_insert(err);
                }
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(ran),
        }
    }
}
