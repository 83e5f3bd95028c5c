//! Document access used by the accordion.
//!
//! The accordion never touches a global document or window. Everything it
//! reads or writes goes through a [`Dom`] value owned by the accordion, which
//! lets the same component drive a browser binding or the in-memory
//! [`pagedom::Document`].

mod page;

use std::fmt;

use crate::error::DomError;

/// Handle for a requested animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub u64);

/// Events the accordion consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<N> {
    /// A click delivered to a listener registered on `current_target`.
    Click { current_target: N },
    /// The viewport changed size.
    Resize { width: u32, height: u32 },
    /// A frame requested with [`Dom::request_animation_frame`] is due.
    AnimationFrame { id: FrameId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Resize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventTarget<N> {
    Window,
    Node(N),
}

/// Element and window operations the accordion needs from its host.
pub trait Dom {
    /// Handle to an element. Cheap to clone.
    type Node: Clone + PartialEq + fmt::Debug;

    /// Elements matching `selector` in document order, limited to
    /// descendants of `scope` when given.
    fn query_selector_all(
        &self,
        scope: Option<&Self::Node>,
        selector: &str,
    ) -> Result<Vec<Self::Node>, DomError>;

    fn query_selector(
        &self,
        scope: Option<&Self::Node>,
        selector: &str,
    ) -> Result<Option<Self::Node>, DomError> {
        Ok(self.query_selector_all(scope, selector)?.into_iter().next())
    }

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    fn get_attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);

    fn add_class(&mut self, node: &Self::Node, class: &str);
    fn remove_class(&mut self, node: &Self::Node, class: &str);

    /// Set an inline style declaration.
    fn set_style(&mut self, node: &Self::Node, property: &str, value: &str);
    fn remove_style(&mut self, node: &Self::Node, property: &str);

    /// Full height of the element's content, including overflow.
    fn scroll_height(&self, node: &Self::Node) -> u32;
    /// Distance from the top of the page to the element.
    fn offset_top(&self, node: &Self::Node) -> u32;

    fn scroll_window_to(&mut self, x: u32, y: u32);
    fn set_scroll_top(&mut self, node: &Self::Node, y: u32);

    fn add_event_listener(&mut self, target: EventTarget<Self::Node>, kind: EventKind);

    /// Ask for an [`Event::AnimationFrame`] once layout has settled.
    fn request_animation_frame(&mut self) -> FrameId;
}

/// Whether tabbable elements inside a content pane take part in keyboard
/// navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabbableAction {
    Enable,
    Disable,
}

impl TabbableAction {
    pub fn tabindex(self) -> &'static str {
        match self {
            Self::Enable => "0",
            Self::Disable => "-1",
        }
    }
}
