use std::collections::BTreeMap;
use std::fmt;

use crate::element::{Content, Element};
use crate::event::{Event, EventKind, EventTarget, FrameId, FrameQueue, Listeners};
use crate::layout::Viewport;
use crate::scroll::{ScrollOffset, ScrollState};
use crate::types::{Edges, Size};

/// Index of a node in a [`Document`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) tag: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) classes: Vec<String>,
    pub(crate) attributes: BTreeMap<String, String>,
    pub(crate) style: BTreeMap<String, String>,
    pub(crate) text: Option<String>,
    pub(crate) height: Size,
    pub(crate) padding: Edges,
}

/// A mutable in-memory page.
///
/// Nodes live in an arena in document (pre-)order and are addressed by
/// [`NodeId`]. Ids handed out by one document must not be used with another.
#[derive(Debug)]
pub struct Document {
    pub(crate) nodes: Vec<Node>,
    pub(crate) viewport: Viewport,
    listeners: Listeners,
    frames: FrameQueue,
    scroll: ScrollState,
}

impl Document {
    /// Build a document whose root element is `root`.
    pub fn new(root: Element) -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            viewport: Viewport::default(),
            listeners: Listeners::new(),
            frames: FrameQueue::new(),
            scroll: ScrollState::new(),
        };
        doc.insert(root, None);
        log::debug!("[document] built {} nodes", doc.nodes.len());
        doc
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    fn insert(&mut self, element: Element, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let mut attributes = element.attributes;
        if let Some(html_id) = element.id {
            attributes.insert("id".to_string(), html_id);
        }

        let (text, children) = match element.content {
            Content::None => (None, Vec::new()),
            Content::Text(text) => (Some(text), Vec::new()),
            Content::Children(children) => (None, children),
        };

        self.nodes.push(Node {
            tag: element.tag,
            parent,
            children: Vec::new(),
            classes: element.classes,
            attributes,
            style: element.style,
            text,
            height: element.height,
            padding: element.padding,
        });

        for child in children {
            let child_id = self.insert(child, Some(id));
            self.nodes[id.0].children.push(child_id);
        }

        id
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    // Tree

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn tag(&self, id: NodeId) -> &str {
        &self.node(id).tag
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// All descendants of `id` in document order, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        self.collect_descendants(id, &mut result);
        result
    }

    fn collect_descendants(&self, id: NodeId, result: &mut Vec<NodeId>) {
        for &child in &self.node(id).children {
            result.push(child);
            self.collect_descendants(child, result);
        }
    }

    /// Ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), |&n| self.parent(n))
    }

    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        ancestor == node || self.ancestors(node).any(|a| a == ancestor)
    }

    pub fn get_element_by_id(&self, html_id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.attributes.get("id").map(String::as_str) == Some(html_id))
            .map(NodeId)
    }

    // Attributes

    /// Read an attribute. `class` reflects the class list.
    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<String> {
        let node = self.node(id);
        if name == "class" {
            if node.classes.is_empty() {
                return None;
            }
            return Some(node.classes.join(" "));
        }
        node.attributes.get(name).cloned()
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        if name == "class" {
            return !self.node(id).classes.is_empty();
        }
        self.node(id).attributes.contains_key(name)
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: impl Into<String>) {
        let value = value.into();
        log::trace!("[set_attribute] {} {}={:?}", id, name, value);
        let node = self.node_mut(id);
        if name == "class" {
            node.classes = value.split_whitespace().map(str::to_string).collect();
            return;
        }
        node.attributes.insert(name.to_string(), value);
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) {
        let node = self.node_mut(id);
        if name == "class" {
            node.classes.clear();
            return;
        }
        node.attributes.remove(name);
    }

    // Classes

    pub fn classes(&self, id: NodeId) -> &[String] {
        &self.node(id).classes
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.node(id).classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if !self.has_class(id, class) {
            self.node_mut(id).classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        self.node_mut(id).classes.retain(|c| c != class);
    }

    // Inline style

    pub fn style_property(&self, id: NodeId, property: &str) -> Option<&str> {
        self.node(id).style.get(property).map(String::as_str)
    }

    pub fn set_style_property(&mut self, id: NodeId, property: &str, value: impl Into<String>) {
        let value = value.into();
        log::trace!("[set_style_property] {} {}: {}", id, property, value);
        self.node_mut(id).style.insert(property.to_string(), value);
    }

    pub fn remove_style_property(&mut self, id: NodeId, property: &str) {
        self.node_mut(id).style.remove(property);
    }

    // Text

    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.node(id).text.as_deref()
    }

    /// Replace the text of a leaf node. Nodes with children keep them and
    /// render the text before them.
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        self.node_mut(id).text = Some(text.into());
    }

    // Events

    pub fn add_event_listener(&mut self, target: EventTarget, kind: EventKind) {
        if self.listeners.add(target, kind) {
            log::debug!("[add_event_listener] {:?} {:?}", target, kind);
        }
    }

    pub fn has_event_listener(&self, target: EventTarget, kind: EventKind) -> bool {
        self.listeners.contains(target, kind)
    }

    /// Click `target`. Returns one event per listening node on the path from
    /// `target` up to the root, innermost first.
    pub fn click(&self, target: NodeId) -> Vec<Event> {
        std::iter::once(target)
            .chain(self.ancestors(target))
            .filter(|&n| self.listeners.contains(EventTarget::Node(n), EventKind::Click))
            .map(|current_target| Event::Click {
                target,
                current_target,
            })
            .collect()
    }

    /// Resize the viewport. Returns a resize event if the window has a
    /// resize listener and the size actually changed.
    pub fn resize(&mut self, width: u32, height: u32) -> Vec<Event> {
        let next = Viewport::new(width, height);
        if next == self.viewport {
            return vec![];
        }
        self.viewport = next;
        let max = self.max_window_scroll();
        let current = self.scroll.window();
        self.scroll.scroll_window_to(current.x, current.y, max);

        if self.listeners.contains(EventTarget::Window, EventKind::Resize) {
            vec![Event::Resize { width, height }]
        } else {
            vec![]
        }
    }

    pub fn request_animation_frame(&mut self) -> FrameId {
        let id = self.frames.request();
        log::trace!("[request_animation_frame] {:?}", id);
        id
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    /// Run a rendering frame: every frame requested so far becomes due.
    pub fn advance_frame(&mut self) -> Vec<Event> {
        self.frames
            .drain()
            .into_iter()
            .map(|id| Event::AnimationFrame { id })
            .collect()
    }

    // Scrolling

    pub fn window_scroll(&self) -> ScrollOffset {
        self.scroll.window()
    }

    pub fn scroll_to(&mut self, x: u32, y: u32) {
        let max = self.max_window_scroll();
        self.scroll.scroll_window_to(x, y, max);
    }

    fn max_window_scroll(&self) -> ScrollOffset {
        let page_height = self.scroll_height(self.root());
        ScrollOffset::new(0, page_height.saturating_sub(self.viewport.height))
    }

    pub fn scroll_top(&self, id: NodeId) -> u32 {
        self.scroll.scroll_top(id)
    }

    pub fn set_scroll_top(&mut self, id: NodeId, y: u32) {
        let max_y = self.scroll_height(id).saturating_sub(self.client_height(id));
        self.scroll.set_scroll_top(id, y, max_y);
    }
}
