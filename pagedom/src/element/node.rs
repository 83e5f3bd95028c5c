use std::collections::BTreeMap;

use super::Content;
use crate::types::{Edges, Size};

/// Declarative description of a page fragment.
///
/// Elements are plain values; [`crate::Document::new`] flattens a tree of them
/// into a mutable document.
#[derive(Debug, Clone)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,
    /// Inline style declarations (`property -> value`).
    pub style: BTreeMap<String, String>,
    pub content: Content,

    // Box model
    pub height: Size,
    pub padding: Edges,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            tag: "div".to_string(),
            id: None,
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            style: BTreeMap::new(),
            content: Content::None,
            height: Size::Auto,
            padding: Edges::default(),
        }
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn body() -> Self {
        Self::new("body")
    }

    pub fn section() -> Self {
        Self::new("section")
    }

    /// An anchor. Anchors are natively reachable with the tab key.
    pub fn link(label: impl Into<String>) -> Self {
        Self::new("a").attr("href", "#").text(label)
    }

    pub fn input() -> Self {
        Self::new("input")
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self::new("button").text(label)
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new("p").text(text)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    // Visual
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(property.into(), value.into());
        self
    }

    // Layout
    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }
}
