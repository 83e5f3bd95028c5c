//! Accordion configuration.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::Result;

/// Options controlling how bundles and items are found and how they behave.
///
/// Fixed once the accordion is built. Every field has a default, so a JSON
/// options object only needs the keys it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccordionConfig {
    /// Outer container holding several items.
    pub selector_bundle: String,
    /// A single item (heading + content), relative to its bundle.
    pub selector_item: String,
    /// Clickable heading, relative to its item.
    pub selector_heading: String,
    /// Content pane, relative to its item.
    pub selector_content: String,

    pub id_prefix_content: String,
    pub id_prefix_bundle: String,

    /// Elements inside the content whose tab reachability follows expansion.
    pub selector_tabbable_elements: String,

    /// Scroll the item into place when a heading opens it.
    pub scroll_to_top: bool,
    /// Container to scroll.
    pub selector_scroll_element: ScrollElement,

    pub class_name_expanded: String,

    pub auto_expand_first_item: bool,
    /// Collapse the other items of a bundle when one expands.
    pub item_expand_unique: bool,

    /// Extra space added to the measured content height.
    pub height_buffer: u32,
    pub height_units: String,

    /// Experimental: apply `css_styles` on every transition.
    pub css_style_apply: bool,
    pub css_styles: CssStyles,
}

impl Default for AccordionConfig {
    fn default() -> Self {
        Self {
            selector_bundle: ".accordion".to_string(),
            selector_item: ".accordion__item".to_string(),
            selector_heading: ".accordion__item__heading a".to_string(),
            selector_content: ".accordion__item__content".to_string(),
            id_prefix_content: "accordion-content".to_string(),
            id_prefix_bundle: "accordion-bundle".to_string(),
            selector_tabbable_elements: "input, a".to_string(),
            scroll_to_top: true,
            selector_scroll_element: ScrollElement::Window,
            class_name_expanded: "expanded".to_string(),
            auto_expand_first_item: false,
            item_expand_unique: false,
            height_buffer: 0,
            height_units: "px".to_string(),
            css_style_apply: false,
            css_styles: CssStyles::default(),
        }
    }
}

impl AccordionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a JSON object. Missing keys keep their defaults,
    /// unknown keys are rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn selector_bundle(mut self, selector: impl Into<String>) -> Self {
        self.selector_bundle = selector.into();
        self
    }

    pub fn selector_item(mut self, selector: impl Into<String>) -> Self {
        self.selector_item = selector.into();
        self
    }

    pub fn selector_heading(mut self, selector: impl Into<String>) -> Self {
        self.selector_heading = selector.into();
        self
    }

    pub fn selector_content(mut self, selector: impl Into<String>) -> Self {
        self.selector_content = selector.into();
        self
    }

    pub fn id_prefix_content(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix_content = prefix.into();
        self
    }

    pub fn id_prefix_bundle(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix_bundle = prefix.into();
        self
    }

    pub fn selector_tabbable_elements(mut self, selector: impl Into<String>) -> Self {
        self.selector_tabbable_elements = selector.into();
        self
    }

    pub fn scroll_to_top(mut self, scroll: bool) -> Self {
        self.scroll_to_top = scroll;
        self
    }

    pub fn selector_scroll_element(mut self, element: impl Into<ScrollElement>) -> Self {
        self.selector_scroll_element = element.into();
        self
    }

    pub fn class_name_expanded(mut self, class: impl Into<String>) -> Self {
        self.class_name_expanded = class.into();
        self
    }

    pub fn auto_expand_first_item(mut self, expand: bool) -> Self {
        self.auto_expand_first_item = expand;
        self
    }

    pub fn item_expand_unique(mut self, unique: bool) -> Self {
        self.item_expand_unique = unique;
        self
    }

    pub fn height_buffer(mut self, buffer: u32) -> Self {
        self.height_buffer = buffer;
        self
    }

    pub fn height_units(mut self, units: impl Into<String>) -> Self {
        self.height_units = units.into();
        self
    }

    pub fn css_style_apply(mut self, apply: bool) -> Self {
        self.css_style_apply = apply;
        self
    }

    pub fn css_styles(mut self, styles: CssStyles) -> Self {
        self.css_styles = styles;
        self
    }
}

/// What to scroll when an item opens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ScrollElement {
    /// The page itself.
    #[default]
    Window,
    /// The first element matching the selector.
    Selector(String),
}

impl From<String> for ScrollElement {
    fn from(value: String) -> Self {
        if value == "window" {
            Self::Window
        } else {
            Self::Selector(value)
        }
    }
}

impl From<&str> for ScrollElement {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

/// Inline declarations applied per state when `css_style_apply` is set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CssStyles {
    pub collapsed: StateStyles,
    pub expanded: StateStyles,
}

impl CssStyles {
    pub fn for_state(&self, expanded: bool) -> &StateStyles {
        if expanded {
            &self.expanded
        } else {
            &self.collapsed
        }
    }
}

impl Default for CssStyles {
    fn default() -> Self {
        let mut collapsed = StateStyles::default();
        collapsed
            .content
            .insert("height".to_string(), "0px".to_string());
        Self {
            collapsed,
            expanded: StateStyles::default(),
        }
    }
}

/// Property -> value maps for each part of an item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StateStyles {
    pub item: BTreeMap<String, String>,
    pub heading: BTreeMap<String, String>,
    pub content: BTreeMap<String, String>,
}

impl StateStyles {
    pub fn is_empty(&self) -> bool {
        self.item.is_empty() && self.heading.is_empty() && self.content.is_empty()
    }
}
