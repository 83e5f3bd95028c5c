//! Expand/collapse transitions.

use super::Accordion;
use crate::attributes;
use crate::callbacks::Hook;
use crate::config::ScrollElement;
use crate::dom::{Dom, TabbableAction};
use crate::error::{AccordionError, Result};

/// How much of a transition runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transition {
    /// Callbacks, sibling collapse and optional scrolling.
    Full { scroll_to_top: bool },
    /// Sibling collapse without callbacks.
    Quiet,
    /// Attributes and height only. Used to measure hidden content.
    Shadow,
}

impl Transition {
    fn notifies(self) -> bool {
        matches!(self, Self::Full { .. })
    }
}

/// Options for [`Accordion::item_expand`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpandOptions {
    /// Scroll the configured container to the item afterwards.
    pub scroll_to_top: bool,
}

/// Options for [`Accordion::bundle_collapse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleCollapse<N> {
    /// Leave this item alone.
    pub except_item: Option<N>,
    /// Leave the bundle's first item alone.
    pub except_first: bool,
}

impl<N> Default for BundleCollapse<N> {
    fn default() -> Self {
        Self {
            except_item: None,
            except_first: false,
        }
    }
}

impl<D: Dom> Accordion<D> {
    /// Expand `item`, firing the open hooks if it was collapsed.
    pub fn item_expand(&mut self, item: &D::Node, options: ExpandOptions) -> Result<()> {
        self.expand_with(
            item,
            Transition::Full {
                scroll_to_top: options.scroll_to_top,
            },
        )
    }

    /// Collapse `item`, firing the close hooks if it was expanded.
    pub fn item_collapse(&mut self, item: &D::Node) -> Result<()> {
        self.collapse_with(item, Transition::Full {
            scroll_to_top: false,
        })
    }

    /// Flip `item` the way a click on its heading does.
    pub fn item_toggle(&mut self, item: &D::Node) -> Result<()> {
        if self.item_is_expanded(item) {
            self.item_collapse(item)
        } else {
            let scroll_to_top = self.config.scroll_to_top;
            self.item_expand(item, ExpandOptions { scroll_to_top })
        }
    }

    /// Collapse every item of `bundle` not excluded by `options`.
    pub fn bundle_collapse(
        &mut self,
        bundle: &D::Node,
        options: &BundleCollapse<D::Node>,
    ) -> Result<()> {
        self.bundle_collapse_with(bundle, options, Transition::Full {
            scroll_to_top: false,
        })
    }

    pub(crate) fn bundle_collapse_with(
        &mut self,
        bundle: &D::Node,
        options: &BundleCollapse<D::Node>,
        transition: Transition,
    ) -> Result<()> {
        let items = self.items(bundle)?;
        let first = items.first().cloned();
        for item in &items {
            if options.except_first && first.as_ref() == Some(item) {
                continue;
            }
            if options.except_item.as_ref() == Some(item) {
                continue;
            }
            self.collapse_with(item, transition)?;
        }
        Ok(())
    }

    pub(crate) fn expand_with(&mut self, item: &D::Node, transition: Transition) -> Result<()> {
        let changes = !self.item_is_expanded(item);
        log::debug!("[item_expand] {item:?} ({transition:?})");

        if transition.notifies() && changes {
            self.fire(Hook::OpenBefore, item)?;
        }

        self.active_attributes_apply(item)?;
        self.css_styles_apply(item, true)?;
        self.height_apply_expanded(item)?;

        if transition != Transition::Shadow {
            self.pending_settle(item, true);

            if self.config.item_expand_unique {
                let bundle = self.bundle_by_item(item)?;
                let siblings = if transition.notifies() {
                    Transition::Full {
                        scroll_to_top: false,
                    }
                } else {
                    Transition::Quiet
                };
                let options = BundleCollapse {
                    except_item: Some(item.clone()),
                    except_first: false,
                };
                self.bundle_collapse_with(&bundle, &options, siblings)?;
            }

            if let Transition::Full {
                scroll_to_top: true,
            } = transition
            {
                self.scroll_to_item(item)?;
            }
        }

        if transition.notifies() && changes {
            self.fire(Hook::OpenAfter, item)?;
        }
        Ok(())
    }

    pub(crate) fn collapse_with(&mut self, item: &D::Node, transition: Transition) -> Result<()> {
        let changes = self.item_is_expanded(item);
        log::debug!("[item_collapse] {item:?} ({transition:?})");

        if transition.notifies() && changes {
            self.fire(Hook::CloseBefore, item)?;
        }

        let heading = self.heading(item)?;
        let content = self.content(item)?;

        self.dom.remove_class(item, &self.config.class_name_expanded);
        self.dom.set_attribute(item, attributes::EXPANDED, "false");
        self.css_styles_apply(item, false)?;
        self.height_apply_collapsed(item)?;
        self.dom.set_attribute(&heading, "aria-expanded", "false");
        self.dom.set_attribute(&content, "aria-hidden", "true");
        self.tabbables_toggle(&content, TabbableAction::Disable)?;
        self.pending_settle(item, false);

        if transition.notifies() && changes {
            self.fire(Hook::CloseAfter, item)?;
        }
        Ok(())
    }

    /// Mark `item` expanded: flag, class, ARIA state and tab reachability.
    pub fn active_attributes_apply(&mut self, item: &D::Node) -> Result<()> {
        let heading = self.heading(item)?;
        let content = self.content(item)?;

        self.dom.set_attribute(item, attributes::EXPANDED, "true");
        self.dom.add_class(item, &self.config.class_name_expanded);
        self.dom.set_attribute(&heading, "aria-expanded", "true");
        self.dom.set_attribute(&content, "aria-hidden", "false");
        self.tabbables_toggle(&content, TabbableAction::Enable)
    }

    /// Set `tabindex` on every tabbable element inside `container`.
    pub fn tabbables_toggle(&mut self, container: &D::Node, action: TabbableAction) -> Result<()> {
        let tabbables = self
            .dom
            .query_selector_all(Some(container), &self.config.selector_tabbable_elements)?;
        let tabindex = action.tabindex();
        log::trace!(
            "[tabbables_toggle] {} element(s) in {container:?} -> tabindex {tabindex}",
            tabbables.len()
        );
        for tabbable in &tabbables {
            self.dom.set_attribute(tabbable, "tabindex", tabindex);
        }
        Ok(())
    }

    fn css_styles_apply(&mut self, item: &D::Node, expanded: bool) -> Result<()> {
        if !self.config.css_style_apply {
            return Ok(());
        }
        let styles = self.config.css_styles.for_state(expanded);
        if styles.is_empty() {
            return Ok(());
        }
        let heading = self.heading(item)?;
        let content = self.content(item)?;
        for (node, declarations) in [
            (item, &styles.item),
            (&heading, &styles.heading),
            (&content, &styles.content),
        ] {
            for (property, value) in declarations {
                self.dom.set_style(node, property, value);
            }
        }
        Ok(())
    }

    fn scroll_to_item(&mut self, item: &D::Node) -> Result<()> {
        let top = self.dom.offset_top(item);
        match &self.config.selector_scroll_element {
            ScrollElement::Window => self.dom.scroll_window_to(0, top),
            ScrollElement::Selector(selector) => {
                let element = self.dom.query_selector(None, selector)?.ok_or_else(|| {
                    AccordionError::ScrollElementNotFound {
                        selector: selector.clone(),
                    }
                })?;
                self.dom.set_scroll_top(&element, top);
            }
        }
        log::debug!("[item_expand] scrolled to {top}");
        Ok(())
    }
}
