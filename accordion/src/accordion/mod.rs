//! The accordion component.
//!
//! An [`Accordion`] owns its document. Construction discovers every bundle
//! and item, writes ids and ARIA roles, wires heading clicks and the window
//! resize listener, caches expanded heights and collapses everything. From
//! then on the host feeds events to [`Accordion::handle_event`].

mod height;
mod state;

pub use state::{BundleCollapse, ExpandOptions};

use std::fmt;

use crate::attributes;
use crate::callbacks::{CallbackArgs, Callbacks, Hook};
use crate::config::AccordionConfig;
use crate::dom::{Dom, Event, EventKind, EventTarget};
use crate::error::{AccordionError, InitError, ItemPart, Result};

use height::PendingFrame;
use state::Transition;

pub struct Accordion<D: Dom> {
    dom: D,
    config: AccordionConfig,
    callbacks: Callbacks<D>,
    pending: Vec<PendingFrame<D::Node>>,
}

impl<D: Dom> Accordion<D> {
    /// Initialize every bundle in `dom` with no callbacks.
    pub fn new(dom: D, config: AccordionConfig) -> std::result::Result<Self, InitError<D>> {
        Self::with_callbacks(dom, config, Callbacks::default())
    }

    /// Initialize every bundle in `dom`. On failure the document is handed
    /// back inside the error.
    pub fn with_callbacks(
        dom: D,
        config: AccordionConfig,
        callbacks: Callbacks<D>,
    ) -> std::result::Result<Self, InitError<D>> {
        let mut accordion = Self {
            dom,
            config,
            callbacks,
            pending: Vec::new(),
        };
        match accordion.initialize() {
            Ok(()) => Ok(accordion),
            Err(error) => {
                log::error!("[initialize] {error}");
                Err(InitError {
                    error,
                    dom: accordion.dom,
                })
            }
        }
    }

    fn initialize(&mut self) -> Result<()> {
        if self.config.selector_bundle.trim().is_empty() {
            return Err(AccordionError::MissingBundleSelector);
        }

        let bundles = self.bundles()?;
        let mut item_count = 0;
        for (bundle_index, bundle) in bundles.iter().enumerate() {
            let items = self.items(bundle)?;

            self.dom.set_attribute(bundle, "role", "tablist");
            let bundle_id = format!("{}-{bundle_index}", self.config.id_prefix_bundle);
            self.dom.set_attribute(bundle, "id", &bundle_id);

            for (item_index, item) in items.iter().enumerate() {
                self.item_initialize(item, item_index, bundle, bundle_index)?;
            }

            let except_first = self.config.auto_expand_first_item;
            self.bundle_collapse_with(
                bundle,
                &BundleCollapse {
                    except_item: None,
                    except_first,
                },
                Transition::Quiet,
            )?;

            if let (true, Some(first)) = (except_first, items.first()) {
                self.expand_with(first, Transition::Quiet)?;
            }

            item_count += items.len();
        }

        self.dom
            .add_event_listener(EventTarget::Window, EventKind::Resize);

        log::debug!(
            "[initialize] {} bundle(s), {} item(s) for '{}'",
            bundles.len(),
            item_count,
            self.config.selector_bundle
        );
        Ok(())
    }

    /// Assign ids and roles to one item and its parts, listen for heading
    /// clicks and cache the expanded height.
    pub fn item_initialize(
        &mut self,
        item: &D::Node,
        item_index: usize,
        bundle: &D::Node,
        bundle_index: usize,
    ) -> Result<()> {
        let missing = |part: ItemPart, selector: &str| AccordionError::ItemInitialization {
            bundle_index,
            item_index,
            part,
            selector: selector.to_string(),
        };
        let heading = self
            .dom
            .query_selector(Some(item), &self.config.selector_heading)?
            .ok_or_else(|| missing(ItemPart::Heading, &self.config.selector_heading))?;
        let content = self
            .dom
            .query_selector(Some(item), &self.config.selector_content)?
            .ok_or_else(|| missing(ItemPart::Content, &self.config.selector_content))?;

        let suffix = format!("{bundle_index}_{item_index}");
        let item_id = attributes::item_id(&self.config.selector_bundle, bundle_index, item_index);
        let content_id = format!("{}-{suffix}", self.config.id_prefix_content);
        let bundle_id = self.dom.get_attribute(bundle, "id").unwrap_or_default();

        self.dom.set_attribute(item, attributes::ITEM_ID, &item_id);
        self.dom.set_attribute(item, attributes::BUNDLE_ID, &bundle_id);

        self.dom.set_attribute(&heading, attributes::HEADER_FOR, &item_id);
        self.dom.set_attribute(&heading, "role", "tab");
        self.dom
            .set_attribute(&heading, "aria-controls", &format!("#{content_id}"));

        self.dom.set_attribute(&content, "id", &content_id);
        self.dom.set_attribute(&content, "role", "tabpanel");

        self.dom
            .add_event_listener(EventTarget::Node(heading), EventKind::Click);

        let height = self.item_expanded_height_calculate(item)?;
        log::trace!("[item_initialize] {item_id}: expanded height {height}");

        self.fire_with_bundle(Hook::InitializeAfter, item, bundle);
        Ok(())
    }

    /// Dispatch one host event. Returns whether the accordion acted on it.
    pub fn handle_event(&mut self, event: &Event<D::Node>) -> Result<bool> {
        match event {
            Event::Click { current_target } => self.heading_click(current_target),
            Event::Resize { width, height } => {
                log::debug!("[resize_handler] viewport {width}x{height}");
                self.resize_handler()?;
                Ok(true)
            }
            Event::AnimationFrame { id } => self.run_frame(*id),
        }
    }

    fn heading_click(&mut self, heading: &D::Node) -> Result<bool> {
        let Some(item_id) = self.dom.get_attribute(heading, attributes::HEADER_FOR) else {
            log::warn!("[heading_click] {heading:?} is not an accordion heading");
            return Ok(false);
        };
        let Some(item) = self.item_by_id(&item_id)? else {
            log::warn!("[heading_click] no item carries id '{item_id}'");
            return Ok(false);
        };
        self.item_toggle(&item)?;
        Ok(true)
    }

    fn item_by_id(&self, item_id: &str) -> Result<Option<D::Node>> {
        for bundle in self.bundles()? {
            for item in self.items(&bundle)? {
                if self.dom.get_attribute(&item, attributes::ITEM_ID).as_deref() == Some(item_id) {
                    return Ok(Some(item));
                }
            }
        }
        Ok(None)
    }

    /// Whether `item` is open. An item expanded only while its height is
    /// re-measured counts as collapsed.
    pub fn item_is_expanded(&self, item: &D::Node) -> bool {
        self.dom.get_attribute(item, attributes::EXPANDED).as_deref() == Some("true")
            && !self.is_shadowed(item)
    }

    /// Every bundle in document order.
    pub fn bundles(&self) -> Result<Vec<D::Node>> {
        Ok(self.dom.query_selector_all(None, &self.config.selector_bundle)?)
    }

    /// Items of `bundle` in document order.
    pub fn items(&self, bundle: &D::Node) -> Result<Vec<D::Node>> {
        Ok(self
            .dom
            .query_selector_all(Some(bundle), &self.config.selector_item)?)
    }

    pub fn heading(&self, item: &D::Node) -> Result<D::Node> {
        self.part(item, ItemPart::Heading, &self.config.selector_heading)
    }

    pub fn content(&self, item: &D::Node) -> Result<D::Node> {
        self.part(item, ItemPart::Content, &self.config.selector_content)
    }

    fn part(&self, item: &D::Node, part: ItemPart, selector: &str) -> Result<D::Node> {
        self.dom
            .query_selector(Some(item), selector)?
            .ok_or_else(|| AccordionError::missing_part(item, part, selector))
    }

    /// The bundle `item` was initialized into.
    pub fn bundle_by_item(&self, item: &D::Node) -> Result<D::Node> {
        let bundle_id = self
            .dom
            .get_attribute(item, attributes::BUNDLE_ID)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AccordionError::MissingBundleLink {
                item: format!("{item:?}"),
            })?;
        self.dom
            .element_by_id(&bundle_id)
            .ok_or_else(|| AccordionError::BundleNotFound {
                item: format!("{item:?}"),
                bundle_id,
            })
    }

    /// Run `hook` for `item`, if a callback is registered. The bundle is only
    /// looked up when there is someone to tell.
    fn fire(&self, hook: Hook, item: &D::Node) -> Result<()> {
        if self.callbacks.get(hook).is_none() {
            return Ok(());
        }
        let bundle = self.bundle_by_item(item)?;
        self.fire_with_bundle(hook, item, &bundle);
        Ok(())
    }

    fn fire_with_bundle(&self, hook: Hook, item: &D::Node, bundle: &D::Node) {
        let Some(callback) = self.callbacks.get(hook) else {
            return;
        };
        log::trace!("[callbacks] {hook} for {item:?}");
        callback(&CallbackArgs {
            item,
            bundle,
            accordion: self,
        });
    }

    pub fn config(&self) -> &AccordionConfig {
        &self.config
    }

    pub fn callbacks(&self) -> &Callbacks<D> {
        &self.callbacks
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    pub fn into_dom(self) -> D {
        self.dom
    }
}

impl<D: Dom + fmt::Debug> fmt::Debug for Accordion<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accordion")
            .field("config", &self.config)
            .field("callbacks", &self.callbacks)
            .field("pending_frames", &self.pending.len())
            .field("dom", &self.dom)
            .finish()
    }
}
