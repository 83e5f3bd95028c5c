//! Accessible accordion widget.
//!
//! Bundles of heading/content items where activating a heading expands or
//! collapses its content pane. The component keeps `aria-*` state, the
//! keyboard reachability of controls inside each pane and an animatable
//! inline height in sync with the expansion state.
//!
//! ```ignore
//! use accordion::prelude::*;
//!
//! let config = AccordionConfig::new().item_expand_unique(true);
//! let mut accordion = Accordion::new(document, config)?;
//! accordion.click(heading)?;
//! ```

pub mod accordion;
pub mod attributes;
pub mod callbacks;
pub mod config;
pub mod dom;
pub mod error;

pub use accordion::{Accordion, BundleCollapse, ExpandOptions};
pub use callbacks::{Callback, CallbackArgs, Callbacks, Hook};
pub use config::{AccordionConfig, CssStyles, ScrollElement, StateStyles};
pub use dom::{Dom, Event, EventKind, EventTarget, FrameId, TabbableAction};
pub use error::{AccordionError, DomError, InitError, ItemPart, Result};

pub mod prelude {
    pub use crate::accordion::{Accordion, BundleCollapse, ExpandOptions};
    pub use crate::callbacks::{CallbackArgs, Callbacks};
    pub use crate::config::{AccordionConfig, ScrollElement};
    pub use crate::dom::{Dom, Event, TabbableAction};
    pub use crate::error::{AccordionError, InitError, Result};
}
