//! Error types

use std::fmt;

/// Which half of an accordion item a lookup was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemPart {
    Heading,
    Content,
}

impl fmt::Display for ItemPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heading => write!(f, "heading"),
            Self::Content => write!(f, "content"),
        }
    }
}

/// Errors raised by a [`crate::Dom`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// The selector could not be parsed.
    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },
}

/// Errors surfaced by accordion operations.
///
/// Nothing is retried or defaulted; every failure reaches the caller of the
/// operation that hit it.
#[derive(Debug, thiserror::Error)]
pub enum AccordionError {
    /// The configuration has no bundle selector.
    #[error("No bundle selector specified")]
    MissingBundleSelector,

    /// The configuration could not be loaded.
    #[error("invalid accordion configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// An item found during initialization lacks its heading or content.
    #[error("accordion item {item_index} of bundle {bundle_index} has no {part} matching '{selector}'")]
    ItemInitialization {
        bundle_index: usize,
        item_index: usize,
        part: ItemPart,
        selector: String,
    },

    /// A heading or content lookup failed on an initialized item.
    #[error("accordion item {item} has no {part} matching '{selector}'")]
    MissingPart {
        item: String,
        part: ItemPart,
        selector: String,
    },

    /// The item carries no bundle link.
    #[error("Error getting bundle id for item {item}")]
    MissingBundleLink { item: String },

    /// The item's bundle link names no element.
    #[error("bundle '{bundle_id}' of item {item} not found")]
    BundleNotFound { item: String, bundle_id: String },

    /// The configured scroll container is not in the document.
    #[error("scroll element '{selector}' not found")]
    ScrollElementNotFound { selector: String },

    #[error(transparent)]
    Dom(#[from] DomError),
}

impl AccordionError {
    pub(crate) fn missing_part(item: &impl fmt::Debug, part: ItemPart, selector: &str) -> Self {
        Self::MissingPart {
            item: format!("{item:?}"),
            part,
            selector: selector.to_string(),
        }
    }
}

/// A failed [`crate::Accordion::new`]. Carries the document back, with
/// whatever the accordion already wrote to it.
pub struct InitError<D> {
    pub error: AccordionError,
    pub dom: D,
}

impl<D> InitError<D> {
    pub fn into_dom(self) -> D {
        self.dom
    }
}

impl<D> fmt::Debug for InitError<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InitError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<D> fmt::Display for InitError<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl<D> std::error::Error for InitError<D> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.error)
    }
}

impl<D> From<InitError<D>> for AccordionError {
    fn from(err: InitError<D>) -> Self {
        err.error
    }
}

pub type Result<T> = std::result::Result<T, AccordionError>;
