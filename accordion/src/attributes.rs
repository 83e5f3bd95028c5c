//! Attribute names written by the accordion.

/// `"true"` / `"false"` expansion flag on an item.
pub const EXPANDED: &str = "data-accordion-expanded";
/// Generated item id.
pub const ITEM_ID: &str = "data-accordion-item-id";
/// Id of the bundle an item belongs to.
pub const BUNDLE_ID: &str = "data-accordion-bundle-id";
/// Item id on the heading that toggles it.
pub const HEADER_FOR: &str = "data-accordion-header-for";
/// Cached expanded height of a content element, without units.
pub const EXPANDED_HEIGHT: &str = "data-expanded-height";

/// Strip everything except ASCII letters, digits, `-` and `_`.
pub fn sanitize_selector(selector: &str) -> String {
    selector
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

/// Id of item `item_index` in bundle `bundle_index`.
pub fn item_id(selector_bundle: &str, bundle_index: usize, item_index: usize) -> String {
    format!(
        "{}_{bundle_index}_{item_index}",
        sanitize_selector(selector_bundle)
    )
}
