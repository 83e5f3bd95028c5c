mod common;

use accordion::{AccordionConfig, ExpandOptions, TabbableAction};
use common::*;
use pagedom::{collect_tabbable, FocusState, NodeId};

fn tabindexes(accordion: &accordion::Accordion<pagedom::Document>, item: NodeId) -> Vec<String> {
    let content = content(accordion, item);
    let dom = accordion.dom();
    dom.query_selector_all(Some(content), "a, input")
        .unwrap()
        .into_iter()
        .map(|node| dom.get_attribute(node, "tabindex").unwrap_or_default())
        .collect()
}

// ============================================================================
// tabindex
// ============================================================================

#[test]
fn test_collapsed_content_is_not_tabbable() {
    let accordion = build(faq_page(), AccordionConfig::default());
    let (_, items) = first_bundle_items(&accordion);
    for &item in &items {
        assert_eq!(tabindexes(&accordion, item), vec!["-1", "-1"]);
    }
}

#[test]
fn test_expand_and_collapse_toggle_tabindex() {
    let mut accordion = build(faq_page(), AccordionConfig::default());
    let (_, items) = first_bundle_items(&accordion);
    let heading = heading(&accordion, items[1]);

    accordion.click(heading).unwrap();
    assert_eq!(tabindexes(&accordion, items[1]), vec!["0", "0"]);
    assert_eq!(tabindexes(&accordion, items[0]), vec!["-1", "-1"]);

    accordion.click(heading).unwrap();
    assert_eq!(tabindexes(&accordion, items[1]), vec!["-1", "-1"]);
}

#[test]
fn test_tabbables_toggle_uses_configured_selector() {
    let config = AccordionConfig::new().selector_tabbable_elements("input");
    let mut accordion = build(faq_page(), config);
    let (_, items) = first_bundle_items(&accordion);

    // The link was never touched
    assert_eq!(tabindexes(&accordion, items[0]), vec!["", "-1"]);

    let content = content(&accordion, items[0]);
    accordion
        .tabbables_toggle(&content, TabbableAction::Enable)
        .unwrap();
    assert_eq!(tabindexes(&accordion, items[0]), vec!["", "0"]);
}

#[test]
fn test_heading_is_never_disabled() {
    let accordion = build(faq_page(), AccordionConfig::default());
    let (_, items) = first_bundle_items(&accordion);
    let heading = heading(&accordion, items[0]);
    assert_eq!(accordion.dom().get_attribute(heading, "tabindex"), None);
}

// ============================================================================
// Keyboard navigation
// ============================================================================

#[test]
fn test_tab_order_skips_collapsed_content() {
    let mut accordion = build(faq_page(), AccordionConfig::default());
    let (_, items) = first_bundle_items(&accordion);
    let headings: Vec<NodeId> = items.iter().map(|&i| heading(&accordion, i)).collect();

    assert_eq!(collect_tabbable(accordion.dom()), headings);

    accordion
        .item_expand(&items[0], ExpandOptions::default())
        .unwrap();
    let content = content(&accordion, items[0]);
    let inner = accordion
        .dom()
        .query_selector_all(Some(content), "a, input")
        .unwrap();

    let mut expected = vec![headings[0]];
    expected.extend(inner);
    expected.extend(&headings[1..]);
    assert_eq!(collect_tabbable(accordion.dom()), expected);
}

#[test]
fn test_focus_walks_into_open_item() {
    let mut accordion = build(faq_page(), AccordionConfig::default());
    let (_, items) = first_bundle_items(&accordion);
    let first = heading(&accordion, items[0]);
    let second = heading(&accordion, items[1]);
    let mut focus = FocusState::new();

    assert_eq!(focus.focus_next(accordion.dom()), Some(first));
    assert_eq!(focus.focus_next(accordion.dom()), Some(second));

    accordion.click(first).unwrap();
    focus.focus(first);
    let next = focus.focus_next(accordion.dom()).unwrap();
    let content = content(&accordion, items[0]);
    assert!(accordion.dom().contains(content, next));
}
