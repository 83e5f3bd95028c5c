#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use accordion::attributes;
use accordion::{Accordion, AccordionConfig, CallbackArgs, Callbacks, Hook};
use pagedom::{Document, Element, NodeId, Size, Viewport};

pub const LOREM: &str = "lorem ipsum dolor sit amet";

/// An item whose content has a fixed natural height.
pub fn item(question: &str, content_height: u32) -> Element {
    Element::div().class("accordion__item").children([
        Element::div()
            .class("accordion__item__heading")
            .child(Element::link(question)),
        Element::div()
            .class("accordion__item__content")
            .height(Size::Fixed(content_height))
            .children([
                Element::paragraph("Answer"),
                Element::link("More"),
                Element::input(),
            ]),
    ])
}

/// An item whose content height follows its wrapped text.
pub fn text_item(question: &str, answer: &str) -> Element {
    Element::div().class("accordion__item").children([
        Element::div()
            .class("accordion__item__heading")
            .child(Element::link(question)),
        Element::div()
            .class("accordion__item__content")
            .children([Element::paragraph(answer), Element::link("More")]),
    ])
}

pub fn bundle(items: impl IntoIterator<Item = Element>) -> Element {
    Element::section().class("accordion").children(items)
}

pub fn page(bundles: impl IntoIterator<Item = Element>) -> Document {
    Document::new(Element::body().children(bundles))
}

/// One bundle of three items with 120, 60 and 200 pixel contents.
pub fn faq_page() -> Document {
    page([bundle([
        item("First", 120),
        item("Second", 60),
        item("Third", 200),
    ])])
}

pub fn faq_page_with_viewport(width: u32, height: u32) -> Document {
    faq_page().with_viewport(Viewport::new(width, height))
}

pub fn build(doc: Document, config: AccordionConfig) -> Accordion<Document> {
    Accordion::new(doc, config).unwrap()
}

/// Items of the first bundle.
pub fn first_bundle_items(accordion: &Accordion<Document>) -> (NodeId, Vec<NodeId>) {
    let bundle = accordion.bundles().unwrap()[0];
    let items = accordion.items(&bundle).unwrap();
    (bundle, items)
}

pub fn heading(accordion: &Accordion<Document>, item: NodeId) -> NodeId {
    accordion.heading(&item).unwrap()
}

pub fn content(accordion: &Accordion<Document>, item: NodeId) -> NodeId {
    accordion.content(&item).unwrap()
}

pub fn expanded(accordion: &Accordion<Document>, items: &[NodeId]) -> Vec<bool> {
    items
        .iter()
        .map(|item| accordion.item_is_expanded(item))
        .collect()
}

pub type Log = Rc<RefCell<Vec<String>>>;

/// Callbacks that append `"<hook> <item id>"` to a shared log.
pub fn recording_callbacks() -> (Callbacks<Document>, Log) {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let mut callbacks = Callbacks::new();
    for hook in [
        Hook::OpenBefore,
        Hook::OpenAfter,
        Hook::CloseBefore,
        Hook::CloseAfter,
        Hook::InitializeAfter,
    ] {
        let log = Rc::clone(&log);
        callbacks = callbacks.on(hook, move |args: &CallbackArgs<'_, Document>| {
            let id = args
                .accordion
                .dom()
                .get_attribute(*args.item, attributes::ITEM_ID)
                .unwrap_or_default();
            log.borrow_mut().push(format!("{hook} {id}"));
        });
    }
    (callbacks, log)
}

pub fn build_recording(doc: Document, config: AccordionConfig) -> (Accordion<Document>, Log) {
    let (callbacks, log) = recording_callbacks();
    let accordion = Accordion::with_callbacks(doc, config, callbacks).unwrap();
    (accordion, log)
}

pub fn take(log: &Log) -> Vec<String> {
    std::mem::take(&mut *log.borrow_mut())
}
