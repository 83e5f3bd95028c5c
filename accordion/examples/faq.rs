use std::fs::File;

use accordion::attributes;
use accordion::prelude::*;
use pagedom::{Document, Element, Size, Viewport};
use simplelog::{Config, LevelFilter, WriteLogger};

fn question(title: &str, answer: &str) -> Element {
    Element::div().class("accordion__item").children([
        Element::div()
            .class("accordion__item__heading")
            .child(Element::link(title)),
        Element::div().class("accordion__item__content").children([
            Element::paragraph(answer),
            Element::link("Read more"),
        ]),
    ])
}

fn page() -> Document {
    Document::new(
        Element::body().children([
            Element::div().height(Size::Fixed(200)).text("Frequently asked questions"),
            Element::section().class("accordion").children([
                question("What is this?", "A list of questions that open one at a time."),
                question(
                    "How tall is an answer?",
                    "As tall as its text. Narrow windows wrap the text onto more lines, \
                     so every answer is measured again after a resize.",
                ),
                question("Can I use the keyboard?", "Links inside closed answers are skipped."),
            ]),
        ]),
    )
    .with_viewport(Viewport::new(640, 240))
}

fn print_state(accordion: &Accordion<Document>) -> Result<()> {
    for bundle in accordion.bundles()? {
        for item in accordion.items(&bundle)? {
            let content = accordion.content(&item)?;
            let dom = accordion.dom();
            println!(
                "  {:<18} expanded={:<5} height={:<6} cached={:?}",
                dom.get_attribute(item, attributes::ITEM_ID)
                    .unwrap_or_default(),
                accordion.item_is_expanded(&item),
                dom.style_property(content, "height").unwrap_or("auto"),
                accordion.expanded_height(&item)?,
            );
        }
    }
    println!("  window scroll: {}", accordion.dom().window_scroll().y);
    Ok(())
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("faq.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let callbacks = Callbacks::new()
        .on_open_after(|args: &CallbackArgs<'_, Document>| {
            log::info!("[faq] opened {:?}", args.item);
        })
        .on_close_after(|args: &CallbackArgs<'_, Document>| {
            log::info!("[faq] closed {:?}", args.item);
        });
    let config = AccordionConfig::new()
        .item_expand_unique(true)
        .auto_expand_first_item(true)
        .height_buffer(8);
    let mut accordion = Accordion::with_callbacks(page(), config, callbacks)?;

    println!("after initialization:");
    print_state(&accordion)?;

    let bundle = accordion.bundles()?[0];
    let second = accordion.items(&bundle)?[1];
    let heading = accordion.heading(&second)?;
    accordion.click(heading)?;
    println!("after opening the second question:");
    print_state(&accordion)?;

    accordion.resize(200, 240)?;
    let frames = accordion.advance_frame()?;
    println!("after resizing to 200px ({frames} items measured):");
    print_state(&accordion)?;

    Ok(())
}
