use pagedom::{Document, Edges, Element, Size, Viewport};

fn doc(root: Element, width: u32, height: u32) -> Document {
    Document::new(root).with_viewport(Viewport::new(width, height))
}

fn by_id(doc: &Document, id: &str) -> pagedom::NodeId {
    doc.get_element_by_id(id).unwrap()
}

// ============================================================================
// Natural / client / scroll height
// ============================================================================

#[test]
fn test_fixed_height_is_natural_height() {
    let d = doc(
        Element::body().child(Element::div().id("box").height(Size::Fixed(120))),
        800,
        600,
    );
    let b = by_id(&d, "box");
    assert_eq!(d.natural_height(b), 120);
    assert_eq!(d.client_height(b), 120);
    assert_eq!(d.scroll_height(b), 120);
}

#[test]
fn test_inline_height_clamps_box_but_not_scroll_height() {
    let mut d = doc(
        Element::body().child(Element::div().id("box").height(Size::Fixed(120))),
        800,
        600,
    );
    let b = by_id(&d, "box");

    d.set_style_property(b, "height", "0px");
    assert_eq!(d.client_height(b), 0);
    assert_eq!(d.scroll_height(b), 120, "overflow still counts");

    d.set_style_property(b, "height", "200px");
    assert_eq!(d.client_height(b), 200);
    assert_eq!(d.scroll_height(b), 200, "box larger than content");

    d.remove_style_property(b, "height");
    assert_eq!(d.client_height(b), 120);
}

#[test]
fn test_unresolvable_inline_height_is_ignored() {
    let mut d = doc(
        Element::body().child(Element::div().id("box").height(Size::Fixed(50))),
        800,
        600,
    );
    let b = by_id(&d, "box");
    d.set_style_property(b, "height", "auto");
    assert_eq!(d.client_height(b), 50);
}

#[test]
fn test_auto_height_sums_children_and_padding() {
    let d = doc(
        Element::body().child(
            Element::div()
                .id("outer")
                .padding(Edges::vertical(5))
                .child(Element::div().height(Size::Fixed(30)))
                .child(Element::div().height(Size::Fixed(40))),
        ),
        800,
        600,
    );
    assert_eq!(d.natural_height(by_id(&d, "outer")), 80);
}

#[test]
fn test_collapsed_child_shrinks_parent() {
    let mut d = doc(
        Element::body().child(
            Element::div()
                .id("outer")
                .child(Element::div().id("a").height(Size::Fixed(30)))
                .child(Element::div().height(Size::Fixed(40))),
        ),
        800,
        600,
    );
    let a = by_id(&d, "a");
    d.set_style_property(a, "height", "0px");
    assert_eq!(d.natural_height(by_id(&d, "outer")), 40);
}

// ============================================================================
// Text
// ============================================================================

#[test]
fn test_text_wraps_at_viewport_width() {
    // 80px / 8px glyphs = 10 columns: "aaaa bbbb" + "cccc"
    let mut d = doc(
        Element::body().child(Element::paragraph("aaaa bbbb cccc").id("p")),
        80,
        600,
    );
    let p = by_id(&d, "p");
    assert_eq!(d.natural_height(p), 40);

    // 40px = 5 columns: one word per line
    d.resize(40, 600);
    assert_eq!(d.natural_height(p), 60);
}

#[test]
fn test_padding_narrows_text_width() {
    let d = doc(
        Element::body().child(
            Element::div()
                .id("outer")
                .padding(Edges::all(4))
                .child(Element::paragraph("hello").id("p")),
        ),
        1024,
        768,
    );
    assert_eq!(d.content_width(by_id(&d, "outer")), 1016);
    assert_eq!(d.natural_height(by_id(&d, "p")), 20);
    assert_eq!(d.natural_height(by_id(&d, "outer")), 28);
}

// ============================================================================
// Offsets
// ============================================================================

#[test]
fn test_offset_top_stacks_siblings() {
    let d = doc(
        Element::body()
            .padding(Edges::vertical(10))
            .child(Element::div().id("a").height(Size::Fixed(50)))
            .child(
                Element::div()
                    .id("b")
                    .height(Size::Fixed(30))
                    .child(Element::div().id("b-inner")),
            )
            .child(Element::div().id("c")),
        800,
        600,
    );
    assert_eq!(d.offset_top(d.root()), 0);
    assert_eq!(d.offset_top(by_id(&d, "a")), 10);
    assert_eq!(d.offset_top(by_id(&d, "b")), 60);
    assert_eq!(d.offset_top(by_id(&d, "b-inner")), 60);
    assert_eq!(d.offset_top(by_id(&d, "c")), 90);
}

#[test]
fn test_offset_top_follows_collapsing_siblings() {
    let mut d = doc(
        Element::body()
            .child(Element::div().id("a").height(Size::Fixed(50)))
            .child(Element::div().id("b")),
        800,
        600,
    );
    let a = by_id(&d, "a");
    let b = by_id(&d, "b");
    assert_eq!(d.offset_top(b), 50);
    d.set_style_property(a, "height", "0px");
    assert_eq!(d.offset_top(b), 0);
}
