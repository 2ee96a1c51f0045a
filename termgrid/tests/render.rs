use termgrid::{
    layout, render_to_buffer, Buffer, Color, DefaultTheme, Element, Rect, Rgb, Size, Style,
    Stylesheet,
};

fn render(root: &Element, sheet: &Stylesheet, width: u16, height: u16) -> Buffer {
    let result = layout(root, Rect::from_size(width, height));
    let mut buf = Buffer::new(width, height);
    render_to_buffer(root, &result, &mut buf, sheet, &DefaultTheme::new());
    buf
}

#[test]
fn test_text_is_drawn_at_layout_position() {
    let root = Element::col()
        .child(Element::text("Hello"))
        .child(Element::row().gap(1).child(Element::text("a")).child(Element::text("b")));

    let buf = render(&root, &Stylesheet::new(), 20, 3);

    assert_eq!(buf.line(0), "Hello");
    assert_eq!(buf.line(1), "a b");
    assert_eq!(buf.line(2), "");
}

#[test]
fn test_class_rule_sets_foreground() {
    let sheet = Stylesheet::new().rule("hot", Style::new().foreground(Color::rgb(255, 0, 0)));
    let root = Element::row()
        .child(Element::text("x").class("hot"))
        .child(Element::text("y"));

    let buf = render(&root, &sheet, 5, 1);

    assert_eq!(buf.get(0, 0).unwrap().fg, Rgb::new(255, 0, 0));
    assert_eq!(buf.get(1, 0).unwrap().fg, Rgb::new(255, 255, 255));
}

#[test]
fn test_inline_style_wins_over_class() {
    let sheet = Stylesheet::new().rule("hot", Style::new().foreground(Color::rgb(255, 0, 0)));
    let root = Element::text("x")
        .class("hot")
        .style(Style::new().foreground(Color::rgb(0, 0, 255)));

    let buf = render(&root, &sheet, 5, 1);

    assert_eq!(buf.get(0, 0).unwrap().fg, Rgb::new(0, 0, 255));
}

#[test]
fn test_foreground_and_attributes_are_inherited() {
    let sheet =
        Stylesheet::new().rule("row", Style::new().foreground(Color::var("primary")).bold());
    let root = Element::row().class("row").child(Element::text("z"));

    let buf = render(&root, &sheet, 5, 1);
    let cell = buf.get(0, 0).unwrap();

    assert_eq!(cell.fg, DefaultTheme::new().primary);
    assert!(cell.style.bold);
}

#[test]
fn test_background_fills_element_rect() {
    let root = Element::row()
        .width(Size::Fixed(4))
        .style(Style::new().background(Color::rgb(10, 20, 30)))
        .child(Element::text("a"));

    let buf = render(&root, &Stylesheet::new(), 6, 1);

    for x in 0..4 {
        assert_eq!(buf.get(x, 0).unwrap().bg, Rgb::new(10, 20, 30));
    }
    assert_eq!(buf.get(4, 0).unwrap().bg, Rgb::new(0, 0, 0));
}

#[test]
fn test_unknown_color_variable_falls_back() {
    let root = Element::text("a").style(Style::new().foreground(Color::var("nope")));

    let buf = render(&root, &Stylesheet::new(), 3, 1);

    assert_eq!(buf.get(0, 0).unwrap().fg, Rgb::new(255, 255, 255));
}

#[test]
fn test_overflowing_text_is_truncated_with_ellipsis() {
    let root = Element::row()
        .width(Size::Fixed(5))
        .child(Element::text("Saul Hudson"));

    let buf = render(&root, &Stylesheet::new(), 10, 1);

    assert_eq!(buf.line(0), "Saul…");
}

#[test]
fn test_wide_characters_mark_continuation() {
    let root = Element::text("日x");

    let buf = render(&root, &Stylesheet::new(), 5, 1);

    assert_eq!(buf.get(0, 0).unwrap().char, '日');
    assert!(buf.get(1, 0).unwrap().wide_continuation);
    assert_eq!(buf.get(2, 0).unwrap().char, 'x');
    assert_eq!(buf.line(0), "日x");
}
