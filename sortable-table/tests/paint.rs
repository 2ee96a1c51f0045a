mod common;

use std::sync::{Arc, Mutex};

use sortable_table::{SortableTable, TableProps, default_stylesheet};
use termgrid::{
    Buffer, DefaultTheme, Element, Event, HandlerRegistry, LayoutResult, Rect, dispatch, hit_test,
    layout, render_to_buffer,
};

use common::{Entry, columns, data};

const WIDTH: u16 = 30;
const HEIGHT: u16 = 4;

fn paint(
    table: &SortableTable<Entry>,
    registry: &HandlerRegistry,
) -> (Element, LayoutResult, Buffer) {
    registry.clear();
    let root = table.build(registry);
    let result = layout(&root, Rect::from_size(WIDTH, HEIGHT));
    let mut buf = Buffer::new(WIDTH, HEIGHT);
    render_to_buffer(&root, &result, &mut buf, &default_stylesheet(), &DefaultTheme::new());
    (root, result, buf)
}

fn click_at(root: &Element, result: &LayoutResult, registry: &HandlerRegistry, x: u16, y: u16) {
    let target = hit_test(result, root, x, y).expect("clickable element under cursor");
    assert!(dispatch(registry, &Event::click(target)));
}

#[test]
fn test_paints_aligned_columns() {
    let table = SortableTable::new(TableProps::new(columns(), data())).unwrap();
    let (_, _, buf) = paint(&table, &HandlerRegistry::new());

    assert_eq!(buf.line(0), "ID ▲ Name ▲ Surname ▲");
    assert_eq!(buf.line(1), "1    Brian  May");
    assert_eq!(buf.line(2), "2    Saul   Hudson");
    assert_eq!(buf.line(3), "");
}

#[test]
fn test_active_glyph_uses_primary_colour() {
    let theme = DefaultTheme::new();
    let table = SortableTable::new(TableProps::new(columns(), data())).unwrap();
    let registry = HandlerRegistry::new();
    let (root, result, buf) = paint(&table, &registry);

    let id_glyph = buf.get(3, 0).unwrap();
    assert_eq!(id_glyph.fg, theme.primary);
    assert_eq!(id_glyph.bg, theme.foreground);
    assert_eq!(buf.get(20, 0).unwrap().fg, theme.muted);
    assert_eq!(buf.get(0, 0).unwrap().bg, theme.header);
    assert!(buf.get(0, 0).unwrap().style.bold);

    click_at(&root, &result, &registry, 20, 0);
    let (_, _, buf) = paint(&table, &registry);

    assert_eq!(buf.get(20, 0).unwrap().fg, theme.primary);
    assert_eq!(buf.get(3, 0).unwrap().fg, theme.muted);
}

#[test]
fn test_clicking_glyph_cell_sorts() {
    let table = SortableTable::new(TableProps::new(columns(), data())).unwrap();
    let registry = HandlerRegistry::new();
    let (root, result, _) = paint(&table, &registry);

    // Labels are not clickable.
    assert_eq!(hit_test(&result, &root, 12, 0), None);

    click_at(&root, &result, &registry, 20, 0);
    let (root, result, buf) = paint(&table, &registry);
    assert_eq!(buf.line(1), "2    Saul   Hudson");
    assert_eq!(buf.line(2), "1    Brian  May");

    click_at(&root, &result, &registry, 20, 0);
    let (_, _, buf) = paint(&table, &registry);
    assert_eq!(buf.line(1), "1    Brian  May");
    assert_eq!(buf.line(0), "ID ▲ Name ▲ Surname ▼");
}

#[test]
fn test_clicking_row_cell_reports_record() {
    let clicked: Arc<Mutex<Vec<Entry>>> = Arc::default();
    let sink = clicked.clone();
    let props = TableProps::new(columns(), data())
        .on_click(move |row: &Entry| sink.lock().unwrap().push(row.clone()));
    let table = SortableTable::new(props).unwrap();
    let registry = HandlerRegistry::new();
    let (root, result, buf) = paint(&table, &registry);

    let theme = DefaultTheme::new();
    assert_eq!(buf.get(25, 1).unwrap().bg, theme.background);
    assert_eq!(buf.get(6, 2).unwrap().bg, theme.surface);

    click_at(&root, &result, &registry, 6, 2);
    assert_eq!(*clicked.lock().unwrap(), vec![Entry::new(2, "Saul", "Hudson")]);
}
