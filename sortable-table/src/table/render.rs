//! Building the table's element tree.

use std::collections::HashSet;

use termgrid::{Element, HandlerRegistry, Size, measure};

use crate::column::Column;
use crate::record::Record;
use crate::theme::{
    ACTIVE_ASCENDING, ACTIVE_DESCENDING, ASCENDING, CLICKABLE_ROW, DESCENDING, TABLE_HEADER,
};

use super::events::{register_row_handler, register_sort_handler};
use super::{SortableTable, TableState};

/// Space between adjacent cells, and between a label and its glyph.
const CELL_GAP: u16 = 1;

impl<T: Record> SortableTable<T> {
    /// Build the table element and register its click handlers.
    ///
    /// The registry should be cleared before each frame's build; handlers
    /// refer to rows by their position in the current order.
    pub fn build(&self, registry: &HandlerRegistry) -> Element {
        self.state.with(|current| {
            let visible: Vec<(usize, &Column<T>)> = current.visible_columns().collect();

            let headers: Vec<Element> = visible
                .iter()
                .map(|(index, column)| {
                    self.build_header_content(current, *index, column, registry)
                })
                .collect();

            let cells: Vec<Vec<Element>> = current
                .rows()
                .iter()
                .map(|record| {
                    visible
                        .iter()
                        .map(|(_, column)| column.render_cell(record))
                        .collect()
                })
                .collect();

            let widths = column_widths(&headers, &cells);

            let header = Element::row()
                .id(self.header_id())
                .gap(CELL_GAP)
                .class(TABLE_HEADER)
                .children(
                    headers
                        .into_iter()
                        .zip(&visible)
                        .zip(&widths)
                        .map(|((content, (_, column)), width)| cell(content, column, *width)),
                );

            let mut taken_ids = HashSet::new();
            let rows: Vec<Element> = cells
                .into_iter()
                .enumerate()
                .map(|(index, row_cells)| {
                    let key = current.row_key(index);
                    let row_id = unique_row_id(&self.id, &key, index, &mut taken_ids);

                    let mut row = Element::row()
                        .id(&row_id)
                        .gap(CELL_GAP)
                        .data("key", key)
                        .data("row", index.to_string())
                        .children(
                            row_cells
                                .into_iter()
                                .zip(&visible)
                                .zip(&widths)
                                .map(|((content, (_, column)), width)| {
                                    cell(content, column, *width)
                                }),
                        );

                    if current.has_click_handler() {
                        row = row.clickable(true).class(CLICKABLE_ROW);
                        register_row_handler(registry, &row_id, &self.state, index);
                    }
                    row
                })
                .collect();

            log::trace!(
                "built table {} with {} columns and {} rows",
                self.id,
                visible.len(),
                rows.len()
            );

            Element::col()
                .id(&self.id)
                .child(header)
                .child(Element::col().id(self.body_id()).children(rows))
        })
    }

    /// Label and, for sortable columns, the sort glyph.
    fn build_header_content(
        &self,
        current: &TableState<T>,
        index: usize,
        column: &Column<T>,
        registry: &HandlerRegistry,
    ) -> Element {
        let label = Element::text(&column.label).id(format!("{}-label-{}", self.id, column.name));
        let content = Element::row().gap(CELL_GAP).child(label);

        // Non-sortable columns get neither a glyph nor a handler.
        if !column.sortable {
            return content;
        }

        let ascending = column.sort_direction.is_ascending();
        let (glyph, class) = match (current.is_sort_column(index), ascending) {
            (true, true) => (&self.ascending_glyph, ACTIVE_ASCENDING),
            (true, false) => (&self.descending_glyph, ACTIVE_DESCENDING),
            (false, true) => (&self.ascending_glyph, ASCENDING),
            (false, false) => (&self.descending_glyph, DESCENDING),
        };

        let glyph_id = self.glyph_id(&column.name);
        register_sort_handler(registry, &glyph_id, &self.state, index);

        content.child(
            Element::text(glyph.as_str())
                .id(glyph_id)
                .class(class)
                .clickable(true)
                .data("column", column.name.as_str()),
        )
    }
}

/// Element id for the row at `index`, keyed by `key`.
///
/// A key seen before gets the row position appended, then a counter, until
/// the id is one no earlier row uses.
fn unique_row_id(table: &str, key: &str, index: usize, taken: &mut HashSet<String>) -> String {
    let base = format!("{table}-row-{key}");
    if taken.insert(base.clone()) {
        return base;
    }
    log::warn!("duplicate row key {key:?} at row {index}");

    let mut candidate = format!("{base}-{index}");
    let mut attempt = 1;
    while !taken.insert(candidate.clone()) {
        candidate = format!("{base}-{index}-{attempt}");
        attempt += 1;
    }
    candidate
}

/// Width of each visible column: its widest header or cell.
fn column_widths(headers: &[Element], rows: &[Vec<Element>]) -> Vec<u16> {
    headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| measure(cell).0)
                .fold(measure(header).0, u16::max)
        })
        .collect()
}

fn cell<T>(content: Element, column: &Column<T>, width: u16) -> Element {
    let cell = Element::box_().width(Size::Fixed(width)).child(content);
    match &column.extra_classes {
        Some(classes) => cell.classes(classes),
        None => cell,
    }
}
