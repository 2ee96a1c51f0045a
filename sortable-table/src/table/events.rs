//! Click handling for the table.

use std::sync::Arc;

use termgrid::{HandlerRegistry, ON_CLICK};

use crate::column::Column;
use crate::error::{Result, TableError};
use crate::record::Record;
use crate::state::State;

use super::TableState;

/// Sort by the column at `index`, then notify `on_sort`.
///
/// The rows are sorted on a copy taken out of the state, so comparators
/// run without the state lock held. Both comparators and `on_sort` may
/// read the table. A rejected sort leaves the state clean.
pub(super) fn sort_and_notify<T: Record>(
    state: &State<TableState<T>>,
    index: usize,
) -> Result<Column<T>> {
    let (column, mut rows, on_sort) = state.try_update(|s| {
        let column = s.activate(index)?.clone();
        Ok::<_, TableError>((column, s.rows().to_vec(), s.on_sort.clone()))
    })?;

    rows.sort_by(|a, b| column.compare(a, b));
    log::debug!(
        "sorted {} rows by {} ({})",
        rows.len(),
        column.name,
        column.sort_direction
    );
    state.update(|s| s.set_rows(rows));

    if let Some(handler) = on_sort {
        handler(&column);
    }
    Ok(column)
}

/// Pass the record at `index` to `on_click`, if there is one.
pub(super) fn activate_row<T: Record>(state: &State<TableState<T>>, index: usize) -> Result<()> {
    let (record, on_click) = state.with(|s| {
        let len = s.rows().len();
        s.rows()
            .get(index)
            .map(|record| (record.clone(), s.on_click.clone()))
            .ok_or(TableError::RowOutOfRange { index, len })
    })?;

    if let Some(handler) = on_click {
        log::debug!("row {index} clicked");
        handler(&record);
    }
    Ok(())
}

/// Register the click handler of a column's sort glyph.
pub(super) fn register_sort_handler<T: Record>(
    registry: &HandlerRegistry,
    glyph_id: &str,
    state: &State<TableState<T>>,
    index: usize,
) {
    let state_clone = state.clone();
    registry.register(
        glyph_id,
        ON_CLICK,
        Arc::new(move |_event| {
            if let Err(e) = sort_and_notify(&state_clone, index) {
                log::warn!("sort click ignored: {e}");
            }
        }),
    );
}

/// Register the click handler of a data row.
pub(super) fn register_row_handler<T: Record>(
    registry: &HandlerRegistry,
    row_id: &str,
    state: &State<TableState<T>>,
    index: usize,
) {
    let state_clone = state.clone();
    registry.register(
        row_id,
        ON_CLICK,
        Arc::new(move |_event| {
            if let Err(e) = activate_row(&state_clone, index) {
                log::warn!("row click ignored: {e}");
            }
        }),
    );
}
