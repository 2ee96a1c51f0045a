//! SortableTable widget - a table with clickable sort glyphs and rows.
//!
//! The widget provides:
//! - A header row with one sort glyph per sortable column
//! - Client-side sorting that toggles direction on repeated clicks
//! - Custom cell rendering per column
//! - Row-click and sort notifications
//!
//! # Example
//!
//! ```ignore
//! use sortable_table::prelude::*;
//!
//! let table = SortableTable::new(
//!     TableProps::new(columns, rows)
//!         .on_sort(|column| log::info!("sorted by {}", column.name))
//!         .on_click(|row| log::info!("clicked {row:?}")),
//! )?
//! .id("people");
//!
//! let registry = HandlerRegistry::new();
//! let root = table.build(&registry);
//! ```

mod events;
mod render;
mod state;

pub use state::{RowHandler, SortHandler, TableProps, TableState};

use crate::column::Column;
use crate::error::{Result, TableError};
use crate::record::Record;
use crate::state::State;

const DEFAULT_ASCENDING_GLYPH: &str = "▲";
const DEFAULT_DESCENDING_GLYPH: &str = "▼";

/// A sortable table widget.
///
/// Holds its state behind a shared [`State`] so the click handlers it
/// registers during [`build`](Self::build) update the same table.
pub struct SortableTable<T> {
    id: String,
    state: State<TableState<T>>,
    ascending_glyph: String,
    descending_glyph: String,
}

impl<T: Record> SortableTable<T> {
    pub fn new(props: TableProps<T>) -> Result<Self> {
        Ok(Self {
            id: "table".into(),
            state: State::new(TableState::new(props)?),
            ascending_glyph: DEFAULT_ASCENDING_GLYPH.into(),
            descending_glyph: DEFAULT_DESCENDING_GLYPH.into(),
        })
    }

    /// Set the table id. Element ids of the header, glyphs and rows derive from it.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the glyphs shown for ascending and descending columns.
    pub fn glyphs(mut self, ascending: impl Into<String>, descending: impl Into<String>) -> Self {
        self.ascending_glyph = ascending.into();
        self.descending_glyph = descending.into();
        self
    }

    pub fn table_id(&self) -> &str {
        &self.id
    }

    /// Replace columns, data and callbacks.
    ///
    /// Resets all render state: sort directions changed by clicks are
    /// discarded and the first column becomes active again.
    pub fn set_props(&self, props: TableProps<T>) -> Result<()> {
        let fresh = TableState::new(props)?;
        self.state.set(fresh);
        Ok(())
    }

    pub fn state(&self) -> &State<TableState<T>> {
        &self.state
    }

    /// The rows in their current order.
    pub fn rows(&self) -> Vec<T> {
        self.state.with(|s| s.rows().to_vec())
    }

    pub fn columns(&self) -> Vec<Column<T>> {
        self.state.with(|s| s.columns().to_vec())
    }

    /// The active sort column.
    pub fn sort_column(&self) -> Option<Column<T>> {
        self.state.with(|s| s.sort_column().cloned())
    }

    /// Sort by the named column, exactly as clicking its glyph does.
    pub fn sort_by(&self, name: &str) -> Result<Column<T>> {
        let index = self
            .state
            .with(|s| s.column_index(name))
            .ok_or_else(|| TableError::UnknownColumn(name.to_string()))?;
        events::sort_and_notify(&self.state, index)
    }

    /// Click the row at `index` of the current order.
    pub fn click_row(&self, index: usize) -> Result<()> {
        events::activate_row(&self.state, index)
    }

    /// Element id of a column's sort glyph.
    pub fn glyph_id(&self, column: &str) -> String {
        format!("{}-sort-{}", self.id, column)
    }

    /// Element id of the header row.
    pub fn header_id(&self) -> String {
        format!("{}-header", self.id)
    }

    /// Element id of the body.
    pub fn body_id(&self) -> String {
        format!("{}-body", self.id)
    }
}
