//! Table widget state.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::column::{Column, ColumnInformation};
use crate::error::{Result, TableError};
use crate::record::{Record, display_value};

/// Called after every sort with the sorted column.
pub type SortHandler<T> = Arc<dyn Fn(&Column<T>) + Send + Sync>;

/// Called with the record of a clicked row.
pub type RowHandler<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Everything the caller supplies to a table.
pub struct TableProps<T> {
    pub columns: Vec<ColumnInformation<T>>,
    pub data: Vec<T>,
    /// Which of a record's values keys its row.
    pub key_index: usize,
    pub on_sort: Option<SortHandler<T>>,
    pub on_click: Option<RowHandler<T>>,
}

impl<T> TableProps<T> {
    pub fn new(columns: Vec<ColumnInformation<T>>, data: Vec<T>) -> Self {
        Self {
            columns,
            data,
            key_index: 0,
            on_sort: None,
            on_click: None,
        }
    }

    pub fn key_index(mut self, key_index: usize) -> Self {
        self.key_index = key_index;
        self
    }

    pub fn on_sort(mut self, handler: impl Fn(&Column<T>) + Send + Sync + 'static) -> Self {
        self.on_sort = Some(Arc::new(handler));
        self
    }

    pub fn on_click(mut self, handler: impl Fn(&T) + Send + Sync + 'static) -> Self {
        self.on_click = Some(Arc::new(handler));
        self
    }
}

/// Render state of one table: normalized columns, the table's own copy of
/// the rows and the active sort column.
pub struct TableState<T> {
    columns: Vec<Column<T>>,
    rows: Vec<T>,
    /// Index of the active sort column; `None` only for a table without columns.
    sort_column: Option<usize>,
    key_index: usize,
    pub(super) on_sort: Option<SortHandler<T>>,
    pub(super) on_click: Option<RowHandler<T>>,
}

impl<T: Record> TableState<T> {
    /// Normalize the columns and take ownership of the rows.
    pub fn new(props: TableProps<T>) -> Result<Self> {
        let mut seen = HashSet::new();
        for column in &props.columns {
            if !seen.insert(column.name.as_str()) {
                return Err(TableError::DuplicateColumn(column.name.clone()));
            }
        }

        let columns: Vec<Column<T>> = props
            .columns
            .iter()
            .map(ColumnInformation::normalize)
            .collect();
        log::debug!(
            "table state: {} columns, {} rows, key index {}",
            columns.len(),
            props.data.len(),
            props.key_index
        );

        Ok(Self {
            sort_column: if columns.is_empty() { None } else { Some(0) },
            columns,
            rows: props.data,
            key_index: props.key_index,
            on_sort: props.on_sort,
            on_click: props.on_click,
        })
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    /// Columns that render, with their index in [`columns`](Self::columns).
    pub fn visible_columns(&self) -> impl Iterator<Item = (usize, &Column<T>)> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, column)| !column.hidden)
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.name == name)
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// The active sort column.
    pub fn sort_column(&self) -> Option<&Column<T>> {
        self.sort_column.and_then(|index| self.columns.get(index))
    }

    pub fn is_sort_column(&self, index: usize) -> bool {
        self.sort_column == Some(index)
    }

    pub fn has_click_handler(&self) -> bool {
        self.on_click.is_some()
    }

    /// Make the column at `index` the active sort column.
    ///
    /// Activating the column that is already active flips its direction;
    /// any other column keeps its stored direction. Returns the column
    /// after the update. The rows are not reordered here.
    pub fn activate(&mut self, index: usize) -> Result<&Column<T>> {
        let Some(column) = self.columns.get(index) else {
            return Err(TableError::UnknownColumn(index.to_string()));
        };
        if !column.sortable {
            return Err(TableError::NotSortable(column.name.clone()));
        }

        if self.sort_column == Some(index) {
            let column = &mut self.columns[index];
            column.sort_direction = column.sort_direction.toggled();
        }
        self.sort_column = Some(index);
        Ok(&self.columns[index])
    }

    /// Replace the rows with a reordered copy.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
    }

    /// Key of the row at `index`: the record's `key_index`-th value, or
    /// the row position when the record has fewer values.
    pub fn row_key(&self, index: usize) -> String {
        self.rows
            .get(index)
            .and_then(|row| row.values().into_iter().nth(self.key_index))
            .map(|value| display_value(&value))
            .unwrap_or_else(|| {
                log::debug!("row {index} has no value at key index {}", self.key_index);
                index.to_string()
            })
    }

}

impl<T> fmt::Debug for TableState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableState")
            .field("columns", &self.columns)
            .field("rows", &self.rows.len())
            .field("sort_column", &self.sort_column)
            .field("key_index", &self.key_index)
            .field("on_sort", &self.on_sort.is_some())
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}
