//! Errors raised by the table widget.

use thiserror::Error;

/// Errors for invalid table input or operations.
#[derive(Debug, Error)]
pub enum TableError {
    /// Two columns share the same field name.
    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),

    /// No column with this name exists in the table.
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    /// The column exists but was declared not sortable.
    #[error("column is not sortable: {0}")]
    NotSortable(String),

    /// A row position outside the current data.
    #[error("row {index} out of range (table has {len} rows)")]
    RowOutOfRange { index: usize, len: usize },

    /// A value could not be converted into a JSON record.
    #[error("record is not a JSON object: {0}")]
    NotAnObject(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TableError>;
