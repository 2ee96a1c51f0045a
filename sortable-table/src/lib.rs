//! A sortable table widget for terminal interfaces.
//!
//! The widget renders caller-supplied columns and records into a
//! [`termgrid::Element`] tree, registers click handlers for its sort glyphs
//! and rows, and keeps its own sorted copy of the data.

pub mod column;
pub mod error;
pub mod record;
pub mod state;
pub mod table;
pub mod theme;

pub use column::{CellRenderer, Column, ColumnInformation, Comparator, SortDirection};
pub use error::{Result, TableError};
pub use record::{JsonRecord, Record, compare_values, display_value};
pub use state::State;
pub use table::{RowHandler, SortHandler, SortableTable, TableProps, TableState};
pub use theme::default_stylesheet;

pub mod prelude {
    pub use crate::column::{Column, ColumnInformation, SortDirection};
    pub use crate::error::{Result, TableError};
    pub use crate::record::{JsonRecord, Record};
    pub use crate::table::{SortableTable, TableProps};
    pub use crate::theme::default_stylesheet;
    pub use termgrid::{Element, HandlerRegistry};
}
