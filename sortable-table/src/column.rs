//! Column descriptors.
//!
//! Callers describe columns with [`ColumnInformation`], leaving optional
//! settings unset. The table normalizes each descriptor into a fresh
//! [`Column`] with every default filled in; the caller's descriptors are
//! never modified.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use termgrid::Element;

use crate::record::{Record, compare_values, display_value};

/// Orders two records.
pub type Comparator<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Renders the content of one cell.
pub type CellRenderer<T> = Arc<dyn Fn(&T) -> Element + Send + Sync>;

/// Sort direction of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Orient a comparator result for this direction.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "asc"),
            SortDirection::Descending => write!(f, "desc"),
        }
    }
}

/// A column as described by the caller.
///
/// # Examples
///
/// ```ignore
/// let columns = vec![
///     ColumnInformation::new("id", "ID"),
///     ColumnInformation::new("name", "Name").extra_classes("wide"),
///     ColumnInformation::new("surname", "Surname").sort_direction(SortDirection::Descending),
/// ];
/// ```
pub struct ColumnInformation<T> {
    /// Field of the record shown in this column.
    pub name: String,
    /// Header text.
    pub label: String,
    /// Custom cell content; the raw field value is shown when unset.
    pub value: Option<CellRenderer<T>>,
    /// Hide both header and cells.
    pub hidden: bool,
    /// Whether the column can be sorted (defaults to true).
    pub sortable: Option<bool>,
    /// Class tags added to header and data cells.
    pub extra_classes: Option<String>,
    /// Initial sort direction (defaults to ascending).
    pub sort_direction: Option<SortDirection>,
    /// Custom comparator (defaults to comparing the field values).
    pub sort_function: Option<Comparator<T>>,
}

impl<T> ColumnInformation<T> {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            value: None,
            hidden: false,
            sortable: None,
            extra_classes: None,
            sort_direction: None,
            sort_function: None,
        }
    }

    /// Render cells with a custom function.
    ///
    /// The function runs during [`build`](crate::SortableTable::build) with
    /// the table's state read-locked, so it must not sort or update the table.
    pub fn value(mut self, render: impl Fn(&T) -> Element + Send + Sync + 'static) -> Self {
        self.value = Some(Arc::new(render));
        self
    }

    /// Hide the column.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = Some(sortable);
        self
    }

    pub fn extra_classes(mut self, classes: impl Into<String>) -> Self {
        self.extra_classes = Some(classes.into());
        self
    }

    pub fn sort_direction(mut self, direction: SortDirection) -> Self {
        self.sort_direction = Some(direction);
        self
    }

    pub fn sort_function(
        mut self,
        compare: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    ) -> Self {
        self.sort_function = Some(Arc::new(compare));
        self
    }
}

impl<T: Record> ColumnInformation<T> {
    /// Fill in every unset default, producing a new column.
    pub fn normalize(&self) -> Column<T> {
        Column {
            name: self.name.clone(),
            label: self.label.clone(),
            value: self.value.clone(),
            hidden: self.hidden,
            sortable: self.sortable.unwrap_or(true),
            extra_classes: self.extra_classes.clone(),
            sort_direction: self.sort_direction.unwrap_or_default(),
            sort_function: self
                .sort_function
                .clone()
                .unwrap_or_else(|| field_comparator(&self.name)),
        }
    }
}

impl<T> Clone for ColumnInformation<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            label: self.label.clone(),
            value: self.value.clone(),
            hidden: self.hidden,
            sortable: self.sortable,
            extra_classes: self.extra_classes.clone(),
            sort_direction: self.sort_direction,
            sort_function: self.sort_function.clone(),
        }
    }
}

impl<T> fmt::Debug for ColumnInformation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnInformation")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("value", &self.value.is_some())
            .field("hidden", &self.hidden)
            .field("sortable", &self.sortable)
            .field("extra_classes", &self.extra_classes)
            .field("sort_direction", &self.sort_direction)
            .field("sort_function", &self.sort_function.is_some())
            .finish()
    }
}

/// A normalized column owned by the table.
pub struct Column<T> {
    pub name: String,
    pub label: String,
    pub value: Option<CellRenderer<T>>,
    pub hidden: bool,
    pub sortable: bool,
    pub extra_classes: Option<String>,
    /// Current direction; flipped when the active column is clicked again.
    pub sort_direction: SortDirection,
    pub sort_function: Comparator<T>,
}

impl<T> Column<T> {
    /// Content of this column's cell for `record`.
    pub fn render_cell(&self, record: &T) -> Element
    where
        T: Record,
    {
        match &self.value {
            Some(render) => render(record),
            None => Element::text(
                record
                    .field(&self.name)
                    .map(|value| display_value(&value))
                    .unwrap_or_default(),
            ),
        }
    }

    /// Compare two records in this column's current direction.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        self.sort_direction.apply((self.sort_function)(a, b))
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            label: self.label.clone(),
            value: self.value.clone(),
            hidden: self.hidden,
            sortable: self.sortable,
            extra_classes: self.extra_classes.clone(),
            sort_direction: self.sort_direction,
            sort_function: self.sort_function.clone(),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("value", &self.value.is_some())
            .field("hidden", &self.hidden)
            .field("sortable", &self.sortable)
            .field("extra_classes", &self.extra_classes)
            .field("sort_direction", &self.sort_direction)
            .finish_non_exhaustive()
    }
}

/// Default comparator: the named field of both records, missing fields as null.
fn field_comparator<T: Record>(name: &str) -> Comparator<T> {
    let name = name.to_string();
    Arc::new(move |a: &T, b: &T| {
        let a = a.field(&name).unwrap_or_default();
        let b = b.field(&name).unwrap_or_default();
        compare_values(&a, &b)
    })
}

#[cfg(test)]
mod tests {
    use serde_json::{Map, Value, json};

    use super::*;

    fn record(surname: &str) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("surname".into(), json!(surname));
        map
    }

    #[test]
    fn normalize_fills_defaults() {
        let info: ColumnInformation<Map<String, Value>> =
            ColumnInformation::new("surname", "Surname");
        let column = info.normalize();

        assert!(column.sortable);
        assert_eq!(column.sort_direction, SortDirection::Ascending);
        assert_eq!(
            (column.sort_function)(&record("Hudson"), &record("May")),
            Ordering::Less
        );
        // The descriptor keeps its unset fields.
        assert!(info.sortable.is_none());
        assert!(info.sort_direction.is_none());
        assert!(info.sort_function.is_none());
    }

    #[test]
    fn normalize_keeps_explicit_settings() {
        let info: ColumnInformation<Map<String, Value>> =
            ColumnInformation::new("surname", "Surname")
                .sortable(false)
                .sort_direction(SortDirection::Descending)
                .sort_function(|_, _| Ordering::Equal);
        let column = info.normalize();

        assert!(!column.sortable);
        assert_eq!(column.sort_direction, SortDirection::Descending);
        assert_eq!(
            (column.sort_function)(&record("Hudson"), &record("May")),
            Ordering::Equal
        );
    }

    #[test]
    fn descending_reverses_comparison() {
        let column = ColumnInformation::<Map<String, Value>>::new("surname", "Surname")
            .sort_direction(SortDirection::Descending)
            .normalize();

        assert_eq!(column.compare(&record("Hudson"), &record("May")), Ordering::Greater);
    }

    #[test]
    fn missing_field_sorts_first_and_renders_empty() {
        let column = ColumnInformation::<Map<String, Value>>::new("age", "Age").normalize();
        let mut with_age = record("May");
        with_age.insert("age".into(), json!(76));

        assert_eq!(column.compare(&record("Hudson"), &with_age), Ordering::Less);
        assert_eq!(column.render_cell(&record("Hudson")).text_content(), "");
        assert_eq!(column.render_cell(&with_age).text_content(), "76");
    }

    #[test]
    fn direction_serializes_as_short_names() {
        assert_eq!(serde_json::to_string(&SortDirection::Ascending).unwrap(), r#""asc""#);
        let parsed: SortDirection = serde_json::from_str(r#""desc""#).unwrap();
        assert_eq!(parsed, SortDirection::Descending);
        assert_eq!(parsed.toggled(), SortDirection::Ascending);
        assert_eq!(parsed.to_string(), "desc");
    }
}
