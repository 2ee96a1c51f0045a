//! Row records and field values.
//!
//! A record is any caller-defined value that can hand out its fields as
//! [`serde_json::Value`]s, looked up by name for cells and comparators, and
//! in declaration order for row keys.

use std::cmp::Ordering;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Result, TableError};

/// Trait for values that can be displayed as rows in a [`SortableTable`].
///
/// # Example
///
/// ```
/// use serde_json::{Value, json};
/// use sortable_table::Record;
///
/// #[derive(Clone)]
/// struct Entry {
///     id: u32,
///     name: String,
/// }
///
/// impl Record for Entry {
///     fn field(&self, name: &str) -> Option<Value> {
///         match name {
///             "id" => Some(json!(self.id)),
///             "name" => Some(json!(self.name)),
///             _ => None,
///         }
///     }
///
///     fn values(&self) -> Vec<Value> {
///         vec![json!(self.id), json!(self.name)]
///     }
/// }
/// ```
///
/// [`SortableTable`]: crate::SortableTable
pub trait Record: Clone + Send + Sync + 'static {
    /// Value of the named field, or `None` if the record has no such field.
    fn field(&self, name: &str) -> Option<Value>;

    /// All field values in declaration order.
    fn values(&self) -> Vec<Value>;
}

impl Record for Map<String, Value> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }

    fn values(&self) -> Vec<Value> {
        Map::values(self).cloned().collect()
    }
}

/// Objects behave like maps; any other value has no fields.
impl Record for Value {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }

    fn values(&self) -> Vec<Value> {
        match self {
            Value::Object(map) => map.values().cloned().collect(),
            _ => Vec::new(),
        }
    }
}

/// Adapter exposing any serializable value as a [`Record`].
///
/// The value is serialized once, up front; its struct fields become the
/// record's fields in declaration order.
#[derive(Debug, Clone)]
pub struct JsonRecord<R> {
    inner: R,
    fields: Map<String, Value>,
}

impl<R: Serialize> JsonRecord<R> {
    pub fn new(inner: R) -> Result<Self> {
        match serde_json::to_value(&inner)? {
            Value::Object(fields) => Ok(Self { inner, fields }),
            other => Err(TableError::NotAnObject(other.to_string())),
        }
    }
}

impl<R> JsonRecord<R> {
    pub fn get(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Clone + Send + Sync + 'static> Record for JsonRecord<R> {
    fn field(&self, name: &str) -> Option<Value> {
        self.fields.get(name).cloned()
    }

    fn values(&self) -> Vec<Value> {
        self.fields.values().cloned().collect()
    }
}

/// Text shown for a raw field value.
///
/// Strings are shown without quotes and `null` as an empty cell; arrays
/// and objects use their compact JSON form.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Three-way ordering over field values.
///
/// Values of different kinds order as null < bool < number < string <
/// array < object. Numbers compare numerically, strings by code point,
/// arrays element by element and objects by their JSON text.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => {
            if let (Some(x), Some(y)) = (x.as_i64(), y.as_i64()) {
                x.cmp(&y)
            } else if let (Some(x), Some(y)) = (x.as_u64(), y.as_u64()) {
                x.cmp(&y)
            } else {
                let x = x.as_f64().unwrap_or(f64::NAN);
                let y = y.as_f64().unwrap_or(f64::NAN);
                x.total_cmp(&y)
            }
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Array(x), Value::Array(y)) => x
            .iter()
            .zip(y.iter())
            .map(|(x, y)| compare_values(x, y))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| x.len().cmp(&y.len())),
        (Value::Object(_), Value::Object(_)) => a.to_string().cmp(&b.to_string()),
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

fn kind_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn numbers_compare_numerically() {
        assert_eq!(compare_values(&json!(2), &json!(10)), Ordering::Less);
        assert_eq!(compare_values(&json!(-1), &json!(u64::MAX)), Ordering::Less);
        assert_eq!(compare_values(&json!(1.5), &json!(1)), Ordering::Greater);
        assert_eq!(compare_values(&json!(3), &json!(3)), Ordering::Equal);
    }

    #[test]
    fn strings_compare_lexicographically() {
        assert_eq!(compare_values(&json!("Hudson"), &json!("May")), Ordering::Less);
        assert_eq!(compare_values(&json!("May"), &json!("May")), Ordering::Equal);
    }

    #[test]
    fn mixed_kinds_use_rank() {
        assert_eq!(compare_values(&Value::Null, &json!(false)), Ordering::Less);
        assert_eq!(compare_values(&json!(true), &json!(0)), Ordering::Less);
        assert_eq!(compare_values(&json!(99), &json!("1")), Ordering::Less);
        assert_eq!(compare_values(&json!({}), &json!([1])), Ordering::Greater);
    }

    #[test]
    fn arrays_compare_elementwise_then_by_length() {
        assert_eq!(compare_values(&json!([1, 2]), &json!([1, 3])), Ordering::Less);
        assert_eq!(compare_values(&json!([1, 2]), &json!([1])), Ordering::Greater);
    }

    #[test]
    fn display_strips_quotes_and_nulls() {
        assert_eq!(display_value(&json!("Brian")), "Brian");
        assert_eq!(display_value(&json!(1)), "1");
        assert_eq!(display_value(&json!(true)), "true");
        assert_eq!(display_value(&Value::Null), "");
        assert_eq!(display_value(&json!([1, "a"])), r#"[1,"a"]"#);
    }

    #[test]
    fn json_record_keeps_field_order() {
        #[derive(Clone, Serialize)]
        struct Entry {
            surname: &'static str,
            id: u32,
        }

        let record = JsonRecord::new(Entry {
            surname: "May",
            id: 1,
        })
        .unwrap();

        assert_eq!(record.values(), vec![json!("May"), json!(1)]);
        assert_eq!(record.field("id"), Some(json!(1)));
        assert_eq!(record.get().surname, "May");
    }

    #[test]
    fn json_record_rejects_non_objects() {
        let err = JsonRecord::new(5).unwrap_err();
        assert!(matches!(err, TableError::NotAnObject(_)));
    }
}
