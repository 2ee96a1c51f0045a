//! Records shown by the demo.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value, json};
use sortable_table::ColumnInformation;

use crate::error::{DemoError, Result};

pub type Row = Map<String, Value>;

/// The people table: ID, Name and Surname.
pub fn story() -> (Vec<ColumnInformation<Row>>, Vec<Row>) {
    let columns = vec![
        ColumnInformation::new("id", "ID"),
        ColumnInformation::new("name", "Name"),
        ColumnInformation::new("surname", "Surname"),
    ];
    let rows = [
        json!({"id": 1, "name": "Brian", "surname": "May"}),
        json!({"id": 2, "name": "Saul", "surname": "Hudson"}),
    ]
    .into_iter()
    .filter_map(|value| match value {
        Value::Object(map) => Some(map),
        _ => None,
    })
    .collect();
    (columns, rows)
}

/// Load records from a JSON file holding an array of objects.
pub fn load(path: &Path) -> Result<(Vec<ColumnInformation<Row>>, Vec<Row>)> {
    let text = fs::read_to_string(path)?;
    let parsed = parse(&text)?;
    log::info!("loaded {} records from {}", parsed.1.len(), path.display());
    Ok(parsed)
}

/// Parse an array of objects. Columns follow the keys of the first record.
pub fn parse(text: &str) -> Result<(Vec<ColumnInformation<Row>>, Vec<Row>)> {
    let Value::Array(items) = serde_json::from_str(text)? else {
        return Err(DemoError::NotAnArray);
    };

    let rows = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(map) => Ok(map),
            _ => Err(DemoError::NotAnObject(index)),
        })
        .collect::<Result<Vec<Row>>>()?;

    let columns = rows
        .first()
        .map(|first| {
            first
                .keys()
                .map(|key| ColumnInformation::new(key.as_str(), key.as_str()))
                .collect()
        })
        .unwrap_or_default();

    Ok((columns, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_follow_first_record() {
        let (columns, rows) =
            parse(r#"[{"b": 1, "a": "x"}, {"a": "y", "b": 2, "c": true}]"#).unwrap();

        let names: Vec<_> = columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_rejects_non_array() {
        assert!(matches!(parse(r#"{"a": 1}"#), Err(DemoError::NotAnArray)));
    }

    #[test]
    fn test_rejects_non_object_record() {
        assert!(matches!(parse(r#"[{"a": 1}, 2]"#), Err(DemoError::NotAnObject(1))));
    }

    #[test]
    fn test_empty_array() {
        let (columns, rows) = parse("[]").unwrap();
        assert!(columns.is_empty());
        assert!(rows.is_empty());
    }

    #[test]
    fn test_story_data() {
        let (columns, rows) = story();
        assert_eq!(columns.len(), 3);
        assert_eq!(rows[1]["surname"], json!("Hudson"));
    }
}
