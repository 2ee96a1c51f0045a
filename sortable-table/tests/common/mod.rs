#![allow(dead_code)]

use serde_json::{Value, json};
use sortable_table::{ColumnInformation, Record};
use termgrid::{Element, find_element};

#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: u32,
    pub name: String,
    pub surname: String,
}

impl Entry {
    pub fn new(id: u32, name: &str, surname: &str) -> Self {
        Self {
            id,
            name: name.into(),
            surname: surname.into(),
        }
    }
}

impl Record for Entry {
    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "id" => Some(json!(self.id)),
            "name" => Some(json!(self.name)),
            "surname" => Some(json!(self.surname)),
            _ => None,
        }
    }

    fn values(&self) -> Vec<Value> {
        vec![json!(self.id), json!(self.name), json!(self.surname)]
    }
}

pub fn data() -> Vec<Entry> {
    vec![Entry::new(1, "Brian", "May"), Entry::new(2, "Saul", "Hudson")]
}

pub fn columns() -> Vec<ColumnInformation<Entry>> {
    vec![
        ColumnInformation::new("id", "ID"),
        ColumnInformation::new("name", "Name"),
        ColumnInformation::new("surname", "Surname"),
    ]
}

/// Header cells of a built table.
pub fn header_cells(root: &Element) -> Vec<&Element> {
    let header = find_element(root, "table-header").expect("header row");
    header.child_elements().iter().collect()
}

/// Label text of each header cell.
pub fn header_labels(root: &Element) -> Vec<String> {
    header_cells(root)
        .into_iter()
        .map(|cell| cell.child_elements()[0].child_elements()[0].text_content())
        .collect()
}

/// Data rows of a built table.
pub fn body_rows(root: &Element) -> Vec<&Element> {
    let body = find_element(root, "table-body").expect("table body");
    body.child_elements().iter().collect()
}

/// Text of every data cell, row by row.
pub fn body_text(root: &Element) -> Vec<Vec<String>> {
    body_rows(root)
        .into_iter()
        .map(|row| {
            row.child_elements()
                .iter()
                .map(Element::text_content)
                .collect()
        })
        .collect()
}

/// First cell of every row.
pub fn first_column(root: &Element) -> Vec<String> {
    body_text(root).into_iter().map(|row| row[0].clone()).collect()
}

pub fn glyph<'a>(root: &'a Element, column: &str) -> &'a Element {
    find_element(root, &format!("table-sort-{column}")).expect("sort glyph")
}
