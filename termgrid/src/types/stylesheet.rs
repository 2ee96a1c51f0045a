use std::collections::HashMap;

use super::Style;

/// Maps class tags to styles.
///
/// Elements carry opaque class tags; the stylesheet decides what they look
/// like. Styles of several classes are merged in the order the element
/// lists them, and the element's inline style is applied last.
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    rules: HashMap<String, Style>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the style for a class.
    pub fn rule(mut self, class: impl Into<String>, style: Style) -> Self {
        self.rules.insert(class.into(), style);
        self
    }

    pub fn resolve(&self, classes: &[String], inline: &Style) -> Style {
        classes
            .iter()
            .filter_map(|class| self.rules.get(class))
            .fold(Style::new(), |acc, style| acc.merge(style))
            .merge(inline)
    }
}
