//! Mapping screen coordinates back to elements.

use crate::element::Element;
use crate::layout::LayoutResult;

/// Id of the deepest clickable element under `(x, y)`.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    deepest(layout, root, x, y, &|el| el.clickable).map(|el| el.id.clone())
}

/// Id of the deepest element under `(x, y)`, clickable or not.
pub fn hit_test_any(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    deepest(layout, root, x, y, &|_| true).map(|el| el.id.clone())
}

fn deepest<'a>(
    layout: &LayoutResult,
    element: &'a Element,
    x: u16,
    y: u16,
    accept: &dyn Fn(&Element) -> bool,
) -> Option<&'a Element> {
    if !layout.get(&element.id)?.contains(x, y) {
        return None;
    }

    // Later siblings paint over earlier ones.
    element
        .child_elements()
        .iter()
        .rev()
        .find_map(|child| deepest(layout, child, x, y, accept))
        .or_else(|| accept(element).then_some(element))
}
