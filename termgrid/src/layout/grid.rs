//! Box layout for rows and columns of fixed-height text.
//!
//! Elements stack along their direction with an optional gap. Text is one
//! line high and as wide as its display width. Every child is clipped to
//! its parent so hit testing never reaches outside the area it was given.

use std::collections::HashMap;

use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Direction, Size};

use super::Rect;

pub type LayoutResult = HashMap<String, Rect>;

pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    let (w, h) = measure(element);
    let width = resolve(element.width, w, available.width);
    let height = resolve(element.height, h, available.height);
    let rect = Rect::new(available.x, available.y, width, height).clip(available);
    layout_element(element, rect, &mut result);
    result
}

/// Intrinsic size of an element as `(width, height)`.
pub fn measure(element: &Element) -> (u16, u16) {
    let (w, h) = match &element.content {
        Content::None => (0, 0),
        Content::Text(text) => (clamp_u16(display_width(text)), 1),
        Content::Children(children) => {
            let sizes: Vec<(u16, u16)> = children.iter().map(measure).collect();
            let gaps = element
                .gap
                .saturating_mul(clamp_u16(sizes.len().saturating_sub(1)));
            match element.direction {
                Direction::Row => (
                    sizes
                        .iter()
                        .fold(0u16, |acc, (w, _)| acc.saturating_add(*w))
                        .saturating_add(gaps),
                    sizes.iter().map(|(_, h)| *h).max().unwrap_or(0),
                ),
                Direction::Column => (
                    sizes.iter().map(|(w, _)| *w).max().unwrap_or(0),
                    sizes
                        .iter()
                        .fold(0u16, |acc, (_, h)| acc.saturating_add(*h))
                        .saturating_add(gaps),
                ),
            }
        }
    };

    let w = match element.width {
        Size::Fixed(fixed) => fixed,
        _ => w,
    };
    let h = match element.height {
        Size::Fixed(fixed) => fixed,
        _ => h,
    };
    (w, h)
}

fn layout_element(element: &Element, rect: Rect, result: &mut LayoutResult) {
    result.insert(element.id.clone(), rect);

    let Content::Children(children) = &element.content else {
        return;
    };

    match element.direction {
        Direction::Row => {
            let mut x = rect.x;
            for child in children {
                let (w, h) = measure(child);
                let remaining = rect.right().saturating_sub(x);
                let width = resolve(child.width, w, remaining);
                let height = resolve(child.height, h, rect.height);
                let child_rect = Rect::new(x, rect.y, width, height).clip(rect);
                layout_element(child, child_rect, result);
                x = x.saturating_add(width).saturating_add(element.gap);
            }
        }
        Direction::Column => {
            let mut y = rect.y;
            for child in children {
                let (w, h) = measure(child);
                let remaining = rect.bottom().saturating_sub(y);
                let width = resolve(child.width, w, rect.width);
                let height = resolve(child.height, h, remaining);
                let child_rect = Rect::new(rect.x, y, width, height).clip(rect);
                layout_element(child, child_rect, result);
                y = y.saturating_add(height).saturating_add(element.gap);
            }
        }
    }
}

fn resolve(size: Size, intrinsic: u16, available: u16) -> u16 {
    match size {
        Size::Fixed(fixed) => fixed,
        Size::Fill => available,
        Size::Auto => intrinsic,
    }
}

fn clamp_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
