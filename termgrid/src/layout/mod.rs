mod grid;
mod rect;

pub use grid::{layout, measure, LayoutResult};
pub use rect::Rect;
