mod color;
mod enums;
mod style;
mod stylesheet;
mod theme;

pub use color::{Color, Rgb};
pub use enums::{Direction, Size, TextStyle};
pub use style::Style;
pub use stylesheet::Stylesheet;
pub use theme::{DefaultTheme, EmptyTheme, Theme};
