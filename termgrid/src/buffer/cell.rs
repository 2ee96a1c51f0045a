use crate::types::{Rgb, TextStyle};

/// One terminal column of a painted frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    /// Right half of a double-width character; never written to the terminal.
    pub wide_continuation: bool,
}

impl Cell {
    /// White on black space.
    pub const BLANK: Cell = Cell {
        char: ' ',
        fg: Rgb::new(255, 255, 255),
        bg: Rgb::new(0, 0, 0),
        style: TextStyle::new(),
        wide_continuation: false,
    };

    pub fn new(char: char) -> Self {
        Self { char, ..Self::BLANK }
    }

    pub fn with_fg(self, fg: Rgb) -> Self {
        Self { fg, ..self }
    }

    pub fn with_bg(self, bg: Rgb) -> Self {
        Self { bg, ..self }
    }

    pub fn with_style(self, style: TextStyle) -> Self {
        Self { style, ..self }
    }

    pub fn continuation(bg: Rgb) -> Self {
        Self {
            bg,
            wide_continuation: true,
            ..Self::BLANK
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}
