use super::{Color, TextStyle};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub text_style: TextStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.text_style.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.text_style.underline = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.text_style.dim = true;
        self
    }

    /// Layer `other` on top of `self`: colours set in `other` win,
    /// text attributes accumulate.
    pub fn merge(&self, other: &Style) -> Style {
        Style {
            background: other.background.clone().or_else(|| self.background.clone()),
            foreground: other.foreground.clone().or_else(|| self.foreground.clone()),
            text_style: self.text_style.union(other.text_style),
        }
    }

    /// The part of this style that children inherit. Backgrounds are
    /// painted by the element that owns them, so they are not passed on.
    pub fn inherited(&self) -> Style {
        Style {
            background: None,
            foreground: self.foreground.clone(),
            text_style: self.text_style,
        }
    }
}
