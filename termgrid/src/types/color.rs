use super::Theme;

#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8 },
    /// Named variable resolved through a [`Theme`] at paint time.
    Var(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    /// Resolve to a concrete colour. Unknown variables yield `None`.
    pub fn resolve(&self, theme: &dyn Theme) -> Option<Rgb> {
        match self {
            Color::Rgb { r, g, b } => Some(Rgb::new(*r, *g, *b)),
            Color::Var(name) => {
                let resolved = theme.resolve(name);
                if resolved.is_none() {
                    log::trace!("unresolved color variable: {name}");
                }
                resolved
            }
        }
    }
}
