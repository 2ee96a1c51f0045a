use super::Rgb;

/// A theme provides named color variables.
pub trait Theme: Send + Sync {
    /// Resolve a color variable name to a concrete color.
    /// Returns None if the variable is not defined.
    fn resolve(&self, name: &str) -> Option<Rgb>;
}

/// Default empty theme that resolves nothing.
pub struct EmptyTheme;

impl Theme for EmptyTheme {
    fn resolve(&self, _name: &str) -> Option<Rgb> {
        None
    }
}

/// Minimal default theme providing basic readable colors.
pub struct DefaultTheme {
    pub background: Rgb,
    pub foreground: Rgb,
    pub surface: Rgb,
    pub header: Rgb,
    pub primary: Rgb,
    pub muted: Rgb,
}

impl DefaultTheme {
    pub const fn new() -> Self {
        Self {
            background: Rgb::new(0, 0, 0),
            foreground: Rgb::new(255, 255, 255),
            surface: Rgb::new(38, 38, 38),
            header: Rgb::new(58, 58, 68),
            primary: Rgb::new(13, 110, 253),
            muted: Rgb::new(140, 140, 140),
        }
    }
}

impl Default for DefaultTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for DefaultTheme {
    fn resolve(&self, name: &str) -> Option<Rgb> {
        match name {
            "background" => Some(self.background),
            "foreground" => Some(self.foreground),
            "surface" => Some(self.surface),
            "header" => Some(self.header),
            "primary" => Some(self.primary),
            "muted" => Some(self.muted),
            _ => None,
        }
    }
}
