//! Class tags emitted by the table and their default look.
//!
//! The widget only tags elements; how a tag looks is up to the host's
//! [`Stylesheet`]. [`default_stylesheet`] maps every tag to the colour
//! variables of [`termgrid::DefaultTheme`].

use termgrid::{Color, Style, Stylesheet};

/// Sort glyph of an inactive column stored as ascending.
pub const ASCENDING: &str = "ascending";
/// Sort glyph of an inactive column stored as descending.
pub const DESCENDING: &str = "descending";
/// Sort glyph of the active column, ascending.
pub const ACTIVE_ASCENDING: &str = "active-ascending";
/// Sort glyph of the active column, descending.
pub const ACTIVE_DESCENDING: &str = "active-descending";
/// Data row of a table with a row-click callback.
pub const CLICKABLE_ROW: &str = "clickable-row";
/// The header row.
pub const TABLE_HEADER: &str = "table-header";

pub fn default_stylesheet() -> Stylesheet {
    let active = Style::new()
        .foreground(Color::var("primary"))
        .background(Color::var("foreground"))
        .bold();
    let inactive = Style::new().foreground(Color::var("muted"));

    Stylesheet::new()
        .rule(ASCENDING, inactive.clone())
        .rule(DESCENDING, inactive)
        .rule(ACTIVE_ASCENDING, active.clone())
        .rule(ACTIVE_DESCENDING, active)
        .rule(CLICKABLE_ROW, Style::new().background(Color::var("surface")))
        .rule(
            TABLE_HEADER,
            Style::new().background(Color::var("header")).bold(),
        )
}
