use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{char_width, display_width, truncate_to_width};
use crate::types::{Rgb, Style, Stylesheet, Theme};

const DEFAULT_FG: Rgb = Rgb::new(255, 255, 255);

/// Paint `element` and its descendants into `buf`.
///
/// Each element's style is the inherited foreground and text attributes,
/// then its class rules, then its inline style.
pub fn render_to_buffer(
    element: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    stylesheet: &Stylesheet,
    theme: &dyn Theme,
) {
    let painter = Painter { stylesheet, theme };
    painter.render_element(element, layout, buf, &Style::new());
}

struct Painter<'a> {
    stylesheet: &'a Stylesheet,
    theme: &'a dyn Theme,
}

impl Painter<'_> {
    fn render_element(
        &self,
        element: &Element,
        layout: &LayoutResult,
        buf: &mut Buffer,
        inherited: &Style,
    ) {
        let Some(rect) = layout.get(&element.id) else {
            return;
        };

        let style = inherited.merge(&self.stylesheet.resolve(&element.classes, &element.style));

        if let Some(bg) = style.background.as_ref().and_then(|c| c.resolve(self.theme)) {
            fill_rect(buf, *rect, bg);
        }

        match &element.content {
            Content::None => {}
            Content::Text(text) => self.render_text(text, &style, *rect, buf),
            Content::Children(children) => {
                let inherited = style.inherited();
                for child in children {
                    self.render_element(child, layout, buf, &inherited);
                }
            }
        }
    }

    fn render_text(&self, text: &str, style: &Style, rect: Rect, buf: &mut Buffer) {
        if rect.is_empty() {
            return;
        }

        let fg = style
            .foreground
            .as_ref()
            .and_then(|c| c.resolve(self.theme))
            .unwrap_or(DEFAULT_FG);
        let explicit_bg = style.background.as_ref().and_then(|c| c.resolve(self.theme));

        let visible = if display_width(text) > rect.width as usize {
            truncate_to_width(text, rect.width as usize)
        } else {
            text.to_string()
        };

        let mut x = rect.x;
        let y = rect.y;

        for ch in visible.chars() {
            let width = char_width(ch) as u16;
            if width == 0 {
                continue;
            }
            if x.saturating_add(width) > rect.right() {
                break;
            }

            // Preserve existing background if no explicit background set
            let bg = explicit_bg
                .unwrap_or_else(|| buf.get(x, y).map(|c| c.bg).unwrap_or_default());

            buf.set(
                x,
                y,
                Cell::new(ch)
                    .with_fg(fg)
                    .with_bg(bg)
                    .with_style(style.text_style),
            );
            if width == 2 {
                buf.set(x + 1, y, Cell::continuation(bg));
            }
            x += width;
        }
    }
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.bottom().min(buf.height()) {
        for x in rect.x..rect.right().min(buf.width()) {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.bg = bg;
            }
        }
    }
}
