use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use super::ViewContext;
use crate::domain::{brand::ColorSwatch, text};

/// Rows taken by a color card
pub const COLOR_CARD_HEIGHT: usize = 5;

const LIGHT_TEXT: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
const DARK_TEXT: Color = Color::Rgb(0x5C, 0x33, 0x17);

/// A block filled with the swatch color, labelled with its HEX and CMYK
/// values.
#[derive(Debug, Clone, Copy)]
pub struct ColorCard {
    pub swatch: ColorSwatch,
}

impl ColorCard {
    pub fn new(swatch: ColorSwatch) -> Self {
        Self { swatch }
    }

    fn fill(&self) -> Style {
        let fg = if self.swatch.is_dark() {
            LIGHT_TEXT
        } else {
            DARK_TEXT
        };
        match self.swatch.rgb() {
            Some(bg) => Style::default().fg(fg).bg(bg),
            None => Style::default(),
        }
    }

    pub fn lines(&self, ctx: &ViewContext<'_>) -> Vec<Line<'static>> {
        let fill = self.fill();
        let width = ctx.width();
        let inner = width.saturating_sub(2);
        let row = |content: String, style: Style| -> Line<'static> {
            let content = text::truncate_text(&content, inner);
            let pad = inner.saturating_sub(content.width());
            let margin = " ".repeat((width - inner).min(1));
            Line::from(vec![
                Span::styled(margin.clone(), fill),
                Span::styled(content, style),
                Span::styled(format!("{}{margin}", " ".repeat(pad)), fill),
            ])
        };

        vec![
            row(String::new(), fill),
            row(
                self.swatch.name.to_string(),
                fill.add_modifier(Modifier::BOLD),
            ),
            row(justify("HEX", self.swatch.hex, inner), fill),
            row(justify("CMYK", self.swatch.cmyk, inner), fill),
            row(String::new(), fill),
        ]
    }
}

/// `left` and `right` pushed to opposite ends of `width` columns.
fn justify(left: &str, right: &str, width: usize) -> String {
    let gap = width.saturating_sub(left.width() + right.width()).max(1);
    format!("{left}{}{right}", " ".repeat(gap))
}
