//! Reusable building blocks for the brand panels
//!
//! Every widget produces pre-wrapped `Line`s for a given width. Panels are
//! assembled by concatenating those lines, which keeps their height a pure
//! function of the width.

use std::path::Path;

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::{domain::text, presentation::config::Styles};

pub mod color_card;
pub mod dont_card;
pub mod grid;
pub mod image_guide;
pub mod image_placeholder;
pub mod mockup_card;
pub mod section_heading;
pub mod text_block;
pub mod type_card;
pub mod usage_ratio;

pub use color_card::ColorCard;
pub use dont_card::DontCard;
pub use grid::Grid;
pub use image_guide::ImageGuide;
pub use image_placeholder::ImagePlaceholder;
pub use mockup_card::MockupCard;
pub use section_heading::SectionHeading;
pub use text_block::TextBlock;
pub use type_card::TypeCard;
pub use usage_ratio::UsageRatio;

/// Everything a widget needs besides its own content
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    /// Columns available to the widget
    pub width: u16,
    pub styles: &'a Styles,
    /// Directory local image assets are resolved against
    pub assets_dir: &'a Path,
}

impl<'a> ViewContext<'a> {
    pub fn new(width: u16, styles: &'a Styles, assets_dir: &'a Path) -> Self {
        Self {
            width,
            styles,
            assets_dir,
        }
    }

    /// Same context, narrowed to `width` columns
    pub fn with_width(&self, width: u16) -> Self {
        Self { width, ..*self }
    }

    pub fn style(&self, key: &str) -> Style {
        self.styles.style(key)
    }

    pub fn width(&self) -> usize {
        usize::from(self.width)
    }
}

/// An empty line
pub fn blank() -> Line<'static> {
    Line::default()
}

/// A horizontal rule spanning `width` columns
pub fn rule(glyph: char, width: usize, style: Style) -> Line<'static> {
    Line::styled(glyph.to_string().repeat(width), style)
}

/// `content` centered in `width` columns, truncated when it does not fit.
///
/// Unlike [`TextBlock`] this keeps runs of spaces, so it suits drawings.
pub fn centered_line(content: &str, width: usize, style: Style) -> Line<'static> {
    let content = text::truncate_text(content, width);
    let pad = text::center_offset(&content, width);
    if pad == 0 {
        Line::from(Span::styled(content, style))
    } else {
        Line::from(vec![
            Span::raw(" ".repeat(pad)),
            Span::styled(content, style),
        ])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{test_support::plain, *};

    #[test]
    fn test_centered_line_keeps_spaces() {
        let line = centered_line("x │  K  │ x", 15, Style::default());
        assert_eq!(plain(&[line]), vec!["  x │  K  │ x"]);
    }

    #[test]
    fn test_rule() {
        assert_eq!(plain(&[rule('═', 3, Style::default())]), vec!["═══"]);
    }
}
