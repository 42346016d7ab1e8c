use std::borrow::Cow;

use ratatui::{
    layout::Alignment,
    style::Style,
    text::{Line, Span},
};

use super::ViewContext;
use crate::domain::text;

/// A paragraph word-wrapped to the context width.
#[derive(Clone, Debug, Default)]
pub struct TextBlock<'a> {
    pub content: Cow<'a, str>,
    pub style: Style,
    pub indent: u16,
    pub alignment: Alignment,
}

impl<'a> TextBlock<'a> {
    pub fn new<T>(content: T, style: Style) -> Self
    where
        T: Into<Cow<'a, str>>,
    {
        Self {
            content: content.into(),
            style,
            indent: 0,
            alignment: Alignment::Left,
        }
    }

    pub fn indent(mut self, indent: u16) -> Self {
        self.indent = indent;
        self
    }

    pub fn centered(mut self) -> Self {
        self.alignment = Alignment::Center;
        self
    }

    pub fn lines(&self, ctx: &ViewContext<'_>) -> Vec<Line<'static>> {
        let indent = usize::from(self.indent).min(ctx.width());
        let width = ctx.width() - indent;
        text::wrap_text(&self.content, width)
            .into_iter()
            .map(|row| {
                let pad = match self.alignment {
                    Alignment::Center => indent + text::center_offset(&row, width),
                    _ => indent,
                };
                if pad == 0 {
                    Line::from(Span::styled(row, self.style))
                } else {
                    Line::from(vec![
                        Span::raw(" ".repeat(pad)),
                        Span::styled(row, self.style),
                    ])
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::presentation::{
        config::Styles,
        widgets::test_support::{ctx, plain},
    };

    #[test]
    fn test_wraps_to_width() {
        let styles = Styles::default();
        let block = TextBlock::new("Authenticity Craftsmanship Minimalism", Style::default());
        assert_eq!(
            plain(&block.lines(&ctx(&styles, 14))),
            vec!["Authenticity", "Craftsmanship", "Minimalism"]
        );
    }

    #[test]
    fn test_indent_reduces_width() {
        let styles = Styles::default();
        let block = TextBlock::new("one two three", Style::default()).indent(4);
        assert_eq!(
            plain(&block.lines(&ctx(&styles, 11))),
            vec!["    one two", "    three"]
        );
    }

    #[test]
    fn test_centered() {
        let styles = Styles::default();
        let block = TextBlock::new("abc", Style::default()).centered();
        assert_eq!(plain(&block.lines(&ctx(&styles, 9))), vec!["   abc"]);
    }

    #[test]
    fn test_indent_wider_than_width() {
        let styles = Styles::default();
        let block = TextBlock::new("abc", Style::default()).indent(20);
        assert!(block.lines(&ctx(&styles, 5)).is_empty());
    }
}
