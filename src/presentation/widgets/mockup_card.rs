use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::{blank, ImagePlaceholder, TextBlock, ViewContext};
use crate::domain::{brand::MockupSpec, text};

pub const MOCKUP_IMAGE_HEIGHT: u16 = 9;

/// A mockup photograph with its title and description.
#[derive(Debug, Clone, Copy)]
pub struct MockupCard<'a> {
    pub mockup: &'a MockupSpec,
}

impl<'a> MockupCard<'a> {
    pub fn new(mockup: &'a MockupSpec) -> Self {
        Self { mockup }
    }

    pub fn lines(&self, ctx: &ViewContext<'_>) -> Vec<Line<'static>> {
        let mut lines = ImagePlaceholder::new(self.mockup.image, MOCKUP_IMAGE_HEIGHT)
            .overlay(self.mockup.overlay)
            .lines(ctx);

        let width = ctx.width();
        let title = text::truncate_text(self.mockup.title, width.saturating_sub(2));
        let gap = width.saturating_sub(title.width() + 1);
        let mut title_line = vec![Span::styled(title, ctx.style("heading"))];
        if gap > 0 {
            title_line.push(Span::raw(" ".repeat(gap)));
            title_line.push(Span::styled("→", ctx.style("accent")));
        }
        lines.push(Line::from(title_line));

        lines.extend(TextBlock::new(self.mockup.description, ctx.style("body")).lines(ctx));
        lines.push(blank());
        lines
    }
}
