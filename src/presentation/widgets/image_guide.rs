use ratatui::text::Line;

use super::{blank, ImagePlaceholder, TextBlock, ViewContext};
use crate::domain::brand::ImageGuideline;

pub const IMAGE_GUIDE_IMAGE_HEIGHT: u16 = 7;
const DO_BADGE: &str = "✓ DO";

/// An approved photography example: image, title and explanation.
#[derive(Debug, Clone, Copy)]
pub struct ImageGuide<'a> {
    pub guide: &'a ImageGuideline,
}

impl<'a> ImageGuide<'a> {
    pub fn new(guide: &'a ImageGuideline) -> Self {
        Self { guide }
    }

    pub fn lines(&self, ctx: &ViewContext<'_>) -> Vec<Line<'static>> {
        let mut lines = ImagePlaceholder::new(self.guide.image, IMAGE_GUIDE_IMAGE_HEIGHT)
            .badge(DO_BADGE)
            .lines(ctx);
        lines.extend(TextBlock::new(self.guide.title, ctx.style("heading")).lines(ctx));
        lines.extend(TextBlock::new(self.guide.description, ctx.style("body")).lines(ctx));
        lines.push(blank());
        lines
    }
}
