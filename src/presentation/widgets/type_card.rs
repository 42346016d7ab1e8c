use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::{blank, rule, TextBlock, ViewContext};
use crate::domain::{brand::TypeFace, text};

const SPECIMEN: &str = "Aa";

/// A typeface with its role and sample settings.
#[derive(Debug, Clone, Copy)]
pub struct TypeCard<'a> {
    pub face: &'a TypeFace,
}

impl<'a> TypeCard<'a> {
    pub fn new(face: &'a TypeFace) -> Self {
        Self { face }
    }

    pub fn lines(&self, ctx: &ViewContext<'_>) -> Vec<Line<'static>> {
        let width = ctx.width();
        let name = text::truncate_text(self.face.name, width);
        let gap = width.saturating_sub(name.width() + SPECIMEN.width());

        let mut header = vec![Span::styled(name, ctx.style("heading"))];
        if gap > 0 {
            header.push(Span::raw(" ".repeat(gap)));
            header.push(Span::styled(SPECIMEN, ctx.style("muted")));
        }

        let mut lines = vec![Line::from(header)];
        lines.extend(TextBlock::new(self.face.role.to_uppercase(), ctx.style("accent")).lines(ctx));
        lines.push(rule('─', width, ctx.style("muted")));

        for sample in self.face.samples {
            lines.extend(TextBlock::new(sample.label.to_uppercase(), ctx.style("muted")).lines(ctx));
            lines.extend(TextBlock::new(sample.text, ctx.style("body")).indent(2).lines(ctx));
        }
        lines.push(blank());
        lines
    }
}
