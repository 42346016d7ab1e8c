use ratatui::text::Line;

use super::Panel;
use crate::{
    domain::brand,
    presentation::widgets::{
        blank, centered_line, DontCard, Grid, ImageGuide, SectionHeading, TextBlock, TypeCard,
        ViewContext,
    },
};

const GUIDE_MIN_WIDTH: u16 = 30;
const DONT_MIN_WIDTH: u16 = 22;
const DIVIDER_MAX_WIDTH: usize = 48;
const GAP: u16 = 3;

/// Typefaces, graphic elements, imagery rules and the don'ts.
pub struct TypographyPanel;

impl TypographyPanel {
    /// The double line divider with the ornament in the middle.
    fn divider(ctx: &ViewContext<'_>) -> Line<'static> {
        let side = ctx.width().min(DIVIDER_MAX_WIDTH).saturating_sub(3) / 2;
        let divider = format!("{0} {1} {0}", "═".repeat(side), brand::DIVIDER_GLYPH);
        centered_line(&divider, ctx.width(), ctx.style("accent"))
    }

    fn grid<F>(ctx: &ViewContext<'_>, min_width: u16, count: usize, mut cell: F) -> Vec<Line<'static>>
    where
        F: FnMut(usize, &ViewContext<'_>) -> Vec<Line<'static>>,
    {
        let columns = Grid::fit_columns(ctx.width, min_width, GAP, count);
        let mut grid = Grid::new(columns, GAP);
        let cell_ctx = ctx.with_width(grid.cell_width(ctx.width));
        for i in 0..count {
            grid.push(cell(i, &cell_ctx));
        }
        grid.lines(ctx.width)
    }

    fn help(ctx: &ViewContext<'_>) -> Vec<Line<'static>> {
        let mut lines = TextBlock::new(brand::HELP_TITLE, ctx.style("label")).lines(ctx);
        lines.extend(TextBlock::new(brand::HELP_TEXT, ctx.style("muted")).lines(ctx));
        lines.extend(TextBlock::new(brand::DESIGN_CONTACT, ctx.style("link")).lines(ctx));
        lines.push(blank());
        lines
    }
}

impl Panel for TypographyPanel {
    fn title(&self) -> &'static str {
        brand::TYPOGRAPHY_TITLE
    }

    fn lines(&self, ctx: &ViewContext<'_>) -> Vec<Line<'static>> {
        let mut lines = SectionHeading::title(self.title())
            .intro(brand::TYPOGRAPHY_INTRO)
            .lines(ctx);

        lines.extend(SectionHeading::section(brand::TYPEFACES_TITLE).lines(ctx));
        for face in &brand::TYPEFACES {
            lines.extend(TypeCard::new(face).lines(ctx));
        }

        lines.extend(SectionHeading::section(brand::GRAPHIC_ELEMENTS_TITLE).lines(ctx));
        lines.extend(
            TextBlock::new(brand::DIVIDER_TEXT, ctx.style("body"))
                .centered()
                .lines(ctx),
        );
        lines.push(blank());
        lines.push(Self::divider(ctx));
        lines.push(blank());

        lines.extend(SectionHeading::section(brand::IMAGERY_TITLE).lines(ctx));
        lines.extend(Self::grid(
            ctx,
            GUIDE_MIN_WIDTH,
            brand::IMAGE_GUIDELINES.len(),
            |i, cell| ImageGuide::new(&brand::IMAGE_GUIDELINES[i]).lines(cell),
        ));

        lines.extend(SectionHeading::section(brand::DONTS_TITLE).lines(ctx));
        lines.extend(Self::grid(ctx, DONT_MIN_WIDTH, brand::BRAND_DONTS.len(), |i, cell| {
            let mut card = DontCard::new(&brand::BRAND_DONTS[i]).lines(cell);
            card.push(blank());
            card
        }));

        lines.extend(Self::help(ctx));
        lines
    }
}
