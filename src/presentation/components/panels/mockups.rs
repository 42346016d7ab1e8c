use ratatui::text::Line;

use super::Panel;
use crate::{
    domain::brand,
    presentation::widgets::{Grid, MockupCard, SectionHeading, ViewContext},
};

const CARD_MIN_WIDTH: u16 = 34;
const GAP: u16 = 4;

/// Photographs of the identity applied to products.
pub struct MockupsPanel;

impl Panel for MockupsPanel {
    fn title(&self) -> &'static str {
        brand::MOCKUPS_TITLE
    }

    fn lines(&self, ctx: &ViewContext<'_>) -> Vec<Line<'static>> {
        let mut lines = SectionHeading::title(self.title())
            .eyebrow(brand::MOCKUPS_EYEBROW)
            .intro(brand::MOCKUPS_INTRO)
            .lines(ctx);

        let columns = Grid::fit_columns(ctx.width, CARD_MIN_WIDTH, GAP, 2);
        let mut grid = Grid::new(columns, GAP);
        let cell = ctx.with_width(grid.cell_width(ctx.width));
        for mockup in &brand::MOCKUPS {
            grid.push(MockupCard::new(mockup).lines(&cell));
        }
        lines.extend(grid.lines(ctx.width));
        lines
    }
}
