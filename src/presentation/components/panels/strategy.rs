use ratatui::text::Line;

use super::Panel;
use crate::{
    domain::brand,
    presentation::widgets::{
        blank, rule, ColorCard, Grid, SectionHeading, TextBlock, UsageRatio, ViewContext,
    },
};

const VALUE_MIN_WIDTH: u16 = 28;
const CARD_MIN_WIDTH: u16 = 26;
const GAP: u16 = 3;

/// Mission, core values and the color palette.
pub struct StrategyPanel;

impl StrategyPanel {
    fn core_values(ctx: &ViewContext<'_>) -> Vec<Line<'static>> {
        let columns = Grid::fit_columns(ctx.width, VALUE_MIN_WIDTH, GAP, brand::CORE_VALUES.len());
        let mut grid = Grid::new(columns, GAP);
        let cell = ctx.with_width(grid.cell_width(ctx.width));
        for value in brand::CORE_VALUES {
            let mut lines = vec![rule('─', cell.width(), cell.style("muted"))];
            lines.push(Line::styled(value.number, cell.style("eyebrow")));
            lines.extend(TextBlock::new(value.title, cell.style("subheading")).lines(&cell));
            lines.extend(TextBlock::new(value.description, cell.style("body")).lines(&cell));
            lines.push(blank());
            grid.push(lines);
        }
        grid.lines(ctx.width)
    }

    fn palette(ctx: &ViewContext<'_>) -> Vec<Line<'static>> {
        let mut lines = UsageRatio::new(brand::USAGE_RATIO_TITLE, &brand::USAGE_RATIO).lines(ctx);
        lines.push(blank());

        let columns = Grid::fit_columns(ctx.width, CARD_MIN_WIDTH, GAP, 2);
        let mut grid = Grid::new(columns, GAP);
        let cell = ctx.with_width(grid.cell_width(ctx.width));
        for swatch in brand::PALETTE {
            let mut card = ColorCard::new(swatch).lines(&cell);
            card.push(blank());
            grid.push(card);
        }
        lines.extend(grid.lines(ctx.width));
        lines
    }
}

impl Panel for StrategyPanel {
    fn title(&self) -> &'static str {
        brand::STRATEGY_TITLE
    }

    fn lines(&self, ctx: &ViewContext<'_>) -> Vec<Line<'static>> {
        let mut lines = SectionHeading::title(self.title())
            .eyebrow(brand::STRATEGY_EYEBROW)
            .intro(brand::STRATEGY_INTRO)
            .centered()
            .lines(ctx);

        lines.extend(
            SectionHeading::section(brand::MISSION_TITLE)
                .centered()
                .lines(ctx),
        );
        lines.extend(
            TextBlock::new(brand::MISSION, ctx.style("subheading"))
                .centered()
                .lines(ctx),
        );
        lines.push(blank());

        lines.extend(
            SectionHeading::section(brand::CORE_VALUES_TITLE)
                .centered()
                .lines(ctx),
        );
        lines.extend(Self::core_values(ctx));

        lines.extend(
            SectionHeading::section(brand::PALETTE_TITLE)
                .intro(brand::PALETTE_INTRO)
                .lines(ctx),
        );
        lines.extend(Self::palette(ctx));
        lines
    }
}
