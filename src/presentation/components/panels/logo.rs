use ratatui::text::Line;
use unicode_width::UnicodeWidthStr;

use super::Panel;
use crate::{
    domain::brand,
    presentation::{
        layout::LOGO_TEXT,
        widgets::{
            blank, centered_line, Grid, ImagePlaceholder, SectionHeading, TextBlock, ViewContext,
        },
    },
};

const LOCKUP_HEIGHT: u16 = 7;
const MINIMUM_SIZE_HEIGHT: u16 = 5;
const CELL_MIN_WIDTH: u16 = 30;
const GAP: u16 = 3;

/// Lockups, clear space and minimum sizes of the logo.
pub struct LogoPanel;

impl LogoPanel {
    fn lockups(ctx: &ViewContext<'_>) -> Vec<Line<'static>> {
        let columns = Grid::fit_columns(ctx.width, CELL_MIN_WIDTH, GAP, brand::LOCKUPS.len());
        let mut grid = Grid::new(columns, GAP);
        let cell = ctx.with_width(grid.cell_width(ctx.width));
        for lockup in &brand::LOCKUPS {
            let mut lines = ImagePlaceholder::new(lockup.asset, LOCKUP_HEIGHT)
                .label(lockup.label)
                .lines(&cell);
            lines.push(blank());
            grid.push(lines);
        }
        grid.lines(ctx.width)
    }

    /// The wordmark framed by `x` markers on every side.
    fn clear_space(ctx: &ViewContext<'_>) -> Vec<Line<'static>> {
        let mark = format!("  {LOGO_TEXT}  ");
        let bar = "─".repeat(mark.width());
        let diagram = [
            "x".to_string(),
            format!("┌{bar}┐"),
            format!("x │{mark}│ x"),
            format!("└{bar}┘"),
            "x".to_string(),
        ];

        let mut lines: Vec<Line<'static>> = diagram
            .iter()
            .map(|row| centered_line(row, ctx.width(), ctx.style("brand")))
            .collect();
        lines.push(blank());
        lines.extend(
            TextBlock::new(brand::CLEAR_SPACE_LEGEND, ctx.style("muted"))
                .centered()
                .lines(ctx),
        );
        lines.push(blank());
        lines
    }

    fn minimum_sizes(ctx: &ViewContext<'_>) -> Vec<Line<'static>> {
        let columns = Grid::fit_columns(ctx.width, CELL_MIN_WIDTH, GAP, brand::MINIMUM_SIZES.len());
        let mut grid = Grid::new(columns, GAP);
        let cell = ctx.with_width(grid.cell_width(ctx.width));
        for size in &brand::MINIMUM_SIZES {
            let mut lines =
                TextBlock::new(size.medium.to_uppercase(), cell.style("subheading")).lines(&cell);
            lines.extend(TextBlock::new(size.requirement, cell.style("body")).lines(&cell));
            lines.extend(ImagePlaceholder::new(size.asset, MINIMUM_SIZE_HEIGHT).lines(&cell));
            lines.push(blank());
            grid.push(lines);
        }
        grid.lines(ctx.width)
    }
}

impl Panel for LogoPanel {
    fn title(&self) -> &'static str {
        brand::LOGO_TITLE
    }

    fn lines(&self, ctx: &ViewContext<'_>) -> Vec<Line<'static>> {
        let mut lines = SectionHeading::title(self.title())
            .eyebrow(brand::LOGO_EYEBROW)
            .intro(brand::LOGO_INTRO)
            .lines(ctx);

        lines.extend(
            SectionHeading::section(brand::LOCKUPS_TITLE)
                .intro(brand::LOCKUPS_TEXT)
                .lines(ctx),
        );
        lines.extend(
            TextBlock::new(
                format!("Usage Note: {}", brand::LOCKUPS_USAGE_NOTE),
                ctx.style("label"),
            )
            .indent(2)
            .lines(ctx),
        );
        lines.push(blank());
        lines.extend(Self::lockups(ctx));

        lines.extend(
            SectionHeading::section(brand::CLEAR_SPACE_TITLE)
                .intro(brand::CLEAR_SPACE_TEXT)
                .lines(ctx),
        );
        lines.extend(Self::clear_space(ctx));

        lines.extend(
            SectionHeading::section(brand::MINIMUM_SIZE_TITLE)
                .intro(brand::MINIMUM_SIZE_TEXT)
                .lines(ctx),
        );
        lines.extend(Self::minimum_sizes(ctx));
        lines
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
    fn test_logo_content() {
        let styles = Styles::default();
        let text = plain(&LogoPanel.lines(&ctx(&styles, 100))).join("\n");
        for needle in [
            "SECTION 02",
            "Logo System",
            "Logo Lockups",
            "Usage Note:",
            "01. PRIMARY HORIZONTAL",
            "02. SECONDARY HORIZONTAL",
            "Clear Space",
            "x = height of 'K'",
            "Minimum Size",
            "DIGITAL",
            "30mm width minimum",
        ] {
            assert!(text.contains(needle), "missing {needle}");
        }
    }

    #[test]
    fn test_clear_space_diagram() {
        let styles = Styles::default();
        let lines = plain(&LogoPanel::clear_space(&ctx(&styles, 30)));
        let trimmed: Vec<&str> = lines.iter().map(|l| l.trim()).collect();
        assert_eq!(trimmed[0], "x");
        assert_eq!(trimmed[2], "x │  ❖ KALAVYA.CO  │ x");
        assert_eq!(trimmed[4], "x");
        assert_eq!(trimmed[6], "x = height of 'K'");
    }

    #[test]
    fn test_missing_logo_files_are_flagged() {
        let styles = Styles::default();
        let text = plain(&LogoPanel.lines(&ctx(&styles, 100))).join("\n");
        assert!(text.contains("broken image"));
    }
}
