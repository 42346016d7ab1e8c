//! Active panel renderer
//!
//! Picks the panel for the active section, appends the footer and draws the
//! result scrolled by `ViewState::scroll`.

use std::path::Path;

use ratatui::{prelude::*, widgets::*};

use super::{footer::Footer, panels::panel_for};
use crate::{
    core::{
        state::{AppState, Section},
        update::ContentMeasure,
    },
    presentation::{config::Styles, widgets::ViewContext},
};

/// Blank columns kept on each side of the panel
pub const H_PADDING: u16 = 2;
/// Panels stop growing past this width and are centered instead
pub const MAX_CONTENT_WIDTH: u16 = 110;

/// Width panels are wrapped to inside a body of `body_width` columns.
pub fn content_width(body_width: u16) -> u16 {
    body_width
        .saturating_sub(2 * H_PADDING)
        .min(MAX_CONTENT_WIDTH)
}

/// Every line of `section` followed by the footer.
pub fn content_lines(section: Section, ctx: &ViewContext<'_>) -> Vec<Line<'static>> {
    let mut lines = panel_for(section).lines(ctx);
    lines.extend(Footer.lines(ctx));
    lines
}

/// Exact panel heights, computed by laying the panel out.
///
/// Heights only depend on the width, so default styles and a dummy assets
/// directory give the same answer as the real render.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelMeasure;

impl ContentMeasure for PanelMeasure {
    fn content_height(&self, section: Section, width: u16) -> u16 {
        let styles = Styles::default();
        let ctx = ViewContext::new(content_width(width), &styles, Path::new(""));
        u16::try_from(content_lines(section, &ctx).len()).unwrap_or(u16::MAX)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ViewSelectorComponent;

impl ViewSelectorComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let config = &state.config.config;
        let base = config.styles.style("base");
        frame.render_widget(Block::default().style(base), area);

        let width = content_width(area.width);
        let content = Rect {
            x: area.x + (area.width - width) / 2,
            width,
            ..area
        };

        let assets_dir = config.assets_dir();
        let ctx = ViewContext::new(width, &config.styles, &assets_dir);
        let lines = content_lines(state.active_section(), &ctx);
        let paragraph = Paragraph::new(lines)
            .style(base)
            .scroll((state.view.scroll, 0));
        frame.render_widget(paragraph, content);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;
    use rstest::rstest;

    use super::*;
    use crate::{core::state::ViewState, domain::brand};

    fn render(state: &AppState, width: u16, height: u16) -> color_eyre::Result<Vec<String>> {
        let mut terminal = Terminal::new(TestBackend::new(width, height))?;
        terminal.draw(|frame| ViewSelectorComponent::new().view(state, frame, frame.area()))?;
        let buffer = terminal.backend().buffer();
        Ok((0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect())
            .collect())
    }

    #[rstest]
    #[case(0, 0)]
    #[case(10, 6)]
    #[case(3, 0)]
    #[case(200, 110)]
    fn test_content_width(#[case] body: u16, #[case] expected: u16) {
        assert_eq!(content_width(body), expected);
    }

    #[rstest]
    #[case(Section::Strategy)]
    #[case(Section::Logo)]
    #[case(Section::Typography)]
    #[case(Section::Mockups)]
    fn test_measure_matches_rendered_lines(#[case] section: Section) {
        let styles = Styles::default();
        for width in [30, 60, 100, 160] {
            let ctx = ViewContext::new(content_width(width), &styles, Path::new("public"));
            let rendered = content_lines(section, &ctx).len();
            assert_eq!(
                usize::from(PanelMeasure.content_height(section, width)),
                rendered
            );
        }
    }

    #[test]
    fn test_footer_follows_every_panel() {
        let styles = Styles::default();
        let ctx = ViewContext::new(80, &styles, Path::new(""));
        for section in Section::ALL {
            let lines = content_lines(section, &ctx);
            let last_rows: String = lines
                .iter()
                .rev()
                .take(4)
                .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
                .collect();
            assert!(last_rows.contains(brand::FOOTER_UPDATED));
        }
    }

    #[test]
    fn test_view_shows_active_panel() -> color_eyre::Result<()> {
        let state = AppState::default().with_section(Section::Logo);
        let rows = render(&state, 80, 12)?;
        assert!(rows.iter().any(|r| r.contains("Logo System")));
        assert!(!rows.iter().any(|r| r.contains("Brand Strategy")));
        // padded on the left
        assert!(rows.iter().all(|r| r.starts_with("  ")));
        Ok(())
    }

    #[test]
    fn test_view_applies_scroll() -> color_eyre::Result<()> {
        let mut state = AppState::default().with_section(Section::Logo);
        let top = render(&state, 80, 12)?;
        state.view = ViewState { scroll: 1 };
        let scrolled = render(&state, 80, 12)?;
        assert_eq!(scrolled[0], top[1]);
        Ok(())
    }
}
