//! The four brand panels
//!
//! Each panel turns the static brand content into pre-wrapped lines for the
//! current width. Only the line count matters to scrolling, so nothing here
//! may vary with styles or asset availability.

use ratatui::text::Line;

use crate::{core::state::Section, presentation::widgets::ViewContext};

pub mod logo;
pub mod mockups;
pub mod strategy;
pub mod typography;

pub use logo::LogoPanel;
pub use mockups::MockupsPanel;
pub use strategy::StrategyPanel;
pub use typography::TypographyPanel;

pub trait Panel: Sync {
    /// Heading shown at the top of the panel
    fn title(&self) -> &'static str;
    fn lines(&self, ctx: &ViewContext<'_>) -> Vec<Line<'static>>;
}

/// The panel that renders `section`.
pub fn panel_for(section: Section) -> &'static dyn Panel {
    match section {
        Section::Strategy => &StrategyPanel,
        Section::Logo => &LogoPanel,
        Section::Typography => &TypographyPanel,
        Section::Mockups => &MockupsPanel,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        domain::brand,
        presentation::{
            config::Styles,
            widgets::test_support::{ctx, plain},
        },
    };

    #[test]
    fn test_panel_titles() {
        assert_eq!(panel_for(Section::Strategy).title(), brand::STRATEGY_TITLE);
        assert_eq!(panel_for(Section::Logo).title(), brand::LOGO_TITLE);
        assert_eq!(panel_for(Section::Typography).title(), brand::TYPOGRAPHY_TITLE);
        assert_eq!(panel_for(Section::Mockups).title(), brand::MOCKUPS_TITLE);
    }

    #[test]
    fn test_each_panel_shows_only_its_own_title() {
        let styles = Styles::default();
        for section in Section::ALL {
            let text = plain(&panel_for(section).lines(&ctx(&styles, 100))).join("\n");
            for other in Section::ALL {
                let title = panel_for(other).title();
                assert_eq!(
                    text.contains(title),
                    other == section,
                    "{title} in the {section} panel"
                );
            }
        }
    }

    #[test]
    fn test_panels_survive_tiny_widths() {
        let styles = Styles::default();
        for section in Section::ALL {
            for width in [0, 1, 3, 8] {
                panel_for(section).lines(&ctx(&styles, width));
            }
        }
    }
}
