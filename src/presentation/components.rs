//! Component collection and management
//!
//! Components are stateless renderers that receive `AppState` as a
//! parameter. `Components::render` is the single entry point used by the
//! runner.

use ratatui::prelude::*;

use crate::{core::state::AppState, presentation::layout};

pub mod footer;
pub mod navbar;
pub mod panels;
pub mod status_bar;
pub mod view_selector;

pub use navbar::NavbarComponent;
pub use status_bar::StatusBarComponent;
pub use view_selector::ViewSelectorComponent;

/// Collection of all components
pub struct Components {
    pub navbar: NavbarComponent,
    pub view_selector: ViewSelectorComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    pub fn new() -> Self {
        Self {
            navbar: NavbarComponent::new(),
            view_selector: ViewSelectorComponent::new(),
            status_bar: StatusBarComponent::new(),
        }
    }

    /// Render all components
    ///
    /// The body is drawn first so the menu overlays nothing it should not.
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let screen = layout::screen(frame.area(), state.is_menu_visible());
        self.view_selector.view(state, frame, screen.body);
        self.navbar.view(state, frame);
        self.status_bar.view(state, frame, screen.status);
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;
    use rstest::rstest;

    use super::*;
    use crate::{
        core::state::Section, domain::brand, infrastructure::config::Config,
        presentation::components::panels::panel_for,
    };

    fn render(state: &AppState) -> color_eyre::Result<Vec<String>> {
        let (width, height) = state.system.viewport;
        let mut terminal = Terminal::new(TestBackend::new(width, height))?;
        terminal.draw(|frame| Components::new().render(frame, state))?;
        let buffer = terminal.backend().buffer();
        Ok((0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect())
            .collect())
    }

    #[rstest]
    #[case(Section::Strategy)]
    #[case(Section::Logo)]
    #[case(Section::Typography)]
    #[case(Section::Mockups)]
    fn test_exactly_one_panel_visible(#[case] section: Section) -> color_eyre::Result<()> {
        let state = AppState::new_with_config(Config::embedded()?)
            .with_viewport(120, 40)
            .with_section(section);
        let screen = render(&state)?.join("\n");
        for other in Section::ALL {
            let title = panel_for(other).title();
            assert_eq!(screen.contains(title), other == section, "{title}");
        }
        Ok(())
    }

    #[test]
    fn test_status_line_is_last_row() -> color_eyre::Result<()> {
        let state = AppState::new_with_config(Config::embedded()?).with_viewport(120, 40);
        let rows = render(&state)?;
        assert!(rows[39].ends_with(" 1/4 STRATEGY "));
        Ok(())
    }

    #[test]
    fn test_menu_pushes_body_down() -> color_eyre::Result<()> {
        let mut state = AppState::new_with_config(Config::embedded()?)
            .with_viewport(60, 30)
            .with_section(Section::Mockups);
        let closed = render(&state)?;
        let title_row = |rows: &[String]| rows.iter().position(|r| r.contains(brand::MOCKUPS_TITLE));

        state.nav.menu_expanded = true;
        let open = render(&state)?;
        assert_eq!(
            title_row(&open),
            title_row(&closed).map(|row| row + usize::from(layout::MENU_HEIGHT))
        );
        Ok(())
    }
}
