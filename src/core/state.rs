pub mod nav;
pub mod system;
pub mod view;

use crate::infrastructure::config::Config;

pub use nav::{NavState, Section};
pub use system::SystemState;
pub use view::{ScrollBounds, ViewState};

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub nav: NavState,
    pub view: ViewState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState with the given config, starting on the default section
    pub fn new_with_config(config: Config) -> Self {
        Self {
            config: ConfigState { config },
            ..Default::default()
        }
    }

    /// Start on `section` instead of the default
    pub fn with_section(mut self, section: Section) -> Self {
        self.nav = NavState::new(section);
        self
    }

    pub fn with_viewport(mut self, width: u16, height: u16) -> Self {
        self.system.viewport = (width, height);
        self
    }

    pub fn active_section(&self) -> Section {
        self.nav.active_section
    }

    pub fn is_narrow(&self) -> bool {
        self.system
            .is_narrow(self.config.config.config.narrow_breakpoint)
    }

    /// The collapsible menu is only on screen for narrow viewports.
    pub fn is_menu_visible(&self) -> bool {
        self.is_narrow() && self.nav.menu_expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();

        assert_eq!(state.active_section(), Section::Strategy);
        assert!(!state.nav.menu_expanded);
        assert_eq!(state.view.scroll, 0);
        assert!(!state.system.should_quit);
    }

    #[test]
    fn test_with_section() {
        let state = AppState::default().with_section(Section::Mockups);
        assert_eq!(state.active_section(), Section::Mockups);
        assert!(!state.nav.menu_expanded);
    }

    #[test]
    fn test_menu_visible_only_when_narrow() {
        let mut state = AppState::default().with_viewport(60, 30);
        state.nav.menu_expanded = true;
        assert!(state.is_menu_visible());

        let state = state.with_viewport(160, 30);
        assert!(state.nav.menu_expanded);
        assert!(!state.is_menu_visible());
    }
}
