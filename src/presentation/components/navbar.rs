//! Navigation bar and the collapsible menu
//!
//! Item positions come from `presentation::layout`, the same source the
//! translator hit-tests clicks against.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    presentation::layout::{
        self, NavTarget, DOWNLOAD_TEXT, LOGO_TEXT, MENU_CLOSE_TEXT, MENU_OPEN_TEXT,
    },
};

#[derive(Debug, Clone, Default)]
pub struct NavbarComponent;

impl NavbarComponent {
    pub fn new() -> Self {
        Self
    }

    /// Text and style key of a nav bar target
    fn item(state: &AppState, target: NavTarget) -> (String, &'static str) {
        match target {
            NavTarget::Logo => (LOGO_TEXT.to_string(), "brand"),
            NavTarget::Section(section) | NavTarget::MenuItem(section) => {
                let style = if state.nav.is_active(section) {
                    "nav.active"
                } else {
                    "nav.item"
                };
                let label = layout::nav_label(section);
                match target {
                    NavTarget::MenuItem(_) if state.nav.is_active(section) => {
                        (format!("▸ {label}"), style)
                    }
                    NavTarget::MenuItem(_) => (format!("  {label}"), style),
                    _ => (label, style),
                }
            }
            NavTarget::MenuToggle => {
                let label = if state.is_menu_visible() {
                    MENU_CLOSE_TEXT
                } else {
                    MENU_OPEN_TEXT
                };
                (label.to_string(), "nav.button")
            }
            NavTarget::Download => (DOWNLOAD_TEXT.to_string(), "nav.button"),
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame) {
        let area = frame.area();
        let styles = &state.config.config.styles;
        let menu_visible = state.is_menu_visible();
        let screen = layout::screen(area, menu_visible);
        let surface = styles.style("surface");

        frame.render_widget(
            Block::bordered()
                .borders(Borders::BOTTOM)
                .style(surface),
            screen.nav,
        );
        for (target, rect) in layout::nav_item_rects(area, state.is_narrow(), menu_visible) {
            let (text, style) = Self::item(state, target);
            frame.render_widget(Paragraph::new(text).style(styles.style(style)), rect);
        }

        if let Some(menu) = screen.menu {
            frame.render_widget(Clear, menu);
            frame.render_widget(Block::bordered().style(surface), menu);
            for (target, rect) in layout::menu_item_rects(area) {
                let (text, style) = Self::item(state, target);
                frame.render_widget(Paragraph::new(text).style(styles.style(style)), rect);
            }
        }
    }
}
