//! Status bar component
//!
//! One line at the bottom of the screen: the status message when there is
//! one, key hints otherwise, and the active section on the right.

use ratatui::{prelude::*, widgets::*};
use unicode_width::UnicodeWidthStr;

use crate::{
    core::state::{AppState, Section},
    domain::text,
    presentation::config::{Action, KeyBindings},
};

/// Status bar component
///
/// Stateless; everything comes from `AppState`.
#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    /// Key hints built from the configured bindings
    pub fn hints(&self, state: &AppState) -> String {
        let keybindings = &state.config.config.keybindings;
        let mut hints = vec![];
        if let Some(range) = section_range(keybindings) {
            hints.push(format!("{range} sections"));
        }
        let mut actions = vec![
            (Action::NextSection, "next"),
            (Action::ScrollDown, "scroll"),
        ];
        if state.is_narrow() {
            actions.push((Action::ToggleMenu, "menu"));
        }
        actions.extend([(Action::DownloadAssets, "assets"), (Action::Quit, "quit")]);
        for (action, label) in actions {
            if let Some(key) = keybindings.hint_for(action) {
                hints.push(format!("{key} {label}"));
            }
        }
        hints.join(" · ")
    }

    /// Right-hand side, e.g. `2/4 LOGO SYSTEM`
    pub fn position(&self, state: &AppState) -> String {
        let section = state.active_section();
        format!(
            "{}/{} {}",
            section.number(),
            Section::ALL.len(),
            section.label().to_uppercase()
        )
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let style = state.config.config.styles.style("status");
        let width = usize::from(area.width);

        let position = format!(" {} ", self.position(state));
        let left = match &state.system.status_message {
            Some(message) => message.clone(),
            None => self.hints(state),
        };
        let room = width.saturating_sub(position.width() + 1);
        let left = format!(" {}", text::truncate_text(&left, room));
        let gap = width.saturating_sub(left.width() + position.width());

        let line = if left.width() + position.width() <= width {
            Line::from(vec![
                Span::raw(left),
                Span::raw(" ".repeat(gap)),
                Span::styled(position, style.add_modifier(Modifier::BOLD)),
            ])
        } else {
            Line::raw(left)
        };

        frame.render_widget(Clear, area);
        frame.render_widget(Paragraph::new(line).style(style), area);
    }
}

/// `1-4` when the four selection actions are bound to consecutive digits.
fn section_range(keybindings: &KeyBindings) -> Option<String> {
    let first = keybindings.hint_for(Action::SelectStrategy)?;
    let last = keybindings.hint_for(Action::SelectMockups)?;
    Some(format!("{first}-{last}"))
}
