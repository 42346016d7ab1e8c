use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::{
    core::{
        msg::{nav::NavMsg, system::SystemMsg, view::ViewMsg, Msg},
        raw_msg::RawMsg,
        state::{AppState, Section},
        update::select_msg,
    },
    presentation::{
        config::keybindings::Action,
        layout::{self, NavTarget},
    },
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on what is on screen
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Mouse(mouse) => translate_mouse_event(mouse, state),

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    match state.config.config.keybindings.action_for(key) {
        Some(action) => translate_action_to_msg(action, state),
        None => vec![],
    }
}

fn translate_action_to_msg(action: Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],

        Action::Home => vec![select_msg(state, Section::Strategy)],
        Action::SelectStrategy
        | Action::SelectLogo
        | Action::SelectTypography
        | Action::SelectMockups => action
            .section()
            .map(|section| vec![select_msg(state, section)])
            .unwrap_or_default(),

        // An open menu collapses on any keyboard selection
        Action::NextSection if state.is_menu_visible() => {
            vec![select_msg(state, state.active_section().next())]
        }
        Action::PrevSection if state.is_menu_visible() => {
            vec![select_msg(state, state.active_section().prev())]
        }
        Action::NextSection => vec![Msg::Nav(NavMsg::NextSection)],
        Action::PrevSection => vec![Msg::Nav(NavMsg::PrevSection)],

        // The toggle only exists on narrow viewports
        Action::ToggleMenu if state.is_narrow() => vec![Msg::Nav(NavMsg::ToggleMenu)],
        Action::ToggleMenu => vec![],
        Action::CloseMenu if state.nav.menu_expanded => vec![Msg::Nav(NavMsg::CloseMenu)],
        Action::CloseMenu => vec![],

        Action::ScrollUp => vec![Msg::View(ViewMsg::ScrollUp)],
        Action::ScrollDown => vec![Msg::View(ViewMsg::ScrollDown)],
        Action::PageUp => vec![Msg::View(ViewMsg::PageUp)],
        Action::PageDown => vec![Msg::View(ViewMsg::PageDown)],
        Action::ScrollToTop => vec![Msg::View(ViewMsg::ScrollToTop)],
        Action::ScrollToBottom => vec![Msg::View(ViewMsg::ScrollToBottom)],

        Action::DownloadAssets => download_assets(state),
    }
}

/// Mouse input: left clicks on navigation, wheel scrolls the panel
fn translate_mouse_event(mouse: MouseEvent, state: &AppState) -> Vec<Msg> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let (width, height) = state.system.viewport;
            let area = Rect::new(0, 0, width, height);
            let target = layout::hit_test(
                area,
                state.is_narrow(),
                state.is_menu_visible(),
                mouse.column,
                mouse.row,
            );
            match target {
                Some(target) => translate_nav_target(target, state),
                None => vec![],
            }
        }
        MouseEventKind::ScrollUp => vec![Msg::View(ViewMsg::ScrollUp)],
        MouseEventKind::ScrollDown => vec![Msg::View(ViewMsg::ScrollDown)],
        _ => vec![],
    }
}

fn translate_nav_target(target: NavTarget, state: &AppState) -> Vec<Msg> {
    match target {
        NavTarget::Logo => vec![Msg::Nav(NavMsg::SelectSection(Section::Strategy))],
        NavTarget::Section(section) => vec![Msg::Nav(NavMsg::SelectSection(section))],
        NavTarget::MenuToggle => vec![Msg::Nav(NavMsg::ToggleMenu)],
        NavTarget::MenuItem(section) => vec![Msg::Nav(NavMsg::SelectFromMenu(section))],
        NavTarget::Download => download_assets(state),
    }
}

fn download_assets(state: &AppState) -> Vec<Msg> {
    let dir = state.config.config.assets_dir();
    vec![Msg::System(SystemMsg::UpdateStatusMessage(format!(
        "Brand assets are in {}",
        dir.display()
    )))]
}
