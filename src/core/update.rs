use ratatui::layout::Rect;

use crate::{
    core::cmd::Cmd,
    core::msg::{nav::NavMsg, system::SystemMsg, Msg},
    core::state::{AppState, ScrollBounds, Section},
    presentation::{components::view_selector::PanelMeasure, layout},
};

/// Measures how many rows a panel needs at a given width.
///
/// The update function only needs the height to keep scrolling in range; the
/// concrete implementation lives with the renderer.
pub trait ContentMeasure: Send + Sync {
    fn content_height(&self, section: Section, width: u16) -> u16;
}

/// Dependencies injected into update
#[derive(Clone, Copy)]
pub struct UpdateContext<'a> {
    pub measure: &'a dyn ContentMeasure,
}

static PANEL_MEASURE: PanelMeasure = PanelMeasure;

/// Measures with the renderer the view draws with, so scroll bounds match
/// the panel on screen.
impl Default for UpdateContext<'static> {
    fn default() -> Self {
        Self {
            measure: &PANEL_MEASURE,
        }
    }
}

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, state: AppState) -> (AppState, Vec<Cmd>) {
    update_with_context(msg, state, &UpdateContext::default())
}

pub fn update_with_context(
    msg: Msg,
    mut state: AppState,
    ctx: &UpdateContext<'_>,
) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let resized = matches!(system_msg, SystemMsg::Resize(..));
            let commands = state.system.update(system_msg);
            if resized {
                let bounds = scroll_bounds(&state, ctx);
                state.view.clamp(bounds);
            }
            (state, commands)
        }

        // Navigation messages (delegated to NavState)
        Msg::Nav(nav_msg) => {
            let before = state.nav;
            let commands = state.nav.update(nav_msg);
            if state.nav.active_section != before.active_section {
                state.view.reset();
            } else if state.nav != before {
                // menu opened or closed; the body got shorter or taller
                let bounds = scroll_bounds(&state, ctx);
                state.view.clamp(bounds);
            }
            (state, commands)
        }

        // Scrolling of the active panel (delegated to ViewState)
        Msg::View(view_msg) => {
            let bounds = scroll_bounds(&state, ctx);
            let commands = state.view.update(view_msg, bounds);
            (state, commands)
        }
    }
}

/// Scroll range of the active panel in the current viewport.
pub fn scroll_bounds(state: &AppState, ctx: &UpdateContext<'_>) -> ScrollBounds {
    let (width, height) = state.system.viewport;
    let area = Rect::new(0, 0, width, height);
    let body = layout::screen(area, state.is_menu_visible()).body;
    let content = ctx
        .measure
        .content_height(state.active_section(), body.width);
    ScrollBounds {
        max: content.saturating_sub(body.height),
        page: body.height,
    }
}

/// Convenience for the common "select from wherever the user is" path.
pub fn select_msg(state: &AppState, section: Section) -> Msg {
    if state.is_menu_visible() {
        Msg::Nav(NavMsg::SelectFromMenu(section))
    } else {
        Msg::Nav(NavMsg::SelectSection(section))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::core::msg::view::ViewMsg;

    /// Same height for every panel and width.
    struct FixedMeasure(u16);

    impl ContentMeasure for FixedMeasure {
        fn content_height(&self, _section: Section, _width: u16) -> u16 {
            self.0
        }
    }

    fn run(msgs: Vec<Msg>, state: AppState, measure: &dyn ContentMeasure) -> AppState {
        let ctx = UpdateContext { measure };
        msgs.into_iter()
            .fold(state, |state, msg| update_with_context(msg, state, &ctx).0)
    }

    fn narrow_state() -> AppState {
        AppState::default().with_viewport(60, 30)
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::default();
        assert_eq!(state.active_section(), Section::Strategy);
        assert!(!state.nav.menu_expanded);
    }

    #[rstest]
    #[case(Section::Strategy)]
    #[case(Section::Logo)]
    #[case(Section::Typography)]
    #[case(Section::Mockups)]
    fn test_select_section(#[case] section: Section) {
        let (state, _) = update(
            Msg::Nav(NavMsg::SelectSection(section)),
            AppState::default(),
        );
        assert_eq!(state.active_section(), section);
    }

    #[test]
    fn test_navigation_scenario() {
        let state = narrow_state();
        assert_eq!(state.active_section(), Section::Strategy);

        let (state, _) = update(Msg::Nav(NavMsg::SelectSection(Section::Logo)), state);
        assert_eq!(state.active_section(), Section::Logo);

        let (state, _) = update(Msg::Nav(NavMsg::ToggleMenu), state);
        assert!(state.nav.menu_expanded);
        assert!(state.is_menu_visible());

        let msg = select_msg(&state, Section::Mockups);
        assert_eq!(msg, Msg::Nav(NavMsg::SelectFromMenu(Section::Mockups)));
        let (state, _) = update(msg, state);
        assert_eq!(state.active_section(), Section::Mockups);
        assert!(!state.nav.menu_expanded);
    }

    #[test]
    fn test_select_msg_without_visible_menu() {
        let mut state = AppState::default().with_viewport(160, 40);
        state.nav.menu_expanded = true;
        assert_eq!(
            select_msg(&state, Section::Logo),
            Msg::Nav(NavMsg::SelectSection(Section::Logo))
        );
    }

    #[test]
    fn test_section_change_resets_scroll() {
        let measure = FixedMeasure(100);
        let state = run(
            vec![
                Msg::View(ViewMsg::ScrollDown),
                Msg::View(ViewMsg::ScrollDown),
            ],
            AppState::default(),
            &measure,
        );
        assert_eq!(state.view.scroll, 2);

        let state = run(
            vec![Msg::Nav(NavMsg::NextSection)],
            state,
            &measure,
        );
        assert_eq!(state.active_section(), Section::Logo);
        assert_eq!(state.view.scroll, 0);
    }

    #[test]
    fn test_reselecting_same_section_keeps_scroll() {
        let measure = FixedMeasure(100);
        let state = run(
            vec![
                Msg::View(ViewMsg::ScrollDown),
                Msg::Nav(NavMsg::SelectSection(Section::Strategy)),
            ],
            AppState::default(),
            &measure,
        );
        assert_eq!(state.view.scroll, 1);
    }

    #[test]
    fn test_scroll_bounds_follow_viewport() {
        let measure = FixedMeasure(100);
        let ctx = UpdateContext { measure: &measure };
        // 24 rows: 3 nav + 1 status leaves 20 for the body
        let bounds = scroll_bounds(&AppState::default(), &ctx);
        assert_eq!(bounds, ScrollBounds { max: 80, page: 20 });

        let mut state = narrow_state();
        state.nav.menu_expanded = true;
        let bounds = scroll_bounds(&state, &ctx);
        assert_eq!(
            bounds,
            ScrollBounds {
                max: 100 - (26 - layout::MENU_HEIGHT),
                page: 26 - layout::MENU_HEIGHT
            }
        );
    }

    #[test]
    fn test_scroll_to_bottom_then_resize_clamps() {
        let measure = FixedMeasure(100);
        let state = run(
            vec![Msg::View(ViewMsg::ScrollToBottom)],
            AppState::default(),
            &measure,
        );
        assert_eq!(state.view.scroll, 80);

        let state = run(
            vec![Msg::System(SystemMsg::Resize(80, 64))],
            state,
            &measure,
        );
        assert_eq!(state.view.scroll, 40);
    }

    #[test]
    fn test_short_content_does_not_scroll() {
        let measure = FixedMeasure(5);
        let state = run(
            vec![
                Msg::View(ViewMsg::PageDown),
                Msg::View(ViewMsg::ScrollToBottom),
            ],
            AppState::default(),
            &measure,
        );
        assert_eq!(state.view.scroll, 0);
    }

    #[test]
    fn test_quit() {
        let (state, cmds) = update(Msg::System(SystemMsg::Quit), AppState::default());
        assert!(state.system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_panels_scroll_with_real_measure() {
        let (state, cmds) = update(Msg::View(ViewMsg::ScrollDown), AppState::default());
        assert_eq!(state.view.scroll, 1);
        assert_eq!(cmds, vec![Cmd::RequestRender]);
    }
}
