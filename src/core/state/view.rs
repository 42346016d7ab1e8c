use crate::core::{cmd::Cmd, msg::view::ViewMsg};

/// Scroll position of the active panel body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub scroll: u16,
}

/// Scrollable extent of the active panel, measured by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollBounds {
    /// Largest valid `scroll` value
    pub max: u16,
    /// Rows visible at once
    pub page: u16,
}

impl ViewState {
    pub fn reset(&mut self) {
        self.scroll = 0;
    }

    /// Keep the offset valid after the panel or viewport changed.
    pub fn clamp(&mut self, bounds: ScrollBounds) {
        self.scroll = self.scroll.min(bounds.max);
    }

    pub fn update(&mut self, msg: ViewMsg, bounds: ScrollBounds) -> Vec<Cmd> {
        let before = self.scroll;
        let page = bounds.page.saturating_sub(1).max(1);
        self.scroll = match msg {
            ViewMsg::ScrollUp => self.scroll.saturating_sub(1),
            ViewMsg::ScrollDown => self.scroll.saturating_add(1),
            ViewMsg::PageUp => self.scroll.saturating_sub(page),
            ViewMsg::PageDown => self.scroll.saturating_add(page),
            ViewMsg::ScrollToTop => 0,
            ViewMsg::ScrollToBottom => bounds.max,
        }
        .min(bounds.max);

        if self.scroll == before {
            vec![]
        } else {
            vec![Cmd::RequestRender]
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const BOUNDS: ScrollBounds = ScrollBounds { max: 30, page: 10 };

    #[test]
    fn test_scroll_down_stops_at_max() {
        let mut view = ViewState { scroll: 29 };
        assert_eq!(view.update(ViewMsg::ScrollDown, BOUNDS), vec![Cmd::RequestRender]);
        assert_eq!(view.scroll, 30);
        assert!(view.update(ViewMsg::ScrollDown, BOUNDS).is_empty());
        assert_eq!(view.scroll, 30);
    }

    #[test]
    fn test_scroll_up_stops_at_zero() {
        let mut view = ViewState::default();
        assert!(view.update(ViewMsg::ScrollUp, BOUNDS).is_empty());
        assert_eq!(view.scroll, 0);
    }

    #[test]
    fn test_page_moves_by_page_minus_one() {
        let mut view = ViewState::default();
        view.update(ViewMsg::PageDown, BOUNDS);
        assert_eq!(view.scroll, 9);
        view.update(ViewMsg::PageDown, BOUNDS);
        view.update(ViewMsg::PageDown, BOUNDS);
        view.update(ViewMsg::PageDown, BOUNDS);
        assert_eq!(view.scroll, 30);
        view.update(ViewMsg::PageUp, BOUNDS);
        assert_eq!(view.scroll, 21);
    }

    #[test]
    fn test_top_and_bottom() {
        let mut view = ViewState { scroll: 12 };
        view.update(ViewMsg::ScrollToBottom, BOUNDS);
        assert_eq!(view.scroll, 30);
        view.update(ViewMsg::ScrollToTop, BOUNDS);
        assert_eq!(view.scroll, 0);
    }

    #[test]
    fn test_content_fits_viewport() {
        let mut view = ViewState::default();
        let bounds = ScrollBounds { max: 0, page: 40 };
        assert!(view.update(ViewMsg::ScrollDown, bounds).is_empty());
        assert!(view.update(ViewMsg::PageDown, bounds).is_empty());
        assert_eq!(view.scroll, 0);
    }

    #[test]
    fn test_clamp() {
        let mut view = ViewState { scroll: 50 };
        view.clamp(BOUNDS);
        assert_eq!(view.scroll, 30);
    }
}
