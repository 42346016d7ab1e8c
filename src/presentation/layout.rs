//! Screen geometry shared by rendering and mouse hit-testing.
//!
//! Components draw into the rectangles computed here and the translator maps
//! clicks back through the same functions, so both always agree.

use ratatui::layout::{Position, Rect};
use unicode_width::UnicodeWidthStr;

use crate::core::state::Section;

/// Bordered navigation bar
pub const NAV_HEIGHT: u16 = 3;
pub const STATUS_HEIGHT: u16 = 1;
/// Section entries followed by the download entry
pub const MENU_ITEMS: u16 = Section::ALL.len() as u16 + 1;
pub const MENU_HEIGHT: u16 = MENU_ITEMS + 2;

pub const LOGO_TEXT: &str = "❖ KALAVYA.CO";
pub const DOWNLOAD_TEXT: &str = "↓ DOWNLOAD ASSETS";
pub const MENU_OPEN_TEXT: &str = "☰ MENU";
pub const MENU_CLOSE_TEXT: &str = "✕ CLOSE";
pub const NAV_GAP: u16 = 3;

/// Something in the navigation chrome that reacts to a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Logo,
    Section(Section),
    MenuToggle,
    MenuItem(Section),
    Download,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    pub nav: Rect,
    /// Present only while the collapsible menu is on screen
    pub menu: Option<Rect>,
    pub body: Rect,
    pub status: Rect,
}

/// Upper-cased navigation label for `section`
pub fn nav_label(section: Section) -> String {
    section.label().to_uppercase()
}

fn text_width(s: &str) -> u16 {
    u16::try_from(s.width()).unwrap_or(u16::MAX)
}

/// Splits the frame into nav bar, optional menu, body and status line.
pub fn screen(area: Rect, menu_visible: bool) -> ScreenLayout {
    let nav_height = NAV_HEIGHT.min(area.height);
    let nav = Rect::new(area.x, area.y, area.width, nav_height);

    let status_height = STATUS_HEIGHT.min(area.height - nav_height);
    let status = Rect::new(
        area.x,
        area.bottom() - status_height,
        area.width,
        status_height,
    );

    let mut top = nav.bottom();
    let available = status.y.saturating_sub(top);
    let menu = if menu_visible && available > 0 {
        let rect = Rect::new(area.x, top, area.width, MENU_HEIGHT.min(available));
        top = rect.bottom();
        Some(rect)
    } else {
        None
    };

    let body = Rect::new(area.x, top, area.width, status.y.saturating_sub(top));

    ScreenLayout {
        nav,
        menu,
        body,
        status,
    }
}

/// Clickable regions of the nav bar.
///
/// Wide viewports get the inline section links and the download button;
/// narrow ones get the menu toggle instead.
pub fn nav_item_rects(area: Rect, narrow: bool, menu_visible: bool) -> Vec<(NavTarget, Rect)> {
    let nav = screen(area, menu_visible).nav;
    let mut targets = Vec::new();

    if nav.height < NAV_HEIGHT || nav.width < 4 {
        return targets;
    }
    let row = nav.y + 1;
    let left = nav.x + 2;
    let right = nav.right().saturating_sub(2);

    let logo = clipped(left, row, text_width(LOGO_TEXT), right);
    targets.push((NavTarget::Logo, logo));

    if narrow {
        let label = if menu_visible {
            MENU_CLOSE_TEXT
        } else {
            MENU_OPEN_TEXT
        };
        let width = text_width(label);
        let x = right.saturating_sub(width).max(logo.right());
        targets.push((NavTarget::MenuToggle, clipped(x, row, width, right)));
    } else {
        let download_width = text_width(DOWNLOAD_TEXT);
        let download_x = right.saturating_sub(download_width);
        let mut x = logo.right() + NAV_GAP + 1;
        for section in Section::ALL {
            let width = text_width(&nav_label(section));
            targets.push((
                NavTarget::Section(section),
                clipped(x, row, width, download_x),
            ));
            x = x.saturating_add(width + NAV_GAP);
        }
        targets.push((
            NavTarget::Download,
            clipped(download_x, row, download_width, right),
        ));
    }

    targets.retain(|(_, rect)| !rect.is_empty());
    targets
}

/// Rows of the expanded menu: one per section, then the download entry.
pub fn menu_item_rects(area: Rect) -> Vec<(NavTarget, Rect)> {
    let Some(menu) = screen(area, true).menu else {
        return vec![];
    };
    let inner_x = menu.x + 1;
    let inner_width = menu.width.saturating_sub(2);
    Section::ALL
        .into_iter()
        .map(NavTarget::MenuItem)
        .chain(std::iter::once(NavTarget::Download))
        .enumerate()
        .map(|(i, target)| (target, Rect::new(inner_x, menu.y + 1 + i as u16, inner_width, 1)))
        .filter(|(_, rect)| rect.y < menu.bottom().saturating_sub(1) && !rect.is_empty())
        .collect()
}

/// Every clickable region currently on screen.
pub fn nav_targets(area: Rect, narrow: bool, menu_visible: bool) -> Vec<(NavTarget, Rect)> {
    let mut targets = nav_item_rects(area, narrow, menu_visible);
    if menu_visible {
        targets.extend(menu_item_rects(area));
    }
    targets
}

/// Rect of width `width` starting at `x`, cut off at `limit`.
fn clipped(x: u16, y: u16, width: u16, limit: u16) -> Rect {
    let end = x.saturating_add(width).min(limit);
    Rect::new(x, y, end.saturating_sub(x), 1)
}

/// What, if anything, sits under the cell at (`column`, `row`).
pub fn hit_test(
    area: Rect,
    narrow: bool,
    menu_visible: bool,
    column: u16,
    row: u16,
) -> Option<NavTarget> {
    let position = Position::new(column, row);
    nav_targets(area, narrow, menu_visible)
        .into_iter()
        .find(|(_, rect)| rect.contains(position))
        .map(|(target, _)| target)
}
