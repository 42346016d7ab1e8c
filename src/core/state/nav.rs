use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::core::{cmd::Cmd, msg::nav::NavMsg};

/// The four panels of the brand guide
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Strategy,
    Logo,
    Typography,
    Mockups,
}

impl Section {
    /// Navigation order
    pub const ALL: [Section; 4] = [
        Section::Strategy,
        Section::Logo,
        Section::Typography,
        Section::Mockups,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Strategy => "Strategy",
            Section::Logo => "Logo System",
            Section::Typography => "Typography & Imagery",
            Section::Mockups => "Mockups",
        }
    }

    /// 1-based position in the navigation.
    pub fn number(&self) -> usize {
        self.index() + 1
    }

    pub fn index(&self) -> usize {
        match self {
            Section::Strategy => 0,
            Section::Logo => 1,
            Section::Typography => 2,
            Section::Mockups => 3,
        }
    }

    pub fn next(&self) -> Section {
        Section::ALL[(self.index() + 1) % Section::ALL.len()]
    }

    pub fn prev(&self) -> Section {
        Section::ALL[(self.index() + Section::ALL.len() - 1) % Section::ALL.len()]
    }
}

/// Navigation shell state: which panel is shown and whether the
/// narrow-viewport menu is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    pub active_section: Section,
    pub menu_expanded: bool,
}

impl NavState {
    pub fn new(active_section: Section) -> Self {
        Self {
            active_section,
            menu_expanded: false,
        }
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active_section == section
    }

    pub fn select(&mut self, section: Section) {
        self.active_section = section;
    }

    /// Selection made from the expanded menu also closes it.
    pub fn select_from_menu(&mut self, section: Section) {
        self.active_section = section;
        self.menu_expanded = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_expanded = !self.menu_expanded;
    }

    /// Navigation-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: NavMsg) -> Vec<Cmd> {
        let before = *self;
        match msg {
            NavMsg::SelectSection(section) => self.select(section),
            NavMsg::SelectFromMenu(section) => self.select_from_menu(section),
            NavMsg::ToggleMenu => self.toggle_menu(),
            NavMsg::CloseMenu => self.menu_expanded = false,
            NavMsg::NextSection => self.select(self.active_section.next()),
            NavMsg::PrevSection => self.select(self.active_section.prev()),
        }

        if *self == before {
            return vec![];
        }

        let mut cmds = vec![];
        if self.active_section != before.active_section {
            cmds.push(Cmd::LogInfo {
                message: format!(
                    "section changed: {} -> {}",
                    before.active_section, self.active_section
                ),
            });
        }
        cmds.push(Cmd::RequestRender);
        cmds
    }
}
