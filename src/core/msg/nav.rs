use serde::{Deserialize, Serialize};

use crate::core::state::Section;

/// Messages for the navigation shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavMsg {
    /// Selection from the inline navigation
    SelectSection(Section),
    /// Selection from the expanded menu; also closes it
    SelectFromMenu(Section),
    ToggleMenu,
    CloseMenu,
    NextSection,
    PrevSection,
}
