use serde::{Deserialize, Serialize};

pub mod nav;
pub mod system;
pub mod view;

use nav::NavMsg;
use system::SystemMsg;
use view::ViewMsg;

/// Domain messages representing user intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Navigation operations (delegated to NavState)
    Nav(NavMsg),

    // Panel scrolling (delegated to ViewState)
    View(ViewMsg),
}
