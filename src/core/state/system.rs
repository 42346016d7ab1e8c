use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
};

/// System-related state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    /// Terminal size in columns and rows
    pub viewport: (u16, u16),
    pub status_message: Option<String>,
}

impl Default for SystemState {
    fn default() -> Self {
        Self {
            should_quit: false,
            should_suspend: false,
            viewport: (80, 24),
            status_message: None,
        }
    }
}

impl SystemState {
    pub fn width(&self) -> u16 {
        self.viewport.0
    }

    pub fn height(&self) -> u16 {
        self.viewport.1
    }

    /// Narrow viewports swap the inline navigation for a toggled menu.
    pub fn is_narrow(&self, breakpoint: u16) -> bool {
        self.width() < breakpoint
    }

    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            // System control
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![Cmd::RequestRender]
            }

            SystemMsg::Resize(width, height) => {
                self.viewport = (width, height);
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }

            // Status management
            SystemMsg::UpdateStatusMessage(message) => {
                self.status_message = Some(message.replace('\n', " "));
                vec![Cmd::RequestRender]
            }

            SystemMsg::ClearStatusMessage => {
                if self.status_message.take().is_some() {
                    vec![Cmd::RequestRender]
                } else {
                    vec![]
                }
            }

            SystemMsg::ShowError(error) => {
                self.status_message = Some(format!("Error: {error}"));
                vec![
                    Cmd::LogError { message: error },
                    Cmd::RequestRender,
                ]
            }
        }
    }
}
