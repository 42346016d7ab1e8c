use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::core::cmd::{Cmd, TuiCommand};

/// Command executor that bridges Elm commands to the host runner
#[derive(Clone, Default)]
pub struct CmdExecutor {
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    render_req_sender: Option<mpsc::UnboundedSender<()>>,
}

impl CmdExecutor {
    pub fn new(
        tui_sender: mpsc::UnboundedSender<TuiCommand>,
        render_req_sender: mpsc::UnboundedSender<()>,
    ) -> Self {
        Self {
            tui_sender: Some(tui_sender),
            render_req_sender: Some(render_req_sender),
        }
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Inject render request sender for AppRunner-orchestrated rendering.
    pub fn set_render_request_sender(&mut self, sender: mpsc::UnboundedSender<()>) {
        self.render_req_sender = Some(sender);
    }

    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::RequestRender => {
                if let Some(tx) = &self.render_req_sender {
                    tx.send(())?;
                } else {
                    log::debug!("CmdExecutor: render sender not configured; dropping RequestRender");
                }
            }

            Cmd::Tui(tui_cmd) => {
                if let Some(tx) = &self.tui_sender {
                    tx.send(tui_cmd.clone())?;
                } else {
                    log::warn!("CmdExecutor: TUI sender not configured; dropping {tui_cmd:?}");
                }
            }

            Cmd::LogError { message } => {
                log::error!("{message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("{message}");
            }
        }

        Ok(())
    }

    /// Execute multiple commands, highest priority first
    pub fn execute_commands(&self, commands: &[Cmd]) -> Vec<String> {
        let mut ordered: Vec<&Cmd> = commands.iter().collect();
        ordered.sort_by_key(|cmd| cmd.priority());

        ordered
            .into_iter()
            .map(|cmd| match self.execute_command(cmd) {
                Ok(()) => format!("✓ Executed: {}", cmd.name()),
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {e}", cmd.name());
                    log::error!("{error_msg}");
                    error_msg
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc;

    use super::*;

    fn create_test_executor() -> (
        CmdExecutor,
        mpsc::UnboundedReceiver<TuiCommand>,
        mpsc::UnboundedReceiver<()>,
    ) {
        let (tui_tx, tui_rx) = mpsc::unbounded_channel();
        let (render_tx, render_rx) = mpsc::unbounded_channel();
        (CmdExecutor::new(tui_tx, render_tx), tui_rx, render_rx)
    }

    #[test]
    fn test_execute_request_render() -> Result<()> {
        let (executor, _tui_rx, mut render_rx) = create_test_executor();
        executor.execute_command(&Cmd::RequestRender)?;
        assert!(render_rx.try_recv().is_ok());
        Ok(())
    }

    #[test]
    fn test_execute_resize() -> Result<()> {
        let (executor, mut tui_rx, _render_rx) = create_test_executor();
        executor.execute_command(&Cmd::Tui(TuiCommand::Resize {
            width: 100,
            height: 50,
        }))?;
        assert_eq!(
            tui_rx.try_recv().ok(),
            Some(TuiCommand::Resize {
                width: 100,
                height: 50
            })
        );
        Ok(())
    }

    #[test]
    fn test_execute_without_senders_is_noop() -> Result<()> {
        let executor = CmdExecutor::default();
        executor.execute_command(&Cmd::RequestRender)?;
        executor.execute_command(&Cmd::Tui(TuiCommand::Resize {
            width: 1,
            height: 1,
        }))?;
        Ok(())
    }

    #[test]
    fn test_execute_commands_in_priority_order() {
        let (executor, mut tui_rx, mut render_rx) = create_test_executor();
        let log = executor.execute_commands(&[
            Cmd::LogInfo {
                message: "section changed: strategy -> logo".to_string(),
            },
            Cmd::RequestRender,
            Cmd::Tui(TuiCommand::Resize {
                width: 10,
                height: 10,
            }),
        ]);
        assert_eq!(
            log,
            vec![
                "✓ Executed: RequestRender".to_string(),
                "✓ Executed: Tui(Resize)".to_string(),
                "✓ Executed: LogInfo".to_string(),
            ]
        );
        assert!(render_rx.try_recv().is_ok());
        assert!(tui_rx.try_recv().is_ok());
    }

    #[test]
    fn test_execute_commands_reports_failures() {
        let (executor, tui_rx, render_rx) = create_test_executor();
        drop(tui_rx);
        drop(render_rx);

        let log = executor.execute_commands(&[
            Cmd::LogInfo {
                message: "hello".to_string(),
            },
            Cmd::RequestRender,
        ]);
        assert_eq!(log.len(), 2);
        // Render runs first by priority and fails on the closed channel
        assert!(log[0].starts_with("✗ Failed to execute RequestRender"));
        assert_eq!(log[1], "✓ Executed: LogInfo");
    }
}
