use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::layout::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{cmd::TuiCommand, raw_msg::RawMsg, state::AppState},
    infrastructure::{
        config::Config,
        tui::{event_source::EventSource, Event, TuiLike},
    },
    integration::{coalescer::Coalescer, runtime::Runtime},
    presentation::components::Components,
};

/// Drives the Elm runtime from terminal events and draws the result.
///
/// One event is handled per cycle. Render requests queued during a cycle are
/// coalesced into at most one frame.
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn TuiLike + Send>>,
    event_source: EventSource,
    components: Components,
    render_req_rx: mpsc::UnboundedReceiver<()>,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    last_size: Option<(u16, u16)>,
}

impl AppRunner {
    pub fn new(initial_state: AppState, tui: Arc<Mutex<dyn TuiLike + Send>>) -> Self {
        let (render_req_tx, render_req_rx) = mpsc::unbounded_channel();
        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();

        let mut runtime = Runtime::new(initial_state);
        runtime.add_render_request_sender(render_req_tx);
        runtime.add_tui_sender(tui_cmd_tx);

        Self {
            runtime,
            event_source: EventSource::real(Arc::clone(&tui)),
            tui,
            components: Components::new(),
            render_req_rx,
            tui_cmd_rx,
            last_size: None,
        }
    }

    pub fn new_with_config(config: Config, tui: Arc<Mutex<dyn TuiLike + Send>>) -> Self {
        Self::new(AppState::new_with_config(config), tui)
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Pull events from somewhere other than the terminal
    pub fn set_event_source(&mut self, event_source: EventSource) {
        self.event_source = event_source;
    }

    /// Run until quit is requested or the event stream ends.
    ///
    /// The terminal is restored even when the loop fails.
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;

        let result = self.event_loop().await;

        let exited = self.tui.lock().await.exit();
        result.and(exited)
    }

    async fn event_loop(&mut self) -> Result<()> {
        self.sync_viewport().await?;
        while self.run_one_cycle().await? {}
        Ok(())
    }

    /// Seed the viewport with the real terminal size; the first cycle
    /// applies it.
    async fn sync_viewport(&mut self) -> Result<()> {
        let size = self.tui.lock().await.size()?;
        log::info!("terminal size {}x{}", size.width, size.height);
        self.runtime.send_raw_msg(RawMsg::Resize(size.width, size.height));
        Ok(())
    }

    /// Handle one event. Returns whether the loop should keep going.
    pub async fn run_one_cycle(&mut self) -> Result<bool> {
        let Some(event) = self.event_source.next().await else {
            log::info!("event stream ended");
            return Ok(false);
        };

        let mut force_render = false;
        match event {
            Event::Init => force_render = true,
            Event::Closed => return Ok(false),
            Event::Quit => self.runtime.send_raw_msg(RawMsg::Quit),
            Event::Error => self
                .runtime
                .send_raw_msg(RawMsg::Error("failed to read terminal event".to_string())),
            Event::Tick => self.runtime.send_raw_msg(RawMsg::Tick),
            // frame-rate ticks only matter when something changed
            Event::Render => {}
            Event::Resize(width, height) => {
                self.runtime.send_raw_msg(RawMsg::Resize(width, height))
            }
            Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
            Event::Mouse(mouse) => self.runtime.send_raw_msg(RawMsg::Mouse(mouse)),
            Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
        }

        for result in self.runtime.run_update_cycle() {
            log::trace!("{result}");
        }

        if self.apply_tui_commands().await? {
            force_render = true;
        }

        if self.runtime.state().system.should_quit {
            return Ok(false);
        }

        if self.runtime.state().system.should_suspend {
            self.suspend().await?;
            force_render = true;
        }

        let mut queued = 0;
        while self.render_req_rx.try_recv().is_ok() {
            queued += 1;
        }
        if Coalescer::decide_render(queued, force_render) {
            self.render().await?;
        }

        Ok(true)
    }

    /// Apply queued terminal commands. Returns whether the terminal was resized.
    async fn apply_tui_commands(&mut self) -> Result<bool> {
        let mut resizes = vec![];
        while let Ok(cmd) = self.tui_cmd_rx.try_recv() {
            match cmd {
                TuiCommand::Resize { width, height } => resizes.push((width, height)),
            }
        }
        if resizes.is_empty() {
            return Ok(false);
        }

        let Some((width, height)) = Coalescer::decide_resize(self.last_size, &resizes) else {
            return Ok(false);
        };
        self.last_size = Some((width, height));
        self.tui
            .lock()
            .await
            .resize(Rect::new(0, 0, width, height))?;
        Ok(true)
    }

    async fn suspend(&mut self) -> Result<()> {
        log::info!("suspending");
        {
            let mut tui = self.tui.lock().await;
            tui.suspend()?;
            tui.resume()?;
        }
        self.runtime.send_raw_msg(RawMsg::Resume);
        self.runtime.run_update_cycle();
        Ok(())
    }

    /// Draw the current state
    pub async fn render(&self) -> Result<()> {
        let state = self.runtime.state();
        let components = &self.components;
        let mut tui = self.tui.lock().await;
        tui.draw(&mut |frame| components.render(frame, state))?;
        Ok(())
    }
}
