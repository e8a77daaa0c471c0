//! Event loop orchestrating runtime events, user input, and rendering.
//!
//! Three concerns share one `select!`:
//! - Runtime events feed the message log and run summaries
//! - Keyboard and mouse input become runner commands
//! - A frame interval refreshes the snapshot and redraws

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent};
use runner_core::Command;
use runner_runtime::{Event as RuntimeEvent, RunEvent, RuntimeHandle, Topic};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, warn};

use client_frontend_core::{EventConsumer, RunMessages};

use crate::config::CliConfig;
use crate::input::{InputHandler, KeyAction, SwipeTracker};
use crate::presentation::{terminal::Tui, ui};
use crate::state::AppState;

pub struct EventLoop {
    handle: RuntimeHandle,
    run_rx: broadcast::Receiver<RuntimeEvent>,
    milestone_rx: broadcast::Receiver<RuntimeEvent>,
    consumer: RunMessages,
    input: InputHandler,
    swipe: SwipeTracker,
    app_state: AppState,
    cli_config: CliConfig,
    max_speed: f32,
}

impl EventLoop {
    pub fn new(
        handle: RuntimeHandle,
        consumer: RunMessages,
        cli_config: CliConfig,
        max_speed: f32,
    ) -> Self {
        Self {
            run_rx: handle.subscribe(Topic::Run),
            milestone_rx: handle.subscribe(Topic::Milestone),
            handle,
            consumer,
            input: InputHandler::new(),
            swipe: SwipeTracker::default(),
            app_state: AppState::new(),
            cli_config,
            max_speed,
        }
    }

    /// Runs until the player quits or the runtime goes away.
    pub async fn run(mut self, terminal: &mut Tui) -> Result<RunMessages> {
        self.refresh().await?;
        self.render(terminal)?;

        let mut frame = time::interval(self.cli_config.ui.frame_interval);
        frame.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                result = self.run_rx.recv() => {
                    if self.handle_runtime_event(result) {
                        break;
                    }
                }
                result = self.milestone_rx.recv() => {
                    if self.handle_runtime_event(result) {
                        break;
                    }
                }
                _ = frame.tick() => {
                    if self.handle_input().await? {
                        break;
                    }
                    self.refresh().await?;
                    self.render(terminal)?;
                }
            }
        }

        Ok(self.consumer)
    }

    /// Returns true when the event stream is gone.
    fn handle_runtime_event(&mut self, result: Result<RuntimeEvent, RecvError>) -> bool {
        match result {
            Ok(event) => {
                if let RuntimeEvent::Run(RunEvent::Ended(summary)) = &event {
                    self.app_state.finish_run(*summary);
                }
                self.consumer.on_event(&event);
                false
            }
            Err(RecvError::Closed) => {
                warn!("Event stream closed");
                true
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!(skipped, "Dropped stale events");
                false
            }
        }
    }

    /// Drains pending terminal events. Returns true on quit.
    async fn handle_input(&mut self) -> Result<bool> {
        while term_event::poll(Duration::ZERO)? {
            match term_event::read()? {
                TermEvent::Key(key) => match self.input.handle_key(key) {
                    KeyAction::Quit => return Ok(true),
                    KeyAction::Submit(command) => self.submit(command).await?,
                    KeyAction::None => {}
                },
                TermEvent::Mouse(mouse) => {
                    if let Some(command) = self.swipe.handle_mouse(mouse) {
                        self.submit(Command::Input(command)).await?;
                    }
                }
                _ => {}
            }
        }
        Ok(false)
    }

    async fn submit(&mut self, command: Command) -> Result<()> {
        let outcome = self.handle.send(command).await?;
        if outcome.is_ignored() {
            debug!(?command, "Command ignored");
        }
        Ok(())
    }

    async fn refresh(&mut self) -> Result<()> {
        let snapshot = self.handle.snapshot().await?;
        self.app_state.observe(snapshot);
        Ok(())
    }

    fn render(&self, terminal: &mut Tui) -> Result<()> {
        let ctx = ui::RenderContext {
            app_state: &self.app_state,
            messages: self.consumer.message_log(),
            message_panel_height: self.cli_config.ui.message_panel_height,
            max_speed: self.max_speed,
        };
        ui::render(terminal, &ctx)
    }
}
