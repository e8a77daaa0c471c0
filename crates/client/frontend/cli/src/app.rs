//! Glue code tying the runtime handle and terminal UI together.
use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use client_frontend_core::{EventConsumer, Frontend, FrontendConfig, MessageLevel, RunMessages};
use runner_core::RunnerConfig;
use runner_runtime::RuntimeHandle;

use crate::config::CliConfig;
use crate::presentation::{EventLoop, terminal};

/// Terminal frontend; see the crate docs.
pub struct CliFrontend {
    config: FrontendConfig,
    cli_config: CliConfig,
    max_speed: f32,
}

impl CliFrontend {
    /// `runner` supplies the speed cap used by the speed gauge.
    pub fn new(config: FrontendConfig, cli_config: CliConfig, runner: &RunnerConfig) -> Self {
        Self {
            config,
            cli_config,
            max_speed: runner.max_speed,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
        info!("CLI frontend starting");

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let mut messages = RunMessages::new(
            self.config.messages.capacity,
            self.config.messages.visibility.clone(),
        );
        messages
            .message_log_mut()
            .push_text("Welcome, runner. Press Enter to start.", MessageLevel::Info);

        let event_loop = EventLoop::new(handle, messages, self.cli_config.clone(), self.max_speed);
        event_loop.run(&mut terminal).await?;

        terminal::restore()?;
        info!("CLI frontend exiting");
        Ok(())
    }
}
