//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! steering the runner, stepping the simulation and streaming events from
//! specific topics.
use tokio::sync::{broadcast, mpsc, oneshot};

use runner_core::{Command as SimCommand, CommandOutcome, EntityId, InputCommand, Snapshot};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::{AdvanceOutcome, Command, Injection};

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Applies an input or lifecycle command between ticks.
    pub async fn send(&self, command: SimCommand) -> Result<CommandOutcome> {
        self.request(|reply| Command::Apply { command, reply }).await
    }

    pub async fn input(&self, input: InputCommand) -> Result<CommandOutcome> {
        self.send(SimCommand::Input(input)).await
    }

    pub async fn start(&self) -> Result<CommandOutcome> {
        self.send(SimCommand::Start).await
    }

    pub async fn restart(&self) -> Result<CommandOutcome> {
        self.send(SimCommand::Restart).await
    }

    /// Runs up to `ticks` simulation steps; stops early when the run ends.
    pub async fn advance(&self, ticks: u32) -> Result<AdvanceOutcome> {
        self.request(|reply| Command::Advance { ticks, reply }).await
    }

    /// Query the current run (read-only copy)
    pub async fn snapshot(&self) -> Result<Snapshot> {
        self.request(|reply| Command::QuerySnapshot { reply }).await
    }

    /// Places an entity or grants a power-up directly.
    ///
    /// Returns the new entity id, or `None` for power-up grants.
    pub async fn inject(&self, injection: Injection) -> Result<Option<EntityId>> {
        self.request(|reply| Command::Inject { injection, reply }).await
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Run` - Phase changes, pickups, clears and run summaries
    /// - `Topic::Score` - Scoreboard pushes
    /// - `Topic::Milestone` - Score milestones crossed
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> std::collections::HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    async fn request<T>(&self, build: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(build(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }
}
