//! Runtime orchestration for the lane-runner simulation.
//!
//! This crate wires the deterministic [`runner_core`] simulation into a
//! tokio worker, a topic-based event bus and a fixed-timestep frame clock.
//! Consumers embed [`Runtime`] to pace ticks, subscribe to events, and steer
//! the runner through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`clock`] converts wall-clock frame time into ticks
//! - [`scoreboard`] forwards score updates to display sinks
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod clock;
pub mod config;
pub mod events;
pub mod runtime;
pub mod scoreboard;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle};
pub use clock::FrameClock;
pub use config::RuntimeConfig;
pub use events::{Event, EventBus, MilestoneEvent, RunEvent, RunSummary, ScoreEvent, Topic};
pub use runtime::{Runtime, RuntimeBuilder};
pub use scoreboard::{LogSink, ScoreBoardSink, spawn_scoreboard_sink};
pub use workers::{AdvanceOutcome, Injection};
