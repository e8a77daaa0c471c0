//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker, wires up command/event channels,
//! paces ticks against the wall clock, and exposes a builder-based API for
//! clients to drive the runner.

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

use runner_core::{PcgRng, RunnerSimulation};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::clock::FrameClock;
use crate::config::RuntimeConfig;
use crate::events::{Event, EventBus, Topic};
use crate::workers::{Command, SimulationWorker};

/// Main runtime that orchestrates the runner simulation
///
/// Design: Runtime owns the worker and the frame clock.
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    config: RuntimeConfig,
    seed: u64,
    sim_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Seed the simulation was built with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Subscribe to events from a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.handle.subscribe(topic)
    }

    /// Drive the simulation at the configured tick rate until the worker
    /// goes away.
    ///
    /// Frame time is measured on the wall clock and converted into whole
    /// ticks by a [`FrameClock`].
    pub async fn run(&mut self) -> Result<()> {
        let mut clock = FrameClock::new(self.config.tick_rate_hz, self.config.max_catch_up_ticks);
        let mut interval = tokio::time::interval(clock.step());
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(tick_rate_hz = self.config.tick_rate_hz, "Frame clock started");
        let mut last = Instant::now();
        loop {
            interval.tick().await;
            let now = Instant::now();
            let ticks = clock.advance(now.duration_since(last));
            last = now;
            if ticks > 0 {
                self.handle.advance(ticks).await?;
            }
        }
    }

    /// Shutdown the runtime gracefully
    ///
    /// Waits for the worker to drain; every other handle clone must be
    /// dropped first.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Fix the RNG seed (overrides the configured one)
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Build the runtime
    pub async fn build(self) -> Result<Runtime> {
        let config = self.config;
        if config.tick_rate_hz == 0 {
            return Err(RuntimeError::ZeroTickRate);
        }
        if config.tick_rate_hz > RuntimeConfig::MAX_TICK_RATE_HZ {
            return Err(RuntimeError::TickRateTooHigh(config.tick_rate_hz));
        }

        let seed = config.seed.unwrap_or_else(rand::random);
        let sim = RunnerSimulation::try_new(config.runner.clone(), PcgRng::new(seed))?;
        info!(seed, "Runner simulation created");

        let (command_tx, command_rx) = mpsc::channel::<Command>(config.command_buffer_size.max(1));
        let event_bus = EventBus::with_capacity(config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        let sim_worker = SimulationWorker::new(sim, command_rx, event_bus);
        let sim_worker_handle = tokio::spawn(async move {
            sim_worker.run().await;
        });
        debug!("Simulation worker spawned");

        Ok(Runtime {
            handle,
            config,
            seed,
            sim_worker_handle,
        })
    }
}
