//! Runtime configuration structures and loaders.

use std::env;

use runner_core::{RestartPolicy, RunnerConfig};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub runner: RunnerConfig,
    /// Fixed seed for reproducible runs; drawn from entropy when `None`.
    pub seed: Option<u64>,
    pub tick_rate_hz: u32,
    /// Most ticks a single frame may run after a stall.
    pub max_catch_up_ticks: u32,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl RuntimeConfig {
    pub const DEFAULT_TICK_RATE_HZ: u32 = 60;
    pub const MAX_TICK_RATE_HZ: u32 = 1_000;
    pub const DEFAULT_MAX_CATCH_UP_TICKS: u32 = 5;
    pub const DEFAULT_EVENT_BUFFER_SIZE: usize = 256;
    pub const DEFAULT_COMMAND_BUFFER_SIZE: usize = 32;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `RUNNER_SEED` - Fixed RNG seed (default: random)
    /// - `RUNNER_TICK_RATE` - Simulation ticks per second, 1..=1000 (default: 60)
    /// - `RUNNER_MAX_CATCH_UP` - Tick cap per frame after a stall (default: 5)
    /// - `RUNNER_RESTART_POLICY` - `start` or `resume` (default: start)
    /// - `RUNNER_POWER_UPS` - Spawn power-ups (default: true)
    /// - `RUNNER_COMBO` - Combo scoring (default: true)
    /// - `RUNNER_EVENT_BUFFER` - Per-topic event buffer (default: 256)
    /// - `RUNNER_COMMAND_BUFFER` - Worker command queue (default: 32)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.seed = read_env::<u64>("RUNNER_SEED");
        if let Some(rate) = read_env::<u32>("RUNNER_TICK_RATE") {
            config.tick_rate_hz = rate.clamp(1, Self::MAX_TICK_RATE_HZ);
        }
        if let Some(cap) = read_env::<u32>("RUNNER_MAX_CATCH_UP") {
            config.max_catch_up_ticks = cap.max(1);
        }
        if let Some(policy) = read_env::<RestartPolicy>("RUNNER_RESTART_POLICY") {
            config.runner.restart_policy = policy;
        }
        if let Some(enabled) = read_env_bool("RUNNER_POWER_UPS") {
            config.runner.power_ups_enabled = enabled;
        }
        if let Some(enabled) = read_env_bool("RUNNER_COMBO") {
            config.runner.combo_enabled = enabled;
        }
        if let Some(size) = read_env::<usize>("RUNNER_EVENT_BUFFER") {
            config.event_buffer_size = size.max(1);
        }
        if let Some(size) = read_env::<usize>("RUNNER_COMMAND_BUFFER") {
            config.command_buffer_size = size.max(1);
        }

        config
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            runner: RunnerConfig::default(),
            seed: None,
            tick_rate_hz: Self::DEFAULT_TICK_RATE_HZ,
            max_catch_up_ticks: Self::DEFAULT_MAX_CATCH_UP_TICKS,
            event_buffer_size: Self::DEFAULT_EVENT_BUFFER_SIZE,
            command_buffer_size: Self::DEFAULT_COMMAND_BUFFER_SIZE,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
