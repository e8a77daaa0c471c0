//! Deterministic lane-runner simulation.
//!
//! `runner-core` defines the canonical rules (commands, physics, spawning,
//! collisions, scoring) and exposes a pure API reused by the runtime host,
//! the terminal frontend and offline tools. All state mutation flows through
//! [`engine::RunnerSimulation`]; renderers consume [`Snapshot`]s.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod input;
pub mod snapshot;
pub mod state;

pub use action::{Command, CommandOutcome, InputCommand};
pub use config::{RestartPolicy, RunnerConfig};
pub use engine::{ClearedBy, RunnerSimulation, SimEvent, TickReport};
pub use env::{FnSource, PcgRng, RandomSource, ScriptedRng};
pub use error::ConfigError;
pub use input::{DEFAULT_SWIPE_THRESHOLD, classify_swipe};
pub use snapshot::{PlayerView, ScoreBoard, Snapshot};
pub use state::{
    Coin, EntityId, JumpState, Lane, Obstacle, ObstacleKind, Particle, Phase, Player, PowerUp,
    PowerUpKind, RunState, RunStats, Span, SpawnTimers, Tick,
};
