//! Authoritative run state.
//!
//! This module owns the data structures that describe the player, the
//! scrolling entities and the run statistics. Hosts read it through
//! [`Snapshot`](crate::Snapshot) and mutate it exclusively through
//! [`RunnerSimulation`](crate::RunnerSimulation).
mod common;
mod entities;
mod player;

pub use common::{EntityId, Lane, Span, Tick};
pub use entities::{Coin, Obstacle, ObstacleKind, Particle, PowerUp, PowerUpKind};
pub use player::{JumpState, Player};

use crate::config::RunnerConfig;

/// Lifecycle phase of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    /// Waiting on the start screen; physics halted.
    #[default]
    Start,
    Playing,
    /// A fatal collision ended the run; physics halted until start/restart.
    GameOver,
}

/// Scoring counters for the current run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunStats {
    /// Non-decreasing while playing.
    pub score: u64,
    /// Number of coins picked up. Unrelated to the live coin entities.
    pub coins_collected: u32,
    pub combo: u32,
    /// Highest combo reached this run; monotonic.
    pub max_combo: u32,
    /// `floor(score / 10)`.
    pub distance: u64,
    /// Always within `[base_speed, max_speed]`.
    pub game_speed: f32,
    /// Milestones crossed so far this run.
    pub milestones_reached: u32,
}

impl RunStats {
    pub fn new(config: &RunnerConfig) -> Self {
        Self {
            score: 0,
            coins_collected: 0,
            combo: 0,
            max_combo: 0,
            distance: 0,
            game_speed: config.base_speed,
            milestones_reached: 0,
        }
    }

    /// Adds to the combo and raises `max_combo` when exceeded.
    pub(crate) fn bump_combo(&mut self) {
        self.combo += 1;
        self.max_combo = self.max_combo.max(self.combo);
    }
}

/// Countdown ticks until each spawner fires. Zero means disabled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnTimers {
    pub obstacle: u32,
    pub coin: u32,
    pub power_up: u32,
}

/// Everything that changes during a run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunState {
    pub phase: Phase,
    pub tick: Tick,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub coins: Vec<Coin>,
    pub power_ups: Vec<PowerUp>,
    pub particles: Vec<Particle>,
    pub stats: RunStats,
    pub spawn: SpawnTimers,

    /// Sequential entity ID allocator. Never reused within a run.
    next_entity_id: u32,
}

impl RunState {
    /// Fresh run in the given phase with the spawners primed.
    pub fn new(config: &RunnerConfig, phase: Phase) -> Self {
        Self {
            phase,
            tick: Tick::ZERO,
            player: Player::default(),
            obstacles: Vec::new(),
            coins: Vec::new(),
            power_ups: Vec::new(),
            particles: Vec::new(),
            stats: RunStats::new(config),
            spawn: SpawnTimers {
                obstacle: config.obstacle_interval_ticks,
                coin: config.coin_interval_ticks,
                power_up: if config.power_ups_enabled {
                    config.power_up_interval_ticks
                } else {
                    0
                },
            },
            next_entity_id: 1,
        }
    }

    pub fn allocate_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id += 1;
        id
    }
}
