//! Read-only views handed to renderers and score displays.

use crate::config::RunnerConfig;
use crate::state::{Coin, Lane, Obstacle, Particle, Phase, PowerUp, RunState, RunStats, Tick};

/// Player pose resolved to field coordinates.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerView {
    pub lane: Lane,
    /// Horizontal centre.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub jump_height: f32,
    pub is_jumping: bool,
    pub is_sliding: bool,
    pub shield_ticks: u32,
    pub magnet_ticks: u32,
}

/// Values pushed to a score display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreBoard {
    pub score: u64,
    pub coins: u32,
    pub distance: u64,
    pub combo: u32,
    pub max_combo: u32,
}

impl From<&RunStats> for ScoreBoard {
    fn from(stats: &RunStats) -> Self {
        Self {
            score: stats.score,
            coins: stats.coins_collected,
            distance: stats.distance,
            combo: stats.combo,
            max_combo: stats.max_combo,
        }
    }
}

/// Immutable copy of everything needed to draw a frame.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub tick: Tick,
    pub phase: Phase,
    pub field_width: f32,
    pub field_height: f32,
    pub player: PlayerView,
    pub obstacles: Vec<Obstacle>,
    pub coins: Vec<Coin>,
    pub power_ups: Vec<PowerUp>,
    pub particles: Vec<Particle>,
    pub stats: RunStats,
}

impl Snapshot {
    pub fn capture(state: &RunState, config: &RunnerConfig) -> Self {
        let player = &state.player;
        let body = player.span(config);
        Self {
            tick: state.tick,
            phase: state.phase,
            field_width: config.field_width,
            field_height: config.field_height,
            player: PlayerView {
                lane: player.lane,
                x: player.x(config),
                y: body.top,
                width: config.player_width,
                height: player.height(config),
                jump_height: player.jump_height,
                is_jumping: player.is_jumping(),
                is_sliding: player.is_sliding(),
                shield_ticks: player.shield_ticks,
                magnet_ticks: player.magnet_ticks,
            },
            obstacles: state.obstacles.clone(),
            coins: state.coins.clone(),
            power_ups: state.power_ups.clone(),
            particles: state.particles.clone(),
            stats: state.stats.clone(),
        }
    }

    pub fn scoreboard(&self) -> ScoreBoard {
        ScoreBoard::from(&self.stats)
    }
}
