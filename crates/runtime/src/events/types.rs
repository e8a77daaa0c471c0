//! Event types for different topics.

use runner_core::{Phase, RunState, ScoreBoard, SimEvent, Tick};
use serde::{Deserialize, Serialize};

/// Events describing the flow of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RunEvent {
    /// A start or restart command reset the run.
    Reset { from: Phase, to: Phase },

    /// The phase changed during a tick (a fatal collision).
    PhaseChanged { from: Phase, to: Phase, tick: Tick },

    /// Pickup, clear or expiry reported by the simulation.
    Sim { tick: Tick, event: SimEvent },

    /// The run ended; published right after the `GameOver` phase change.
    Ended(RunSummary),
}

/// Scoreboard push, published after every tick that changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEvent {
    pub tick: Tick,
    pub board: ScoreBoard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneEvent {
    pub milestone: u64,
    pub score: u64,
    pub tick: Tick,
}

/// Final numbers of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub score: u64,
    pub coins: u32,
    pub distance: u64,
    pub max_combo: u32,
    pub milestones_reached: u32,
    pub ticks: u64,
}

impl From<&RunState> for RunSummary {
    fn from(state: &RunState) -> Self {
        let stats = &state.stats;
        Self {
            score: stats.score,
            coins: stats.coins_collected,
            distance: stats.distance,
            max_combo: stats.max_combo,
            milestones_reached: stats.milestones_reached,
            ticks: state.tick.0,
        }
    }
}
