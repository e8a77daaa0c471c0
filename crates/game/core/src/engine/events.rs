use crate::state::{EntityId, Lane, ObstacleKind, Phase, PowerUpKind, Tick};

/// Evasive move that let the player pass an obstacle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum ClearedBy {
    Jump,
    Slide,
}

/// Notable state change produced during a tick.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SimEvent {
    PhaseChanged {
        from: Phase,
        to: Phase,
    },
    CoinCollected {
        id: EntityId,
        lane: Lane,
        /// Points awarded for this coin.
        value: u64,
        /// Combo after the pickup.
        combo: u32,
    },
    PowerUpCollected {
        id: EntityId,
        kind: PowerUpKind,
    },
    PowerUpExpired {
        kind: PowerUpKind,
    },
    ObstacleCleared {
        id: EntityId,
        by: ClearedBy,
    },
    Crashed {
        id: EntityId,
        kind: ObstacleKind,
    },
    MilestoneReached {
        milestone: u64,
        score: u64,
    },
}

/// Outcome of a single [`tick`](crate::RunnerSimulation::tick).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickReport {
    /// Tick counter after the step.
    pub tick: Tick,
    /// False when the simulation was not playing and nothing moved.
    pub advanced: bool,
    pub events: Vec<SimEvent>,
}

impl TickReport {
    pub(crate) fn idle(tick: Tick) -> Self {
        Self {
            tick,
            advanced: false,
            events: Vec::new(),
        }
    }

    pub fn crashed(&self) -> bool {
        self.events
            .iter()
            .any(|event| matches!(event, SimEvent::Crashed { .. }))
    }

    pub fn milestones(&self) -> impl Iterator<Item = u64> + '_ {
        self.events.iter().filter_map(|event| match event {
            SimEvent::MilestoneReached { milestone, .. } => Some(*milestone),
            _ => None,
        })
    }
}
