//! The runner simulation loop.
//!
//! [`RunnerSimulation`] is the single owner of a [`RunState`]. Hosts feed it
//! commands between ticks and call [`RunnerSimulation::tick`] once per frame.
//! A tick runs a fixed pipeline:
//!
//! 1. player physics (jump arc, slide timer)
//! 2. spawn countdowns
//! 3. scrolling and particle motion
//! 4. magnet attraction
//! 5. pruning of off-field entities
//! 6. collisions (power-ups, obstacles, coins)
//! 7. speed and distance
//! 8. power-up timers
//! 9. milestone crossings
//!
//! Outside [`Phase::Playing`] the tick is a no-op.

mod collision;
mod events;
mod physics;
mod scoring;
mod spawn;

pub use events::{ClearedBy, SimEvent, TickReport};

use crate::action::{Command, CommandOutcome, InputCommand};
use crate::config::{RestartPolicy, RunnerConfig};
use crate::env::{PcgRng, RandomSource};
use crate::error::ConfigError;
use crate::snapshot::{ScoreBoard, Snapshot};
use crate::state::{EntityId, JumpState, Lane, ObstacleKind, Phase, PowerUpKind, RunState};

/// Deterministic lane-runner simulation.
///
/// Given the same configuration, random source and command/tick sequence,
/// every run produces identical state.
pub struct RunnerSimulation<R: RandomSource = PcgRng> {
    config: RunnerConfig,
    rng: R,
    state: RunState,
}

impl RunnerSimulation<PcgRng> {
    /// Simulation driven by a seeded PCG generator.
    pub fn seeded(config: RunnerConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::try_new(config, PcgRng::new(seed))
    }
}

impl<R: RandomSource> RunnerSimulation<R> {
    /// Creates a simulation on the start screen without validating `config`.
    pub fn new(config: RunnerConfig, rng: R) -> Self {
        let state = RunState::new(&config, Phase::Start);
        Self { config, rng, state }
    }

    pub fn try_new(config: RunnerConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, rng))
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn scoreboard(&self) -> ScoreBoard {
        ScoreBoard::from(&self.state.stats)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, &self.config)
    }

    // ===== commands =====

    pub fn handle(&mut self, command: Command) -> CommandOutcome {
        match command {
            Command::Input(input) => {
                if self.handle_command(input) {
                    CommandOutcome::Applied
                } else {
                    CommandOutcome::Ignored
                }
            }
            Command::Start => self.start(),
            Command::Restart => self.restart(),
        }
    }

    /// Applies a steering command. Returns false when it was ignored.
    ///
    /// Every command is ignored outside `Playing`. Lane moves past the outer
    /// lanes are ignored. Jump and slide are ignored while already jumping
    /// or sliding.
    pub fn handle_command(&mut self, command: InputCommand) -> bool {
        if self.state.phase != Phase::Playing {
            return false;
        }
        let player = &mut self.state.player;
        match command {
            InputCommand::MoveLeft => {
                let target = player.lane.left();
                move_to(&mut player.lane, target)
            }
            InputCommand::MoveRight => {
                let target = player.lane.right();
                move_to(&mut player.lane, target)
            }
            InputCommand::Jump => {
                if player.is_jumping() || player.is_sliding() {
                    return false;
                }
                player.jump = JumpState::Jumping;
                player.jump_velocity = self.config.jump_velocity;
                true
            }
            InputCommand::Slide => {
                if player.is_jumping() || player.is_sliding() {
                    return false;
                }
                player.slide_ticks = self.config.slide_ticks;
                true
            }
        }
    }

    /// Resets the run and starts playing.
    pub fn start(&mut self) -> CommandOutcome {
        self.reset(Phase::Playing)
    }

    /// Resets the run; the resulting phase follows the restart policy.
    pub fn restart(&mut self) -> CommandOutcome {
        let to = match self.config.restart_policy {
            RestartPolicy::ReturnToStart => Phase::Start,
            RestartPolicy::Resume => Phase::Playing,
        };
        self.reset(to)
    }

    fn reset(&mut self, to: Phase) -> CommandOutcome {
        let from = self.state.phase;
        self.state = RunState::new(&self.config, to);
        CommandOutcome::Reset { from, to }
    }

    // ===== stepping =====

    /// Advances the simulation by one tick.
    pub fn tick(&mut self) -> TickReport {
        if self.state.phase != Phase::Playing {
            return TickReport::idle(self.state.tick);
        }

        let config = &self.config;
        let state = &mut self.state;
        let mut events = Vec::new();

        state.tick = state.tick.next();
        physics::advance_player(&mut state.player, config);
        spawn::run_spawners(state, config, &mut self.rng);
        physics::scroll(state);
        physics::attract_coins(state, config);
        physics::prune(state, config);
        collision::resolve(state, config, &mut self.rng, &mut events);
        scoring::update_speed(state, config);
        scoring::tick_power_ups(state, &mut events);
        scoring::check_milestones(state, config, &mut events);

        TickReport {
            tick: state.tick,
            advanced: true,
            events,
        }
    }

    /// Runs up to `ticks` steps, stopping early if the run ends.
    pub fn advance(&mut self, ticks: u32) -> Vec<TickReport> {
        let mut reports = Vec::new();
        for _ in 0..ticks {
            let report = self.tick();
            if !report.advanced {
                break;
            }
            reports.push(report);
        }
        reports
    }

    // ===== injection =====

    /// Places an obstacle with its top edge at `y`.
    pub fn spawn_obstacle(&mut self, lane: Lane, y: f32, kind: ObstacleKind) -> EntityId {
        spawn::spawn_obstacle(&mut self.state, &self.config, lane, y, kind)
    }

    pub fn spawn_coin(&mut self, lane: Lane, y: f32) -> EntityId {
        spawn::spawn_coin(&mut self.state, &self.config, lane, y)
    }

    pub fn spawn_power_up(&mut self, lane: Lane, y: f32, kind: PowerUpKind) -> EntityId {
        spawn::spawn_power_up(&mut self.state, &self.config, lane, y, kind)
    }

    /// Activates a power-up for its full configured duration.
    pub fn grant_power_up(&mut self, kind: PowerUpKind) {
        let player = &mut self.state.player;
        match kind {
            PowerUpKind::Shield => player.shield_ticks = self.config.shield_ticks,
            PowerUpKind::Magnet => player.magnet_ticks = self.config.magnet_ticks,
        }
    }
}

fn move_to(lane: &mut Lane, target: Option<Lane>) -> bool {
    match target {
        Some(next) => {
            *lane = next;
            true
        }
        None => false,
    }
}
