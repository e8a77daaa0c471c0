//! Simulation worker that owns the authoritative [`RunnerSimulation`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), applies
//! them strictly between ticks, and publishes events to the [`EventBus`].

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use runner_core::{
    Command as SimCommand, CommandOutcome, EntityId, Lane, ObstacleKind, Phase, PowerUpKind,
    RunnerSimulation, ScoreBoard, SimEvent, Snapshot, TickReport,
};

use crate::events::{Event, EventBus, MilestoneEvent, RunEvent, RunSummary, ScoreEvent};

/// Entity placement or power-up grant requested by a host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Injection {
    Obstacle {
        lane: Lane,
        y: f32,
        kind: ObstacleKind,
    },
    Coin {
        lane: Lane,
        y: f32,
    },
    PowerUp {
        lane: Lane,
        y: f32,
        kind: PowerUpKind,
    },
    Grant(PowerUpKind),
}

/// Result of an `Advance` command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdvanceOutcome {
    /// Steps actually taken; fewer than requested when the run ended.
    pub ticks_run: u32,
    pub phase: Phase,
    pub scoreboard: ScoreBoard,
}

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Apply an input or lifecycle command.
    Apply {
        command: SimCommand,
        reply: oneshot::Sender<CommandOutcome>,
    },
    /// Step the simulation.
    Advance {
        ticks: u32,
        reply: oneshot::Sender<AdvanceOutcome>,
    },
    /// Query the current run (read-only).
    QuerySnapshot { reply: oneshot::Sender<Snapshot> },
    /// Place an entity or grant a power-up.
    Inject {
        injection: Injection,
        reply: oneshot::Sender<Option<EntityId>>,
    },
}

/// Background task that processes runner commands.
pub struct SimulationWorker {
    sim: RunnerSimulation,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    last_board: ScoreBoard,
}

impl SimulationWorker {
    /// Creates a new simulation worker.
    pub fn new(sim: RunnerSimulation, command_rx: mpsc::Receiver<Command>, event_bus: EventBus) -> Self {
        let last_board = sim.scoreboard();
        Self {
            sim,
            command_rx,
            event_bus,
            last_board,
        }
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                Some(cmd) = self.command_rx.recv() => {
                    self.handle_command(cmd);
                }
                else => break,
            }
        }
        debug!("Simulation worker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Apply { command, reply } => {
                let outcome = self.apply(command);
                if reply.send(outcome).is_err() {
                    debug!("Apply reply channel closed (caller dropped)");
                }
            }
            Command::Advance { ticks, reply } => {
                let outcome = self.advance(ticks);
                if reply.send(outcome).is_err() {
                    debug!("Advance reply channel closed (caller dropped)");
                }
            }
            Command::QuerySnapshot { reply } => {
                if reply.send(self.sim.snapshot()).is_err() {
                    debug!("QuerySnapshot reply channel closed (caller dropped)");
                }
            }
            Command::Inject { injection, reply } => {
                let id = self.inject(injection);
                if reply.send(id).is_err() {
                    debug!("Inject reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn apply(&mut self, command: SimCommand) -> CommandOutcome {
        let outcome = self.sim.handle(command);
        if let CommandOutcome::Reset { from, to } = outcome {
            info!(%from, %to, "Run reset");
            self.event_bus.publish(Event::Run(RunEvent::Reset { from, to }));
            self.publish_score_if_changed();
        }
        outcome
    }

    fn advance(&mut self, ticks: u32) -> AdvanceOutcome {
        let mut ticks_run = 0;
        for _ in 0..ticks {
            let report = self.sim.tick();
            if !report.advanced {
                break;
            }
            ticks_run += 1;
            self.publish_report(report);
            self.publish_score_if_changed();
        }
        AdvanceOutcome {
            ticks_run,
            phase: self.sim.phase(),
            scoreboard: self.sim.scoreboard(),
        }
    }

    fn inject(&mut self, injection: Injection) -> Option<EntityId> {
        match injection {
            Injection::Obstacle { lane, y, kind } => Some(self.sim.spawn_obstacle(lane, y, kind)),
            Injection::Coin { lane, y } => Some(self.sim.spawn_coin(lane, y)),
            Injection::PowerUp { lane, y, kind } => Some(self.sim.spawn_power_up(lane, y, kind)),
            Injection::Grant(kind) => {
                self.sim.grant_power_up(kind);
                None
            }
        }
    }

    fn publish_report(&mut self, report: TickReport) {
        let tick = report.tick;
        for event in report.events {
            match event {
                SimEvent::MilestoneReached { milestone, score } => {
                    debug!(milestone, score, "Milestone reached");
                    self.event_bus.publish(Event::Milestone(MilestoneEvent {
                        milestone,
                        score,
                        tick,
                    }));
                }
                SimEvent::PhaseChanged { from, to } => {
                    self.event_bus
                        .publish(Event::Run(RunEvent::PhaseChanged { from, to, tick }));
                    if to == Phase::GameOver {
                        let summary = RunSummary::from(self.sim.state());
                        info!(
                            score = summary.score,
                            coins = summary.coins,
                            ticks = summary.ticks,
                            "Run ended"
                        );
                        self.event_bus.publish(Event::Run(RunEvent::Ended(summary)));
                    }
                }
                event => {
                    self.event_bus.publish(Event::Run(RunEvent::Sim { tick, event }));
                }
            }
        }
    }

    fn publish_score_if_changed(&mut self) {
        let board = self.sim.scoreboard();
        if board != self.last_board {
            self.last_board = board;
            self.event_bus.publish(Event::Score(ScoreEvent {
                tick: self.sim.state().tick,
                board,
            }));
        }
    }
}
