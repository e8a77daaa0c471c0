//! Headless simulation command
//!
//! Plays one seeded run with a simple lane-dodging autopilot and prints the
//! final scoreboard. Useful for checking balance changes without a terminal.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use serde::Serialize;

use runner_core::{
    Command, InputCommand, Lane, Obstacle, ObstacleKind, Phase, RunnerConfig, RunnerSimulation,
    ScoreBoard, SimEvent, Snapshot,
};

/// Run a seeded headless simulation
#[derive(Parser, Debug)]
pub struct Simulate {
    /// RNG seed
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Maximum number of ticks to run
    #[arg(long, default_value = "3600")]
    pub ticks: u32,

    /// Disable the autopilot and let the player run straight
    #[arg(long)]
    pub idle: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    seed: u64,
    ticks_run: u64,
    phase: Phase,
    scoreboard: ScoreBoard,
    milestones: Vec<u64>,
    commands_issued: u32,
    crashed: bool,
}

impl Simulate {
    pub fn execute(self) -> Result<()> {
        let mut sim = RunnerSimulation::seeded(RunnerConfig::default(), self.seed)
            .context("Default configuration rejected")?;
        sim.handle(Command::Start);

        let mut milestones = Vec::new();
        let mut commands_issued = 0;
        let mut crashed = false;

        for _ in 0..self.ticks {
            if !self.idle
                && let Some(input) = autopilot(&sim.snapshot(), sim.config())
                && !sim.handle(Command::Input(input)).is_ignored()
            {
                commands_issued += 1;
            }

            let report = sim.tick();
            for event in &report.events {
                match event {
                    SimEvent::MilestoneReached { milestone, .. } => milestones.push(*milestone),
                    SimEvent::Crashed { .. } => crashed = true,
                    _ => {}
                }
            }
            if sim.phase() != Phase::Playing {
                break;
            }
        }

        let report = Report {
            seed: self.seed,
            ticks_run: sim.state().tick.0,
            phase: sim.phase(),
            scoreboard: sim.scoreboard(),
            milestones,
            commands_issued,
            crashed,
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_report(&report);
        }
        Ok(())
    }
}

fn print_report(report: &Report) {
    let board = &report.scoreboard;
    let outcome = if report.crashed {
        style("crashed").red().bold()
    } else {
        style("survived").green().bold()
    };

    println!("{}", style("Lane-runner simulation").cyan().bold());
    println!("  Seed:      {}", report.seed);
    println!("  Ticks:     {} ({})", report.ticks_run, outcome);
    println!("  Score:     {}", style(board.score).bold());
    println!("  Coins:     {}", board.coins);
    println!("  Distance:  {}m", board.distance);
    println!("  Max combo: x{}", board.max_combo);
    println!("  Inputs:    {}", report.commands_issued);
    if !report.milestones.is_empty() {
        let list: Vec<String> = report.milestones.iter().map(u64::to_string).collect();
        println!("  Milestones: {}", list.join(", "));
    }
}

/// Picks an evasive input for the nearest obstacle bearing down on the
/// player's lane. Prefers a free neighbouring lane over jumping or sliding.
fn autopilot(snapshot: &Snapshot, config: &RunnerConfig) -> Option<InputCommand> {
    let player = &snapshot.player;
    if player.is_jumping || player.is_sliding {
        return None;
    }

    let speed = snapshot.stats.game_speed;
    let lookahead = speed * 24.0;
    let threat = nearest_threat(&snapshot.obstacles, player.lane, config, lookahead)?;

    let free = |lane: Lane| nearest_threat(&snapshot.obstacles, lane, config, lookahead).is_none();
    if let Some(lane) = player.lane.left()
        && free(lane)
    {
        return Some(InputCommand::MoveLeft);
    }
    if let Some(lane) = player.lane.right()
        && free(lane)
    {
        return Some(InputCommand::MoveRight);
    }

    // Boxed in: wait until the obstacle is close, then evade in place.
    let gap = config.ground_y - (threat.y + threat.height);
    if gap > speed * 8.0 {
        return None;
    }
    Some(match threat.kind {
        ObstacleKind::Barrier => InputCommand::Slide,
        ObstacleKind::Train => InputCommand::Jump,
    })
}

fn nearest_threat<'a>(
    obstacles: &'a [Obstacle],
    lane: Lane,
    config: &RunnerConfig,
    lookahead: f32,
) -> Option<&'a Obstacle> {
    let player_bottom = config.ground_y + config.player_height;
    obstacles
        .iter()
        .filter(|o| o.lane == lane && !o.cleared)
        .filter(|o| o.y < player_bottom && o.y + o.height > config.ground_y - lookahead)
        .max_by(|a, b| a.y.total_cmp(&b.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use runner_core::EntityId;

    fn obstacle(lane: Lane, y: f32, kind: ObstacleKind) -> Obstacle {
        let config = RunnerConfig::default();
        Obstacle {
            id: EntityId(1),
            lane,
            y,
            width: config.obstacle_width,
            height: match kind {
                ObstacleKind::Barrier => config.barrier_height,
                ObstacleKind::Train => config.train_height,
            },
            kind,
            cleared: false,
        }
    }

    fn playing_snapshot(obstacles: Vec<Obstacle>) -> (Snapshot, RunnerConfig) {
        let config = RunnerConfig::default();
        let mut sim = RunnerSimulation::seeded(config.clone(), 1).unwrap();
        sim.handle(Command::Start);
        let mut snapshot = sim.snapshot();
        snapshot.obstacles = obstacles;
        (snapshot, config)
    }

    #[test]
    fn clear_lane_needs_no_input() {
        let (snapshot, config) = playing_snapshot(Vec::new());
        assert_eq!(autopilot(&snapshot, &config), None);
    }

    #[test]
    fn dodges_into_free_lane() {
        let (snapshot, config) =
            playing_snapshot(vec![obstacle(Lane::Center, 400.0, ObstacleKind::Train)]);
        assert_eq!(autopilot(&snapshot, &config), Some(InputCommand::MoveLeft));
    }

    #[test]
    fn boxed_in_train_is_jumped_when_close() {
        let (snapshot, config) = playing_snapshot(vec![
            obstacle(Lane::Center, 380.0, ObstacleKind::Train),
            obstacle(Lane::Left, 400.0, ObstacleKind::Train),
            obstacle(Lane::Right, 400.0, ObstacleKind::Barrier),
        ]);
        assert_eq!(autopilot(&snapshot, &config), Some(InputCommand::Jump));
    }

    #[test]
    fn boxed_in_barrier_waits_then_slides() {
        let far = vec![
            obstacle(Lane::Center, 300.0, ObstacleKind::Barrier),
            obstacle(Lane::Left, 350.0, ObstacleKind::Train),
            obstacle(Lane::Right, 350.0, ObstacleKind::Train),
        ];
        let (snapshot, config) = playing_snapshot(far);
        assert_eq!(autopilot(&snapshot, &config), None);

        let near = vec![
            obstacle(Lane::Center, 420.0, ObstacleKind::Barrier),
            obstacle(Lane::Left, 350.0, ObstacleKind::Train),
            obstacle(Lane::Right, 350.0, ObstacleKind::Train),
        ];
        let (snapshot, config) = playing_snapshot(near);
        assert_eq!(autopilot(&snapshot, &config), Some(InputCommand::Slide));
    }
}
