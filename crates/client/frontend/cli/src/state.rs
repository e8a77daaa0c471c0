//! UI-side state that outlives individual snapshots.
use runner_core::{Phase, Snapshot};
use runner_runtime::RunSummary;

/// Which full-screen view to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Start,
    Running,
    GameOver,
}

#[derive(Debug, Default)]
pub struct AppState {
    /// Most recent snapshot; `None` until the first query returns.
    pub snapshot: Option<Snapshot>,
    /// Summary of the last finished run, shown on the game-over screen.
    pub last_run: Option<RunSummary>,
    /// Best score this session.
    pub best_score: u64,
    pub runs_finished: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        match self.snapshot.as_ref().map(|s| s.phase) {
            None | Some(Phase::Start) => Screen::Start,
            Some(Phase::Playing) => Screen::Running,
            Some(Phase::GameOver) => Screen::GameOver,
        }
    }

    pub fn observe(&mut self, snapshot: Snapshot) {
        self.best_score = self.best_score.max(snapshot.stats.score);
        self.snapshot = Some(snapshot);
    }

    pub fn finish_run(&mut self, summary: RunSummary) {
        self.best_score = self.best_score.max(summary.score);
        self.runs_finished += 1;
        self.last_run = Some(summary);
    }
}

#[cfg(test)]
mod tests {
    use runner_core::{RunnerConfig, RunnerSimulation};

    use super::*;

    #[test]
    fn screen_follows_phase() {
        let mut sim = RunnerSimulation::seeded(RunnerConfig::manual_spawns(), 1).unwrap();
        let mut state = AppState::new();
        assert_eq!(state.screen(), Screen::Start);

        state.observe(sim.snapshot());
        assert_eq!(state.screen(), Screen::Start);

        sim.start();
        state.observe(sim.snapshot());
        assert_eq!(state.screen(), Screen::Running);
    }

    #[test]
    fn best_score_survives_runs() {
        let mut state = AppState::new();
        state.finish_run(RunSummary {
            score: 120,
            coins: 12,
            distance: 12,
            max_combo: 3,
            milestones_reached: 1,
            ticks: 700,
        });
        state.finish_run(RunSummary {
            score: 40,
            coins: 4,
            distance: 4,
            max_combo: 1,
            milestones_reached: 0,
            ticks: 200,
        });
        assert_eq!(state.best_score, 120);
        assert_eq!(state.runs_finished, 2);
        assert_eq!(state.last_run.map(|run| run.score), Some(40));
    }
}
