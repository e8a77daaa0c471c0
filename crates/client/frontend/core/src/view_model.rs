//! Lane-grid projection of a [`Snapshot`].
//!
//! The field is cut into horizontal bands; each band holds one [`Cell`] per
//! lane. Frontends with coarse output (terminals) draw the grid instead of
//! raw coordinates.
use runner_core::{Lane, ObstacleKind, PowerUpKind, Snapshot, Span};

const LANES: usize = Lane::ALL.len();

/// Content of one lane in one band, highest draw priority wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Cell {
    #[default]
    Empty,
    Particle,
    Coin,
    Shield,
    Magnet,
    Barrier,
    Train,
    Player,
}

impl Cell {
    fn power_up(kind: PowerUpKind) -> Self {
        match kind {
            PowerUpKind::Shield => Cell::Shield,
            PowerUpKind::Magnet => Cell::Magnet,
        }
    }

    fn obstacle(kind: ObstacleKind) -> Self {
        match kind {
            ObstacleKind::Barrier => Cell::Barrier,
            ObstacleKind::Train => Cell::Train,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LaneGrid {
    /// Top band first.
    pub rows: Vec<[Cell; LANES]>,
}

impl LaneGrid {
    pub fn from_snapshot(snapshot: &Snapshot, bands: usize) -> Self {
        let mut grid = Self {
            rows: vec![[Cell::Empty; Lane::ALL.len()]; bands.max(1)],
        };
        let scale = grid.rows.len() as f32 / snapshot.field_height.max(1.0);

        for particle in &snapshot.particles {
            let lane = lane_at(particle.x, snapshot.field_width);
            grid.paint_point(particle.y * scale, lane, Cell::Particle);
        }
        for coin in &snapshot.coins {
            grid.paint(coin.span(), scale, coin.lane, Cell::Coin);
        }
        for power_up in &snapshot.power_ups {
            grid.paint(power_up.span(), scale, power_up.lane, Cell::power_up(power_up.kind));
        }
        for obstacle in &snapshot.obstacles {
            grid.paint(obstacle.span(), scale, obstacle.lane, Cell::obstacle(obstacle.kind));
        }
        let player = &snapshot.player;
        grid.paint(Span::new(player.y, player.height), scale, player.lane, Cell::Player);

        grid
    }

    pub fn cell(&self, row: usize, lane: Lane) -> Cell {
        self.rows
            .get(row)
            .map(|cells| cells[usize::from(lane.index())])
            .unwrap_or_default()
    }

    fn paint(&mut self, span: Span, scale: f32, lane: Lane, cell: Cell) {
        let last = self.rows.len() as f32 - 1.0;
        if span.bottom < 0.0 || span.top * scale > last + 1.0 {
            return;
        }
        let first = (span.top * scale).floor().clamp(0.0, last) as usize;
        // Bottom edge is exclusive.
        let end = ((span.bottom * scale).ceil() - 1.0).clamp(0.0, last) as usize;
        for row in first..=end.max(first) {
            self.set(row, lane, cell);
        }
    }

    fn paint_point(&mut self, y: f32, lane: Lane, cell: Cell) {
        if y >= 0.0 && (y as usize) < self.rows.len() {
            self.set(y as usize, lane, cell);
        }
    }

    fn set(&mut self, row: usize, lane: Lane, cell: Cell) {
        let slot = &mut self.rows[row][usize::from(lane.index())];
        *slot = (*slot).max(cell);
    }
}

/// Nearest lane to a horizontal field coordinate.
fn lane_at(x: f32, field_width: f32) -> Lane {
    let fraction = x / field_width.max(1.0);
    if fraction < 0.375 {
        Lane::Left
    } else if fraction < 0.625 {
        Lane::Center
    } else {
        Lane::Right
    }
}

#[cfg(test)]
mod tests {
    use runner_core::{ObstacleKind, RunnerConfig, RunnerSimulation};

    use super::*;

    fn playing_sim() -> RunnerSimulation {
        let mut sim = RunnerSimulation::seeded(RunnerConfig::manual_spawns(), 3).unwrap();
        sim.start();
        sim
    }

    #[test]
    fn player_occupies_bottom_bands_of_its_lane() {
        let sim = playing_sim();
        // 60 bands over a 600 field: one band per 10 units; body spans 500..580.
        let grid = LaneGrid::from_snapshot(&sim.snapshot(), 60);
        assert_eq!(grid.cell(49, Lane::Center), Cell::Empty);
        assert_eq!(grid.cell(50, Lane::Center), Cell::Player);
        assert_eq!(grid.cell(57, Lane::Center), Cell::Player);
        assert_eq!(grid.cell(58, Lane::Center), Cell::Empty);
        assert_eq!(grid.cell(55, Lane::Left), Cell::Empty);
    }

    #[test]
    fn obstacles_outrank_coins_in_the_same_band() {
        let mut sim = playing_sim();
        sim.spawn_coin(Lane::Left, 100.0);
        sim.spawn_obstacle(Lane::Left, 100.0, ObstacleKind::Barrier);
        sim.spawn_obstacle(Lane::Right, 0.0, ObstacleKind::Train);

        let grid = LaneGrid::from_snapshot(&sim.snapshot(), 60);
        assert_eq!(grid.cell(10, Lane::Left), Cell::Barrier);
        assert_eq!(grid.cell(0, Lane::Right), Cell::Train);
        assert_eq!(grid.cell(9, Lane::Right), Cell::Train);
        assert_eq!(grid.cell(10, Lane::Right), Cell::Empty);
    }

    #[test]
    fn out_of_range_rows_read_as_empty() {
        let grid = LaneGrid::from_snapshot(&playing_sim().snapshot(), 12);
        assert_eq!(grid.rows.len(), 12);
        assert_eq!(grid.cell(99, Lane::Center), Cell::Empty);
    }

    #[test]
    fn lane_lookup_splits_between_centres() {
        assert_eq!(lane_at(100.0, 400.0), Lane::Left);
        assert_eq!(lane_at(200.0, 400.0), Lane::Center);
        assert_eq!(lane_at(300.0, 400.0), Lane::Right);
    }
}
