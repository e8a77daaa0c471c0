//! Countdown spawners and entity construction.

use crate::config::RunnerConfig;
use crate::env::RandomSource;
use crate::state::{
    Coin, EntityId, Lane, Obstacle, ObstacleKind, Particle, PowerUp, PowerUpKind, RunState,
};

/// Fires every spawner whose countdown reaches zero this tick.
pub(super) fn run_spawners<R: RandomSource>(
    state: &mut RunState,
    config: &RunnerConfig,
    rng: &mut R,
) {
    if countdown(&mut state.spawn.obstacle) {
        let lane = random_lane(rng);
        let kind = if rng.chance(config.barrier_chance) {
            ObstacleKind::Barrier
        } else {
            ObstacleKind::Train
        };
        let height = obstacle_height(config, kind);
        spawn_obstacle(state, config, lane, -height, kind);
        state.spawn.obstacle = next_interval(config.obstacle_interval_ticks, config, rng);
    }

    if countdown(&mut state.spawn.coin) {
        let lane = random_lane(rng);
        spawn_coin(state, config, lane, -config.coin_size);
        state.spawn.coin = next_interval(config.coin_interval_ticks, config, rng);
    }

    if config.power_ups_enabled && countdown(&mut state.spawn.power_up) {
        let lane = random_lane(rng);
        let kind = if rng.chance(0.5) {
            PowerUpKind::Shield
        } else {
            PowerUpKind::Magnet
        };
        spawn_power_up(state, config, lane, -config.power_up_size, kind);
        state.spawn.power_up = next_interval(config.power_up_interval_ticks, config, rng);
    }
}

/// Decrements a countdown, reporting when it hits zero. Disabled (zero)
/// countdowns never fire.
fn countdown(timer: &mut u32) -> bool {
    if *timer == 0 {
        return false;
    }
    *timer -= 1;
    *timer == 0
}

fn next_interval<R: RandomSource>(base: u32, config: &RunnerConfig, rng: &mut R) -> u32 {
    if base == 0 {
        return 0;
    }
    base + rng.below(config.spawn_jitter_ticks)
}

fn random_lane<R: RandomSource>(rng: &mut R) -> Lane {
    Lane::from_index(rng.below(RunnerConfig::LANE_COUNT as u32) as u8).unwrap_or_default()
}

pub(super) fn obstacle_height(config: &RunnerConfig, kind: ObstacleKind) -> f32 {
    match kind {
        ObstacleKind::Barrier => config.barrier_height,
        ObstacleKind::Train => config.train_height,
    }
}

pub(super) fn spawn_obstacle(
    state: &mut RunState,
    config: &RunnerConfig,
    lane: Lane,
    y: f32,
    kind: ObstacleKind,
) -> EntityId {
    let id = state.allocate_entity_id();
    state.obstacles.push(Obstacle {
        id,
        lane,
        y,
        width: config.obstacle_width,
        height: obstacle_height(config, kind),
        kind,
        cleared: false,
    });
    id
}

pub(super) fn spawn_coin(state: &mut RunState, config: &RunnerConfig, lane: Lane, y: f32) -> EntityId {
    let id = state.allocate_entity_id();
    state.coins.push(Coin {
        id,
        lane,
        y,
        size: config.coin_size,
        collected: false,
    });
    id
}

pub(super) fn spawn_power_up(
    state: &mut RunState,
    config: &RunnerConfig,
    lane: Lane,
    y: f32,
    kind: PowerUpKind,
) -> EntityId {
    let id = state.allocate_entity_id();
    state.power_ups.push(PowerUp {
        id,
        lane,
        y,
        size: config.power_up_size,
        kind,
    });
    id
}

/// Emits a fixed-size spark burst centred on `(x, y)`.
pub(super) fn particle_burst<R: RandomSource>(
    state: &mut RunState,
    config: &RunnerConfig,
    rng: &mut R,
    x: f32,
    y: f32,
) {
    for _ in 0..config.particle_burst {
        let vx = rng.symmetric(config.particle_speed);
        let vy = rng.symmetric(config.particle_speed);
        state.particles.push(Particle {
            x,
            y,
            vx,
            vy,
            life: config.particle_life,
            max_life: config.particle_life,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_fires_once_at_zero() {
        let mut timer = 2;
        assert!(!countdown(&mut timer));
        assert!(countdown(&mut timer));
        assert!(!countdown(&mut timer));
    }
}
