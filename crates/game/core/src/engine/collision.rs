//! Lane-local collision resolution.
//!
//! Evaluated once per tick in a fixed order: power-ups, obstacles, coins.
//! A fatal obstacle hit ends the run and skips the coin step.

use super::events::{ClearedBy, SimEvent};
use super::{scoring, spawn};
use crate::config::RunnerConfig;
use crate::env::RandomSource;
use crate::state::{Obstacle, ObstacleKind, Phase, Player, PowerUpKind, RunState};

pub(super) fn resolve<R: RandomSource>(
    state: &mut RunState,
    config: &RunnerConfig,
    rng: &mut R,
    events: &mut Vec<SimEvent>,
) {
    collect_power_ups(state, config, events);
    if hit_obstacle(state, config, events) {
        return;
    }
    collect_coins(state, config, rng, events);
}

fn collect_power_ups(state: &mut RunState, config: &RunnerConfig, events: &mut Vec<SimEvent>) {
    let body = state.player.span(config);
    let lane = state.player.lane;

    let mut picked = Vec::new();
    state.power_ups.retain(|power_up| {
        let hit = power_up.lane == lane && power_up.span().overlaps(&body);
        if hit {
            picked.push((power_up.id, power_up.kind));
        }
        !hit
    });

    for (id, kind) in picked {
        match kind {
            PowerUpKind::Shield => state.player.shield_ticks = config.shield_ticks,
            PowerUpKind::Magnet => state.player.magnet_ticks = config.magnet_ticks,
        }
        state.stats.score += config.power_up_bonus;
        if config.combo_enabled {
            state.stats.bump_combo();
        }
        events.push(SimEvent::PowerUpCollected { id, kind });
    }
}

/// Returns true when the run ended.
fn hit_obstacle(state: &mut RunState, config: &RunnerConfig, events: &mut Vec<SimEvent>) -> bool {
    if state.player.is_invulnerable() {
        return false;
    }
    let body = state.player.span(config);
    let lane = state.player.lane;

    for obstacle in state
        .obstacles
        .iter_mut()
        .filter(|obstacle| obstacle.lane == lane && obstacle.span().overlaps(&body))
    {
        match evasion(&state.player, obstacle, config) {
            Some(by) => {
                if !obstacle.cleared {
                    obstacle.cleared = true;
                    events.push(SimEvent::ObstacleCleared {
                        id: obstacle.id,
                        by,
                    });
                }
            }
            None => {
                state.stats.combo = 0;
                let from = state.phase;
                state.phase = Phase::GameOver;
                events.push(SimEvent::Crashed {
                    id: obstacle.id,
                    kind: obstacle.kind,
                });
                events.push(SimEvent::PhaseChanged {
                    from,
                    to: Phase::GameOver,
                });
                return true;
            }
        }
    }
    false
}

/// How the player is currently passing `obstacle`, if at all.
fn evasion(player: &Player, obstacle: &Obstacle, config: &RunnerConfig) -> Option<ClearedBy> {
    if player.is_jumping() && player.jump_height > obstacle.height {
        return Some(ClearedBy::Jump);
    }
    if player.is_sliding()
        && obstacle.kind == ObstacleKind::Barrier
        && config.slide_height < obstacle.height
    {
        return Some(ClearedBy::Slide);
    }
    None
}

fn collect_coins<R: RandomSource>(
    state: &mut RunState,
    config: &RunnerConfig,
    rng: &mut R,
    events: &mut Vec<SimEvent>,
) {
    let body = state.player.span(config);
    let lane = state.player.lane;

    let mut picked = Vec::new();
    state.coins.retain(|coin| {
        let hit = !coin.collected && coin.lane == lane && coin.span().overlaps(&body);
        if hit {
            picked.push((coin.id, coin.span().center()));
        }
        !hit
    });

    let x = config.lane_center(lane);
    for (id, center_y) in picked {
        let value = scoring::coin_value(config, state.stats.combo);
        state.stats.score += value;
        state.stats.coins_collected += 1;
        if config.combo_enabled {
            state.stats.bump_combo();
        }
        events.push(SimEvent::CoinCollected {
            id,
            lane,
            value,
            combo: state.stats.combo,
        });
        spawn::particle_burst(state, config, rng, x, center_y);
    }
}
