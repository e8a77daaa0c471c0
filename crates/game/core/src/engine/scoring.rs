//! Score-derived quantities, power-up timers and milestones.

use super::events::SimEvent;
use crate::config::RunnerConfig;
use crate::state::{PowerUpKind, RunState};

/// Points for a coin picked up while holding `combo`.
pub(super) fn coin_value(config: &RunnerConfig, combo: u32) -> u64 {
    let combo = if config.combo_enabled { combo as u64 } else { 0 };
    config.coin_value + combo * config.combo_bonus
}

/// `game_speed = min(max, base + score / divisor)`, `distance = score / 10`.
///
/// Unvalidated configs with `max < base` pin the speed to `max`.
pub(super) fn update_speed(state: &mut RunState, config: &RunnerConfig) {
    let stats = &mut state.stats;
    let speed = config.base_speed + stats.score as f32 / config.speed_divisor;
    stats.game_speed = speed.max(config.base_speed).min(config.max_speed);
    stats.distance = stats.score / 10;
}

pub(super) fn tick_power_ups(state: &mut RunState, events: &mut Vec<SimEvent>) {
    let player = &mut state.player;
    if player.shield_ticks > 0 {
        player.shield_ticks -= 1;
        if player.shield_ticks == 0 {
            events.push(SimEvent::PowerUpExpired {
                kind: PowerUpKind::Shield,
            });
        }
    }
    if player.magnet_ticks > 0 {
        player.magnet_ticks -= 1;
        if player.magnet_ticks == 0 {
            events.push(SimEvent::PowerUpExpired {
                kind: PowerUpKind::Magnet,
            });
        }
    }
}

/// Emits one event per milestone crossed since the last check.
pub(super) fn check_milestones(
    state: &mut RunState,
    config: &RunnerConfig,
    events: &mut Vec<SimEvent>,
) {
    let stats = &mut state.stats;
    while let Some(&milestone) = config.milestones.get(stats.milestones_reached as usize) {
        if stats.score < milestone {
            break;
        }
        stats.milestones_reached += 1;
        events.push(SimEvent::MilestoneReached {
            milestone,
            score: stats.score,
        });
    }
}
