//! Per-tick motion: player jump/slide, scrolling, magnet pull and pruning.

use crate::config::RunnerConfig;
use crate::state::{JumpState, Player, RunState};

/// Integrates the jump arc and counts down the slide timer.
pub(super) fn advance_player(player: &mut Player, config: &RunnerConfig) {
    if player.jump == JumpState::Jumping {
        player.jump_height += player.jump_velocity;
        player.jump_velocity -= config.gravity;
        if player.jump_height <= 0.0 {
            player.jump_height = 0.0;
            player.jump_velocity = 0.0;
            player.jump = JumpState::Grounded;
        }
    }
    player.slide_ticks = player.slide_ticks.saturating_sub(1);
}

/// Moves every scrolling entity down by the game speed and ages particles.
pub(super) fn scroll(state: &mut RunState) {
    let speed = state.stats.game_speed;
    for obstacle in &mut state.obstacles {
        obstacle.y += speed;
    }
    for coin in &mut state.coins {
        coin.y += speed;
    }
    for power_up in &mut state.power_ups {
        power_up.y += speed;
    }
    for particle in &mut state.particles {
        particle.x += particle.vx;
        particle.y += particle.vy;
        particle.life = particle.life.saturating_sub(1);
    }
}

/// Pulls coins in the player's lane toward the player's centre.
///
/// Only coins whose centre lies within `magnet_radius` move, by at most
/// `magnet_pull` per tick and never past the player's centre. A negative
/// pull counts as zero.
pub(super) fn attract_coins(state: &mut RunState, config: &RunnerConfig) {
    if !state.player.has_magnet() {
        return;
    }
    let target = state.player.span(config).center();
    let lane = state.player.lane;
    let pull = config.magnet_pull.max(0.0);
    for coin in state
        .coins
        .iter_mut()
        .filter(|coin| coin.lane == lane && !coin.collected)
    {
        let gap = target - coin.span().center();
        if gap.abs() <= config.magnet_radius {
            coin.y += gap.max(-pull).min(pull);
        }
    }
}

/// Drops entities below the visible field and spent particles.
pub(super) fn prune(state: &mut RunState, config: &RunnerConfig) {
    let limit = config.field_height;
    state.obstacles.retain(|obstacle| obstacle.y <= limit);
    state.coins.retain(|coin| coin.y <= limit && !coin.collected);
    state.power_ups.retain(|power_up| power_up.y <= limit);
    state
        .particles
        .retain(|particle| particle.is_alive() && particle.y <= limit);
}
