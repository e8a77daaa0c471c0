use super::{Lane, Span};
use crate::config::RunnerConfig;

/// Vertical movement state of the player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JumpState {
    #[default]
    Grounded,
    Jumping,
}

/// The single runner controlled by input commands.
///
/// All timers count remaining ticks; zero means inactive.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub lane: Lane,
    pub jump: JumpState,
    /// Height above the ground, never negative.
    pub jump_height: f32,
    /// Upward velocity in pixels per tick; negative while falling.
    pub jump_velocity: f32,
    pub slide_ticks: u32,
    pub shield_ticks: u32,
    pub magnet_ticks: u32,
}

impl Player {
    pub fn is_jumping(&self) -> bool {
        self.jump == JumpState::Jumping
    }

    pub fn is_sliding(&self) -> bool {
        self.slide_ticks > 0
    }

    pub fn is_invulnerable(&self) -> bool {
        self.shield_ticks > 0
    }

    pub fn has_magnet(&self) -> bool {
        self.magnet_ticks > 0
    }

    /// Current body height; shrinks while sliding.
    pub fn height(&self, config: &RunnerConfig) -> f32 {
        if self.is_sliding() {
            config.slide_height
        } else {
            config.player_height
        }
    }

    /// Bounding box on the vertical axis. The bottom edge sits on the
    /// ground while grounded, whether standing or sliding.
    pub fn span(&self, config: &RunnerConfig) -> Span {
        let height = self.height(config);
        let top = config.ground_y + (config.player_height - height) - self.jump_height;
        Span::new(top, height)
    }

    /// Horizontal centre in field pixels.
    pub fn x(&self, config: &RunnerConfig) -> f32 {
        config.lane_center(self.lane)
    }
}
