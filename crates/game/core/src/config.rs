use crate::error::ConfigError;

/// What `restart` does once a run has ended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum RestartPolicy {
    /// Reset the run and wait on the start screen for an explicit `start`.
    #[default]
    #[strum(to_string = "start", serialize = "return_to_start")]
    ReturnToStart,
    /// Reset the run and re-enter `Playing` immediately.
    Resume,
}

/// Tunable constants for a single runner simulation.
///
/// Every duration is a tick count; the host's frame interval is the unit.
/// Distances are in field pixels with `y` growing downward.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunnerConfig {
    // ===== field =====
    pub field_width: f32,
    pub field_height: f32,
    /// Top edge of the standing player when grounded.
    pub ground_y: f32,

    // ===== player =====
    pub player_width: f32,
    pub player_height: f32,
    /// Player height while sliding. The bottom edge stays anchored.
    pub slide_height: f32,
    pub jump_velocity: f32,
    pub gravity: f32,
    pub slide_ticks: u32,

    // ===== entities =====
    pub obstacle_width: f32,
    pub barrier_height: f32,
    pub train_height: f32,
    /// Probability in [0, 1] that a spawned obstacle is a low barrier.
    pub barrier_chance: f32,
    pub coin_size: f32,
    pub power_up_size: f32,

    // ===== spawning =====
    pub obstacle_interval_ticks: u32,
    pub coin_interval_ticks: u32,
    pub power_up_interval_ticks: u32,
    /// Random extra ticks (0..jitter) added to every spawn countdown.
    pub spawn_jitter_ticks: u32,

    // ===== speed =====
    pub base_speed: f32,
    pub max_speed: f32,
    /// Score points per unit of extra speed.
    pub speed_divisor: f32,

    // ===== scoring =====
    pub coin_value: u64,
    pub combo_bonus: u64,
    pub power_up_bonus: u64,
    pub combo_enabled: bool,

    // ===== power-ups =====
    pub power_ups_enabled: bool,
    pub shield_ticks: u32,
    pub magnet_ticks: u32,
    pub magnet_radius: f32,
    /// Pixels per tick a coin moves toward the player while the magnet is active.
    pub magnet_pull: f32,

    // ===== effects =====
    pub particle_burst: u32,
    pub particle_life: u32,
    pub particle_speed: f32,

    // ===== lifecycle =====
    pub restart_policy: RestartPolicy,
    /// Score thresholds in ascending order that emit a milestone event once per run.
    pub milestones: Vec<u64>,
}

impl RunnerConfig {
    pub const LANE_COUNT: usize = 3;

    pub const DEFAULT_FIELD_WIDTH: f32 = 400.0;
    pub const DEFAULT_FIELD_HEIGHT: f32 = 600.0;
    pub const DEFAULT_GROUND_Y: f32 = 500.0;

    pub const DEFAULT_PLAYER_WIDTH: f32 = 60.0;
    pub const DEFAULT_PLAYER_HEIGHT: f32 = 80.0;
    pub const DEFAULT_SLIDE_HEIGHT: f32 = 40.0;
    pub const DEFAULT_JUMP_VELOCITY: f32 = 15.0;
    pub const DEFAULT_GRAVITY: f32 = 0.75;
    /// 500 ms at 60 ticks per second.
    pub const DEFAULT_SLIDE_TICKS: u32 = 30;

    pub const DEFAULT_OBSTACLE_WIDTH: f32 = 50.0;
    pub const DEFAULT_BARRIER_HEIGHT: f32 = 50.0;
    pub const DEFAULT_TRAIN_HEIGHT: f32 = 100.0;
    pub const DEFAULT_BARRIER_CHANCE: f32 = 0.3;
    pub const DEFAULT_COIN_SIZE: f32 = 30.0;
    pub const DEFAULT_POWER_UP_SIZE: f32 = 30.0;

    pub const DEFAULT_OBSTACLE_INTERVAL_TICKS: u32 = 50;
    pub const DEFAULT_COIN_INTERVAL_TICKS: u32 = 33;
    pub const DEFAULT_POWER_UP_INTERVAL_TICKS: u32 = 600;
    pub const DEFAULT_SPAWN_JITTER_TICKS: u32 = 20;

    pub const DEFAULT_BASE_SPEED: f32 = 5.0;
    pub const DEFAULT_MAX_SPEED: f32 = 15.0;
    pub const DEFAULT_SPEED_DIVISOR: f32 = 1000.0;

    pub const DEFAULT_COIN_VALUE: u64 = 10;
    pub const DEFAULT_COMBO_BONUS: u64 = 2;
    pub const DEFAULT_POWER_UP_BONUS: u64 = 50;

    pub const DEFAULT_SHIELD_TICKS: u32 = 300;
    pub const DEFAULT_MAGNET_TICKS: u32 = 300;
    pub const DEFAULT_MAGNET_RADIUS: f32 = 150.0;
    pub const DEFAULT_MAGNET_PULL: f32 = 8.0;

    pub const DEFAULT_PARTICLE_BURST: u32 = 8;
    pub const DEFAULT_PARTICLE_LIFE: u32 = 30;
    pub const DEFAULT_PARTICLE_SPEED: f32 = 5.0;

    pub const DEFAULT_MILESTONES: [u64; 9] = [
        100, 500, 1_000, 5_000, 10_000, 50_000, 100_000, 200_000, 300_000,
    ];

    pub fn new() -> Self {
        Self {
            field_width: Self::DEFAULT_FIELD_WIDTH,
            field_height: Self::DEFAULT_FIELD_HEIGHT,
            ground_y: Self::DEFAULT_GROUND_Y,
            player_width: Self::DEFAULT_PLAYER_WIDTH,
            player_height: Self::DEFAULT_PLAYER_HEIGHT,
            slide_height: Self::DEFAULT_SLIDE_HEIGHT,
            jump_velocity: Self::DEFAULT_JUMP_VELOCITY,
            gravity: Self::DEFAULT_GRAVITY,
            slide_ticks: Self::DEFAULT_SLIDE_TICKS,
            obstacle_width: Self::DEFAULT_OBSTACLE_WIDTH,
            barrier_height: Self::DEFAULT_BARRIER_HEIGHT,
            train_height: Self::DEFAULT_TRAIN_HEIGHT,
            barrier_chance: Self::DEFAULT_BARRIER_CHANCE,
            coin_size: Self::DEFAULT_COIN_SIZE,
            power_up_size: Self::DEFAULT_POWER_UP_SIZE,
            obstacle_interval_ticks: Self::DEFAULT_OBSTACLE_INTERVAL_TICKS,
            coin_interval_ticks: Self::DEFAULT_COIN_INTERVAL_TICKS,
            power_up_interval_ticks: Self::DEFAULT_POWER_UP_INTERVAL_TICKS,
            spawn_jitter_ticks: Self::DEFAULT_SPAWN_JITTER_TICKS,
            base_speed: Self::DEFAULT_BASE_SPEED,
            max_speed: Self::DEFAULT_MAX_SPEED,
            speed_divisor: Self::DEFAULT_SPEED_DIVISOR,
            coin_value: Self::DEFAULT_COIN_VALUE,
            combo_bonus: Self::DEFAULT_COMBO_BONUS,
            power_up_bonus: Self::DEFAULT_POWER_UP_BONUS,
            combo_enabled: true,
            power_ups_enabled: true,
            shield_ticks: Self::DEFAULT_SHIELD_TICKS,
            magnet_ticks: Self::DEFAULT_MAGNET_TICKS,
            magnet_radius: Self::DEFAULT_MAGNET_RADIUS,
            magnet_pull: Self::DEFAULT_MAGNET_PULL,
            particle_burst: Self::DEFAULT_PARTICLE_BURST,
            particle_life: Self::DEFAULT_PARTICLE_LIFE,
            particle_speed: Self::DEFAULT_PARTICLE_SPEED,
            restart_policy: RestartPolicy::default(),
            milestones: Self::DEFAULT_MILESTONES.to_vec(),
        }
    }

    /// Configuration without automatic spawning.
    ///
    /// Entities only appear through the injection helpers, which makes
    /// collision scenarios exact.
    pub fn manual_spawns() -> Self {
        Self {
            obstacle_interval_ticks: 0,
            coin_interval_ticks: 0,
            power_up_interval_ticks: 0,
            ..Self::new()
        }
    }

    pub fn with_restart_policy(mut self, policy: RestartPolicy) -> Self {
        self.restart_policy = policy;
        self
    }

    pub fn with_power_ups(mut self, enabled: bool) -> Self {
        self.power_ups_enabled = enabled;
        self
    }

    pub fn with_combo(mut self, enabled: bool) -> Self {
        self.combo_enabled = enabled;
        self
    }

    /// Horizontal centre of a lane, in field pixels.
    pub fn lane_center(&self, lane: crate::Lane) -> f32 {
        self.field_width * lane.fraction()
    }

    /// Rejects constants that would break the simulation invariants.
    ///
    /// A spawn interval of zero disables that spawner and is accepted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("slide_height", self.slide_height),
            ("jump_velocity", self.jump_velocity),
            ("gravity", self.gravity),
            ("base_speed", self.base_speed),
            ("speed_divisor", self.speed_divisor),
        ];
        for (field, value) in positive {
            if !(value > 0.0) || !value.is_finite() {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        if self.ground_y + self.player_height > self.field_height {
            return Err(ConfigError::GroundOutsideField {
                ground_y: self.ground_y,
                field_height: self.field_height,
            });
        }
        if self.slide_height >= self.player_height {
            return Err(ConfigError::SlideNotShorter {
                slide: self.slide_height,
                stand: self.player_height,
            });
        }
        if self.max_speed < self.base_speed {
            return Err(ConfigError::SpeedRange {
                base: self.base_speed,
                max: self.max_speed,
            });
        }
        if !(0.0..=1.0).contains(&self.barrier_chance) {
            return Err(ConfigError::Probability {
                field: "barrier_chance",
                value: self.barrier_chance,
            });
        }
        if self.slide_ticks == 0 {
            return Err(ConfigError::ZeroDuration {
                field: "slide_ticks",
            });
        }
        if self.milestones.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::MilestonesNotAscending);
        }
        Ok(())
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(RunnerConfig::default().validate(), Ok(()));
        assert_eq!(RunnerConfig::manual_spawns().validate(), Ok(()));
    }

    #[test]
    fn rejects_slide_taller_than_stand() {
        let config = RunnerConfig {
            slide_height: 90.0,
            ..RunnerConfig::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SlideNotShorter { .. })
        ));
    }

    #[test]
    fn rejects_inverted_speed_range() {
        let config = RunnerConfig {
            max_speed: 2.0,
            ..RunnerConfig::new()
        };
        assert!(matches!(config.validate(), Err(ConfigError::SpeedRange { .. })));
    }

    #[test]
    fn rejects_unsorted_milestones() {
        let config = RunnerConfig {
            milestones: vec![100, 50],
            ..RunnerConfig::new()
        };
        assert_eq!(config.validate(), Err(ConfigError::MilestonesNotAscending));
    }

    #[test]
    fn rejects_nan_gravity() {
        let config = RunnerConfig {
            gravity: f32::NAN,
            ..RunnerConfig::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive { field: "gravity", .. })
        ));
    }

    #[test]
    fn restart_policy_parses_env_spellings() {
        assert_eq!("start".parse(), Ok(RestartPolicy::ReturnToStart));
        assert_eq!("return_to_start".parse(), Ok(RestartPolicy::ReturnToStart));
        assert_eq!("resume".parse(), Ok(RestartPolicy::Resume));
        assert!("later".parse::<RestartPolicy>().is_err());
    }
}
