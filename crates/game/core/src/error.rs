//! Errors surfaced by runner-core.
//!
//! The simulation itself never fails: invalid commands are ignored and
//! collisions are ordinary state transitions. The only fallible surface is
//! configuration validation, performed once before a simulation is built.

/// Inconsistent [`RunnerConfig`](crate::RunnerConfig) constants.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be a positive finite number (got {value})")]
    NotPositive { field: &'static str, value: f32 },

    #[error("player standing at y={ground_y} does not fit a field of height {field_height}")]
    GroundOutsideField { ground_y: f32, field_height: f32 },

    #[error("slide height {slide} must be lower than standing height {stand}")]
    SlideNotShorter { slide: f32, stand: f32 },

    #[error("max speed {max} is below base speed {base}")]
    SpeedRange { base: f32, max: f32 },

    #[error("{field} must be a probability in [0, 1] (got {value})")]
    Probability { field: &'static str, value: f32 },

    #[error("{field} must be at least one tick")]
    ZeroDuration { field: &'static str },

    #[error("milestones must be strictly ascending")]
    MilestonesNotAscending,
}
