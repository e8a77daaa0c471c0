//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination and configuration so clients can
//! bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("invalid runner configuration")]
    InvalidConfig(#[from] runner_core::ConfigError),

    #[error("tick rate must be at least 1 Hz")]
    ZeroTickRate,

    #[error("tick rate {0} Hz is above the supported maximum")]
    TickRateTooHigh(u32),
}
