//! Worker tasks that back the runtime orchestration.
//!
//! The simulation worker owns the runner and serializes every command and
//! tick through a single channel.

mod simulation;

pub use simulation::{AdvanceOutcome, Command, Injection, SimulationWorker};
