//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod clean;
mod simulate;
mod tail_logs;

pub use clean::Clean;
pub use simulate::Simulate;
pub use tail_logs::TailLogs;
