//! Terminal UI frontend for the lane runner.
//!
//! `CliFrontend` implements [`client_frontend_core::Frontend`] as a pure UI
//! layer:
//! - Receives a RuntimeHandle for communication
//! - Does NOT own the Runtime (ticks are paced by `Runtime::run`)
//! - Subscribes to events, polls snapshots, and submits commands

mod app;
mod config;
mod input;
pub mod logging;
pub mod presentation;
mod state;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};
pub use input::{InputHandler, KeyAction, SwipeTracker};

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
