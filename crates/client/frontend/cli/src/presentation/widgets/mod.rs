//! Widget modules for UI rendering.
//!
//! Each widget is a pure function that reads the latest snapshot (or UI
//! state) and renders into a terminal frame.

pub mod footer;
pub mod game_over;
pub mod header;
pub mod lanes;
pub mod messages;
pub mod scoreboard;
pub mod start_screen;
