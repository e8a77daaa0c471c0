//! Cross-frontend primitives for presenting the runner.
//!
//! Houses message logging, event formatting, and the lane-grid view model
//! that both the terminal client and future graphical clients can reuse.
pub mod config;
pub mod event;
pub mod frontend;
pub mod message;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig, MessageVisibility};
pub use event::{EventConsumer, EventImpact, RunMessages};
pub use frontend::Frontend;
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use view_model::{Cell, LaneGrid};
