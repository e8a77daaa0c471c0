//! Mouse drags treated as touch swipes.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use runner_core::{DEFAULT_SWIPE_THRESHOLD, InputCommand, classify_swipe};

/// Approximate pixel size of one terminal cell, used to express drags in the
/// same units as touch swipes.
const CELL_WIDTH_PX: f32 = 8.0;
const CELL_HEIGHT_PX: f32 = 16.0;

/// Remembers where a left-button drag began.
#[derive(Debug, Clone, Copy)]
pub struct SwipeTracker {
    origin: Option<(u16, u16)>,
    threshold: f32,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            origin: None,
            threshold,
        }
    }

    /// Feeds a mouse event; returns a command when a drag completes.
    pub fn handle_mouse(&mut self, event: MouseEvent) -> Option<InputCommand> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.origin = Some((event.column, event.row));
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (column, row) = self.origin.take()?;
                let dx = (f32::from(event.column) - f32::from(column)) * CELL_WIDTH_PX;
                let dy = (f32::from(event.row) - f32::from(row)) * CELL_HEIGHT_PX;
                classify_swipe(dx, dy, self.threshold)
            }
            _ => None,
        }
    }
}
