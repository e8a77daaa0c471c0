//! Gesture classification for touch-style input sources.

use crate::action::InputCommand;

/// Minimum travel, in pixels, before a swipe counts as a command.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Resolves a swipe vector to the nearest directional command.
///
/// The dominant axis wins; ties resolve vertically. A swipe must travel
/// strictly more than `min_distance` along that axis, otherwise it is
/// ignored. Screen coordinates grow downward, so an upward swipe (`dy < 0`)
/// is a jump.
pub fn classify_swipe(dx: f32, dy: f32, min_distance: f32) -> Option<InputCommand> {
    if dx.abs() > dy.abs() {
        if dx.abs() <= min_distance {
            return None;
        }
        Some(if dx > 0.0 {
            InputCommand::MoveRight
        } else {
            InputCommand::MoveLeft
        })
    } else {
        if dy.abs() <= min_distance {
            return None;
        }
        Some(if dy < 0.0 {
            InputCommand::Jump
        } else {
            InputCommand::Slide
        })
    }
}
