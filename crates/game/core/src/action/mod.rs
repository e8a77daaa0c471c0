//! Commands accepted by the simulation.
//!
//! Input commands steer the player; lifecycle commands reset the run. Both
//! are plain values so hosts can queue them and apply them strictly between
//! ticks.
use crate::state::Phase;

/// Player steering command.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum InputCommand {
    MoveLeft,
    MoveRight,
    Jump,
    Slide,
}

/// Anything a host may send to the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    Input(InputCommand),
    Start,
    Restart,
}

impl From<InputCommand> for Command {
    fn from(input: InputCommand) -> Self {
        Command::Input(input)
    }
}

/// Result of applying a [`Command`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandOutcome {
    /// The command had no effect in the current state.
    Ignored,
    /// Player state changed.
    Applied,
    /// The run was reset, possibly moving to another phase.
    Reset { from: Phase, to: Phase },
}

impl CommandOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, CommandOutcome::Ignored)
    }
}
