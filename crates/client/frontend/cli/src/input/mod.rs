//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use runner_core::{Command, InputCommand};

mod swipe;
pub use swipe::SwipeTracker;

/// High-level outcome of processing a keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Send the decoded command to the runtime.
    Submit(Command),
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into runner commands.
#[derive(Debug, Default, Clone, Copy)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    ///
    /// Only presses count; repeats and releases are ignored so a held key
    /// does not change lanes twice.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if key.kind != KeyEventKind::Press {
            return KeyAction::None;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Left => input(InputCommand::MoveLeft),
            KeyCode::Right => input(InputCommand::MoveRight),
            KeyCode::Up => input(InputCommand::Jump),
            KeyCode::Down => input(InputCommand::Slide),
            KeyCode::Enter => KeyAction::Submit(Command::Start),
            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        match raw.to_ascii_lowercase() {
            'q' => KeyAction::Quit,
            'a' => input(InputCommand::MoveLeft),
            'd' => input(InputCommand::MoveRight),
            'w' | ' ' => input(InputCommand::Jump),
            's' => input(InputCommand::Slide),
            'r' => KeyAction::Submit(Command::Restart),
            _ => KeyAction::None,
        }
    }
}

fn input(command: InputCommand) -> KeyAction {
    KeyAction::Submit(Command::Input(command))
}
