//! Terminal key handling: maps crossterm key events to runner inputs.
//!
//! Most terminals only report key presses. When the terminal supports the
//! keyboard enhancement protocol it also reports releases, and holding Down
//! ducks until the key is let go. Otherwise Down toggles the duck.

use crate::runner::RunnerInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the session loop should do with a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Runner(RunnerInput),
    Quit,
    Ignore,
}

#[derive(Debug, Clone, Copy)]
pub struct KeyMapper {
    /// True when the terminal reports key release events.
    pub reports_release: bool,
}

impl KeyMapper {
    pub fn new(reports_release: bool) -> Self {
        Self { reports_release }
    }

    pub fn map(&self, key: KeyEvent) -> InputAction {
        match key.kind {
            KeyEventKind::Release => {
                if self.reports_release && key.code == KeyCode::Down {
                    InputAction::Runner(RunnerInput::Stand)
                } else {
                    InputAction::Ignore
                }
            }
            // Auto-repeat while Down is held must not re-toggle the duck
            KeyEventKind::Repeat if key.code == KeyCode::Down => InputAction::Ignore,
            KeyEventKind::Press | KeyEventKind::Repeat => self.map_press(key),
        }
    }

    fn map_press(&self, key: KeyEvent) -> InputAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return InputAction::Quit;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputAction::Quit,
            KeyCode::Char(' ') | KeyCode::Up => InputAction::Runner(RunnerInput::Jump),
            KeyCode::Down => {
                if self.reports_release {
                    InputAction::Runner(RunnerInput::Duck)
                } else {
                    InputAction::Runner(RunnerInput::ToggleDuck)
                }
            }
            KeyCode::Left => InputAction::Runner(RunnerInput::SlowDown),
            KeyCode::Right => InputAction::Runner(RunnerInput::SpeedUp),
            _ => InputAction::Runner(RunnerInput::Other),
        }
    }
}
