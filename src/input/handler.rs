use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    GameAction(Action),
    Quit,
    None,
}

/// Maps key presses to game actions
///
/// Holes are numbered like a phone keypad, `1` top-left through `9`
/// bottom-right. The handler doesn't know which screen is showing; the
/// session drops actions that don't belong to it.
pub struct InputHandler {
    grid_size: usize,
}

impl InputHandler {
    pub fn new(grid_size: usize) -> Self {
        Self { grid_size }
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Holes
            KeyCode::Char(c @ '1'..='9') => {
                let cell = (c as u32 - '1' as u32) as usize;
                if cell < self.grid_size {
                    KeyAction::GameAction(Action::Whack(cell))
                } else {
                    KeyAction::None
                }
            }

            // Round control
            KeyCode::Char(' ') | KeyCode::Enter => KeyAction::GameAction(Action::StartRound),

            // Settings
            KeyCode::Char('o') | KeyCode::Char('O') => {
                KeyAction::GameAction(Action::OpenSettings)
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                KeyAction::GameAction(Action::ResetHighScore)
            }
            KeyCode::Esc => KeyAction::GameAction(Action::CloseSettings),

            KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(9)
    }
}
