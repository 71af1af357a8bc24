//! Key mapping from terminal events to game commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a game command.
///
/// Letters are matched case-insensitively. Keys without a binding map to
/// [`Command::None`].
pub fn map_key(key: KeyEvent) -> Command {
    if should_quit(key) {
        return Command::Quit;
    }

    match key.code {
        KeyCode::Left => Command::MoveLeft,
        KeyCode::Right => Command::MoveRight,
        KeyCode::Up => Command::Rotate,
        KeyCode::Down => Command::SoftDropTick,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'a' => Command::MoveLeft,
            'd' => Command::MoveRight,
            's' => Command::Rotate,
            ' ' => Command::HardDrop,
            'h' => Command::ToggleHelp,
            'n' => Command::ToggleNextPreview,
            'c' => Command::ToggleColor,
            _ => Command::None,
        },
        _ => Command::None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
