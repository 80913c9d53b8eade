//! Key mapping from terminal events to play commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Keyboard commands available while the game is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Move the column highlight one column left
    HighlightLeft,
    /// Move the column highlight one column right
    HighlightRight,
    /// Pick from or put onto the highlighted column
    Select,
    /// Push a row immediately
    AdvanceRow,
    Restart,
}

/// Map keyboard input to play commands.
pub fn handle_key_event(key: KeyEvent) -> Option<KeyCommand> {
    match key.code {
        // Highlight
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(KeyCommand::HighlightLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(KeyCommand::HighlightRight)
        }

        // Actions
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(KeyCommand::Select)
        }
        KeyCode::Char('1') => Some(KeyCommand::AdvanceRow),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::F(2) => Some(KeyCommand::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
///
/// While a name is being typed, plain `q` is text, not a quit.
pub fn should_quit(key: KeyEvent, typing: bool) -> bool {
    (!typing && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')))
        || key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
