//! Stateful input handler: column highlight, pointer mapping and name entry.
//!
//! The pointer only matters along x: a board column is selected by dividing the
//! distance from the board's left edge by the fixed cell width. Positions left
//! or right of the board clear the highlight, so a click there does nothing.
//!
//! While the game is over the keyboard edits the player name instead of
//! playing, and Enter submits it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::map::{handle_key_event, KeyCommand};
use crate::types::{GameAction, BOARD_COLUMNS};

/// Longest player name accepted from the keyboard
pub const MAX_NAME_LEN: usize = 16;

/// Maps terminal x coordinates onto board columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerMap {
    /// Terminal column of the board's first cell
    pub board_x: u16,
    /// Terminal columns per board cell
    pub cell_w: u16,
}

impl PointerMap {
    pub fn new(board_x: u16, cell_w: u16) -> Self {
        Self {
            board_x,
            cell_w: cell_w.max(1),
        }
    }

    /// Board column under terminal column `x`, if any
    pub fn column_at(&self, x: u16) -> Option<u8> {
        let dx = x.checked_sub(self.board_x)?;
        let col = dx / self.cell_w;
        (col < BOARD_COLUMNS as u16).then_some(col as u8)
    }
}

impl Default for PointerMap {
    fn default() -> Self {
        Self::new(0, 2)
    }
}

/// What the game loop should do with an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Action(GameAction),
    /// Submit the typed name for the finished game
    SubmitName(String),
}

#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    highlighted: Option<u8>,
    pointer: PointerMap,
    name: String,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the pointer mapping (the board moves when the terminal resizes).
    pub fn set_pointer_map(&mut self, pointer: PointerMap) {
        self.pointer = pointer;
    }

    pub fn highlighted(&self) -> Option<u8> {
        self.highlighted
    }

    /// Name typed so far
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn clear_name(&mut self) {
        self.name.clear();
    }

    pub fn handle_key(&mut self, key: KeyEvent, game_over: bool) -> Option<InputEvent> {
        if game_over {
            return self.handle_name_key(key);
        }

        match handle_key_event(key)? {
            KeyCommand::HighlightLeft => {
                self.highlighted = Some(self.highlighted.map_or(0, |c| c.saturating_sub(1)));
                None
            }
            KeyCommand::HighlightRight => {
                let last = BOARD_COLUMNS - 1;
                self.highlighted = Some(self.highlighted.map_or(0, |c| (c + 1).min(last)));
                None
            }
            KeyCommand::Select => self
                .highlighted
                .map(|col| InputEvent::Action(GameAction::SelectColumn(col))),
            KeyCommand::AdvanceRow => Some(InputEvent::Action(GameAction::AdvanceRow)),
            KeyCommand::Restart => Some(InputEvent::Action(GameAction::Restart)),
        }
    }

    fn handle_name_key(&mut self, key: KeyEvent) -> Option<InputEvent> {
        match key.code {
            KeyCode::Enter => Some(InputEvent::SubmitName(self.name.clone())),
            KeyCode::Backspace => {
                self.name.pop();
                None
            }
            KeyCode::F(2) => Some(InputEvent::Action(GameAction::Restart)),
            KeyCode::Char(ch)
                if !key.modifiers.contains(KeyModifiers::CONTROL) && !ch.is_control() =>
            {
                if self.name.chars().count() < MAX_NAME_LEN {
                    self.name.push(ch);
                }
                None
            }
            _ => None,
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, game_over: bool) -> Option<InputEvent> {
        if game_over {
            return None;
        }

        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.highlighted = self.pointer.column_at(mouse.column);
                None
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.highlighted = self.pointer.column_at(mouse.column);
                self.highlighted
                    .map(|col| InputEvent::Action(GameAction::SelectColumn(col)))
            }
            _ => None,
        }
    }
}
