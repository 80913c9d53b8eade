//! Terminal input module (engine-facing).
//!
//! This module is independent of any rendering code. It maps `crossterm` key
//! and mouse events into [`crate::types::GameAction`]s, tracks which column is
//! highlighted, and collects the player name once the game is over.

pub mod handler;
pub mod map;

pub use tui_match4_types as types;

pub use handler::{InputEvent, InputHandler, PointerMap, MAX_NAME_LEN};
pub use map::{handle_key_event, should_quit, KeyCommand};
