//! Terminal front end for the match-four game.
//!
//! A small, game-oriented rendering layer: the view draws a `GameSnapshot`
//! into a framebuffer, and the renderer diffs framebuffers and flushes the
//! changes through crossterm. No widget or layout library is involved.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_match4_core as core;
pub use tui_match4_scores as scores;
pub use tui_match4_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, BoardLayout, GameView, HudView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
