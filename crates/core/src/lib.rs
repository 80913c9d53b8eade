//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, storage, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests for every rule
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Fixed-size board and a zero-allocation match scan
//!
//! # Module Structure
//!
//! - [`board`]: 10 columns x 15 slots with compaction and column shifting
//! - [`matcher`]: four-direction run scan that scores and clears 4/5/6 runs
//! - [`game_state`]: board, hand, score, countdown and the pick/put state machine
//! - [`countdown`]: row-advance clock with episode-based cancellation
//! - [`hand`]: what the player is holding
//! - [`rng`]: seeded uniform block colors
//! - [`scoring`]: match points and the difficulty curve
//!
//! # Game Rules
//!
//! - **Entry slot**: new blocks appear at slot 0 of a column and push older ones further in
//! - **Pick**: take the last block of a column, plus up to two more of the same color directly before it
//! - **Put**: drop the held blocks into the first empty slots of a column; that column then advances by one
//! - **Matches**: runs of exactly 4, 5 or 6 in any of four directions score 400, 500 or 600
//! - **Row advance**: every `time_max` seconds all columns advance and get a new entry block
//! - **Lose**: a column holding more than 9 blocks ends the game
//!
//! # Example
//!
//! ```
//! use tui_match4_core::GameState;
//! use tui_match4_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! // Pick the opening block of column 0 and put it on column 1.
//! assert!(game.apply_action(GameAction::SelectColumn(0)));
//! assert!(game.apply_action(GameAction::SelectColumn(1)));
//!
//! assert!(game.hand().is_empty());
//! assert!(!game.game_over());
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with elapsed
//! time. The countdown steps once per second and advances a row one step after
//! reaching zero; the points message and spin each last three seconds.

pub mod board;
pub mod countdown;
pub mod game_state;
pub mod hand;
pub mod matcher;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tui_match4_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use countdown::Countdown;
pub use game_state::GameState;
pub use hand::Hand;
pub use matcher::{resolve_matches, run_length, MatchHit, MatchReport};
pub use rng::{ColorSource, SimpleRng};
pub use scoring::{match_points, time_max_for_score};
pub use snapshot::GameSnapshot;
