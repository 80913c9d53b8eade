//! High score storage.
//!
//! Finished games can be submitted under a player name. Scores are kept in an
//! append-only list; the read path sorts them best first and shows the top 15.
//!
//! - [`JsonFileStore`] keeps the list as a JSON array in a file that survives
//!   across sessions.
//! - [`MemoryStore`] keeps it for the lifetime of the process.
//!
//! # Example
//!
//! ```
//! use tui_match4_scores::{submit_score, top_scores, MemoryStore, ScoreError, ScoreStore};
//!
//! let mut store = MemoryStore::new();
//!
//! // Not allowed while the game is still running.
//! assert!(matches!(
//!     submit_score(&mut store, false, 800, "ana"),
//!     Err(ScoreError::GameInProgress)
//! ));
//!
//! submit_score(&mut store, true, 800, "ana").unwrap();
//! submit_score(&mut store, true, 2000, "bo").unwrap();
//!
//! let top = top_scores(store.load().unwrap(), 15);
//! assert_eq!(top[0].player_name, "bo");
//! ```

pub mod error;
pub mod store;

pub use error::ScoreError;
pub use store::{submit_score, top_scores, JsonFileStore, MemoryStore, ScoreEntry, ScoreStore};
pub use tui_match4_types::TOP_SCORES_LIMIT;
