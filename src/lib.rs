//! TUI match-four puzzle (workspace facade crate).
//!
//! The game lives in dedicated crates under `crates/`; this package re-exports
//! them as `tui_match4::{core,input,scores,term,types}` and owns the
//! application configuration.

pub mod config;

pub use tui_match4_core as core;
pub use tui_match4_input as input;
pub use tui_match4_scores as scores;
pub use tui_match4_term as term;
pub use tui_match4_types as types;

pub use config::{AppConfig, ConfigError};
