//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, score storage).
//!
//! # Board Dimensions
//!
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Column capacity**: 15 slots (index 0 is the entry slot)
//! - **Visible rows**: 9 - a column holding more than this many blocks loses the game
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `COUNTDOWN_STEP_MS` | 1000 | One step of the row-advance countdown |
//! | `MESSAGE_MS` | 3000 | How long a points message stays visible |
//! | `SPIN_MS` | 3000 | Length of the celebratory spin |
//!
//! # Row Advance Thresholds
//!
//! | Score | Seconds between advances |
//! |-------|--------------------------|
//! | < 3000 | 10 |
//! | >= 3000 | 8 |
//! | >= 5000 | 7 |
//! | >= 10000 | 6 |
//!
//! # Examples
//!
//! ```
//! use tui_match4_types::{BlockColor, GameAction, BOARD_COLUMNS, COLUMN_CAPACITY};
//!
//! let color = BlockColor::from_str("Red").unwrap();
//! assert_eq!(color, BlockColor::Red);
//! assert_eq!(color.as_str(), "red");
//!
//! assert_eq!(GameAction::from_str("advanceRow"), Some(GameAction::AdvanceRow));
//!
//! assert_eq!(BOARD_COLUMNS, 10);
//! assert_eq!(COLUMN_CAPACITY, 15);
//! ```

/// Number of columns on the board
pub const BOARD_COLUMNS: u8 = 10;

/// Slots per column (index 0 is the entry slot)
pub const COLUMN_CAPACITY: u8 = 15;

/// Rows drawn above the player's lane
pub const VISIBLE_ROWS: u8 = 9;

/// A column with more occupied slots than this ends the game
pub const LOSE_THRESHOLD: u8 = VISIBLE_ROWS;

/// Most blocks the player can hold at once
pub const MAX_HELD: u8 = 3;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Countdown step (one displayed second)
pub const COUNTDOWN_STEP_MS: u32 = 1000;

/// Row advance interval before any difficulty threshold is reached
pub const DEFAULT_TIME_MAX_SECS: u32 = 10;

/// Score thresholds and the row advance interval they select, tightest first
pub const DIFFICULTY_STEPS: [(u32, u32); 3] = [(10_000, 6), (5_000, 7), (3_000, 8)];

/// Points message lifetime
pub const MESSAGE_MS: u32 = 3000;

/// Spin animation lifetime (a full turn at 2 degrees per 60 FPS frame)
pub const SPIN_MS: u32 = 3000;

/// Points for runs of exactly 4, 5 and 6 blocks
pub const MATCH_SCORES: [(u8, u32); 3] = [(4, 400), (5, 500), (6, 600)];

/// Shortest run that scores
pub const MIN_MATCH_LEN: u8 = 4;

/// Longest run that scores from its first cell
pub const MAX_MATCH_LEN: u8 = 6;

/// Entries shown in the high score list
pub const TOP_SCORES_LIMIT: usize = 15;


/// The five block colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Red,
    Blue,
    Green,
    Yellow,
    Orange,
}

/// Palette in draw order; random colors are picked uniformly from this.
pub const PALETTE: [BlockColor; 5] = [
    BlockColor::Red,
    BlockColor::Blue,
    BlockColor::Green,
    BlockColor::Yellow,
    BlockColor::Orange,
];

impl BlockColor {
    /// Parse a color from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_match4_types::BlockColor;
    ///
    /// assert_eq!(BlockColor::from_str("blue"), Some(BlockColor::Blue));
    /// assert_eq!(BlockColor::from_str("ORANGE"), Some(BlockColor::Orange));
    /// assert_eq!(BlockColor::from_str("purple"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(BlockColor::Red),
            "blue" => Some(BlockColor::Blue),
            "green" => Some(BlockColor::Green),
            "yellow" => Some(BlockColor::Yellow),
            "orange" => Some(BlockColor::Orange),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockColor::Red => "red",
            BlockColor::Blue => "blue",
            BlockColor::Green => "green",
            BlockColor::Yellow => "yellow",
            BlockColor::Orange => "orange",
        }
    }

    /// Compact code used in snapshot grids (0 is reserved for empty).
    pub fn code(&self) -> u8 {
        match self {
            BlockColor::Red => 1,
            BlockColor::Blue => 2,
            BlockColor::Green => 3,
            BlockColor::Yellow => 4,
            BlockColor::Orange => 5,
        }
    }

    /// Inverse of [`BlockColor::code`].
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(BlockColor::Red),
            2 => Some(BlockColor::Blue),
            3 => Some(BlockColor::Green),
            4 => Some(BlockColor::Yellow),
            5 => Some(BlockColor::Orange),
            _ => None,
        }
    }
}

/// Scan directions of the match engine, as (column step, row step)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// +col
    Horizontal,
    /// +row
    Vertical,
    /// +col, +row
    DiagonalDown,
    /// +col, -row
    DiagonalUp,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    pub fn step(&self) -> (i8, i8) {
        match self {
            Direction::Horizontal => (1, 0),
            Direction::Vertical => (0, 1),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (1, -1),
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// These come from pointer/keyboard input and from the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Pick from or put onto the given column, depending on the hand
    SelectColumn(u8),
    /// Push every column one slot and inject new entry blocks
    AdvanceRow,
    /// Start a new game
    Restart,
}

impl GameAction {
    /// Parse a column-less action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_match4_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("selectColumn"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "advancerow" => Some(GameAction::AdvanceRow),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::SelectColumn(_) => "selectColumn",
            GameAction::AdvanceRow => "advanceRow",
            GameAction::Restart => "restart",
        }
    }
}

/// A slot in a column
///
/// - `None`: Empty slot
/// - `Some(BlockColor)`: Slot holding a block
pub type Slot = Option<BlockColor>;

/// Core-side event emitted after a scan that scored.
///
/// The front end turns this into the transient points message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchEvent {
    /// Points awarded by the scan
    pub points: u32,
    /// Cells that triggered a match
    pub matches: u32,
    /// A 5 or 6 run was scored
    pub spin: bool,
}
