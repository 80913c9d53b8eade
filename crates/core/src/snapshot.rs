use crate::hand::Hand;
use crate::types::{BOARD_COLUMNS, COLUMN_CAPACITY, DEFAULT_TIME_MAX_SECS};

/// Per-frame view of the game for renderers.
///
/// `board` is indexed `[col][row]` with row 0 the entry slot; cells hold
/// [`BlockColor::code`](crate::types::BlockColor::code) values, 0 for empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u8; COLUMN_CAPACITY as usize]; BOARD_COLUMNS as usize],
    pub hand: Hand,
    pub score: u32,
    pub time_left: u32,
    pub time_max: u32,
    pub message: Option<u32>,
    pub message_ms: u32,
    pub spin_ms: u32,
    pub game_over: bool,
    pub episode_id: u32,
    pub rows_advanced: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u8; COLUMN_CAPACITY as usize]; BOARD_COLUMNS as usize];
        self.hand = Hand::Empty;
        self.score = 0;
        self.time_left = DEFAULT_TIME_MAX_SECS;
        self.time_max = DEFAULT_TIME_MAX_SECS;
        self.message = None;
        self.message_ms = 0;
        self.spin_ms = 0;
        self.game_over = false;
        self.episode_id = 0;
        self.rows_advanced = 0;
        self.seed = 0;
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// Occupied slots in one column of the snapshot
    pub fn column_height(&self, col: usize) -> usize {
        self.board
            .get(col)
            .map(|c| c.iter().filter(|v| **v != 0).count())
            .unwrap_or(0)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            board: [[0u8; COLUMN_CAPACITY as usize]; BOARD_COLUMNS as usize],
            hand: Hand::Empty,
            score: 0,
            time_left: 0,
            time_max: 0,
            message: None,
            message_ms: 0,
            spin_ms: 0,
            game_over: false,
            episode_id: 0,
            rows_advanced: 0,
            seed: 0,
        };
        s.clear();
        s
    }
}
