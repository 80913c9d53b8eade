//! Game state module - manages the complete game state
//!
//! This module ties together the board, the hand, the color source, the match
//! engine and the row-advance countdown. Every board mutation (pick, put, row
//! advance) is followed by a match pass, compaction and the lose check.

use log::{debug, info};

use crate::countdown::{Countdown, Step};
use crate::hand::Hand;
use crate::matcher;
use crate::scoring::time_max_for_score;
use crate::snapshot::GameSnapshot;
use crate::types::*;
use crate::{Board, ColorSource};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    hand: Hand,
    colors: ColorSource,
    countdown: Countdown,
    /// Monotonic episode id (increments on restart). Cancels stale countdowns.
    episode_id: u32,
    score: u32,
    /// Rows pushed by the countdown or the manual trigger.
    rows_advanced: u32,
    /// Points shown in the transient message.
    message_points: u32,
    message_ms: u32,
    spin_ms: u32,
    /// Last scoring scan (consumed by the front end).
    last_event: Option<MatchEvent>,
    game_over: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed.
    ///
    /// Every column starts with one random block in its entry slot.
    pub fn new(seed: u32) -> Self {
        let mut colors = ColorSource::new(seed);
        let mut board = Board::new();
        for col in 0..BOARD_COLUMNS as i8 {
            board.set(col, 0, Some(colors.next_color()));
        }
        Self::from_parts(board, colors)
    }

    /// Start from a prepared board instead of the random opening row.
    ///
    /// The board is taken as-is (no match pass), which makes scripted
    /// scenarios reproducible.
    pub fn with_board(board: Board, seed: u32) -> Self {
        Self::from_parts(board, ColorSource::new(seed))
    }

    fn from_parts(board: Board, colors: ColorSource) -> Self {
        Self {
            board,
            hand: Hand::Empty,
            colors,
            countdown: Countdown::armed(0, time_max_for_score(0)),
            episode_id: 0,
            score: 0,
            rows_advanced: 0,
            message_points: 0,
            message_ms: 0,
            spin_ms: 0,
            last_event: None,
            game_over: false,
        }
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn rows_advanced(&self) -> u32 {
        self.rows_advanced
    }

    pub fn hand(&self) -> Hand {
        self.hand
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Seconds left on the row-advance countdown
    pub fn time_left(&self) -> u32 {
        self.countdown.time_left()
    }

    /// Current row-advance interval
    pub fn time_max(&self) -> u32 {
        time_max_for_score(self.score)
    }

    /// Points of the visible message, if one is showing
    pub fn message(&self) -> Option<u32> {
        (self.message_ms > 0).then_some(self.message_points)
    }

    pub fn spinning(&self) -> bool {
        self.spin_ms > 0
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.hand = self.hand;
        out.score = self.score;
        out.time_left = self.time_left();
        out.time_max = self.time_max();
        out.message = self.message();
        out.message_ms = self.message_ms;
        out.spin_ms = self.spin_ms;
        out.game_over = self.game_over;
        out.episode_id = self.episode_id;
        out.rows_advanced = self.rows_advanced;
        out.seed = self.colors.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Run one match pass, then compact and check for a loss.
    ///
    /// Returns the points awarded by the pass.
    pub fn resolve_matches(&mut self) -> u32 {
        if self.game_over {
            return 0;
        }

        let report = matcher::resolve_matches(&mut self.board);
        if !report.is_empty() {
            self.score = self.score.saturating_add(report.total);
            self.message_points = report.total;
            self.message_ms = MESSAGE_MS;
            if report.spin {
                self.spin_ms = SPIN_MS;
            }
            self.last_event = Some(MatchEvent {
                points: report.total,
                matches: report.hits.len() as u32,
                spin: report.spin,
            });
            debug!(
                "scored {} from {} match(es), score now {}",
                report.total,
                report.hits.len(),
                self.score
            );
        }

        self.board.compact();
        self.check_lose();
        report.total
    }

    /// Latch game over if any column overflows the visible area.
    pub fn check_lose(&mut self) -> bool {
        if !self.game_over && self.board.check_lose() {
            self.game_over = true;
            info!(
                "game over in episode {} with score {}",
                self.episode_id, self.score
            );
        }
        self.game_over
    }

    /// Pick the top run (up to 3 blocks of one color) from a column.
    ///
    /// Returns false when nothing was picked: game over, the hand is full,
    /// the column is out of range or empty.
    pub fn pick(&mut self, col: usize) -> bool {
        if self.game_over || !self.hand.is_empty() || col >= BOARD_COLUMNS as usize {
            return false;
        }
        let Some(last) = self.board.last_occupied(col) else {
            return false;
        };
        let Some(color) = self.board.color_at(col as i8, last as i8) else {
            return false;
        };

        let mut count = 1usize;
        while count < MAX_HELD as usize
            && count <= last
            && self.board.color_at(col as i8, (last - count) as i8) == Some(color)
        {
            count += 1;
        }
        for row in (last + 1 - count)..=last {
            self.board.set(col as i8, row as i8, None);
        }
        self.hand = Hand::holding(color, count as u8);

        self.resolve_matches();
        self.check_lose();
        true
    }

    /// Put the held blocks onto a column, starting at its first empty slot.
    ///
    /// After the match pass only this column is pushed one slot and gets a new
    /// entry block; the rest of the board does not move. A put that would run
    /// past the end of the column is rejected and the hand keeps its blocks.
    pub fn put(&mut self, col: usize) -> bool {
        if self.game_over || col >= BOARD_COLUMNS as usize {
            return false;
        }
        let Hand::Holding { color, count } = self.hand else {
            return false;
        };
        let Some(first) = self.board.first_empty(col) else {
            debug!("put rejected: column {} is full", col);
            return false;
        };
        if first + count as usize > COLUMN_CAPACITY as usize {
            debug!(
                "put rejected: {} block(s) do not fit in column {} from slot {}",
                count, col, first
            );
            return false;
        }

        for row in first..first + count as usize {
            self.board.set(col as i8, row as i8, Some(color));
        }
        self.hand = Hand::Empty;

        self.resolve_matches();
        if !self.game_over {
            let entry = self.colors.next_color();
            self.board.shift_column(col, entry);
        }
        self.check_lose();
        true
    }

    /// Pick when empty-handed, put when holding.
    pub fn select_column(&mut self, col: usize) -> bool {
        if self.hand.is_empty() {
            self.pick(col)
        } else {
            self.put(col)
        }
    }

    /// Push every column one slot away from the entry and inject new blocks.
    pub fn advance_row(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        for col in 0..BOARD_COLUMNS as usize {
            let entry = self.colors.next_color();
            self.board.shift_column(col, entry);
        }
        self.rows_advanced = self.rows_advanced.wrapping_add(1);

        self.resolve_matches();
        true
    }

    /// Start a new episode. Any countdown armed for the old episode is dead.
    pub fn restart(&mut self) {
        let seed = self.colors.seed();
        let next_episode = self.episode_id.wrapping_add(1);
        *self = Self::new(seed);
        self.episode_id = next_episode;
        self.countdown = Countdown::armed(next_episode, self.time_max());
        info!("new game, episode {}", next_episode);
    }

    /// Take and clear the last scoring event.
    pub fn take_last_event(&mut self) -> Option<MatchEvent> {
        self.last_event.take()
    }

    /// Main game tick - decay transient timers and run the countdown.
    ///
    /// Returns true if the countdown advanced a row.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        self.message_ms = self.message_ms.saturating_sub(elapsed_ms);
        self.spin_ms = self.spin_ms.saturating_sub(elapsed_ms);

        let mut advanced = false;
        self.countdown.accumulate(elapsed_ms);
        while self.countdown.take_step() {
            if !self.countdown.is_live(self.episode_id, self.game_over) {
                self.countdown.cancel();
                break;
            }
            if self.countdown.step() == Step::Fire {
                advanced |= self.advance_row();
                self.countdown.reload(self.time_max());
            }
        }
        advanced
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::SelectColumn(col) => self.select_column(col as usize),
            GameAction::AdvanceRow => self.advance_row(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn countdown(&self) -> &Countdown {
        &self.countdown
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
