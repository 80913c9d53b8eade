//! Board module - manages the column grid
//!
//! The board is 10 columns of 15 slots. Each column is stored contiguously so
//! column-wise operations (compaction, shifting, pick/put scans) are slice ops.
//! Coordinates: (col, row) where col ranges 0..9 (left to right) and row
//! ranges 0..14 with row 0 being the entry slot where new blocks appear.

use crate::types::{BlockColor, Slot, BOARD_COLUMNS, COLUMN_CAPACITY, LOSE_THRESHOLD};

const COLS: usize = BOARD_COLUMNS as usize;
const CAP: usize = COLUMN_CAPACITY as usize;

/// The game board - 10 columns x 15 slots
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    columns: [[Slot; CAP]; COLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            columns: [[None; CAP]; COLS],
        }
    }

    #[inline(always)]
    fn index(col: i8, row: i8) -> Option<(usize, usize)> {
        if col < 0 || col >= BOARD_COLUMNS as i8 || row < 0 || row >= COLUMN_CAPACITY as i8 {
            return None;
        }
        Some((col as usize, row as usize))
    }

    pub fn columns(&self) -> u8 {
        BOARD_COLUMNS
    }

    pub fn capacity(&self) -> u8 {
        COLUMN_CAPACITY
    }

    /// Get slot at (col, row)
    /// Returns None if out of bounds
    pub fn get(&self, col: i8, row: i8) -> Option<Slot> {
        Self::index(col, row).map(|(c, r)| self.columns[c][r])
    }

    /// Set slot at (col, row)
    /// Returns false if out of bounds
    pub fn set(&mut self, col: i8, row: i8, slot: Slot) -> bool {
        match Self::index(col, row) {
            Some((c, r)) => {
                self.columns[c][r] = slot;
                true
            }
            None => false,
        }
    }

    /// Color at (col, row), None if empty or out of bounds
    #[inline]
    pub fn color_at(&self, col: i8, row: i8) -> Option<BlockColor> {
        self.get(col, row).flatten()
    }

    /// Slots of one column, entry slot first
    pub fn column(&self, col: usize) -> Option<&[Slot]> {
        self.columns.get(col).map(|c| c.as_slice())
    }

    /// Number of occupied slots in a column (0 for an invalid column)
    pub fn occupied_count(&self, col: usize) -> usize {
        self.column(col)
            .map(|c| c.iter().filter(|s| s.is_some()).count())
            .unwrap_or(0)
    }

    /// Highest occupied index in a column
    pub fn last_occupied(&self, col: usize) -> Option<usize> {
        self.column(col)?.iter().rposition(|s| s.is_some())
    }

    /// Lowest empty index in a column
    pub fn first_empty(&self, col: usize) -> Option<usize> {
        self.column(col)?.iter().position(|s| s.is_none())
    }

    /// Slide occupied slots of every column toward the entry slot,
    /// keeping their order. Empty slots end up at the far end.
    pub fn compact(&mut self) {
        for column in &mut self.columns {
            compact_column(column);
        }
    }

    /// Move every slot of a column one step away from the entry slot and put
    /// `entry` in slot 0. Whatever was in the last slot is dropped.
    ///
    /// Returns false if `col` is out of range.
    pub fn shift_column(&mut self, col: usize, entry: BlockColor) -> bool {
        let Some(column) = self.columns.get_mut(col) else {
            return false;
        };
        column.copy_within(0..CAP - 1, 1);
        column[0] = Some(entry);
        true
    }

    /// True when some column holds more blocks than the visible area
    pub fn check_lose(&self) -> bool {
        (0..COLS).any(|col| self.occupied_count(col) > LOSE_THRESHOLD as usize)
    }

    /// Write the board into a `[col][row]` grid of color codes (0 = empty).
    pub fn write_u8_grid(&self, out: &mut [[u8; CAP]; COLS]) {
        for (dst, src) in out.iter_mut().zip(self.columns.iter()) {
            for (d, s) in dst.iter_mut().zip(src.iter()) {
                *d = s.map(|c| c.code()).unwrap_or(0);
            }
        }
    }

    /// Count of occupied slots across the whole board
    pub fn block_count(&self) -> usize {
        self.columns
            .iter()
            .map(|c| c.iter().filter(|s| s.is_some()).count())
            .sum()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for column in &mut self.columns {
            column.fill(None);
        }
    }

    /// Build a board from per-column slot lists (entry slot first).
    ///
    /// Missing columns and slots are empty; extra entries are ignored.
    pub fn from_columns(columns: &[&[Slot]]) -> Self {
        let mut board = Self::new();
        for (dst, src) in board.columns.iter_mut().zip(columns.iter()) {
            for (d, s) in dst.iter_mut().zip(src.iter()) {
                *d = *s;
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Stable in-place compaction: a write cursor trails the read cursor.
fn compact_column(column: &mut [Slot]) {
    let mut write = 0usize;
    for read in 0..column.len() {
        if column[read].is_some() {
            if write != read {
                column[write] = column[read];
                column[read] = None;
            }
            write += 1;
        }
    }
}
