//! Match engine - finds and clears runs of 4 to 6 same-colored blocks
//!
//! The scan visits every occupied cell column by column. From each cell it
//! measures four forward runs (right, down, down-right, up-right). A cell
//! whose runs include one of exactly 4, 5 or 6 blocks scores, and then every
//! one of its four runs is cleared to its own length, including directions
//! that did not reach 4. The scan sees its own clears, so one pass can score
//! several times.
//!
//! Compaction is not done here; callers run [`Board::compact`] afterwards.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::scoring::match_points;
use crate::types::{Direction, BOARD_COLUMNS, COLUMN_CAPACITY, MIN_MATCH_LEN};

/// Upper bound of hits in one pass: each hit clears at least 4 cells.
pub const MAX_HITS: usize =
    (BOARD_COLUMNS as usize * COLUMN_CAPACITY as usize) / MIN_MATCH_LEN as usize;

/// One scoring cell found during a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchHit {
    pub col: u8,
    pub row: u8,
    /// Run lengths in `Direction::ALL` order, measured before clearing
    pub runs: [u8; 4],
    pub points: u32,
}

impl MatchHit {
    /// 5 and 6 runs trigger the spin
    pub fn spin(&self) -> bool {
        self.points > match_points(MIN_MATCH_LEN).unwrap_or(0)
    }
}

/// Result of one full-board scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchReport {
    pub hits: ArrayVec<MatchHit, MAX_HITS>,
    pub total: u32,
    pub spin: bool,
}

impl MatchReport {
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

/// Length of the same-color run starting at (col, row) along `dir`.
///
/// Returns 0 for an empty or out-of-bounds start cell.
pub fn run_length(board: &Board, col: i8, row: i8, dir: Direction) -> u8 {
    let Some(color) = board.color_at(col, row) else {
        return 0;
    };
    let (dc, dr) = dir.step();
    let mut len = 1u8;
    let (mut c, mut r) = (col + dc, row + dr);
    while board.color_at(c, r) == Some(color) {
        len += 1;
        c += dc;
        r += dr;
    }
    len
}

/// Scan the whole board once, clearing matched runs in place.
pub fn resolve_matches(board: &mut Board) -> MatchReport {
    let mut report = MatchReport::default();

    for col in 0..BOARD_COLUMNS as i8 {
        for row in 0..COLUMN_CAPACITY as i8 {
            if board.color_at(col, row).is_none() {
                continue;
            }

            let mut runs = [0u8; 4];
            for (len, dir) in runs.iter_mut().zip(Direction::ALL) {
                *len = run_length(board, col, row, dir);
            }

            let Some(points) = award_for(&runs) else {
                continue;
            };

            for (len, dir) in runs.iter().zip(Direction::ALL) {
                clear_run(board, col, row, dir, *len);
            }

            let hit = MatchHit {
                col: col as u8,
                row: row as u8,
                runs,
                points,
            };
            report.total = report.total.saturating_add(points);
            report.spin |= hit.spin();
            // Bounded by MAX_HITS: a hit empties at least MIN_MATCH_LEN cells.
            let _ = report.hits.try_push(hit);
        }
    }

    report
}

/// Points for a cell given its four run lengths.
///
/// A 4 anywhere wins over a 5, and a 5 over a 6.
fn award_for(runs: &[u8; 4]) -> Option<u32> {
    crate::types::MATCH_SCORES
        .iter()
        .find(|(len, _)| runs.contains(len))
        .map(|&(_, points)| points)
}

fn clear_run(board: &mut Board, col: i8, row: i8, dir: Direction, len: u8) {
    let (dc, dr) = dir.step();
    for i in 0..len as i8 {
        board.set(col + dc * i, row + dr * i, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BlockColor::{self, *};

    fn place_horizontal(board: &mut Board, row: i8, cols: std::ops::Range<i8>, color: BlockColor) {
        for col in cols {
            board.set(col, row, Some(color));
        }
    }

    #[test]
    fn test_run_length_directions() {
        let mut board = Board::new();
        place_horizontal(&mut board, 2, 0..4, Red);
        assert_eq!(run_length(&board, 0, 2, Direction::Horizontal), 4);
        assert_eq!(run_length(&board, 1, 2, Direction::Horizontal), 3);
        assert_eq!(run_length(&board, 0, 2, Direction::Vertical), 1);
        assert_eq!(run_length(&board, 5, 5, Direction::Vertical), 0);
    }

    #[test]
    fn test_award_precedence() {
        assert_eq!(award_for(&[4, 1, 1, 1]), Some(400));
        assert_eq!(award_for(&[6, 5, 1, 1]), Some(500));
        assert_eq!(award_for(&[6, 1, 1, 4]), Some(400));
        assert_eq!(award_for(&[7, 3, 2, 1]), None);
    }

    #[test]
    fn test_horizontal_four_scores_400() {
        let mut board = Board::new();
        place_horizontal(&mut board, 0, 0..4, Red);

        let report = resolve_matches(&mut board);
        assert_eq!(report.total, 400);
        assert_eq!(report.hits.len(), 1);
        assert!(!report.spin);
        assert_eq!(board.block_count(), 0);
    }

    #[test]
    fn test_vertical_five_spins() {
        let mut board = Board::new();
        for row in 0..5 {
            board.set(7, row, Some(Green));
        }

        let report = resolve_matches(&mut board);
        assert_eq!(report.total, 500);
        assert!(report.spin);
        assert_eq!(board.occupied_count(7), 0);
    }

    #[test]
    fn test_diagonal_up_right() {
        let mut board = Board::new();
        for i in 0..4 {
            board.set(2 + i, 6 - i, Some(Yellow));
        }

        let report = resolve_matches(&mut board);
        assert_eq!(report.total, 400);
        assert_eq!(report.hits[0].runs[3], 4);
        assert_eq!(board.block_count(), 0);
    }

    #[test]
    fn test_three_in_a_row_does_not_score() {
        let mut board = Board::new();
        place_horizontal(&mut board, 0, 0..3, Blue);

        let report = resolve_matches(&mut board);
        assert!(report.is_empty());
        assert_eq!(board.block_count(), 3);
    }

    #[test]
    fn test_match_also_clears_short_runs_from_the_same_cell() {
        let mut board = Board::new();
        // Horizontal 4 from (0,0), plus a vertical pair under (0,0).
        place_horizontal(&mut board, 0, 0..4, Orange);
        board.set(0, 1, Some(Orange));

        let report = resolve_matches(&mut board);
        assert_eq!(report.total, 400);
        assert_eq!(board.block_count(), 0);
    }

    #[test]
    fn test_seven_run_scores_from_second_cell() {
        let mut board = Board::new();
        place_horizontal(&mut board, 0, 0..7, Red);

        let report = resolve_matches(&mut board);
        // (0,0) sees 7 and is skipped; (1,0) sees 6.
        assert_eq!(report.total, 600);
        assert_eq!(board.block_count(), 1);
        assert_eq!(board.color_at(0, 0), Some(Red));
    }
}
