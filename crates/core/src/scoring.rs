//! Scoring module - match points and the difficulty curve
//!
//! Runs of exactly 4, 5 and 6 blocks are worth 400, 500 and 600 points.
//! The row advance interval tightens as the score grows; it is a pure
//! function of the absolute score and is recomputed every time it is needed.

use crate::types::{DEFAULT_TIME_MAX_SECS, DIFFICULTY_STEPS, MATCH_SCORES};

/// Points for a run of exactly `len` blocks, None if it does not score
pub fn match_points(len: u8) -> Option<u32> {
    MATCH_SCORES
        .iter()
        .find(|(l, _)| *l == len)
        .map(|&(_, points)| points)
}

/// Seconds between timed row advances for a given score
///
/// # Examples
///
/// ```
/// use tui_match4_core::scoring::time_max_for_score;
///
/// assert_eq!(time_max_for_score(0), 10);
/// assert_eq!(time_max_for_score(3000), 8);
/// assert_eq!(time_max_for_score(12_000), 6);
/// ```
pub fn time_max_for_score(score: u32) -> u32 {
    DIFFICULTY_STEPS
        .iter()
        .find(|(threshold, _)| score >= *threshold)
        .map(|&(_, secs)| secs)
        .unwrap_or(DEFAULT_TIME_MAX_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_points() {
        assert_eq!(match_points(3), None);
        assert_eq!(match_points(4), Some(400));
        assert_eq!(match_points(5), Some(500));
        assert_eq!(match_points(6), Some(600));
        assert_eq!(match_points(7), None);
    }

    #[test]
    fn test_difficulty_thresholds() {
        assert_eq!(time_max_for_score(2999), 10);
        assert_eq!(time_max_for_score(3000), 8);
        assert_eq!(time_max_for_score(4999), 8);
        assert_eq!(time_max_for_score(5000), 7);
        assert_eq!(time_max_for_score(9999), 7);
        assert_eq!(time_max_for_score(10000), 6);
        assert_eq!(time_max_for_score(u32::MAX), 6);
    }

    #[test]
    fn test_difficulty_is_monotonic() {
        let mut last = time_max_for_score(0);
        for score in (0..20_000).step_by(100) {
            let t = time_max_for_score(score);
            assert!(t <= last, "interval grew at score {}", score);
            last = t;
        }
    }
}
