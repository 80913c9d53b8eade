//! Row-advance countdown.
//!
//! The countdown is a scheduled task stepped by elapsed time. Each step is one
//! displayed second: while seconds remain it counts down, and a step taken at
//! zero fires a row advance and reloads the interval.
//!
//! A countdown is armed for one episode. Before running a step the owner checks
//! [`Countdown::is_live`] with its current episode and game-over flag; a
//! mismatched episode or a finished game cancels the pending steps.

use crate::types::COUNTDOWN_STEP_MS;

/// What a single countdown step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// One second came off the clock
    Counted,
    /// The clock was at zero: advance a row and reload
    Fire,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    episode_id: u32,
    time_left: u32,
    accum_ms: u32,
}

impl Countdown {
    /// Arm a countdown for `episode_id` starting at `time_max` seconds
    pub fn armed(episode_id: u32, time_max: u32) -> Self {
        Self {
            episode_id,
            time_left: time_max,
            accum_ms: 0,
        }
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Seconds shown to the player
    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    /// Milliseconds banked toward the next step
    pub fn pending_ms(&self) -> u32 {
        self.accum_ms
    }

    /// True if this countdown may still run for the given episode
    pub fn is_live(&self, current_episode: u32, game_over: bool) -> bool {
        !game_over && self.episode_id == current_episode
    }

    /// Bank elapsed time toward the next step
    pub fn accumulate(&mut self, elapsed_ms: u32) {
        self.accum_ms = self.accum_ms.saturating_add(elapsed_ms);
    }

    /// Consume one step's worth of banked time if available
    pub fn take_step(&mut self) -> bool {
        if self.accum_ms < COUNTDOWN_STEP_MS {
            return false;
        }
        self.accum_ms -= COUNTDOWN_STEP_MS;
        true
    }

    /// Run one step of the clock
    pub fn step(&mut self) -> Step {
        if self.time_left > 0 {
            self.time_left -= 1;
            Step::Counted
        } else {
            Step::Fire
        }
    }

    /// Restart the clock after a fire
    pub fn reload(&mut self, time_max: u32) {
        self.time_left = time_max;
    }

    /// Drop any banked time
    pub fn cancel(&mut self) {
        self.accum_ms = 0;
    }
}
