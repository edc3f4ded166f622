//! Turn clock: a per-turn countdown that forfeits the game on expiry

use std::time::{Duration, Instant};

/// Countdown for the side to move.
///
/// Deadline based: `reset` replaces the deadline outright, so the previous
/// turn's countdown stops the moment the next one starts.
#[derive(Debug, Clone)]
pub struct TurnClock {
    timeout: Duration,
    deadline: Instant,
    resets: u64,
}

impl TurnClock {
    pub fn new(timeout: Duration, now: Instant) -> Self {
        Self {
            timeout,
            deadline: now + timeout,
            resets: 0,
        }
    }

    /// Start a fresh countdown for the next turn.
    pub fn reset(&mut self, now: Instant) {
        self.deadline = now + self.timeout;
        self.resets += 1;
    }

    #[inline]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Time left in the current turn (zero once expired)
    #[inline]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }

    #[inline]
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Number of resets since creation (one per turn swap)
    #[inline]
    pub fn resets(&self) -> u64 {
        self.resets
    }
}
