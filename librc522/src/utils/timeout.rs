//! Poll budgets for the chip's busy-wait loops.
//!
//! The chip is polled, never interrupt-driven, so every wait is bounded by a
//! budget. The default is a plain iteration count, which keeps timing
//! identical regardless of host speed accounting; a wall-clock deadline can
//! be selected instead on hosts where that matters more than determinism.

use std::time::{Duration, Instant};

/// How long a poll loop may spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollLimit {
    /// At most this many register reads.
    Iterations(u32),
    /// Until this much wall-clock time has elapsed (at least one read).
    Deadline(Duration),
}

impl PollLimit {
    /// Begin counting. A deadline too far out to represent never expires.
    pub fn start(self) -> Countdown {
        match self {
            PollLimit::Iterations(n) => Countdown::Iterations { remaining: n },
            PollLimit::Deadline(d) => Countdown::Deadline {
                until: Instant::now().checked_add(d),
                first: true,
            },
        }
    }
}

/// A running budget. Call [`Countdown::tick`] once per poll.
#[derive(Debug, Clone, Copy)]
pub enum Countdown {
    /// Register reads left.
    Iterations {
        /// Polls still allowed.
        remaining: u32,
    },
    /// Wall-clock budget.
    Deadline {
        /// `None` when the deadline overflowed `Instant`.
        until: Option<Instant>,
        /// The first poll is granted even with a zero budget.
        first: bool,
    },
}

impl Countdown {
    /// Consume one poll. Returns `false` once the budget is exhausted and
    /// the caller must not poll again.
    pub fn tick(&mut self) -> bool {
        match self {
            Countdown::Iterations { remaining } => {
                if *remaining == 0 {
                    return false;
                }
                *remaining -= 1;
                true
            }
            Countdown::Deadline { until, first } => {
                if *first {
                    *first = false;
                    return true;
                }
                match until {
                    Some(until) => Instant::now() < *until,
                    None => true,
                }
            }
        }
    }
}

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}
