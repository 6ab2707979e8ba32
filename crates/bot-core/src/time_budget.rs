//! Per-move time budgeting.
//!
//! The host hands over whole-game clock state; an external engine wants one
//! bounded thinking budget per move. This module owns that conversion so
//! every backend allocates time the same way.

use std::time::Duration;

use cozy_chess::Color;
use serde::{Deserialize, Serialize};

/// Floor of the per-move budget. Applies even when the clock reads zero or
/// negative, so a flagged game still gets a non-degenerate request.
pub const MIN_MOVE_ALLOWANCE: Duration = Duration::from_millis(100);

/// Ceiling of the per-move budget, no matter how much game time is left.
pub const MAX_MOVE_ALLOWANCE: Duration = Duration::from_secs(3);

/// Divisor mapping remaining game time to a per-move budget: one minute of
/// clock buys one second of thinking.
const ALLOWANCE_DIVISOR_MS: f64 = 60_000.0;

/// Map remaining game time (milliseconds) to a clamped per-move allowance.
///
/// Linear between the clamp points: `remaining_ms / 60000` seconds. Inputs
/// at or below 6000 ms (including negative ones) hit the floor, inputs at or
/// above 180000 ms hit the ceiling.
pub fn move_allowance(remaining_ms: i64) -> Duration {
    let secs = (remaining_ms as f64 / ALLOWANCE_DIVISOR_MS).clamp(
        MIN_MOVE_ALLOWANCE.as_secs_f64(),
        MAX_MOVE_ALLOWANCE.as_secs_f64(),
    );
    Duration::from_secs_f64(secs)
}

/// Both sides' clock state as reported by the host, in milliseconds.
///
/// Signed fields: hosts have been seen reporting slightly negative remaining
/// time around flag falls, and that must not panic or wrap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clock {
    pub wtime_ms: i64,
    pub btime_ms: i64,
    pub winc_ms: i64,
    pub binc_ms: i64,
}

impl Clock {
    pub fn new(wtime_ms: i64, btime_ms: i64, winc_ms: i64, binc_ms: i64) -> Self {
        Self {
            wtime_ms,
            btime_ms,
            winc_ms,
            binc_ms,
        }
    }

    /// Remaining game time for `side`, in milliseconds.
    pub fn remaining_for(&self, side: Color) -> i64 {
        match side {
            Color::White => self.wtime_ms,
            Color::Black => self.btime_ms,
        }
    }

    /// Per-move allowance for `side`.
    pub fn allowance_for(&self, side: Color) -> Duration {
        move_allowance(self.remaining_for(side))
    }
}

#[cfg(test)]
#[path = "time_budget_tests.rs"]
mod time_budget_tests;
