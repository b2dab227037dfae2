//! Derived per-player activity aggregates.

use serde::{Deserialize, Serialize};

/// Sums of one player's daily rows over a date window.
///
/// A player with no qualifying rows has no entry in the aggregation map;
/// callers default to this struct's all-zero `Default` rather than treating
/// the absence as an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityWindow {
    pub battles: u32,
    pub wins: u32,
    pub losses: u32,
    pub star_player: u32,
    pub trophies_gained: u32,
    pub trophies_lost: u32,
    /// Days in the window with at least one battle
    pub active_days: u32,
}

impl ActivityWindow {
    /// Net trophy movement over the window. Can be negative.
    pub fn net_trophies(&self) -> i64 {
        self.trophies_gained as i64 - self.trophies_lost as i64
    }

    /// Win rate as a rounded percentage; 0 when no battles were played.
    pub fn win_rate_pct(&self) -> u32 {
        if self.battles == 0 {
            0
        } else {
            (100.0 * self.wins as f64 / self.battles as f64).round() as u32
        }
    }
}

/// Consecutive-day activity summary for one player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    /// Consecutive active days ending today or yesterday; 0 after a 2+ day gap
    pub current_streak: u32,

    /// Longest run of consecutive active days in the supplied range
    pub best_streak: u32,

    /// Most battles recorded in any single day
    pub peak_day_battles: u32,
}
