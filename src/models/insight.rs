//! Club-level insight models.

use serde::{Deserialize, Serialize};

/// Week-over-week battle volume direction.
///
/// The ±5 band around zero is a noise filter: small swings read as flat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrendDirection::Up => write!(f, "up"),
            TrendDirection::Down => write!(f, "down"),
            TrendDirection::Flat => write!(f, "flat"),
        }
    }
}

/// Scalar club-level signals derived from one snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubInsight {
    /// Club-wide weekly win rate, rounded percentage
    pub win_rate: u32,

    /// Display names of members with no battle event in the recent window,
    /// sorted by name
    pub kick_list: Vec<String>,
    pub kick_count: u32,

    /// Percent change of battle volume vs. the previous week
    pub trend_diff: i64,
    pub trend_direction: TrendDirection,

    /// Top weekly trophy gainer, absent when nobody gained
    pub mvp_name: Option<String>,
    pub mvp_trophies: u32,
}
