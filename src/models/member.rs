//! Roster member snapshot models.

use serde::{Deserialize, Serialize};

/// Role of a member within the club.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClubRole {
    Member,
    Senior,
    VicePresident,
    President,
    /// Roles the sync layer does not recognize map here instead of failing.
    #[serde(other)]
    Unknown,
}

impl Default for ClubRole {
    fn default() -> Self {
        ClubRole::Member
    }
}

impl std::fmt::Display for ClubRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClubRole::Member => write!(f, "member"),
            ClubRole::Senior => write!(f, "senior"),
            ClubRole::VicePresident => write!(f, "vice_president"),
            ClubRole::President => write!(f, "president"),
            ClubRole::Unknown => write!(f, "unknown"),
        }
    }
}

/// Current snapshot of one roster member, as written by the external sync.
///
/// Every numeric field defaults to zero when absent so loosely populated
/// snapshots still deserialize. The tag is the join key into daily stats
/// and battle-event logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterMember {
    /// Player tag (join key, usually `#`-prefixed)
    pub tag: String,

    /// Display name
    pub name: String,

    /// Club role
    #[serde(default)]
    pub role: ClubRole,

    /// Current trophies
    #[serde(default)]
    pub trophies: u32,

    /// Highest trophies ever reached
    #[serde(default)]
    pub highest_trophies: u32,

    /// Experience level
    #[serde(default)]
    pub exp_level: u32,

    /// Lifetime win rate as reported by the game (0.0 to 100.0)
    #[serde(default)]
    pub win_rate: f64,

    /// Lifetime 3v3 victories
    #[serde(default)]
    pub victories_3v3: u32,

    /// Lifetime solo showdown victories
    #[serde(default)]
    pub solo_victories: u32,

    /// Lifetime duo showdown victories
    #[serde(default)]
    pub duo_victories: u32,

    /// Number of unlocked brawlers
    #[serde(default)]
    pub brawler_count: u32,

    /// Position within the club by trophies (1-based, 0 when unknown)
    #[serde(default)]
    pub club_rank: u32,
}
