//! Per-day player statistic rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row per (player tag, calendar date), written by the daily snapshot
/// process and immutable afterwards. At most one row exists per pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerDailyStat {
    /// Player tag (join key)
    pub tag: String,

    /// Calendar date of the snapshot
    pub date: NaiveDate,

    /// Battles played that day
    #[serde(default)]
    pub battles: u32,

    /// Battles won
    #[serde(default)]
    pub wins: u32,

    /// Battles lost
    #[serde(default)]
    pub losses: u32,

    /// Times picked as star player
    #[serde(default)]
    pub star_player: u32,

    /// Trophies gained that day
    #[serde(default)]
    pub trophies_gained: u32,

    /// Trophies lost that day
    #[serde(default)]
    pub trophies_lost: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_row_defaults_to_zero() {
        let row: PlayerDailyStat =
            serde_json::from_str(r##"{"tag": "#ABC", "date": "2024-03-01", "battles": 4}"##).unwrap();

        assert_eq!(row.battles, 4);
        assert_eq!(row.wins, 0);
        assert_eq!(row.trophies_gained, 0);
        assert_eq!(row.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }
}
