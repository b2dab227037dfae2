//! # Club Pulse
//!
//! A local multiplayer club roster tracker with engagement analytics.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (members, daily stats, events, derived records)
//! - **storage**: JSONL snapshot reading
//! - **fetch**: Async data-source seam and snapshot materialization
//! - **calculate**: Aggregation, streaks, rankings, and insight computation
//! - **config**: Configuration loading and validation

pub mod calculate;
pub mod config;
pub mod fetch;
pub mod models;
pub mod storage;

pub use models::*;

use chrono::NaiveDate;

/// Parse a calendar date in ISO `YYYY-MM-DD` form.
pub fn parse_day(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_day() {
        assert_eq!(
            parse_day("2024-03-01"),
            Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        );
    }

    #[test]
    fn test_parse_day_trims() {
        assert_eq!(
            parse_day("  2024-12-31 "),
            Some(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap())
        );
    }

    #[test]
    fn test_parse_day_invalid() {
        assert_eq!(parse_day("01/03/2024"), None);
        assert_eq!(parse_day("2024-13-01"), None);
        assert_eq!(parse_day(""), None);
    }
}
