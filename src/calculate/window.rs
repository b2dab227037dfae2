//! Date-window aggregation of daily statistic rows.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{normalize_tag, ActivityWindow, PlayerDailyStat};

/// A date range scoping an aggregation: inclusive lower bound, exclusive
/// upper bound, either side optionally unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub from: Option<NaiveDate>,
    pub until: Option<NaiveDate>,
}

impl DateWindow {
    /// Unbounded window covering every row.
    pub fn all_time() -> Self {
        Self {
            from: None,
            until: None,
        }
    }

    /// From `from` (inclusive) onwards.
    pub fn since(from: NaiveDate) -> Self {
        Self {
            from: Some(from),
            until: None,
        }
    }

    /// From `from` (inclusive) up to `until` (exclusive), for previous-period
    /// comparisons.
    pub fn between(from: NaiveDate, until: NaiveDate) -> Self {
        Self {
            from: Some(from),
            until: Some(until),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.map_or(true, |f| date >= f) && self.until.map_or(true, |u| date < u)
    }
}

/// Sum daily rows into per-player activity over a window.
///
/// Row order is irrelevant; the sums are associative and commutative.
/// A day counts as active only when its battle count is positive, so a
/// zero-battle snapshot row never inflates active days. Players with no
/// qualifying rows are absent from the map; callers default to
/// [`ActivityWindow::default`].
pub fn aggregate_window(
    rows: &[PlayerDailyStat],
    window: &DateWindow,
) -> HashMap<String, ActivityWindow> {
    let mut totals: HashMap<String, ActivityWindow> = HashMap::new();

    for row in rows {
        if !window.contains(row.date) {
            continue;
        }
        let Some(tag) = normalize_tag(&row.tag) else {
            continue;
        };

        let entry = totals.entry(tag).or_default();
        entry.battles += row.battles;
        entry.wins += row.wins;
        entry.losses += row.losses;
        entry.star_player += row.star_player;
        entry.trophies_gained += row.trophies_gained;
        entry.trophies_lost += row.trophies_lost;
        if row.battles > 0 {
            entry.active_days += 1;
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn row(tag: &str, date: NaiveDate, battles: u32, wins: u32) -> PlayerDailyStat {
        PlayerDailyStat {
            tag: tag.to_string(),
            date,
            battles,
            wins,
            losses: battles.saturating_sub(wins),
            star_player: 0,
            trophies_gained: battles * 8,
            trophies_lost: battles * 3,
        }
    }

    #[test]
    fn test_window_bounds() {
        let window = DateWindow::between(day(2024, 3, 1), day(2024, 3, 8));

        assert!(window.contains(day(2024, 3, 1)));
        assert!(window.contains(day(2024, 3, 7)));
        assert!(!window.contains(day(2024, 3, 8)));
        assert!(!window.contains(day(2024, 2, 29)));
    }

    #[test]
    fn test_aggregate_sums_rows() {
        let rows = vec![
            row("#AAA", day(2024, 3, 1), 5, 3),
            row("#AAA", day(2024, 3, 2), 3, 2),
            row("#BBB", day(2024, 3, 1), 2, 0),
        ];
        let totals = aggregate_window(&rows, &DateWindow::all_time());

        let a = totals.get("#AAA").unwrap();
        assert_eq!(a.battles, 8);
        assert_eq!(a.wins, 5);
        assert_eq!(a.active_days, 2);

        let b = totals.get("#BBB").unwrap();
        assert_eq!(b.battles, 2);
        assert_eq!(b.active_days, 1);
    }

    #[test]
    fn test_aggregate_is_order_independent() {
        let mut rows = vec![
            row("#AAA", day(2024, 3, 1), 5, 3),
            row("#AAA", day(2024, 3, 2), 3, 2),
            row("#AAA", day(2024, 3, 3), 1, 1),
        ];
        let forward = aggregate_window(&rows, &DateWindow::all_time());
        rows.reverse();
        let backward = aggregate_window(&rows, &DateWindow::all_time());

        assert_eq!(forward, backward);
    }

    #[test]
    fn test_aggregate_idempotent() {
        let rows = vec![
            row("#AAA", day(2024, 3, 1), 5, 3),
            row("#BBB", day(2024, 3, 2), 2, 1),
        ];
        let first = aggregate_window(&rows, &DateWindow::all_time());
        let second = aggregate_window(&rows, &DateWindow::all_time());

        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_battle_row_is_not_an_active_day() {
        let rows = vec![row("#AAA", day(2024, 3, 1), 0, 0)];
        let totals = aggregate_window(&rows, &DateWindow::all_time());

        let a = totals.get("#AAA").unwrap();
        assert_eq!(a.active_days, 0);
        assert_eq!(a.battles, 0);
    }

    #[test]
    fn test_no_qualifying_rows_yields_no_entry() {
        let rows = vec![row("#AAA", day(2024, 2, 1), 5, 3)];
        let totals = aggregate_window(&rows, &DateWindow::since(day(2024, 3, 1)));

        assert!(totals.get("#AAA").is_none());
        // Callers default to zero, which must equal the empty aggregate.
        let defaulted = totals.get("#AAA").copied().unwrap_or_default();
        assert_eq!(defaulted, ActivityWindow::default());
    }

    #[test]
    fn test_tags_join_across_formats() {
        let rows = vec![
            row("#aaa", day(2024, 3, 1), 2, 1),
            row("AAA", day(2024, 3, 2), 3, 2),
        ];
        let totals = aggregate_window(&rows, &DateWindow::all_time());

        assert_eq!(totals.len(), 1);
        assert_eq!(totals.get("#AAA").unwrap().battles, 5);
    }

    #[test]
    fn test_blank_tag_rows_are_dropped() {
        let rows = vec![row("", day(2024, 3, 1), 2, 1)];
        let totals = aggregate_window(&rows, &DateWindow::all_time());

        assert!(totals.is_empty());
    }
}
