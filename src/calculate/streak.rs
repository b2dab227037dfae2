//! Consecutive-day streak analysis.

use chrono::NaiveDate;

use crate::models::Streak;

/// Compute streaks from one player's (date, battle count) pairs.
///
/// Runs are maximal sequences of dates exactly one calendar day apart.
/// The current streak is the final run, but only while it is still alive:
/// the last active day must be `today` or yesterday. Two or more idle days
/// zero it out while the best streak is preserved. Zero-battle pairs are
/// ignored, and empty input yields all zeros rather than a phantom
/// length-1 streak.
pub fn analyze(days: &[(NaiveDate, u32)], today: NaiveDate) -> Streak {
    let mut days: Vec<(NaiveDate, u32)> = days
        .iter()
        .copied()
        .filter(|(_, battles)| *battles > 0)
        .collect();
    if days.is_empty() {
        return Streak::default();
    }
    days.sort_by_key(|(date, _)| *date);

    let peak_day_battles = days.iter().map(|(_, battles)| *battles).max().unwrap_or(0);

    let mut best_streak = 1u32;
    let mut run = 1u32;
    for pair in days.windows(2) {
        let gap = (pair[1].0 - pair[0].0).num_days();
        if gap == 0 {
            // Duplicate date, the snapshot invariant says this cannot happen.
            continue;
        }
        if gap == 1 {
            run += 1;
        } else {
            best_streak = best_streak.max(run);
            run = 1;
        }
    }
    best_streak = best_streak.max(run);

    // A future-dated last row is treated as still alive.
    let last_active = days[days.len() - 1].0;
    let idle_days = (today - last_active).num_days();
    let current_streak = if idle_days <= 1 { run } else { 0 };

    Streak {
        current_streak,
        best_streak,
        peak_day_battles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        let streak = analyze(&[], day(2024, 1, 5));

        assert_eq!(streak, Streak::default());
        assert_eq!(streak.best_streak, 0);
    }

    #[test]
    fn test_gap_breaks_current_but_keeps_best() {
        // Active 01-01..01-03, gap on 01-04, active again 01-05.
        let days = vec![
            (day(2024, 1, 1), 4),
            (day(2024, 1, 2), 6),
            (day(2024, 1, 3), 2),
            (day(2024, 1, 5), 3),
        ];
        let streak = analyze(&days, day(2024, 1, 5));

        assert_eq!(streak.current_streak, 1);
        assert_eq!(streak.best_streak, 3);
        assert_eq!(streak.peak_day_battles, 6);
    }

    #[test]
    fn test_current_streak_survives_one_idle_day() {
        let days = vec![(day(2024, 1, 3), 2), (day(2024, 1, 4), 5)];

        // Last active yesterday: still current.
        let streak = analyze(&days, day(2024, 1, 5));
        assert_eq!(streak.current_streak, 2);

        // Two idle days: current gone, best kept.
        let streak = analyze(&days, day(2024, 1, 6));
        assert_eq!(streak.current_streak, 0);
        assert_eq!(streak.best_streak, 2);
    }

    #[test]
    fn test_input_order_is_irrelevant() {
        let days = vec![
            (day(2024, 1, 3), 1),
            (day(2024, 1, 1), 1),
            (day(2024, 1, 2), 1),
        ];
        let streak = analyze(&days, day(2024, 1, 3));

        assert_eq!(streak.current_streak, 3);
        assert_eq!(streak.best_streak, 3);
    }

    #[test]
    fn test_zero_battle_days_are_ignored() {
        let days = vec![(day(2024, 1, 1), 0), (day(2024, 1, 2), 3)];
        let streak = analyze(&days, day(2024, 1, 2));

        assert_eq!(streak.current_streak, 1);
        assert_eq!(streak.best_streak, 1);
        assert_eq!(streak.peak_day_battles, 3);
    }

    #[test]
    fn test_best_always_at_least_current() {
        let cases = vec![
            vec![(day(2024, 1, 1), 1)],
            vec![(day(2024, 1, 1), 1), (day(2024, 1, 2), 2)],
            vec![(day(2024, 1, 1), 9), (day(2024, 1, 4), 1), (day(2024, 1, 5), 1)],
        ];
        for days in cases {
            let streak = analyze(&days, day(2024, 1, 5));
            assert!(streak.best_streak >= streak.current_streak);
        }
    }
}
