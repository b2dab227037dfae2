//! Engagement analytics engine.
//!
//! Pure functions that turn snapshot data into derived metrics:
//! - Window aggregation of daily statistic rows
//! - Consecutive-day streak analysis
//! - Leaderboard enrichment and ranking
//! - Club-level insight synthesis (trend, MVP, kick list)

pub mod insight;
pub mod leaderboard;
pub mod streak;
pub mod window;

use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AnalyticsConfig;
use crate::fetch::ClubSnapshot;
use crate::models::{normalize_tag, ClubInsight, MemberRecord, Ranking, Streak};

use window::{aggregate_window, DateWindow};

/// Everything derived from one snapshot at one as-of time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubReport {
    pub generated_at: DateTime<Utc>,
    pub rankings: Vec<Ranking>,
    pub insight: ClubInsight,
    pub members: Vec<MemberRecord>,
}

fn streaks_by_player(snapshot: &ClubSnapshot, today: NaiveDate) -> HashMap<String, Streak> {
    let mut active_days: HashMap<String, Vec<(NaiveDate, u32)>> = HashMap::new();
    for row in &snapshot.daily_stats {
        if row.battles == 0 {
            continue;
        }
        let Some(tag) = normalize_tag(&row.tag) else {
            continue;
        };
        active_days
            .entry(tag)
            .or_default()
            .push((row.date, row.battles));
    }

    active_days
        .into_iter()
        .map(|(tag, days)| (tag, streak::analyze(&days, today)))
        .collect()
}

/// Run the full synchronous aggregation pipeline over a materialized
/// snapshot. Pure: the same snapshot, as-of time, and config always
/// produce the same report.
pub fn build_report(
    snapshot: &ClubSnapshot,
    as_of: DateTime<Utc>,
    config: &AnalyticsConfig,
) -> ClubReport {
    let today = as_of.date_naive();
    let week_start = today - Duration::days(config.window_days - 1);
    let prev_week_start = week_start - Duration::days(config.window_days);

    let weekly = aggregate_window(&snapshot.daily_stats, &DateWindow::since(week_start));
    let prev_week = aggregate_window(
        &snapshot.daily_stats,
        &DateWindow::between(prev_week_start, week_start),
    );
    let all_time = aggregate_window(&snapshot.daily_stats, &DateWindow::all_time());
    let streaks = streaks_by_player(snapshot, today);

    let members = leaderboard::enrich_members(&snapshot.roster, &weekly, &all_time, &streaks);
    let rankings =
        leaderboard::build_rankings(&members, config.ranking_cap, config.min_win_rate_battles);

    let this_week_battles: u64 = weekly.values().map(|w| w.battles as u64).sum();
    let prev_week_battles: u64 = prev_week.values().map(|w| w.battles as u64).sum();
    let (trend_diff, trend_direction) =
        insight::activity_trend(this_week_battles, prev_week_battles, config.trend_flat_band);

    let kick_list = insight::kick_candidates(
        &snapshot.roster,
        &snapshot.events,
        as_of,
        config.kick_window_hours,
    );
    let (mvp_name, mvp_trophies) = match insight::select_mvp(&weekly, &snapshot.roster) {
        Some((name, trophies)) => (Some(name), trophies),
        None => (None, 0),
    };

    debug!(
        members = members.len(),
        this_week_battles, prev_week_battles, "built club report"
    );

    ClubReport {
        generated_at: as_of,
        rankings,
        insight: ClubInsight {
            win_rate: insight::club_win_rate(&weekly),
            kick_count: kick_list.len() as u32,
            kick_list,
            trend_diff,
            trend_direction,
            mvp_name,
            mvp_trophies,
        },
        members,
    }
}
