//! Club-level insight synthesis.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Duration, Utc};

use crate::models::{
    tag_variants, ActivityWindow, BattleEvent, EventCategory, RosterMember, TrendDirection,
};

/// Club-wide win rate over a window as a rounded percentage.
/// Zero battles across the club yields 0, never a division error.
pub fn club_win_rate(windows: &HashMap<String, ActivityWindow>) -> u32 {
    let battles: u64 = windows.values().map(|w| w.battles as u64).sum();
    let wins: u64 = windows.values().map(|w| w.wins as u64).sum();
    if battles == 0 {
        0
    } else {
        (100.0 * wins as f64 / battles as f64).round() as u32
    }
}

/// Roster members with no battle event in the trailing window, sorted by
/// display name (ties by tag).
///
/// An event exactly at the window's lower bound counts as activity, so a
/// player whose only battle sits on the boundary is not a candidate.
/// Membership events never count. Tag matching goes through the variant
/// set since event logs are loosely formatted.
pub fn kick_candidates(
    roster: &[RosterMember],
    events: &[BattleEvent],
    now: DateTime<Utc>,
    window_hours: i64,
) -> Vec<String> {
    let cutoff = now - Duration::hours(window_hours);

    let mut active: HashSet<String> = HashSet::new();
    for event in events {
        if event.category == EventCategory::Battle && event.timestamp >= cutoff {
            active.extend(tag_variants(&event.tag));
        }
    }

    let mut candidates: Vec<&RosterMember> = roster
        .iter()
        .filter(|member| !tag_variants(&member.tag).iter().any(|v| active.contains(v)))
        .collect();
    candidates.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.tag.cmp(&b.tag)));

    candidates.into_iter().map(|m| m.name.clone()).collect()
}

/// Week-over-week battle volume change.
///
/// Returns the rounded percent diff and its direction. A previous week of
/// zero battles maps to 100 when anything happened this week (new activity)
/// and 0 otherwise. Diffs inside the ±`flat_band` read as flat.
pub fn activity_trend(
    this_week: u64,
    prev_week: u64,
    flat_band: i64,
) -> (i64, TrendDirection) {
    let diff = if prev_week > 0 {
        let change = this_week as f64 - prev_week as f64;
        (100.0 * change / prev_week as f64).round() as i64
    } else if this_week > 0 {
        100
    } else {
        0
    };

    let direction = if diff > flat_band {
        TrendDirection::Up
    } else if diff < -flat_band {
        TrendDirection::Down
    } else {
        TrendDirection::Flat
    };

    (diff, direction)
}

/// The member with the largest positive weekly trophy gain.
///
/// Ties on the maximum resolve to the lowest tag, an explicit rule rather
/// than whatever order the aggregation map iterates in. Nobody gaining
/// means no MVP.
pub fn select_mvp(
    weekly: &HashMap<String, ActivityWindow>,
    roster: &[RosterMember],
) -> Option<(String, u32)> {
    let mut gainers: Vec<(&str, &str, u32)> = roster
        .iter()
        .filter_map(|member| {
            let gained = tag_variants(&member.tag)
                .iter()
                .filter_map(|v| weekly.get(v))
                .map(|w| w.trophies_gained)
                .max()?;
            (gained > 0).then_some((member.tag.as_str(), member.name.as_str(), gained))
        })
        .collect();
    gainers.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| a.0.cmp(b.0)));

    gainers
        .first()
        .map(|(_, name, gained)| (name.to_string(), *gained))
}
