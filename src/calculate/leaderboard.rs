//! Roster enrichment and ranking construction.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::{
    normalize_tag, ActivityWindow, MemberRecord, Ranking, RankingKind, RosterMember, Streak,
    WeeklyActivity,
};

/// Join roster members with their weekly/all-time aggregates and streaks.
///
/// The roster is the membership set: daily rows or streaks for players no
/// longer on it never surface here. Missing aggregate entries default to
/// all-zero blocks.
pub fn enrich_members(
    roster: &[RosterMember],
    weekly: &HashMap<String, ActivityWindow>,
    all_time: &HashMap<String, ActivityWindow>,
    streaks: &HashMap<String, Streak>,
) -> Vec<MemberRecord> {
    roster
        .iter()
        .map(|member| {
            let tag = normalize_tag(&member.tag).unwrap_or_else(|| member.tag.clone());
            let weekly_window = weekly.get(&tag).copied().unwrap_or_default();
            let all_time_window = all_time.get(&tag).copied().unwrap_or_default();
            let streak = streaks.get(&tag).copied().unwrap_or_default();

            MemberRecord {
                tag,
                name: member.name.clone(),
                role: member.role,
                trophies: member.trophies,
                highest_trophies: member.highest_trophies,
                brawler_count: member.brawler_count,
                club_rank: member.club_rank,
                all_time: all_time_window,
                weekly: WeeklyActivity::from(weekly_window),
                streak,
            }
        })
        .collect()
}

fn qualifies(kind: RankingKind, member: &MemberRecord, min_win_rate_battles: u32) -> bool {
    match kind {
        RankingKind::TrophyLeaders => true,
        RankingKind::WeeklyBattlers => member.weekly.battles > 0,
        // Minimum sample size so a 2-0 week does not outrank a 40-30 one.
        RankingKind::WeeklyWinRate => member.weekly.battles >= min_win_rate_battles,
        RankingKind::WeeklyTrophyGainers => member.weekly.net_trophies != 0,
        RankingKind::WeeklyStarPlayers => member.weekly.star_player > 0,
        RankingKind::MostActive => member.all_time.active_days > 0,
        RankingKind::AllTimeBattlers => member.all_time.battles > 0,
    }
}

fn compare(kind: RankingKind, a: &MemberRecord, b: &MemberRecord) -> Ordering {
    let by_metric = match kind {
        RankingKind::TrophyLeaders => b.trophies.cmp(&a.trophies),
        RankingKind::WeeklyBattlers => b.weekly.battles.cmp(&a.weekly.battles),
        RankingKind::WeeklyWinRate => b.weekly.win_rate.cmp(&a.weekly.win_rate),
        RankingKind::WeeklyTrophyGainers => b.weekly.net_trophies.cmp(&a.weekly.net_trophies),
        RankingKind::WeeklyStarPlayers => b.weekly.star_player.cmp(&a.weekly.star_player),
        RankingKind::MostActive => b
            .all_time
            .active_days
            .cmp(&a.all_time.active_days)
            .then(b.streak.current_streak.cmp(&a.streak.current_streak)),
        RankingKind::AllTimeBattlers => b.all_time.battles.cmp(&a.all_time.battles),
    };
    // Explicit final tie-break so output never depends on input order.
    by_metric.then_with(|| a.tag.cmp(&b.tag))
}

/// Apply one ranking rule over the full enriched set.
pub fn rank(
    kind: RankingKind,
    members: &[MemberRecord],
    cap: usize,
    min_win_rate_battles: u32,
) -> Ranking {
    let mut entries: Vec<MemberRecord> = members
        .iter()
        .filter(|m| qualifies(kind, m, min_win_rate_battles))
        .cloned()
        .collect();
    entries.sort_by(|a, b| compare(kind, a, b));
    entries.truncate(cap);

    Ranking { kind, entries }
}

/// Build every ranking. Each rule is independent; none refines another's
/// output.
pub fn build_rankings(
    members: &[MemberRecord],
    cap: usize,
    min_win_rate_battles: u32,
) -> Vec<Ranking> {
    RankingKind::ALL
        .iter()
        .map(|kind| rank(*kind, members, cap, min_win_rate_battles))
        .collect()
}
