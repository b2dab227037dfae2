//! Enriched member records and ranking models.

use serde::{Deserialize, Serialize};

use super::{ActivityWindow, ClubRole, Streak};

/// Weekly window sums plus the derived metrics the rankings sort on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyActivity {
    pub battles: u32,
    pub wins: u32,
    pub losses: u32,
    pub star_player: u32,
    pub trophies_gained: u32,
    pub trophies_lost: u32,
    pub active_days: u32,

    /// Rounded percentage; 0 when no battles were played this week
    pub win_rate: u32,

    /// trophies_gained − trophies_lost, may be negative
    pub net_trophies: i64,
}

impl From<ActivityWindow> for WeeklyActivity {
    fn from(window: ActivityWindow) -> Self {
        Self {
            battles: window.battles,
            wins: window.wins,
            losses: window.losses,
            star_player: window.star_player,
            trophies_gained: window.trophies_gained,
            trophies_lost: window.trophies_lost,
            active_days: window.active_days,
            win_rate: window.win_rate_pct(),
            net_trophies: window.net_trophies(),
        }
    }
}

/// One roster member joined with their aggregates and streaks.
///
/// This is both the ranking entry type and the detail-view record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberRecord {
    /// Canonical player tag
    pub tag: String,
    pub name: String,
    pub role: ClubRole,
    pub trophies: u32,
    pub highest_trophies: u32,
    pub brawler_count: u32,
    pub club_rank: u32,

    pub all_time: ActivityWindow,
    pub weekly: WeeklyActivity,
    pub streak: Streak,
}

/// The ranking rules. Each rule filters, sorts, and caps independently over
/// the full enriched roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingKind {
    TrophyLeaders,
    WeeklyBattlers,
    WeeklyWinRate,
    WeeklyTrophyGainers,
    WeeklyStarPlayers,
    MostActive,
    AllTimeBattlers,
}

impl RankingKind {
    pub const ALL: [RankingKind; 7] = [
        RankingKind::TrophyLeaders,
        RankingKind::WeeklyBattlers,
        RankingKind::WeeklyWinRate,
        RankingKind::WeeklyTrophyGainers,
        RankingKind::WeeklyStarPlayers,
        RankingKind::MostActive,
        RankingKind::AllTimeBattlers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RankingKind::TrophyLeaders => "trophy_leaders",
            RankingKind::WeeklyBattlers => "weekly_battlers",
            RankingKind::WeeklyWinRate => "weekly_win_rate",
            RankingKind::WeeklyTrophyGainers => "weekly_trophy_gainers",
            RankingKind::WeeklyStarPlayers => "weekly_star_players",
            RankingKind::MostActive => "most_active",
            RankingKind::AllTimeBattlers => "all_time_battlers",
        }
    }
}

impl std::fmt::Display for RankingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RankingKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RankingKind::ALL
            .iter()
            .find(|k| k.as_str() == s)
            .copied()
            .ok_or_else(|| format!("unknown ranking: {}", s))
    }
}

/// A named, ordered, length-capped ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ranking {
    pub kind: RankingKind,
    pub entries: Vec<MemberRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekly_activity_from_window() {
        let window = ActivityWindow {
            battles: 10,
            wins: 7,
            losses: 3,
            trophies_gained: 80,
            trophies_lost: 30,
            active_days: 4,
            ..Default::default()
        };
        let weekly = WeeklyActivity::from(window);

        assert_eq!(weekly.win_rate, 70);
        assert_eq!(weekly.net_trophies, 50);
        assert_eq!(weekly.active_days, 4);
    }

    #[test]
    fn test_ranking_kind_parse_round_trip() {
        for kind in RankingKind::ALL {
            let parsed: RankingKind = kind.as_str().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_ranking_kind_parse_unknown() {
        assert!("podium_rate".parse::<RankingKind>().is_err());
    }
}
