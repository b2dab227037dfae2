//! Club activity event log entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category of a logged club event.
///
/// Only `Battle` events feed the inactivity probe; membership events are
/// carried for the presentation layer and for future trend work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Battle,
    Join,
    Leave,
    Promotion,
    Demotion,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Battle => write!(f, "battle"),
            EventCategory::Join => write!(f, "join"),
            EventCategory::Leave => write!(f, "leave"),
            EventCategory::Promotion => write!(f, "promotion"),
            EventCategory::Demotion => write!(f, "demotion"),
        }
    }
}

/// One logged event for one player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleEvent {
    /// Player tag, possibly without the leading marker depending on the log source
    pub tag: String,

    /// What happened
    pub category: EventCategory,

    /// When it happened
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_snake_case() {
        let json = serde_json::to_string(&EventCategory::Promotion).unwrap();
        assert_eq!(json, "\"promotion\"");
    }

    #[test]
    fn test_event_round_trip() {
        let event = BattleEvent {
            tag: "#QRS".to_string(),
            category: EventCategory::Battle,
            timestamp: "2024-03-01T18:30:00Z".parse().unwrap(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let parsed: BattleEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.tag, event.tag);
        assert_eq!(parsed.category, EventCategory::Battle);
        assert_eq!(parsed.timestamp, event.timestamp);
    }
}
