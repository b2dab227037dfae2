//! Core data models for the club tracker.

mod activity;
mod battle_event;
mod daily_stat;
mod insight;
mod leaderboard;
mod member;
mod tag;

pub use activity::*;
pub use battle_event::*;
pub use daily_stat::*;
pub use insight::*;
pub use leaderboard::*;
pub use member::*;
pub use tag::*;
