//! Snapshot loading from external data sources.
//!
//! The aggregation core is pure; this module is the seam to whatever
//! produced the data. Sources expose three independent read-only tables
//! which are fetched concurrently and joined into one materialized
//! [`ClubSnapshot`] before the synchronous pipeline runs.

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use crate::models::{BattleEvent, PlayerDailyStat, RosterMember};
use crate::storage::{EntityType, JsonlReader, StorageConfig, StorageError};

/// Errors that can occur while loading a snapshot.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Source unavailable: {0}")]
    Unavailable(String),
}

/// One consistent, immutable view of the club's data.
#[derive(Debug, Clone)]
pub struct ClubSnapshot {
    /// Current members; this list is the membership set for all analytics
    pub roster: Vec<RosterMember>,
    pub daily_stats: Vec<PlayerDailyStat>,
    pub events: Vec<BattleEvent>,
}

/// A provider of the three input tables.
#[async_trait]
pub trait ClubDataSource: Send + Sync {
    async fn roster(&self) -> Result<Vec<RosterMember>, SourceError>;
    async fn daily_stats(&self) -> Result<Vec<PlayerDailyStat>, SourceError>;
    async fn battle_events(&self) -> Result<Vec<BattleEvent>, SourceError>;
}

/// Fetch all tables concurrently and materialize the snapshot.
///
/// The three queries are independent reads over disjoint tables, so they
/// run in parallel; the pipeline starts only once all of them land.
pub async fn load_snapshot(source: &dyn ClubDataSource) -> Result<ClubSnapshot, SourceError> {
    let (roster, daily_stats, events) = tokio::try_join!(
        source.roster(),
        source.daily_stats(),
        source.battle_events()
    )?;

    info!(
        members = roster.len(),
        daily_rows = daily_stats.len(),
        events = events.len(),
        "loaded club snapshot"
    );

    Ok(ClubSnapshot {
        roster,
        daily_stats,
        events,
    })
}

/// Data source backed by JSONL snapshot files on disk.
pub struct JsonlSource {
    storage: StorageConfig,
}

impl JsonlSource {
    pub fn new(storage: StorageConfig) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl ClubDataSource for JsonlSource {
    async fn roster(&self) -> Result<Vec<RosterMember>, SourceError> {
        let reader = JsonlReader::for_entity(&self.storage, EntityType::Member);
        Ok(reader.read_all()?)
    }

    async fn daily_stats(&self) -> Result<Vec<PlayerDailyStat>, SourceError> {
        let reader = JsonlReader::for_entity(&self.storage, EntityType::DailyStat);
        Ok(reader.read_all()?)
    }

    async fn battle_events(&self) -> Result<Vec<BattleEvent>, SourceError> {
        let reader = JsonlReader::for_entity(&self.storage, EntityType::BattleEvent);
        Ok(reader.read_all()?)
    }
}
