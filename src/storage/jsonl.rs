//! JSONL (JSON Lines) snapshot reading.
//!
//! Each line is a valid JSON object representing one entity. A missing
//! file reads as empty, and malformed lines are skipped with a warning:
//! a half-written snapshot degrades the report instead of failing it.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{StorageConfig, StorageError};

/// Entity types in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityType {
    Member,
    DailyStat,
    BattleEvent,
}

impl EntityType {
    /// Get the filename for this entity type.
    pub fn filename(&self) -> &'static str {
        match self {
            EntityType::Member => "members.jsonl",
            EntityType::DailyStat => "daily_stats.jsonl",
            EntityType::BattleEvent => "battle_events.jsonl",
        }
    }
}

/// JSONL file reader.
pub struct JsonlReader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> JsonlReader<T> {
    /// Create a new JSONL reader for the given path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Create a reader for a specific entity type.
    pub fn for_entity(config: &StorageConfig, entity: EntityType) -> Self {
        Self::new(config.snapshot_dir().join(entity.filename()))
    }

    /// Check if the file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read all entities from the file.
    pub fn read_all(&self) -> Result<Vec<T>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut entities = Vec::new();
        let mut line_num = 0;

        for line in reader.lines() {
            line_num += 1;
            let line = line?;

            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str(&line) {
                Ok(entity) => entities.push(entity),
                Err(e) => {
                    warn!(
                        "Failed to parse line {} in {:?}: {}",
                        line_num, self.path, e
                    );
                }
            }
        }

        debug!("Read {} entities from {:?}", entities.len(), self.path);
        Ok(entities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlayerDailyStat, RosterMember};
    use std::io::Write;

    fn write_lines(path: &PathBuf, lines: &[&str]) {
        let mut file = File::create(path).unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
    }

    #[test]
    fn test_read_missing_file_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let reader: JsonlReader<RosterMember> =
            JsonlReader::new(tmp.path().join("members.jsonl"));

        assert!(!reader.exists());
        assert!(reader.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_read_all_members() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("members.jsonl");
        write_lines(
            &path,
            &[
                r##"{"tag": "#A", "name": "ana", "trophies": 30000}"##,
                r##"{"tag": "#B", "name": "bo"}"##,
            ],
        );

        let reader: JsonlReader<RosterMember> = JsonlReader::new(path);
        let members = reader.read_all().unwrap();

        assert_eq!(members.len(), 2);
        assert_eq!(members[0].trophies, 30000);
        assert_eq!(members[1].trophies, 0);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("daily_stats.jsonl");
        write_lines(
            &path,
            &[
                r##"{"tag": "#A", "date": "2024-03-01", "battles": 5}"##,
                "not json",
                "",
                r##"{"tag": "#A", "date": "not-a-date", "battles": 5}"##,
                r##"{"tag": "#B", "date": "2024-03-02", "battles": 2}"##,
            ],
        );

        let reader: JsonlReader<PlayerDailyStat> = JsonlReader::new(path);
        let rows = reader.read_all().unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].tag, "#A");
        assert_eq!(rows[1].tag, "#B");
    }

    #[test]
    fn test_for_entity_path() {
        let config = StorageConfig::new(PathBuf::from("/data"));
        let reader: JsonlReader<RosterMember> =
            JsonlReader::for_entity(&config, EntityType::Member);

        assert_eq!(reader.path, PathBuf::from("/data/snapshot/members.jsonl"));
    }
}
