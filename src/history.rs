//! Append-only pick history.
//!
//! One pick per line, fields comma-joined: title, chart label, level,
//! category. Oldest entries come first on disk; display order is the
//! caller's concern. Single user, single process: no locking.

use crate::chart::{tier_of_chart, Candidate, Tier};
use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// One recorded pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub title: String,
    pub chart: String,
    pub level: String,
    pub category: String,
}

impl From<&Candidate> for HistoryEntry {
    fn from(candidate: &Candidate) -> Self {
        HistoryEntry {
            title: candidate.title.clone(),
            chart: candidate.chart.clone(),
            level: candidate.level.clone(),
            category: candidate.category.clone(),
        }
    }
}

impl HistoryEntry {
    /// Tier encoded in the chart label, if recognizable.
    #[must_use]
    pub fn tier(&self) -> Option<Tier> {
        tier_of_chart(&self.chart)
    }
}

/// The on-disk history file.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    #[must_use]
    pub fn new(path: PathBuf) -> HistoryStore {
        HistoryStore { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry, creating the file if needed.
    pub fn append(&self, entry: &HistoryEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open history file at {}", self.path.display()))?;
        writeln!(
            file,
            "{},{},{},{}",
            entry.title, entry.chart, entry.level, entry.category
        )
        .with_context(|| format!("Failed to write history entry to {}", self.path.display()))?;
        Ok(())
    }

    /// Read all entries, oldest first.
    ///
    /// A missing file is an empty history. Lines that do not split into
    /// exactly 4 comma-separated fields are dropped; fields are trimmed so
    /// histories written with the legacy `", category"` spacing still parse.
    pub fn load(&self) -> Result<Vec<HistoryEntry>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("No history file at {}; starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("Failed to open history file at {}", self.path.display())
                })
            }
        };

        let mut entries = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.with_context(|| {
                format!("Failed to read history file at {}", self.path.display())
            })?;
            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() != 4 {
                debug!("Dropping malformed history line: {line:?}");
                continue;
            }
            entries.push(HistoryEntry {
                title: fields[0].trim().to_string(),
                chart: fields[1].trim().to_string(),
                level: fields[2].trim().to_string(),
                category: fields[3].trim().to_string(),
            });
        }
        Ok(entries)
    }

    /// Truncate the history to empty, creating the file if absent.
    pub fn clear(&self) -> Result<()> {
        fs::write(&self.path, "")
            .with_context(|| format!("Failed to clear history file at {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, HistoryStore) {
        let dir = TempDir::new().expect("temp dir");
        let store = HistoryStore::new(dir.path().join("history.txt"));
        (dir, store)
    }

    fn entry(title: &str) -> HistoryEntry {
        HistoryEntry {
            title: title.to_string(),
            chart: "4B NM".to_string(),
            level: "5".to_string(),
            category: "Cat1".to_string(),
        }
    }

    #[test]
    fn append_then_load_round_trips() {
        let (_dir, store) = store();
        store.append(&entry("Song A")).expect("append");
        store.append(&entry("Song B")).expect("append");

        let entries = store.load().expect("load");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], entry("Song A"));
        assert_eq!(entries[1], entry("Song B"));
    }

    #[test]
    fn missing_file_is_empty_history() {
        let (_dir, store) = store();
        assert!(store.load().expect("load").is_empty());
    }

    #[test]
    fn malformed_lines_are_dropped() {
        let (dir, store) = store();
        std::fs::write(
            dir.path().join("history.txt"),
            "Song A,4B NM,5,Cat1\nnot a real line\ntoo,many,fields,here,extra\n",
        )
        .expect("write");

        let entries = store.load().expect("load");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Song A");
    }

    #[test]
    fn legacy_space_before_category_is_tolerated() {
        let (dir, store) = store();
        std::fs::write(dir.path().join("history.txt"), "Song A,4B NM,5, Cat1\n")
            .expect("write");

        let entries = store.load().expect("load");
        assert_eq!(entries[0].category, "Cat1");
    }

    #[test]
    fn clear_empties_the_history() {
        let (_dir, store) = store();
        store.append(&entry("Song A")).expect("append");
        store.clear().expect("clear");
        assert!(store.load().expect("load").is_empty());
    }

    #[test]
    fn clear_on_missing_file_creates_empty_one() {
        let (_dir, store) = store();
        store.clear().expect("clear");
        assert!(store.path().exists());
        assert!(store.load().expect("load").is_empty());
    }

    #[test]
    fn spec_example_clear_after_single_line() {
        let (dir, store) = store();
        std::fs::write(dir.path().join("history.txt"), "Song A,4B NM,5,Cat1\n")
            .expect("write");
        store.clear().expect("clear");
        assert!(store.load().expect("load").is_empty());
    }

    #[test]
    fn entry_from_candidate_keeps_all_fields() {
        let candidate = Candidate {
            title: "Song A".to_string(),
            chart: "4B SC".to_string(),
            level: "12".to_string(),
            category: "Cat1".to_string(),
        };
        let entry = HistoryEntry::from(&candidate);
        assert_eq!(entry.title, "Song A");
        assert_eq!(entry.tier(), Some(Tier::Sc));
    }
}
