//! Chart catalog loading.
//!
//! The catalog is a CSV file: column 0 is the song title, column 1 the short
//! category code, column 2 a field whose first two characters are the chart's
//! native key mode. Every later column named `"<mode> <tier>"` holds that
//! chart's level as text, with `"0"` meaning the chart does not exist.
//!
//! The catalog is re-read on every query; there is no caching layer. Column
//! positions are resolved once per load into a [`ChartIndex`] so that filter
//! code asks for `(mode, tier)` pairs instead of poking at header strings.

use crate::chart::Tier;
use anyhow::{Context, Result};
use log::debug;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

/// Columns before the per-mode level fields: title, category, native-mode.
const LEVEL_COLUMNS_START: usize = 3;

/// One catalog entry.
#[derive(Debug, Clone)]
pub struct SongRow {
    pub title: String,
    pub category: String,
    /// Key mode this chart was authored for, from the fixed-width prefix of
    /// column 2 (e.g. `"4B"`).
    pub native_mode: String,
    fields: Vec<String>,
}

impl SongRow {
    fn from_record(record: &csv::StringRecord) -> SongRow {
        let native_mode = record
            .get(2)
            .map(|field| field.chars().take(2).collect())
            .unwrap_or_default();

        SongRow {
            title: record.get(0).unwrap_or_default().to_string(),
            category: record.get(1).unwrap_or_default().to_string(),
            native_mode,
            fields: record.iter().map(str::to_string).collect(),
        }
    }

    /// Raw level text at a [`ChartIndex`] column, if the row has that column.
    #[must_use]
    pub fn level_text(&self, column: usize) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }
}

/// Typed lookup from `(key mode, tier)` to the catalog column holding the
/// level, built once from the header row.
///
/// Combinations the catalog never defines resolve to `None` instead of
/// falling through a string lookup.
#[derive(Debug, Clone, Default)]
pub struct ChartIndex {
    columns: HashMap<(String, Tier), usize>,
    modes: BTreeSet<String>,
}

impl ChartIndex {
    fn from_headers(headers: &csv::StringRecord) -> ChartIndex {
        let mut index = ChartIndex::default();
        for (position, name) in headers.iter().enumerate().skip(LEVEL_COLUMNS_START) {
            let Some((mode, tier_label)) = name.split_once(' ') else {
                continue;
            };
            let Some(tier) = Tier::parse(tier_label) else {
                continue;
            };
            index.modes.insert(mode.to_string());
            index.columns.insert((mode.to_string(), tier), position);
        }
        index
    }

    /// Column holding the level for this `(mode, tier)` combination.
    #[must_use]
    pub fn level_column(&self, mode: &str, tier: Tier) -> Option<usize> {
        self.columns.get(&(mode.to_string(), tier)).copied()
    }

    /// Whether the catalog defines any chart column for this key mode.
    #[must_use]
    pub fn has_mode(&self, mode: &str) -> bool {
        self.modes.contains(mode)
    }

    /// Every key mode the catalog defines, sorted.
    pub fn modes(&self) -> impl Iterator<Item = &str> {
        self.modes.iter().map(String::as_str)
    }
}

/// A loaded chart catalog: rows in file order plus the header index.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub rows: Vec<SongRow>,
    pub index: ChartIndex,
}

impl Catalog {
    /// Read the catalog CSV at `path`.
    ///
    /// Rows too short to carry title/category/native-mode are skipped. A
    /// missing or unreadable file is an error; callers that want the
    /// original "degrade to empty" behavior handle it at the command layer.
    pub fn load(path: &Path) -> Result<Catalog> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("Failed to open chart catalog at {}", path.display()))?;

        let headers = reader
            .headers()
            .with_context(|| format!("Failed to read catalog header from {}", path.display()))?
            .clone();
        let index = ChartIndex::from_headers(&headers);

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result
                .with_context(|| format!("Malformed catalog record in {}", path.display()))?;
            if record.len() < LEVEL_COLUMNS_START {
                debug!("Skipping short catalog row: {record:?}");
                continue;
            }
            rows.push(SongRow::from_record(&record));
        }

        debug!(
            "Loaded {} charts across {} key modes from {}",
            rows.len(),
            index.modes.len(),
            path.display()
        );
        Ok(Catalog { rows, index })
    }

    /// Distinct category codes present in the catalog, sorted.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let unique: BTreeSet<&str> = self.rows.iter().map(|row| row.category.as_str()).collect();
        unique.into_iter().map(str::to_string).collect()
    }
}
