//! Candidate filtering over a loaded catalog.
//!
//! All user-facing toggle state lives in an explicit [`SelectionState`]
//! value, so the engine is a pure function from catalog plus state to
//! candidates. Results keep file row order, with tiers scanned in the fixed
//! NM, HD, MX, SC sequence per row, and are not deduplicated.

use crate::catalog::{Catalog, SongRow};
use crate::chart::{Candidate, Tier};
use anyhow::{bail, Result};
use log::trace;
use std::collections::BTreeSet;

/// Category restriction: everything, or an explicit set of short codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Selected(BTreeSet<String>),
}

impl CategoryFilter {
    /// Build from user-selected codes. An empty selection or one containing
    /// `"All"` means no restriction.
    pub fn from_codes<I, S>(codes: I) -> CategoryFilter
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = codes.into_iter().map(Into::into).collect();
        if set.is_empty() || set.contains("All") {
            CategoryFilter::All
        } else {
            CategoryFilter::Selected(set)
        }
    }

    fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Selected(set) => set.contains(category),
        }
    }
}

/// Key-mode restriction: one specific mode, or each row's own native mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyModeFilter {
    Native,
    Mode(String),
}

impl KeyModeFilter {
    /// Build from the user's selector value; `"All"` or empty means native.
    pub fn from_selection(mode: &str) -> KeyModeFilter {
        if mode.is_empty() || mode == "All" {
            KeyModeFilter::Native
        } else {
            KeyModeFilter::Mode(mode.to_string())
        }
    }
}

/// Inclusive level range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelRange {
    pub min: u32,
    pub max: u32,
}

impl LevelRange {
    #[must_use]
    pub fn new(min: u32, max: u32) -> LevelRange {
        LevelRange { min, max }
    }

    fn contains(self, level: u32) -> bool {
        self.min <= level && level <= self.max
    }
}

/// Everything the user has toggled, gathered into one value.
#[derive(Debug, Clone)]
pub struct SelectionState {
    pub categories: CategoryFilter,
    pub key_mode: KeyModeFilter,
    pub include_standard: bool,
    pub include_special: bool,
    pub standard_range: LevelRange,
    pub special_range: LevelRange,
}

impl Default for SelectionState {
    fn default() -> Self {
        SelectionState {
            categories: CategoryFilter::All,
            key_mode: KeyModeFilter::Native,
            include_standard: true,
            include_special: true,
            standard_range: LevelRange::new(1, 15),
            special_range: LevelRange::new(1, 15),
        }
    }
}

/// Collect every chart eligible under `state`.
///
/// A row passes the category filter first; each requested tier is then
/// resolved through the catalog's [`ChartIndex`](crate::catalog::ChartIndex).
/// Combinations the catalog does not define are skipped for that row, and a
/// level cell of `"0"` or non-numeric text never yields a candidate
/// regardless of range.
///
/// # Errors
///
/// Requesting a key mode the catalog defines no columns for at all is an
/// error rather than an empty result.
pub fn filter_songs(catalog: &Catalog, state: &SelectionState) -> Result<Vec<Candidate>> {
    if let KeyModeFilter::Mode(mode) = &state.key_mode {
        if !catalog.index.has_mode(mode) {
            let known: Vec<&str> = catalog.index.modes().collect();
            bail!(
                "Unknown key mode '{mode}'; the catalog defines: {}",
                known.join(", ")
            );
        }
    }

    let mut candidates = Vec::new();
    for row in &catalog.rows {
        if !state.categories.matches(&row.category) {
            continue;
        }

        let mode = match &state.key_mode {
            KeyModeFilter::Mode(mode) => mode.as_str(),
            KeyModeFilter::Native => row.native_mode.as_str(),
        };

        if state.include_standard {
            for tier in Tier::STANDARD {
                push_candidate(catalog, row, mode, tier, state.standard_range, &mut candidates);
            }
        }
        if state.include_special {
            push_candidate(catalog, row, mode, Tier::Sc, state.special_range, &mut candidates);
        }
    }

    trace!("{} candidates after filtering", candidates.len());
    Ok(candidates)
}

fn push_candidate(
    catalog: &Catalog,
    row: &SongRow,
    mode: &str,
    tier: Tier,
    range: LevelRange,
    candidates: &mut Vec<Candidate>,
) {
    // Mode/tier combinations the catalog never defines are skipped, not errors.
    let Some(column) = catalog.index.level_column(mode, tier) else {
        return;
    };
    let Some(text) = row.level_text(column) else {
        return;
    };
    // "0" marks an absent chart; anything non-numeric is treated the same way.
    let Ok(level) = text.parse::<u32>() else {
        return;
    };
    if level == 0 || !range.contains(level) {
        return;
    }

    candidates.push(Candidate {
        title: row.title.clone(),
        chart: format!("{mode} {tier}"),
        level: text.to_string(),
        category: row.category.clone(),
    });
}
