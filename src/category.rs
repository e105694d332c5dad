//! Category name mapping.
//!
//! Categories appear in the catalog as short codes; a small CSV maps each
//! code to its full display name and the source grouping it belongs to
//! (base game, DLC pack, collaboration, ...). The loader never raises to the
//! caller: a missing or unreadable file logs a warning and yields an empty
//! map, and the UI falls back to the short codes.

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Full name and source grouping for one category code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub full_name: String,
    pub source: String,
}

pub type CategoryMap = HashMap<String, CategoryInfo>;

/// Load the category mapping from `path`.
///
/// On success a synthetic `"All"` → "All Categories" entry is injected. On
/// any failure the error is logged and an empty map is returned, so callers
/// always get something usable.
#[must_use]
pub fn load_category_names(path: &Path) -> CategoryMap {
    match read_category_file(path) {
        Ok(mut map) => {
            map.insert(
                "All".to_string(),
                CategoryInfo {
                    full_name: "All Categories".to_string(),
                    source: "All".to_string(),
                },
            );
            debug!("Loaded {} category names from {}", map.len(), path.display());
            map
        }
        Err(err) => {
            warn!(
                "Could not load category names from {}: {err:#}",
                path.display()
            );
            CategoryMap::new()
        }
    }
}

fn read_category_file(path: &Path) -> Result<CategoryMap> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open category file at {}", path.display()))?;

    let mut map = CategoryMap::new();
    for result in reader.records() {
        let record =
            result.with_context(|| format!("Malformed category record in {}", path.display()))?;
        if record.len() < 3 {
            debug!("Skipping short category row: {record:?}");
            continue;
        }
        map.insert(
            record[0].to_string(),
            CategoryInfo {
                full_name: record[1].to_string(),
                source: record[2].to_string(),
            },
        );
    }
    Ok(map)
}

/// Display name for a category code, falling back to the code itself.
#[must_use]
pub fn full_name<'a>(map: &'a CategoryMap, code: &'a str) -> &'a str {
    map.get(code)
        .map(|info| info.full_name.as_str())
        .unwrap_or(code)
}

/// Categories grouped by their source, each group's `(code, full_name)`
/// pairs sorted by code. The synthetic `"All"` group is left out.
#[must_use]
pub fn grouped_by_source(map: &CategoryMap) -> BTreeMap<String, Vec<(String, String)>> {
    let mut groups: BTreeMap<String, Vec<(String, String)>> = BTreeMap::new();
    for (code, info) in map {
        if info.source == "All" {
            continue;
        }
        groups
            .entry(info.source.clone())
            .or_default()
            .push((code.clone(), info.full_name.clone()));
    }
    for members in groups.values_mut() {
        members.sort();
    }
    groups
}
