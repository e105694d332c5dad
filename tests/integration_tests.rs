//! # Integration Tests for Rondo
//!
//! This module contains integration tests that exercise the full pick
//! workflow from a user perspective: loading a catalog, filtering it,
//! rolling a pick, and recording it in the history file.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

use rondo::catalog::Catalog;
use rondo::filter::{self, CategoryFilter, KeyModeFilter, LevelRange, SelectionState};
use rondo::history::{HistoryEntry, HistoryStore};
use rondo::{category, pick};

/// Test helper to create a working directory with catalog and category files
fn create_test_fixtures() -> Result<(TempDir, PathBuf, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let catalog_path = temp_dir.path().join("SongList.csv");
    let category_path = temp_dir.path().join("CategoryNames.csv");

    fs::write(
        &catalog_path,
        "\
Title,Category,Mode,4B NM,4B HD,4B MX,4B SC,5B NM,5B HD,5B MX,5B SC
Song A,RES,4B,5,8,12,0,0,0,0,0
Song B,TRI,5B,0,0,0,0,4,7,11,13
Song C,RES,4B,2,6,9,14,0,0,0,0
Song D,CLA,4B,3,5,10,0,0,0,0,0
",
    )?;
    fs::write(
        &category_path,
        "\
Short,Full,Source
RES,Respect,Base
TRI,Trilogy,DLC
CLA,Clazziquai,DLC
",
    )?;

    Ok((temp_dir, catalog_path, category_path))
}

mod pick_workflow_tests {
    use super::*;

    #[test]
    fn filter_pick_and_history_round_trip() -> Result<()> {
        let (temp_dir, catalog_path, category_path) = create_test_fixtures()?;
        let history_path = temp_dir.path().join("history.txt");

        let catalog = Catalog::load(&catalog_path)?;
        let state = SelectionState {
            key_mode: KeyModeFilter::Mode("4B".to_string()),
            ..SelectionState::default()
        };
        let candidates = filter::filter_songs(&catalog, &state)?;
        assert!(!candidates.is_empty());

        let candidate = pick::pick_random(&candidates).expect("non-empty candidates");
        let store = HistoryStore::new(history_path);
        store.append(&HistoryEntry::from(candidate))?;

        let entries = store.load()?;
        assert_eq!(entries.last(), Some(&HistoryEntry::from(candidate)));

        // The recorded pick formats with the full category name.
        let categories = category::load_category_names(&category_path);
        let display = pick::format_pick(candidate, &categories, false);
        let full_name = category::full_name(&categories, &candidate.category);
        assert!(display.starts_with(full_name));
        Ok(())
    }

    #[test]
    fn repeated_picks_accumulate_in_order() -> Result<()> {
        let (temp_dir, catalog_path, _) = create_test_fixtures()?;
        let history_path = temp_dir.path().join("history.txt");

        let catalog = Catalog::load(&catalog_path)?;
        let candidates = filter::filter_songs(&catalog, &SelectionState::default())?;
        let store = HistoryStore::new(history_path);

        for _ in 0..5 {
            let candidate = pick::pick_random(&candidates).expect("non-empty candidates");
            store.append(&HistoryEntry::from(candidate))?;
        }

        let entries = store.load()?;
        assert_eq!(entries.len(), 5);
        // Every recorded entry is one of the filtered candidates.
        for entry in &entries {
            assert!(candidates
                .iter()
                .any(|c| HistoryEntry::from(c) == *entry));
        }
        Ok(())
    }

    #[test]
    fn clear_history_then_load_is_empty() -> Result<()> {
        let (temp_dir, _, _) = create_test_fixtures()?;
        let history_path = temp_dir.path().join("history.txt");
        fs::write(&history_path, "Song A,4B NM,5,RES\n")?;

        let store = HistoryStore::new(history_path);
        assert_eq!(store.load()?.len(), 1);
        store.clear()?;
        assert!(store.load()?.is_empty());
        Ok(())
    }
}

mod filter_property_tests {
    use super::*;

    #[test]
    fn zero_levels_never_become_candidates() -> Result<()> {
        let (_temp_dir, catalog_path, _) = create_test_fixtures()?;
        let catalog = Catalog::load(&catalog_path)?;

        let state = SelectionState {
            key_mode: KeyModeFilter::Mode("4B".to_string()),
            ..SelectionState::default()
        };
        let candidates = filter::filter_songs(&catalog, &state)?;

        // Song A's 4B SC cell is 0: no SC candidate for it.
        assert!(candidates.contains(&rondo::chart::Candidate {
            title: "Song A".to_string(),
            chart: "4B NM".to_string(),
            level: "5".to_string(),
            category: "RES".to_string(),
        }));
        assert!(!candidates
            .iter()
            .any(|c| c.title == "Song A" && c.chart == "4B SC"));
        Ok(())
    }

    #[test]
    fn ranges_bound_each_tier_kind_inclusively() -> Result<()> {
        let (_temp_dir, catalog_path, _) = create_test_fixtures()?;
        let catalog = Catalog::load(&catalog_path)?;

        let state = SelectionState {
            key_mode: KeyModeFilter::Mode("4B".to_string()),
            standard_range: LevelRange::new(5, 10),
            special_range: LevelRange::new(14, 15),
            ..SelectionState::default()
        };
        for candidate in filter::filter_songs(&catalog, &state)? {
            let level: u32 = candidate.level.parse()?;
            if candidate.tier() == Some(rondo::chart::Tier::Sc) {
                assert!((14..=15).contains(&level));
            } else {
                assert!((5..=10).contains(&level));
            }
        }
        Ok(())
    }

    #[test]
    fn all_categories_matches_union_of_individual_queries() -> Result<()> {
        let (_temp_dir, catalog_path, _) = create_test_fixtures()?;
        let catalog = Catalog::load(&catalog_path)?;

        let all = filter::filter_songs(&catalog, &SelectionState::default())?;
        let mut union = Vec::new();
        for code in catalog.categories() {
            let state = SelectionState {
                categories: CategoryFilter::from_codes([code]),
                ..SelectionState::default()
            };
            union.extend(filter::filter_songs(&catalog, &state)?);
        }

        assert_eq!(all.len(), union.len());
        for candidate in &all {
            assert!(union.contains(candidate));
        }
        Ok(())
    }

    #[test]
    fn native_key_mode_resolution_uses_row_prefix() -> Result<()> {
        let (_temp_dir, catalog_path, _) = create_test_fixtures()?;
        let catalog = Catalog::load(&catalog_path)?;

        // keyMode=All on the 5B-native Song B resolves "5B NM" etc.,
        // never a literal "All NM".
        let candidates = filter::filter_songs(&catalog, &SelectionState::default())?;
        let song_b: Vec<&str> = candidates
            .iter()
            .filter(|c| c.title == "Song B")
            .map(|c| c.chart.as_str())
            .collect();
        assert_eq!(song_b, vec!["5B NM", "5B HD", "5B MX", "5B SC"]);
        Ok(())
    }
}

mod cli_tests {
    use super::*;

    #[test]
    fn test_cli_help_displays_correctly() {
        let output = Command::new("cargo")
            .args(["run", "--", "--help"])
            .output()
            .expect("Failed to run help command");

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("rondo"));
        assert!(stdout.contains("pick"));
        assert!(stdout.contains("candidates"));
        assert!(stdout.contains("categories"));
        assert!(stdout.contains("history"));
        assert!(stdout.contains("clear-history"));
    }

    #[test]
    fn test_cli_version_flag() {
        let output = Command::new("cargo")
            .args(["run", "--", "--version"])
            .output()
            .expect("Failed to run version command");

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("rondo"));
        assert!(stdout.contains("1.2.0"));
    }

    #[test]
    fn test_pick_degrades_without_catalog() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let output = Command::new("cargo")
            .args(["run", "--", "pick"])
            .env("RONDO_CATALOG", temp_dir.path().join("missing.csv"))
            .env("RONDO_HISTORY", temp_dir.path().join("history.txt"))
            .output()
            .expect("Failed to run pick command");

        // Missing catalog is a message, not a crash.
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("nothing to pick from"));
        Ok(())
    }

    #[test]
    fn test_completion_generation() {
        let output = Command::new("cargo")
            .args(["run", "--", "completion", "bash"])
            .output()
            .expect("Failed to run completion command");

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("_rondo"));
        assert!(stdout.contains("complete"));
    }
}
