//! # Rondo - Rhythm-Game Chart Roulette
//!
//! Rondo picks a random chart from a CSV catalog, filtered by category,
//! key mode, and per-tier level ranges, and keeps a flat-file history of
//! past picks.
//!
//! ## Architecture
//!
//! - `cli`: Command-line interface definitions
//! - `catalog`: Catalog CSV loading and the typed column index
//! - `filter`: Candidate filtering over a loaded catalog
//! - `pick`: Random selection and display formatting
//! - `history`: Append-only pick history
//! - `category`: Category name mapping
//! - `config`: File locations and data directory management
//!
//! ## Usage
//!
//! ```bash
//! # Roll a random chart across the whole catalog
//! rondo pick
//!
//! # Only 4B charts, standard tiers between level 8 and 12
//! rondo pick --key-mode 4B --no-special --std-min 8 --std-max 12
//!
//! # See what the filters would allow, then the picks so far
//! rondo candidates --key-mode 4B
//! rondo history
//! ```

use anyhow::Result;
use clap::{CommandFactory, Parser};
use log::{info, warn};
use rondo::catalog::Catalog;
use rondo::history::{HistoryEntry, HistoryStore};
use rondo::{category, cli, completion, config, filter, pick};

/// Main entry point for the Rondo application.
///
/// Initializes logging, parses command-line arguments, and routes commands
/// to the appropriate module functions. File-level failures degrade to a
/// user-facing message instead of aborting; usage errors propagate as
/// `anyhow::Result`.
///
/// # Logging
///
/// Initializes environment logger which can be controlled via `RUST_LOG`:
/// - `RUST_LOG=debug rondo pick` - Enable debug logging
/// - `RUST_LOG=rondo::filter=trace rondo candidates` - Module-specific logging
fn main() -> Result<()> {
    // Initialize environment logger for debugging and monitoring
    env_logger::init();

    // Parse command-line arguments using Clap derive macros
    let args = cli::Args::parse();
    let paths = config::Paths::resolve(args.catalog, args.category_names, args.history)?;

    // Route commands to appropriate module functions
    match args.command {
        cli::Command::Pick { filters } => {
            let state = filters.to_selection();
            let Some(catalog) = load_catalog_or_report(&paths) else {
                return Ok(());
            };
            let candidates = filter::filter_songs(&catalog, &state)?;
            if candidates.is_empty() {
                println!("No songs found with the selected criteria.");
                return Ok(());
            }

            // Non-empty slice, so the choice always succeeds.
            if let Some(candidate) = pick::pick_random(&candidates) {
                info!(
                    "Picked {} ({}) out of {} candidates",
                    candidate.title,
                    candidate.chart,
                    candidates.len()
                );
                let categories = category::load_category_names(&paths.category_names);
                println!(
                    "{}",
                    pick::format_pick(candidate, &categories, pick::use_color())
                );

                let store = HistoryStore::new(paths.history);
                if let Err(err) = store.append(&HistoryEntry::from(candidate)) {
                    warn!("Could not record pick in history: {err:#}");
                }
            }
        }
        cli::Command::Candidates { filters, json } => {
            let state = filters.to_selection();
            let Some(catalog) = load_catalog_or_report(&paths) else {
                return Ok(());
            };
            let candidates = filter::filter_songs(&catalog, &state)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&candidates)?);
            } else if candidates.is_empty() {
                println!("No songs found with the selected criteria.");
            } else {
                for candidate in &candidates {
                    println!(
                        "{} ({}) level {} [{}]",
                        candidate.title, candidate.chart, candidate.level, candidate.category
                    );
                }
                println!("{} candidates", candidates.len());
            }
        }
        cli::Command::Categories { json } => {
            let categories = category::load_category_names(&paths.category_names);
            if json {
                println!("{}", serde_json::to_string_pretty(&categories)?);
            } else if categories.is_empty() {
                println!(
                    "No category names loaded from {}.",
                    paths.category_names.display()
                );
            } else {
                for (source, members) in category::grouped_by_source(&categories) {
                    println!("{source}");
                    for (code, full_name) in members {
                        println!("  {code}: {full_name}");
                    }
                }
            }
        }
        cli::Command::History { json } => {
            let store = HistoryStore::new(paths.history);
            let mut entries = store.load()?;
            // Stored oldest first; shown newest first.
            entries.reverse();
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else if entries.is_empty() {
                println!("No picks recorded yet.");
            } else {
                for entry in &entries {
                    println!("{}", pick::format_history_line(entry));
                }
            }
        }
        cli::Command::ClearHistory => {
            let store = HistoryStore::new(paths.history);
            store.clear()?;
            println!("History cleared.");
        }
        cli::Command::Completion { shell } => {
            let mut cmd = cli::Args::command();
            completion::generate_completions(completion::shell_to_completion_shell(&shell), &mut cmd);
        }
        cli::Command::CompletionEnhanced { shell } => match shell {
            cli::Shell::Fish => completion::generate_enhanced_fish_completion(),
            _ => {
                return Err(anyhow::anyhow!(
                    "Enhanced completions only supported for fish"
                ))
            }
        },
        cli::Command::CompleteCategories => {
            // This is used by shell completion scripts to get category codes
            completion::print_category_completions(&paths.catalog)?;
        }
    }

    Ok(())
}

/// Load the catalog, or print the degrade-gracefully message and log why.
fn load_catalog_or_report(paths: &config::Paths) -> Option<Catalog> {
    match Catalog::load(&paths.catalog) {
        Ok(catalog) => Some(catalog),
        Err(err) => {
            warn!("{err:#}");
            println!(
                "Could not read the chart catalog at {} - nothing to pick from.",
                paths.catalog.display()
            );
            None
        }
    }
}
