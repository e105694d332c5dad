//! # Command-Line Interface Module
//!
//! This module defines the command-line interface for Rondo using Clap derive
//! macros. It provides a type-safe way to parse command-line arguments and
//! route them to appropriate functionality.
//!
//! ## Commands
//!
//! - `pick`: Select a random chart under the active filters and log it
//! - `candidates`: List every chart the filters would allow
//! - `categories`: Show the category table grouped by source
//! - `history`: Show past picks, newest first
//! - `clear-history`: Truncate the pick history
//!
//! ## Examples
//!
//! ```bash
//! rondo pick --key-mode 4B --std-min 8 --std-max 12
//! rondo pick -c RES -c TRI --no-special
//! rondo candidates --json
//! ```

use crate::filter::{CategoryFilter, KeyModeFilter, LevelRange, SelectionState};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shell types supported for completion generation
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

/// Main application arguments structure.
///
/// Uses Clap derive macros to automatically generate argument parsing,
/// help text, and validation. The file-location options are global so they
/// can be given before or after any subcommand.
#[derive(Parser)]
#[command(name = "rondo")]
#[command(about = "Rondo: rhythm-game chart roulette - filtered random picks from a chart catalog")]
#[command(version)]
pub struct Args {
    /// Path to the chart catalog CSV
    ///
    /// The catalog's header row names the level columns as
    /// "<mode> <tier>" (e.g. "4B NM"); a level of 0 marks an absent chart.
    #[arg(long, env = "RONDO_CATALOG", default_value = crate::config::DEFAULT_CATALOG, global = true)]
    pub catalog: PathBuf,

    /// Path to the category names CSV
    ///
    /// Maps short category codes to full display names and their source
    /// grouping. Optional: without it the short codes are shown as-is.
    #[arg(long, env = "RONDO_CATEGORIES", default_value = crate::config::DEFAULT_CATEGORY_NAMES, global = true)]
    pub category_names: PathBuf,

    /// Path to the pick history file
    ///
    /// Defaults to history.txt in the platform data directory.
    #[arg(long, env = "RONDO_HISTORY", global = true)]
    pub history: Option<PathBuf>,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Chart filters shared by the `pick` and `candidates` commands.
///
/// These mirror the selection toggles of the interactive original: category
/// membership, a key-mode selector, independent include gates for the
/// standard and special tiers, and one inclusive level range per gate.
#[derive(clap::Args, Debug, Clone)]
pub struct FilterArgs {
    /// Category code to include (repeatable; default: all categories)
    #[arg(short = 'c', long = "category", value_name = "CODE")]
    pub categories: Vec<String>,

    /// Key mode to draw charts from (e.g. 4B, 5B, 6B, 8B)
    ///
    /// "All" resolves each chart through its own native key mode.
    #[arg(short = 'k', long, value_name = "MODE", default_value = "All")]
    pub key_mode: String,

    /// Exclude the standard NM/HD/MX tiers
    #[arg(long)]
    pub no_standard: bool,

    /// Exclude the special SC tier
    #[arg(long)]
    pub no_special: bool,

    /// Minimum level for the standard tiers
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=15))]
    pub std_min: u32,

    /// Maximum level for the standard tiers
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u32).range(1..=15))]
    pub std_max: u32,

    /// Minimum level for the special tier
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=15))]
    pub sc_min: u32,

    /// Maximum level for the special tier
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u32).range(1..=15))]
    pub sc_max: u32,
}

impl FilterArgs {
    /// Gather the flags into the engine's [`SelectionState`] value.
    #[must_use]
    pub fn to_selection(&self) -> SelectionState {
        SelectionState {
            categories: CategoryFilter::from_codes(self.categories.iter().cloned()),
            key_mode: KeyModeFilter::from_selection(&self.key_mode),
            include_standard: !self.no_standard,
            include_special: !self.no_special,
            standard_range: LevelRange::new(self.std_min, self.std_max),
            special_range: LevelRange::new(self.sc_min, self.sc_max),
        }
    }
}

/// Enumeration of all available subcommands.
///
/// Each variant corresponds to a major piece of functionality in Rondo.
/// Command arguments are embedded directly in the enum variants for
/// type safety and automatic validation.
#[derive(Subcommand)]
pub enum Command {
    /// Pick a random chart and log it to the history
    ///
    /// Re-reads the catalog, filters it by the given criteria, chooses one
    /// eligible chart uniformly at random, prints it with its star rating,
    /// and appends it to the pick history. With no eligible chart the
    /// command reports that and exits cleanly.
    Pick {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// List every chart eligible under the filters
    ///
    /// Useful for checking what a pick could return before rolling.
    /// Output keeps the catalog's row order.
    Candidates {
        #[command(flatten)]
        filters: FilterArgs,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the category table grouped by source
    ///
    /// Reads the category names CSV and prints each source group with its
    /// short codes and full names.
    Categories {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show past picks, newest first
    History {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Clear the pick history
    ClearHistory,

    /// Generate shell completions
    ///
    /// Usage: rondo completion bash > ~/.local/share/bash-completion/completions/rondo
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },

    /// Generate enhanced completion with category code completion
    ///
    /// Generates an enhanced completion script that completes category
    /// codes for the --category flag from the current catalog.
    ///
    /// Usage: rondo completion-enhanced fish > ~/.config/fish/completions/rondo.fish
    CompletionEnhanced {
        /// Shell to generate enhanced completions for (currently fish supported)
        shell: Shell,
    },

    /// List category codes for completion (hidden command)
    #[command(hide = true)]
    CompleteCategories,
}
