//! Rhythm-game chart roulette: filtered random picks from a CSV catalog.
//!
//! Core modules:
//! - [`catalog`] - Chart catalog loading and the typed column index
//! - [`filter`] - Candidate filtering over a loaded catalog
//! - [`pick`] - Random selection and pick formatting
//! - [`history`] - Append-only pick history
//!
//! ### Supporting Modules
//!
//! - [`category`] - Short-code to full category name mapping
//! - [`chart`] - Difficulty tiers, candidates, star rendering
//! - [`config`] - File locations and data directory management
//! - [`cli`] - Command-line interface definitions with clap integration
//! - [`completion`] - Shell completion generation for enhanced UX
//!
//! ## Quick Start Example
//!
//! ```no_run
//! use rondo::{catalog::Catalog, filter, history::{HistoryEntry, HistoryStore}, pick};
//! use std::path::Path;
//!
//! // Load the catalog fresh (it is re-read on every query, never cached).
//! let catalog = Catalog::load(Path::new("SongList.csv"))?;
//!
//! // Filter it down to eligible charts.
//! let state = filter::SelectionState::default();
//! let candidates = filter::filter_songs(&catalog, &state)?;
//!
//! // Roll, then remember the roll.
//! if let Some(candidate) = pick::pick_random(&candidates) {
//!     println!("{}", pick::format_pick(candidate, &Default::default(), false));
//!     let store = HistoryStore::new("history.txt".into());
//!     store.append(&HistoryEntry::from(candidate))?;
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return `Result<T, anyhow::Error>`. The binary keeps
//! the original tool's "never crash, always degrade" behavior at the command
//! layer: a missing catalog or history file is a message or an empty result,
//! not an abort. Only genuine usage errors (an unknown key mode, an
//! unwritable history location) propagate.
//!
//! ## Logging
//!
//! All modules log through the `log` facade; the binary installs
//! `env_logger`, so `RUST_LOG=debug rondo pick` traces catalog loading and
//! filtering decisions.

pub mod catalog;
pub mod category;
pub mod chart;
pub mod cli;
pub mod completion;
pub mod config;
pub mod filter;
pub mod history;
pub mod pick;
