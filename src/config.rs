//! Configuration and data directory management.
//!
//! Rondo reads its two input CSVs from the working directory by default and
//! keeps the pick history in the platform-standard data directory:
//! - Linux: `~/.local/share/rondo/`
//! - macOS: `~/Library/Application Support/rondo/`
//! - Windows: `%APPDATA%\rondo\`
//!
//! All three locations can be overridden per invocation from the CLI.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default catalog file name, looked up in the working directory.
pub const DEFAULT_CATALOG: &str = "SongList.csv";
/// Default category mapping file name, looked up in the working directory.
pub const DEFAULT_CATEGORY_NAMES: &str = "CategoryNames.csv";

/// Returns the platform-appropriate data directory for Rondo, creating it
/// if needed.
///
/// # Errors
///
/// Fails when the system data directory cannot be determined or the `rondo`
/// subdirectory cannot be created.
pub fn get_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| {
        anyhow::anyhow!(
            "Could not determine system data directory. Please ensure your platform supports standard data directories."
        )
    })?;

    let rondo_dir = data_dir.join("rondo");
    fs::create_dir_all(&rondo_dir).with_context(|| {
        format!(
            "Failed to create Rondo data directory at {}. Please check file permissions.",
            rondo_dir.display()
        )
    })?;

    Ok(rondo_dir)
}

/// Default location of the pick history file.
pub fn get_history_path() -> Result<PathBuf> {
    Ok(get_data_dir()?.join("history.txt"))
}

/// Resolved file locations for one invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paths {
    pub catalog: PathBuf,
    pub category_names: PathBuf,
    pub history: PathBuf,
}

impl Paths {
    /// Combine CLI overrides with the defaults; the history default is the
    /// only one that touches the filesystem (data dir creation).
    pub fn resolve(
        catalog: PathBuf,
        category_names: PathBuf,
        history: Option<PathBuf>,
    ) -> Result<Paths> {
        let history = match history {
            Some(path) => path,
            None => get_history_path()?,
        };
        Ok(Paths {
            catalog,
            category_names,
            history,
        })
    }
}
