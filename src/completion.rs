//! # Shell Completion Module
//!
//! This module provides shell completion functionality for Rondo, including:
//! - Generation of completion scripts for various shells
//! - Custom completion for category codes from the chart catalog
//! - Integration with clap's completion system
//!
//! ## Usage
//!
//! ```bash
//! # Generate bash completions
//! rondo completion bash > ~/.local/share/bash-completion/completions/rondo
//!
//! # Generate fish completions with dynamic category codes
//! rondo completion-enhanced fish > ~/.config/fish/completions/rondo.fish
//! ```

use crate::catalog::Catalog;
use crate::cli;
use anyhow::Result;
use clap::Command;
use clap_complete::{generate, Generator, Shell as CompletionShell};
use std::io;
use std::path::Path;

/// Generate shell completions for the given shell
pub fn generate_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

/// Map our CLI shell enum to clap_complete's shell type
#[must_use]
pub fn shell_to_completion_shell(shell: &cli::Shell) -> CompletionShell {
    match shell {
        cli::Shell::Bash => CompletionShell::Bash,
        cli::Shell::Zsh => CompletionShell::Zsh,
        cli::Shell::Fish => CompletionShell::Fish,
        cli::Shell::PowerShell => CompletionShell::PowerShell,
        cli::Shell::Elvish => CompletionShell::Elvish,
    }
}

/// Generate enhanced fish completion script with category code completion
pub fn generate_enhanced_fish_completion() {
    println!(
        r#"# Enhanced Rondo completion script for Fish shell with category completion
# Install with: rondo completion-enhanced fish > ~/.config/fish/completions/rondo.fish

# Function to get category code completions
function __rondo_complete_categories
    if command -sq rondo
        rondo complete-categories 2>/dev/null
    end
end

# Clear existing completions to avoid conflicts
complete -c rondo -e

# Global options
complete -c rondo -s h -l help -d 'Print help information'
complete -c rondo -s V -l version -d 'Print version information'
complete -c rondo -l catalog -d 'Path to the chart catalog CSV' -r
complete -c rondo -l category-names -d 'Path to the category names CSV' -r
complete -c rondo -l history -d 'Path to the pick history file' -r

# Main commands
complete -c rondo -f -n '__fish_is_first_token' -a 'pick' -d 'Pick a random chart and log it to the history'
complete -c rondo -f -n '__fish_is_first_token' -a 'candidates' -d 'List every chart eligible under the filters'
complete -c rondo -f -n '__fish_is_first_token' -a 'categories' -d 'Show the category table grouped by source'
complete -c rondo -f -n '__fish_is_first_token' -a 'history' -d 'Show past picks, newest first'
complete -c rondo -f -n '__fish_is_first_token' -a 'clear-history' -d 'Clear the pick history'
complete -c rondo -f -n '__fish_is_first_token' -a 'completion' -d 'Generate shell completions'
complete -c rondo -f -n '__fish_is_first_token' -a 'completion-enhanced' -d 'Generate enhanced shell completions'
complete -c rondo -f -n '__fish_is_first_token' -a 'help' -d 'Print help for commands'

# pick and candidates commands - filter flags with dynamic category codes
for subcmd in pick candidates
    complete -c rondo -f -n "__fish_seen_subcommand_from $subcmd" -s c -l category -a '(__rondo_complete_categories)' -d 'Category code to include' -r
    complete -c rondo -f -n "__fish_seen_subcommand_from $subcmd" -s k -l key-mode -a 'All 4B 5B 6B 8B' -d 'Key mode to draw charts from' -r
    complete -c rondo -f -n "__fish_seen_subcommand_from $subcmd" -l no-standard -d 'Exclude the standard NM/HD/MX tiers'
    complete -c rondo -f -n "__fish_seen_subcommand_from $subcmd" -l no-special -d 'Exclude the special SC tier'
    complete -c rondo -f -n "__fish_seen_subcommand_from $subcmd" -l std-min -d 'Minimum level for the standard tiers' -r
    complete -c rondo -f -n "__fish_seen_subcommand_from $subcmd" -l std-max -d 'Maximum level for the standard tiers' -r
    complete -c rondo -f -n "__fish_seen_subcommand_from $subcmd" -l sc-min -d 'Minimum level for the special tier' -r
    complete -c rondo -f -n "__fish_seen_subcommand_from $subcmd" -l sc-max -d 'Maximum level for the special tier' -r
end
complete -c rondo -f -n '__fish_seen_subcommand_from candidates' -l json -d 'Emit JSON instead of text'

# categories and history commands
complete -c rondo -f -n '__fish_seen_subcommand_from categories' -l json -d 'Emit JSON instead of text'
complete -c rondo -f -n '__fish_seen_subcommand_from history' -l json -d 'Emit JSON instead of text'

# completion commands - complete with shell types
complete -c rondo -f -n '__fish_seen_subcommand_from completion' -a 'bash zsh fish power-shell elvish' -d 'Shell'
complete -c rondo -f -n '__fish_seen_subcommand_from completion-enhanced' -a 'fish' -d 'Shell'
"#
    );
}

/// Print the catalog's category codes, one per line, for completion scripts.
///
/// The synthetic "All" selector comes first; failures stay quiet beyond the
/// error so a broken catalog never garbles the user's completion output.
pub fn print_category_completions(catalog_path: &Path) -> Result<()> {
    let catalog = Catalog::load(catalog_path)?;
    println!("All");
    for code in catalog.categories() {
        println!("{code}");
    }
    Ok(())
}
