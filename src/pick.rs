//! Random selection and pick formatting.

use crate::category::{self, CategoryMap};
use crate::chart::{star_string, Candidate, TIER_COLORS};
use crate::history::HistoryEntry;
use rand::seq::SliceRandom;

const ANSI_RESET: &str = "\x1b[0m";

/// Pick one candidate uniformly at random. `None` on an empty slice.
#[must_use]
pub fn pick_random(candidates: &[Candidate]) -> Option<&Candidate> {
    candidates.choose(&mut rand::thread_rng())
}

/// Whether pick output should use ANSI colors.
///
/// Honors the NO_COLOR convention; there is no tty detection beyond that.
#[must_use]
pub fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Multi-line display block for a pick: full category name, title with
/// chart label, and the star rating colored by tier.
#[must_use]
pub fn format_pick(candidate: &Candidate, categories: &CategoryMap, color: bool) -> String {
    let full_category = category::full_name(categories, &candidate.category);
    let mut out = format!(
        "{full_category}\n{} ({})\n",
        candidate.title, candidate.chart
    );
    out.push_str(&render_stars(&candidate.chart, &candidate.level, color));
    out
}

/// One history line, newest-first rendering: `[category] title (chart) stars`.
#[must_use]
pub fn format_history_line(entry: &HistoryEntry) -> String {
    format!(
        "[{}] {} ({}) {}",
        entry.category,
        entry.title,
        entry.chart,
        render_stars(&entry.chart, &entry.level, false)
    )
}

/// Star string for a chart label and level text; `N/A` when the tier or
/// level cannot be recovered (malformed history lines still render).
fn render_stars(chart: &str, level: &str, color: bool) -> String {
    let tier = crate::chart::tier_of_chart(chart);
    let level = level.parse::<u32>().ok();
    match (tier, level) {
        (Some(tier), Some(level)) => {
            let stars = star_string(tier, level);
            if color {
                let paint = TIER_COLORS.get(&tier).copied().unwrap_or_default();
                format!("{paint}{stars}{ANSI_RESET}")
            } else {
                stars
            }
        }
        _ => "N/A".to_string(),
    }
}
