//! Core chart types: difficulty tiers, candidates, and star rendering.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A difficulty tier of a chart.
///
/// `NM`, `HD` and `MX` are the three standard tiers that nearly every chart
/// defines; `SC` is the single optional top tier. Iteration over the standard
/// tiers always happens in ascending order via [`Tier::STANDARD`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    Nm,
    Hd,
    Mx,
    Sc,
}

impl Tier {
    /// The three standard tiers, in their fixed scan order.
    pub const STANDARD: [Tier; 3] = [Tier::Nm, Tier::Hd, Tier::Mx];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Nm => "NM",
            Tier::Hd => "HD",
            Tier::Mx => "MX",
            Tier::Sc => "SC",
        }
    }

    /// Parse a tier label as it appears in catalog column headers.
    #[must_use]
    pub fn parse(label: &str) -> Option<Tier> {
        match label {
            "NM" => Some(Tier::Nm),
            "HD" => Some(Tier::Hd),
            "MX" => Some(Tier::Mx),
            "SC" => Some(Tier::Sc),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_special(self) -> bool {
        matches!(self, Tier::Sc)
    }

    /// The rune used to draw one star of this tier's rating.
    #[must_use]
    pub fn star_rune(self) -> char {
        if self.is_special() {
            '★'
        } else {
            '☆'
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

lazy_static! {
    /// ANSI color per tier, matching the in-game difficulty colors.
    pub static ref TIER_COLORS: HashMap<Tier, &'static str> = HashMap::from([
        (Tier::Nm, "\x1b[33m"),
        (Tier::Hd, "\x1b[38;5;208m"),
        (Tier::Mx, "\x1b[31m"),
        (Tier::Sc, "\x1b[35m"),
    ]);
}

/// A chart eligible for random selection under the current filters.
///
/// Candidates are derived fresh on every query and never persisted. The
/// `chart` label is `"<mode> <tier>"` (e.g. `"4B NM"`) and `level` keeps the
/// catalog's own text form of the numeric level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub title: String,
    pub chart: String,
    pub level: String,
    pub category: String,
}

impl Candidate {
    /// Recover the tier from the chart label's trailing token.
    #[must_use]
    pub fn tier(&self) -> Option<Tier> {
        tier_of_chart(&self.chart)
    }
}

/// Tier encoded in a `"<mode> <tier>"` chart label, if any.
#[must_use]
pub fn tier_of_chart(label: &str) -> Option<Tier> {
    label.split_whitespace().last().and_then(Tier::parse)
}

/// Render a star rating: one rune per level, with a literal space inserted
/// every 5 stars for readability.
#[must_use]
pub fn star_string(tier: Tier, level: u32) -> String {
    let rune = tier.star_rune();
    let mut stars = String::new();
    for i in 0..level {
        if i > 0 && i % 5 == 0 {
            stars.push(' ');
        }
        stars.push(rune);
    }
    stars
}
