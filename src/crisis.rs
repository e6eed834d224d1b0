use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::EnumIter;

use crate::player::PlayerState;

// Define an enumeration for the overall severity of a player's condition.
// Variants are declared best to worst, so the derived ordering ranks
// severity: `CrisisLevel::Critical > CrisisLevel::Thriving`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum CrisisLevel {
    Thriving,
    Stable,
    Struggling,
    Desperate,
    Critical,
}

impl fmt::Display for CrisisLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrisisLevel::Thriving => write!(f, "thriving"),
            CrisisLevel::Stable => write!(f, "stable"),
            CrisisLevel::Struggling => write!(f, "struggling"),
            CrisisLevel::Desperate => write!(f, "desperate"),
            CrisisLevel::Critical => write!(f, "critical"),
        }
    }
}

impl CrisisLevel {
    /// Classify a player state into one of the five severity tiers.
    ///
    /// Rules are checked from most to least severe and the first match wins,
    /// so any single catastrophic signal (starvation, near-death, heavy
    /// corruption, stacked curses) forces the worst classification even when
    /// every other resource looks fine. Weakest link, not an average.
    pub fn assess(state: &PlayerState) -> CrisisLevel {
        let health_ratio = state.health_ratio();

        // Critical - immediate death risk
        if health_ratio <= 0.25 || state.food == 0 || state.curses.len() >= 3 {
            return CrisisLevel::Critical;
        }

        // Desperate - multiple serious problems
        if (health_ratio <= 0.4 && state.food <= 1) || state.corruption >= 70 {
            return CrisisLevel::Desperate;
        }

        // Struggling - single serious problem
        if health_ratio <= 0.5 || state.food <= 1 || state.gold <= 5 || state.corruption >= 50 {
            return CrisisLevel::Struggling;
        }

        // Stable - doing okay
        if health_ratio >= 0.7 && state.food >= 2 && state.gold >= 20 {
            return CrisisLevel::Stable;
        }

        // Thriving - excellent condition
        CrisisLevel::Thriving
    }

    /// True for the tiers where the composer switches to survival-stakes
    /// choice templates.
    pub fn is_dire(&self) -> bool {
        matches!(self, CrisisLevel::Critical | CrisisLevel::Desperate)
    }
}
