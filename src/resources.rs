//! Per-dimension resource labels.
//!
//! Unlike the crisis classifier, each dimension here is judged on its own:
//! health, food, gold and corruption never interact. The thresholds are
//! hand-tuned per dimension and deliberately not derived from the
//! classifier's. Every label carries a short uppercase tag plus a longer
//! qualifier, and the composer embeds both verbatim.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::player::PlayerState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Critical,
    Low,
    Good,
}

impl HealthStatus {
    pub fn assess(health: u32) -> HealthStatus {
        if health <= 30 {
            HealthStatus::Critical
        } else if health <= 60 {
            HealthStatus::Low
        } else {
            HealthStatus::Good
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            HealthStatus::Critical => "CRITICAL",
            HealthStatus::Low => "LOW",
            HealthStatus::Good => "GOOD",
        }
    }

    pub fn qualifier(&self) -> &'static str {
        match self {
            HealthStatus::Critical => "near death",
            HealthStatus::Low => "badly injured",
            HealthStatus::Good => "healthy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodStatus {
    Starving,
    Hungry,
    Fed,
}

impl FoodStatus {
    pub fn assess(food: u32) -> FoodStatus {
        match food {
            0 => FoodStatus::Starving,
            1 => FoodStatus::Hungry,
            _ => FoodStatus::Fed,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            FoodStatus::Starving => "STARVING",
            FoodStatus::Hungry => "HUNGRY",
            FoodStatus::Fed => "FED",
        }
    }

    pub fn qualifier(&self) -> &'static str {
        match self {
            FoodStatus::Starving => "immediate danger",
            FoodStatus::Hungry => "need food soon",
            FoodStatus::Fed => "adequate supplies",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoldStatus {
    Poor,
    Struggling,
    Wealthy,
}

impl GoldStatus {
    pub fn assess(gold: u32) -> GoldStatus {
        if gold <= 5 {
            GoldStatus::Poor
        } else if gold <= 20 {
            GoldStatus::Struggling
        } else {
            GoldStatus::Wealthy
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            GoldStatus::Poor => "POOR",
            GoldStatus::Struggling => "STRUGGLING",
            GoldStatus::Wealthy => "WEALTHY",
        }
    }

    pub fn qualifier(&self) -> &'static str {
        match self {
            GoldStatus::Poor => "cannot afford basic items",
            GoldStatus::Struggling => "limited purchasing power",
            GoldStatus::Wealthy => "can afford most things",
        }
    }
}

// Corruption is the one dimension with four tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorruptionStatus {
    Pure,
    Tainted,
    Corrupted,
    Damned,
}

impl CorruptionStatus {
    pub fn assess(corruption: u32) -> CorruptionStatus {
        if corruption >= 70 {
            CorruptionStatus::Damned
        } else if corruption >= 40 {
            CorruptionStatus::Corrupted
        } else if corruption >= 20 {
            CorruptionStatus::Tainted
        } else {
            CorruptionStatus::Pure
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            CorruptionStatus::Pure => "PURE",
            CorruptionStatus::Tainted => "TAINTED",
            CorruptionStatus::Corrupted => "CORRUPTED",
            CorruptionStatus::Damned => "DAMNED",
        }
    }

    pub fn qualifier(&self) -> &'static str {
        match self {
            CorruptionStatus::Pure => "soul intact",
            CorruptionStatus::Tainted => "darkness creeping in",
            CorruptionStatus::Corrupted => "moral decay spreading",
            CorruptionStatus::Damned => "soul nearly lost",
        }
    }
}

macro_rules! impl_label_display {
    ($($status:ty),*) => {
        $(impl fmt::Display for $status {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} - {}", self.tag(), self.qualifier())
            }
        })*
    };
}

impl_label_display!(HealthStatus, FoodStatus, GoldStatus, CorruptionStatus);

// The full label set for one snapshot, one entry per resource dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceStatus {
    pub health: HealthStatus,
    pub food: FoodStatus,
    pub gold: GoldStatus,
    pub corruption: CorruptionStatus,
}

impl ResourceStatus {
    pub fn assess(state: &PlayerState) -> ResourceStatus {
        ResourceStatus {
            health: HealthStatus::assess(state.health),
            food: FoodStatus::assess(state.food),
            gold: GoldStatus::assess(state.gold),
            corruption: CorruptionStatus::assess(state.corruption),
        }
    }

    // Dimension name to rendered label, for callers that want the mapping
    // rather than the typed fields.
    pub fn as_map(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("health", self.health.to_string()),
            ("food", self.food.to_string()),
            ("gold", self.gold.to_string()),
            ("corruption", self.corruption.to_string()),
        ])
    }
}
