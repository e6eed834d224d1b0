// Import necessary modules from external crates.
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::Path;
use strum_macros::EnumIter;

use crate::error::EngineError;

// Define an enumeration for the reputations a player can earn through play.
// The set is closed on purpose: the composer's NPC-behavior table and the
// consequence engine both match on it exhaustively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Reputation {
    #[default]
    Unknown,
    Hero,
    Diplomat,
    Merchant,
    Thief,
    Murderer,
    Feared,
    Corrupted,
}

// Implement the Display trait for the Reputation enum to allow for easier printing.
impl fmt::Display for Reputation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reputation::Unknown => write!(f, "unknown"),
            Reputation::Hero => write!(f, "hero"),
            Reputation::Diplomat => write!(f, "diplomat"),
            Reputation::Merchant => write!(f, "merchant"),
            Reputation::Thief => write!(f, "thief"),
            Reputation::Murderer => write!(f, "murderer"),
            Reputation::Feared => write!(f, "feared"),
            Reputation::Corrupted => write!(f, "corrupted"),
        }
    }
}

/// How many scene identifiers the history keeps around.
pub const SCENE_HISTORY_LIMIT: usize = 10;

// Define a structure representing one player's state for a single run.
// This is an immutable-per-turn snapshot: the engine never mutates a stored
// copy, it derives views from one snapshot and hands back a replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    // Vital resources
    pub health: u32,
    pub max_health: u32,
    pub gold: u32,
    pub food: u32, // meals remaining, unit-less

    // Progression
    pub items: Vec<String>,
    pub level: u32,
    pub experience: u32,
    pub corruption: u32, // 0..=100
    pub reputation: Reputation,
    pub deaths: u32,

    // Accumulated narrative context
    #[serde(default)]
    pub scene_history: Vec<String>,
    #[serde(default)]
    pub curses: BTreeSet<String>,
    #[serde(default)]
    pub permanent_injuries: BTreeSet<String>,
    #[serde(default)]
    pub last_choice_consequences: BTreeMap<String, i64>,
}

impl Default for PlayerState {
    fn default() -> Self {
        PlayerState {
            health: 100,
            max_health: 100,
            gold: 10,
            food: 3,
            items: vec!["rusty_dagger".to_string()],
            level: 1,
            experience: 0,
            corruption: 0,
            reputation: Reputation::Unknown,
            deaths: 0,
            scene_history: Vec::new(),
            curses: BTreeSet::new(),
            permanent_injuries: BTreeSet::new(),
            last_choice_consequences: BTreeMap::new(),
        }
    }
}

impl PlayerState {
    pub fn builder() -> PlayerStateBuilder {
        PlayerStateBuilder::default()
    }

    // Fraction of maximum health remaining, used by the crisis classifier.
    pub fn health_ratio(&self) -> f64 {
        self.health as f64 / self.max_health as f64
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    // Death resets the run to a fresh start. Runs are isolated, so only the
    // death counter carries over; everything else (including reputation and
    // permanent injuries) belongs to the life that just ended.
    pub fn after_death(&self) -> PlayerState {
        PlayerState {
            deaths: self.deaths + 1,
            ..PlayerState::default()
        }
    }

    // Append a scene identifier, keeping only the most recent entries.
    pub fn record_scene(&mut self, scene_id: impl Into<String>) {
        self.scene_history.push(scene_id.into());
        self.bound_scene_history();
    }

    // Drop the oldest entries once the history exceeds its limit. Also run
    // against imported records, which may carry an oversized history.
    fn bound_scene_history(&mut self) {
        if self.scene_history.len() > SCENE_HISTORY_LIMIT {
            let excess = self.scene_history.len() - SCENE_HISTORY_LIMIT;
            self.scene_history.drain(..excess);
        }
    }

    // Export the state as an opaque record for whichever store owns it.
    pub fn to_record(&self) -> Result<serde_json::Value, EngineError> {
        Ok(serde_json::to_value(self)?)
    }

    // Import a state record, refusing blobs that violate the invariants the
    // pure core relies on. Validation lives here, at the boundary, so the
    // classifier, labeler and composer can stay total.
    pub fn from_record(record: serde_json::Value) -> Result<PlayerState, EngineError> {
        let mut state: PlayerState = serde_json::from_value(record)?;
        state.check_invariants()?;
        state.bound_scene_history();
        Ok(state)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<PlayerState, EngineError> {
        let file = std::fs::File::open(path)?;
        let mut state: PlayerState = serde_json::from_reader(file)?;
        state.check_invariants()?;
        state.bound_scene_history();
        Ok(state)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), EngineError> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    fn check_invariants(&self) -> Result<(), EngineError> {
        if self.max_health == 0 {
            return Err(EngineError::InvalidState("max_health must be >= 1".into()));
        }
        if self.health > self.max_health {
            return Err(EngineError::InvalidState(format!(
                "health {} exceeds max_health {}",
                self.health, self.max_health
            )));
        }
        if self.corruption > 100 {
            return Err(EngineError::InvalidState(format!(
                "corruption {} exceeds 100",
                self.corruption
            )));
        }
        if self.level == 0 {
            return Err(EngineError::InvalidState("level must be >= 1".into()));
        }
        Ok(())
    }
}

// Builder for assembling a PlayerState field by field. `build` clamps every
// value into its invariant range, so a state obtained through the builder is
// always a valid input to the derivation engine.
#[derive(Debug, Clone, Default)]
pub struct PlayerStateBuilder {
    state: PlayerState,
}

impl PlayerStateBuilder {
    pub fn health(mut self, health: u32) -> Self {
        self.state.health = health;
        self
    }

    pub fn max_health(mut self, max_health: u32) -> Self {
        self.state.max_health = max_health;
        self
    }

    pub fn gold(mut self, gold: u32) -> Self {
        self.state.gold = gold;
        self
    }

    pub fn food(mut self, food: u32) -> Self {
        self.state.food = food;
        self
    }

    pub fn items(mut self, items: Vec<String>) -> Self {
        self.state.items = items;
        self
    }

    pub fn level(mut self, level: u32) -> Self {
        self.state.level = level;
        self
    }

    pub fn experience(mut self, experience: u32) -> Self {
        self.state.experience = experience;
        self
    }

    pub fn corruption(mut self, corruption: u32) -> Self {
        self.state.corruption = corruption;
        self
    }

    pub fn reputation(mut self, reputation: Reputation) -> Self {
        self.state.reputation = reputation;
        self
    }

    pub fn deaths(mut self, deaths: u32) -> Self {
        self.state.deaths = deaths;
        self
    }

    pub fn curse(mut self, curse: impl Into<String>) -> Self {
        self.state.curses.insert(curse.into());
        self
    }

    pub fn permanent_injury(mut self, injury: impl Into<String>) -> Self {
        self.state.permanent_injuries.insert(injury.into());
        self
    }

    pub fn build(mut self) -> PlayerState {
        self.state.max_health = self.state.max_health.max(1);
        self.state.health = self.state.health.min(self.state.max_health);
        self.state.corruption = self.state.corruption.min(100);
        self.state.level = self.state.level.max(1);
        self.state
    }
}
