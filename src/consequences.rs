// Choice-consequence engine.
//
// Applies the effects of a chosen action to a player snapshot and returns
// the replacement snapshot, never mutating the input. All randomness comes
// from the caller-supplied `Rng`, so the rest of the engine stays
// deterministic and the whole thing is testable with a seeded generator.

use rand::Rng;
use std::collections::BTreeMap;

use crate::player::{PlayerState, Reputation};

/// Curse tag attached when a player runs out of food.
pub const STARVING_CURSE: &str = "starving";

/// Experience needed to advance past a given level.
pub fn experience_needed(level: u32) -> u32 {
    level * 150
}

// A single resource delta. Conditional variants read the partially updated
// state at resolution time, in declaration order: health, gold, food,
// experience, corruption.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// No change to this resource.
    None,
    /// A deterministic delta.
    Fixed(i64),
    /// A uniform random delta, bounds inclusive.
    Range(i64, i64),
    /// A random delta paid out only while health is above the threshold.
    IfHealthAbove { threshold: u32, lo: i64, hi: i64 },
    /// One delta with food in reserve, another while starving.
    IfFed { fed: i64, starving: i64 },
    /// Heal up to the cap without exceeding max health.
    HealUpTo(i64),
    /// A delta that lands with the given probability, otherwise nothing.
    Chance { probability: f64, amount: i64 },
}

impl Effect {
    fn resolve<R: Rng>(&self, state: &PlayerState, rng: &mut R) -> i64 {
        match *self {
            Effect::None => 0,
            Effect::Fixed(amount) => amount,
            Effect::Range(lo, hi) => rng.random_range(lo..=hi),
            Effect::IfHealthAbove { threshold, lo, hi } => {
                if state.health > threshold {
                    rng.random_range(lo..=hi)
                } else {
                    0
                }
            }
            Effect::IfFed { fed, starving } => {
                if state.food > 0 {
                    fed
                } else {
                    starving
                }
            }
            Effect::HealUpTo(cap) => cap.min(state.max_health.saturating_sub(state.health) as i64),
            Effect::Chance {
                probability,
                amount,
            } => {
                if rng.random_bool(probability) {
                    amount
                } else {
                    0
                }
            }
        }
    }
}

// The effect profile of one recognizable action keyword.
#[derive(Debug, Clone, Copy)]
pub struct ActionEffects {
    pub keyword: &'static str,
    pub description: &'static str,
    pub health: Effect,
    pub gold: Effect,
    pub food: Effect,
    pub experience: i64,
    pub corruption: Effect,
    pub reputation: Option<Reputation>,
}

impl ActionEffects {
    const fn new(keyword: &'static str, description: &'static str) -> Self {
        ActionEffects {
            keyword,
            description,
            health: Effect::None,
            gold: Effect::None,
            food: Effect::None,
            experience: 0,
            corruption: Effect::None,
            reputation: None,
        }
    }
}

// Keyword-matched effect table, scanned in order with first match winning.
// Earlier entries therefore shadow later ones when a choice text contains
// several keywords.
pub const ACTION_EFFECTS: &[ActionEffects] = &[
    // Combat actions - high risk/reward
    ActionEffects {
        health: Effect::Range(-40, -20),
        gold: Effect::IfHealthAbove {
            threshold: 30,
            lo: 15,
            hi: 50,
        },
        food: Effect::Fixed(-1),
        experience: 25,
        reputation: Some(Reputation::Feared),
        ..ActionEffects::new("fight", "violent confrontation")
    },
    ActionEffects {
        health: Effect::Range(-35, -15),
        gold: Effect::Range(10, 40),
        experience: 20,
        corruption: Effect::Fixed(2),
        ..ActionEffects::new("attack", "aggressive action")
    },
    ActionEffects {
        health: Effect::Range(-50, -25),
        gold: Effect::Range(20, 60),
        corruption: Effect::Fixed(5),
        reputation: Some(Reputation::Murderer),
        ..ActionEffects::new("kill", "lethal violence")
    },
    // Peaceful actions - safer but lower rewards
    ActionEffects {
        health: Effect::Fixed(5),
        gold: Effect::Range(5, 15),
        experience: 10,
        reputation: Some(Reputation::Diplomat),
        ..ActionEffects::new("speak", "diplomatic approach")
    },
    ActionEffects {
        gold: Effect::Range(10, 25),
        experience: 20,
        reputation: Some(Reputation::Diplomat),
        ..ActionEffects::new("negotiate", "peaceful negotiation")
    },
    ActionEffects {
        health: Effect::Fixed(-5),
        experience: 15,
        corruption: Effect::Fixed(-2),
        reputation: Some(Reputation::Hero),
        ..ActionEffects::new("help", "selfless assistance")
    },
    // Survival actions
    ActionEffects {
        health: Effect::HealUpTo(25),
        food: Effect::Fixed(-2),
        experience: 5,
        ..ActionEffects::new("rest", "recuperation")
    },
    ActionEffects {
        health: Effect::IfFed {
            fed: 10,
            starving: -15,
        },
        food: Effect::IfFed {
            fed: -1,
            starving: 0,
        },
        ..ActionEffects::new("eat", "sustenance")
    },
    // Exploration actions
    ActionEffects {
        health: Effect::Range(-15, 0),
        gold: Effect::Range(0, 30),
        food: Effect::Chance {
            probability: 0.3,
            amount: -1,
        },
        experience: 10,
        ..ActionEffects::new("search", "risky exploration")
    },
    // Greed actions
    ActionEffects {
        gold: Effect::Range(20, 60),
        corruption: Effect::Fixed(5),
        reputation: Some(Reputation::Thief),
        ..ActionEffects::new("steal", "criminal activity")
    },
    // Magic actions
    ActionEffects {
        health: Effect::Range(-15, 25),
        corruption: Effect::Range(2, 8),
        experience: 35,
        ..ActionEffects::new("magic", "arcane manipulation")
    },
];

/// Find the effect profile matching a choice's text, if any.
pub fn match_action(choice_text: &str) -> Option<&'static ActionEffects> {
    let lowered = choice_text.to_lowercase();
    ACTION_EFFECTS
        .iter()
        .find(|action| lowered.contains(action.keyword))
}

fn clamped_add(value: u32, delta: i64, max: u32) -> u32 {
    (value as i64 + delta).clamp(0, max as i64) as u32
}

/// Apply the consequences of a choice and return the replacement snapshot.
///
/// Order of operations: per-turn food upkeep, starvation damage, matched
/// action effects, corruption backlash, scene-history append, level-up.
/// Numeric deltas land in `last_choice_consequences` for the composer's
/// previous-action block.
pub fn apply_choice<R: Rng>(
    state: &PlayerState,
    choice_text: &str,
    scene_id: &str,
    rng: &mut R,
) -> PlayerState {
    let mut next = state.clone();
    let mut consequences: BTreeMap<String, i64> = BTreeMap::new();

    // Automatic survival cost: every scene eats one meal.
    next.food = next.food.saturating_sub(1);

    if next.food == 0 {
        let damage: u32 = rng.random_range(15..=25);
        next.health = next.health.saturating_sub(damage);
        next.curses.insert(STARVING_CURSE.to_string());
        consequences.insert("starvation_damage".to_string(), damage as i64);
        log::debug!("starvation: {damage} damage, health now {}", next.health);
    }

    if let Some(action) = match_action(choice_text) {
        if action.health != Effect::None {
            let delta = action.health.resolve(&next, rng);
            let old = next.health;
            next.health = clamped_add(next.health, delta, next.max_health);
            consequences.insert("health".to_string(), next.health as i64 - old as i64);
        }
        if action.gold != Effect::None {
            let delta = action.gold.resolve(&next, rng);
            let old = next.gold;
            next.gold = clamped_add(next.gold, delta, u32::MAX);
            consequences.insert("gold".to_string(), next.gold as i64 - old as i64);
        }
        if action.food != Effect::None {
            let delta = action.food.resolve(&next, rng);
            let old = next.food;
            next.food = clamped_add(next.food, delta, u32::MAX);
            consequences.insert("food".to_string(), next.food as i64 - old as i64);
        }
        if action.experience != 0 {
            next.experience += action.experience as u32;
            consequences.insert("experience".to_string(), action.experience);
        }
        if action.corruption != Effect::None {
            let delta = action.corruption.resolve(&next, rng);
            let old = next.corruption;
            next.corruption = clamped_add(next.corruption, delta, 100);
            consequences.insert(
                "corruption".to_string(),
                next.corruption as i64 - old as i64,
            );
        }
        if let Some(reputation) = action.reputation {
            log::debug!("reputation: {} -> {}", next.reputation, reputation);
            next.reputation = reputation;
        }
        log::debug!("applied '{}' ({})", action.keyword, action.description);
    }

    // Critical failure from high corruption.
    if next.corruption > 60 && rng.random_bool(0.15) {
        let damage = next.health / 3;
        next.health = (next.health - damage).max(1);
        consequences.insert("corruption_damage".to_string(), damage as i64);
    }

    next.record_scene(scene_id);

    if next.experience >= experience_needed(next.level) {
        next.level += 1;

        // Corruption erodes the benefits of leveling.
        let health_gain = if next.corruption < 25 {
            next.max_health += 25;
            next.health = next.max_health;
            25
        } else if next.corruption < 50 {
            next.max_health += 15;
            next.health = (next.health + 20).min(next.max_health);
            15
        } else {
            next.max_health += 5;
            next.health = (next.health + 10).min(next.max_health);
            5
        };
        consequences.insert("level_up".to_string(), health_gain);
        log::debug!("level up: now level {}", next.level);
    }

    next.last_choice_consequences = consequences;
    next
}
