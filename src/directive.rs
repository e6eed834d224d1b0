//! Narrative directive composer.
//!
//! Turns a player snapshot into the prompt handed to the downstream scene
//! generator. The composer performs no randomness of its own: identical
//! inputs yield byte-identical output. Block order and headings are the
//! contract surface that generators are tuned against, so reordering them
//! is a breaking change.

use crate::crisis::CrisisLevel;
use crate::player::{PlayerState, Reputation};
use crate::resources::ResourceStatus;

// Scene-requirement paragraphs, one fixed block per crisis level. Prose is
// data here, not logic: keeping it in a lookup keeps the composer's
// branching minimal and lets the blocks be unit-tested in isolation.
const SURVIVAL_MODE: &str = "\
SURVIVAL MODE - Player is in immediate mortal danger:
- Create life-or-death scenarios where wrong choice = death
- Make resources extremely scarce and expensive
- Show NPCs exploiting player's desperate state
- Offer high-risk/high-reward options vs safe but costly alternatives
- Emphasize time pressure and urgency
";

const DESPERATION_MODE: &str = "\
DESPERATION MODE - Player has serious problems:
- Multiple threats affecting player simultaneously
- Resources are scarce and overpriced
- NPCs should notice player's weakness
- Choices should involve difficult moral compromises
- Show consequences of previous poor decisions
";

const CHALLENGE_MODE: &str = "\
CHALLENGE MODE - Player faces significant obstacles:
- Present meaningful but manageable risks
- Make resources available but at fair cost
- NPCs react neutrally but opportunities exist
- Balance risk vs reward carefully
- Show paths to improvement requiring sacrifice
";

const GROWTH_MODE: &str = "\
GROWTH MODE - Player is doing well:
- Present opportunities for advancement
- Allow player to help others or pursue goals
- Resources available at normal prices
- Focus on character development choices
- Introduce new challenges appropriate to player's level
";

const POWER_MODE: &str = "\
POWER MODE - Player is thriving:
- Present choices about using power responsibly
- Allow player to affect larger events/NPCs
- Introduce moral complexity and corruption temptations
- Show how power can corrupt or inspire
- Create scenarios where player's reputation matters
";

const DIRE_CHOICES: &str = "\
Choice A: HIGH RISK (20-40 health loss possible) / HIGH REWARD (significant gold/items)
Choice B: SAFE OPTION (costs gold/food) / SURVIVAL FOCUSED (minimal gain but safer)
";

const STEADY_CHOICES: &str = "\
Choice A: MODERATE RISK (10-20 health loss) / GOOD REWARD (fair gold/experience gain)
Choice B: LOW RISK (minor costs) / MODEST REWARD (small but reliable gain)
";

const SCENE_CHECKLIST: &str = "\
SCENE GENERATION:
1. Create engaging title reflecting current crisis level
2. Write vivid description (2-3 sentences, use \\n for line breaks)
3. Include summary of what happened since last scene
4. Choose appropriate background color for mood
5. Make choices feel meaningfully different
6. Show how player's condition affects the situation
7. Reflect reputation in NPC interactions
8. Make resource scarcity feel real and impactful

Remember: This player's choices have led to their current state. Show consequences!
";

/// The fixed scene-requirement block for a crisis level.
pub fn scene_requirements(crisis: CrisisLevel) -> &'static str {
    match crisis {
        CrisisLevel::Critical => SURVIVAL_MODE,
        CrisisLevel::Desperate => DESPERATION_MODE,
        CrisisLevel::Struggling => CHALLENGE_MODE,
        CrisisLevel::Stable => GROWTH_MODE,
        CrisisLevel::Thriving => POWER_MODE,
    }
}

/// NPC-behavior guidance for an established reputation. `Unknown` and
/// `Merchant` have no entry and are silently skipped by the composer.
pub fn npc_behavior(reputation: Reputation) -> Option<&'static str> {
    match reputation {
        Reputation::Hero => Some("NPCs trust you, offer help, but expect heroic behavior"),
        Reputation::Murderer => Some("NPCs fear you, demand payment upfront, some flee"),
        Reputation::Thief => Some("NPCs guard possessions, watch you suspiciously"),
        Reputation::Diplomat => Some("NPCs respect you, offer information and fair deals"),
        Reputation::Corrupted => Some("NPCs sense darkness, react with fear or disgust"),
        Reputation::Feared => Some("NPCs submit to intimidation but hate you"),
        Reputation::Unknown | Reputation::Merchant => None,
    }
}

/// Render the player-state analysis: crisis level, annotated resource
/// values, and the list of active problems, plus optional previous-action
/// context. This block leads every directive but is also useful on its own
/// for debugging a stored state.
pub fn consequence_context(state: &PlayerState, previous_choice: Option<&str>) -> String {
    let crisis = CrisisLevel::assess(state);
    let resources = ResourceStatus::assess(state);

    let mut context = format!(
        "PLAYER STATE ANALYSIS:\n\
         Crisis Level: {}\n\
         Health: {}/{} ({})\n\
         Food: {} ({})\n\
         Gold: {} ({})\n\
         Corruption: {}/100 ({})\n\
         Reputation: {}\n\
         Level: {} (XP: {})\n\
         \n\
         ACTIVE PROBLEMS:\n",
        crisis.to_string().to_uppercase(),
        state.health,
        state.max_health,
        resources.health,
        state.food,
        resources.food,
        state.gold,
        resources.gold,
        state.corruption,
        resources.corruption,
        state.reputation.to_string().to_uppercase(),
        state.level,
        state.experience,
    );

    // Problem thresholds are hand-set for narrative urgency and looser than
    // the classifier's (near-death is an absolute 25 here, not a ratio).
    let mut problems = Vec::new();
    if state.food == 0 {
        problems.push("- STARVING: Player will die soon without food".to_string());
    }
    if state.health <= 25 {
        problems.push("- NEAR DEATH: Any combat could be fatal".to_string());
    }
    if state.gold <= 5 {
        problems.push("- BROKE: Cannot afford basic necessities".to_string());
    }
    if state.corruption >= 50 {
        problems.push("- CORRUPTED: Dark choices affecting all interactions".to_string());
    }
    if !state.curses.is_empty() {
        let curses: Vec<&str> = state.curses.iter().map(String::as_str).collect();
        problems.push(format!("- CURSED: {}", curses.join(", ")));
    }
    if !state.permanent_injuries.is_empty() {
        let injuries: Vec<&str> = state.permanent_injuries.iter().map(String::as_str).collect();
        problems.push(format!("- INJURED: {}", injuries.join(", ")));
    }

    if problems.is_empty() {
        context.push_str("- No immediate threats\n");
    } else {
        context.push_str(&problems.join("\n"));
        context.push('\n');
    }

    if let Some(choice) = previous_choice {
        context.push_str(&format!("\nPREVIOUS ACTION: {choice}\n"));
        if !state.last_choice_consequences.is_empty() {
            let rendered: Vec<String> = state
                .last_choice_consequences
                .iter()
                .map(|(effect, magnitude)| format!("{effect}: {magnitude}"))
                .collect();
            context.push_str(&format!("CONSEQUENCES: {}\n", rendered.join(", ")));
        }
    }

    context
}

/// Compose the full scene-generation directive for the downstream content
/// generator. Deterministic given its inputs; the theme string is passed
/// through verbatim and never validated here.
pub fn scene_prompt(state: &PlayerState, theme: &str, choice_made: Option<&str>) -> String {
    let crisis = CrisisLevel::assess(state);
    let context = consequence_context(state, choice_made);

    let mut prompt = format!(
        "You are creating an interactive adventure scene for a {theme} themed story.\n\n{context}\nSCENE REQUIREMENTS:\n"
    );

    prompt.push_str(scene_requirements(crisis));

    if let Some(behavior) = npc_behavior(state.reputation) {
        prompt.push_str(&format!("\nNPC BEHAVIOR: {behavior}\n"));
    }

    prompt.push_str(&format!(
        "\nRESOURCE ECONOMY:\n\
         - Food costs 5-15 gold (player has {})\n\
         - Healing costs 20-50 gold\n\
         - Magic services cost 30-100 gold\n\
         - Make prices reflect player's desperate state if applicable\n\
         \n\
         CHOICE CONSEQUENCES:\n\
         Generate exactly two choices where consequences match current state:\n",
        state.gold
    ));

    prompt.push_str(if crisis.is_dire() {
        DIRE_CHOICES
    } else {
        STEADY_CHOICES
    });

    prompt.push('\n');
    prompt.push_str(SCENE_CHECKLIST);

    prompt
}
