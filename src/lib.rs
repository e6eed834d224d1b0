pub mod consequences;
pub mod crisis;
pub mod directive;
pub mod error;
pub mod player;
pub mod resources;

// Re-export commonly used items for easier access
pub use consequences::{ActionEffects, Effect, apply_choice, match_action};
pub use crisis::CrisisLevel;
pub use directive::{consequence_context, npc_behavior, scene_prompt, scene_requirements};
pub use error::EngineError;
pub use player::{PlayerState, PlayerStateBuilder, Reputation};
pub use resources::{CorruptionStatus, FoodStatus, GoldStatus, HealthStatus, ResourceStatus};
