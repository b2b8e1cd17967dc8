//! Core types for Questbook: quests, character sheets, and scenarios.
//!
//! This crate defines the plain data records a personal quest is evaluated
//! against. It holds no evaluation policy of its own beyond the per-goal
//! rules; see `qb-quest` for the validator that applies unlocks.

/// Error types used throughout the crate.
pub mod error;
/// String identifiers for characters and scenarios.
pub mod id;
/// Quests, progress entries, and goal rules.
pub mod quest;
/// Scenarios, their visibility states, and the repository abstraction.
pub mod scenario;
/// The player's character sheet and its unlock flags.
pub mod sheet;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export identifier types.
pub use id::{CharacterId, ScenarioId};
/// Re-export quest types.
pub use quest::{Goal, ProgressEntry, Quest};
/// Re-export scenario types.
pub use scenario::{Scenario, ScenarioRepository, ScenarioState, ScenarioStore};
/// Re-export sheet types.
pub use sheet::CharacterSheet;
