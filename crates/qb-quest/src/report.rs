//! The outcome of evaluating a quest.

use qb_core::{CharacterId, ScenarioId};
use serde::Serialize;

/// What a quest evaluation found and changed.
///
/// Unlock lists only record changes made by this evaluation; running the
/// same quest again reports the same `met` and `goals` but no new unlocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuestReport {
    /// Whether every partial goal is met.
    pub met: bool,
    /// Per-entry results, in quest order.
    pub goals: Vec<bool>,
    /// Scenarios moved from hidden to incomplete.
    pub scenarios_unlocked: Vec<ScenarioId>,
    /// Character class flipped from locked to unlocked.
    pub character_unlocked: Option<CharacterId>,
    /// Scenario unlocks skipped because the scenario does not exist.
    pub missing_scenarios: Vec<ScenarioId>,
}

impl QuestReport {
    /// Number of partial goals met.
    pub fn goals_met(&self) -> usize {
        self.goals.iter().filter(|&&met| met).count()
    }

    /// Returns true if this evaluation changed the sheet or the repository.
    pub fn unlocked_anything(&self) -> bool {
        self.character_unlocked.is_some() || !self.scenarios_unlocked.is_empty()
    }
}
