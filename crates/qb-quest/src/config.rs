//! Configuration for quest validation.

use serde::{Deserialize, Serialize};

/// What to do when a met goal names a scenario the repository lacks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingScenarioPolicy {
    /// Skip the unlock silently.
    Ignore,
    /// Skip the unlock and log a warning.
    #[default]
    Warn,
    /// Fail the evaluation once all goals have been checked.
    Fail,
}

/// Configuration for a [`QuestValidator`](crate::QuestValidator).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Handling of scenario unlocks that point at unknown scenarios.
    pub missing_scenario: MissingScenarioPolicy,
}

impl ValidatorConfig {
    /// Set the missing-scenario policy.
    pub fn with_missing_scenario(mut self, policy: MissingScenarioPolicy) -> Self {
        self.missing_scenario = policy;
        self
    }

    /// Shorthand for failing on unknown scenarios.
    pub fn strict() -> Self {
        Self::default().with_missing_scenario(MissingScenarioPolicy::Fail)
    }
}
