//! Quest validation and unlock triggering.
//!
//! Every partial goal of a quest is checked, even after one fails, because
//! each met goal may reveal its own scenario. The quest's character unlock
//! is applied only when all goals are met and the sheet already has a slot
//! for that class.

use qb_core::{
    CharacterSheet, ProgressEntry, Quest, ScenarioId, ScenarioRepository, ScenarioState,
};

use crate::config::{MissingScenarioPolicy, ValidatorConfig};
use crate::error::{QuestError, QuestResult};
use crate::report::QuestReport;

/// Validates personal quests against a scenario repository.
#[derive(Debug)]
pub struct QuestValidator<R> {
    repository: R,
    config: ValidatorConfig,
}

impl<R: ScenarioRepository> QuestValidator<R> {
    /// Create a validator with the default configuration.
    pub fn new(repository: R) -> Self {
        Self::with_config(repository, ValidatorConfig::default())
    }

    /// Create a validator with an explicit configuration.
    pub fn with_config(repository: R, config: ValidatorConfig) -> Self {
        Self { repository, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// The scenario repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Mutable access to the scenario repository.
    pub fn repository_mut(&mut self) -> &mut R {
        &mut self.repository
    }

    /// Consume the validator and hand back the repository.
    pub fn into_repository(self) -> R {
        self.repository
    }

    /// Check a quest, applying unlocks, and return whether it is met.
    ///
    /// Never fails: evaluation errors are logged and reported as `false`.
    pub fn validate(&mut self, quest: &Quest, sheet: &mut CharacterSheet) -> bool {
        match self.evaluate(quest, sheet) {
            Ok(report) => report.met,
            Err(e) => {
                tracing::warn!(quest = %quest.name, error = %e, "Quest evaluation failed");
                false
            }
        }
    }

    /// Check a quest, applying unlocks, and report what was found and changed.
    ///
    /// Under [`MissingScenarioPolicy::Fail`] an unknown scenario makes this
    /// return an error after every goal has been checked; the character
    /// unlock is then not applied.
    pub fn evaluate(
        &mut self,
        quest: &Quest,
        sheet: &mut CharacterSheet,
    ) -> QuestResult<QuestReport> {
        let mut report = QuestReport::default();

        for entry in &quest.progress {
            let met = self.check_entry(entry, &mut report);
            report.goals.push(met);
        }
        report.met = report.goals.iter().all(|&met| met);

        if self.config.missing_scenario == MissingScenarioPolicy::Fail
            && !report.missing_scenarios.is_empty()
        {
            return Err(QuestError::UnknownScenarios(report.missing_scenarios));
        }

        if let (true, Some(character)) = (report.met, quest.character_unlock.as_ref()) {
            match sheet.unlock(character) {
                Some(false) => {
                    tracing::debug!(quest = %quest.name, character = %character, "Unlocked character");
                    report.character_unlocked = Some(character.clone());
                }
                Some(true) => {}
                None => {
                    tracing::debug!(character = %character, "No unlock slot on sheet, skipping");
                }
            }
        }

        tracing::debug!(
            quest = %quest.name,
            met = report.met,
            goals_met = report.goals_met(),
            goals = report.goals.len(),
            "Evaluated quest"
        );
        Ok(report)
    }

    /// Check a single progress entry, revealing its scenario if it is met.
    ///
    /// An unknown scenario is skipped: silently under
    /// [`MissingScenarioPolicy::Ignore`], with a warning otherwise. Only
    /// [`evaluate`](Self::evaluate) turns [`MissingScenarioPolicy::Fail`]
    /// into an error; a single goal's result stays its own met flag.
    pub fn validate_partial_goal(&mut self, entry: &ProgressEntry) -> bool {
        let mut report = QuestReport::default();
        self.check_entry(entry, &mut report)
    }

    fn check_entry(&mut self, entry: &ProgressEntry, report: &mut QuestReport) -> bool {
        if !entry.is_met() {
            return false;
        }
        if let Some(scenario) = &entry.scenario_unlock {
            self.reveal(scenario, report);
        }
        true
    }

    /// Move a hidden scenario to incomplete. Other states are left alone.
    fn reveal(&mut self, id: &ScenarioId, report: &mut QuestReport) {
        let hidden = match self.repository.find(id) {
            Some(scenario) => scenario.is_hidden(),
            None => {
                if self.config.missing_scenario != MissingScenarioPolicy::Ignore {
                    tracing::warn!(scenario = %id, "Quest goal unlocks unknown scenario");
                }
                if !report.missing_scenarios.contains(id) {
                    report.missing_scenarios.push(id.clone());
                }
                return;
            }
        };
        if !hidden {
            return;
        }

        match self.repository.change_state(id, ScenarioState::Incomplete) {
            Ok(()) => {
                tracing::debug!(scenario = %id, "Unlocked scenario");
                report.scenarios_unlocked.push(id.clone());
            }
            Err(e) => {
                tracing::warn!(scenario = %id, error = %e, "Failed to unlock scenario");
            }
        }
    }
}
