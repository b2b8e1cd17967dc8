//! Error types for quest validation.

use qb_core::{CoreError, ScenarioId};
use thiserror::Error;

/// Result type for quest operations.
pub type QuestResult<T> = Result<T, QuestError>;

/// Errors that can occur while evaluating a quest.
#[derive(Debug, Error)]
pub enum QuestError {
    /// Goals were met that reference scenarios the repository does not know.
    #[error("unknown scenarios referenced by quest: {}", join_ids(.0))]
    UnknownScenarios(Vec<ScenarioId>),

    /// The scenario repository rejected a request.
    #[error("{0}")]
    Repository(#[from] CoreError),
}

fn join_ids(ids: &[ScenarioId]) -> String {
    ids.iter()
        .map(ScenarioId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_scenarios_message() {
        let err = QuestError::UnknownScenarios(vec!["S1".into(), "S9".into()]);
        assert_eq!(
            err.to_string(),
            "unknown scenarios referenced by quest: S1, S9"
        );
    }

    #[test]
    fn wraps_core_error() {
        let err: QuestError = CoreError::ScenarioNotFound("S1".into()).into();
        assert_eq!(err.to_string(), "scenario not found: S1");
    }
}
