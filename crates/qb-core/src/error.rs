use crate::id::ScenarioId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when manipulating scenario data.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested scenario ID does not exist in the repository.
    #[error("scenario not found: {0}")]
    ScenarioNotFound(ScenarioId),

    /// A scenario map entry is filed under a key other than its own ID.
    #[error("scenario key {key} does not match scenario id {id}")]
    KeyMismatch {
        /// The map key the scenario was filed under.
        key: ScenarioId,
        /// The scenario's own ID.
        id: ScenarioId,
    },
}
