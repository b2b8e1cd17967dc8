//! Scenarios, their visibility states, and where they are kept.
//!
//! The quest validator never owns scenarios. It talks to a
//! [`ScenarioRepository`], which a host backs with whatever storage it
//! uses; [`ScenarioStore`] is the in-memory implementation.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::id::ScenarioId;

/// Visibility and completion status of a scenario.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioState {
    /// Not yet revealed to the party.
    #[default]
    Hidden,
    /// Revealed and playable, not yet completed.
    Incomplete,
    /// Played to completion.
    Complete,
    /// Revealed but locked out by a campaign choice.
    Blocked,
    /// Revealed but waiting on a requirement.
    Required,
}

impl fmt::Display for ScenarioState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hidden => write!(f, "hidden"),
            Self::Incomplete => write!(f, "incomplete"),
            Self::Complete => write!(f, "complete"),
            Self::Blocked => write!(f, "blocked"),
            Self::Required => write!(f, "required"),
        }
    }
}

/// A scenario in the campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario identifier.
    pub id: ScenarioId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Current visibility state.
    #[serde(default)]
    pub state: ScenarioState,
}

impl Scenario {
    /// Create a hidden scenario.
    pub fn new(id: impl Into<ScenarioId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            state: ScenarioState::Hidden,
        }
    }

    /// Set the initial state.
    pub fn with_state(mut self, state: ScenarioState) -> Self {
        self.state = state;
        self
    }

    /// Returns true if the scenario has not been revealed yet.
    pub fn is_hidden(&self) -> bool {
        self.state == ScenarioState::Hidden
    }
}

/// Lookup and state changes for scenarios.
pub trait ScenarioRepository {
    /// Find a scenario by ID. Returns `None` for an unknown ID.
    fn find(&self, id: &ScenarioId) -> Option<&Scenario>;

    /// Move a scenario to a new state.
    fn change_state(&mut self, id: &ScenarioId, state: ScenarioState) -> CoreResult<()>;
}

impl<R: ScenarioRepository + ?Sized> ScenarioRepository for &mut R {
    fn find(&self, id: &ScenarioId) -> Option<&Scenario> {
        (**self).find(id)
    }

    fn change_state(&mut self, id: &ScenarioId, state: ScenarioState) -> CoreResult<()> {
        (**self).change_state(id, state)
    }
}

/// In-memory scenario repository.
///
/// Serialized as a map from scenario ID to scenario. Every key must match
/// the ID of the scenario filed under it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(
    try_from = "HashMap<ScenarioId, Scenario>",
    into = "HashMap<ScenarioId, Scenario>"
)]
pub struct ScenarioStore {
    scenarios: HashMap<ScenarioId, Scenario>,
}

impl ScenarioStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a scenario. Returns the replaced one, if any.
    pub fn insert(&mut self, scenario: Scenario) -> Option<Scenario> {
        self.scenarios.insert(scenario.id.clone(), scenario)
    }

    /// Current state of a scenario, if it exists.
    pub fn state_of(&self, id: &ScenarioId) -> Option<ScenarioState> {
        self.scenarios.get(id).map(|s| s.state)
    }

    /// Iterate over all scenarios in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.values()
    }

    /// Number of scenarios.
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Returns true if the store holds no scenarios.
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

impl FromIterator<Scenario> for ScenarioStore {
    fn from_iter<I: IntoIterator<Item = Scenario>>(iter: I) -> Self {
        Self {
            scenarios: iter.into_iter().map(|s| (s.id.clone(), s)).collect(),
        }
    }
}

impl TryFrom<HashMap<ScenarioId, Scenario>> for ScenarioStore {
    type Error = CoreError;

    fn try_from(scenarios: HashMap<ScenarioId, Scenario>) -> CoreResult<Self> {
        if let Some((key, scenario)) = scenarios.iter().find(|(key, s)| **key != s.id) {
            return Err(CoreError::KeyMismatch {
                key: key.clone(),
                id: scenario.id.clone(),
            });
        }
        Ok(Self { scenarios })
    }
}

impl From<ScenarioStore> for HashMap<ScenarioId, Scenario> {
    fn from(store: ScenarioStore) -> Self {
        store.scenarios
    }
}

impl ScenarioRepository for ScenarioStore {
    fn find(&self, id: &ScenarioId) -> Option<&Scenario> {
        self.scenarios.get(id)
    }

    fn change_state(&mut self, id: &ScenarioId, state: ScenarioState) -> CoreResult<()> {
        let scenario = self
            .scenarios
            .get_mut(id)
            .ok_or_else(|| CoreError::ScenarioNotFound(id.clone()))?;
        scenario.state = state;
        Ok(())
    }
}
