//! Personal quests and the rules for their partial goals.
//!
//! A quest is a list of progress entries. Each entry carries a [`Goal`]
//! (a checklist or a counter) and may name a scenario to reveal once that
//! goal is met. The quest as a whole may name a character class to unlock.

use serde::{Deserialize, Deserializer, Serialize};

use crate::id::{CharacterId, ScenarioId};

/// A personal quest: a set of partial goals gating an unlock.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    /// Display name, used only for logging.
    #[serde(default)]
    pub name: String,
    /// Partial goals; the quest is met when every one of them is met.
    #[serde(default)]
    pub progress: Vec<ProgressEntry>,
    /// Character class unlocked when the whole quest is met.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_unlock: Option<CharacterId>,
}

impl Quest {
    /// Create an empty quest with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Append a progress entry.
    pub fn with_entry(mut self, entry: ProgressEntry) -> Self {
        self.progress.push(entry);
        self
    }

    /// Set the character class unlocked on completion.
    pub fn with_character_unlock(mut self, character: impl Into<CharacterId>) -> Self {
        self.character_unlock = Some(character.into());
        self
    }
}

/// One gating condition within a quest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    /// The condition itself, tagged by `type` in JSON.
    #[serde(flatten)]
    pub goal: Goal,
    /// Scenario revealed as soon as this entry is met.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario_unlock: Option<ScenarioId>,
}

impl ProgressEntry {
    /// A checklist entry with the given box states.
    pub fn checkbox(value: impl Into<Vec<bool>>) -> Self {
        Self {
            goal: Goal::Checkbox {
                value: value.into(),
            },
            scenario_unlock: None,
        }
    }

    /// A counter entry that is met once `value` reaches `target`.
    pub fn number(value: impl Into<f64>, target: impl Into<f64>) -> Self {
        Self {
            goal: Goal::Number {
                value: value.into(),
                target: target.into(),
            },
            scenario_unlock: None,
        }
    }

    /// Reveal a scenario when this entry is met.
    pub fn with_scenario_unlock(mut self, scenario: impl Into<ScenarioId>) -> Self {
        self.scenario_unlock = Some(scenario.into());
        self
    }

    /// Returns true if the goal of this entry is met.
    pub fn is_met(&self) -> bool {
        self.goal.is_met()
    }
}

/// The condition a progress entry checks.
///
/// Deserialization is lenient about value shapes: checklist boxes may be
/// any JSON value and count as ticked when truthy (`true`, a non-zero
/// number, a non-empty string), and counters accept any JSON number.
/// A malformed entry of a known type still fails to deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Goal {
    /// A checklist; met when every box is ticked.
    Checkbox {
        /// Box states in display order.
        #[serde(default, deserialize_with = "truthy_flags")]
        value: Vec<bool>,
    },
    /// A counter; met when `value >= target`.
    Number {
        /// Current count.
        value: f64,
        /// Count required.
        target: f64,
    },
    /// Any unrecognized `type` tag. Never met.
    #[serde(other)]
    Unknown,
}

impl Goal {
    /// Returns true if this goal is met.
    ///
    /// An empty checklist is vacuously met.
    pub fn is_met(&self) -> bool {
        match self {
            Self::Checkbox { value } => value.iter().all(|&ticked| ticked),
            Self::Number { value, target } => value >= target,
            Self::Unknown => false,
        }
    }
}

/// Read a list of checklist boxes, treating each entry by its truthiness.
fn truthy_flags<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<bool>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Number(f64),
        Text(String),
        Null,
    }

    let flags = Vec::<Flag>::deserialize(deserializer)?;
    Ok(flags
        .into_iter()
        .map(|flag| match flag {
            Flag::Bool(ticked) => ticked,
            Flag::Number(n) => n != 0.0 && !n.is_nan(),
            Flag::Text(s) => !s.is_empty(),
            Flag::Null => false,
        })
        .collect())
}
