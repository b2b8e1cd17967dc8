//! Personal quest validation for Questbook.
//!
//! A [`QuestValidator`] checks every partial goal of a quest, reveals the
//! scenarios attached to goals that are met, and unlocks the quest's
//! character class on the sheet once the whole quest is met.

pub mod config;
pub mod error;
pub mod report;
pub mod validator;

pub use config::{MissingScenarioPolicy, ValidatorConfig};
pub use error::{QuestError, QuestResult};
pub use report::QuestReport;
pub use validator::QuestValidator;
