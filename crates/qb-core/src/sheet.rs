//! The player's character sheet.
//!
//! Only the character-unlock flags matter here. The set of unlockable
//! classes is fixed by whoever builds the sheet; flags are flipped, never
//! added.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::id::CharacterId;

/// A player's character sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterSheet {
    /// Unlock flag per unlockable character class.
    #[serde(rename = "characterUnlocks", default)]
    pub character_unlocks: BTreeMap<CharacterId, bool>,
}

impl CharacterSheet {
    /// Create a sheet with every given class present and still locked.
    pub fn with_unlock_slots<I, C>(characters: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<CharacterId>,
    {
        Self {
            character_unlocks: characters.into_iter().map(|c| (c.into(), false)).collect(),
        }
    }

    /// Returns true if the class has a slot on this sheet.
    pub fn has_slot(&self, character: &CharacterId) -> bool {
        self.character_unlocks.contains_key(character)
    }

    /// Returns true if the class is present and unlocked.
    pub fn is_unlocked(&self, character: &CharacterId) -> bool {
        self.character_unlocks.get(character).copied().unwrap_or(false)
    }

    /// Unlock a class that already has a slot.
    ///
    /// Returns `Some(previous)` with the flag's previous value, or `None`
    /// if the class has no slot (the sheet is left unchanged).
    pub fn unlock(&mut self, character: &CharacterId) -> Option<bool> {
        self.character_unlocks
            .get_mut(character)
            .map(|flag| std::mem::replace(flag, true))
    }
}
