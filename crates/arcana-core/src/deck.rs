//! Deck loading and subtype filtering.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::card::CardDefinition;
use crate::error::DeckResult;
use crate::formation::Formation;
use crate::subtype::Subtype;

/// The full card definition table plus spread configuration.
///
/// Loaded once per process via an explicit [`Deck::load`] call and treated
/// as immutable afterwards; lookups are pure in-memory reads and the value
/// can be shared across concurrent requests without locking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    /// Card definitions keyed by stable card id.
    #[serde(default)]
    pub cards: BTreeMap<String, CardDefinition>,
    /// Spread definitions keyed by formation name.
    #[serde(default)]
    pub formations: BTreeMap<String, Formation>,
}

impl Deck {
    /// Parse a deck from JSON text.
    ///
    /// Fails only if the source itself is structurally unparseable;
    /// cards with missing fields load as partially empty definitions.
    pub fn from_json(json: &str) -> DeckResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a deck from a JSON file.
    pub fn load(path: &Path) -> DeckResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Cards whose `type` matches one of the given subtypes, with their
    /// ids, in stable id order.
    pub fn cards_of(&self, subtypes: &[Subtype]) -> Vec<(&str, &CardDefinition)> {
        self.cards
            .iter()
            .filter(|(_, card)| subtypes.iter().any(|sub| sub.as_str() == card.subtype))
            .map(|(id, card)| (id.as_str(), card))
            .collect()
    }
}
