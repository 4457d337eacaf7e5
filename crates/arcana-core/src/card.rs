//! Card definitions, meanings, and orientations.

use serde::{Deserialize, Serialize};

use crate::subtype::Subtype;

/// Upright and reversed interpretation texts for one card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meaning {
    /// Interpretation when the card is drawn upright.
    #[serde(default)]
    pub up: String,
    /// Interpretation when the card is drawn reversed.
    #[serde(default)]
    pub down: String,
}

/// A single card as stored in the deck table.
///
/// Every field defaults to empty so a structurally valid deck always loads.
/// Incomplete cards are rejected by [`CardDefinition::validate`] when a
/// reading is rendered, not at load time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Subtype name (`type` in the deck data), matched against [`Subtype`].
    #[serde(rename = "type", default)]
    pub subtype: String,
    /// Logical image asset name without extension (`pic` in the deck data).
    #[serde(rename = "pic", default)]
    pub image_key: String,
    /// Display name (`name_cn` in the deck data).
    #[serde(rename = "name_cn", default)]
    pub name: String,
    /// Upright and reversed meanings.
    #[serde(default)]
    pub meaning: Meaning,
}

impl CardDefinition {
    /// Check that every required field is populated and the subtype is a
    /// known [`Subtype`]. Returns the deck-data names of the offending
    /// fields on failure.
    pub fn validate(&self) -> Result<(), Vec<&'static str>> {
        let mut bad = Vec::new();
        if Subtype::parse(&self.subtype).is_none() {
            bad.push("type");
        }
        if self.image_key.is_empty() {
            bad.push("pic");
        }
        if self.name.is_empty() {
            bad.push("name_cn");
        }
        if self.meaning.up.is_empty() {
            bad.push("meaning.up");
        }
        if self.meaning.down.is_empty() {
            bad.push("meaning.down");
        }
        if bad.is_empty() { Ok(()) } else { Err(bad) }
    }
}

/// Upright or reversed state of a drawn card.
///
/// Resolved exactly once when the card is drawn and never recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// The card is the right way up.
    Upright,
    /// The card is upside down.
    Reversed,
}

impl Orientation {
    /// The meaning text matching this orientation.
    pub fn meaning_of(self, card: &CardDefinition) -> &str {
        match self {
            Self::Upright => &card.meaning.up,
            Self::Reversed => &card.meaning.down,
        }
    }

    /// The reading label: `正位` for upright, `逆位` for reversed.
    pub fn label(self) -> &'static str {
        match self {
            Self::Upright => "正位",
            Self::Reversed => "逆位",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
