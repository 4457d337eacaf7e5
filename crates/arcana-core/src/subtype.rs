//! The fixed universe of card subtypes.

use serde::{Deserialize, Serialize};

/// A coarse card category: the major arcana or one of the four suits.
///
/// The universe is closed. Resource subdirectories and deck `type` values
/// that do not match one of these names are ignored during discovery, so
/// adding a subtype means adding a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subtype {
    /// The trump cards (22 in a standard deck).
    MajorArcana,
    /// Suit of Cups.
    Cups,
    /// Suit of Pentacles.
    Pentacles,
    /// Suit of Swords. The "Sowrds" spelling matches the on-disk asset
    /// directories and the deck data; it is part of the data contract.
    Sowrds,
    /// Suit of Wands.
    Wands,
}

impl Subtype {
    /// All subtypes in canonical order.
    pub fn all() -> &'static [Self] {
        &[
            Self::MajorArcana,
            Self::Cups,
            Self::Pentacles,
            Self::Sowrds,
            Self::Wands,
        ]
    }

    /// The directory and deck-data name of this subtype.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MajorArcana => "MajorArcana",
            Self::Cups => "Cups",
            Self::Pentacles => "Pentacles",
            Self::Sowrds => "Sowrds",
            Self::Wands => "Wands",
        }
    }

    /// Parse a directory or deck `type` name. Unknown names yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|sub| sub.as_str() == s)
    }
}

impl std::fmt::Display for Subtype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
