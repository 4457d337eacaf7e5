//! Core types for Arcanum: cards, themes, formations, and deck loading.
//!
//! This crate defines the immutable data model the draw engine operates on.
//! A [`Deck`] is loaded once from JSON and shared read-only afterwards;
//! theme discovery, sampling, and rendering live in `arcana-draw`.

/// Card definitions, meanings, and orientations.
pub mod card;
/// Deck loading and subtype filtering.
pub mod deck;
/// Error types used throughout the crate.
pub mod error;
/// Spread layouts ("formations") from the deck data.
pub mod formation;
/// The fixed universe of card subtypes.
pub mod subtype;
/// Built-in theme registry.
pub mod theme;

/// Re-export card types.
pub use card::{CardDefinition, Meaning, Orientation};
/// Re-export the deck table.
pub use deck::Deck;
/// Re-export error types.
pub use error::{DeckError, DeckResult};
/// Re-export the spread layout type.
pub use formation::Formation;
/// Re-export the subtype universe.
pub use subtype::Subtype;
