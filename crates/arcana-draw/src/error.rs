//! Error types for the draw engine.

use thiserror::Error;

/// Result type for draw operations.
pub type DrawResult<T> = Result<T, DrawError>;

/// Errors that can occur during a divination request.
///
/// Every variant is unrecoverable for the current request: the engine
/// performs no retries and never substitutes another card, which would
/// break the fair-draw expectation. The host presents the failure.
#[derive(Debug, Error)]
pub enum DrawError {
    /// The theme resolved to zero usable subtypes.
    #[error("theme \"{0}\" has no usable subtypes")]
    NoSubtypes(String),

    /// Fewer valid cards exist for the theme than were requested.
    #[error("theme \"{theme}\" has only {available} cards, {requested} requested")]
    InsufficientCards {
        /// The theme the draw ran against.
        theme: String,
        /// How many cards the spread needed.
        requested: usize,
        /// How many valid cards the theme actually has.
        available: usize,
    },

    /// A drawn card failed field validation.
    #[error("card \"{id}\" is malformed: missing {fields}")]
    MalformedCard {
        /// Stable deck id of the card.
        id: String,
        /// Comma-separated deck-data names of the failing fields.
        fields: String,
    },

    /// No image asset matched a validated card's image key.
    #[error("image not found: {theme}/{subtype}/{key}")]
    AssetNotFound {
        /// Theme whose assets were searched.
        theme: String,
        /// Subtype directory that was searched.
        subtype: String,
        /// The card's image key.
        key: String,
    },

    /// A formation's label sets do not all match its card count.
    #[error(
        "formation \"{name}\": representation {index} has {found} labels, expected {expected}"
    )]
    InvalidFormation {
        /// Name of the offending formation.
        name: String,
        /// Index of the first mismatched representation.
        index: usize,
        /// The formation's card count.
        expected: usize,
        /// How many labels the representation actually has.
        found: usize,
    },

    /// The deck configures no formations to pick from.
    #[error("no formations configured")]
    NoFormations,

    /// Deck loading failed.
    #[error(transparent)]
    Deck(#[from] arcana_core::DeckError),

    /// An asset read failed after the file was located.
    #[error("cannot read asset: {0}")]
    Io(#[from] std::io::Error),
}
