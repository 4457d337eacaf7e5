//! Error types for deck loading.

/// Alias for `Result<T, DeckError>`.
pub type DeckResult<T> = Result<T, DeckError>;

/// Errors raised while loading the deck table.
///
/// Individual malformed cards do not surface here: they load as partially
/// empty definitions and are rejected at render time.
#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    /// The deck source exists but is not structurally valid JSON.
    #[error("deck data is corrupt: {0}")]
    DataCorrupt(#[from] serde_json::Error),

    /// The deck source could not be read.
    #[error("cannot read deck: {0}")]
    Io(#[from] std::io::Error),
}
