//! Uniform sampling of distinct cards.

use rand::Rng;
use rand::rngs::StdRng;

use arcana_core::{CardDefinition, Deck, Subtype};

use crate::error::{DrawError, DrawResult};

/// Draw `count` distinct cards valid for the given resolved subtypes,
/// uniformly at random and without replacement.
///
/// The returned order is the draw order; callers assign positional meaning
/// (a cut card is the last element). Fails with
/// [`DrawError::InsufficientCards`] instead of truncating when the theme
/// has fewer valid cards than requested, and with
/// [`DrawError::NoSubtypes`] when the resolved subtype set is empty.
pub fn sample_cards<'a>(
    deck: &'a Deck,
    theme: &str,
    subtypes: &[Subtype],
    count: usize,
    rng: &mut StdRng,
) -> DrawResult<Vec<(&'a str, &'a CardDefinition)>> {
    if subtypes.is_empty() {
        return Err(DrawError::NoSubtypes(theme.to_string()));
    }

    let mut pool = deck.cards_of(subtypes);
    if pool.len() < count {
        return Err(DrawError::InsufficientCards {
            theme: theme.to_string(),
            requested: count,
            available: pool.len(),
        });
    }

    // Partial Fisher–Yates: after i swaps, positions 0..i hold a uniform
    // draw without replacement. A comparator-based shuffle would not be
    // uniform.
    for i in 0..count {
        let j = rng.random_range(i..pool.len());
        pool.swap(i, j);
    }
    pool.truncate(count);
    Ok(pool)
}
