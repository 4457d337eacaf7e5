//! Formation selection and positional labels.

use std::collections::BTreeMap;

use rand::Rng;
use rand::rngs::StdRng;

use arcana_core::Formation;

use crate::error::{DrawError, DrawResult};

/// Label given to the final position of a cut spread.
pub const CUT_LABEL: &str = "切牌";

/// Pick one formation uniformly at random from the configured table.
pub fn pick_formation<'a>(
    formations: &'a BTreeMap<String, Formation>,
    rng: &mut StdRng,
) -> DrawResult<(&'a str, &'a Formation)> {
    if formations.is_empty() {
        return Err(DrawError::NoFormations);
    }
    let idx = rng.random_range(0..formations.len());
    let (name, formation) = formations.iter().nth(idx).unwrap();
    Ok((name.as_str(), formation))
}

/// Validate a formation's label sets and pick one uniformly at random.
///
/// Every configured representation must contain exactly `cards_num`
/// labels. A mismatch is a configuration defect and fails fast with
/// [`DrawError::InvalidFormation`] before any card is drawn, whichever
/// representation the pick would have landed on. Labels are never clamped
/// or padded.
pub fn pick_labels(
    name: &str,
    formation: &Formation,
    rng: &mut StdRng,
) -> DrawResult<Vec<String>> {
    if let Some(&index) = formation.mismatched_representations().first() {
        return Err(DrawError::InvalidFormation {
            name: name.to_string(),
            index,
            expected: formation.cards_num,
            found: formation.representations[index].len(),
        });
    }
    if formation.representations.is_empty() {
        // No label set can cover the positions.
        return Err(DrawError::InvalidFormation {
            name: name.to_string(),
            index: 0,
            expected: formation.cards_num,
            found: 0,
        });
    }
    let idx = rng.random_range(0..formation.representations.len());
    Ok(formation.representations[idx].clone())
}
