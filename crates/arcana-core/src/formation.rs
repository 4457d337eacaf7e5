//! Spread layouts ("formations").

use serde::{Deserialize, Serialize};

/// A named spread layout from the deck's `formations` table.
///
/// Each representation is one candidate set of positional labels; the
/// selector picks one per reading. Every representation must contain
/// exactly `cards_num` labels — the selector checks this before any card
/// is drawn and treats a mismatch as a configuration defect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formation {
    /// How many cards the spread draws.
    pub cards_num: usize,
    /// Whether the final position is a cut card. Cosmetic: the last label
    /// is replaced by `切牌` at presentation time.
    pub is_cut: bool,
    /// Candidate positional label sets.
    pub representations: Vec<Vec<String>>,
}

impl Formation {
    /// Indices of representations whose length differs from `cards_num`.
    pub fn mismatched_representations(&self) -> Vec<usize> {
        self.representations
            .iter()
            .enumerate()
            .filter(|(_, labels)| labels.len() != self.cards_num)
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formation(cards_num: usize, reps: &[&[&str]]) -> Formation {
        Formation {
            cards_num,
            is_cut: false,
            representations: reps
                .iter()
                .map(|labels| labels.iter().map(|s| (*s).to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn well_formed_has_no_mismatches() {
        let f = formation(3, &[&["过去", "现在", "未来"], &["因", "果", "示"]]);
        assert!(f.mismatched_representations().is_empty());
    }

    #[test]
    fn short_and_long_label_sets_are_flagged() {
        let f = formation(3, &[&["过去", "现在"], &["a", "b", "c"], &["a", "b", "c", "d"]]);
        assert_eq!(f.mismatched_representations(), vec![0, 2]);
    }

    #[test]
    fn deserializes_from_deck_json() {
        let f: Formation = serde_json::from_str(
            r#"{"cards_num": 3, "is_cut": true, "representations": [["过去", "现在", "未来"]]}"#,
        )
        .unwrap();
        assert_eq!(f.cards_num, 3);
        assert!(f.is_cut);
        assert_eq!(f.representations[0][2], "未来");
    }
}
