//! Orientation resolution and presentation rendering.

use std::fs;
use std::path::Path;

use rand::Rng;
use rand::rngs::StdRng;

use arcana_core::{CardDefinition, Orientation};

use crate::error::{DrawError, DrawResult};

/// A sampled card paired with its orientation.
///
/// The orientation is resolved exactly once, when the card leaves the
/// deck, and never recomputed — rendering the same drawn card twice
/// produces the same text.
#[derive(Debug, Clone)]
pub struct DrawnCard<'a> {
    /// Stable deck id of the card.
    pub id: &'a str,
    /// The card definition.
    pub card: &'a CardDefinition,
    /// Orientation fixed for this draw.
    pub orientation: Orientation,
}

impl<'a> DrawnCard<'a> {
    /// Pair a sampled card with a fair-coin orientation (p = 0.5 reversed).
    pub fn draw(id: &'a str, card: &'a CardDefinition, rng: &mut StdRng) -> Self {
        let orientation = if rng.random_bool(0.5) {
            Orientation::Reversed
        } else {
            Orientation::Upright
        };
        Self {
            id,
            card,
            orientation,
        }
    }

    /// Pair a card with a known orientation.
    pub fn with_orientation(id: &'a str, card: &'a CardDefinition, orientation: Orientation) -> Self {
        Self {
            id,
            card,
            orientation,
        }
    }
}

/// The rendered output for one drawn card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationUnit {
    /// Positional label, when the card belongs to a spread.
    pub label: Option<String>,
    /// Reading text: name, orientation, and the matching meaning.
    pub text: String,
    /// File name of the matched image asset, extension included.
    pub asset_name: String,
    /// Raw bytes of the image asset.
    pub image: Vec<u8>,
}

/// Render one drawn card against a theme's assets.
///
/// Validates the card's required fields, locates the file under
/// `root/theme/<subtype>` whose stem matches the card's image key
/// (extension-agnostic, lexicographically first on a tie), and reads its
/// bytes. Exactly one asset file is read per card.
pub fn render(root: &Path, theme: &str, drawn: &DrawnCard<'_>) -> DrawResult<PresentationUnit> {
    let card = drawn.card;
    if let Err(fields) = card.validate() {
        return Err(DrawError::MalformedCard {
            id: drawn.id.to_string(),
            fields: fields.join(", "),
        });
    }

    let dir = root.join(theme).join(&card.subtype);
    let not_found = || DrawError::AssetNotFound {
        theme: theme.to_string(),
        subtype: card.subtype.clone(),
        key: card.image_key.clone(),
    };

    let mut candidates: Vec<_> = fs::read_dir(&dir)
        .map_err(|_| not_found())?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_stem()
                .and_then(|stem| stem.to_str())
                .is_some_and(|stem| stem == card.image_key)
        })
        .collect();
    candidates.sort();
    let path = candidates.into_iter().next().ok_or_else(not_found)?;

    let image = fs::read(&path)?;
    let asset_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(&card.image_key)
        .to_string();

    let text = format!(
        "「{}{}」「{}」",
        card.name,
        drawn.orientation,
        drawn.orientation.meaning_of(card)
    );

    Ok(PresentationUnit {
        label: None,
        text,
        asset_name,
        image,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcana_core::Meaning;
    use rand::SeedableRng;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn fool() -> CardDefinition {
        CardDefinition {
            subtype: "MajorArcana".into(),
            image_key: "BigArcana00".into(),
            name: "愚者".into(),
            meaning: Meaning {
                up: "新的开始".into(),
                down: "轻率冒进".into(),
            },
        }
    }

    fn resource_with_asset(ext: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("TestTarot/MajorArcana");
        std::fs::create_dir_all(&sub).unwrap();
        std::fs::write(sub.join(format!("BigArcana00.{ext}")), b"img-bytes").unwrap();
        dir
    }

    #[test]
    fn renders_text_and_image() {
        let dir = resource_with_asset("png");
        let card = fool();
        let drawn = DrawnCard::with_orientation("0", &card, Orientation::Upright);

        let unit = render(dir.path(), "TestTarot", &drawn).unwrap();
        assert_eq!(unit.text, "「愚者正位」「新的开始」");
        assert_eq!(unit.asset_name, "BigArcana00.png");
        assert_eq!(unit.image, b"img-bytes");
        assert!(unit.label.is_none());
    }

    #[test]
    fn reversed_selects_down_meaning() {
        let dir = resource_with_asset("png");
        let card = fool();
        let drawn = DrawnCard::with_orientation("0", &card, Orientation::Reversed);

        let unit = render(dir.path(), "TestTarot", &drawn).unwrap();
        assert_eq!(unit.text, "「愚者逆位」「轻率冒进」");
    }

    #[test]
    fn render_is_deterministic_for_fixed_orientation() {
        let dir = resource_with_asset("png");
        let card = fool();
        let drawn = DrawnCard::with_orientation("0", &card, Orientation::Upright);

        let first = render(dir.path(), "TestTarot", &drawn).unwrap();
        let second = render(dir.path(), "TestTarot", &drawn).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn asset_match_is_extension_agnostic() {
        for ext in ["png", "jpg", "webp"] {
            let dir = resource_with_asset(ext);
            let card = fool();
            let drawn = DrawnCard::with_orientation("0", &card, Orientation::Upright);
            let unit = render(dir.path(), "TestTarot", &drawn).unwrap();
            assert_eq!(unit.asset_name, format!("BigArcana00.{ext}"));
        }
    }

    #[test]
    fn stem_must_match_exactly() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("TestTarot/MajorArcana");
        std::fs::create_dir_all(&sub).unwrap();
        // Prefix and suffix near-misses must not match.
        std::fs::write(sub.join("BigArcana001.png"), b"no").unwrap();
        std::fs::write(sub.join("XBigArcana00.png"), b"no").unwrap();

        let card = fool();
        let drawn = DrawnCard::with_orientation("0", &card, Orientation::Upright);
        let err = render(dir.path(), "TestTarot", &drawn).unwrap_err();
        assert!(matches!(err, DrawError::AssetNotFound { .. }));
    }

    #[test]
    fn missing_directory_is_asset_not_found() {
        let dir = TempDir::new().unwrap();
        let card = fool();
        let drawn = DrawnCard::with_orientation("0", &card, Orientation::Upright);

        let err = render(dir.path(), "TestTarot", &drawn).unwrap_err();
        match err {
            DrawError::AssetNotFound {
                theme,
                subtype,
                key,
            } => {
                assert_eq!(theme, "TestTarot");
                assert_eq!(subtype, "MajorArcana");
                assert_eq!(key, "BigArcana00");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_card_fails_before_any_io() {
        let mut card = fool();
        card.meaning.up.clear();
        let drawn = DrawnCard::with_orientation("7", &card, Orientation::Upright);

        // The resource root does not even exist; validation fires first.
        let err = render(Path::new("/nonexistent"), "TestTarot", &drawn).unwrap_err();
        match err {
            DrawError::MalformedCard { id, fields } => {
                assert_eq!(id, "7");
                assert_eq!(fields, "meaning.up");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn orientation_rate_is_fair() {
        let card = fool();
        let mut rng = StdRng::seed_from_u64(11);
        let trials = 20_000;

        let mut reversed = 0u32;
        for _ in 0..trials {
            if DrawnCard::draw("0", &card, &mut rng).orientation == Orientation::Reversed {
                reversed += 1;
            }
        }
        // Expected 10000; wide statistical margin.
        assert!(
            (9500..=10500).contains(&reversed),
            "reversed {reversed} of {trials}"
        );
    }

    #[test]
    fn orientations_are_independent_per_card() {
        let card = fool();
        let mut rng = StdRng::seed_from_u64(23);

        let mut pairs: HashMap<(Orientation, Orientation), u32> = HashMap::new();
        for _ in 0..8_000 {
            let a = DrawnCard::draw("0", &card, &mut rng).orientation;
            let b = DrawnCard::draw("1", &card, &mut rng).orientation;
            *pairs.entry((a, b)).or_default() += 1;
        }
        // All four combinations occur at roughly equal rates.
        assert_eq!(pairs.len(), 4);
        for (pair, n) in &pairs {
            assert!((1700..=2300).contains(n), "{pair:?} occurred {n} times");
        }
    }
}
