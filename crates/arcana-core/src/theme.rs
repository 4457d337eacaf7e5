//! Built-in theme registry.
//!
//! Built-in themes expose a fixed subtype set regardless of what exists on
//! disk; custom themes are discovered from the resource directory by the
//! draw engine's catalog and expose exactly the subtypes present there.

use crate::subtype::Subtype;

/// Built-in theme names with their fixed subtype sets.
const BUILTIN_THEMES: &[(&str, &[Subtype])] = &[
    (
        "BilibiliTarot",
        &[
            Subtype::MajorArcana,
            Subtype::Cups,
            Subtype::Pentacles,
            Subtype::Sowrds,
            Subtype::Wands,
        ],
    ),
    ("TouhouTarot", &[Subtype::MajorArcana]),
];

/// Names of all built-in themes, in registry order.
pub fn builtin_theme_names() -> impl Iterator<Item = &'static str> {
    BUILTIN_THEMES.iter().map(|(name, _)| *name)
}

/// The fixed subtype list of a built-in theme, or `None` for custom themes.
pub fn builtin_subtypes(name: &str) -> Option<&'static [Subtype]> {
    BUILTIN_THEMES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, subs)| *subs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bilibili_exposes_all_subtypes() {
        let subs = builtin_subtypes("BilibiliTarot").unwrap();
        assert_eq!(subs, Subtype::all());
    }

    #[test]
    fn touhou_exposes_only_major_arcana() {
        let subs = builtin_subtypes("TouhouTarot").unwrap();
        assert_eq!(subs, &[Subtype::MajorArcana]);
    }

    #[test]
    fn custom_names_are_not_builtin() {
        assert!(builtin_subtypes("MyCustomTarot").is_none());
        assert!(builtin_subtypes("").is_none());
    }

    #[test]
    fn names_iterate_in_registry_order() {
        let names: Vec<_> = builtin_theme_names().collect();
        assert_eq!(names, vec!["BilibiliTarot", "TouhouTarot"]);
    }
}
