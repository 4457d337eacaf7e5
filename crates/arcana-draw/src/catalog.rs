//! Theme and subtype discovery from the resource directory.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use arcana_core::Subtype;
use arcana_core::theme::{builtin_subtypes, builtin_theme_names};

/// Read-only view over the resource root.
///
/// Layout: one directory per theme under the root, one directory per
/// subtype inside each theme, image files named `<image_key>.<ext>` inside
/// each subtype directory. Discovery is tolerant: a missing or unreadable
/// root still offers the built-in themes, and unrecognized subtype
/// directories are ignored. Results are never cached — themes depend on
/// live directory state and are resolved fresh per request.
#[derive(Debug, Clone)]
pub struct ResourceCatalog {
    root: PathBuf,
}

impl ResourceCatalog {
    /// Create a catalog over the given resource root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The resource root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All available theme names, sorted: the built-ins plus every
    /// directory directly under the root, collapsed by name.
    pub fn themes(&self) -> Vec<String> {
        let mut names: BTreeSet<String> = builtin_theme_names().map(str::to_string).collect();
        if let Ok(entries) = std::fs::read_dir(&self.root) {
            for entry in entries.filter_map(Result::ok) {
                if entry.path().is_dir()
                    && let Some(name) = entry.file_name().to_str()
                {
                    names.insert(name.to_string());
                }
            }
        }
        names.into_iter().collect()
    }

    /// The subtypes a theme exposes, in universe order.
    ///
    /// Built-in themes return their fixed list. Custom themes expose the
    /// subdirectories of `root/theme` whose names are known subtypes.
    /// A missing or unreadable theme directory yields an empty vec, not an
    /// error — callers treat "no subtypes" as its own failure downstream.
    pub fn subtypes(&self, theme: &str) -> Vec<Subtype> {
        if let Some(fixed) = builtin_subtypes(theme) {
            return fixed.to_vec();
        }
        let dir = self.root.join(theme);
        Subtype::all()
            .iter()
            .copied()
            .filter(|sub| dir.join(sub.as_str()).is_dir())
            .collect()
    }
}
