use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use arcana_core::theme::builtin_subtypes;
use arcana_draw::ResourceCatalog;

pub fn run(resources: &Path) -> Result<(), String> {
    let catalog = ResourceCatalog::new(resources);
    let themes = catalog.themes();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Theme", "Origin", "Subtypes"]);

    for theme in &themes {
        let origin = if builtin_subtypes(theme).is_some() {
            "built-in"
        } else {
            "custom"
        };
        let subtypes = catalog.subtypes(theme);
        let subs = if subtypes.is_empty() {
            "—".to_string()
        } else {
            subtypes
                .iter()
                .map(|sub| sub.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        table.add_row(vec![theme.as_str(), origin, &subs]);
    }

    println!("{table}");
    println!();
    println!("  {} themes", themes.len());

    Ok(())
}
