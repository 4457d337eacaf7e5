use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(deck: &Path) -> Result<(), String> {
    let deck = super::load_deck(deck)?;

    if deck.formations.is_empty() {
        println!("  No formations configured.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Formation", "Cards", "Cut", "Labels"]);

    for (name, formation) in &deck.formations {
        let labels = formation
            .representations
            .iter()
            .map(|set| set.join("·"))
            .collect::<Vec<_>>()
            .join(" / ");
        table.add_row(vec![
            name.as_str(),
            &formation.cards_num.to_string(),
            if formation.is_cut { "yes" } else { "no" },
            &labels,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} formations", deck.formations.len());

    Ok(())
}
