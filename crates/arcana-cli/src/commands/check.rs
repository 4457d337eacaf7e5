use std::path::Path;

use colored::Colorize;

pub fn run(deck: &Path) -> Result<(), String> {
    let deck = super::load_deck(deck)?;

    let mut problems = 0usize;

    for (id, card) in &deck.cards {
        if let Err(fields) = card.validate() {
            problems += 1;
            println!("  card {id}: missing {}", fields.join(", "));
        }
    }

    for (name, formation) in &deck.formations {
        if formation.representations.is_empty() {
            problems += 1;
            println!("  formation {name}: no label sets configured");
            continue;
        }
        for index in formation.mismatched_representations() {
            problems += 1;
            println!(
                "  formation {name}: label set {index} has {} labels, expected {}",
                formation.representations[index].len(),
                formation.cards_num
            );
        }
    }

    if problems == 0 {
        println!(
            "  {} {} cards, {} formations",
            "All checks passed:".bold(),
            deck.cards.len(),
            deck.formations.len()
        );
        Ok(())
    } else {
        Err(format!(
            "{problems} problem{} found",
            if problems == 1 { "" } else { "s" }
        ))
    }
}
