pub mod check;
pub mod draw;
pub mod formations;
pub mod spread;
pub mod themes;

use std::path::{Path, PathBuf};

use colored::Colorize;

use arcana_core::Deck;
use arcana_draw::{PresentationUnit, ResponseSink};

/// Load the deck table, mapping failures to a printable message.
fn load_deck(path: &Path) -> Result<Deck, String> {
    Deck::load(path).map_err(|e| format!("cannot load deck {}: {e}", path.display()))
}

/// Sink that prints reading text to stdout and optionally saves the image
/// assets to a directory.
pub struct TerminalSink {
    out_dir: Option<PathBuf>,
    failures: Vec<String>,
}

impl TerminalSink {
    fn new(out_dir: Option<&Path>) -> Self {
        Self {
            out_dir: out_dir.map(Path::to_path_buf),
            failures: Vec::new(),
        }
    }

    fn deliver(&mut self, unit: &PresentationUnit) {
        match &unit.label {
            Some(label) => println!("「{label}」{}", unit.text),
            None => println!("{}", unit.text),
        }
        if let Some(dir) = &self.out_dir {
            let target = dir.join(&unit.asset_name);
            if let Err(e) = std::fs::write(&target, &unit.image) {
                self.failures
                    .push(format!("cannot write {}: {e}", target.display()));
            }
        }
    }
}

impl ResponseSink for TerminalSink {
    fn announce(&mut self, text: &str) {
        println!("{text}");
    }

    fn emit(&mut self, unit: PresentationUnit) {
        self.deliver(&unit);
    }

    fn emit_batch(&mut self, units: Vec<PresentationUnit>) {
        for unit in &units {
            self.deliver(unit);
        }
    }
}

/// Surface image-save failures and confirm where images went.
fn finish_saves(sink: &TerminalSink, out_dir: Option<&Path>) -> Result<(), String> {
    if !sink.failures.is_empty() {
        return Err(sink.failures.join("; "));
    }
    if let Some(dir) = out_dir {
        println!();
        println!("  {} images to {}", "Saved".bold(), dir.display());
    }
    Ok(())
}
