use std::path::Path;

use arcana_draw::{DivinationSession, DrawConfig};

use super::TerminalSink;

pub fn run(
    deck: &Path,
    resources: &Path,
    seed: Option<u64>,
    out_dir: Option<&Path>,
    chain: bool,
) -> Result<(), String> {
    let deck = super::load_deck(deck)?;

    let mut config = DrawConfig::default()
        .with_resource_root(resources)
        .with_chain_reply(chain);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let mut session = DivinationSession::new(deck, config);
    let mut sink = TerminalSink::new(out_dir);
    session.divine_spread(&mut sink).map_err(|e| e.to_string())?;

    super::finish_saves(&sink, out_dir)
}
