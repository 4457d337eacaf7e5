//! Divination session entry points.
//!
//! `DivinationSession` composes the catalog, sampler, formation selector,
//! and renderer into the two reading flows: a single random card, or a
//! full formation spread. The deck is loaded once and shared; theme and
//! subtype resolution hits the live resource directory on every request.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use arcana_core::Deck;

use crate::catalog::ResourceCatalog;
use crate::config::DrawConfig;
use crate::error::DrawResult;
use crate::render::{DrawnCard, render};
use crate::sampler::sample_cards;
use crate::sink::ResponseSink;
use crate::spread::{CUT_LABEL, pick_formation, pick_labels};

/// Reply opener for a single-card reading.
const SINGLE_REPLY_PREFIX: &str = "回应是";

/// An interactive divination session over one deck.
pub struct DivinationSession {
    deck: Deck,
    catalog: ResourceCatalog,
    chain_reply: bool,
    rng: StdRng,
}

impl DivinationSession {
    /// Create a session from a loaded deck and configuration.
    pub fn new(deck: Deck, config: DrawConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            deck,
            catalog: ResourceCatalog::new(config.resource_root),
            chain_reply: config.chain_reply,
            rng,
        }
    }

    /// The deck this session draws from.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The catalog this session resolves themes against.
    pub fn catalog(&self) -> &ResourceCatalog {
        &self.catalog
    }

    /// Draw and deliver a single-card reading.
    ///
    /// Picks a theme uniformly at random, draws exactly one card, and
    /// emits one unit whose text opens with the reply prefix.
    pub fn divine_once(&mut self, sink: &mut dyn ResponseSink) -> DrawResult<()> {
        let theme = self.pick_theme();
        let subtypes = self.catalog.subtypes(&theme);

        let sampled = sample_cards(&self.deck, &theme, &subtypes, 1, &mut self.rng)?;
        let (id, card) = sampled[0];
        let drawn = DrawnCard::draw(id, card, &mut self.rng);

        let mut unit = render(self.catalog.root(), &theme, &drawn)?;
        unit.text = format!("{SINGLE_REPLY_PREFIX}{}", unit.text);
        sink.emit(unit);
        Ok(())
    }

    /// Draw and deliver a full spread reading.
    ///
    /// Picks a theme and a formation, validates and picks the positional
    /// labels before any card is drawn, announces the formation before
    /// rendering begins, then delivers the labeled units in draw order —
    /// per card, or as one batched payload when chained replies are
    /// configured. The final position of a cut formation is relabeled.
    pub fn divine_spread(&mut self, sink: &mut dyn ResponseSink) -> DrawResult<()> {
        let theme = self.pick_theme();
        let subtypes = self.catalog.subtypes(&theme);

        let (name, formation) = pick_formation(&self.deck.formations, &mut self.rng)?;
        let mut labels = pick_labels(name, formation, &mut self.rng)?;
        if formation.is_cut
            && let Some(last) = labels.last_mut()
        {
            *last = CUT_LABEL.to_string();
        }

        sink.announce(&format!("本次使用「{name}」"));

        let sampled = sample_cards(
            &self.deck,
            &theme,
            &subtypes,
            formation.cards_num,
            &mut self.rng,
        )?;

        let mut batch = Vec::with_capacity(sampled.len());
        for ((id, card), label) in sampled.into_iter().zip(labels) {
            let drawn = DrawnCard::draw(id, card, &mut self.rng);
            let mut unit = render(self.catalog.root(), &theme, &drawn)?;
            unit.label = Some(label);
            if self.chain_reply {
                batch.push(unit);
            } else {
                sink.emit(unit);
            }
        }
        if self.chain_reply {
            sink.emit_batch(batch);
        }
        Ok(())
    }

    /// Pick a theme uniformly at random from the catalog.
    fn pick_theme(&mut self) -> String {
        let mut themes = self.catalog.themes();
        // Built-ins are always offered, so the list is never empty.
        let idx = self.rng.random_range(0..themes.len());
        themes.swap_remove(idx)
    }
}
