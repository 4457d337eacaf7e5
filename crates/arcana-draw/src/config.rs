//! Configuration for a divination session.

use std::path::PathBuf;

/// Configuration for a [`DivinationSession`](crate::session::DivinationSession).
#[derive(Debug, Clone)]
pub struct DrawConfig {
    /// RNG seed for reproducible draws; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Deliver spreads as one batched payload instead of per-card messages.
    pub chain_reply: bool,
    /// Root directory holding per-theme image assets.
    pub resource_root: PathBuf,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            seed: None,
            chain_reply: false,
            resource_root: PathBuf::from("resource"),
        }
    }
}

impl DrawConfig {
    /// Set a fixed RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable batched spread delivery.
    pub fn with_chain_reply(mut self, chain: bool) -> Self {
        self.chain_reply = chain;
        self
    }

    /// Set the resource root directory.
    pub fn with_resource_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.resource_root = root.into();
        self
    }
}
