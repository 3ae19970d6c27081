//! Tunables of one selection run.

use pairsel_core::config::SelectionConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionParams {
    /// Relevance weight in the MMR objective.
    pub lambda: f64,
    /// Fraction of the target left to uniform random draws.
    pub random_fraction: f64,
    /// Worker pool size, at least 1.
    pub threads: usize,
    /// Fixed RNG seed, or `None` for OS entropy.
    pub seed: Option<u64>,
}

impl SelectionParams {
    pub fn from_config(config: &SelectionConfig) -> Self {
        Self {
            lambda: config.effective_lambda(),
            random_fraction: config.effective_random_fraction(),
            threads: config.effective_threads(),
            seed: config.seed,
        }
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Items chosen by MMR before random fill takes over:
    /// `⌈target · (1 − random_fraction)⌉`, capped at `target`.
    pub fn mmr_target(&self, target: usize) -> usize {
        // Counted from the random share: `1.0 - fraction` is not exact in f64.
        let random = (target as f64 * self.random_fraction).floor().max(0.0) as usize;
        target.saturating_sub(random)
    }
}

impl Default for SelectionParams {
    fn default() -> Self {
        Self::from_config(&SelectionConfig::default())
    }
}
