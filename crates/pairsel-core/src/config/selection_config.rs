//! Selection engine configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_LAMBDA, DEFAULT_RANDOM_FRACTION, DEFAULT_SIMILARITY_THRESHOLD, DEFAULT_THREADS,
    DEFAULT_TOKEN_WEIGHT,
};

/// Configuration for the MMR selection run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SelectionConfig {
    /// Relevance weight in the MMR objective. Default: 0.6.
    pub lambda: Option<f64>,
    /// Weight of base similarity vs. token dissimilarity. Default: 0.75.
    pub token_weight: Option<f64>,
    /// Fraction of the target filled randomly. Default: 0.0.
    pub random_fraction: Option<f64>,
    /// Records at or below this base similarity are skipped. Default: 0.01.
    pub similarity_threshold: Option<f64>,
    /// Worker threads, 0 = available parallelism. Default: 0.
    pub threads: Option<usize>,
    /// RNG seed; unset draws from OS entropy.
    pub seed: Option<u64>,
}

impl SelectionConfig {
    pub fn effective_lambda(&self) -> f64 {
        self.lambda.unwrap_or(DEFAULT_LAMBDA)
    }

    pub fn effective_token_weight(&self) -> f64 {
        self.token_weight.unwrap_or(DEFAULT_TOKEN_WEIGHT)
    }

    pub fn effective_random_fraction(&self) -> f64 {
        self.random_fraction.unwrap_or(DEFAULT_RANDOM_FRACTION)
    }

    pub fn effective_similarity_threshold(&self) -> f64 {
        self.similarity_threshold
            .unwrap_or(DEFAULT_SIMILARITY_THRESHOLD)
    }

    /// Resolved worker count, never zero.
    pub fn effective_threads(&self) -> usize {
        match self.threads.unwrap_or(DEFAULT_THREADS) {
            0 => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            n => n,
        }
    }
}
