use std::collections::HashSet;

use party_types::CorpusError;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Theme word pool with no-repeat-until-exhausted draws.
///
/// Indices are sampled uniformly and rejected while they are still in the
/// history set. Once every index has been shown the history is cleared and
/// the whole pool becomes eligible again.
pub struct ThemeDeck {
    words: Vec<String>,
    history: HashSet<usize>,
    rng: ChaCha8Rng,
}

impl ThemeDeck {
    /// Build a deck over the merged word pool. An empty pool would make the
    /// draw loop spin forever, so it is rejected here.
    pub fn new(words: Vec<String>) -> Result<Self, CorpusError> {
        Self::with_rng(words, ChaCha8Rng::from_entropy())
    }

    /// Deterministic deck for tests.
    pub fn with_seed(words: Vec<String>, seed: u64) -> Result<Self, CorpusError> {
        Self::with_rng(words, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(words: Vec<String>, rng: ChaCha8Rng) -> Result<Self, CorpusError> {
        if words.is_empty() {
            return Err(CorpusError::EmptyCorpus);
        }
        Ok(Self {
            words,
            history: HashSet::new(),
            rng,
        })
    }

    /// Draw the next theme word.
    pub fn draw(&mut self) -> String {
        let index = loop {
            let candidate = self.rng.gen_range(0..self.words.len());
            if !self.history.contains(&candidate) {
                break candidate;
            }
        };
        self.history.insert(index);
        if self.history.len() == self.words.len() {
            self.history.clear();
        }
        self.words[index].clone()
    }

    pub fn pool_size(&self) -> usize {
        self.words.len()
    }

    /// How many words have been shown since the last history reset.
    pub fn shown_since_reset(&self) -> usize {
        self.history.len()
    }
}
