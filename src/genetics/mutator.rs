use crate::genetics::vocabulary::GeneVocabulary;
use rand::{Rng, RngCore};
use std::sync::Arc;

/// Strategy for drifting a single gene symbol.
///
/// Kept separate from breeding so breeding strategies can be swapped
/// without changing how individual genes drift. Implementations must be
/// pure with respect to the supplied random source.
pub trait GeneMutator: Send + Sync {
    /// Return a replacement symbol. May return the input unchanged;
    /// mutation does not guarantee change.
    fn mutate(&self, gene: char, rng: &mut dyn RngCore) -> char;
}

/// Mutator that resamples uniformly from a vocabulary
pub struct VocabularyGeneMutator {
    vocabulary: Arc<GeneVocabulary>,
}

impl VocabularyGeneMutator {
    pub fn new(vocabulary: Arc<GeneVocabulary>) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &Arc<GeneVocabulary> {
        &self.vocabulary
    }
}

impl GeneMutator for VocabularyGeneMutator {
    fn mutate(&self, _gene: char, rng: &mut dyn RngCore) -> char {
        let mut rng = rng;
        self.vocabulary.symbols()[rng.gen_range(0..self.vocabulary.len())]
    }
}
