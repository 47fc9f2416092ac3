use crate::error::{FloragenError, Result};
use crate::genetics::mutator::GeneMutator;
use crate::genetics::vocabulary::GeneVocabulary;
use rand::{Rng, RngCore};
use std::sync::Arc;

/// Strategy for combining two parent gene strings into a child.
pub trait BreedingAlgorithm: Send + Sync {
    /// Produce a child gene string from two parents.
    ///
    /// Parents must be the same length and drawn from the algorithm's
    /// vocabulary. The result always has the parents' length. Stochastic:
    /// callers needing reproducibility must supply a seeded rng.
    fn breed(&self, parent_a: &str, parent_b: &str, rng: &mut dyn RngCore) -> Result<String>;
}

/// Per-position 50/50 parent selection with rate-gated mutation
///
/// For each gene index the child symbol is taken from either parent with
/// equal probability, then replaced via the mutator with probability
/// `mutation_rate`.
pub struct ContinuousBreedingAlgorithm {
    mutation_rate: f64,
    vocabulary: Arc<GeneVocabulary>,
    mutator: Arc<dyn GeneMutator>,
}

impl ContinuousBreedingAlgorithm {
    pub fn new(
        mutation_rate: f64,
        vocabulary: Arc<GeneVocabulary>,
        mutator: Arc<dyn GeneMutator>,
    ) -> Result<Self> {
        if !(0.0..=1.0).contains(&mutation_rate) {
            return Err(FloragenError::Configuration(
                "Mutation rate must be between 0 and 1".to_string(),
            ));
        }
        Ok(Self {
            mutation_rate,
            vocabulary,
            mutator,
        })
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }
}

impl BreedingAlgorithm for ContinuousBreedingAlgorithm {
    fn breed(&self, parent_a: &str, parent_b: &str, rng: &mut dyn RngCore) -> Result<String> {
        let genes_a: Vec<char> = parent_a.chars().collect();
        let genes_b: Vec<char> = parent_b.chars().collect();

        if genes_a.len() != genes_b.len() {
            return Err(FloragenError::LengthMismatch {
                expected: genes_a.len(),
                actual: genes_b.len(),
            });
        }
        self.vocabulary.validate(parent_a)?;
        self.vocabulary.validate(parent_b)?;

        let mut rng = rng;
        let mut child = String::with_capacity(genes_a.len());
        for i in 0..genes_a.len() {
            let base = if rng.gen_bool(0.5) { genes_a[i] } else { genes_b[i] };
            let gene = if rng.gen::<f64>() < self.mutation_rate {
                self.mutator.mutate(base, &mut *rng)
            } else {
                base
            };
            child.push(gene);
        }
        Ok(child)
    }
}
