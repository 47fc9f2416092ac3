use crate::error::Result;
use crate::genetics::breeding::BreedingAlgorithm;
use crate::genetics::map::GenomeMap;
use crate::types::TraitValue;
use rand::{Rng, RngCore};
use std::sync::Arc;

/// Species template: one breeding algorithm paired with one genome map
///
/// Immutable after construction and shared as `Arc<GenomeDefinition>`
/// through the registry, so it can be read from any simulation thread
/// without locking.
pub struct GenomeDefinition {
    breeding: Arc<dyn BreedingAlgorithm>,
    map: GenomeMap,
}

impl GenomeDefinition {
    pub fn new(breeding: Arc<dyn BreedingAlgorithm>, map: GenomeMap) -> Self {
        Self { breeding, map }
    }

    pub fn genome_map(&self) -> &GenomeMap {
        &self.map
    }

    pub fn breeding_algorithm(&self) -> &Arc<dyn BreedingAlgorithm> {
        &self.breeding
    }

    /// Check a gene string against the map's vocabulary and length
    pub fn validate(&self, genes: &str) -> Result<()> {
        self.map
            .vocabulary()
            .validate_length(genes, self.map.genome_length())
    }

    /// Combine two parent gene strings via the definition's algorithm
    pub fn breed(&self, genes_a: &str, genes_b: &str, rng: &mut dyn RngCore) -> Result<String> {
        self.breeding.breed(genes_a, genes_b, rng)
    }

    /// Decode one named property from a gene string
    pub fn decode_property(&self, genes: &str, name: &str) -> Result<TraitValue> {
        self.map.get_property(genes, name)
    }

    /// Draw a fresh random gene string of the map's length
    pub fn random_genes<R: Rng>(&self, rng: &mut R) -> String {
        self.map
            .vocabulary()
            .random_genes(self.map.genome_length(), rng)
    }
}
