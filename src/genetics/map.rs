use crate::error::{FloragenError, Result};
use crate::genetics::breeding::BreedingAlgorithm;
use crate::genetics::vocabulary::GeneVocabulary;
use crate::types::{TraitType, TraitValue};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Decode function stored as data in a property mapper.
///
/// Takes the gene symbol at the property's index and produces the typed
/// trait value. Must be total over the map's vocabulary; registration
/// checks this symbol by symbol and rejects partial functions, so decode
/// failures cannot surface at read time for validated genomes.
pub type DecodeFn = Arc<dyn Fn(char) -> anyhow::Result<TraitValue> + Send + Sync>;

/// One registered property: where it reads, what it yields, how it breeds
pub struct PropertyMapper {
    name: String,
    index: usize,
    min_index: usize,
    max_index: usize,
    trait_type: TraitType,
    breeding: Arc<dyn BreedingAlgorithm>,
    decode: DecodeFn,
}

impl PropertyMapper {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Genome position this property reads
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn index_bounds(&self) -> (usize, usize) {
        (self.min_index, self.max_index)
    }

    pub fn trait_type(&self) -> TraitType {
        self.trait_type
    }

    /// Breeding algorithm governing how this position combines and mutates
    pub fn breeding_algorithm(&self) -> &Arc<dyn BreedingAlgorithm> {
        &self.breeding
    }

    fn decode_symbol(&self, symbol: char) -> Result<TraitValue> {
        (self.decode)(symbol).map_err(|e| {
            FloragenError::Decode(format!(
                "property '{}' failed on symbol '{}': {}",
                self.name, symbol, e
            ))
        })
    }
}

/// Ordered collection of property mappers with deterministic index layout
///
/// The map seed is derived from the world/session seed. Index assignment
/// depends only on the seed, the property names, and registration order, so
/// a session restarted with the same seed reassigns identical indices and
/// saved genomes keep decoding consistently. That reproducibility is a
/// correctness invariant, not an optimization.
pub struct GenomeMap {
    seed: u64,
    genome_length: usize,
    vocabulary: Arc<GeneVocabulary>,
    properties: Vec<PropertyMapper>,
    by_name: HashMap<String, usize>,
}

impl GenomeMap {
    pub fn new(seed: u64, genome_length: usize, vocabulary: Arc<GeneVocabulary>) -> Self {
        Self {
            seed,
            genome_length,
            vocabulary,
            properties: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn genome_length(&self) -> usize {
        self.genome_length
    }

    pub fn vocabulary(&self) -> &Arc<GeneVocabulary> {
        &self.vocabulary
    }

    pub fn property_names(&self) -> Vec<String> {
        self.properties.iter().map(|p| p.name.clone()).collect()
    }

    pub fn property(&self, name: &str) -> Option<&PropertyMapper> {
        self.by_name.get(name).map(|&i| &self.properties[i])
    }

    /// Register a property at the lowest free index within bounds
    pub fn add_property(
        &mut self,
        name: &str,
        min_index: usize,
        max_index: usize,
        trait_type: TraitType,
        breeding: Arc<dyn BreedingAlgorithm>,
        decode: DecodeFn,
    ) -> Result<()> {
        self.check_bounds(min_index, max_index)?;
        let index = (min_index..=max_index)
            .find(|i| !self.index_taken(*i))
            .ok_or_else(|| {
                FloragenError::Configuration(format!(
                    "No free gene index in [{}, {}] for property '{}'",
                    min_index, max_index, name
                ))
            })?;
        self.register(name, index, min_index, max_index, trait_type, breeding, decode)
    }

    /// Register a property at a seed-scattered index within bounds
    ///
    /// The index is a stable hash of (map seed, property name) folded into
    /// the bound range, falling forward to the next free slot on collision.
    pub fn add_seeded_property(
        &mut self,
        name: &str,
        min_index: usize,
        max_index: usize,
        trait_type: TraitType,
        breeding: Arc<dyn BreedingAlgorithm>,
        decode: DecodeFn,
    ) -> Result<()> {
        self.check_bounds(min_index, max_index)?;
        let span = max_index - min_index + 1;
        let start = min_index + (self.seeded_hash(name) % span as u64) as usize;

        // Wrap within [min_index, max_index] looking for a free slot.
        let index = (0..span)
            .map(|off| min_index + (start - min_index + off) % span)
            .find(|i| !self.index_taken(*i))
            .ok_or_else(|| {
                FloragenError::Configuration(format!(
                    "No free gene index in [{}, {}] for property '{}'",
                    min_index, max_index, name
                ))
            })?;
        self.register(name, index, min_index, max_index, trait_type, breeding, decode)
    }

    /// Register a property at an explicit index
    pub fn add_property_at(
        &mut self,
        name: &str,
        index: usize,
        trait_type: TraitType,
        breeding: Arc<dyn BreedingAlgorithm>,
        decode: DecodeFn,
    ) -> Result<()> {
        self.check_bounds(index, index)?;
        if self.index_taken(index) {
            return Err(FloragenError::Configuration(format!(
                "Gene index {} is already assigned",
                index
            )));
        }
        self.register(name, index, index, index, trait_type, breeding, decode)
    }

    /// Decode one property from a gene string
    pub fn get_property(&self, genes: &str, name: &str) -> Result<TraitValue> {
        let mapper = self
            .property(name)
            .ok_or_else(|| FloragenError::PropertyNotFound(name.to_string()))?;

        let symbols: Vec<char> = genes.chars().collect();
        if mapper.index >= symbols.len() {
            return Err(FloragenError::LengthMismatch {
                expected: self.genome_length,
                actual: symbols.len(),
            });
        }
        let symbol = symbols[mapper.index];
        if !self.vocabulary.contains(symbol) {
            return Err(FloragenError::InvalidSymbol {
                symbol,
                position: mapper.index,
            });
        }
        mapper.decode_symbol(symbol)
    }

    fn check_bounds(&self, min_index: usize, max_index: usize) -> Result<()> {
        if min_index > max_index {
            return Err(FloragenError::Configuration(format!(
                "Invalid index bounds [{}, {}]",
                min_index, max_index
            )));
        }
        if max_index >= self.genome_length {
            return Err(FloragenError::Configuration(format!(
                "Index bound {} exceeds genome length {}",
                max_index, self.genome_length
            )));
        }
        Ok(())
    }

    fn index_taken(&self, index: usize) -> bool {
        self.properties.iter().any(|p| p.index == index)
    }

    fn seeded_hash(&self, name: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        name.hash(&mut hasher);
        hasher.finish()
    }

    fn register(
        &mut self,
        name: &str,
        index: usize,
        min_index: usize,
        max_index: usize,
        trait_type: TraitType,
        breeding: Arc<dyn BreedingAlgorithm>,
        decode: DecodeFn,
    ) -> Result<()> {
        if self.by_name.contains_key(name) {
            return Err(FloragenError::DuplicateProperty(name.to_string()));
        }
        self.check_decode_coverage(name, trait_type, &decode)?;

        self.properties.push(PropertyMapper {
            name: name.to_string(),
            index,
            min_index,
            max_index,
            trait_type,
            breeding,
            decode,
        });
        self.by_name
            .insert(name.to_string(), self.properties.len() - 1);
        Ok(())
    }

    /// Run the decode function over every vocabulary symbol so partial
    /// functions are rejected here instead of failing at read time
    fn check_decode_coverage(
        &self,
        name: &str,
        trait_type: TraitType,
        decode: &DecodeFn,
    ) -> Result<()> {
        for &symbol in self.vocabulary.symbols() {
            let value = decode(symbol).map_err(|e| {
                FloragenError::Decode(format!(
                    "decode function for '{}' does not cover vocabulary symbol '{}': {}",
                    name, symbol, e
                ))
            })?;
            if !trait_type.matches(&value) {
                return Err(FloragenError::Decode(format!(
                    "decode function for '{}' yields {:?} for symbol '{}', expected {}",
                    name, value, symbol, trait_type
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genetics::breeding::ContinuousBreedingAlgorithm;
    use crate::genetics::mutator::VocabularyGeneMutator;

    fn test_parts() -> (Arc<GeneVocabulary>, Arc<dyn BreedingAlgorithm>) {
        let vocab = Arc::new(GeneVocabulary::new("ABCDEFGHIJK").unwrap());
        let mutator = Arc::new(VocabularyGeneMutator::new(Arc::clone(&vocab)));
        let breeding: Arc<dyn BreedingAlgorithm> =
            Arc::new(ContinuousBreedingAlgorithm::new(0.3, Arc::clone(&vocab), mutator).unwrap());
        (vocab, breeding)
    }

    fn filling_decode() -> DecodeFn {
        Arc::new(|symbol| Ok(TraitValue::Integer(symbol as i64 - 'A' as i64 + 5)))
    }

    #[test]
    fn test_lowest_free_index_in_registration_order() {
        let (vocab, breeding) = test_parts();
        let mut map = GenomeMap::new(1, 3, vocab);

        map.add_property("a", 0, 2, TraitType::Integer, Arc::clone(&breeding), filling_decode())
            .unwrap();
        map.add_property("b", 0, 2, TraitType::Integer, Arc::clone(&breeding), filling_decode())
            .unwrap();
        assert_eq!(map.property("a").unwrap().index(), 0);
        assert_eq!(map.property("b").unwrap().index(), 1);
    }

    #[test]
    fn test_seeded_assignment_is_reproducible() {
        let (vocab, breeding) = test_parts();
        let mut first = GenomeMap::new(99, 3, Arc::clone(&vocab));
        let mut second = GenomeMap::new(99, 3, vocab);

        for map in [&mut first, &mut second] {
            map.add_seeded_property(
                "filling",
                0,
                2,
                TraitType::Integer,
                Arc::clone(&breeding),
                filling_decode(),
            )
            .unwrap();
        }
        assert_eq!(
            first.property("filling").unwrap().index(),
            second.property("filling").unwrap().index()
        );
    }

    #[test]
    fn test_bounds_must_fit_genome() {
        let (vocab, breeding) = test_parts();
        let mut map = GenomeMap::new(1, 3, vocab);
        let result =
            map.add_property("a", 0, 3, TraitType::Integer, breeding, filling_decode());
        assert!(matches!(result, Err(FloragenError::Configuration(_))));
    }

    #[test]
    fn test_range_exhaustion_is_an_error() {
        let (vocab, breeding) = test_parts();
        let mut map = GenomeMap::new(1, 3, vocab);

        map.add_property("a", 0, 0, TraitType::Integer, Arc::clone(&breeding), filling_decode())
            .unwrap();
        let result =
            map.add_property("b", 0, 0, TraitType::Integer, breeding, filling_decode());
        assert!(matches!(result, Err(FloragenError::Configuration(_))));
    }
}
