use crate::config::genetics::GeneticsConfig;
use crate::config::traits::ConfigSection;
use crate::error::{FloragenError, Result};
use crate::genetics::breeding::{BreedingAlgorithm, ContinuousBreedingAlgorithm};
use crate::genetics::definition::GenomeDefinition;
use crate::genetics::genome::Genome;
use crate::genetics::map::GenomeMap;
use crate::genetics::mutator::VocabularyGeneMutator;
use crate::genetics::registry::GenomeRegistry;
use crate::genetics::vocabulary::GeneVocabulary;
use crate::types::{TraitType, TraitValue};
use rand::Rng;
use std::sync::Arc;

/// Orchestration facade driving genome creation and inheritance
///
/// The host simulation calls in when domain events fire: produce created,
/// seed planted, genome transferred between bush generations. Everything
/// here is thin glue over the registry and the definitions it holds; the
/// engine core below this layer does no logging and owns no randomness.
pub struct GenomeAuthority {
    registry: Arc<GenomeRegistry>,
    config: GeneticsConfig,
    world_seed: u64,
}

impl GenomeAuthority {
    pub fn new(
        config: GeneticsConfig,
        world_seed: u64,
        registry: Arc<GenomeRegistry>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            registry,
            config,
            world_seed,
        })
    }

    pub fn registry(&self) -> &Arc<GenomeRegistry> {
        &self.registry
    }

    /// Idempotent lookup-or-synthesis of the definition for a kind.
    ///
    /// The first time a kind is observed, a default definition is built
    /// from the configured vocabulary and mutation rate, with the standard
    /// `filling` property at a seed-assigned index. Concurrent first calls
    /// for the same kind all receive the same definition.
    pub fn register_or_create_definition(&self, kind: &str) -> Result<Arc<GenomeDefinition>> {
        self.registry.register_or_create_with(kind, || {
            log::info!("Defining new genome map for {}", kind);
            self.default_definition()
        })
    }

    /// Fresh random genome for a kind, registering the kind if needed
    pub fn random_genome<R: Rng>(&self, kind: &str, rng: &mut R) -> Result<Genome> {
        let definition = self.register_or_create_definition(kind)?;
        Ok(Genome::new(kind, definition.random_genes(rng)))
    }

    /// Produce-created event: inherit the producer's genome verbatim, or
    /// create a fresh random one when the producer carries none
    pub fn produce_created<R: Rng>(
        &self,
        kind: &str,
        producer: Option<&Genome>,
        rng: &mut R,
    ) -> Result<Genome> {
        if let Some(parent) = producer {
            log::debug!("Produce of kind {} inherits its producer's genome", parent.kind);
            return Ok(parent.clone());
        }
        self.random_genome(kind, rng)
    }

    /// Seed-planted event: the plant takes the seed's genome by value
    pub fn before_planted(&self, seed_genome: &Genome) -> Genome {
        seed_genome.clone()
    }

    /// Transfer event between host-side representations (bush regrowth,
    /// harvest container). Same copy semantics as planting, distinct event
    /// at the host boundary.
    pub fn transfer_genome(&self, source: &Genome) -> Genome {
        source.clone()
    }

    /// Breed two parent genomes of the same kind into an offspring genome
    pub fn breed<R: Rng>(&self, parent_a: &Genome, parent_b: &Genome, rng: &mut R) -> Result<Genome> {
        if parent_a.kind != parent_b.kind {
            return Err(FloragenError::KindMismatch {
                left: parent_a.kind.clone(),
                right: parent_b.kind.clone(),
            });
        }
        let definition = self.register_or_create_definition(&parent_a.kind)?;
        let genes = definition.breed(&parent_a.genes, &parent_b.genes, rng)?;
        Ok(Genome::new(parent_a.kind.clone(), genes))
    }

    /// Decode one named trait value from a genome
    pub fn decode_property(&self, genome: &Genome, name: &str) -> Result<TraitValue> {
        let definition = self.register_or_create_definition(&genome.kind)?;
        definition.decode_property(&genome.genes, name)
    }

    fn default_definition(&self) -> Result<Arc<GenomeDefinition>> {
        let vocabulary = Arc::new(GeneVocabulary::new(&self.config.vocabulary)?);
        let mutator = Arc::new(VocabularyGeneMutator::new(Arc::clone(&vocabulary)));
        let breeding: Arc<dyn BreedingAlgorithm> = Arc::new(ContinuousBreedingAlgorithm::new(
            self.config.mutation_rate,
            Arc::clone(&vocabulary),
            mutator,
        )?);

        let mut map = GenomeMap::new(
            self.world_seed,
            self.config.genome_length,
            Arc::clone(&vocabulary),
        );
        map.add_seeded_property(
            "filling",
            0,
            self.config.genome_length - 1,
            TraitType::Integer,
            Arc::clone(&breeding),
            Arc::new(|symbol: char| Ok(TraitValue::Integer(symbol as i64 - 'A' as i64 + 5))),
        )?;

        Ok(Arc::new(GenomeDefinition::new(breeding, map)))
    }
}
