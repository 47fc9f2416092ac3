pub mod authority;
pub mod breeding;
pub mod definition;
pub mod genome;
pub mod map;
pub mod mutator;
pub mod registry;
pub mod vocabulary;

pub use authority::GenomeAuthority;
pub use breeding::{BreedingAlgorithm, ContinuousBreedingAlgorithm};
pub use definition::GenomeDefinition;
pub use genome::Genome;
pub use map::{DecodeFn, GenomeMap, PropertyMapper};
pub use mutator::{GeneMutator, VocabularyGeneMutator};
pub use registry::GenomeRegistry;
pub use vocabulary::GeneVocabulary;
