pub mod config;
pub mod error;
pub mod genetics;
pub mod types;

pub use error::{FloragenError, Result};
pub use genetics::{Genome, GenomeAuthority, GenomeDefinition, GenomeRegistry};
pub use types::{TraitType, TraitValue};
