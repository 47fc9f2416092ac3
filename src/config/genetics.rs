use super::traits::ConfigSection;
use crate::error::FloragenError;
use crate::genetics::vocabulary::GeneVocabulary;
use serde::{Deserialize, Serialize};

/// Defaults used when a genome definition is synthesized for an
/// organism kind that has never been seen before.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneticsConfig {
    /// Ordered gene alphabet for default definitions
    pub vocabulary: String,
    /// Number of gene positions per genome
    pub genome_length: usize,
    /// Per-position mutation probability applied while breeding
    pub mutation_rate: f64,
}

impl Default for GeneticsConfig {
    fn default() -> Self {
        Self {
            vocabulary: "ABCDEFGHIJK".to_string(),
            genome_length: 3,
            mutation_rate: 0.3,
        }
    }
}

impl ConfigSection for GeneticsConfig {
    fn section_name() -> &'static str {
        "genetics"
    }

    fn validate(&self) -> Result<(), FloragenError> {
        // Delegates the alphabet rules (non-empty, distinct symbols)
        GeneVocabulary::new(&self.vocabulary)?;

        if self.genome_length == 0 {
            return Err(FloragenError::Configuration(
                "Genome length must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(FloragenError::Configuration(
                "Mutation rate must be between 0 and 1".to_string(),
            ));
        }
        Ok(())
    }
}
