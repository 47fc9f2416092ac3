use serde::{Deserialize, Serialize};

/// Genome carried by one organism
///
/// A genome is a short string of gene symbols plus the organism-kind
/// identifier naming the `GenomeDefinition` that decodes it. It is a plain
/// value: inherited by copy, no parent back-references, no identity of its
/// own. The host attaches it to whatever organism record it keeps (seed
/// item, planted bush, produce) and persists it as an opaque tagged string.
///
/// # Why a string of symbols instead of trait values?
///
/// Breeding works best on a simple linear structure:
/// - Combining parents is per-position symbol selection
/// - Mutation is per-position symbol replacement
/// - Any string over the vocabulary decodes to valid trait values
///
/// Trait values are derived on demand through the kind's genome map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genome {
    /// Organism-kind identifier, the registry key for the decoding definition
    pub kind: String,
    /// Gene symbols, one char per genome position
    pub genes: String,
}

impl Genome {
    pub fn new(kind: impl Into<String>, genes: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            genes: genes.into(),
        }
    }

    /// Number of gene positions
    pub fn len(&self) -> usize {
        self.genes.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Symbol at one genome position, if covered
    pub fn gene_at(&self, index: usize) -> Option<char> {
        self.genes.chars().nth(index)
    }
}
