use crate::error::{FloragenError, Result};
use rand::Rng;

/// Alphabet of valid gene symbols
///
/// Every genome handled by the engine is a string over one of these
/// alphabets. The symbol order is significant: decode functions may rely on
/// a symbol's position (e.g. `'C' - 'A'` arithmetic), so the order is fixed
/// at construction and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneVocabulary {
    symbols: Vec<char>,
}

impl GeneVocabulary {
    /// Build a vocabulary from an ordered symbol string.
    ///
    /// Fails if the string is empty or contains a repeated symbol.
    pub fn new(symbols: &str) -> Result<Self> {
        if symbols.is_empty() {
            return Err(FloragenError::Configuration(
                "Gene vocabulary must not be empty".to_string(),
            ));
        }
        let chars: Vec<char> = symbols.chars().collect();
        for (i, c) in chars.iter().enumerate() {
            if chars[..i].contains(c) {
                return Err(FloragenError::Configuration(format!(
                    "Gene vocabulary contains duplicate symbol '{}'",
                    c
                )));
            }
        }
        Ok(Self { symbols: chars })
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Position of a symbol within the vocabulary
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.symbols.iter().position(|&c| c == symbol)
    }

    pub fn symbol_at(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Check every symbol of a gene string against the vocabulary
    pub fn validate(&self, genes: &str) -> Result<()> {
        for (position, symbol) in genes.chars().enumerate() {
            if !self.contains(symbol) {
                return Err(FloragenError::InvalidSymbol { symbol, position });
            }
        }
        Ok(())
    }

    /// Validate symbols and exact length in one pass
    pub fn validate_length(&self, genes: &str, expected: usize) -> Result<()> {
        let actual = genes.chars().count();
        if actual != expected {
            return Err(FloragenError::LengthMismatch { expected, actual });
        }
        self.validate(genes)
    }

    /// Draw one symbol uniformly from the full vocabulary
    pub fn random_symbol<R: Rng>(&self, rng: &mut R) -> char {
        self.symbols[rng.gen_range(0..self.symbols.len())]
    }

    /// Draw `length` independent uniform symbols from the full vocabulary
    pub fn random_genes<R: Rng>(&self, length: usize, rng: &mut R) -> String {
        (0..length).map(|_| self.random_symbol(rng)).collect()
    }
}
