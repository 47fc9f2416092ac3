use floragen::genetics::{
    BreedingAlgorithm, ContinuousBreedingAlgorithm, GeneVocabulary, VocabularyGeneMutator,
};
use floragen::FloragenError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

const VOCABULARY: &str = "ABCDEFGHIJK";

fn create_algorithm(mutation_rate: f64) -> ContinuousBreedingAlgorithm {
    let vocab = Arc::new(GeneVocabulary::new(VOCABULARY).unwrap());
    let mutator = Arc::new(VocabularyGeneMutator::new(Arc::clone(&vocab)));
    ContinuousBreedingAlgorithm::new(mutation_rate, vocab, mutator).unwrap()
}

#[test]
fn test_child_length_and_vocabulary() {
    let algo = create_algorithm(0.3);
    let vocab = GeneVocabulary::new(VOCABULARY).unwrap();
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..200 {
        let child = algo.breed("ABC", "KJI", &mut rng).unwrap();
        assert_eq!(child.chars().count(), 3);
        assert!(vocab.validate(&child).is_ok());
    }
}

#[test]
fn test_zero_rate_never_introduces_third_symbol() {
    let algo = create_algorithm(0.0);
    let mut rng = StdRng::seed_from_u64(5);

    let a = "ABCDEFGHIJK";
    let b = "KJIHGFEDCBA";
    for _ in 0..300 {
        let child = algo.breed(a, b, &mut rng).unwrap();
        for (i, c) in child.chars().enumerate() {
            let from_a = a.chars().nth(i).unwrap();
            let from_b = b.chars().nth(i).unwrap();
            assert!(
                c == from_a || c == from_b,
                "position {} got '{}', not from either parent",
                i,
                c
            );
        }
    }
}

#[test]
fn test_full_rate_draws_from_mutator_distribution() {
    // With rate 1.0 every position is resampled uniformly from the
    // vocabulary, so identical parents must still yield many differing
    // symbols. Expected divergence per position is 10/11; over 1000
    // trials a count below 700 would be far outside any plausible run.
    let algo = create_algorithm(1.0);
    let mut rng = StdRng::seed_from_u64(17);

    let trials = 1000;
    let mut diverged = 0;
    for _ in 0..trials {
        let child = algo.breed("AAA", "AAA", &mut rng).unwrap();
        if child.chars().next().unwrap() != 'A' {
            diverged += 1;
        }
    }
    assert!(
        diverged > 700,
        "only {}/{} positions diverged under full mutation",
        diverged,
        trials
    );
}

#[test]
fn test_seeded_breeding_is_reproducible() {
    let algo = create_algorithm(0.3);

    let mut first = StdRng::seed_from_u64(1234);
    let mut second = StdRng::seed_from_u64(1234);
    let child_a = algo.breed("ABCDE", "KJIHG", &mut first).unwrap();
    let child_b = algo.breed("ABCDE", "KJIHG", &mut second).unwrap();
    assert_eq!(child_a, child_b);
}

#[test]
fn test_parent_length_mismatch() {
    let algo = create_algorithm(0.3);
    let mut rng = StdRng::seed_from_u64(2);

    match algo.breed("ABC", "AB", &mut rng) {
        Err(FloragenError::LengthMismatch { expected, actual }) => {
            assert_eq!(expected, 3);
            assert_eq!(actual, 2);
        }
        other => panic!("expected LengthMismatch, got {:?}", other),
    }
}

#[test]
fn test_parent_outside_vocabulary() {
    let algo = create_algorithm(0.3);
    let mut rng = StdRng::seed_from_u64(2);

    assert!(matches!(
        algo.breed("AXC", "ABC", &mut rng),
        Err(FloragenError::InvalidSymbol { symbol: 'X', position: 1 })
    ));
}
