// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Cross-strategy properties: every strategy must agree with the brute-force
//! oracle on random inputs and on the documented scenarios.

use maxpair::{
    BruteForceSelector, LinearScanSelector, PairwiseError, PairwiseSelector, PartitionSelector,
    Strategy, TournamentSelector, max_pairwise_naive,
};
use maxpair_core::select::StdSelect;
use rand::{Rng, SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;

fn all_products(sequence: &[u64]) -> Vec<(String, Result<u64, PairwiseError<u64>>)> {
    let mut results = Vec::new();
    results.push((
        "brute-force".to_string(),
        BruteForceSelector::new().max_pairwise_product(sequence),
    ));
    results.push((
        "linear-scan".to_string(),
        LinearScanSelector::new().max_pairwise_product(sequence),
    ));
    results.push((
        "partition(introselect)".to_string(),
        PartitionSelector::new().max_pairwise_product(sequence),
    ));
    results.push((
        "partition(std)".to_string(),
        PartitionSelector::with_select(StdSelect).max_pairwise_product(sequence),
    ));
    results.push((
        "tournament".to_string(),
        TournamentSelector::new().max_pairwise_product(sequence),
    ));
    results
}

fn assert_all_equal(sequence: &[u64], expected: u64) {
    for (name, result) in all_products(sequence) {
        assert_eq!(result, Ok(expected), "{} disagrees", name);
    }
}

fn random_sequence(rng: &mut ChaCha8Rng, len: usize, max_value: u64) -> Vec<u64> {
    (0..len).map(|_| rng.random_range(0..=max_value)).collect()
}

#[test]
fn test_concrete_scenarios() {
    assert_all_equal(&[1, 2, 3], 6);
    assert_all_equal(&[100, 1, 1, 100], 10_000);
    assert_all_equal(&[0, 0, 0], 0);
    assert_all_equal(&[5, 5, 3], 25);
}

#[test]
fn test_large_range_does_not_overflow() {
    let sequence: Vec<u64> = (1..=200_000).collect();
    for strategy in [Strategy::LinearScan, Strategy::Partition, Strategy::Tournament] {
        assert_eq!(
            strategy.max_pairwise_product(&sequence),
            Ok(200_000 * 199_999),
            "{}",
            strategy
        );
    }
}

#[test]
fn test_single_element_is_a_precondition_violation() {
    for (name, result) in all_products(&[7]) {
        assert!(
            matches!(result, Err(PairwiseError::InsufficientLength(ref e)) if e.len == 1),
            "{} returned {:?}",
            name,
            result
        );
    }
}

#[test]
fn test_agreement_with_oracle_on_random_inputs() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..200 {
        let len = rng.random_range(2..=60);
        let max_value = *[1_u64, 10, 1_000, 100_000].get(rng.random_range(0..4)).unwrap();
        let sequence = random_sequence(&mut rng, len, max_value);
        let expected = max_pairwise_naive(&sequence).unwrap();
        assert_all_equal(&sequence, expected);
    }
}

#[test]
fn test_agreement_with_oracle_on_large_inputs() {
    let mut rng = ChaCha8Rng::seed_from_u64(1234);
    for len in [500_usize, 2_000] {
        let sequence = random_sequence(&mut rng, len, 1_000_000);
        let expected = max_pairwise_naive(&sequence).unwrap();
        assert_all_equal(&sequence, expected);
    }
}

#[test]
fn test_permutation_invariance() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut sequence = random_sequence(&mut rng, 300, 50);
    let expected = max_pairwise_naive(&sequence).unwrap();
    for _ in 0..20 {
        sequence.shuffle(&mut rng);
        assert_all_equal(&sequence, expected);
    }
}

#[test]
fn test_minimal_input_in_both_orders() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    for _ in 0..50 {
        let a = rng.random_range(0..=1_000_000_u64);
        let b = rng.random_range(0..=1_000_000_u64);
        assert_all_equal(&[a, b], a * b);
        assert_all_equal(&[b, a], a * b);
    }
}

#[test]
fn test_monotonic_scaling() {
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let sequence = random_sequence(&mut rng, 100, 1_000);
    let before = max_pairwise_naive(&sequence).unwrap();
    let max = *sequence.iter().max().unwrap();

    for new_max in [max, max + 1, max * 2 + 3] {
        let index = rng.random_range(0..sequence.len());
        let mut raised = sequence.clone();
        raised[index] = new_max;

        for strategy in Strategy::ALL {
            let after = strategy.max_pairwise_product(&raised).unwrap();
            if new_max > max {
                assert!(after > before || (after == before && before == 0), "{}", strategy);
            } else {
                assert!(after >= before, "{}", strategy);
            }
        }
    }
}

#[test]
fn test_signed_elements() {
    let sequence = [3_i64, 0, 12, 7, 12];
    for strategy in Strategy::ALL {
        assert_eq!(strategy.max_pairwise_product(&sequence), Ok(144), "{}", strategy);
    }

    let negative = [3_i64, -2, 4];
    for strategy in Strategy::ALL {
        assert!(
            matches!(
                strategy.max_pairwise_product(&negative),
                Err(PairwiseError::NegativeElement(ref e)) if e.index == 1 && e.value == -2
            ),
            "{}",
            strategy
        );
    }
}

#[test]
fn test_narrow_type_overflow_is_an_error() {
    let sequence: Vec<u32> = (1..=200_000).collect();
    for strategy in [Strategy::LinearScan, Strategy::Partition, Strategy::Tournament] {
        assert!(
            matches!(
                strategy.max_pairwise_product(&sequence),
                Err(PairwiseError::Overflow(ref e)) if e.first == 200_000 && e.second == 199_999
            ),
            "{}",
            strategy
        );
    }

    let wide: Vec<u128> = sequence.iter().map(|&x| x as u128).collect();
    assert_eq!(Strategy::LinearScan.max_pairwise_product(&wide), Ok(39_999_800_000));
}
