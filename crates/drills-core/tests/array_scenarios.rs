//! Bounded array integration tests
//!
//! Covers the walkthrough scenario and randomized checks of the
//! insert/delete round-trip and the search reordering rules.

use drills_core::{ArrayError, BoundedArray, SearchStrategy};
use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;

const ITERATIONS: usize = 500;

fn random_array(rng: &mut StdRng) -> BoundedArray {
    let capacity = rng.gen_range(1..=16);
    let len = rng.gen_range(0..capacity);
    let values: Vec<i32> = (0..len).map(|_| rng.gen_range(-5..=5)).collect();
    BoundedArray::from_slice(&values, capacity).unwrap()
}

// =============================================================================
// Scenario
// =============================================================================

#[test]
fn test_append_insert_delete_scenario() {
    let mut arr = BoundedArray::from_slice(&[1, 3, 5, 6, 7], 10).unwrap();

    arr.append(9).unwrap();
    assert_eq!(arr.as_slice(), &[1, 3, 5, 6, 7, 9]);
    assert_eq!(arr.len(), 6);

    arr.insert(3, 22).unwrap();
    assert_eq!(arr.as_slice(), &[1, 3, 5, 22, 6, 7, 9]);
    assert_eq!(arr.len(), 7);

    assert_eq!(arr.delete(3), Ok(22));
    assert_eq!(arr.as_slice(), &[1, 3, 5, 6, 7, 9]);
    assert_eq!(arr.len(), 6);
}

#[test]
fn test_append_until_full() {
    let mut arr = BoundedArray::new(4);
    for value in 0..4 {
        arr.append(value).unwrap();
    }
    assert!(arr.is_full());

    let snapshot = arr.clone();
    assert_eq!(
        arr.append(99),
        Err(ArrayError::CapacityExceeded { capacity: 4 })
    );
    assert_eq!(arr, snapshot);
    assert_eq!(arr.len(), arr.capacity());
}

// =============================================================================
// Randomized properties
// =============================================================================

#[test]
fn test_insert_then_delete_round_trip() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..ITERATIONS {
        let original = random_array(&mut rng);
        let index = rng.gen_range(0..=original.len());
        let value = rng.gen_range(-100..=100);

        let mut arr = original.clone();
        arr.insert(index, value).unwrap();
        assert_eq!(arr.len(), original.len() + 1);
        assert_eq!(arr.delete(index), Ok(value));
        assert_eq!(arr, original);
    }
}

#[test]
fn test_linear_search_returns_smallest_index() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..ITERATIONS {
        let arr = random_array(&mut rng);
        let key = rng.gen_range(-6..=6);
        let expected = arr.as_slice().iter().position(|&v| v == key);
        assert_eq!(arr.linear_search(key), expected);
    }
}

#[test]
fn test_transposition_moves_hit_one_slot_forward() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..ITERATIONS {
        let mut arr = random_array(&mut rng);
        let before = arr.clone();
        let key = rng.gen_range(-6..=6);

        let first = arr.transposition_search(key);
        match first {
            Some(i) if i > 0 => {
                assert_eq!(arr.get(i - 1), Some(key));
                assert_eq!(arr.get(i), before.get(i - 1));
            }
            Some(_) => assert_eq!(arr, before),
            None => {
                assert_eq!(arr, before);
                continue;
            }
        }

        let second = arr.transposition_search(key).unwrap();
        assert!(second <= first.unwrap());
    }
}

#[test]
fn test_move_to_front_places_hit_first() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..ITERATIONS {
        let mut arr = random_array(&mut rng);
        let before = arr.clone();
        let key = rng.gen_range(-6..=6);

        match arr.move_to_front_search(key) {
            Some(i) => {
                assert_eq!(arr.get(0), Some(key));
                assert_eq!(arr.get(i), before.get(0));
                assert_eq!(arr.move_to_front_search(key), Some(0));
            }
            None => assert_eq!(arr, before),
        }
    }
}

#[test]
fn test_binary_search_matches_linear_on_sorted() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..ITERATIONS {
        let mut values: Vec<i32> = (0..rng.gen_range(0..12))
            .map(|_| rng.gen_range(-8..=8))
            .collect();
        values.sort_unstable();
        let arr = BoundedArray::from_slice(&values, 12).unwrap();
        assert!(arr.is_sorted());

        let key = rng.gen_range(-9..=9);
        assert_eq!(arr.binary_search(key), arr.linear_search(key));
    }
}

#[test]
fn test_every_strategy_agrees_on_presence() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..ITERATIONS {
        let arr = random_array(&mut rng);
        let key = rng.gen_range(-6..=6);
        let present = arr.linear_search(key).is_some();

        for strategy in [
            SearchStrategy::Linear,
            SearchStrategy::Transposition,
            SearchStrategy::MoveToFront,
        ] {
            let mut copy = arr.clone();
            assert_eq!(copy.search(key, strategy).is_some(), present);
            assert_eq!(copy.len(), arr.len());
        }
    }
}
