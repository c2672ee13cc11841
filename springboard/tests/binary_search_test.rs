mod common;

use common::ceil_log2;
use springboard::algorithms::binary_search;
use springboard::algorithms::search::binary_search_bounce;
use springboard::{Driver, DriverLimits};

/// Runs under a step limit so a window that stops shrinking fails instead of hanging
fn bounded_search(items: &[i32], needle: i32) -> (bool, u64) {
    let bound = u64::from(ceil_log2(items.len()) + 1);
    let driver = Driver::with_limits(DriverLimits::new().with_max_steps(bound));
    let (found, stats) = driver
        .run_with_stats(binary_search_bounce(items, &needle))
        .unwrap_or_else(|e| panic!("search for {} in {:?} did not finish: {}", needle, items, e));
    (found, stats.steps)
}

#[test]
fn test_finds_every_element_of_one_to_five() {
    let items = [1, 2, 3, 4, 5];
    for needle in 1..=5 {
        assert!(binary_search(&items, &needle), "expected to find {}", needle);
    }
}

#[test]
fn test_rejects_values_outside_one_to_five() {
    let items = [1, 2, 3, 4, 5];
    assert!(!binary_search(&items, &0));
    assert!(!binary_search(&items, &6));
}

#[test]
fn test_boundary_values_terminate_within_bound() {
    let items = [1, 2, 3, 4, 5];
    for needle in [0, 1, 5, 6] {
        let (found, steps) = bounded_search(&items, needle);
        assert_eq!(found, (1..=5).contains(&needle));
        assert!(steps <= 4, "{} took {} steps", needle, steps);
    }
}

#[test]
fn test_step_bound_holds_for_many_lengths() {
    for len in 0..=130usize {
        // Even values only, so every odd value probes a gap.
        let items: Vec<i32> = (0..len as i32).map(|i| i * 2).collect();
        for needle in -1..=(2 * len as i32) {
            let (found, _) = bounded_search(&items, needle);
            assert_eq!(found, items.binary_search(&needle).is_ok());
        }
    }
}

#[test]
fn test_two_element_windows_terminate() {
    let (found, _) = bounded_search(&[1, 2], 2);
    assert!(found);
    let (found, _) = bounded_search(&[1, 2], 3);
    assert!(!found);
    let (found, _) = bounded_search(&[1, 2], 0);
    assert!(!found);
}

#[test]
fn test_empty_and_single_element_inputs() {
    assert!(!binary_search(&[] as &[i32], &1));
    let (_, steps) = bounded_search(&[], 1);
    assert_eq!(steps, 0);

    assert!(binary_search(&[7], &7));
    assert!(!binary_search(&[7], &8));
    assert!(!binary_search(&[7], &6));
}

#[test]
fn test_works_for_other_ordered_types() {
    let words = ["apple", "banana", "cherry", "date"];
    assert!(binary_search(&words, &"cherry"));
    assert!(!binary_search(&words, &"blueberry"));
}
