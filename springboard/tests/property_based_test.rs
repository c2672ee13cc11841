mod common;

use common::{direct_factorial, direct_tree_size, Shape};
use proptest::prelude::*;
use springboard::algorithms::{
    binary_search, depth_first_numbers, factorial, factorial_by_continuation, linear_search,
    remove_adjacent_duplicates, tree_size, tree_size_fully_thunked, Numbered,
};
use springboard::{NextList, SliceView, Tree};

fn shape() -> impl Strategy<Value = Shape> {
    Just(Shape::Leaf).prop_recursive(8, 128, 2, |inner| {
        (inner.clone(), inner).prop_map(|(left, right)| Shape::Node(Box::new(left), Box::new(right)))
    })
}

/// Every internal range spans exactly its children's ranges
fn ranges_are_consistent(tree: &Tree<Numbered<String>>) -> bool {
    let mut stack = vec![tree];
    while let Some(node) = stack.pop() {
        if let Some((left, right)) = node.children() {
            let range = node.value().range;
            if range.low != left.value().range.low
                || range.high != right.value().range.high
                || left.value().range.high + 1 != right.value().range.low
            {
                return false;
            }
            stack.push(left);
            stack.push(right);
        } else if node.value().range.low != node.value().range.high {
            return false;
        }
    }
    true
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 100,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_linear_search_matches_contains(
        items in prop::collection::vec(-50i32..50, 0..200),
        needle in -60i32..60,
    ) {
        let expected = items.contains(&needle);
        let list: NextList<i32> = items.iter().copied().collect();
        prop_assert_eq!(linear_search(list, &needle), expected);
        prop_assert_eq!(linear_search(SliceView::new(&items), &needle), expected);
    }

    #[test]
    fn prop_binary_search_matches_std(
        mut items in prop::collection::vec(-500i32..500, 0..300),
        needle in -600i32..600,
    ) {
        items.sort_unstable();
        prop_assert_eq!(binary_search(&items, &needle), items.binary_search(&needle).is_ok());
    }

    #[test]
    fn prop_dedup_matches_vec_dedup(items in prop::collection::vec(0u8..4, 0..300)) {
        let mut expected = items.clone();
        expected.dedup();
        prop_assert_eq!(remove_adjacent_duplicates(SliceView::new(&items)), expected.clone());

        let list: NextList<u8> = items.into_iter().collect();
        prop_assert_eq!(remove_adjacent_duplicates(list), expected);
    }

    #[test]
    fn prop_factorial_versions_agree(n in 0u64..300) {
        let expected = direct_factorial(n);
        prop_assert_eq!(factorial(n), expected.clone());
        prop_assert_eq!(factorial_by_continuation(n), expected);
    }

    #[test]
    fn prop_tree_size_matches_direct_recursion(shape in shape()) {
        let tree = shape.build();
        let expected = direct_tree_size(&tree);
        prop_assert_eq!(tree_size(&tree), expected);
        prop_assert_eq!(tree_size_fully_thunked(&tree), expected);
    }

    #[test]
    fn prop_numbering_covers_every_leaf(shape in shape()) {
        let tree = shape.build();
        let leaves = (direct_tree_size(&tree) + 1) / 2;
        let (numbered, table) = depth_first_numbers(&tree);

        prop_assert_eq!(table.len(), leaves);
        prop_assert_eq!(numbered.value().range.low, 1);
        prop_assert_eq!(numbered.value().range.high, leaves);
        prop_assert!(ranges_are_consistent(&numbered));
    }
}
