//! Depth-first numbering
//!
//! Leaves are numbered `1..=k` from left to right. Every node of the new tree
//! carries the range of leaf numbers below it, and a side table maps each
//! leaf payload to its number. With both, "is leaf `x` under node `n`" is a
//! table lookup and a range check instead of a tree walk.
//!
//! The counter and the table are threaded through the continuations as a
//! value; each step hands an updated copy to the next one.

use crate::continuation::Continuation;
use crate::thunk::Bounce;
use crate::trampoline;
use crate::tree::Tree;
use std::collections::BTreeMap;

/// Inclusive range of leaf numbers covered by a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DfsRange {
    pub low: usize,
    pub high: usize,
}

impl DfsRange {
    fn single(number: usize) -> Self {
        Self {
            low: number,
            high: number,
        }
    }

    pub fn contains(&self, number: usize) -> bool {
        self.low <= number && number <= self.high
    }

    pub fn leaf_count(&self) -> usize {
        self.high - self.low + 1
    }
}

/// A node payload annotated with its leaf range
#[derive(Debug, Clone, PartialEq)]
pub struct Numbered<T> {
    pub value: T,
    pub range: DfsRange,
}

type Annotated<T> = (Tree<Numbered<T>>, BTreeMap<T, usize>);

/// Counter and table threaded through the traversal
struct Numbering<T> {
    next: usize,
    table: BTreeMap<T, usize>,
}

impl<T: Ord + Clone> Numbering<T> {
    fn start() -> Self {
        Self {
            next: 1,
            table: BTreeMap::new(),
        }
    }

    fn assign(mut self, leaf: &T) -> (usize, Self) {
        let number = self.next;
        self.table.insert(leaf.clone(), number);
        self.next += 1;
        (number, self)
    }
}

/// Number the leaves of `tree` and annotate every node with its range
///
/// If two leaves share a payload the table keeps the later number.
pub fn depth_first_numbers<T: Clone + Ord>(tree: &Tree<T>) -> Annotated<T> {
    trampoline(depth_first_numbers_bounce(tree))
}

pub fn depth_first_numbers_bounce<T: Clone + Ord>(tree: &Tree<T>) -> Bounce<'_, Annotated<T>> {
    let finish = Continuation::new(|(numbered, state): (Tree<Numbered<T>>, Numbering<T>)| {
        Bounce::Done((numbered, state.table))
    });
    number_cps(tree, Numbering::start(), finish)
}

/// Is the leaf with payload `leaf` somewhere below (or equal to) `node`?
pub fn in_subtree<T: Ord>(table: &BTreeMap<T, usize>, leaf: &T, node: &Tree<Numbered<T>>) -> bool {
    table
        .get(leaf)
        .is_some_and(|number| node.value().range.contains(*number))
}

fn number_cps<'a, T, R>(
    tree: &'a Tree<T>,
    state: Numbering<T>,
    k: Continuation<'a, (Tree<Numbered<T>>, Numbering<T>), R>,
) -> Bounce<'a, R>
where
    T: Clone + Ord + 'a,
    R: 'a,
{
    match tree.children() {
        None => {
            let (number, state) = state.assign(tree.value());
            let leaf = Tree::leaf(Numbered {
                value: tree.value().clone(),
                range: DfsRange::single(number),
            });
            k.bounce((leaf, state))
        }
        Some((left, right)) => {
            let value = tree.value().clone();
            let k = Continuation::new(
                move |(numbered_left, state): (Tree<Numbered<T>>, Numbering<T>)| {
                    let k = k.compose(
                        move |(numbered_right, state): (Tree<Numbered<T>>, Numbering<T>)| {
                            let range = DfsRange {
                                low: numbered_left.value().range.low,
                                high: numbered_right.value().range.high,
                            };
                            let node = Tree::node(Numbered { value, range }, numbered_left, numbered_right);
                            (node, state)
                        },
                    );
                    Bounce::call(|(right, state, k)| number_cps(right, state, k), (right, state, k))
                },
            );
            Bounce::call(|(left, state, k)| number_cps(left, state, k), (left, state, k))
        }
    }
}
