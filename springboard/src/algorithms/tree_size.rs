//! Counting nodes: two self-calls per internal node
//!
//! Continuation passing only puts one call in tail position. The other one
//! has to be made from inside the continuation, and where it runs decides the
//! stack profile:
//!
//! * [`tree_size`] runs the right subtree through a nested driver run inside
//!   the continuation. Left spines of any depth are fine; native depth still
//!   grows with the number of right turns.
//! * [`tree_size_fully_thunked`] returns the right subtree call as a thunk
//!   from the continuation. Nothing grows the native stack, for any shape.

use crate::continuation::Continuation;
use crate::thunk::Bounce;
use crate::{trampoline, Driver, SpringResult};
use crate::tree::Tree;
use std::fmt;
use std::str::FromStr;

/// Where the right-subtree call is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeSizeStrategy {
    /// Nested driver inside the continuation
    #[default]
    Asymmetric,
    /// Thunk returned from the continuation
    FullyThunked,
}

impl fmt::Display for TreeSizeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeSizeStrategy::Asymmetric => write!(f, "asymmetric"),
            TreeSizeStrategy::FullyThunked => write!(f, "fully-thunked"),
        }
    }
}

impl FromStr for TreeSizeStrategy {
    type Err = crate::SpringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asymmetric" => Ok(TreeSizeStrategy::Asymmetric),
            "fully-thunked" => Ok(TreeSizeStrategy::FullyThunked),
            other => Err(crate::SpringError::invalid_input(format!(
                "unknown tree size strategy '{}', expected 'asymmetric' or 'fully-thunked'",
                other
            ))),
        }
    }
}

/// Number of nodes in `tree`
pub fn tree_size<T>(tree: &Tree<T>) -> usize {
    let driver = Driver::new();
    match driver.run(tree_size_bounce(tree, TreeSizeStrategy::Asymmetric, &driver)) {
        Ok(Ok(size)) => size,
        Ok(Err(e)) | Err(e) => unreachable!("a driver without limits failed: {}", e),
    }
}

/// Number of nodes in `tree`, with no native recursion on either branch
pub fn tree_size_fully_thunked<T>(tree: &Tree<T>) -> usize {
    trampoline(size_both_thunked(tree, Continuation::identity()))
}

/// First step of a size computation with the chosen strategy
///
/// The asymmetric strategy resolves right subtrees in runs nested in the one
/// `driver` is running, so their steps count toward its limits. A limit
/// tripped in a nested run ends the whole computation with `Err`.
pub fn tree_size_bounce<'a, T>(
    tree: &'a Tree<T>,
    strategy: TreeSizeStrategy,
    driver: &'a Driver,
) -> Bounce<'a, SpringResult<usize>> {
    let finish = Continuation::new(|size: usize| Bounce::Done(Ok(size)));
    match strategy {
        TreeSizeStrategy::Asymmetric => tree_size_cps(tree, driver, finish),
        TreeSizeStrategy::FullyThunked => size_both_thunked(tree, finish),
    }
}

/// Size in continuation-passing style, left subtree in tail position and
/// right subtree resolved by a run nested in `driver`'s current run
pub fn tree_size_cps<'a, T, R: 'a>(
    tree: &'a Tree<T>,
    driver: &'a Driver,
    k: Continuation<'a, usize, SpringResult<R>>,
) -> Bounce<'a, SpringResult<R>> {
    match tree.children() {
        None => k.bounce(1),
        Some((left, right)) => {
            let k = Continuation::new(move |left_size: usize| {
                let finish = Continuation::new(|size: usize| Bounce::Done(Ok(size)));
                match driver
                    .run_nested(tree_size_cps(right, driver, finish))
                    .and_then(|size| size)
                {
                    Ok(right_size) => k.bounce(left_size + right_size + 1),
                    Err(e) => Bounce::fail(e),
                }
            });
            Bounce::call(move |(left, k)| tree_size_cps(left, driver, k), (left, k))
        }
    }
}
fn size_both_thunked<'a, T, R: 'a>(tree: &'a Tree<T>, k: Continuation<'a, usize, R>) -> Bounce<'a, R> {
    match tree.children() {
        None => k.bounce(1),
        Some((left, right)) => {
            let k = Continuation::new(move |left_size: usize| {
                let k = k.compose(move |right_size: usize| left_size + right_size + 1);
                Bounce::call(|(right, k)| size_both_thunked(right, k), (right, k))
            });
            Bounce::call(|(left, k)| size_both_thunked(left, k), (left, k))
        }
    }
}
