//! Shared fixtures for integration tests; each test binary uses a subset.
#![allow(dead_code)]

use num_bigint::BigUint;
use springboard::Tree;
use std::thread;

/// Far too small for a million native recursive calls
pub const SMALL_STACK: usize = 256 * 1024;

pub fn on_small_stack<T, F>(f: F) -> T
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    thread::Builder::new()
        .stack_size(SMALL_STACK)
        .spawn(f)
        .expect("failed to spawn test thread")
        .join()
        .expect("test thread panicked")
}

pub fn direct_factorial(n: u64) -> BigUint {
    (1..=n).fold(BigUint::from(1u32), |acc, i| acc * i)
}

pub fn direct_tree_size<T>(tree: &Tree<T>) -> usize {
    match tree.children() {
        None => 1,
        Some((left, right)) => 1 + direct_tree_size(left) + direct_tree_size(right),
    }
}

/// Tree shapes for property tests; `Tree` itself is not `Clone`
#[derive(Debug, Clone)]
pub enum Shape {
    Leaf,
    Node(Box<Shape>, Box<Shape>),
}

impl Shape {
    pub fn build(&self) -> Tree<String> {
        let mut next = 0;
        self.build_from(&mut next)
    }

    fn build_from(&self, next: &mut usize) -> Tree<String> {
        match self {
            Shape::Leaf => {
                let name = format!("leaf{}", next);
                *next += 1;
                Tree::leaf(name)
            }
            Shape::Node(left, right) => {
                let left = left.build_from(next);
                let right = right.build_from(next);
                let name = format!("node{}", next);
                *next += 1;
                Tree::node(name, left, right)
            }
        }
    }
}

pub fn ceil_log2(n: usize) -> u32 {
    if n <= 1 {
        0
    } else {
        usize::BITS - (n - 1).leading_zeros()
    }
}
