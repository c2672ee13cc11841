//! Immutable binary trees
//!
//! A node either has no children (a leaf) or exactly two. There are no
//! setters: an algorithm that annotates a tree builds a new one.

use crate::{SpringError, SpringResult};
use std::fmt;

/// Largest `levels` accepted by [`Tree::balanced`]
pub const MAX_BALANCED_LEVELS: u32 = 24;

type Children<T> = Option<(Box<Tree<T>>, Box<Tree<T>>)>;

pub struct Tree<T> {
    value: T,
    children: Children<T>,
}

impl<T> Tree<T> {
    pub fn leaf(value: T) -> Self {
        Self {
            value,
            children: None,
        }
    }

    pub fn node(value: T, left: Tree<T>, right: Tree<T>) -> Self {
        Self {
            value,
            children: Some((Box::new(left), Box::new(right))),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Both children of an internal node, `None` for a leaf
    pub fn children(&self) -> Option<(&Tree<T>, &Tree<T>)> {
        self.children
            .as_ref()
            .map(|(left, right)| (left.as_ref(), right.as_ref()))
    }

    pub fn left(&self) -> Option<&Tree<T>> {
        self.children().map(|(left, _)| left)
    }

    pub fn right(&self) -> Option<&Tree<T>> {
        self.children().map(|(_, right)| right)
    }
}

impl Tree<String> {
    /// A perfectly balanced tree with `levels` levels and `2^levels - 1` nodes
    ///
    /// Leaves are named `leaf0`, `leaf1`, ... from left to right and internal
    /// nodes `node0`, `node1`, ... bottom-up.
    pub fn balanced(levels: u32) -> SpringResult<Self> {
        if levels == 0 || levels > MAX_BALANCED_LEVELS {
            return Err(SpringError::invalid_input(format!(
                "a balanced tree needs between 1 and {} levels, got {}",
                MAX_BALANCED_LEVELS, levels
            )));
        }

        let leaf_count = 1usize << (levels - 1);
        let mut layer: Vec<Tree<String>> = (0..leaf_count)
            .map(|i| Tree::leaf(format!("leaf{}", i)))
            .collect();

        let mut next_node = 0;
        while layer.len() > 1 {
            let mut parents = Vec::with_capacity(layer.len() / 2);
            let mut nodes = layer.into_iter();
            while let (Some(left), Some(right)) = (nodes.next(), nodes.next()) {
                parents.push(Tree::node(format!("node{}", next_node), left, right));
                next_node += 1;
            }
            layer = parents;
        }

        layer
            .pop()
            .ok_or_else(|| SpringError::invalid_input("balanced tree construction produced no root"))
    }

    /// `internal` nodes, each with a leaf on the right and the rest of the
    /// spine on the left
    pub fn left_spine(internal: usize) -> Self {
        let mut tree = Tree::leaf("leaf0".to_string());
        for i in 0..internal {
            let right = Tree::leaf(format!("leaf{}", i + 1));
            tree = Tree::node(format!("node{}", i), tree, right);
        }
        tree
    }

    /// Mirror image of [`Tree::left_spine`]
    pub fn right_spine(internal: usize) -> Self {
        let mut tree = Tree::leaf("leaf0".to_string());
        for i in 0..internal {
            let left = Tree::leaf(format!("leaf{}", i + 1));
            tree = Tree::node(format!("node{}", i), left, tree);
        }
        tree
    }
}

impl<T> Drop for Tree<T> {
    // Detach subtrees onto a work list so deep trees drop without recursion.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Tree<T>>> = Vec::new();
        if let Some((left, right)) = self.children.take() {
            pending.push(left);
            pending.push(right);
        }
        while let Some(mut node) = pending.pop() {
            if let Some((left, right)) = node.children.take() {
                pending.push(left);
                pending.push(right);
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("value", &self.value)
            .field("leaf", &self.is_leaf())
            .finish_non_exhaustive()
    }
}
