//! Recursive algorithms rewritten for the trampoline
//!
//! Every algorithm comes as a plain function that drives itself, and as a
//! `*_bounce` constructor that returns the first step so a configured
//! [`Driver`](crate::Driver) can run it and report statistics.
//!
//! * [`search`]: linear search (one self-call) and binary search (shrinking
//!   index window)
//! * [`factorial`]: accumulator and continuation versions
//! * [`tree_size`]: two self-calls per node
//! * [`duplicates`]: accumulator building a composite result
//! * [`numbering`]: a new annotated tree plus a lookup table

pub mod duplicates;
pub mod factorial;
pub mod numbering;
pub mod search;
pub mod tree_size;

pub use duplicates::remove_adjacent_duplicates;
pub use factorial::{factorial, factorial_by_continuation};
pub use numbering::{depth_first_numbers, in_subtree, DfsRange, Numbered};
pub use search::{binary_search, linear_search};
pub use tree_size::{tree_size, tree_size_fully_thunked, TreeSizeStrategy};
